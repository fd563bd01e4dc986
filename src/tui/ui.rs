//! UI rendering for the `DashboardApp`.

use super::app::DashboardApp;
use super::events::{Event, EventHandler, handle_key_event, handle_mouse_event};
use super::theme::{
    FooterHints, Styles, Theme, badge, button, colors, render_footer_hints, set_theme,
};
use super::view::{
    BadgeVariant, DashboardView, DocumentRow, HeaderView, IntegrationCard, PortfolioRow,
    TabContent, WorkflowRow,
};
use super::widgets::{
    self, AllocationBar, MIN_HEIGHT, MIN_WIDTH, check_terminal_size, render_size_warning,
};
use crate::config::TuiConfig;
use crate::model::{MetricCard, ServiceId};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};
use std::io::{self, stdout};
use std::time::Duration;

/// Run the dashboard TUI until the user quits.
pub fn run_dashboard_tui(app: &mut DashboardApp, config: &TuiConfig) -> io::Result<()> {
    set_theme(Theme::from_name(&config.theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    if config.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(config.tick_rate_ms));
    tracing::debug!(theme = %config.theme, "dashboard started");

    let result = event_loop(&mut terminal, app, &events);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    if config.mouse_enabled {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut DashboardApp,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function.
pub fn render(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let view = app.render();

    // Main layout: header, integration grid, tabs, content, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(7), // Integrations
            Constraint::Length(2), // Tabs
            Constraint::Min(8),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], &view.header);
    render_integrations(frame, chunks[1], &view.integrations, app.focused_service);
    render_tabs(frame, chunks[2], &view);
    render_content(frame, chunks[3], &view.content);
    render_footer(frame, chunks[4], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, header: &HeaderView) {
    let scheme = colors();
    let lines = vec![
        Line::from(vec![
            Span::styled(header.title, Styles::header_title()),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", header.badge),
                Style::default().fg(scheme.badge_fg_dark).bg(scheme.success).bold(),
            ),
            Span::raw("  "),
            button("Settings", BadgeVariant::Outline, false),
        ]),
        Line::styled(header.subtitle, Styles::text_muted()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_integrations(
    frame: &mut Frame,
    area: Rect,
    cards: &[IntegrationCard],
    focused: ServiceId,
) {
    let outer = Block::default()
        .title(" API Integration Status ")
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Connect your services to unlock full functionality",
            Styles::text_muted(),
        )),
        rows[0],
    );

    let count = cards.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(rows[1]);

    for (card, slot) in cards.iter().zip(columns.iter()) {
        let is_focused = card.service == focused;
        let block = Block::default()
            .title(format!(" {} ", card.label))
            .borders(Borders::ALL)
            .border_style(if is_focused {
                Styles::border_focused()
            } else {
                Styles::border()
            });
        let lines = vec![
            Line::from(badge(card.status_label, card.status_variant)),
            Line::from(button(card.button_label, card.button_variant, is_focused)),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), *slot);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let scheme = colors();
    let titles: Vec<Line> = view
        .tabs
        .iter()
        .map(|t| {
            let (key_style, title_style) = if t.active {
                (
                    Style::default().fg(scheme.accent).bold(),
                    Style::default().fg(scheme.accent).bold(),
                )
            } else {
                (
                    Style::default().fg(scheme.muted),
                    Style::default().fg(scheme.text_muted),
                )
            };
            Line::from(vec![
                Span::styled(format!("[{}]", t.tab.shortcut()), key_style),
                Span::styled(format!(" {} ", t.title), title_style),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Styles::border()),
        )
        .highlight_style(Style::default().fg(scheme.accent))
        .select(view.active_tab().index())
        .divider(Span::styled(" │ ", Style::default().fg(scheme.muted)));

    frame.render_widget(tabs, area);
}

fn render_content(frame: &mut Frame, area: Rect, content: &TabContent) {
    let (title, description) = content.heading();
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = match description {
        Some(desc) => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(1)])
                .split(inner);
            frame.render_widget(
                Paragraph::new(Line::styled(desc, Styles::text_muted())),
                split[0],
            );
            split[1]
        }
        None => inner,
    };

    match content {
        TabContent::Dashboard(cards) => render_metric_cards(frame, body, cards),
        TabContent::Portfolio(rows) => render_portfolio(frame, body, rows),
        TabContent::Documents(rows) => render_documents(frame, body, rows),
        TabContent::AiInsights(insights) => render_insights(frame, body, insights),
        TabContent::Automation(rows) => render_workflows(frame, body, rows),
    }
}

fn render_metric_cards(frame: &mut Frame, area: Rect, cards: &[MetricCard]) {
    let scheme = colors();
    let count = cards.len().max(1) as u32;
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, slot) in cards.iter().zip(slots.iter()) {
        let lines = vec![
            Line::from(""),
            Line::styled(
                card.value.clone(),
                Style::default().fg(scheme.metric_color(card.tone)).bold(),
            ),
            Line::styled(card.caption.clone(), Styles::text_muted()),
        ];
        let para = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", card.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(scheme.metric_color(card.tone))),
            )
            .alignment(Alignment::Center);
        frame.render_widget(para, *slot);
    }
}

fn render_portfolio(frame: &mut Frame, area: Rect, rows: &[PortfolioRow]) {
    let scheme = colors();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|_| Constraint::Length(2)))
        .split(area);

    for (row, slot) in rows.iter().zip(slots.iter()) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*slot);

        let name_width = (parts[0].width as usize).saturating_sub(
            row.value_label.len() + row.change_label.len() + 3,
        );
        let line = Line::from(vec![
            Span::styled(
                format!(
                    "{:<width$}",
                    widgets::truncate_str(&row.name, name_width),
                    width = name_width
                ),
                Styles::text().bold(),
            ),
            Span::styled(row.value_label.clone(), Styles::text().bold()),
            Span::raw("  "),
            Span::styled(
                row.change_label.clone(),
                Style::default().fg(scheme.change_color(row.gain)),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), parts[0]);
        let bar_color = if row.ratio > 1.0 {
            scheme.warning
        } else {
            scheme.primary
        };
        frame.render_widget(
            AllocationBar::new(row.ratio, row.ratio_label.clone()).color(bar_color),
            parts[1],
        );
    }
}

fn render_documents(frame: &mut Frame, area: Rect, rows: &[DocumentRow]) {
    let mut lines = Vec::with_capacity(rows.len() * 3);
    for row in rows {
        lines.push(Line::from(vec![
            Span::styled(row.name.clone(), Styles::text().bold()),
            Span::raw("  "),
            badge(row.status_label, row.status_variant),
        ]));
        lines.push(Line::styled(row.subtitle.clone(), Styles::text_muted()));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_insights(frame: &mut Frame, area: Rect, insights: &[String]) {
    let scheme = colors();
    let lines: Vec<Line> = insights
        .iter()
        .map(|text| {
            Line::from(vec![
                Span::styled("◆ ", Style::default().fg(scheme.insight)),
                Span::styled(text.clone(), Style::default().fg(scheme.text)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_workflows(frame: &mut Frame, area: Rect, rows: &[WorkflowRow]) {
    let mut lines = Vec::with_capacity(rows.len() * 3);
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(Line::styled(
                "─".repeat(area.width as usize),
                Style::default().fg(colors().muted),
            ));
        }
        lines.push(Line::from(vec![
            Span::styled(row.title.clone(), Styles::text().bold()),
            Span::raw("  "),
            badge(row.status_label, row.status_variant),
            Span::raw("  "),
            button(row.action_label, row.action_variant, false),
        ]));
        lines.push(Line::styled(row.description.clone(), Styles::text_muted()));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    if let Some(ref msg) = app.status_message {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg.as_str(), Style::default().fg(colors().accent).bold()),
        ]);
        frame.render_widget(
            Paragraph::new(status_line).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let hints = FooterHints::for_tab(app.active_tab());
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Styles::text_muted());
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = widgets::centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<15}"), Style::default().fg(colors().accent)),
            Span::styled(desc, Style::default().fg(colors().text)),
        ])
    };

    let help_text = vec![
        Line::styled(
            "━━━ Dashboard Help ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        key("1-5", "Jump to tab"),
        key("Tab/Shift+Tab", "Next / previous tab"),
        key("←/→ or h/l", "Move between service cards"),
        key("Enter/Space", "Connect or disconnect the focused service"),
        key("T", "Cycle theme (dark/light/high-contrast)"),
        key("?", "Toggle this help"),
        key("q / Esc", "Quit / close help"),
        Line::from(""),
        Line::styled(
            "Connections are simulated and reset on exit",
            Styles::text_muted(),
        ),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(Style::default().fg(colors().accent).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().accent)),
    );

    frame.render_widget(help, popup_area);
}
