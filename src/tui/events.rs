//! Event handling for the `DashboardApp`.

use super::app::{DashboardApp, DashboardTab};
use super::theme::toggle_theme;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Event handler.
///
/// Polls crossterm on a background thread and forwards events over a
/// channel so the render loop never blocks on input.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if event_tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Mouse(mouse)) => {
                            if event_tx.send(Event::Mouse(mouse)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if event_tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else if event_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

/// Handle key events for `DashboardApp`.
pub fn handle_key_event(app: &mut DashboardApp, key: KeyEvent) {
    // Windows reports both press and release
    if key.kind != KeyEventKind::Press {
        return;
    }

    app.clear_status_message();

    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => app.toggle_help(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('T') => {
            let name = toggle_theme();
            app.set_status_message(format!("Theme: {name}"));
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            app.select_tab(DashboardTab::ALL[idx]);
        }
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Right | KeyCode::Char('l') => app.focus_next_service(),
        KeyCode::Left | KeyCode::Char('h') => app.focus_prev_service(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_focused(),
        _ => {}
    }
}

/// Handle mouse events for `DashboardApp`.
///
/// The wheel cycles tabs; any click closes the help overlay.
pub fn handle_mouse_event(app: &mut DashboardApp, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown if !app.show_help => app.next_tab(),
        MouseEventKind::ScrollUp if !app.show_help => app.prev_tab(),
        MouseEventKind::Down(MouseButton::Left | MouseButton::Right) if app.show_help => {
            app.toggle_help();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServiceId;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut DashboardApp, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let mut app = DashboardApp::default();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_tab(), DashboardTab::AiInsights);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_tab(), DashboardTab::Dashboard);
    }

    #[test]
    fn test_enter_toggles_focused_service() {
        let mut app = DashboardApp::default();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(app.connections().is_connected(ServiceId::Plaid));
        assert_eq!(app.status_message.as_deref(), Some("Plaid connected"));

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.connections().is_connected(ServiceId::Plaid));
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = DashboardApp::default();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_tab(), DashboardTab::Dashboard);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = DashboardApp::default();
        let mut key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut app, key);
        assert_eq!(app.active_tab(), DashboardTab::Dashboard);
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_scroll_cycles_tabs() {
        let mut app = DashboardApp::default();
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown));
        assert_eq!(app.active_tab(), DashboardTab::Portfolio);
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp));
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp));
        assert_eq!(app.active_tab(), DashboardTab::Automation);
    }

    #[test]
    fn test_click_closes_help() {
        let mut app = DashboardApp::default();
        app.toggle_help();
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown));
        assert_eq!(app.active_tab(), DashboardTab::Dashboard);
        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left)));
        assert!(!app.show_help);
    }
}
