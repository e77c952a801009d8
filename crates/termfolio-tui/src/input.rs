use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};
use crate::layout::SectionId;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextSection,
    PrevSection,
    GoToSection(SectionId),
    ScrollToTop, // Activate the scroll-to-top control
    ToggleTheme,
    OpenContactForm,
    ComposeEmail, // Open the preferred mail channel externally
    Select,
    NextItem,
    PrevItem,
    // Contact form editing
    InputChar(char),
    Backspace,
    NextField,
    PrevField,
    Submit,
    // Project detail popup
    OpenDemo,
    OpenRepo,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    match app.mode {
        Mode::ContactForm => handle_form_mode(key),
        Mode::Modal(_) => handle_modal_mode(key),
        Mode::Normal => handle_normal_mode(key, app, keymap),
    }
}

fn handle_normal_mode(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);

    // gg requires a double press
    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return keymap
                .get_pending_g_action()
                .copied()
                .unwrap_or(Action::JumpToTop);
        }
        return Action::PendingG;
    }

    // Shift comes through both as the modifier and the uppercase char
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }
    if key.modifiers == KeyModifiers::SHIFT {
        if let KeyCode::Char(c) = key.code {
            let shifted = KeyBinding::shift(KeyCode::Char(c.to_ascii_uppercase()));
            if let Some(action) = keymap.get(&shifted) {
                return *action;
            }
        }
        // Shift+Tab may arrive as BackTab
        if key.code == KeyCode::BackTab {
            if let Some(action) = keymap.get(&KeyBinding::shift(KeyCode::Tab)) {
                return *action;
            }
        }
    }
    if key.code == KeyCode::BackTab {
        if let Some(action) = keymap.get(&KeyBinding::shift(KeyCode::Tab)) {
            return *action;
        }
    }

    Action::None
}

/// Form mode: printable keys edit the focused field, Tab cycles,
/// Ctrl+S (or Enter on the message field) submits, Esc cancels
fn handle_form_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Submit,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Submit,
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextField,
        (KeyCode::BackTab, _) => Action::PrevField,
        (KeyCode::Down, KeyModifiers::NONE) => Action::NextField,
        (KeyCode::Up, KeyModifiers::NONE) => Action::PrevField,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE) => Action::InputChar(c),
        (KeyCode::Char(c), KeyModifiers::SHIFT) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Project popup: d/r open the links, q or Esc closes
fn handle_modal_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('d'), KeyModifiers::NONE) => Action::OpenDemo,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::OpenRepo,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NextItem,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::PrevItem,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    use termfolio_core::prefs::MemoryPreferenceStore;
    use termfolio_core::{AppConfig, Portfolio, ThemeController};

    fn test_app() -> App {
        let controller = ThemeController::load(Box::new(MemoryPreferenceStore::default()));
        App::new(
            Arc::new(AppConfig::default()),
            Portfolio::sample(),
            controller,
            Instant::now(),
        )
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_normal_mode_scrolling() {
        let app = test_app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('j'), KeyModifiers::NONE), &app, &keymap),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(
                press(KeyCode::Char('d'), KeyModifiers::CONTROL),
                &app,
                &keymap
            ),
            Action::ScrollHalfPageDown
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = test_app();
        let keymap = Keymap::default();

        let g = press(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_shift_g_jumps_to_bottom() {
        let app = test_app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(
                press(KeyCode::Char('G'), KeyModifiers::SHIFT),
                &app,
                &keymap
            ),
            Action::JumpToBottom
        );
    }

    #[test]
    fn test_form_mode_editing() {
        let mut app = test_app();
        app.mode = Mode::ContactForm;
        let keymap = Keymap::default();

        // Printable keys go into the field, not the keymap
        assert_eq!(
            handle_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app, &keymap),
            Action::InputChar('q')
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Tab, KeyModifiers::NONE), &app, &keymap),
            Action::NextField
        );
        assert_eq!(
            handle_key_event(
                press(KeyCode::Char('s'), KeyModifiers::CONTROL),
                &app,
                &keymap
            ),
            Action::Submit
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Esc, KeyModifiers::NONE), &app, &keymap),
            Action::ExitMode
        );
    }

    #[test]
    fn test_modal_mode_links() {
        let mut app = test_app();
        app.mode = Mode::Modal(0);
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(press(KeyCode::Char('d'), KeyModifiers::NONE), &app, &keymap),
            Action::OpenDemo
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app, &keymap),
            Action::ExitMode
        );
    }

    #[test]
    fn test_number_key_section_jump() {
        let app = test_app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('3'), KeyModifiers::NONE), &app, &keymap),
            Action::GoToSection(SectionId::Skills)
        );
    }
}
