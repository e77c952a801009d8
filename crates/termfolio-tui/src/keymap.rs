use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use termfolio_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;
use crate::layout::SectionId;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for efficient key-to-action lookup
pub struct Keymap {
    /// Primary key bindings
    bindings: HashMap<KeyBinding, Action>,
    /// Special handling for the "gg" multi-key sequence.
    /// Stores the action the completed sequence triggers
    pending_g_action: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut pending_g_action = None;

        // Helper to add binding with conflict detection
        let mut add_binding = |key_str: &str, action: Action| {
            // Handle special "gg" sequence
            if key_str == "gg" {
                pending_g_action = Some(action);
                return;
            }

            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', using default", key_str);
            }
        };

        // Add all configured bindings
        add_binding(&config.quit, Action::Quit);
        add_binding(&config.scroll_down, Action::ScrollDown);
        add_binding(&config.scroll_up, Action::ScrollUp);
        add_binding(&config.scroll_half_down, Action::ScrollHalfPageDown);
        add_binding(&config.scroll_half_up, Action::ScrollHalfPageUp);
        add_binding(&config.scroll_page_down, Action::ScrollPageDown);
        add_binding(&config.scroll_page_up, Action::ScrollPageUp);
        add_binding(&config.jump_to_top, Action::JumpToTop);
        add_binding(&config.jump_to_bottom, Action::JumpToBottom);
        add_binding(&config.next_section, Action::NextSection);
        add_binding(&config.prev_section, Action::PrevSection);
        add_binding(&config.toggle_theme, Action::ToggleTheme);
        add_binding(&config.contact_form, Action::OpenContactForm);
        add_binding(&config.compose, Action::ComposeEmail);
        add_binding(&config.select, Action::Select);
        add_binding(&config.next_item, Action::NextItem);
        add_binding(&config.prev_item, Action::PrevItem);

        // Add hardcoded bindings that shouldn't be configurable
        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        // Arrow keys always scroll
        bindings
            .entry(KeyBinding::simple(KeyCode::Up))
            .or_insert(Action::ScrollUp);
        bindings
            .entry(KeyBinding::simple(KeyCode::Down))
            .or_insert(Action::ScrollDown);
        bindings
            .entry(KeyBinding::simple(KeyCode::PageUp))
            .or_insert(Action::ScrollPageUp);
        bindings
            .entry(KeyBinding::simple(KeyCode::PageDown))
            .or_insert(Action::ScrollPageDown);
        // The scroll-to-top control activates from its hinted key
        bindings
            .entry(KeyBinding::shift(KeyCode::Char('T')))
            .or_insert(Action::ScrollToTop);
        bindings
            .entry(KeyBinding::simple(KeyCode::Home))
            .or_insert(Action::JumpToTop);
        bindings
            .entry(KeyBinding::simple(KeyCode::End))
            .or_insert(Action::JumpToBottom);
        // Number keys jump straight to a section
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            let digit = char::from_digit(i as u32 + 1, 10).unwrap_or('1');
            bindings
                .entry(KeyBinding::simple(KeyCode::Char(digit)))
                .or_insert(Action::GoToSection(id));
        }
        // Escape for exiting modes
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);

        Self {
            bindings,
            pending_g_action,
        }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Check if "gg" sequence is configured
    pub fn has_pending_g(&self) -> bool {
        self.pending_g_action.is_some()
    }

    /// Get the action for completed "gg" sequence
    pub fn get_pending_g_action(&self) -> Option<&Action> {
        self.pending_g_action.as_ref()
    }

    /// Check if a single 'g' press should start a pending sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "t", "q", etc.
/// - Uppercase (Shift): "G", "N", etc.
/// - Special chars: "/", "?", etc.
/// - Ctrl: "<C-d>", "<C-u>", etc.
/// - Shift: "<S-Tab>", "<S-g>", etc.
/// - Special keys: "<CR>", "<Enter>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<Right>", "<Up>", "<Down>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    // Handle special notation <...>
    if s.starts_with('<') && s.ends_with('>') {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    // Single character
    if s.len() == 1 {
        let c = s.chars().next()?;
        // Uppercase letters are Shift+lowercase
        if c.is_ascii_uppercase() {
            return Some(KeyBinding::shift(KeyCode::Char(c)));
        }
        return Some(KeyBinding::simple(KeyCode::Char(c)));
    }

    // "gg" is handled specially by Keymap, not here
    if s == "gg" {
        // Return 'g' binding, the double-press logic is handled elsewhere
        return Some(KeyBinding::simple(KeyCode::Char('g')));
    }

    None
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    // Handle modifiers: C- (Ctrl), S- (Shift)
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::shift(key));
    }

    // Handle special key names without modifiers
    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "del" | "delete" => Some(KeyCode::Delete),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            // Single character after modifier (e.g., "d" in "<C-d>")
            if name.len() == 1 {
                let c = name.chars().next()?;
                Some(KeyCode::Char(c.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}
