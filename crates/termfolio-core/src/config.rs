use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::contact::ComposeChannel;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Scroll-effect thresholds and animation timing
    #[serde(default)]
    pub fx: FxConfig,
    /// Optional color overrides applied on top of the active palette
    #[serde(default)]
    pub colors: ThemeColorOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll: ScrollConfig::default(),
            fx: FxConfig::default(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

/// Easing curve for smooth scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// No interpolation, jump at the end
    None,
    /// Constant speed
    Linear,
    /// Cubic ease-out
    Cubic,
    /// Cubic ease-in-out
    CubicInOut,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling animations
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Easing function for the animation
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Lines moved per scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frames per second while animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: default_easing(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Scroll-triggered effect tuning.
///
/// Timing values keep the originals from the page this UI reproduces.
/// The geometric thresholds are expressed in document rows, so their
/// defaults are scaled down from the pixel values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxConfig {
    /// Visible fraction at which a target counts as revealed (0.0-1.0)
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
    /// Minimum interval between scroll-effect passes in milliseconds
    #[serde(default = "default_scroll_throttle")]
    pub scroll_throttle_ms: u64,
    /// Counter animation duration in milliseconds
    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u64,
    /// Counter frame interval in milliseconds
    #[serde(default = "default_counter_frame")]
    pub counter_frame_ms: u64,
    /// Delay before a skill bar fills, in milliseconds
    #[serde(default = "default_bar_delay")]
    pub bar_delay_ms: u64,
    /// Rows added to the scroll offset when resolving the active section
    #[serde(default = "default_nav_lookahead")]
    pub nav_lookahead_rows: u16,
    /// Scroll offset past which the navbar switches to its scrolled style
    #[serde(default = "default_navbar_scrolled")]
    pub navbar_scrolled_rows: u16,
    /// Scroll offset past which the scroll-to-top hint is shown
    #[serde(default = "default_to_top")]
    pub to_top_rows: u16,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
            scroll_throttle_ms: default_scroll_throttle(),
            counter_duration_ms: default_counter_duration(),
            counter_frame_ms: default_counter_frame(),
            bar_delay_ms: default_bar_delay(),
            nav_lookahead_rows: default_nav_lookahead(),
            navbar_scrolled_rows: default_navbar_scrolled(),
            to_top_rows: default_to_top(),
        }
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (slightly lighter)
    pub bg1: Option<String>,
    /// Tertiary background (chrome, highlights)
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground (slightly dimmer)
    pub fg1: Option<String>,
    /// Muted foreground (unrevealed content)
    pub dim: Option<String>,
    /// Accent color
    pub accent: Option<String>,
    /// Error color
    pub error: Option<String>,
    /// Success color
    pub success: Option<String>,
    /// Warning color
    pub warning: Option<String>,
    /// Info color
    pub info: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// EmailJS-compatible endpoint
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,
    /// Relay service id
    #[serde(default)]
    pub service_id: String,
    /// Relay template id
    #[serde(default)]
    pub template_id: String,
    /// Relay public key (user id)
    #[serde(default)]
    pub public_key: String,
    /// Request timeout in seconds
    #[serde(default = "default_relay_timeout")]
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_relay_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_secs: default_relay_timeout(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Channel used when composing an email outside the form
    #[serde(default)]
    pub preferred_channel: ComposeChannel,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    /// Scroll down one step
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll up one step
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll half page down
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    /// Scroll half page up
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    /// Scroll full page down
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    /// Scroll full page up
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,

    /// Jump to the top of the document
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to the bottom of the document
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Jump to the next section
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Jump to the previous section
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,

    /// Toggle dark/light theme
    #[serde(default = "default_key_toggle_theme")]
    pub toggle_theme: String,
    /// Open the contact form
    #[serde(default = "default_key_contact_form")]
    pub contact_form: String,
    /// Compose an email through the preferred channel
    #[serde(default = "default_key_compose")]
    pub compose: String,
    /// Activate the focused item (project card, link)
    #[serde(default = "default_key_select")]
    pub select: String,
    /// Move focus to the next item within the active section
    #[serde(default = "default_key_next_item")]
    pub next_item: String,
    /// Move focus to the previous item within the active section
    #[serde(default = "default_key_prev_item")]
    pub prev_item: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            toggle_theme: default_key_toggle_theme(),
            contact_form: default_key_contact_form(),
            compose: default_key_compose(),
            select: default_key_select(),
            next_item: default_key_next_item(),
            prev_item: default_key_prev_item(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_section() -> String { "<Tab>".to_string() }
fn default_key_prev_section() -> String { "<S-Tab>".to_string() }
fn default_key_toggle_theme() -> String { "t".to_string() }
fn default_key_contact_form() -> String { "c".to_string() }
fn default_key_compose() -> String { "m".to_string() }
fn default_key_select() -> String { "<CR>".to_string() }
fn default_key_next_item() -> String { "n".to_string() }
fn default_key_prev_item() -> String { "p".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termfolio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u16 {
    60
}

fn default_visibility_threshold() -> f64 {
    0.5
}

fn default_scroll_throttle() -> u64 {
    16
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_counter_frame() -> u64 {
    16
}

fn default_bar_delay() -> u64 {
    500
}

fn default_nav_lookahead() -> u16 {
    4 // ~100px scaled to document rows
}

fn default_navbar_scrolled() -> u16 {
    2 // ~100px scaled to document rows
}

fn default_to_top() -> u16 {
    10 // ~300px scaled to document rows
}

fn default_relay_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_relay_timeout() -> u64 {
    30
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/termfolio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the portfolio content file path
    pub fn portfolio_path() -> PathBuf {
        Self::config_dir().join("portfolio.toml")
    }

    /// Get the theme preference file path
    pub fn prefs_path() -> PathBuf {
        Self::config_dir().join("theme")
    }

    fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("termfolio")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_page_timings() {
        let fx = FxConfig::default();
        assert!((fx.visibility_threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(fx.scroll_throttle_ms, 16);
        assert_eq!(fx.counter_duration_ms, 2000);
        assert_eq!(fx.counter_frame_ms, 16);
        assert_eq!(fx.bar_delay_ms, 500);
    }

    #[test]
    fn test_empty_config_parses_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.keymap.quit, "q");
        assert_eq!(config.relay.endpoint, default_relay_endpoint());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui.fx]
            nav_lookahead_rows = 6

            [relay]
            service_id = "svc_1"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.fx.nav_lookahead_rows, 6);
        assert_eq!(config.ui.fx.counter_duration_ms, 2000);
        assert_eq!(config.relay.service_id, "svc_1");
        assert!(config.relay.template_id.is_empty());
    }

    #[test]
    fn test_easing_roundtrip() {
        let config = ScrollConfig {
            easing: EasingType::Quintic,
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        let back: ScrollConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.easing, EasingType::Quintic);
    }
}
