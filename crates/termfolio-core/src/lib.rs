pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod prefs;
pub mod relay;

pub use config::{AppConfig, EasingType, FxConfig, ScrollConfig};
pub use content::Portfolio;
pub use error::{Error, Result};
pub use prefs::{PreferenceStore, ThemeController, ThemeMode};
