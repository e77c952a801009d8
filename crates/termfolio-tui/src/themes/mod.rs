//! Dark and light palettes with user color overrides.

use ratatui::style::Color;
use termfolio_core::config::ThemeColorOverrides;
use termfolio_core::ThemeMode;

use crate::theme::Theme;

/// Dark palette, the startup default
pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x0f, 0x17, 0x24),
        bg1: Color::Rgb(0x16, 0x21, 0x30),
        bg2: Color::Rgb(0x1f, 0x2d, 0x40),
        fg0: Color::Rgb(0xe2, 0xe8, 0xf0),
        fg1: Color::Rgb(0xc0, 0xc9, 0xd6),
        dim: Color::Rgb(0x64, 0x74, 0x8b),
        accent: Color::Rgb(0x81, 0x8c, 0xf8),
        error: Color::Rgb(0xef, 0x44, 0x44),
        success: Color::Rgb(0x10, 0xb9, 0x81),
        warning: Color::Rgb(0xf5, 0x9e, 0x0b),
        info: Color::Rgb(0x38, 0xbd, 0xf8),
    }
}

/// Light palette
pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xf8, 0xfa, 0xfc),
        bg1: Color::Rgb(0xee, 0xf2, 0xf7),
        bg2: Color::Rgb(0xdd, 0xe4, 0xee),
        fg0: Color::Rgb(0x1e, 0x29, 0x3b),
        fg1: Color::Rgb(0x33, 0x41, 0x55),
        dim: Color::Rgb(0x94, 0xa3, 0xb8),
        accent: Color::Rgb(0x63, 0x66, 0xf1),
        error: Color::Rgb(0xdc, 0x26, 0x26),
        success: Color::Rgb(0x05, 0x96, 0x69),
        warning: Color::Rgb(0xd9, 0x77, 0x06),
        info: Color::Rgb(0x02, 0x84, 0xc7),
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load the palette for a mode and apply user overrides
pub fn load_theme(mode: ThemeMode, overrides: &ThemeColorOverrides) -> Theme {
    let base = match mode {
        ThemeMode::Dark => dark(),
        ThemeMode::Light => light(),
    };
    apply_overrides(base, overrides)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let mut apply = |slot: &mut Color, hex: &Option<String>| {
        if let Some(hex) = hex {
            if let Some(color) = parse_hex_color(hex) {
                *slot = color;
            }
        }
    };

    apply(&mut theme.bg0, &overrides.bg0);
    apply(&mut theme.bg1, &overrides.bg1);
    apply(&mut theme.bg2, &overrides.bg2);
    apply(&mut theme.fg0, &overrides.fg0);
    apply(&mut theme.fg1, &overrides.fg1);
    apply(&mut theme.dim, &overrides.dim);
    apply(&mut theme.accent, &overrides.accent);
    apply(&mut theme.error, &overrides.error);
    apply(&mut theme.success, &overrides.success);
    apply(&mut theme.warning, &overrides.warning);
    apply(&mut theme.info, &overrides.info);

    theme
}
