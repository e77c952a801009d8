use anyhow::Result;
use ratatui::style::Color;

use termfolio_core::{AppConfig, ThemeMode};
use termfolio_tui::themes::load_theme;

/// Print both palettes, with any configured overrides applied
pub fn run(config: &AppConfig) -> Result<()> {
    for mode in [ThemeMode::Dark, ThemeMode::Light] {
        let theme = load_theme(mode, &config.ui.colors);
        println!("{}", mode.as_str());
        print_slot("bg0", theme.bg0);
        print_slot("bg1", theme.bg1);
        print_slot("bg2", theme.bg2);
        print_slot("fg0", theme.fg0);
        print_slot("fg1", theme.fg1);
        print_slot("dim", theme.dim);
        print_slot("accent", theme.accent);
        print_slot("error", theme.error);
        print_slot("success", theme.success);
        print_slot("warning", theme.warning);
        print_slot("info", theme.info);
        println!();
    }
    println!("Override any slot under [ui.colors] in the config file.");
    Ok(())
}

fn print_slot(name: &str, color: Color) {
    match color {
        Color::Rgb(r, g, b) => println!("  {:<8} #{:02x}{:02x}{:02x}", name, r, g, b),
        other => println!("  {:<8} {:?}", name, other),
    }
}
