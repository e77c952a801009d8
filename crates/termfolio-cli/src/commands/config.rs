use anyhow::Result;

use termfolio_core::AppConfig;

/// Show the effective configuration, or write the defaults to disk
/// with `--init`.
pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            AppConfig::default().save()?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    println!("# {}", path.display());
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
