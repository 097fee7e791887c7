//! Configuration commands (`confab config ...`).

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;

/// Print the active configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    println!("{}: {}", "display_name".bold(), config.display_name);
    println!("{}: {}", "locale".bold(), config.locale);
    println!("{}: {}", "default_channel".bold(), config.default_channel);
    println!("{}: {}", "show_avatars".bold(), config.show_avatars);
    Ok(())
}

/// Set a configuration value and persist it
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("{} {} = {}", "updated".green(), key, value);
    Ok(())
}

/// Print the config file path
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::path()?.display());
    Ok(())
}
