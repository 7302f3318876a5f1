use anyhow::{Context, Result};
use kinder_core::config::KinderConfig;
use owo_colors::OwoColorize;

pub fn run(user: Option<&str>, set: &[String]) -> Result<()> {
    if !set.is_empty() {
        return apply(set);
    }

    let config_path = KinderConfig::config_path()?;
    let config = KinderConfig::load()?;
    let user = user.unwrap_or(&config.user);

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());

    println!();
    println!("{}", "Settings".bold());
    println!("  User:      {}", user);
    match &config.timezone {
        Some(tz) => println!("  Timezone:  {}", tz),
        None => println!("  Timezone:  {} {}", config.timezone()?, "(system)".dimmed()),
    }
    println!("  Locale:    {}", config.locale);
    match config.upcoming_limit {
        Some(limit) => println!("  Upcoming:  {}", limit),
        None => println!("  Upcoming:  {}", "all".dimmed()),
    }

    Ok(())
}

/// Apply every `key=value` pair, then write the file once.
fn apply(pairs: &[String]) -> Result<()> {
    let mut config = KinderConfig::load()?;

    for pair in pairs {
        let (key, value) = split_pair(pair)?;
        config
            .set(key, value)
            .with_context(|| format!("Could not set '{}'", key))?;
    }

    config.save().context("Failed to save configuration")?;

    for pair in pairs {
        println!("  {} {}", "Saved".green(), pair);
    }
    Ok(())
}

fn split_pair(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .map(|(key, value)| (key.trim(), value))
        .filter(|(key, _)| !key.is_empty())
        .with_context(|| format!("Expected KEY=VALUE, got '{}'", pair))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("locale=es").unwrap(), ("locale", "es"));
        assert_eq!(split_pair(" timezone = UTC").unwrap(), ("timezone", " UTC"));
        assert_eq!(split_pair("upcoming_limit=").unwrap(), ("upcoming_limit", ""));
        assert!(split_pair("locale").is_err());
        assert!(split_pair("=es").is_err());
    }
}
