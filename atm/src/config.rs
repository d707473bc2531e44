use atm_core::Money;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub opening_balance: Money,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_log_buffer_size")]
    pub log_buffer_size: usize,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_log_buffer_size() -> usize {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opening_balance: Money::ZERO,
            currency_symbol: default_currency_symbol(),
            log_buffer_size: default_log_buffer_size(),
        }
    }
}

impl Settings {
    /// Load settings from, in increasing priority:
    /// `~/.config/atm/config.toml`, the file named by `ATM_CONFIG`
    /// (default `atm.toml`), and `ATM__*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("atm").join("config.toml");
            builder = builder.add_source(File::from(user_config).required(false));
        }

        let config_path = std::env::var("ATM_CONFIG").unwrap_or_else(|_| "atm.toml".to_string());
        builder = builder
            .add_source(File::with_name(&config_path).required(false))
            .add_source(Environment::with_prefix("ATM").separator("__"));

        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.opening_balance.is_negative() {
            return Err("opening_balance cannot be negative".to_string());
        }
        if self.log_buffer_size == 0 {
            return Err("log_buffer_size must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Settings::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn test_defaults_when_empty() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_reads_values() {
        let settings = from_toml(
            r#"
            opening_balance = "125.50"
            currency_symbol = "€"
            log_buffer_size = 200
            "#,
        )
        .unwrap();

        assert_eq!(settings.opening_balance, Money::parse("125.50").unwrap());
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.log_buffer_size, 200);
    }

    #[test]
    fn test_validate_rejects_negative_balance() {
        let settings = from_toml(r#"opening_balance = "-1""#).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_log_buffer() {
        let settings = Settings {
            log_buffer_size: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
