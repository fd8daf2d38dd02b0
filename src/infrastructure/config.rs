use crate::application::engine::EngineOptions;
use crate::application::scheduler::TickPeriods;
use crate::domain::locale::{Catalog, Translations};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("{0} must be greater than zero")]
    InvalidPeriod(&'static str),

    #[error("default language {0} has no translation catalog")]
    UnknownDefaultLanguage(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub locales: HashMap<String, Catalog>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_telemetry_period_ms")]
    pub telemetry_period_ms: u64,
    #[serde(default = "default_battery_period_ms")]
    pub battery_period_ms: u64,
    #[serde(default = "default_recording_period_ms")]
    pub recording_period_ms: u64,
    #[serde(default = "default_wifi_connect_delay_ms")]
    pub wifi_connect_delay_ms: u64,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_announce_connection")]
    pub announce_connection: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            seed: None,
            telemetry_period_ms: default_telemetry_period_ms(),
            battery_period_ms: default_battery_period_ms(),
            recording_period_ms: default_recording_period_ms(),
            wifi_connect_delay_ms: default_wifi_connect_delay_ms(),
            default_language: default_language(),
            announce_connection: default_announce_connection(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_telemetry_period_ms() -> u64 {
    2_000
}

fn default_battery_period_ms() -> u64 {
    15_000
}

fn default_recording_period_ms() -> u64 {
    1_000
}

fn default_wifi_connect_delay_ms() -> u64 {
    2_000
}

fn default_language() -> String {
    "en".to_string()
}

fn default_announce_connection() -> bool {
    true
}

/// Load `config/engine.*` (optional) overlaid with `NANOFISH__*` environment variables.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/engine").required(false))
        .add_source(config::Environment::with_prefix("NANOFISH").separator("__"))
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.validate()?;
    Ok(app_config)
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("engine.telemetry_period_ms", self.engine.telemetry_period_ms),
            ("engine.battery_period_ms", self.engine.battery_period_ms),
            ("engine.recording_period_ms", self.engine.recording_period_ms),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::InvalidPeriod(*name));
        }

        if !self.translations().contains(&self.engine.default_language) {
            return Err(ConfigError::UnknownDefaultLanguage(
                self.engine.default_language.clone(),
            ));
        }
        Ok(())
    }

    pub fn translations(&self) -> Translations {
        Translations::with_overrides(self.locales.clone())
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            seed: self.engine.seed,
            language: self.engine.default_language.clone(),
            announce_connection: self.engine.announce_connection,
        }
    }

    pub fn tick_periods(&self) -> TickPeriods {
        TickPeriods {
            telemetry: Duration::from_millis(self.engine.telemetry_period_ms),
            battery: Duration::from_millis(self.engine.battery_period_ms),
            recording: Duration::from_millis(self.engine.recording_period_ms),
        }
    }

    pub fn wifi_connect_delay(&self) -> Duration {
        Duration::from_millis(self.engine.wifi_connect_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn parse(toml: &str) -> Result<AppConfig, ConfigError> {
        let settings = config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        let app_config: AppConfig = settings.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    #[test]
    fn test_defaults_when_empty() {
        let app_config = parse("").unwrap();
        assert_eq!(app_config.server.bind, "0.0.0.0:8080");
        assert_eq!(app_config.tick_periods(), TickPeriods::default());
        assert_eq!(app_config.wifi_connect_delay(), Duration::from_secs(2));
        assert_eq!(app_config.engine_options().language, "en");
        assert!(app_config.engine_options().announce_connection);
    }

    #[test]
    fn test_engine_section() {
        let app_config = parse(
            r#"
            [engine]
            seed = 42
            telemetry_period_ms = 500
            default_language = "ar"
            announce_connection = false
            "#,
        )
        .unwrap();

        let options = app_config.engine_options();
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.language, "ar");
        assert!(!options.announce_connection);
        assert_eq!(app_config.tick_periods().telemetry, Duration::from_millis(500));
        assert_eq!(app_config.tick_periods().battery, Duration::from_millis(15_000));
    }

    #[test]
    fn test_zero_period_rejected() {
        let result = parse(
            r#"
            [engine]
            battery_period_ms = 0
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPeriod("engine.battery_period_ms"))
        ));
    }

    #[test]
    fn test_default_language_must_exist() {
        let result = parse(
            r#"
            [engine]
            default_language = "fr"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::UnknownDefaultLanguage(code)) if code == "fr"));
    }

    #[test]
    fn test_extra_locale_from_config() {
        let app_config = parse(
            r#"
            [engine]
            default_language = "fr"

            [locales.fr.alerts]
            system_connected = "Système connecté"
            low_battery = "Batterie faible"
            leak_detected = "Fuite détectée !"

            [locales.fr.toasts.snapshot]
            title = "Capture"
            description = "Image enregistrée."

            [locales.fr.toasts.surface]
            title = "Remontée"
            description = "NanoFish remonte à la surface."

            [locales.fr.toasts.connection]
            title = "Connecté"
            description = "Connecté à NanoFish-AP."

            [locales.fr.toasts.connection_failed]
            title = "Échec de connexion"
            description = "Impossible de se connecter au réseau."
            "#,
        )
        .unwrap();

        let translations = app_config.translations();
        assert_eq!(
            translations.catalog("fr").unwrap().alerts.low_battery,
            "Batterie faible"
        );
        assert!(translations.contains("en"));
    }
}
