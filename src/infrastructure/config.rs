use crate::application::sheet_repository::SheetResource;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub sheets: SheetsSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
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
pub struct SheetsSettings {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Spreadsheet id used for the gviz/export fallback endpoints.
    #[serde(default)]
    pub sheet_id: Option<String>,
    /// Published CSV URL per resource, keyed by resource name (e.g. `KPIs`).
    #[serde(default)]
    pub published: HashMap<String, String>,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            sheet_id: None,
            published: HashMap::new(),
        }
    }
}

impl SheetsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn published_url(&self, resource: SheetResource) -> Option<&str> {
        self.published
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(resource.sheet_name()))
            .map(|(_, url)| url.as_str())
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnimationSettings {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl AnimationSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_timeout_ms() -> u64 {
    8000
}

fn default_tick_ms() -> u64 {
    50
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str("", config::FileFormat::Toml))
            .build()
            .unwrap();
        let cfg: DashboardConfig = settings.try_deserialize().unwrap();

        assert_eq!(cfg.server.bind, "0.0.0.0:8080");
        assert_eq!(cfg.sheets.timeout(), Duration::from_millis(8000));
        assert_eq!(cfg.animation.tick(), Duration::from_millis(50));
        assert!(cfg.sheets.sheet_id.is_none());
    }

    #[test]
    fn test_published_url_lookup() {
        let toml = r#"
            [sheets]
            timeout_ms = 3000

            [sheets.published]
            KPIs = "https://example.org/kpis.csv"
            Charts = ""
        "#;
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap();
        let cfg: DashboardConfig = settings.try_deserialize().unwrap();

        assert_eq!(cfg.sheets.timeout_ms, 3000);
        assert_eq!(
            cfg.sheets.published_url(SheetResource::Kpis),
            Some("https://example.org/kpis.csv")
        );
        assert_eq!(cfg.sheets.published_url(SheetResource::Charts), None);
        assert_eq!(cfg.sheets.published_url(SheetResource::MapPaths), None);
    }
}
