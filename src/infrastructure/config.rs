use serde::Deserialize;

pub const DEFAULT_DATASET_SOURCE: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    /// http(s) URL or local file path of the launch CSV
    pub source: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardSettings {
    pub title: String,
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "SpaceX Launch Records Dashboard".to_string(),
            slider_min: 0.0,
            slider_max: 10000.0,
            slider_step: 1000.0,
        }
    }
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(self) -> anyhow::Result<Self> {
        let dashboard = &self.dashboard;
        if dashboard.slider_step <= 0.0 {
            anyhow::bail!("dashboard.slider_step must be positive, got {}", dashboard.slider_step);
        }
        if dashboard.slider_min >= dashboard.slider_max {
            anyhow::bail!(
                "dashboard.slider_min ({}) must be below dashboard.slider_max ({})",
                dashboard.slider_min,
                dashboard.slider_max
            );
        }
        Ok(self)
    }
}

/// Defaults, then `config/dashboard.{toml,yaml,json}` if present, then `DASHBOARD__*` env vars.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    build_app_config(
        config::File::with_name("config/dashboard").required(false),
        config::Environment::with_prefix("DASHBOARD").separator("__"),
    )
}

fn build_app_config<F, E>(file: F, env: E) -> anyhow::Result<AppConfig>
where
    F: config::Source + Send + Sync + 'static,
    E: config::Source + Send + Sync + 'static,
{
    let defaults = DashboardSettings::default();
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8050)?
        .set_default("dataset.source", DEFAULT_DATASET_SOURCE)?
        .set_default("dashboard.title", defaults.title)?
        .set_default("dashboard.slider_min", defaults.slider_min)?
        .set_default("dashboard.slider_max", defaults.slider_max)?
        .set_default("dashboard.slider_step", defaults.slider_step)?
        .add_source(file)
        .add_source(env)
        .build()?;

    settings.try_deserialize::<AppConfig>()?.validate()
}
