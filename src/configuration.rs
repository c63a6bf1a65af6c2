use serde_aux::field_attributes::deserialize_number_from_string;

use crate::pagination::{DEFAULT_WINDOW_SIZE, WindowPolicy};

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. \
                Use either `local` or `production`."
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub listing: ListingSettings,
    #[serde(default)]
    pub pager: PagerSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ListingSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_size: usize,
    pub sort_key: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct PagerSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub window_size: usize,
    pub policy: WindowPolicy,
}

impl Default for PagerSettings {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            policy: WindowPolicy::Block,
        }
    }
}

#[allow(clippy::missing_errors_doc)]
/// # Panics
/// Panics when the working directory is unreadable or `APP_ENVIRONMENT`
/// holds an unknown value.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // detect environment
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");

    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
