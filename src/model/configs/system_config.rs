use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    #[serde(default = "default_log_directory")]
    pub log_directory: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_directory() -> String {
    "logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
