use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct RdbConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub dbname: String,
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_connect_timeout_sec")]
    pub connect_timeout_sec: u64,
}

fn default_port() -> u16 {
    5432
}

fn default_connect_timeout_sec() -> u64 {
    5
}

impl RdbConfig {
    #[doc = "Connection target used in log lines. Never includes the password."]
    pub fn target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.dbname)
    }
}
