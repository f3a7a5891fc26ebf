use crate::common::*;

use crate::model::configs::{rdb_config::*, system_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub database: RdbConfig,
    pub system: SystemConfig,
}

#[doc = "Experiment DB(PostgreSQL) 설정 정보"]
pub fn get_database_config_info() -> &'static RdbConfig {
    &TOTAL_CONFIG.database
}

#[doc = "system 설정 정보"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

impl TotalConfig {
    fn new() -> Self {
        Self::from_path(&SERVER_CONFIG_PATH)
    }

    #[doc = r#"
        # Panics
        설정 파일을 읽거나 파싱할 수 없는 경우.
        이 시점에는 전역 로거가 아직 없으므로 원인은 panic 메시지(stderr)로만 출력된다.
    "#]
    fn from_path(config_path: &str) -> Self {
        match read_toml_from_file::<TotalConfig>(config_path) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = format!(
                    "[TotalConfig->from_path] Failed to convert the data from SERVER_CONFIG_PATH ('{}') into the TotalConfig structure: {:#}",
                    config_path, e
                );
                error!("{}", err_msg);
                panic!("{}", err_msg);
            }
        }
    }
}
