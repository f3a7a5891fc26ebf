pub mod rdb_config;
pub mod system_config;
pub mod total_config;
