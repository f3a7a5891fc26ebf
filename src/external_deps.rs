pub use deadpool_postgres::{
    Config as PgPoolConfig, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime,
};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use thiserror::Error;
pub use tokio_postgres::{NoTls, Row, error::SqlState, types::Type};
