pub mod dataset_utils;
pub mod io_utils;
pub mod logger_utils;
pub mod pg_cell_utils;
pub mod stats_utils;
pub mod traits;
