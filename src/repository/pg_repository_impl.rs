use crate::common::*;

use crate::enums::report_error::*;
use crate::model::{configs::rdb_config::*, experiment::experiment_record::*};
use crate::traits::repository_traits::experiment_repository::*;
use crate::utils_modules::traits::*;

#[derive(Debug)]
pub struct PgRepositoryImpl {
    pool: Pool,
    target: String,
}

impl PgRepositoryImpl {
    #[doc = r#"
        Creates a single-connection pool and proves the connection with `SELECT 1`.

        Any failure here is a `ReportError::Connection`: the store is unreachable, the
        credentials are rejected, or the pool cannot be built. Nothing has been fetched yet.
    "#]
    pub async fn connect(rdb_config: &RdbConfig) -> Result<Self, anyhow::Error> {
        let target: String = rdb_config.target();

        let mut pg_config: PgPoolConfig = PgPoolConfig::new();
        pg_config.host = Some(rdb_config.host().clone());
        pg_config.port = Some(*rdb_config.port());
        pg_config.dbname = Some(rdb_config.dbname().clone());
        pg_config.user = Some(rdb_config.user().clone());
        pg_config.password = rdb_config.password().clone();
        pg_config.connect_timeout = Some(Duration::from_secs(*rdb_config.connect_timeout_sec()));
        pg_config.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        pg_config.pool = Some(PoolConfig::new(1));

        let pool: Pool = pg_config
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| ReportError::Connection(format!("{}: failed to create pool: {}", target, e)))?;

        {
            let client = pool
                .get()
                .await
                .map_err(|e| ReportError::Connection(format!("{}: {}", target, e)))?;

            client
                .simple_query("SELECT 1")
                .await
                .map_err(|e| ReportError::Connection(format!("{}: probe failed: {}", target, e)))?;
        }

        info!("[PgRepositoryImpl->connect] Connected to {}", target);

        Ok(PgRepositoryImpl { pool, target })
    }
}

impl Drop for PgRepositoryImpl {
    fn drop(&mut self) {
        self.pool.close();
        info!("[PgRepositoryImpl->drop] Connection to {} closed", self.target);
    }
}

#[doc = "Accepts only plain SQL identifiers so that a table name can be quoted into a query"]
pub fn validate_table_name(table_name: &str) -> Result<(), ReportError> {
    let mut chars = table_name.chars();

    let valid: bool = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid && table_name.len() <= 63 {
        Ok(())
    } else {
        Err(ReportError::query(table_name, "not a valid table identifier"))
    }
}

#[doc = "Maps a failed `SELECT` to a `QueryError`, naming a missing relation explicitly"]
pub fn query_failure(
    table_name: &str,
    code: Option<&SqlState>,
    detail: impl std::fmt::Display,
) -> ReportError {
    match code {
        Some(state) if *state == SqlState::UNDEFINED_TABLE => {
            ReportError::query(table_name, "table does not exist")
        }
        _ => ReportError::query(table_name, detail),
    }
}

#[async_trait]
impl ExperimentRepository for PgRepositoryImpl {
    #[doc = "Function that EXECUTES `SELECT *` on one experiment table"]
    async fn fetch_collection(&self, table_name: &str) -> Result<Vec<ExperimentRecord>, anyhow::Error> {
        validate_table_name(table_name)?;

        let client = self
            .pool
            .get()
            .await
            .map_err(|e| ReportError::Connection(format!("{}: {}", self.target, e)))?;

        let sql: String = format!("SELECT * FROM \"{}\"", table_name);

        let rows: Vec<Row> = client
            .query(sql.as_str(), &[])
            .await
            .map_err(|e| query_failure(table_name, e.code(), &e))?;

        let records: Vec<ExperimentRecord> = rows
            .iter()
            .map(ExperimentRecord::from_pg_row)
            .collect::<Result<_, _>>()
            .map_err(|e| ReportError::query(table_name, format!("{:#}", e)))?;

        info!(
            "[PgRepositoryImpl->fetch_collection] {} rows fetched from {}",
            records.len(),
            table_name
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::utils_modules::io_utils::*;

    #[test]
    fn plain_identifiers_are_accepted() {
        assert!(validate_table_name("experiments_dynamosa").is_ok());
        assert!(validate_table_name("_tmp2").is_ok());
    }

    #[test]
    fn quoted_or_injected_names_are_rejected() {
        for name in ["", "1table", "experiments; DROP TABLE x", "exp\"eriments", "a-b"] {
            let err: ReportError = validate_table_name(name).unwrap_err();
            assert!(matches!(err, ReportError::Query { .. }), "{}", name);
        }
    }

    #[test]
    fn undefined_table_is_reported_as_missing() {
        let err: ReportError = query_failure(
            "experiments_dynamosa",
            Some(&SqlState::UNDEFINED_TABLE),
            "relation \"experiments_dynamosa\" does not exist",
        );

        assert_eq!(
            err.to_string(),
            "[QueryError] collection 'experiments_dynamosa': table does not exist"
        );
    }

    #[test]
    fn other_query_failures_keep_their_detail() {
        let err: ReportError = query_failure(
            "experiments_dynamosa",
            Some(&SqlState::INSUFFICIENT_PRIVILEGE),
            "permission denied",
        );
        assert!(matches!(
            err,
            ReportError::Query { ref reason, .. } if reason == "permission denied"
        ));

        let err: ReportError = query_failure("experiments_dynamosa", None, "connection reset");
        assert!(matches!(err, ReportError::Query { .. }));
    }

    #[tokio::test]
    async fn unreachable_store_is_a_connection_error() {
        let rdb_config: RdbConfig = toml::from_str(
            r#"
            host = "127.0.0.1"
            port = 1
            dbname = "rustyunit"
            user = "rust"
            connect_timeout_sec = 1
            "#,
        )
        .unwrap();

        let err: anyhow::Error = PgRepositoryImpl::connect(&rdb_config).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Connection(_))
        ));
    }

    /*
        Runs against a real PostgreSQL.
        COVERAGE_REPORT_TEST_DB must point at a TOML file holding a `[database]`-style table
        (host, port, dbname, user, password). Run with `cargo test -- --ignored`.
    */
    async fn live_repository() -> Option<PgRepositoryImpl> {
        let config_path: String = env::var("COVERAGE_REPORT_TEST_DB").ok()?;
        let rdb_config: RdbConfig = read_toml_from_file::<RdbConfig>(&config_path).unwrap();

        Some(PgRepositoryImpl::connect(&rdb_config).await.unwrap())
    }

    async fn execute(repo: &PgRepositoryImpl, sql: &str) {
        let client = repo.pool.get().await.unwrap();
        client.batch_execute(sql).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "needs COVERAGE_REPORT_TEST_DB"]
    async fn live_store_widens_columns_and_maps_failures() {
        let Some(repo) = live_repository().await else {
            return;
        };

        execute(
            &repo,
            r#"
            DROP TABLE IF EXISTS cr_it_widened;
            DROP TABLE IF EXISTS cr_it_mistyped;
            DROP TABLE IF EXISTS cr_it_missing;
            CREATE TABLE cr_it_widened ("crate" TEXT, gen SMALLINT, mir_coverage REAL, tests INTEGER);
            INSERT INTO cr_it_widened VALUES ('time', 99, 0.5, 12);
            CREATE TABLE cr_it_mistyped ("crate" TEXT, gen INTEGER, mir_coverage TEXT);
            INSERT INTO cr_it_mistyped VALUES ('time', 99, 'high');
            "#,
        )
        .await;

        /* INT2 gen, FLOAT4 coverage, INT4 auxiliary, other auxiliaries absent */
        let records: Vec<ExperimentRecord> = repo.fetch_collection("cr_it_widened").await.unwrap();
        assert_eq!(
            records,
            vec![ExperimentRecord::new("time".to_string(), 99, 0.5, None, Some(12.0), None)]
        );

        let err: anyhow::Error = repo.fetch_collection("cr_it_missing").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Query { reason, .. }) if reason == "table does not exist"
        ));

        let err: anyhow::Error = repo.fetch_collection("cr_it_mistyped").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Query { collection, .. }) if collection == "cr_it_mistyped"
        ));

        /* the single pooled connection is back after the failed fetches */
        let again: Result<anyhow::Result<Vec<ExperimentRecord>>, tokio::time::error::Elapsed> =
            tokio::time::timeout(Duration::from_secs(5), repo.fetch_collection("cr_it_widened"))
                .await;
        assert_eq!(again.unwrap().unwrap().len(), 1);

        execute(&repo, "DROP TABLE cr_it_widened; DROP TABLE cr_it_mistyped;").await;

        let pool: Pool = repo.pool.clone();
        drop(repo);
        assert!(pool.is_closed());
    }
}
