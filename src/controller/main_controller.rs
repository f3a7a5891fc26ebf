use crate::common::*;

use std::future::Future;

use crate::utils_modules::io_utils::*;

use crate::model::report::report_config::*;

use crate::dto::report_outcome::*;

use crate::traits::service_traits::report_service::*;

#[doc = "보고서 설정 파일을 읽고 유효성 검사까지 마친 `ReportConfig`를 반환 (`ReportError::InvalidConfig`)"]
pub fn load_report_config(report_config_path: &str) -> anyhow::Result<ReportConfig> {
    let report_config: ReportConfig = read_toml_from_file::<ReportConfig>(report_config_path)?;
    report_config.validate()?;

    Ok(report_config)
}

#[doc = r#"
    프로그램 기동 순서를 고정하는 함수.

    1. 보고서 설정을 읽어 검증한다. 실패하면 `connect`는 호출되지 않는다.
    2. 검증이 끝난 뒤에만 `connect`로 실험 DB에 접속한다 (`ReportError::Connection`).
"#]
pub async fn load_config_then_connect<R, F, Fut>(
    report_config_path: &str,
    connect: F,
) -> anyhow::Result<(ReportConfig, R)>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<R>>,
{
    let report_config: ReportConfig = load_report_config(report_config_path)?;
    let repository: R = connect().await?;

    Ok((report_config, repository))
}

#[derive(Debug, new)]
pub struct MainController<R: ReportService> {
    report_service: R,
}

impl<R: ReportService> MainController<R> {
    #[doc = r#"
        검증된 보고서 설정으로 박스플롯 보고서를 한 번 생성한다.

        1. `report_service`로 조회 → 가공 → 차트 저장
        2. 결과 요약을 로깅

        재시도는 하지 않는다. 실패하면 수동으로 다시 실행한다.
    "#]
    pub async fn main_task(&self, report_config: &ReportConfig) -> anyhow::Result<()> {
        let outcome: ReportOutcome = match self
            .report_service
            .generate_coverage_report(report_config)
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    "[ERROR][MainController->main_task] Failed to generate coverage report: {:?}",
                    e
                );
                return Err(e);
            }
        };

        info!(
            "Coverage report saved to {:?} ({} records, {} boxes, {} empty groups)",
            outcome.image_path(),
            outcome.record_count(),
            outcome.box_count(),
            outcome.empty_group_count()
        );

        if let Some(layout_path) = outcome.layout_path() {
            info!("Chart layout saved to {:?}", layout_path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::enums::report_error::*;

    struct UnreachableReportService;

    #[async_trait]
    impl ReportService for UnreachableReportService {
        async fn generate_coverage_report(
            &self,
            _report_config: &ReportConfig,
        ) -> anyhow::Result<ReportOutcome> {
            Err(ReportError::Connection("db:5432 refused".to_string()).into())
        }
    }

    fn write_report_config(dir: &Path, extra_experiment: &str) -> String {
        let config_path: PathBuf = dir.join("report_config.toml");
        let raw: String = format!(
            "[experiment]\n{}\n\n[chart]\noutput_path = \"pics/coverage-boxplot-crates.png\"\n",
            extra_experiment
        );
        fs::write(&config_path, raw).unwrap();

        config_path.to_string_lossy().to_string()
    }

    #[tokio::test]
    async fn invalid_config_stops_before_connecting() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let config_path: String = write_report_config(dir.path(), "crate_order = []");
        let connected: AtomicBool = AtomicBool::new(false);
        let connected_flag: &AtomicBool = &connected;

        let err: anyhow::Error = load_config_then_connect(&config_path, move || async move {
            connected_flag.store(true, Ordering::SeqCst);
            Err::<(), anyhow::Error>(ReportError::Connection("127.0.0.1:1".to_string()).into())
        })
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::InvalidConfig(_))
        ));
        assert!(!connected.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn valid_config_then_unreachable_store_is_a_connection_error() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let config_path: String = write_report_config(dir.path(), "");

        let err: anyhow::Error = load_config_then_connect(&config_path, || async {
            Err::<(), anyhow::Error>(ReportError::Connection("127.0.0.1:1".to_string()).into())
        })
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Connection(_))
        ));
    }

    #[tokio::test]
    async fn valid_config_is_handed_over_with_the_connection() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let config_path: String = write_report_config(dir.path(), "target_generation = 50");

        let (report_config, repository): (ReportConfig, &str) =
            load_config_then_connect(&config_path, || async { Ok("connected") })
                .await
                .unwrap();

        assert_eq!(*report_config.experiment().target_generation(), 50);
        assert_eq!(repository, "connected");
    }

    #[tokio::test]
    async fn report_failure_is_propagated() {
        let controller: MainController<UnreachableReportService> =
            MainController::new(UnreachableReportService);

        let report_config: ReportConfig = toml::from_str(
            r#"
            [chart]
            output_path = "pics/coverage-boxplot-crates.png"
            "#,
        )
        .unwrap();

        let err: anyhow::Error = controller.main_task(&report_config).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Connection(_))
        ));
    }
}
