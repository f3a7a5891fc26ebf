/*
Author      : Seunghwan Shin
Create date : 2026-10-00
Description : 실험 결과 테이블(PostgreSQL)을 조회하여 crate / 알고리즘별 커버리지 박스플롯을 생성하는 보고서 프로그램

History     : 2026-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::pg_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::{configs::total_config::*, report::report_config::*};

mod utils_modules;
use utils_modules::logger_utils::*;

mod dto;

mod enums;

mod service;
use service::{chart_service_impl::*, query_service_impl::*, report_service_impl::*};

mod controller;
use controller::main_controller::*;

#[cfg(test)]
mod test_utils;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();

    let system_config = get_system_config_info();
    let _logger_handle: LoggerHandle =
        set_global_logger(system_config.log_directory(), system_config.log_level());

    info!("Coverage report program start!");

    /* 보고서 설정 검증 → Experiment DB connection (설정이 잘못되면 접속하지 않는다) */
    let (report_config, experiment_repo): (ReportConfig, PgRepositoryImpl) =
        load_config_then_connect(&REPORT_CONFIG_PATH, || {
            PgRepositoryImpl::connect(get_database_config_info())
        })
        .await
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while loading the report config or initializing experiment_repo.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let query_service: QueryServiceImpl<PgRepositoryImpl> =
        QueryServiceImpl::new(Arc::new(experiment_repo));
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let report_service: ReportServiceImpl<QueryServiceImpl<PgRepositoryImpl>, ChartServiceImpl> =
        ReportServiceImpl::new(query_service, chart_service);

    let main_controller: MainController<
        ReportServiceImpl<QueryServiceImpl<PgRepositoryImpl>, ChartServiceImpl>,
    > = MainController::new(report_service);

    main_controller.main_task(&report_config).await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });

    info!("Coverage report program end!");
}
