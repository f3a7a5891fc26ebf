use crate::common::*;

#[doc = "Log line format shared by the file and stdout writers"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        record.args()
    )
}

#[doc = r#"
    전역 로거를 설정하는 함수.

    1. `RUST_LOG` 환경변수가 있으면 해당 로그 레벨을, 없으면 `default_level`을 사용
    2. `log_directory` 하위에 일 단위로 로그 파일을 회전하며 최근 10개만 보관
    3. 동일한 로그를 stdout 으로도 출력

    반환된 `LoggerHandle`은 프로그램 종료 시점까지 유지되어야 한다.
"#]
pub fn set_global_logger(log_directory: &str, default_level: &str) -> LoggerHandle {
    Logger::try_with_env_or_str(default_level)
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_directory)
                        .discriminant("coverage_report"),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .format_for_files(custom_format)
                .format_for_stdout(custom_format)
                .duplicate_to_stdout(Duplicate::All)
                .start()
        })
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {}", e))
}
