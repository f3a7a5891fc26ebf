use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    서버 설정 정보 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `SERVER_CONFIG_PATH` 환경변수를 통해 TOML 형식의 서버 설정 파일 경로를 지정받는다.

    # 예상 파일 내용
    - `[database]` 실험 결과가 저장된 PostgreSQL 접속 정보
    - `[system]` 로그 디렉토리 / 로그 레벨

    # Panics
    `SERVER_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = r#"
    보고서(박스플롯) 설정 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    # 예상 파일 내용
    - `[experiment]` 대상 세대, 제외 crate, crate / 알고리즘 표시 순서, metric
    - `[chart]` 출력 경로, DPI, 그림 크기, 축 라벨

    # Panics
    `REPORT_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static REPORT_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("REPORT_CONFIG_PATH"));
