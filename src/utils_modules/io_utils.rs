use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Errors
    - 파일이 존재하지 않거나 읽기 권한이 없는 경우
    - TOML 형식이 잘못되어 파싱에 실패하는 경우
    - 구조체 필드와 TOML 키가 일치하지 않는 경우
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = fs::read_to_string(file_path).with_context(|| {
        format!("[read_toml_from_file] Failed to read '{}'", file_path)
    })?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    구조체를 pretty JSON 으로 직렬화하여 파일에 저장하는 함수.
    상위 디렉토리가 없으면 생성한다.

    # Arguments
    * `output_path` - 저장할 파일 경로
    * `input_struct` - JSON 으로 저장할 구조체
"#]
pub fn write_json_to_file<T: Serialize>(
    output_path: &Path,
    input_struct: &T,
) -> Result<(), anyhow::Error> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json: String = serde_json::to_string_pretty(input_struct).map_err(|err| {
        anyhow!(
            "[Error][write_json_to_file()] Failed to serialize struct to JSON: {}",
            err
        )
    })?;

    let mut file: fs::File = fs::File::create(output_path)
        .with_context(|| format!("[write_json_to_file] Failed to create {:?}", output_path))?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}
