//! 项目配置
//!
//! 改写 package.json 的 name / description，并由 .env.example 生成 .env

use serde_json::Value;
use std::fs;
use std::path::Path;

use super::ProjectName;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::utils::{read_json_object, write_json_pretty};

pub const METADATA_FILE: &str = "package.json";
pub const ENV_EXAMPLE_FILE: &str = ".env.example";
pub const ENV_FILE: &str = ".env";

/// 生成的项目描述
pub fn project_description(name: &ProjectName) -> String {
    format!("An Internet Computer application - {}", name)
}

/// 配置结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customization {
    pub description_updated: bool,
    pub env_created: bool,
}

/// 修改项目元数据并准备环境变量文件
pub fn customize_project(target: &Path, name: &ProjectName) -> ScaffoldResult<Customization> {
    let description_updated = update_metadata(&target.join(METADATA_FILE), name)?;
    let env_created = provision_env_file(target)?;

    Ok(Customization {
        description_updated,
        env_created,
    })
}

/// 改写 name；description 仅在原值非空时改写，不新增字段
///
/// 返回 description 是否被改写
pub fn update_metadata(path: &Path, name: &ProjectName) -> ScaffoldResult<bool> {
    let mut metadata = read_json_object(path)?;

    metadata.insert("name".to_string(), Value::String(name.to_string()));

    let description_updated = match metadata.get_mut("description") {
        Some(description) if is_truthy(description) => {
            *description = Value::String(project_description(name));
            true
        }
        _ => false,
    };

    write_json_pretty(path, &metadata)?;
    tracing::debug!("updated {}", path.display());

    Ok(description_updated)
}

/// 存在 .env.example 时原样复制为 .env（覆盖已有文件）
pub fn provision_env_file(target: &Path) -> ScaffoldResult<bool> {
    let example = target.join(ENV_EXAMPLE_FILE);
    if !example.is_file() {
        return Ok(false);
    }

    let env = target.join(ENV_FILE);
    fs::copy(&example, &env).map_err(|source| ScaffoldError::Write {
        path: env.clone(),
        source,
    })?;
    tracing::debug!("created {} from {}", env.display(), ENV_EXAMPLE_FILE);

    Ok(true)
}

/// 空字符串、null、false、0 视为未设置
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::NamePolicy;
    use tempfile::TempDir;

    fn name(value: &str) -> ProjectName {
        ProjectName::parse(value, NamePolicy::Strict).unwrap()
    }

    #[test]
    fn test_update_name_and_description() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(METADATA_FILE);
        fs::write(&path, r#"{"name":"template","description":"A template"}"#).unwrap();

        let updated = update_metadata(&path, &name("demo-app")).unwrap();

        assert!(updated);
        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["name"], "demo-app");
        assert_eq!(
            json["description"],
            "An Internet Computer application - demo-app"
        );
    }

    #[test]
    fn test_missing_description_not_added() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(METADATA_FILE);
        fs::write(&path, r#"{"name":"template","version":"1.0.0"}"#).unwrap();

        let updated = update_metadata(&path, &name("demo-app")).unwrap();

        assert!(!updated);
        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_empty_description_left_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(METADATA_FILE);
        fs::write(&path, r#"{"name":"template","description":""}"#).unwrap();

        assert!(!update_metadata(&path, &name("demo-app")).unwrap());

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_other_fields_and_order_preserved() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(METADATA_FILE);
        fs::write(
            &path,
            r#"{"version":"0.1.0","name":"template","scripts":{"dev":"vite"},"description":"x","private":true}"#,
        )
        .unwrap();

        update_metadata(&path, &name("demo-app")).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let expected = r#"{
  "version": "0.1.0",
  "name": "demo-app",
  "scripts": {
    "dev": "vite"
  },
  "description": "An Internet Computer application - demo-app",
  "private": true
}
"#;
        assert_eq!(written, expected);
    }

    #[test]
    fn test_missing_name_is_added() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(METADATA_FILE);
        fs::write(&path, r#"{"version":"0.1.0"}"#).unwrap();

        update_metadata(&path, &name("demo-app")).unwrap();

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["name"], "demo-app");
    }

    #[test]
    fn test_malformed_metadata_is_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(METADATA_FILE), "{ broken").unwrap();

        let err = customize_project(temp.path(), &name("demo-app")).unwrap_err();

        assert!(matches!(err, ScaffoldError::Parse { .. }));
    }

    #[test]
    fn test_env_copied_from_example() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(METADATA_FILE), r#"{"name":"t"}"#).unwrap();
        let example = b"DFX_NETWORK=local\n# comment\r\nEMPTY=\n";
        fs::write(temp.path().join(ENV_EXAMPLE_FILE), example).unwrap();

        let result = customize_project(temp.path(), &name("demo-app")).unwrap();

        assert!(result.env_created);
        assert_eq!(fs::read(temp.path().join(ENV_FILE)).unwrap(), example);
    }

    #[test]
    fn test_env_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(ENV_EXAMPLE_FILE), "NEW=1\n").unwrap();
        fs::write(temp.path().join(ENV_FILE), "OLD=1\n").unwrap();

        assert!(provision_env_file(temp.path()).unwrap());
        assert_eq!(fs::read_to_string(temp.path().join(ENV_FILE)).unwrap(), "NEW=1\n");
    }

    #[test]
    fn test_no_env_without_example() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(METADATA_FILE), r#"{"name":"t"}"#).unwrap();

        let result = customize_project(temp.path(), &name("demo-app")).unwrap();

        assert!(!result.env_created);
        assert!(!temp.path().join(ENV_FILE).exists());
    }
}
