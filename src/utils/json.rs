//! JSON 工具
//!
//! 依赖 serde_json 的 preserve_order 特性，读写时保持字段顺序

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::utils::write_file;

/// 读取 JSON 对象文件
///
/// 文件不是合法 JSON 或顶层不是对象时返回 `ScaffoldError::Parse`
pub fn read_json_object(path: &Path) -> ScaffoldResult<Map<String, Value>> {
    let content = fs::read_to_string(path).map_err(|source| ScaffoldError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| ScaffoldError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ScaffoldError::Parse {
            path: path.to_path_buf(),
            reason: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

/// 写入 JSON 文件（2 空格缩进，末尾换行）
pub fn write_json_pretty(path: &Path, data: &Map<String, Value>) -> ScaffoldResult<()> {
    let mut json = serde_json::to_string_pretty(data).map_err(|e| ScaffoldError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    json.push('\n');

    write_file(path, json.as_bytes()).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
