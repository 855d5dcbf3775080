//! 错误类型
//!
//! 致命错误统一为 `ScaffoldError`，依赖安装失败单独建模为 `InstallWarning`（非致命）

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 创建项目过程中的致命错误
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid project name \"{name}\": {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Directory \"{}\" already exists", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Failed to copy template to {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Template error: {0}")]
    Template(String),
}

impl ScaffoldError {
    /// 用户主动取消（区别于真正的失败，只影响提示文案）
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScaffoldError::Cancelled)
    }
}

/// 依赖安装失败（不会中断项目创建）
#[derive(Debug, Error)]
#[error("{command} failed: {reason}")]
pub struct InstallWarning {
    /// 执行的命令，例如 `npm install`
    pub command: String,
    pub reason: String,
}

pub type ScaffoldResult<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_names_path() {
        let err = ScaffoldError::AlreadyExists {
            path: PathBuf::from("/tmp/demo-app"),
        };
        assert!(err.to_string().contains("/tmp/demo-app"));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_install_warning_display() {
        let warning = InstallWarning {
            command: "npm install".to_string(),
            reason: "exit code 1".to_string(),
        };
        assert_eq!(warning.to_string(), "npm install failed: exit code 1");
    }
}
