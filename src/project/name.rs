//! 项目名称
//!
//! 命令行参数与交互式输入都通过 `ProjectName::parse` 构造

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::error::{ScaffoldError, ScaffoldResult};

/// 交互式输入的默认建议值
pub const DEFAULT_PROJECT_NAME: &str = "my-ic-app";

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

/// 名称校验策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePolicy {
    /// 仅允许字母、数字、连字符、下划线（交互式输入）
    Strict,
    /// 仅拒绝空名称（直接作为命令行参数传入）
    Relaxed,
}

/// 已校验的项目名称
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(input: &str, policy: NamePolicy) -> ScaffoldResult<Self> {
        let check = match policy {
            NamePolicy::Strict => Self::validate_strict(input),
            NamePolicy::Relaxed => Self::validate_relaxed(input),
        };

        check
            .map(|_| Self(input.to_string()))
            .map_err(|reason| ScaffoldError::InvalidName {
                name: input.to_string(),
                reason,
            })
    }

    /// 严格校验，错误信息直接展示给用户
    pub fn validate_strict(input: &str) -> Result<(), String> {
        Self::validate_relaxed(input)?;
        if !NAME_PATTERN.is_match(input) {
            return Err(
                "Project name can only contain letters, numbers, hyphens, and underscores"
                    .to_string(),
            );
        }
        Ok(())
    }

    fn validate_relaxed(input: &str) -> Result<(), String> {
        if input.is_empty() {
            return Err("Project name is required".to_string());
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
