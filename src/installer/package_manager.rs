//! 外部包管理器执行器
//!
//! 以项目目录为工作目录执行 `<program> install`，捕获输出，不设超时

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use super::DependencyInstaller;
use crate::error::InstallWarning;

pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// 失败时附带的 stderr 行数
const STDERR_TAIL_LINES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    program: String,
}

impl PackageManager {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn warning(&self, reason: String) -> InstallWarning {
        InstallWarning {
            command: self.command_line(),
            reason,
        }
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_MANAGER)
    }
}

impl DependencyInstaller for PackageManager {
    fn program(&self) -> &str {
        &self.program
    }

    fn install(&self, project_dir: &Path) -> Result<(), InstallWarning> {
        tracing::debug!(
            "running `{}` in {}",
            self.command_line(),
            project_dir.display()
        );

        let output = Command::new(&self.program)
            .arg("install")
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    self.warning(format!("'{}' was not found in PATH", self.program))
                }
                _ => self.warning(format!("failed to start '{}': {}", self.program, e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());

            let tail = stderr_tail(&stderr, STDERR_TAIL_LINES);
            let reason = if tail.is_empty() {
                format!("exited with code {}", code)
            } else {
                format!("exited with code {}:\n{}", code, tail)
            };
            return Err(self.warning(reason));
        }

        tracing::trace!("{}", String::from_utf8_lossy(&output.stdout));
        Ok(())
    }
}

/// 保留最后几行非空输出
fn stderr_tail(stderr: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}
