//! 依赖安装
//!
//! 安装失败不影响项目创建结果，只返回 `InstallWarning`

pub mod package_manager;

pub use package_manager::{PackageManager, DEFAULT_PACKAGE_MANAGER};

use crate::error::InstallWarning;
use std::path::Path;

/// 在指定目录安装项目依赖
pub trait DependencyInstaller {
    /// 包管理器可执行文件，例如 `npm`
    fn program(&self) -> &str;

    /// 供用户手动执行的等价命令，例如 `npm install`
    fn command_line(&self) -> String {
        format!("{} install", self.program())
    }

    fn install(&self, project_dir: &Path) -> Result<(), InstallWarning>;
}
