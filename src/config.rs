//! 运行配置
//!
//! 命令行参数优先，其次环境变量，最后使用默认值（嵌入模板 + npm）

use std::path::PathBuf;

use crate::installer::{PackageManager, DEFAULT_PACKAGE_MANAGER};
use crate::templates::TemplateSource;

/// 模板目录覆盖
pub const TEMPLATE_ENV: &str = "CREATE_IC_APP_TEMPLATE";
/// 包管理器可执行文件
pub const PACKAGE_MANAGER_ENV: &str = "CREATE_IC_APP_PACKAGE_MANAGER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub template: TemplateSource,
    pub package_manager: String,
}

impl ScaffoldConfig {
    /// 由可选的覆盖值构造；空字符串视为未设置
    pub fn new(template_dir: Option<PathBuf>, package_manager: Option<String>) -> Self {
        let template = match template_dir {
            Some(dir) if !dir.as_os_str().is_empty() => TemplateSource::Directory(dir),
            _ => TemplateSource::Embedded,
        };

        let package_manager = package_manager
            .map(|pm| pm.trim().to_string())
            .filter(|pm| !pm.is_empty())
            .unwrap_or_else(|| DEFAULT_PACKAGE_MANAGER.to_string());

        Self {
            template,
            package_manager,
        }
    }

    pub fn installer(&self) -> PackageManager {
        PackageManager::new(self.package_manager.clone())
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}
