// Create IC App - Library Root
//
// 将内嵌的 Internet Computer 项目模板展开为新项目

pub mod config;
pub mod error;
pub mod installer;
pub mod output;
pub mod project;
pub mod prompt;
pub mod templates;
pub mod utils;

// 重新导出常用类型
pub use config::ScaffoldConfig;
pub use error::{InstallWarning, ScaffoldError, ScaffoldResult};
pub use installer::{DependencyInstaller, PackageManager};
pub use project::{create_project, resolve_project_name, CreateOutcome, ProjectName};
pub use templates::TemplateSource;
