//! 项目创建
//!
//! 名称校验、目标目录、配置修改与整体流程编排

pub mod creator;
pub mod customizer;
pub mod name;
pub mod stage;
pub mod target;

// 重导出
pub use creator::{create_project, resolve_project_name, CreateOutcome};
pub use customizer::{customize_project, Customization};
pub use name::{NamePolicy, ProjectName, DEFAULT_PROJECT_NAME};
pub use stage::{Pipeline, Stage};
pub use target::TargetDir;
