//! 项目模板
//!
//! 使用 rust-embed 将项目模板编译进二进制；支持用本地目录覆盖

pub mod files;
pub mod source;

pub use files::TemplateAssets;
pub use source::TemplateSource;
