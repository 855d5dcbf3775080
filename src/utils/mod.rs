//! 工具模块
//!
//! 文件系统与 JSON 读写

pub mod fs;
pub mod json;

// 重导出
pub use fs::*;
pub use json::*;
