//! 模板文件嵌入
//!
//! 项目模板在编译时嵌入二进制，运行时无需任何外部文件

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::path::Path;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::utils::{set_executable, write_file};

/// 模板文件资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "embedded/template/"]
pub struct TemplateAssets;

impl TemplateAssets {
    /// 列出所有嵌入的模板文件（相对路径，`/` 分隔）
    pub fn list_files() -> Vec<String> {
        let mut files: Vec<String> = Self::iter().map(|path| path.into_owned()).collect();
        files.sort();
        files
    }

    /// 获取指定模板文件的原始字节
    pub fn get_bytes(path: &str) -> ScaffoldResult<Cow<'static, [u8]>> {
        Self::get(path)
            .map(|file| file.data)
            .ok_or_else(|| ScaffoldError::Template(format!("Template '{}' not found", path)))
    }

    /// 将全部模板文件写入目标目录，返回写入的文件数
    pub fn materialize(target: &Path) -> ScaffoldResult<usize> {
        let mut written = 0;

        for path in Self::list_files() {
            let relative = path.as_str();
            let data = Self::get_bytes(relative)?;
            let dest = target.join(relative);

            write_file(&dest, &data).map_err(|source| ScaffoldError::Copy {
                path: dest.clone(),
                source,
            })?;

            // 嵌入后权限位丢失，部署脚本需要重新标记为可执行
            if relative.ends_with(".sh") {
                set_executable(&dest).map_err(|source| ScaffoldError::Copy {
                    path: dest.clone(),
                    source,
                })?;
            }

            tracing::trace!("wrote {}", dest.display());
            written += 1;
        }

        Ok(written)
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
