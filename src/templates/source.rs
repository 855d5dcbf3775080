//! 模板来源
//!
//! 默认使用嵌入模板，也可以指定本地目录作为模板根

use std::fmt;
use std::path::{Path, PathBuf};

use super::TemplateAssets;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::utils::copy_dir_all;

/// 模板根（只读，复制的来源）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// 编译进二进制的模板
    #[default]
    Embedded,
    /// 本地目录
    Directory(PathBuf),
}

impl TemplateSource {
    /// 将模板完整复制到目标目录，返回复制的文件数
    pub fn materialize(&self, target: &Path) -> ScaffoldResult<usize> {
        match self {
            TemplateSource::Embedded => TemplateAssets::materialize(target),
            TemplateSource::Directory(root) => {
                if !root.is_dir() {
                    return Err(ScaffoldError::Template(format!(
                        "Template directory not found: {}",
                        root.display()
                    )));
                }

                copy_dir_all(root, target).map_err(|source| ScaffoldError::Copy {
                    path: target.to_path_buf(),
                    source,
                })
            }
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Embedded => write!(f, "embedded template"),
            TemplateSource::Directory(root) => write!(f, "{}", root.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_directory_source_copies_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("template");
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("package.json"), r#"{"name":"template"}"#).unwrap();
        fs::write(root.join("src/main.mo"), "actor {}").unwrap();

        let target = temp.path().join("out");
        let copied = TemplateSource::Directory(root).materialize(&target).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(target.join("src/main.mo")).unwrap(), "actor {}");
    }

    #[test]
    fn test_directory_source_missing_root() {
        let temp = TempDir::new().unwrap();
        let source = TemplateSource::Directory(temp.path().join("missing"));

        let err = source.materialize(&temp.path().join("out")).unwrap_err();

        assert!(matches!(err, ScaffoldError::Template(_)));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_default_is_embedded() {
        assert_eq!(TemplateSource::default(), TemplateSource::Embedded);
        assert_eq!(TemplateSource::Embedded.to_string(), "embedded template");
    }
}
