//! 目标目录
//!
//! 模板复制与配置修改在同一个作用域内完成：
//! 未调用 `commit()` 就被 drop 时，删除本次创建的目录

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};

/// 新项目的根目录（本次调用独占）
#[derive(Debug)]
pub struct TargetDir {
    path: PathBuf,
    /// 本次创建的最外层目录（清理时从这里删除）
    created_root: PathBuf,
    committed: bool,
}

impl TargetDir {
    /// 创建目标目录；路径已存在（文件或目录）时失败，不做任何修改
    pub fn create(path: &Path) -> ScaffoldResult<Self> {
        if path.exists() || path.symlink_metadata().is_ok() {
            return Err(ScaffoldError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        let created_root = first_missing_ancestor(path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::Copy {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // create_dir 在目录已存在时失败，覆盖检查与创建之间的竞争
        fs::create_dir(path).map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                ScaffoldError::AlreadyExists {
                    path: path.to_path_buf(),
                }
            } else {
                // 已经建好的父目录一并清理
                if created_root != path {
                    let _ = fs::remove_dir_all(&created_root);
                }
                ScaffoldError::Copy {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        tracing::debug!("created target directory {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            created_root,
            committed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 标记完成，之后不再自动清理；返回目录路径
    pub fn commit(mut self) -> PathBuf {
        self.committed = true;
        self.path.clone()
    }
}

impl Drop for TargetDir {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        match fs::remove_dir_all(&self.created_root) {
            Ok(()) => tracing::debug!("removed partially created {}", self.created_root.display()),
            Err(e) => tracing::warn!(
                "failed to clean up {}: {} (remove it manually)",
                self.created_root.display(),
                e
            ),
        }
    }
}

/// 最外层尚不存在的祖先目录（含 path 本身）
fn first_missing_ancestor(path: &Path) -> PathBuf {
    let mut root = path;
    while let Some(parent) = root.parent() {
        if parent.as_os_str().is_empty() || parent.exists() {
            break;
        }
        root = parent;
    }
    root.to_path_buf()
}
