//! 文件系统工具

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// 写入文件（自动创建父目录）
pub fn write_file(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// 递归复制目录（包含隐藏文件），返回复制的文件数
///
/// 目标目录可以已存在；同名文件会被覆盖。
pub fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
            copied += 1;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            // fs::copy 同时复制权限位（保留脚本的可执行权限）
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    let link = fs::read_link(src)?;
    if dst.symlink_metadata().is_ok() {
        fs::remove_file(dst)?;
    }
    std::os::unix::fs::symlink(link, dst)
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst).map(|_| ())
}

/// 标记为可执行（仅 Unix）
#[cfg(unix)]
pub fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
pub fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_parents() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("a/b/test.txt");

        write_file(&file_path, b"Hello, World!").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_copy_dir_all_includes_hidden_files() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");

        write_file(&src.join("package.json"), b"{}").unwrap();
        write_file(&src.join(".env.example"), b"KEY=value\n").unwrap();
        write_file(&src.join("nested/deep/file.txt"), b"deep").unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();

        let copied = copy_dir_all(&src, &dst).unwrap();

        assert_eq!(copied, 3);
        assert_eq!(fs::read(dst.join(".env.example")).unwrap(), b"KEY=value\n");
        assert_eq!(fs::read(dst.join("nested/deep/file.txt")).unwrap(), b"deep");
        assert!(dst.join("empty").is_dir());
    }

    #[test]
    fn test_copy_dir_all_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = copy_dir_all(&temp.path().join("missing"), &temp.path().join("dst"));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_set_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("deploy.sh");
        write_file(&script, b"#!/bin/sh\n").unwrap();

        set_executable(&script).unwrap();

        let mode = fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
