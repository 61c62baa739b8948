//! Rewriting recorded source paths relative to a project root

use super::error::{DescribeError, Result};
use std::path::{Component, Path, PathBuf};

/// Resolve `dir` against the current directory; empty means the current directory
pub(crate) fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    let resolved = if dir.as_os_str().is_empty() {
        std::env::current_dir()
    } else {
        std::path::absolute(dir)
    };
    resolved.map_err(|source| DescribeError::Root {
        dir: dir.to_path_buf(),
        source,
    })
}

/// Rewrite `file` relative to `base` when it lives under `package`.
///
/// Files that do not mention `package`, and every file when `package` is
/// empty, are returned unchanged.
pub fn relativize(package: &str, base: &Path, file: &str) -> Result<String> {
    if package.is_empty() || !file.contains(package) {
        return Ok(file.to_string());
    }
    relative_to(base, Path::new(file)).map(|path| path.display().to_string())
}

/// Express absolute `path` relative to absolute `base`, using `..` as needed
pub fn relative_to(base: &Path, path: &Path) -> Result<PathBuf> {
    let not_relatable = || DescribeError::NotRelatable {
        file: path.to_path_buf(),
        base: base.to_path_buf(),
    };
    if !path.is_absolute() || !base.is_absolute() {
        return Err(not_relatable());
    }

    let base: Vec<Component<'_>> = base.components().collect();
    let path: Vec<Component<'_>> = path.components().collect();
    let common = base.iter().zip(&path).take_while(|(a, b)| a == b).count();
    if common == 0 {
        return Err(not_relatable());
    }

    let mut relative = PathBuf::new();
    for component in &base[common..] {
        match component {
            Component::Normal(_) => relative.push(".."),
            Component::CurDir => {}
            _ => return Err(not_relatable()),
        }
    }
    for component in &path[common..] {
        relative.push(component.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Ok(relative)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_descendant() {
        let rel = relative_to(
            Path::new("/home/dev/go/src/github.com/acme/app"),
            Path::new("/home/dev/go/src/github.com/acme/app/src/db.rs"),
        )
        .expect("relatable");
        assert_eq!(rel, PathBuf::from("src/db.rs"));
    }

    #[test]
    fn test_relative_to_sibling() {
        let rel = relative_to(
            Path::new("/work/acme/app"),
            Path::new("/work/acme/lib/src/lib.rs"),
        )
        .expect("relatable");
        assert_eq!(rel, PathBuf::from("../lib/src/lib.rs"));
    }

    #[test]
    fn test_relative_to_self() {
        let rel = relative_to(Path::new("/work"), Path::new("/work")).expect("relatable");
        assert_eq!(rel, PathBuf::from("."));
    }

    #[test]
    fn test_relative_file_is_not_relatable() {
        assert!(matches!(
            relative_to(Path::new("/work"), Path::new("src/lib.rs")),
            Err(DescribeError::NotRelatable { .. })
        ));
    }

    #[test]
    fn test_relativize_only_touches_package_files() {
        let base = Path::new("/work/acme/app");
        assert_eq!(
            relativize("acme", base, "/work/acme/app/src/main.rs").expect("relatable"),
            "src/main.rs"
        );
        assert_eq!(
            relativize("acme", base, "/rustc/library/core/src/ops.rs").expect("untouched"),
            "/rustc/library/core/src/ops.rs"
        );
        assert_eq!(
            relativize("", base, "/work/acme/app/src/main.rs").expect("untouched"),
            "/work/acme/app/src/main.rs"
        );
    }

    #[test]
    fn test_absolute_dir() {
        let cwd = std::env::current_dir().expect("cwd");
        assert_eq!(absolute_dir(Path::new("")).expect("cwd"), cwd);
        assert_eq!(absolute_dir(Path::new("sub")).expect("abs"), cwd.join("sub"));
        assert_eq!(absolute_dir(Path::new("/abs")).expect("abs"), PathBuf::from("/abs"));
    }
}
