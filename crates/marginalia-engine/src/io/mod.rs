use std::fs;
use std::path::{Path, PathBuf};

/// Extension of source pages.
pub const PAGE_EXTENSION: &str = "txt";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(PathBuf),
}

/// Read a text file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write content to a file, creating parent directories if needed
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a directory (and its parents) if it doesn't exist yet
pub fn ensure_dir(path: &Path) -> Result<(), IoError> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| IoError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// List the section directories directly under the content root, sorted
pub fn scan_sections(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.is_dir() {
        return Err(IoError::InvalidContentDir(content_root.to_path_buf()));
    }

    let mut dirs: Vec<PathBuf> = list_dir(content_root)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// List the page sources (`*.txt`) directly inside `dir`, sorted
pub fn scan_pages(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut files: Vec<PathBuf> = list_dir(dir)?
        .into_iter()
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == PAGE_EXTENSION))
        .collect();
    files.sort();
    Ok(files)
}

/// Copy every regular file directly inside `src_dir` into `dst_dir`.
///
/// Returns the number of files copied. Subdirectories are not descended.
pub fn copy_files(src_dir: &Path, dst_dir: &Path) -> Result<usize, IoError> {
    ensure_dir(dst_dir)?;

    let mut copied = 0;
    for path in list_dir(src_dir)? {
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dst_dir.join(name);
        fs::copy(&path, &target).map_err(|source| IoError::Write {
            path: target.clone(),
            source,
        })?;
        log::debug!("Copied {} -> {}", path.display(), target.display());
        copied += 1;
    }
    Ok(copied)
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let read_dir_err = |source| IoError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        paths.push(entry.map_err(read_dir_err)?.path());
    }
    Ok(paths)
}
