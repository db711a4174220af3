// src/store/local.rs
// =============================================================================
// Local-disk FileStore.
//
// Errors are plain std::io::Error values so their messages ("No such file or
// directory", "Not a directory", "Permission denied") reach the user as the
// OS reports them.
// =============================================================================

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Directory and file primitives used by a mirror run.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Ok only if `path` exists, is a directory, and the process may create
    /// entries in it.
    async fn check_writable_dir(&self, path: &Path) -> io::Result<()>;

    /// Creates exactly one directory. Fails with `AlreadyExists` if present.
    async fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Creates or truncates `path` and writes `contents` to it.
    async fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

#[async_trait]
impl FileStore for LocalFileStore {
    async fn check_writable_dir(&self, path: &Path) -> io::Result<()> {
        let metadata = tokio::fs::metadata(path).await?;

        if !metadata.is_dir() {
            return Err(not_a_directory());
        }

        check_writable(path, &metadata)
    }

    async fn create_dir(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir(path).await
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}

#[cfg(unix)]
fn check_writable(path: &Path, _metadata: &std::fs::Metadata) -> io::Result<()> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Write + search: needed to create files inside the directory.
    let r = unsafe { libc::access(c_path.as_ptr(), libc::W_OK | libc::X_OK) };
    if r == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn check_writable(_path: &Path, metadata: &std::fs::Metadata) -> io::Result<()> {
    if metadata.permissions().readonly() {
        Err(io::Error::from(io::ErrorKind::PermissionDenied))
    } else {
        Ok(())
    }
}

#[cfg(unix)]
fn not_a_directory() -> io::Error {
    io::Error::from_raw_os_error(libc::ENOTDIR)
}

#[cfg(not(unix))]
fn not_a_directory() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "Not a directory")
}
