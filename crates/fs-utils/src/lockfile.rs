use super::create_parent_dir;
use std::io;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum LockfileError {
    #[error("Unable to acquire lock on file {file_path:?}: failed to create lockfile {lock_path:?}")]
    Acquire {
        file_path: PathBuf,
        lock_path: PathBuf,
        #[source]
        cause: io::Error,
    },
}

#[derive(Debug)]
/// A file used as an exclusive lock on access to another file.
///
/// Constructing a `Lockfile` creates the `path` with [`std::fs::File::create_new`],
/// a.k.a. `O_EXCL`, erroring if the file already exists.
///
/// Dropping a `Lockfile` deletes the `path`, releasing the lock.
///
/// Used to serialize rewrites of the views file between processes.
pub struct Lockfile {
    path: PathBuf,
}

impl Lockfile {
    /// Acquire an exclusive lock on `file_path`.
    ///
    /// The lock lives next to the file, with the extension replaced by `lock`.
    pub fn for_file(file_path: &Path) -> Result<Self, LockfileError> {
        let lock_path = file_path.with_extension("lock");
        let fail = |cause| LockfileError::Acquire {
            file_path: file_path.to_path_buf(),
            lock_path: lock_path.clone(),
            cause,
        };
        // Ensure the directory exists before attempting to create the lockfile.
        create_parent_dir(file_path).map_err(fail)?;
        // Open with `create_new`, which fails if the file already exists.
        std::fs::File::create_new(&lock_path).map_err(fail)?;

        Ok(Lockfile { path: lock_path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Lockfile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            log::error!("Unable to remove lockfile {:?}: {e}", self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_is_exclusive_until_dropped() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("views.yml");

        let lock = Lockfile::for_file(&file).unwrap();
        assert_eq!(lock.path(), tmp.path().join("views.lock"));
        assert!(lock.path().exists());

        let err = Lockfile::for_file(&file).unwrap_err();
        let LockfileError::Acquire { cause, .. } = err;
        assert_eq!(cause.kind(), io::ErrorKind::AlreadyExists);

        drop(lock);
        assert!(!tmp.path().join("views.lock").exists());
        Lockfile::for_file(&file).unwrap();
    }
}
