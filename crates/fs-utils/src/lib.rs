use std::io::{self, Write};
use std::path::Path;

pub mod lockfile;

pub fn create_parent_dir(file: &Path) -> Result<(), io::Error> {
    // If the path doesn't have a parent,
    // i.e. is a single-component path with just a root or is empty,
    // do nothing.
    let Some(parent) = file.parent() else {
        return Ok(());
    };

    // If the `file` path is a relative path with no directory component,
    // `parent` will be the empty path.
    // In this case, do not attempt to create a directory.
    if parent == Path::new("") {
        return Ok(());
    }
    std::fs::create_dir_all(parent)
}

/// Replace the contents of `file_path` with `data` in a single step.
///
/// The data is written to a temporary file in the same directory, flushed,
/// and then renamed over `file_path`. Readers see either the old or the new
/// contents, never a partial write.
pub fn atomic_write(file_path: &Path, data: impl AsRef<[u8]>) -> io::Result<()> {
    create_parent_dir(file_path)?;
    let dir = match file_path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(data.as_ref())?;
    tmp.as_file().sync_all()?;
    tmp.persist(file_path).map_err(|e| e.error)?;
    log::trace!("atomically replaced {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_creates_and_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sub").join("views.yml");

        atomic_write(&path, "views:\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "views:\n");

        atomic_write(&path, b"views: []\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "views: []\n");

        // Only the target is left behind, no temporaries.
        let entries = std::fs::read_dir(tmp.path().join("sub")).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn atomic_write_below_a_regular_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        assert!(atomic_write(&blocker.join("views.yml"), "views:\n").is_err());
    }
}
