//! Writing the numbered wordlist to disk.

use std::io::BufWriter;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::{Result, WordlistError};
use crate::numbering::write_numbered;

/// Write `words` with their dice codes to `path`.
///
/// Lines go to a temporary file next to `path` which replaces it only after
/// every line was written, so a failed run leaves any previous list intact.
pub fn write_wordlist<P, S>(path: P, words: &[S]) -> Result<()>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let write_err = |source| WordlistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = create_temp(dir).map_err(write_err)?;
    write_numbered(words, BufWriter::new(file.as_file_mut())).map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    tracing::info!(path = %path.display(), lines = words.len(), "wordlist written");
    Ok(())
}

/// Temp file created with mode 0666 before umask, like a plain `File::create`.
#[cfg(unix)]
fn create_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
