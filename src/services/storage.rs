use std::io;
use std::path::{Path, PathBuf};

/// Prefix given to every recolored output file.
pub const OUTPUT_PREFIX: &str = "mapped_";

/// On-disk locations for uploaded originals and recolored results
#[derive(Debug, Clone)]
pub struct Storage {
    upload_dir: PathBuf,
    processed_dir: PathBuf,
}

impl Storage {
    pub fn new(upload_dir: impl Into<PathBuf>, processed_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            processed_dir: processed_dir.into(),
        }
    }

    /// Create both directories if they do not exist yet.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.upload_dir)?;
        std::fs::create_dir_all(&self.processed_dir)?;
        tracing::debug!(
            uploads = %self.upload_dir.display(),
            processed = %self.processed_dir.display(),
            "Storage directories ready"
        );
        Ok(())
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn processed_dir(&self) -> &Path {
        &self.processed_dir
    }

    /// Write an uploaded original. `filename` must already be sanitized.
    pub async fn save_upload(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.upload_dir.join(filename);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Write a recolored PNG. `filename` must already be sanitized.
    pub async fn save_processed(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.processed_dir.join(filename);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }
}

/// Reduce a client-supplied file name to a safe single path component.
///
/// Directory parts (either separator) are dropped and every character
/// outside `[A-Za-z0-9._-]` becomes `_`. Returns `None` when nothing usable
/// is left.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name).trim();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        None
    } else {
        Some(cleaned)
    }
}

/// Name of the recolored output for an uploaded file: `mapped_<stem>.png`.
pub fn output_name(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    format!("{OUTPUT_PREFIX}{stem}.png")
}
