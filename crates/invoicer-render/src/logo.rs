//! Logo files read from disk.

use std::io;
use std::path::PathBuf;

use invoicer_core::LogoSource;
use tracing::debug;

/// Reads logos from the filesystem.
///
/// Relative paths resolve against `base_dir` when one is set, otherwise
/// against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct FsLogoSource {
    base_dir: Option<PathBuf>,
}

impl FsLogoSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        FsLogoSource {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(path),
            None => PathBuf::from(path),
        }
    }
}

impl LogoSource for FsLogoSource {
    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        let resolved = self.resolve(path);
        debug!(path = %resolved.display(), "Reading logo");
        std::fs::read(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicer_core::{CoreError, InvoiceBuilder};

    #[test]
    fn test_reads_relative_to_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logo.png"), b"\x89PNG").unwrap();

        let source = FsLogoSource::with_base_dir(dir.path());
        assert_eq!(source.read("logo.png").unwrap(), b"\x89PNG".to_vec());
    }

    #[test]
    fn test_data_uri_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.svg");
        std::fs::write(&path, b"<svg/>").unwrap();

        let invoice = InvoiceBuilder::new("Invoice")
            .logo(path.to_string_lossy())
            .build();

        let uri = invoice.logo_data_uri(&FsLogoSource::new()).unwrap().unwrap();
        assert_eq!(uri, "data:image/svg;base64,PHN2Zy8+");
    }

    #[test]
    fn test_missing_logo_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let invoice = InvoiceBuilder::new("Invoice").logo("nope.png").build();

        let err = invoice
            .logo_data_uri(&FsLogoSource::with_base_dir(dir.path()))
            .unwrap_err();
        assert!(matches!(err, CoreError::Logo { ref path, .. } if path == "nope.png"));
    }
}
