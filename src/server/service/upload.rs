//! Image upload storage.

use std::path::{Path, PathBuf};

use dioxus_logger::tracing;

use crate::server::{
    error::{upload::UploadError, AppError},
    util::filename::{allowed_file, secure_filename},
};

/// Writes uploaded images into a fixed directory.
pub struct UploadService<'a> {
    upload_dir: &'a Path,
}

impl<'a> UploadService<'a> {
    pub fn new(upload_dir: &'a Path) -> Self {
        Self { upload_dir }
    }

    /// Validates the client file name and stores the bytes unmodified.
    ///
    /// The directory is created on demand. A file with the same sanitized name is
    /// overwritten.
    ///
    /// # Arguments
    /// - `file_name` - Name sent by the client
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - Sanitized name the file was stored under
    /// - `Err(AppError::UploadErr(NoFileSelected))` - Empty file name
    /// - `Err(AppError::UploadErr(InvalidFileType))` - Extension not allowed, or nothing
    ///   left after sanitizing; nothing is written
    /// - `Err(AppError::IoErr)` - Directory creation or write failed
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        let stored_name = Self::check_file_name(file_name)?;

        tokio::fs::create_dir_all(self.upload_dir).await?;
        tokio::fs::write(self.path_for(&stored_name), bytes).await?;

        tracing::info!(
            "Stored upload {} ({} bytes) in {}",
            stored_name,
            bytes.len(),
            self.upload_dir.display()
        );

        Ok(stored_name)
    }

    /// Applies the upload name rules without touching the filesystem.
    pub fn check_file_name(file_name: &str) -> Result<String, UploadError> {
        if file_name.is_empty() {
            return Err(UploadError::NoFileSelected);
        }

        if !allowed_file(file_name) {
            return Err(UploadError::InvalidFileType);
        }

        let secured = secure_filename(file_name);
        if !allowed_file(&secured) {
            return Err(UploadError::InvalidFileType);
        }

        Ok(secured)
    }

    fn path_for(&self, stored_name: &str) -> PathBuf {
        self.upload_dir.join(stored_name)
    }
}
