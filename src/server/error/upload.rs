use thiserror::Error;

/// Rejections of `POST /upload` input.
///
/// Every variant maps to `400 Bad Request` with the display text as the plain-text body.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    /// The multipart body has no `image` part.
    #[error("No file part")]
    MissingFilePart,

    /// The `image` part was sent without a file name.
    #[error("No File selected")]
    NoFileSelected,

    /// The extension is not allowed or nothing usable is left after sanitizing the name.
    #[error("Invalid file type")]
    InvalidFileType,
}
