//! Upload file name checks.

/// Extensions accepted by `/upload`, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Whether the text after the last `.` is an allowed extension, ignoring case.
pub fn allowed_file(file_name: &str) -> bool {
    file_name.rsplit_once('.').is_some_and(|(_, extension)| {
        ALLOWED_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
    })
}

/// Reduces a client supplied file name to a safe single path component.
///
/// Non-ASCII characters are dropped, path separators count as whitespace, runs of
/// whitespace become one `_`, anything outside `[A-Za-z0-9_.-]` is removed and leading
/// or trailing `.`/`_` are stripped. The result may be empty.
pub fn secure_filename(file_name: &str) -> String {
    let ascii: String = file_name
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}
