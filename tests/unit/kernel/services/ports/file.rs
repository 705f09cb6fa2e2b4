use super::*;
use std::error::Error;

#[test]
fn file_error_display_names_path() {
    let err = FileError::NotFound(PathBuf::from("/test/a.txt"));
    assert!(err.to_string().contains("/test/a.txt"));

    let err = FileError::InvalidUtf8(PathBuf::from("/bin/blob"));
    assert!(err.to_string().contains("UTF-8"));
}

#[test]
fn io_errors_keep_their_source() {
    let err: FileError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
    assert!(matches!(err, FileError::Io(_)));
    assert!(err.source().is_some());
}
