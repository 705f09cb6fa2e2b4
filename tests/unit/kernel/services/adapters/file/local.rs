use super::*;
use tempfile::tempdir;

#[test]
fn written_text_reads_back_verbatim() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("crlf.txt");
    let provider = LocalFileProvider::new();

    provider.write_file(&path, "first\r\nsecond").unwrap();
    assert!(path.is_file());
    assert_eq!(provider.read_file(&path).unwrap(), "first\r\nsecond");

    provider.write_file(&path, "").unwrap();
    assert_eq!(provider.read_file(&path).unwrap(), "");
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let provider = LocalFileProvider::new();
    let err = provider.read_file(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, FileError::NotFound(_)));
}

#[test]
fn directory_is_not_a_file() {
    let dir = tempdir().unwrap();
    let provider = LocalFileProvider::new();
    let err = provider.read_file(dir.path()).unwrap_err();
    assert!(matches!(err, FileError::NotAFile(_)));

    let err = provider.write_file(dir.path(), "x").unwrap_err();
    assert!(matches!(err, FileError::NotAFile(_)));
}

#[test]
fn binary_content_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.bin");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let provider = LocalFileProvider::new();
    let err = provider.read_file(&path).unwrap_err();
    assert!(matches!(err, FileError::InvalidUtf8(_)));
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let provider = LocalFileProvider::new();
    let err = provider
        .write_file(&dir.path().join("missing").join("a.txt"), "x")
        .unwrap_err();
    assert!(matches!(err, FileError::Io(_)));
}
