use std::io;

use create_vanilla::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();

    assert!(matches!(err, Error::JsonError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::NotFoundError { path: "template/base".to_string() };
    assert_eq!(err.to_string(), "Path 'template/base' does not exist.");

    let err = Error::ValidationError("Invalid package.json name".to_string());
    assert_eq!(err.to_string(), "Validation error: Invalid package.json name.");

    let err = Error::RenameCollisionError {
        from: "src/app.js".to_string(),
        to: "src/app.ts".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Cannot rename 'src/app.js' to 'src/app.ts': destination already exists."
    );

    assert_eq!(Error::CancelledError.to_string(), "✖ Operation cancelled");
}
