//! Library-level file generation

use std::fs;
use tempfile::TempDir;

use gen_error_map::generator::{FOOTER, HEADER};
use gen_error_map::{generate_file, GenerateError, Generator, TableTemplate};

#[test]
fn test_generate_file_counts_entries() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("signon-errors.h");
    let dest = temp_dir.path().join("map.c");
    fs::write(
        &source,
        "SIGNON_ERROR_UNKNOWN,\n#define OTHER_CONSTANT 5\n\nSIGNON_ERROR_INTERNAL_SERVER,\n",
    )
    .unwrap();

    let count = generate_file(&source, &dest).unwrap();
    assert_eq!(count, 2);
    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        format!(
            "{HEADER}{{ SIGNON_ERROR_UNKNOWN, SIGNOND_UNKNOWN_ERR_NAME }},\n\
             {{ SIGNON_ERROR_INTERNAL_SERVER, SIGNOND_INTERNAL_SERVER_ERR_NAME }},\n\
             {FOOTER}"
        )
    );
}

#[test]
fn test_generate_file_twice_is_identical() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("in.h");
    let first = temp_dir.path().join("first.c");
    let second = temp_dir.path().join("second.c");
    fs::write(&source, "  SIGNON_ERROR_A = 1,\nsignon_error_b\nSIGNON_ERROR_").unwrap();

    generate_file(&source, &first).unwrap();
    generate_file(&source, &second).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_source_is_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("out.c");

    let err = generate_file(temp_dir.path(), &dest).unwrap_err();
    // Opening a directory succeeds on some platforms; reading it never does.
    assert!(matches!(
        err,
        GenerateError::OpenSource { .. } | GenerateError::ReadSource { .. }
    ));
    assert!(fs::read_to_string(&dest).unwrap().starts_with(HEADER));
}

#[test]
fn test_missing_source_leaves_header() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("missing.h");
    let dest = temp_dir.path().join("out.c");

    let err = generate_file(&source, &dest).unwrap_err();
    match err {
        GenerateError::OpenSource { path, source: io } => {
            assert_eq!(path, temp_dir.path().join("missing.h"));
            assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fs::read_to_string(&dest).unwrap(), HEADER);
}

#[test]
fn test_uncreatable_destination() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("missing-dir").join("out.c");
    // Source does not exist either; the destination error must come first.
    let source = temp_dir.path().join("missing.h");

    let err = generate_file(&source, &dest).unwrap_err();
    assert!(matches!(err, GenerateError::CreateDestination { ref path, .. } if *path == dest));
}

#[test]
fn test_custom_template_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("in.h");
    let dest = temp_dir.path().join("out.c");
    fs::write(&source, "ACME_ERROR_DISK_FULL,\n").unwrap();

    let template = TableTemplate {
        header: "/* acme */\n".to_string(),
        footer: "/* end */\n".to_string(),
        constant_prefix: "ACME_ERROR_".to_string(),
        name_prefix: "ACME_".to_string(),
        name_suffix: "_ERR_NAME".to_string(),
    };
    let count = Generator::new(template)
        .unwrap()
        .generate_file(&source, &dest)
        .unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "/* acme */\n{ ACME_ERROR_DISK_FULL, ACME_DISK_FULL_ERR_NAME },\n/* end */\n"
    );
}

#[test]
fn test_cr_only_source_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("mac.h");
    let dest = temp_dir.path().join("out.c");
    fs::write(&source, "SIGNON_ERROR_UNKNOWN,\r  SIGNON_ERROR_SSL\r").unwrap();

    let count = generate_file(&source, &dest).unwrap();
    assert_eq!(count, 2);
    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        format!(
            "{HEADER}{{ SIGNON_ERROR_UNKNOWN, SIGNOND_UNKNOWN_ERR_NAME }},\n  \
             {{ SIGNON_ERROR_SSL, SIGNOND_SSL_ERR_NAME }},\n\
             {FOOTER}"
        )
    );
}
