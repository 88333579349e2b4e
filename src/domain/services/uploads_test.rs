use std::env;
use std::error::Error;

use anyhow::Result;

use super::decode_text;
use super::read_text_file;

#[test]
fn it_decodes_utf8_text() {
    let res = decode_text("Grüße aus Köln".as_bytes().to_vec()).unwrap();
    assert_eq!(res, "Grüße aus Köln");
}

#[test]
fn it_rejects_invalid_utf8_with_a_fixed_message() {
    let err = decode_text(vec![0xff, 0xfe]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Datei konnte nicht als UTF-8 Text gelesen werden."
    );
    assert!(err
        .source()
        .unwrap()
        .is::<std::string::FromUtf8Error>());
}

#[tokio::test]
async fn it_reads_text_files() -> Result<()> {
    let path = env::temp_dir().join("blaupause-upload-test.txt");
    std::fs::write(&path, "Projekt Notizen")?;

    let res = read_text_file(&path).await?;
    assert_eq!(res, "Projekt Notizen");

    std::fs::remove_file(&path)?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_missing_files() {
    let path = env::temp_dir().join("blaupause-missing-file-test.txt");
    let res = read_text_file(&path).await;
    assert!(res.is_err());
}
