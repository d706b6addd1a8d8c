//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use van_gogh_extractor::config::Config;
use van_gogh_extractor::error::ExtractorError;
use van_gogh_extractor::fallback::{decode_data_uri, fallback_image};
use van_gogh_extractor::output::save_images;
use van_gogh_extractor::{Artwork, VanGoghExtractor};
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.html");

    let err = VanGoghExtractor::load(&path).unwrap_err();
    assert!(matches!(err, ExtractorError::FileNotFound(_)));
    assert!(format!("{}", err).contains("missing.html"));
}

/// UTF-8でないファイルを読み込んだ場合
#[test]
fn test_load_non_utf8_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("page.html");
    std::fs::write(&path, [0xFF, 0xFE, 0x00, 0x3C]).unwrap();

    let err = VanGoghExtractor::load(&path).unwrap_err();
    assert!(matches!(err, ExtractorError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// ディレクトリを読み込んだ場合
#[test]
fn test_load_directory() {
    let dir = tempdir().expect("Failed to create temp dir");

    let result = VanGoghExtractor::load(dir.path());
    assert!(matches!(result, Err(ExtractorError::Io(_))));
}

/// 画像データのないページはエラーではなく空
#[test]
fn test_page_without_images_is_not_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("page.html");
    std::fs::write(&path, "<html><script>var a = 1;</script></html>").unwrap();

    let artworks = VanGoghExtractor::load(&path).unwrap().extract_artworks();
    assert!(artworks.is_empty());
}

/// 壊れた設定ファイル
#[test]
fn test_invalid_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid }").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ExtractorError::JsonParse(_)));
}

/// デコードできない画像
#[test]
fn test_decode_invalid_payload() {
    let err = decode_data_uri("data:image/jpeg;base64,A").unwrap_err();
    assert!(matches!(err, ExtractorError::ImageDecode(_)));

    let err = decode_data_uri("https://example.com/a.jpg").unwrap_err();
    assert!(format!("{}", err).contains("画像デコードエラー"));
}

/// 画像保存時のデコード失敗は処理を止めない
#[test]
fn test_save_images_skips_undecodable() {
    let dir = tempdir().expect("Failed to create temp dir");
    let artworks = vec![
        Artwork {
            name: "The Starry Night".into(),
            extensions: vec!["1889".into()],
            link: String::new(),
            image: "data:image/jpeg;base64,A".into(),
        },
        Artwork {
            name: "Self-Portrait".into(),
            extensions: vec!["1889".into()],
            link: String::new(),
            image: fallback_image(),
        },
    ];

    let saved = save_images(&artworks, &dir.path().join("images")).unwrap();
    assert!(saved.is_empty());
}

/// 保存先がファイルの場合
#[test]
fn test_save_images_into_file_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("images");
    std::fs::write(&blocker, "not a dir").unwrap();

    let result = save_images(&[], &blocker);
    assert!(matches!(result, Err(ExtractorError::Io(_))));
}
