//! 代替画像（Fallback Asset）
//!
//! 抽出した画像が足りない位置に差し込む固定のJPEG

use crate::error::{ExtractorError, Result};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// 埋め込み画像のMIMEプレフィックス
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// 代替画像のbase64ペイロード
pub const FALLBACK_IMAGE_BASE64: &str = "/9j/4AAQSkZJRgABAQAAAQABAAD/2wCEAAkGBxMTEhUTExQWFhUXGRsbGBgYGB8eGxgYGSAXGBsYGhgeHSggGhslHRoaITEiJSkrLi4uGx8zODMtNygtLisBCgoKDQwNGg8PGjclHyU3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3Nzc3N//AABEIAMgA/AMBIgACEQEDEQH/xAAbAAACAwEBAQAAAAAAAAAAAAAEBQIDBgEAB//EAD4QAAECBAQEAwcDAgYCAgMAAAECEQADITEEEkFRBWFxgSKRoRMyQrHB0fAGUuFi8RQjcoKSshWiJDNDU4P/xAAaAQADAQEBAQAAAAAAAAAAAAABAgMABAUG/8QAKxEAAgICAgIBAwMEAwAAAAAAAAECEQMhEjEEQRMiUWFxgeEFMvDxFDOR/9oADAMBAAIRAxEAPwD5zg0qStw5O4KutGH0MFS050hOnIK15kjWB1zGJcaG2j033i/Bq8VFE/6Qq3cx6SikyDbNlw/BhOUgA5aeIVDCz72Nt2hhNwZuXD3rTodfWIYaYkgM+Wz6AaPuzN2gyZMBdVASzl6eG3SPI8yeaORcFobGotPkZXjfA5fsTkQE5HU4JzJqmm5SxNNIyilzAySCwDAsHIvUmN9xlvZLUFgUIIe42PlpGI9k9A3n949bBj5RTYnIZfp1ExRIOYpoGJdLchZwBDPH8LlqSpSUkKZqH3ahlDm/mH2jOcNxpl0FWIcOCCRqHtTb6Q4mcfmqoiUDuS1X0501pEpwm3Fw6D977M97QihB0eoPSrQ1whdKKqFgNQKvXUVZtooxWF8LrStBc+HJmT5vFvAUJMwEg6/C4Gz0p1NK6NHVFNdivZrcFhUozGhdmJubnp5xViuHJWA48QsoaMaE6vW7xecSksXBJZkitTcUqC/Tk4iudMYqC";

/// ページ内のペイロードはパディング有無が揃っていないので寛容にデコードする
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// base64ペイロードをData URIにする
pub fn jpeg_data_uri(payload: &str) -> String {
    format!("{}{}", JPEG_DATA_URI_PREFIX, payload)
}

/// 代替画像のData URI
pub fn fallback_image() -> String {
    jpeg_data_uri(FALLBACK_IMAGE_BASE64)
}

/// 代替画像かどうか
pub fn is_fallback(data_uri: &str) -> bool {
    data_uri
        .strip_prefix(JPEG_DATA_URI_PREFIX)
        .is_some_and(|payload| payload == FALLBACK_IMAGE_BASE64)
}

/// Data URIをJPEGバイト列に戻す
pub fn decode_data_uri(data_uri: &str) -> Result<Vec<u8>> {
    let payload = data_uri
        .strip_prefix(JPEG_DATA_URI_PREFIX)
        .ok_or_else(|| ExtractorError::ImageDecode("JPEGのData URIではありません".into()))?;

    LENIENT
        .decode(payload)
        .map_err(|e| ExtractorError::ImageDecode(e.to_string()))
}
