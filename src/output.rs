//! 抽出結果の出力

use crate::error::Result;
use crate::fallback::{decode_data_uri, is_fallback};
use crate::types::Artwork;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 作品レコードを整形済みJSONとして書き出す
pub fn write_json<W: Write>(writer: &mut W, artworks: &[Artwork], indent: usize) -> Result<()> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
    artworks.serialize(&mut serializer)?;
    writeln!(writer)?;
    Ok(())
}

pub fn to_json_string(artworks: &[Artwork], indent: usize) -> Result<String> {
    let mut buf = Vec::new();
    write_json(&mut buf, artworks, indent)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// 各レコードの画像を `<番号>-<slug>.jpg` として保存する
///
/// 代替画像のレコードとデコードできない画像はスキップする。
/// 保存したファイルのパスを返す。
pub fn save_images(artworks: &[Artwork], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut saved = Vec::new();
    for (i, artwork) in artworks.iter().enumerate() {
        if is_fallback(&artwork.image) {
            debug!("代替画像のためスキップ: {}", artwork.name);
            continue;
        }

        let bytes = match decode_data_uri(&artwork.image) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("画像を保存できません ({}): {}", artwork.name, e);
                continue;
            }
        };

        let path = dir.join(format!("{}-{}.jpg", i, artwork.slug()));
        std::fs::write(&path, bytes)?;
        saved.push(path);
    }

    Ok(saved)
}
