//! 保存済みHTMLページからの作品抽出
//!
//! 処理の流れ: ページ読み込み → スクリプト特定 → フィールド抽出 → 対応付け

pub mod correlate;
pub mod fields;
pub mod patterns;
pub mod script;

pub use correlate::correlate;
pub use fields::ExtractionBundle;
pub use script::locate_image_script;

use crate::error::{ExtractorError, Result};
use crate::types::Artwork;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 1ページ分のHTMLを保持する抽出器
#[derive(Debug, Clone)]
pub struct VanGoghExtractor {
    path: PathBuf,
    html: String,
}

impl VanGoghExtractor {
    /// HTMLファイルを読み込む（UTF-8前提）
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExtractorError::FileNotFound(path.display().to_string()));
        }

        let html = std::fs::read_to_string(path)?;
        debug!("読み込み: {} ({} bytes)", path.display(), html.len());

        Ok(Self {
            path: path.to_path_buf(),
            html,
        })
    }

    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            path: PathBuf::new(),
            html: html.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extract_artworks(&self) -> Vec<Artwork> {
        extract_artworks(&self.html)
    }
}

/// HTML文字列から作品レコードを抽出する
///
/// 画像データを含むスクリプトがない場合、または画像・作品名のどちらかが
/// 見つからない場合は空のVecを返す。それ以外は参照テーブルと同じ8件。
pub fn extract_artworks(html: &str) -> Vec<Artwork> {
    let Some(script) = locate_image_script(html) else {
        warn!("画像データを含むスクリプトが見つかりません");
        return Vec::new();
    };

    let bundle = ExtractionBundle::scan(script);
    debug!(
        "抽出結果: 画像{}件, 作品名{}件, 年{}件, リンク{}件",
        bundle.images.len(),
        bundle.names.len(),
        bundle.years.len(),
        bundle.links.len()
    );

    if !bundle.is_correlatable() {
        warn!("画像または作品名が見つからないため対応付けをスキップします");
        return Vec::new();
    }

    let artworks = correlate(&bundle);
    info!("{}件の作品を抽出", artworks.len());
    artworks
}
