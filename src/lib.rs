//! Van Gogh Extractor
//!
//! 保存済みのHTMLページに埋め込まれたスクリプトから、既知のゴッホ作品
//! 8件のレコード（作品名・制作年・検索リンク・base64画像）を抽出する

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fallback;
pub mod output;
pub mod reference;
pub mod types;

pub use error::{ExtractorError, Result};
pub use extractor::{extract_artworks, VanGoghExtractor};
pub use reference::{ReferenceEntry, KNOWN_PAINTINGS};
pub use types::Artwork;
