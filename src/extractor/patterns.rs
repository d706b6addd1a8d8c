//! 抽出に使う正規表現とキーワード

use crate::reference::KNOWN_PAINTINGS;
use regex::Regex;

/// 画像データを含むスクリプトかどうかの判定マーカー
pub const IMAGE_MARKER: &str = "data:image/jpeg";

/// 引用符付き文字列を作品名候補とみなすキーワード（小文字で比較）
pub const NAME_KEYWORDS: &[&str] = &[
    "starry",
    "potato",
    "sunflower",
    "portrait",
    "terrace",
    "blossom",
    "wheatfield",
];

lazy_static::lazy_static! {
    /// `<script ...>...</script>` の中身（改行をまたいで最短一致）
    pub static ref SCRIPT_RE: Regex = Regex::new(r"(?s)<script[^>]*>(.*?)</script>").unwrap();

    /// JPEGのbase64ペイロード
    pub static ref IMAGE_RE: Regex =
        Regex::new(r"data:image/jpeg;base64,([A-Za-z0-9+/]+=*)").unwrap();

    /// 1800〜1999年の4桁
    pub static ref YEAR_RE: Regex = Regex::new(r"\b(18\d{2}|19\d{2})\b").unwrap();

    /// Google検索リンク
    pub static ref LINK_RE: Regex =
        Regex::new(r#"https://www\.google\.com/search\?[^"\s]+"#).unwrap();

    /// 10〜50文字の引用符付き文字列
    pub static ref QUOTED_RE: Regex = Regex::new(r#""([^"]{10,50})""#).unwrap();

    /// 既知作品名を引用符付きで完全一致させるパターン（参照テーブル順）
    pub static ref LITERAL_NAME_RES: Vec<(&'static str, Regex)> = KNOWN_PAINTINGS
        .iter()
        .map(|entry| {
            let pattern = format!("\"{}\"", regex::escape(entry.name));
            (entry.name, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// 作品名キーワードを含むか（大文字小文字を無視）
pub fn contains_name_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    NAME_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}
