//! スクリプト本文からのフィールド抽出
//!
//! 4種類のスキャンはそれぞれ独立しており、結果は出現順に並ぶ。
//! 一致なしは空のVecで表し、エラーにはしない。

use super::patterns::{
    contains_name_keyword, IMAGE_RE, LINK_RE, LITERAL_NAME_RES, QUOTED_RE, YEAR_RE,
};

/// 1つのスクリプトブロックから抽出した生データ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionBundle {
    /// base64ペイロード（`data:image/jpeg;base64,` は含まない）
    pub images: Vec<String>,
    /// 作品名候補（重複なし）
    pub names: Vec<String>,
    /// 4桁の年（重複あり）
    pub years: Vec<String>,
    /// Google検索リンク
    pub links: Vec<String>,
}

impl ExtractionBundle {
    pub fn scan(script: &str) -> Self {
        Self {
            images: extract_images(script),
            names: extract_names(script),
            years: extract_years(script),
            links: extract_links(script),
        }
    }

    /// 画像と作品名の両方が見つかっているか
    pub fn is_correlatable(&self) -> bool {
        !self.images.is_empty() && !self.names.is_empty()
    }
}

pub fn extract_images(script: &str) -> Vec<String> {
    IMAGE_RE
        .captures_iter(script)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// 作品名を2段階で抽出する
///
/// 1. 既知作品名の完全一致（参照テーブル順、出現ごとに追加）
/// 2. キーワードを含む10〜50文字の引用符付き文字列（未登録のもののみ追加）
pub fn extract_names(script: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for (name, re) in LITERAL_NAME_RES.iter() {
        names.extend(re.find_iter(script).map(|_| name.to_string()));
    }

    for caps in QUOTED_RE.captures_iter(script) {
        let quoted = &caps[1];
        if contains_name_keyword(quoted) && !names.iter().any(|n| n == quoted) {
            names.push(quoted.to_string());
        }
    }

    names
}

pub fn extract_years(script: &str) -> Vec<String> {
    YEAR_RE
        .find_iter(script)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn extract_links(script: &str) -> Vec<String> {
    LINK_RE
        .find_iter(script)
        .map(|m| m.as_str().to_string())
        .collect()
}
