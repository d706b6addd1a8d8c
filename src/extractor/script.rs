//! スクリプトブロックの特定

use super::patterns::{IMAGE_MARKER, SCRIPT_RE};
use tracing::debug;

/// ページ内のスクリプトブロック本文を文書順にすべて返す
pub fn script_blocks(html: &str) -> Vec<&str> {
    SCRIPT_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// 画像データを含む最初のスクリプトブロックを返す
///
/// 該当が複数あっても先頭のみを使い、残りは無視する
pub fn locate_image_script(html: &str) -> Option<&str> {
    let blocks = script_blocks(html);
    debug!("スクリプトブロック: {}件", blocks.len());

    blocks
        .into_iter()
        .enumerate()
        .find(|(_, block)| block.contains(IMAGE_MARKER))
        .map(|(index, block)| {
            debug!("画像データを含むブロック: #{} ({} bytes)", index, block.len());
            block
        })
}
