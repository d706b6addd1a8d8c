//! 出力レコード型

use serde::{Deserialize, Serialize};

/// 作品1件分のレコード
///
/// JSONのキー順は `name`, `extensions`, `link`, `image` で固定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub name: String,
    /// 現状は制作年のみを1要素で保持
    pub extensions: Vec<String>,
    pub link: String,
    /// `data:image/jpeg;base64,` で始まるData URI
    pub image: String,
}

impl Artwork {
    /// ファイル名に使える小文字・ハイフン区切りの名前
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        let mut last_dash = true;
        for c in self.name.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        slug.trim_end_matches('-').to_string()
    }
}
