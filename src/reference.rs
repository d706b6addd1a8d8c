//! 既知作品の参照テーブル
//!
//! 出力レコードの名前・制作年・並び順はすべてこのテーブルで決まる

/// 参照テーブルの1エントリ（作品名・制作年）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub name: &'static str,
    pub year: &'static str,
}

impl ReferenceEntry {
    const fn new(name: &'static str, year: &'static str) -> Self {
        Self { name, year }
    }

    /// 検索リンクが抽出できなかった場合に使うGoogle検索URL
    pub fn search_link(&self) -> String {
        format!("https://www.google.com/search?q={}", self.name.replace(' ', "+"))
    }
}

/// 既知作品（順序固定・8件）
pub const KNOWN_PAINTINGS: [ReferenceEntry; 8] = [
    ReferenceEntry::new("The Starry Night", "1889"),
    ReferenceEntry::new("Van Gogh self-portrait", "1889"),
    ReferenceEntry::new("The Potato Eaters", "1885"),
    ReferenceEntry::new("Wheatfield with Crows", "1890"),
    ReferenceEntry::new("Café Terrace at Night", "1888"),
    ReferenceEntry::new("Almond Blossoms", "1890"),
    ReferenceEntry::new("Vase with Fifteen Sunflowers", "1888"),
    ReferenceEntry::new("Self-Portrait", "1889"),
];
