use crate::error::{ExtractorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "files/van-gogh-paintings.html";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTMLファイル未指定時の入力
    pub default_input: PathBuf,
    /// JSON出力のインデント幅
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_input: PathBuf::from(DEFAULT_INPUT),
            indent: 2,
        }
    }
}

impl Config {
    /// `~/.config/van-gogh-extractor/config.json` を読み込む
    ///
    /// ファイルもホームディレクトリもなければデフォルト設定
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ExtractorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home
            .join(".config")
            .join("van-gogh-extractor")
            .join("config.json"))
    }

    /// コマンドライン引数を優先して入力ファイルを決める
    pub fn resolve_input(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.unwrap_or_else(|| self.default_input.clone())
    }
}
