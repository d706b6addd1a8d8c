use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "van-gogh-extractor")]
#[command(about = "保存済みHTMLからゴッホ作品のレコードをJSONで出力", long_about = None)]
pub struct Cli {
    /// 入力HTMLファイル（デフォルト: files/van-gogh-paintings.html）
    pub html_file: Option<PathBuf>,

    /// 出力JSONファイル（省略時は標準出力）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 抽出した画像をJPEGとして保存するフォルダ
    #[arg(long)]
    pub save_images: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
