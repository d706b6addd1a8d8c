use clap::Parser;
use std::io::Write;
use tracing::info;
use van_gogh_extractor::{cli, config, error, output, VanGoghExtractor};
use cli::Cli;
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let config = Config::load()?;
    let input = config.resolve_input(cli.html_file);

    let extractor = VanGoghExtractor::load(&input)?;
    let artworks = extractor.extract_artworks();
    info!("{}: {}件", extractor.path().display(), artworks.len());

    match &cli.output {
        Some(path) => {
            let json = output::to_json_string(&artworks, config.indent)?;
            std::fs::write(path, json)?;
            info!("結果を保存: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            output::write_json(&mut handle, &artworks, config.indent)?;
            handle.flush()?;
        }
    }

    if let Some(dir) = &cli.save_images {
        let saved = output::save_images(&artworks, dir)?;
        info!("{}枚の画像を保存: {}", saved.len(), dir.display());
    }

    Ok(())
}
