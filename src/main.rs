use anyhow::Result;
use clap::Parser;
use codeteria::config::Config;
use codeteria::core::SnippetCatalog;
use codeteria::logging;
use codeteria::tui::start;

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.log_file.as_deref())?;

    start(SnippetCatalog::default(), config.timing()).await?;
    Ok(())
}
