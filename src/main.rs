use anyhow::Result;
use clap::Parser;
use growth_lens::{Cli, app};

fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Warn, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("growth_lens"), my_code_level)
        .init();

    let args = Cli::parse();
    app::run_dashboard(&args)
}
