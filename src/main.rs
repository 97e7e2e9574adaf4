use clap::Parser;
use htserve::cli::Cli;
use htserve::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = cli.load_config()?;

    if cli.print_config {
        print!("{}", cfg.to_toml()?);
        return Ok(());
    }

    logger::init(&cfg)?;

    // One thread; connections never run in parallel
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let local = tokio::task::LocalSet::new();
    runtime.block_on(local.run_until(server::run(cfg)))?;
    Ok(())
}
