//! Twisty cube simulator, sticker mapper, and LED strip driver.

mod cli;
mod prefs;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;

    // Initialize logging. Set `RUST_LOG=debug` to see device output.
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args)
}
