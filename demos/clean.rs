// demos/clean.rs
//! Strip identifying TEXT keys from every dataset of an FCS file.
//!
//! Usage: `cargo run --example clean -- input.lmd output.lmd`
use fcs_rs::*;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("usage: clean <input> <output>");
        std::process::exit(2);
    };

    let mut dataset = reader::read_file(&input)?;
    let removed = dataset.scrub_identifying_keys();
    let written = writer::write_file(&output, &mut dataset)?;

    info!(
        datasets = dataset.chain_len(),
        removed,
        bytes = written,
        "Cleaned {} into {}", input, output
    );
    Ok(())
}
