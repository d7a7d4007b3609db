//! Loading, modifying and saving a configuration file.
//!
//! Reads `config.json` (or the path given as the first argument), sets
//! `pluginsPath`, and writes the file back. Any error ends the program.
//!
//! Run with: cargo run --example config_file -- path/to/config.json

use serde_jsonkit::{store, Config};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());

    let mut config: Config = store::load(&path)?;
    println!("{:#?}", config);

    config.plugins_path = "usr/bin/plugins/".to_string();
    store::save(&path, &config)?;

    Ok(())
}
