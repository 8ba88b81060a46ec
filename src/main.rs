use std::io::{self, Write};

use anyhow::Context;
use mars_inventory::InventoryAnalyzer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let analyzer = InventoryAnalyzer::default();
    let stdout = io::stdout();
    let mut console = stdout.lock();

    analyzer
        .run(&mut console)
        .context("writing to the console")?;
    console.flush().context("flushing the console")?;
    Ok(())
}
