use anyhow::Result;
use clap::Parser;
use retro_snake::game::GameConfig;
use retro_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "retro_snake")]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Cells per side of the square grid (the starting snake needs at
    /// least 12)
    #[arg(long, default_value = "25", value_parser = clap::value_parser!(i32).range(12..=100))]
    cell_count: i32,

    /// Logical tick interval in milliseconds
    #[arg(long, default_value = "200", value_parser = clap::value_parser!(u64).range(20..=2000))]
    tick_ms: u64,

    /// Disable the terminal-bell sound cues
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.cell_count, cli.tick_ms);

    let mut mode = HumanMode::new(config, cli.mute);
    mode.run().await?;

    Ok(())
}
