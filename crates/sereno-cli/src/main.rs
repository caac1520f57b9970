mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{HydrationCommand, PomodoroCommand, ScreenCommand, WaterCommand};

#[derive(Parser)]
#[command(name = "sereno")]
#[command(about = "Sereno CLI - Control the wellbeing dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard state
    Status {
        /// Print as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Control the pomodoro work/break timer
    #[command(subcommand)]
    Pomodoro(PomodoroCommand),
    /// Control screen-time tracking
    #[command(subcommand)]
    Screen(ScreenCommand),
    /// Control hydration reminders
    #[command(subcommand)]
    Hydration(HydrationCommand),
    /// Track glasses of water
    #[command(subcommand)]
    Water(WaterCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status { json } => commands::status(json).await,
        Commands::Pomodoro(command) => commands::pomodoro(command).await,
        Commands::Screen(command) => commands::screen(command).await,
        Commands::Hydration(command) => commands::hydration(command).await,
        Commands::Water(command) => commands::water(command).await,
    }
}
