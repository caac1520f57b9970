use anyhow::Result;
use clap::Subcommand;
use sereno_protocol::Request;

#[derive(Subcommand)]
pub enum WaterCommand {
    /// Count one more glass
    Add,
    /// Zero the counter
    Reset,
    /// Set the daily glass target
    Goal { glasses: u32 },
}

pub async fn execute(command: WaterCommand) -> Result<()> {
    match command {
        WaterCommand::Add => super::send_command(Request::WaterAddGlass, "command.water_add").await,
        WaterCommand::Reset => super::send_command(Request::WaterReset, "command.water_reset").await,
        WaterCommand::Goal { glasses } => {
            super::send_command(Request::WaterSetTarget { glasses }, "command.water_goal").await
        }
    }
}
