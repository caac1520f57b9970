use anyhow::Result;
use clap::Subcommand;
use sereno_protocol::Request;

#[derive(Subcommand)]
pub enum ScreenCommand {
    /// Begin accumulating screen time
    Start,
    /// Stop accumulating screen time
    Pause,
    /// Zero the stopwatch and stop tracking
    Reset,
    /// Set the daily limit in minutes (display threshold only)
    Limit { minutes: u64 },
}

pub async fn execute(command: ScreenCommand) -> Result<()> {
    match command {
        ScreenCommand::Start => {
            super::send_command(Request::ScreenStart, "command.screen_start").await
        }
        ScreenCommand::Pause => {
            super::send_command(Request::ScreenPause, "command.screen_pause").await
        }
        ScreenCommand::Reset => {
            super::send_command(Request::ScreenReset, "command.screen_reset").await
        }
        ScreenCommand::Limit { minutes } => {
            super::send_command(Request::ScreenSetLimit { minutes }, "command.screen_limit").await
        }
    }
}
