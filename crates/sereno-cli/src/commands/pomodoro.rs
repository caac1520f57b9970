use anyhow::Result;
use clap::Subcommand;
use sereno_protocol::Request;

#[derive(Subcommand)]
pub enum PomodoroCommand {
    /// Start or pause the countdown
    Toggle,
    /// Stop and restore a fresh work phase
    Reset,
    /// Set the work and break durations in minutes
    Set {
        #[arg(long)]
        work: u32,
        #[arg(long = "break")]
        break_minutes: u32,
    },
}

pub async fn execute(command: PomodoroCommand) -> Result<()> {
    match command {
        PomodoroCommand::Toggle => {
            super::send_command(Request::PomodoroToggle, "command.pomodoro_toggle").await
        }
        PomodoroCommand::Reset => {
            super::send_command(Request::PomodoroReset, "command.pomodoro_reset").await
        }
        PomodoroCommand::Set {
            work,
            break_minutes,
        } => {
            super::send_command(
                Request::PomodoroConfigure {
                    work_minutes: work,
                    break_minutes,
                },
                "command.pomodoro_set",
            )
            .await
        }
    }
}
