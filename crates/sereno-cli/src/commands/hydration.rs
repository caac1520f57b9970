use anyhow::Result;
use clap::Subcommand;
use sereno_protocol::Request;

#[derive(Subcommand)]
pub enum HydrationCommand {
    /// Enable the recurring reminder
    On,
    /// Disable the recurring reminder
    Off,
    /// Set the reminder interval in minutes
    Every { minutes: u32 },
}

pub async fn execute(command: HydrationCommand) -> Result<()> {
    match command {
        HydrationCommand::On => {
            super::send_command(
                Request::HydrationSetEnabled { enabled: true },
                "command.hydration_on",
            )
            .await
        }
        HydrationCommand::Off => {
            super::send_command(
                Request::HydrationSetEnabled { enabled: false },
                "command.hydration_off",
            )
            .await
        }
        HydrationCommand::Every { minutes } => {
            super::send_command(
                Request::HydrationSetInterval { minutes },
                "command.hydration_every",
            )
            .await
        }
    }
}
