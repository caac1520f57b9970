mod hydration;
mod pomodoro;
mod screen;
mod status;
mod water;

pub use hydration::{execute as hydration, HydrationCommand};
pub use pomodoro::{execute as pomodoro, PomodoroCommand};
pub use screen::{execute as screen, ScreenCommand};
pub use status::execute as status;
pub use water::{execute as water, WaterCommand};

use crate::client::{ClientError, DaemonClient};
use anyhow::{bail, Result};
use sereno_core::{Config, Translator};
use sereno_protocol::{Request, Response};

pub(crate) fn get_translator() -> Translator {
    Config::load()
        .map(|config| Translator::new(config.general.language))
        .unwrap_or_default()
}

/// Sends a single command and prints the localized confirmation.
pub(crate) async fn send_command(request: Request, success_key: &str) -> Result<()> {
    let translator = get_translator();
    let client = DaemonClient::new();

    match client.send(request).await {
        Ok(Response::Ok) => {
            println!("{}", translator.get(success_key));
        }
        Ok(Response::Error { message }) => {
            bail!("{}", message);
        }
        Ok(_) => {
            bail!("{}", translator.get("error.unexpected_response"));
        }
        Err(ClientError::DaemonNotRunning) => {
            eprintln!("{}", translator.get("error.daemon_not_running"));
            eprintln!("{}", translator.get("error.daemon_not_running_hint"));
            std::process::exit(1);
        }
        Err(ClientError::Timeout) => {
            bail!("{}", translator.get("error.connection_timeout"));
        }
        Err(error) => {
            bail!("{}", error);
        }
    }

    Ok(())
}
