use crate::actors::{
    HydrationHandle, NotifierHandle, PomodoroHandle, ScreenTimeHandle, WaterHandle,
};
use anyhow::{Context, Result};
use interprocess::local_socket::{
    tokio::{prelude::*, Stream},
    GenericFilePath, ListenerOptions,
};
use sereno_protocol::{
    HydrationSnapshot, PomodoroSnapshot, Request, Response, ScreenTimeSnapshot, WaterSnapshot,
};
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, error, info, instrument};

#[derive(Clone)]
pub struct ActorHandles {
    pub pomodoro: PomodoroHandle,
    pub screen_time: ScreenTimeHandle,
    pub hydration: HydrationHandle,
    pub water: WaterHandle,
    pub notifier: NotifierHandle,
}

pub struct Server {
    socket_path: PathBuf,
    handles: ActorHandles,
}

impl Server {
    pub fn new(handles: ActorHandles) -> Result<Self> {
        let uid = unsafe { libc::getuid() };
        let socket_path = PathBuf::from(format!("/run/user/{}/sereno.sock", uid));
        Ok(Self {
            socket_path,
            handles,
        })
    }

    fn cleanup_stale_socket(&self) -> Result<()> {
        if self.socket_path.exists() {
            std::fs::remove_file(&self.socket_path).context("failed to remove stale socket")?;
            debug!("removed stale socket file");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown: tokio::sync::broadcast::Receiver<()>) -> Result<()> {
        self.cleanup_stale_socket()?;

        let listener = ListenerOptions::new()
            .name(self.socket_path.as_os_str().to_fs_name::<GenericFilePath>()?)
            .create_tokio()?;

        info!(path = %self.socket_path.display(), "server listening");

        loop {
            tokio::select! {
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok(stream) => {
                            let handles = self.handles.clone();
                            tokio::spawn(async move {
                                if let Err(error) = handle_connection(stream, handles).await {
                                    error!(%error, "connection handler failed");
                                }
                            });
                        }
                        Err(error) => {
                            error!(%error, "failed to accept connection");
                        }
                    }
                }
                _ = shutdown.recv() => {
                    info!("shutdown signal received");
                    break;
                }
            }
        }

        self.cleanup_socket();
        Ok(())
    }

    fn cleanup_socket(&self) {
        if let Err(error) = std::fs::remove_file(&self.socket_path) {
            debug!(%error, "socket file already removed");
        } else {
            debug!("socket file cleaned up");
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self.cleanup_socket();
    }
}

async fn handle_connection(mut stream: Stream, handles: ActorHandles) -> Result<()> {
    debug!("new connection accepted");

    let mut length_buffer = [0u8; 4];
    stream.read_exact(&mut length_buffer).await?;
    let length = u32::from_le_bytes(length_buffer) as usize;

    let mut payload = vec![0u8; length];
    stream.read_exact(&mut payload).await?;

    let request: Request =
        bincode::deserialize(&payload).context("failed to deserialize request")?;

    debug!(?request, "received request");

    let response = handle_request(request, &handles).await;

    debug!(?response, "sending response");

    let response_bytes = bincode::serialize(&response)?;
    let response_length = (response_bytes.len() as u32).to_le_bytes();

    stream.write_all(&response_length).await?;
    stream.write_all(&response_bytes).await?;
    stream.flush().await?;

    Ok(())
}

async fn handle_request(request: Request, handles: &ActorHandles) -> Response {
    match request {
        Request::Ping => Response::Pong,

        Request::GetDashboard => build_dashboard(handles).await,

        Request::PomodoroToggle => {
            acknowledge(handles.pomodoro.toggle().await.is_ok(), "unable to toggle the pomodoro")
        }

        Request::PomodoroReset => {
            acknowledge(handles.pomodoro.reset().await.is_ok(), "unable to reset the pomodoro")
        }

        Request::PomodoroConfigure {
            work_minutes,
            break_minutes,
        } => match handles.pomodoro.configure(work_minutes, break_minutes).await {
            Some(Ok(())) => Response::Ok,
            Some(Err(error)) => Response::Error {
                message: error.to_string(),
            },
            None => Response::Error {
                message: "unable to reach the pomodoro timer".to_string(),
            },
        },

        Request::ScreenStart => {
            acknowledge(handles.screen_time.start().await.is_ok(), "unable to start tracking")
        }

        Request::ScreenPause => {
            acknowledge(handles.screen_time.pause().await.is_ok(), "unable to pause tracking")
        }

        Request::ScreenReset => {
            acknowledge(handles.screen_time.reset().await.is_ok(), "unable to reset screen time")
        }

        Request::ScreenSetLimit { minutes } => acknowledge(
            handles.screen_time.set_limit(minutes).await.is_ok(),
            "unable to change the screen limit",
        ),

        Request::HydrationSetEnabled { enabled } => acknowledge(
            handles.hydration.set_enabled(enabled).await.is_ok(),
            "unable to toggle hydration reminders",
        ),

        Request::HydrationSetInterval { minutes } => {
            match handles.hydration.set_interval(minutes).await {
                Some(Ok(())) => Response::Ok,
                Some(Err(error)) => Response::Error {
                    message: error.to_string(),
                },
                None => Response::Error {
                    message: "unable to reach the hydration scheduler".to_string(),
                },
            }
        }

        Request::WaterAddGlass => {
            acknowledge(handles.water.add_glass().await.is_ok(), "unable to add a glass")
        }

        Request::WaterReset => {
            acknowledge(handles.water.reset().await.is_ok(), "unable to reset the water counter")
        }

        Request::WaterSetTarget { glasses } => match handles.water.set_target(glasses).await {
            Some(Ok(())) => Response::Ok,
            Some(Err(error)) => Response::Error {
                message: error.to_string(),
            },
            None => Response::Error {
                message: "unable to reach the water counter".to_string(),
            },
        },
    }
}

fn acknowledge(sent: bool, failure: &str) -> Response {
    if sent {
        Response::Ok
    } else {
        Response::Error {
            message: failure.to_string(),
        }
    }
}

async fn build_dashboard(handles: &ActorHandles) -> Response {
    let (Some(pomodoro), Some(screen_time), Some(hydration), Some(water)) = (
        handles.pomodoro.get_status().await,
        handles.screen_time.get_status().await,
        handles.hydration.get_status().await,
        handles.water.get_status().await,
    ) else {
        return Response::Error {
            message: "unable to collect dashboard state".to_string(),
        };
    };

    let notice = handles.notifier.current().await;

    Response::Dashboard {
        pomodoro: PomodoroSnapshot {
            phase: pomodoro.phase,
            minutes_remaining: pomodoro.minutes_remaining,
            seconds_remaining: pomodoro.seconds_remaining,
            running: pomodoro.running,
            work_minutes: pomodoro.work_minutes,
            break_minutes: pomodoro.break_minutes,
        },
        screen_time: ScreenTimeSnapshot {
            elapsed_seconds: screen_time.elapsed_seconds,
            minutes: screen_time.minutes,
            limit_minutes: screen_time.limit_minutes,
            tracking: screen_time.tracking,
        },
        hydration: HydrationSnapshot {
            interval_minutes: hydration.interval_minutes,
            enabled: hydration.enabled,
            next_fire: hydration.next_fire,
        },
        water: WaterSnapshot {
            glasses: water.glasses,
            target: water.target,
        },
        notice,
    }
}
