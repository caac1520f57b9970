use crate::client::{ClientError, DaemonClient};
use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use sereno_core::domain::screen_time::{format_elapsed, progress_ratio};
use sereno_core::Translator;
use sereno_protocol::{
    HydrationSnapshot, Phase, PomodoroSnapshot, Request, Response, ScreenTimeSnapshot,
    WaterSnapshot,
};
use serde::Serialize;

#[derive(Serialize)]
struct StatusOutput {
    pomodoro: PomodoroOutput,
    screen_time: ScreenTimeOutput,
    hydration: HydrationOutput,
    water: WaterOutput,
    notice: Option<String>,
}

#[derive(Serialize)]
struct PomodoroOutput {
    phase: String,
    remaining: String,
    running: bool,
    work_minutes: u32,
    break_minutes: u32,
}

#[derive(Serialize)]
struct ScreenTimeOutput {
    minutes: u64,
    limit_minutes: u64,
    stopwatch: String,
    tracking: bool,
    progress: f64,
}

#[derive(Serialize)]
struct HydrationOutput {
    enabled: bool,
    interval_minutes: u32,
    next_reminder: Option<String>,
}

#[derive(Serialize)]
struct WaterOutput {
    glasses: u32,
    target: u32,
}

pub async fn execute(json: bool) -> Result<()> {
    let translator = super::get_translator();
    let client = DaemonClient::new();

    match client.send(Request::GetDashboard).await {
        Ok(Response::Dashboard {
            pomodoro,
            screen_time,
            hydration,
            water,
            notice,
        }) => {
            if json {
                print_json(pomodoro, screen_time, hydration, water, notice)?;
            } else {
                print_formatted(&translator, pomodoro, screen_time, hydration, water, notice);
            }
        }
        Ok(Response::Error { message }) => {
            if json {
                println!(r#"{{"error": "{}"}}"#, message);
            } else {
                eprintln!("{}", message);
            }
            std::process::exit(1);
        }
        Ok(_) => {
            if json {
                println!(r#"{{"error": "unexpected response"}}"#);
            } else {
                eprintln!("{}", translator.get("error.unexpected_response"));
            }
            std::process::exit(1);
        }
        Err(ClientError::DaemonNotRunning) => {
            if json {
                println!(r#"{{"error": "daemon not running"}}"#);
            } else {
                println!("{}", translator.get("error.daemon_not_running"));
                println!("{}", translator.get("error.daemon_not_running_hint"));
            }
        }
        Err(ClientError::Timeout) => {
            if json {
                println!(r#"{{"error": "timeout"}}"#);
            } else {
                eprintln!("{}", translator.get("error.connection_timeout"));
            }
            std::process::exit(1);
        }
        Err(error) => {
            if json {
                println!(r#"{{"error": "{}"}}"#, error);
            } else {
                eprintln!("{}", error);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_json(
    pomodoro: PomodoroSnapshot,
    screen_time: ScreenTimeSnapshot,
    hydration: HydrationSnapshot,
    water: WaterSnapshot,
    notice: Option<String>,
) -> Result<()> {
    let output = StatusOutput {
        pomodoro: PomodoroOutput {
            phase: pomodoro.phase.to_string(),
            remaining: format_remaining(pomodoro.minutes_remaining, pomodoro.seconds_remaining),
            running: pomodoro.running,
            work_minutes: pomodoro.work_minutes,
            break_minutes: pomodoro.break_minutes,
        },
        screen_time: ScreenTimeOutput {
            minutes: screen_time.minutes,
            limit_minutes: screen_time.limit_minutes,
            stopwatch: format_elapsed(screen_time.elapsed_seconds),
            tracking: screen_time.tracking,
            progress: progress_ratio(screen_time.minutes, screen_time.limit_minutes),
        },
        hydration: HydrationOutput {
            enabled: hydration.enabled,
            interval_minutes: hydration.interval_minutes,
            next_reminder: hydration.next_fire.map(format_local_time),
        },
        water: WaterOutput {
            glasses: water.glasses,
            target: water.target,
        },
        notice,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_formatted(
    translator: &Translator,
    pomodoro: PomodoroSnapshot,
    screen_time: ScreenTimeSnapshot,
    hydration: HydrationSnapshot,
    water: WaterSnapshot,
    notice: Option<String>,
) {
    let phase = match pomodoro.phase {
        Phase::Work => translator.get("status.phase_work"),
        Phase::Break => translator.get("status.phase_break"),
    };
    let pomodoro_state = if pomodoro.running {
        translator.get("status.running")
    } else {
        translator.get("status.paused")
    };
    println!(
        "{}",
        translator.format(
            "status.pomodoro_line",
            &[
                (
                    "remaining",
                    &format_remaining(pomodoro.minutes_remaining, pomodoro.seconds_remaining),
                ),
                ("phase", &phase),
                ("state", &pomodoro_state),
            ],
        )
    );

    let screen_state = if screen_time.tracking {
        translator.get("status.screen_tracking")
    } else {
        translator.get("status.screen_idle")
    };
    println!(
        "{}",
        translator.format(
            "status.screen_line",
            &[
                ("minutes", &screen_time.minutes.to_string()),
                ("limit", &screen_time.limit_minutes.to_string()),
                ("stopwatch", &format_elapsed(screen_time.elapsed_seconds)),
                ("state", &screen_state),
            ],
        )
    );

    match hydration.next_fire {
        Some(at) => {
            println!(
                "{}",
                translator.format("status.hydration_next", &[("time", &format_local_time(at))])
            );
        }
        None => {
            println!("{}", translator.get("status.hydration_off"));
        }
    }

    println!(
        "{}",
        translator.format(
            "status.water_line",
            &[
                ("glasses", &water.glasses.to_string()),
                ("target", &water.target.to_string()),
            ],
        )
    );

    if let Some(text) = notice {
        println!(
            "{}",
            translator.format("status.notice_line", &[("text", &text)])
        );
    }
}

fn format_remaining(minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}", minutes, seconds)
}

fn format_local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_remaining_pads_both_components() {
        assert_eq!(format_remaining(25, 0), "25:00");
        assert_eq!(format_remaining(4, 9), "04:09");
        assert_eq!(format_remaining(0, 59), "00:59");
    }

    #[test]
    fn long_work_sessions_keep_full_minutes() {
        assert_eq!(format_remaining(120, 5), "120:05");
    }
}
