mod actors;
mod server;

use actors::{HydrationActor, NotifierActor, PomodoroActor, ScreenTimeActor, WaterActor};
use anyhow::Result;
use chrono::Utc;
use sereno_core::{
    Config, HydrationReminder, PomodoroTimer, ScreenTimeTracker, Translator, WaterCounter,
};
use server::{ActorHandles, Server};
use tokio::sync::broadcast;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("sereno_daemon=debug".parse()?),
        )
        .init();

    info!("sereno daemon starting");

    let config = Config::load().unwrap_or_else(|error| {
        warn!(%error, "failed to load config, using defaults");
        Config::default()
    });
    let translator = Translator::new(config.general.language);

    let (shutdown_sender, shutdown_receiver) = broadcast::channel::<()>(1);
    let sigint_shutdown_sender = shutdown_sender.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("SIGINT received, initiating shutdown");
        sigint_shutdown_sender.send(()).ok();
    });

    let (notifier_actor, notifier_handle) = NotifierActor::new(config.notifications.clone());
    tokio::spawn(notifier_actor.run(shutdown_sender.subscribe()));

    let timer = PomodoroTimer::new(config.pomodoro.work_minutes, config.pomodoro.break_minutes)?;
    let (pomodoro_actor, pomodoro_handle) =
        PomodoroActor::new(timer, notifier_handle.clone(), translator.clone());
    tokio::spawn(pomodoro_actor.run(shutdown_sender.subscribe()));

    let tracker = ScreenTimeTracker::new(config.screen_time.limit_minutes);
    let (screen_time_actor, screen_time_handle) =
        ScreenTimeActor::new(tracker, notifier_handle.clone(), translator.clone());
    tokio::spawn(screen_time_actor.run(shutdown_sender.subscribe()));

    let mut reminder = HydrationReminder::new(config.hydration.interval_minutes)?;
    if config.hydration.enabled {
        reminder.set_enabled(true, Utc::now());
    }
    let (hydration_actor, hydration_handle) =
        HydrationActor::new(reminder, notifier_handle.clone(), translator.clone());
    tokio::spawn(hydration_actor.run(shutdown_sender.subscribe()));

    let counter = WaterCounter::new(config.water.target_glasses)?;
    let (water_actor, water_handle) =
        WaterActor::new(counter, notifier_handle.clone(), translator.clone());
    tokio::spawn(water_actor.run(shutdown_sender.subscribe()));

    let server = Server::new(ActorHandles {
        pomodoro: pomodoro_handle,
        screen_time: screen_time_handle,
        hydration: hydration_handle,
        water: water_handle,
        notifier: notifier_handle,
    })?;
    server.run(shutdown_receiver).await?;

    info!("sereno daemon stopped");
    std::process::exit(0);
}
