use std::time::Duration;

use sereno_core::{ScreenTimeEvent, ScreenTimeTracker, Translator};
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use super::NotifierHandle;

const FEEDBACK_NOTICE: Duration = Duration::from_secs(3);
const BREAK_NOTICE: Duration = Duration::from_secs(7);

pub enum ScreenTimeMessage {
    Start,
    Pause,
    Reset,
    SetLimit {
        minutes: u64,
    },
    GetStatus {
        reply: oneshot::Sender<ScreenTimeStatus>,
    },
}

#[derive(Debug, Clone)]
pub struct ScreenTimeStatus {
    pub elapsed_seconds: u64,
    pub minutes: u64,
    pub limit_minutes: u64,
    pub tracking: bool,
}

#[derive(Clone)]
pub struct ScreenTimeHandle {
    sender: mpsc::Sender<ScreenTimeMessage>,
}

impl ScreenTimeHandle {
    pub async fn start(&self) -> Result<(), mpsc::error::SendError<ScreenTimeMessage>> {
        self.sender.send(ScreenTimeMessage::Start).await
    }

    pub async fn pause(&self) -> Result<(), mpsc::error::SendError<ScreenTimeMessage>> {
        self.sender.send(ScreenTimeMessage::Pause).await
    }

    pub async fn reset(&self) -> Result<(), mpsc::error::SendError<ScreenTimeMessage>> {
        self.sender.send(ScreenTimeMessage::Reset).await
    }

    pub async fn set_limit(
        &self,
        minutes: u64,
    ) -> Result<(), mpsc::error::SendError<ScreenTimeMessage>> {
        self.sender.send(ScreenTimeMessage::SetLimit { minutes }).await
    }

    pub async fn get_status(&self) -> Option<ScreenTimeStatus> {
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.sender
            .send(ScreenTimeMessage::GetStatus {
                reply: reply_sender,
            })
            .await
            .ok()?;
        reply_receiver.await.ok()
    }
}

/// Accumulates screen seconds with a one-second tick while tracking and
/// surfaces the hourly break suggestion.
pub struct ScreenTimeActor {
    receiver: mpsc::Receiver<ScreenTimeMessage>,
    tracker: ScreenTimeTracker,
    notifier: NotifierHandle,
    translator: Translator,
}

impl ScreenTimeActor {
    pub fn new(
        tracker: ScreenTimeTracker,
        notifier: NotifierHandle,
        translator: Translator,
    ) -> (Self, ScreenTimeHandle) {
        let (sender, receiver) = mpsc::channel(32);

        let actor = Self {
            receiver,
            tracker,
            notifier,
            translator,
        };

        let handle = ScreenTimeHandle { sender };

        (actor, handle)
    }

    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        info!("screen time actor started");

        let mut tick_interval = tokio::time::interval(Duration::from_secs(1));

        loop {
            tokio::select! {
                Some(message) = self.receiver.recv() => {
                    self.handle_message(message);
                }
                _ = tick_interval.tick() => {
                    self.handle_tick();
                }
                _ = shutdown.recv() => {
                    debug!("screen time actor shutdown");
                    break;
                }
                else => break,
            }
        }

        debug!("screen time actor stopped");
    }

    fn handle_message(&mut self, message: ScreenTimeMessage) {
        match message {
            ScreenTimeMessage::Start => {
                if self.tracker.start() {
                    info!("screen tracking started");
                    self.notifier
                        .post(self.translator.get("notice.screen_started"), FEEDBACK_NOTICE);
                }
            }
            ScreenTimeMessage::Pause => {
                if self.tracker.pause() {
                    info!("screen tracking paused");
                    self.notifier
                        .post(self.translator.get("notice.screen_paused"), FEEDBACK_NOTICE);
                }
            }
            ScreenTimeMessage::Reset => {
                self.tracker.reset();
                info!("screen time reset");
                self.notifier
                    .post(self.translator.get("notice.screen_reset"), FEEDBACK_NOTICE);
            }
            ScreenTimeMessage::SetLimit { minutes } => {
                self.tracker.set_limit(minutes);
                info!(minutes, "screen limit changed");
            }
            ScreenTimeMessage::GetStatus { reply } => {
                let _ = reply.send(self.status());
            }
        }
    }

    fn handle_tick(&mut self) {
        if let Some(ScreenTimeEvent::BreakSuggested { minutes }) = self.tracker.tick() {
            info!(minutes, "screen break suggested");
            let text = self
                .translator
                .format("notice.screen_break", &[("minutes", &minutes.to_string())]);
            self.notifier.post(text, BREAK_NOTICE);
        }
    }

    fn status(&self) -> ScreenTimeStatus {
        ScreenTimeStatus {
            elapsed_seconds: self.tracker.elapsed_seconds(),
            minutes: self.tracker.minutes(),
            limit_minutes: self.tracker.limit_minutes(),
            tracking: self.tracker.is_tracking(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::NotifierActor;
    use sereno_core::{NotificationConfig, NotificationUrgency};

    fn test_notifier(shutdown: &broadcast::Sender<()>) -> NotifierHandle {
        let config = NotificationConfig {
            desktop_enabled: false,
            sound_enabled: false,
            urgency: NotificationUrgency::Normal,
        };
        let (actor, handle) = NotifierActor::new(config);
        tokio::spawn(actor.run(shutdown.subscribe()));
        handle
    }

    fn spawn_actor() -> (ScreenTimeHandle, broadcast::Sender<()>) {
        let (shutdown_sender, _) = broadcast::channel(1);
        let notifier = test_notifier(&shutdown_sender);
        let (actor, handle) = ScreenTimeActor::new(
            ScreenTimeTracker::default(),
            notifier,
            Translator::default(),
        );
        tokio::spawn(actor.run(shutdown_sender.subscribe()));
        (handle, shutdown_sender)
    }

    #[tokio::test]
    async fn stopwatch_only_runs_while_tracking() {
        let (handle, _shutdown) = spawn_actor();

        // Idle: nothing accumulates.
        tokio::time::sleep(Duration::from_millis(1_200)).await;
        let status = handle.get_status().await.unwrap();
        assert_eq!(status.elapsed_seconds, 0);
        assert!(!status.tracking);

        handle.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(2_500)).await;

        let status = handle.get_status().await.unwrap();
        assert!(status.tracking);
        assert!(status.elapsed_seconds >= 1);
    }

    #[tokio::test]
    async fn pause_freezes_the_counter() {
        let (handle, _shutdown) = spawn_actor();

        handle.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        handle.pause().await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let frozen = handle.get_status().await.unwrap().elapsed_seconds;
        tokio::time::sleep(Duration::from_millis(1_200)).await;

        let status = handle.get_status().await.unwrap();
        assert!(!status.tracking);
        assert_eq!(status.elapsed_seconds, frozen);
    }

    #[tokio::test]
    async fn reset_zeroes_and_stops() {
        let (handle, _shutdown) = spawn_actor();

        handle.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        handle.reset().await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let status = handle.get_status().await.unwrap();
        assert_eq!(status.elapsed_seconds, 0);
        assert!(!status.tracking);
    }

    #[tokio::test]
    async fn limit_changes_are_applied() {
        let (handle, _shutdown) = spawn_actor();

        handle.set_limit(240).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let status = handle.get_status().await.unwrap();
        assert_eq!(status.limit_minutes, 240);
    }
}
