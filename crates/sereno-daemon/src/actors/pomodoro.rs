use std::time::Duration;

use sereno_core::{InvalidSetting, Phase, PomodoroEvent, PomodoroTimer, Translator};
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use super::NotifierHandle;

const PHASE_NOTICE: Duration = Duration::from_secs(5);
const RESET_NOTICE: Duration = Duration::from_secs(3);

pub enum PomodoroMessage {
    Toggle,
    Reset,
    Configure {
        work_minutes: u32,
        break_minutes: u32,
        reply: oneshot::Sender<Result<(), InvalidSetting>>,
    },
    GetStatus {
        reply: oneshot::Sender<PomodoroStatus>,
    },
}

#[derive(Debug, Clone)]
pub struct PomodoroStatus {
    pub phase: Phase,
    pub minutes_remaining: u32,
    pub seconds_remaining: u32,
    pub running: bool,
    pub work_minutes: u32,
    pub break_minutes: u32,
}

#[derive(Clone)]
pub struct PomodoroHandle {
    sender: mpsc::Sender<PomodoroMessage>,
}

impl PomodoroHandle {
    pub async fn toggle(&self) -> Result<(), mpsc::error::SendError<PomodoroMessage>> {
        self.sender.send(PomodoroMessage::Toggle).await
    }

    pub async fn reset(&self) -> Result<(), mpsc::error::SendError<PomodoroMessage>> {
        self.sender.send(PomodoroMessage::Reset).await
    }

    pub async fn configure(
        &self,
        work_minutes: u32,
        break_minutes: u32,
    ) -> Option<Result<(), InvalidSetting>> {
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.sender
            .send(PomodoroMessage::Configure {
                work_minutes,
                break_minutes,
                reply: reply_sender,
            })
            .await
            .ok()?;
        reply_receiver.await.ok()
    }

    pub async fn get_status(&self) -> Option<PomodoroStatus> {
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.sender
            .send(PomodoroMessage::GetStatus {
                reply: reply_sender,
            })
            .await
            .ok()?;
        reply_receiver.await.ok()
    }
}

/// Drives the work/break countdown with a one-second tick. Commands and
/// ticks are serialized by the actor loop, so no tick can interleave with
/// a half-applied command.
pub struct PomodoroActor {
    receiver: mpsc::Receiver<PomodoroMessage>,
    timer: PomodoroTimer,
    notifier: NotifierHandle,
    translator: Translator,
}

impl PomodoroActor {
    pub fn new(
        timer: PomodoroTimer,
        notifier: NotifierHandle,
        translator: Translator,
    ) -> (Self, PomodoroHandle) {
        let (sender, receiver) = mpsc::channel(32);

        let actor = Self {
            receiver,
            timer,
            notifier,
            translator,
        };

        let handle = PomodoroHandle { sender };

        (actor, handle)
    }

    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        info!("pomodoro actor started");

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
                    debug!("pomodoro actor shutdown");
                    break;
                }
                else => break,
            }
        }

        debug!("pomodoro actor stopped");
    }

    fn handle_message(&mut self, message: PomodoroMessage) {
        match message {
            PomodoroMessage::Toggle => {
                let running = self.timer.toggle();
                info!(running, "pomodoro toggled");
            }
            PomodoroMessage::Reset => {
                self.timer.reset();
                info!("pomodoro reset");
                self.notifier
                    .post(self.translator.get("notice.pomodoro_reset"), RESET_NOTICE);
            }
            PomodoroMessage::Configure {
                work_minutes,
                break_minutes,
                reply,
            } => {
                let result = self.timer.configure(work_minutes, break_minutes);
                if result.is_ok() {
                    info!(work_minutes, break_minutes, "pomodoro durations configured");
                }
                let _ = reply.send(result);
            }
            PomodoroMessage::GetStatus { reply } => {
                let _ = reply.send(self.status());
            }
        }
    }

    fn handle_tick(&mut self) {
        if let Some(PomodoroEvent::PhaseCompleted { next }) = self.timer.tick() {
            info!(phase = %next, "pomodoro phase completed");
            let key = match next {
                Phase::Break => "notice.pomodoro_break",
                Phase::Work => "notice.pomodoro_work",
            };
            self.notifier.post(self.translator.get(key), PHASE_NOTICE);
        }
    }

    fn status(&self) -> PomodoroStatus {
        PomodoroStatus {
            phase: self.timer.phase(),
            minutes_remaining: self.timer.minutes_remaining(),
            seconds_remaining: self.timer.seconds_remaining(),
            running: self.timer.is_running(),
            work_minutes: self.timer.work_minutes(),
            break_minutes: self.timer.break_minutes(),
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

    fn spawn_actor(timer: PomodoroTimer) -> (PomodoroHandle, broadcast::Sender<()>) {
        let (shutdown_sender, _) = broadcast::channel(1);
        let notifier = test_notifier(&shutdown_sender);
        let (actor, handle) = PomodoroActor::new(timer, notifier, Translator::default());
        tokio::spawn(actor.run(shutdown_sender.subscribe()));
        (handle, shutdown_sender)
    }

    #[tokio::test]
    async fn toggle_and_get_status() {
        let (handle, _shutdown) = spawn_actor(PomodoroTimer::default());

        handle.toggle().await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let status = handle.get_status().await.unwrap();
        assert!(status.running);
        assert_eq!(status.phase, Phase::Work);
    }

    #[tokio::test]
    async fn countdown_advances_while_running() {
        let (handle, _shutdown) = spawn_actor(PomodoroTimer::default());

        handle.toggle().await.unwrap();
        tokio::time::sleep(Duration::from_millis(2_500)).await;

        let status = handle.get_status().await.unwrap();
        let remaining = u64::from(status.minutes_remaining) * 60 + u64::from(status.seconds_remaining);
        assert!(remaining < 25 * 60, "countdown did not advance");
        assert!(remaining >= 25 * 60 - 4);
    }

    #[tokio::test]
    async fn reset_restores_a_fresh_work_phase() {
        let (handle, _shutdown) = spawn_actor(PomodoroTimer::new(30, 5).unwrap());

        handle.toggle().await.unwrap();
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        handle.reset().await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let status = handle.get_status().await.unwrap();
        assert!(!status.running);
        assert_eq!(status.phase, Phase::Work);
        assert_eq!(status.minutes_remaining, 30);
        assert_eq!(status.seconds_remaining, 0);
    }

    #[tokio::test]
    async fn configure_rejects_zero_durations() {
        let (handle, _shutdown) = spawn_actor(PomodoroTimer::default());

        let result = handle.configure(0, 5).await.unwrap();
        assert!(result.is_err());

        let status = handle.get_status().await.unwrap();
        assert_eq!(status.work_minutes, 25);
    }

    #[tokio::test]
    async fn configure_while_idle_updates_the_display() {
        let (handle, _shutdown) = spawn_actor(PomodoroTimer::default());

        handle.configure(40, 10).await.unwrap().unwrap();

        let status = handle.get_status().await.unwrap();
        assert_eq!(status.work_minutes, 40);
        assert_eq!(status.minutes_remaining, 40);
        assert_eq!(status.seconds_remaining, 0);
    }
}
