use std::time::Duration;

use chrono::{DateTime, Utc};
use sereno_core::{HydrationReminder, InvalidSetting, Translator};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::sleep;
use tracing::{debug, info};

use super::NotifierHandle;

const SCHEDULE_NOTICE: Duration = Duration::from_secs(5);
const DISABLED_NOTICE: Duration = Duration::from_secs(3);
const REMINDER_NOTICE: Duration = Duration::from_secs(5);

pub enum HydrationMessage {
    SetEnabled {
        enabled: bool,
    },
    SetInterval {
        minutes: u32,
        reply: oneshot::Sender<Result<(), InvalidSetting>>,
    },
    GetStatus {
        reply: oneshot::Sender<HydrationStatus>,
    },
}

#[derive(Debug, Clone)]
pub struct HydrationStatus {
    pub interval_minutes: u32,
    pub enabled: bool,
    pub next_fire: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct HydrationHandle {
    sender: mpsc::Sender<HydrationMessage>,
}

impl HydrationHandle {
    pub async fn set_enabled(
        &self,
        enabled: bool,
    ) -> Result<(), mpsc::error::SendError<HydrationMessage>> {
        self.sender.send(HydrationMessage::SetEnabled { enabled }).await
    }

    pub async fn set_interval(&self, minutes: u32) -> Option<Result<(), InvalidSetting>> {
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.sender
            .send(HydrationMessage::SetInterval {
                minutes,
                reply: reply_sender,
            })
            .await
            .ok()?;
        reply_receiver.await.ok()
    }

    pub async fn get_status(&self) -> Option<HydrationStatus> {
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.sender
            .send(HydrationMessage::GetStatus {
                reply: reply_sender,
            })
            .await
            .ok()?;
        reply_receiver.await.ok()
    }
}

/// Sleeps until the next scheduled fire and renews the schedule after
/// each one. The sleep is recomputed from the reminder state on every
/// loop iteration, so a command that changed the schedule abandons the
/// pending sleep instead of stacking a second one.
pub struct HydrationActor {
    receiver: mpsc::Receiver<HydrationMessage>,
    reminder: HydrationReminder,
    notifier: NotifierHandle,
    translator: Translator,
}

impl HydrationActor {
    pub fn new(
        reminder: HydrationReminder,
        notifier: NotifierHandle,
        translator: Translator,
    ) -> (Self, HydrationHandle) {
        let (sender, receiver) = mpsc::channel(32);

        let actor = Self {
            receiver,
            reminder,
            notifier,
            translator,
        };

        let handle = HydrationHandle { sender };

        (actor, handle)
    }

    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        info!("hydration actor started");

        loop {
            let next_fire = self.reminder.next_fire();

            tokio::select! {
                Some(message) = self.receiver.recv() => {
                    self.handle_message(message);
                }
                _ = async { sleep(delay_until(next_fire.unwrap())).await }, if next_fire.is_some() => {
                    self.handle_fire();
                }
                _ = shutdown.recv() => {
                    debug!("hydration actor shutdown");
                    break;
                }
                else => break,
            }
        }

        debug!("hydration actor stopped");
    }

    fn handle_message(&mut self, message: HydrationMessage) {
        match message {
            HydrationMessage::SetEnabled { enabled } => {
                self.reminder.set_enabled(enabled, Utc::now());
                info!(enabled, "hydration reminders toggled");
                self.announce_schedule();
            }
            HydrationMessage::SetInterval { minutes, reply } => {
                let result = self.reminder.set_interval(minutes, Utc::now());
                if result.is_ok() {
                    info!(minutes, "hydration interval changed");
                    self.announce_schedule();
                }
                let _ = reply.send(result);
            }
            HydrationMessage::GetStatus { reply } => {
                let _ = reply.send(self.status());
            }
        }
    }

    fn handle_fire(&mut self) {
        info!("hydration reminder fired");
        self.notifier
            .post(self.translator.get("notice.hydration_drink"), REMINDER_NOTICE);
        self.reminder.fire(Utc::now());
    }

    fn announce_schedule(&self) {
        if self.reminder.is_enabled() {
            let text = self.translator.format(
                "notice.hydration_enabled",
                &[("minutes", &self.reminder.interval_minutes().to_string())],
            );
            self.notifier.post(text, SCHEDULE_NOTICE);
        } else {
            self.notifier
                .post(self.translator.get("notice.hydration_disabled"), DISABLED_NOTICE);
        }
    }

    fn status(&self) -> HydrationStatus {
        HydrationStatus {
            interval_minutes: self.reminder.interval_minutes(),
            enabled: self.reminder.is_enabled(),
            next_fire: self.reminder.next_fire(),
        }
    }
}

fn delay_until(at: DateTime<Utc>) -> Duration {
    (at - Utc::now()).to_std().unwrap_or(Duration::ZERO)
}
