use std::time::Duration;

use sereno_core::{InvalidSetting, Translator, WaterCounter};
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use super::NotifierHandle;

const FEEDBACK_NOTICE: Duration = Duration::from_secs(3);

pub enum WaterMessage {
    AddGlass,
    Reset,
    SetTarget {
        glasses: u32,
        reply: oneshot::Sender<Result<(), InvalidSetting>>,
    },
    GetStatus {
        reply: oneshot::Sender<WaterStatus>,
    },
}

#[derive(Debug, Clone)]
pub struct WaterStatus {
    pub glasses: u32,
    pub target: u32,
}

#[derive(Clone)]
pub struct WaterHandle {
    sender: mpsc::Sender<WaterMessage>,
}

impl WaterHandle {
    pub async fn add_glass(&self) -> Result<(), mpsc::error::SendError<WaterMessage>> {
        self.sender.send(WaterMessage::AddGlass).await
    }

    pub async fn reset(&self) -> Result<(), mpsc::error::SendError<WaterMessage>> {
        self.sender.send(WaterMessage::Reset).await
    }

    pub async fn set_target(&self, glasses: u32) -> Option<Result<(), InvalidSetting>> {
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.sender
            .send(WaterMessage::SetTarget {
                glasses,
                reply: reply_sender,
            })
            .await
            .ok()?;
        reply_receiver.await.ok()
    }

    pub async fn get_status(&self) -> Option<WaterStatus> {
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.sender
            .send(WaterMessage::GetStatus {
                reply: reply_sender,
            })
            .await
            .ok()?;
        reply_receiver.await.ok()
    }
}

/// Purely message-driven; the glass counter has no timer of its own.
pub struct WaterActor {
    receiver: mpsc::Receiver<WaterMessage>,
    counter: WaterCounter,
    notifier: NotifierHandle,
    translator: Translator,
}

impl WaterActor {
    pub fn new(
        counter: WaterCounter,
        notifier: NotifierHandle,
        translator: Translator,
    ) -> (Self, WaterHandle) {
        let (sender, receiver) = mpsc::channel(32);

        let actor = Self {
            receiver,
            counter,
            notifier,
            translator,
        };

        let handle = WaterHandle { sender };

        (actor, handle)
    }

    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        info!("water actor started");

        loop {
            tokio::select! {
                Some(message) = self.receiver.recv() => {
                    self.handle_message(message);
                }
                _ = shutdown.recv() => {
                    debug!("water actor shutdown");
                    break;
                }
                else => break,
            }
        }

        debug!("water actor stopped");
    }

    fn handle_message(&mut self, message: WaterMessage) {
        match message {
            WaterMessage::AddGlass => {
                let total = self.counter.add_glass();
                info!(total, "glass of water added");
                self.notifier
                    .post(self.translator.get("notice.water_added"), FEEDBACK_NOTICE);
            }
            WaterMessage::Reset => {
                self.counter.reset();
                info!("water counter reset");
                self.notifier
                    .post(self.translator.get("notice.water_reset"), FEEDBACK_NOTICE);
            }
            WaterMessage::SetTarget { glasses, reply } => {
                let result = self.counter.set_target(glasses);
                if result.is_ok() {
                    info!(glasses, "water target changed");
                }
                let _ = reply.send(result);
            }
            WaterMessage::GetStatus { reply } => {
                let _ = reply.send(WaterStatus {
                    glasses: self.counter.glasses(),
                    target: self.counter.target(),
                });
            }
        }
    }
}
