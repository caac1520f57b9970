use std::time::Duration;

use chrono::Utc;
use notify_rust::{Notification, Urgency};
use sereno_core::{Notice, NotificationConfig, NotificationUrgency};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

pub enum NotifierMessage {
    Post {
        text: String,
        duration: Duration,
    },
    Current {
        reply: oneshot::Sender<Option<String>>,
    },
}

#[derive(Clone)]
pub struct NotifierHandle {
    sender: mpsc::Sender<NotifierMessage>,
}

impl NotifierHandle {
    pub fn post(&self, text: String, duration: Duration) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            if let Err(error) = sender.send(NotifierMessage::Post { text, duration }).await {
                error!(%error, "failed to queue notice");
            }
        });
    }

    pub async fn current(&self) -> Option<String> {
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.sender
            .send(NotifierMessage::Current {
                reply: reply_sender,
            })
            .await
            .ok()?;
        reply_receiver.await.ok().flatten()
    }
}

/// Holds at most one live notice. A newer post replaces both the text and
/// the expiry deadline, so an older notice can never clear a newer one.
pub struct NotifierActor {
    receiver: mpsc::Receiver<NotifierMessage>,
    current: Option<Notice>,
    clears_at: Option<Instant>,
    desktop_enabled: bool,
    sound_enabled: bool,
    urgency: Urgency,
}

impl NotifierActor {
    pub fn new(config: NotificationConfig) -> (Self, NotifierHandle) {
        let (sender, receiver) = mpsc::channel(32);

        let urgency = match config.urgency {
            NotificationUrgency::Low => Urgency::Low,
            NotificationUrgency::Normal => Urgency::Normal,
            NotificationUrgency::Critical => Urgency::Critical,
        };

        let actor = Self {
            receiver,
            current: None,
            clears_at: None,
            desktop_enabled: config.desktop_enabled,
            sound_enabled: config.sound_enabled,
            urgency,
        };

        let handle = NotifierHandle { sender };

        (actor, handle)
    }

    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        info!("notifier actor started");

        loop {
            // Re-armed every iteration from the current notice, so a post
            // that replaced the notice also replaced the pending expiry.
            let clears_at = self.clears_at;

            tokio::select! {
                Some(message) = self.receiver.recv() => {
                    match message {
                        NotifierMessage::Post { text, duration } => {
                            self.post(text, duration);
                        }
                        NotifierMessage::Current { reply } => {
                            let _ = reply.send(self.current.as_ref().map(|notice| notice.text.clone()));
                        }
                    }
                }
                _ = async { tokio::time::sleep_until(clears_at.unwrap()).await }, if clears_at.is_some() => {
                    debug!("notice expired");
                    self.current = None;
                    self.clears_at = None;
                }
                _ = shutdown.recv() => {
                    debug!("notifier actor shutdown");
                    break;
                }
                else => break,
            }
        }

        debug!("notifier actor stopped");
    }

    fn post(&mut self, text: String, duration: Duration) {
        debug!(%text, ?duration, "notice posted");

        self.current = Some(Notice::lasting(text.clone(), duration, Utc::now()));
        self.clears_at = Some(Instant::now() + duration);

        if self.desktop_enabled {
            self.show_desktop(&text);
        }
    }

    fn show_desktop(&self, body: &str) {
        let mut notification = Notification::new();
        notification
            .summary("Sereno")
            .body(body)
            .urgency(self.urgency)
            .appname("Sereno");

        if self.sound_enabled {
            notification.sound_name("message-new-instant");
        }

        match notification.show() {
            Ok(_) => debug!("desktop notification sent"),
            Err(error) => warn!(%error, "failed to show desktop notification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_actor() -> (NotifierHandle, broadcast::Sender<()>) {
        let config = NotificationConfig {
            desktop_enabled: false,
            sound_enabled: false,
            urgency: NotificationUrgency::Normal,
        };
        let (actor, handle) = NotifierActor::new(config);
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
        tokio::spawn(actor.run(shutdown_receiver));
        (handle, shutdown_sender)
    }

    #[tokio::test]
    async fn posted_notice_is_current_until_its_expiry() {
        let (handle, _shutdown) = spawn_actor();

        handle.post("hello".to_string(), Duration::from_millis(200));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(handle.current().await, Some("hello".to_string()));

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(handle.current().await, None);
    }

    #[tokio::test]
    async fn newer_notice_replaces_older_and_owns_the_expiry() {
        let (handle, _shutdown) = spawn_actor();

        handle.post("first".to_string(), Duration::from_millis(300));
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.post("second".to_string(), Duration::from_millis(300));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(handle.current().await, Some("second".to_string()));

        // Past the first notice's original deadline; the second must
        // survive it.
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(handle.current().await, Some("second".to_string()));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(handle.current().await, None);
    }

    #[tokio::test]
    async fn empty_channel_has_no_current_notice() {
        let (handle, _shutdown) = spawn_actor();

        assert_eq!(handle.current().await, None);
    }
}
