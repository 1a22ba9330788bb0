use crate::Result;
use tokio::sync::broadcast::{self, Receiver, Sender};

use crate::notification::{self, Notification};

#[derive(Debug)]
pub struct Broadcast {
    tx: Sender<Notification>,
    rx: Receiver<Notification>,
}

impl Broadcast {
    pub fn new() -> Self {
        let (tx, rx) = broadcast::channel(64);
        Self { tx, rx }
    }

    pub fn send(&self, notification: Notification) -> Result<()> {
        self.tx.send(notification)?;
        Ok(())
    }

    pub fn quit(&self) {
        if let Err(error) = self.send(Notification::Quit) {
            tracing::error!("unable to send quit: {error}");
        }
    }

    pub fn notify_receiver(&self) -> Receiver<Notification> {
        self.rx.resubscribe()
    }

    pub fn send_message(&self, message: notification::Message) {
        if let Err(error) = self.send(Notification::Message { message }) {
            tracing::error!("unable to send message: {error}");
        }
    }
}

impl Default for Broadcast {
    fn default() -> Self {
        Self::new()
    }
}
