use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::types::AuthEvent;

/// In-process fan-out of auth lifecycle events.
#[derive(Clone)]
pub struct AuthEventBus {
    tx: broadcast::Sender<AuthEvent>,
}

impl AuthEventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish to all current subscribers. Returns how many received it.
    pub fn publish(&self, event: AuthEvent) -> usize {
        match self.tx.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!("auth event published with no subscribers");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::types::{AuthEventKind, ClientInfo};

    fn login() -> AuthEvent {
        AuthEvent {
            kind: AuthEventKind::Login,
            user_id: Uuid::now_v7(),
            client: ClientInfo::default(),
        }
    }

    #[tokio::test]
    async fn should_deliver_event_to_every_subscriber() {
        let bus = AuthEventBus::new(8);
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        let event = login();
        assert_eq!(bus.publish(event.clone()), 2);
        assert_eq!(a.recv().await.unwrap(), event);
        assert_eq!(b.recv().await.unwrap(), event);
    }

    #[test]
    fn should_drop_event_without_subscribers() {
        let bus = AuthEventBus::new(8);
        assert_eq!(bus.publish(login()), 0);
    }
}
