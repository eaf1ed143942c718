//! Shared state between the transport layer and the app shell.
//!
//! The HTTP client classifies failures without knowing anything about
//! routes or stores; [`AlertHub`] is the [`ClientObserver`] it talks to.
//! The session keeps the hub's route flag current, and the app store
//! drains the queued alerts into user-visible state.

use notespace_http::{ClientObserver, TransportAlert};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
pub struct AlertHub {
    /// True while the active route is one where a 401 means bad
    /// credentials (login/register/landing).
    auth_screen: AtomicBool,
    /// Latched on the first session-expired classification; cleared when
    /// the shell dismisses the modal.
    session_expired: AtomicBool,
    queue: Mutex<Vec<TransportAlert>>,
}

impl AlertHub {
    pub fn new() -> Self {
        AlertHub::default()
    }

    pub fn set_auth_screen(&self, on_auth_screen: bool) {
        self.auth_screen.store(on_auth_screen, Ordering::Relaxed);
    }

    pub fn session_expired(&self) -> bool {
        self.session_expired.load(Ordering::Relaxed)
    }

    pub fn clear_session_expired(&self) {
        self.session_expired.store(false, Ordering::Relaxed);
    }

    /// Drain queued alerts, oldest first.
    pub fn take_alerts(&self) -> Vec<TransportAlert> {
        std::mem::take(&mut *self.queue.lock())
    }
}

impl ClientObserver for AlertHub {
    fn on_auth_screen(&self) -> bool {
        self.auth_screen.load(Ordering::Relaxed)
    }

    fn alert(&self, alert: TransportAlert) {
        if alert == TransportAlert::SessionExpired {
            self.session_expired.store(true, Ordering::Relaxed);
        }
        self.queue.lock().push(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expiry_latches_until_cleared() {
        let hub = AlertHub::new();
        hub.alert(TransportAlert::SessionExpired);
        assert!(hub.session_expired());
        assert_eq!(hub.take_alerts(), vec![TransportAlert::SessionExpired]);
        // Draining the queue does not clear the latch.
        assert!(hub.session_expired());
        hub.clear_session_expired();
        assert!(!hub.session_expired());
    }

    #[test]
    fn alerts_drain_in_order() {
        let hub = AlertHub::new();
        hub.alert(TransportAlert::NotFound);
        hub.alert(TransportAlert::ServerFault);
        assert_eq!(
            hub.take_alerts(),
            vec![TransportAlert::NotFound, TransportAlert::ServerFault]
        );
        assert!(hub.take_alerts().is_empty());
    }
}
