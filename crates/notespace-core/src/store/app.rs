//! App-shell state: global loading, the session-expired modal, and the
//! last globally-visible error.

use crate::alerts::AlertHub;
use chrono::{DateTime, Utc};
use notespace_http::TransportAlert;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalError {
    pub code: String,
    pub message: String,
    pub at: DateTime<Utc>,
}

#[derive(Default)]
pub struct AppStore {
    pub loading: bool,
    pub loading_message: String,
    /// Drives the "your session ended" modal, distinct from a credential
    /// failure on the login screen.
    pub session_expired: bool,
    pub global_error: Option<GlobalError>,
}

impl AppStore {
    pub fn start_loading(&mut self, message: impl Into<String>) {
        self.loading = true;
        self.loading_message = message.into();
    }

    pub fn stop_loading(&mut self) {
        self.loading = false;
        self.loading_message.clear();
    }

    pub fn show_session_expired(&mut self) {
        self.session_expired = true;
    }

    pub fn hide_session_expired(&mut self) {
        self.session_expired = false;
    }

    pub fn set_error(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.global_error = Some(GlobalError {
            code: code.into(),
            message: message.into(),
            at: Utc::now(),
        });
    }

    pub fn clear_error(&mut self) {
        self.global_error = None;
    }

    /// Pull queued transport alerts out of the hub into user-visible
    /// state. Session expiry raises the modal; everything else lands in
    /// `global_error` (last one wins).
    pub fn absorb(&mut self, hub: &AlertHub) {
        for alert in hub.take_alerts() {
            match alert {
                TransportAlert::SessionExpired => self.session_expired = true,
                other => self.set_error(other.code(), other.message()),
            }
        }
    }

    pub fn reset(&mut self) {
        self.loading = false;
        self.loading_message.clear();
        self.session_expired = false;
        self.global_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notespace_http::ClientObserver;

    #[test]
    fn absorb_routes_expiry_to_modal_and_rest_to_error() {
        let hub = AlertHub::new();
        hub.alert(TransportAlert::ServerFault);
        hub.alert(TransportAlert::SessionExpired);

        let mut store = AppStore::default();
        store.absorb(&hub);
        assert!(store.session_expired);
        assert_eq!(store.global_error.as_ref().unwrap().code, "SERVER_ERROR");
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = AppStore::default();
        store.start_loading("saving");
        store.show_session_expired();
        store.set_error("X", "y");
        store.reset();
        assert!(!store.loading);
        assert!(!store.session_expired);
        assert!(store.global_error.is_none());
    }
}
