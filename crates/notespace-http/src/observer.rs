//! Hooks through which transport-level error classification reaches the UI.

/// Alerts raised while classifying transport failures. Each carries a fixed
/// user-facing message; business rejections (400/409/422) never become
/// alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportAlert {
    /// 401 away from the auth screens.
    SessionExpired,
    /// 403.
    Forbidden,
    /// 404.
    NotFound,
    /// 5xx.
    ServerFault,
    /// No response received.
    Network,
}

impl TransportAlert {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            TransportAlert::SessionExpired => "SESSION_EXPIRED",
            TransportAlert::Forbidden => "FORBIDDEN",
            TransportAlert::NotFound => "NOT_FOUND",
            TransportAlert::ServerFault => "SERVER_ERROR",
            TransportAlert::Network => "NETWORK_ERROR",
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            TransportAlert::SessionExpired => "Your session has ended. Please sign in again.",
            TransportAlert::Forbidden => "You do not have permission to do that.",
            TransportAlert::NotFound => "The requested resource was not found.",
            TransportAlert::ServerFault => "The server ran into an error. Please try again.",
            TransportAlert::Network => "A network error occurred. Check your connection.",
        }
    }
}

/// Observer the client consults while classifying failures.
///
/// `on_auth_screen` decides the 401 split: on the login/register/landing
/// screens a 401 means bad credentials and is left to the caller, anywhere
/// else it means the session dropped. `alert` receives the globally-visible
/// conditions.
pub trait ClientObserver: Send + Sync {
    fn on_auth_screen(&self) -> bool {
        false
    }

    fn alert(&self, _alert: TransportAlert) {}
}

/// Observer that swallows everything, for plain library use.
pub struct NullObserver;

impl ClientObserver for NullObserver {}
