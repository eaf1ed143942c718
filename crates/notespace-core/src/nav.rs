//! Route model and the authentication guard.
//!
//! Routes fall into three classes. Public ones render for anyone,
//! guest-only ones (login, register) bounce an authenticated user into the
//! app, and the app itself bounces anonymous visitors to the login screen
//! with a resume target so they land where they were headed.

use crate::session::Session;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    App,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    GuestOnly,
    AuthRequired,
}

impl Route {
    /// Resolve a path to a route. `/main` is the app route's legacy alias.
    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Landing),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/app" | "/main" => Some(Route::App),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::App => "/app",
        }
    }

    pub fn class(&self) -> RouteClass {
        match self {
            Route::Landing => RouteClass::Public,
            Route::Login | Route::Register => RouteClass::GuestOnly,
            Route::App => RouteClass::AuthRequired,
        }
    }
}

/// Guard verdict for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect {
        to: Route,
        /// Where to continue after a successful login.
        resume: Option<Route>,
    },
}

/// Navigation guard. Probes the server for a live session exactly once,
/// on the first navigation, so a restored cookie signs the user back in
/// without a visible login step.
#[derive(Default)]
pub struct AuthGuard {
    initialized: bool,
}

impl AuthGuard {
    pub fn new() -> Self {
        AuthGuard::default()
    }

    /// Whether the session-expired latch is set, so the shell shows the
    /// modal instead of silently redirecting.
    pub fn session_expired(&self, session: &Session) -> bool {
        session.hub().session_expired()
    }

    pub async fn before_each(&mut self, session: &mut Session, to: Route) -> Navigation {
        session.set_route(to);

        if !self.initialized {
            self.initialized = true;
            // An unreachable server leaves the user anonymous; the guard
            // still routes, and the login screen surfaces the failure.
            if let Err(err) = session.check_session().await {
                debug!(error = %err, "session probe failed, treating as anonymous");
            }
        }

        let authenticated = session.stores.auth.is_authenticated();
        match to.class() {
            RouteClass::Public => Navigation::Proceed,
            RouteClass::GuestOnly if authenticated => Navigation::Redirect {
                to: Route::App,
                resume: None,
            },
            RouteClass::GuestOnly => Navigation::Proceed,
            RouteClass::AuthRequired if authenticated => Navigation::Proceed,
            RouteClass::AuthRequired => Navigation::Redirect {
                to: Route::Login,
                resume: Some(to),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_and_legacy_alias_resolves() {
        for route in [Route::Landing, Route::Login, Route::Register, Route::App] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/main"), Some(Route::App));
        assert_eq!(Route::from_path("/app/"), Some(Route::App));
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn route_classes() {
        assert_eq!(Route::Landing.class(), RouteClass::Public);
        assert_eq!(Route::Login.class(), RouteClass::GuestOnly);
        assert_eq!(Route::Register.class(), RouteClass::GuestOnly);
        assert_eq!(Route::App.class(), RouteClass::AuthRequired);
    }
}
