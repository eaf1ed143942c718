//! Auth-guard behaviour over a scripted transport.

mod support;

use http::Method;
use notespace_core::nav::{AuthGuard, Navigation, Route};
use serde_json::json;
use support::{session_over, workspace_json, ScriptedTransport};

#[tokio::test]
async fn anonymous_visitor_is_sent_to_login_with_a_resume_target() {
    let transport = ScriptedTransport::new();
    transport.script_success(Method::GET, "/auth/me", json!({"authenticated": false}));

    let mut session = session_over(transport.clone());
    let mut guard = AuthGuard::new();

    let verdict = guard.before_each(&mut session, Route::App).await;
    assert_eq!(
        verdict,
        Navigation::Redirect {
            to: Route::Login,
            resume: Some(Route::App),
        }
    );

    // The probe ran exactly once; later navigations reuse the answer.
    assert_eq!(guard.before_each(&mut session, Route::Login).await, Navigation::Proceed);
    assert_eq!(guard.before_each(&mut session, Route::Landing).await, Navigation::Proceed);
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn restored_session_signs_back_in_and_skips_guest_screens() {
    let transport = ScriptedTransport::new();
    transport.script_success(
        Method::GET,
        "/auth/me",
        json!({"authenticated": true, "userId": 7, "nickname": "Kim"}),
    );
    transport.script_success(Method::GET, "/workspaces", json!([workspace_json(1, "ws")]));

    let mut session = session_over(transport);
    let mut guard = AuthGuard::new();

    assert_eq!(guard.before_each(&mut session, Route::App).await, Navigation::Proceed);
    assert!(session.stores.auth.is_authenticated());
    assert_eq!(session.stores.auth.user_id(), Some(7));

    assert_eq!(
        guard.before_each(&mut session, Route::Login).await,
        Navigation::Redirect {
            to: Route::App,
            resume: None,
        }
    );
}

#[tokio::test]
async fn unreachable_probe_leaves_the_visitor_anonymous() {
    let transport = ScriptedTransport::new();
    transport.script_error(Method::GET, "/auth/me", 500, "SERVER_ERROR");

    let mut session = session_over(transport);
    let mut guard = AuthGuard::new();

    let verdict = guard.before_each(&mut session, Route::App).await;
    assert_eq!(
        verdict,
        Navigation::Redirect {
            to: Route::Login,
            resume: Some(Route::App),
        }
    );
    assert!(!session.stores.auth.is_authenticated());
}
