//! Route guards. Pure functions of the current [`AuthState`]; the web crate
//! turns each [`GuardDecision`] into an outlet, a loading notice or a
//! redirect on every navigation.

use api::{AuthState, SessionState};

/// Landing page for signed-in users.
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the requested content.
    Render,
    /// The startup session check has not finished.
    Wait,
    /// Send to login, remembering where the user was going.
    ToLogin { from: String },
    ToDashboard,
}

/// Signed-in users only.
pub fn require_authenticated(state: &AuthState, requested: &str) -> GuardDecision {
    match state.session {
        SessionState::Loading(_) => GuardDecision::Wait,
        SessionState::Authenticated(_) => GuardDecision::Render,
        SessionState::Unauthenticated => GuardDecision::ToLogin {
            from: requested.to_string(),
        },
    }
}

/// Admins only. Signed-in non-admins land on the dashboard.
pub fn require_admin(state: &AuthState, requested: &str) -> GuardDecision {
    match &state.session {
        SessionState::Authenticated(user) if user.is_admin() => GuardDecision::Render,
        SessionState::Authenticated(_) => GuardDecision::ToDashboard,
        _ => require_authenticated(state, requested),
    }
}

/// Login and registration pages: signed-in users go to the dashboard.
pub fn require_signed_out(state: &AuthState) -> GuardDecision {
    match state.session {
        SessionState::Loading(_) => GuardDecision::Wait,
        SessionState::Authenticated(_) => GuardDecision::ToDashboard,
        SessionState::Unauthenticated => GuardDecision::Render,
    }
}

/// Where to go after signing in. Only same-site paths are honoured, and never
/// the auth pages themselves.
pub fn return_path(from: &str) -> &str {
    let from = from.trim();
    let is_local = from.starts_with('/') && !from.starts_with("//");
    let is_auth_page = ["/login", "/register", "/logout"]
        .iter()
        .any(|page| from == *page || from.starts_with(&format!("{page}?")));
    if is_local && !is_auth_page && from != "/" {
        from
    } else {
        DASHBOARD_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Role, User};

    fn state(session: SessionState) -> AuthState {
        AuthState {
            session,
            notice: None,
        }
    }

    fn user(role: Role) -> User {
        User {
            id: "1".into(),
            name: "A".into(),
            email: "a@b.com".into(),
            role,
            created_at: None,
        }
    }

    #[test]
    fn test_authenticated_guard() {
        assert_eq!(
            require_authenticated(&state(SessionState::Unauthenticated), "/events/e1/messages"),
            GuardDecision::ToLogin {
                from: "/events/e1/messages".into()
            }
        );
        assert_eq!(
            require_authenticated(&state(SessionState::Authenticated(user(Role::User))), "/events"),
            GuardDecision::Render
        );
        assert_eq!(
            require_authenticated(&state(SessionState::Loading(Some(user(Role::User)))), "/events"),
            GuardDecision::Wait
        );
    }

    #[test]
    fn test_admin_guard_sends_plain_user_to_dashboard() {
        assert_eq!(
            require_admin(&state(SessionState::Authenticated(user(Role::User))), "/admin/users"),
            GuardDecision::ToDashboard
        );
        assert_eq!(
            require_admin(&state(SessionState::Authenticated(user(Role::Admin))), "/admin/users"),
            GuardDecision::Render
        );
        assert_eq!(
            require_admin(&state(SessionState::Unauthenticated), "/admin/users"),
            GuardDecision::ToLogin {
                from: "/admin/users".into()
            }
        );
        assert_eq!(
            require_admin(&state(SessionState::Loading(Some(user(Role::Admin)))), "/admin/users"),
            GuardDecision::Wait
        );
    }

    #[test]
    fn test_signed_out_pages() {
        assert_eq!(
            require_signed_out(&state(SessionState::Authenticated(user(Role::User)))),
            GuardDecision::ToDashboard
        );
        assert_eq!(
            require_signed_out(&state(SessionState::Unauthenticated)),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_return_path() {
        assert_eq!(return_path("/events/e1/edit"), "/events/e1/edit");
        assert_eq!(return_path(""), DASHBOARD_PATH);
        assert_eq!(return_path("/"), DASHBOARD_PATH);
        assert_eq!(return_path("https://evil.example"), DASHBOARD_PATH);
        assert_eq!(return_path("//evil.example"), DASHBOARD_PATH);
        assert_eq!(return_path("/login?from=/events"), DASHBOARD_PATH);
        assert_eq!(return_path("/logout"), DASHBOARD_PATH);
    }
}
