//! Route guard for the dashboard's protected surfaces.
//!
//! DESIGN
//! ======
//! `decide` is a pure function of the session snapshot and the requested
//! destination; route dispatch owns the side effects. One observed rule is
//! deliberately left to the caller: landing on [`Redirect::Unauthorized`]
//! forces a `logout()` and routes back to login — unauthorized access is
//! fatal to the current session, not merely denied.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, Session, SessionStatus};

/// What a navigation attempt is aiming at, in auth terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The root forwarder (`/`); never rendered, always redirects.
    Root,
    /// The login page itself.
    Login,
    /// A page open to any authenticated role.
    Authenticated,
    /// A page restricted to a single role (admin panel, guest dashboard).
    Restricted(Role),
    /// A page with no auth requirement (privacy policy, unauthorized page).
    Public,
}

impl Destination {
    /// Whether reaching this destination requires a live session.
    #[must_use]
    fn requires_auth(self) -> bool {
        matches!(self, Self::Root | Self::Authenticated | Self::Restricted(_))
    }
}

/// Where a denied navigation is sent instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    AdminHome,
    GuestHome,
    Unauthorized,
}

impl Redirect {
    /// Dashboard path for the route dispatcher.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::AdminHome => "/admin",
            Self::GuestHome => "/guest",
            Self::Unauthorized => "/unauthorized",
        }
    }
}

/// Result of a navigation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Allow,
    RedirectTo(Redirect),
}

/// Decide what a navigation attempt yields. First matching rule wins:
///
/// 1. no live session + destination requires one → login;
/// 2. live session + login page (or root) → that role's home;
/// 3. role-restricted destination + wrong role → unauthorized;
/// 4. otherwise → allow.
#[must_use]
pub fn decide(session: &Session, destination: Destination) -> Outcome {
    let authenticated = session.status == SessionStatus::Authenticated;

    if !authenticated && destination.requires_auth() {
        return Outcome::RedirectTo(Redirect::Login);
    }
    if authenticated && matches!(destination, Destination::Login | Destination::Root) {
        return Outcome::RedirectTo(role_home(session.role));
    }
    if let Destination::Restricted(required) = destination {
        if session.role != Some(required) {
            return Outcome::RedirectTo(Redirect::Unauthorized);
        }
    }
    Outcome::Allow
}

fn role_home(role: Option<Role>) -> Redirect {
    match role {
        Some(Role::Admin) => Redirect::AdminHome,
        _ => Redirect::GuestHome,
    }
}
