//! Route guard: gates protected views on session state.

use crate::session::SessionSnapshot;

/// Decision for a guarded route. Derived from a session snapshot; the
/// transition out of `Loading` happens exactly once per session lifecycle,
/// when bootstrap completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Bootstrap in progress: render a neutral placeholder, decide nothing.
    Loading,
    /// Session has a user: render the protected subtree.
    Authenticated,
    /// No user: redirect to the login entry point, replacing history so
    /// back-navigation does not return to the guarded page.
    Unauthenticated,
}

impl RouteDecision {
    /// Evaluate the guard against the current session state.
    pub fn evaluate(snapshot: &SessionSnapshot) -> Self {
        if snapshot.is_loading {
            Self::Loading
        } else if snapshot.is_authenticated() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }

    /// Redirect target, when the decision is to redirect.
    pub fn redirect_to(&self) -> Option<&'static str> {
        match self {
            Self::Unauthenticated => Some("/login"),
            _ => None,
        }
    }
}
