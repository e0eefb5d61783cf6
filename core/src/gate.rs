//! Startup and session-change routing.
//!
//! The gate maps `(identity, loading)` to a navigation target: stay put
//! while the initial resolution is pending, home for a verified session,
//! login otherwise. Evaluation is idempotent — unchanged inputs never
//! re-trigger navigation.

use crate::models::SessionState;
use tokio::sync::watch;

/// Navigation targets the gate can choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The authenticated app surface.
    Home,
    /// The login entry screen.
    Login,
}

impl Route {
    /// Stable route name, as handed to the navigation layer.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
        }
    }
}

/// Abstract screen-stack operations. This core only calls them; the app
/// shell implements them.
pub trait Navigator {
    /// Push `route` onto the stack.
    fn go_to(&mut self, route: Route);
    /// Replace the current stack top with `route`.
    fn replace_with(&mut self, route: Route);
    /// Pop back to the previous screen.
    fn go_back(&mut self);
}

/// Two-input state machine deciding where the user may be.
///
/// No persisted state beyond the last emitted target, which exists only to
/// keep repeated evaluation idempotent.
#[derive(Debug, Default)]
pub struct RouterGate {
    last: Option<Route>,
}

impl RouterGate {
    /// A gate that has not yet navigated anywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the navigation target for `state`.
    ///
    /// Returns `None` while the initial session resolution is pending, and
    /// `None` again whenever the computed target equals the last one
    /// emitted; otherwise the new target.
    pub fn evaluate(&mut self, state: &SessionState) -> Option<Route> {
        if state.loading {
            return None;
        }
        let target = if state.is_authenticated() {
            Route::Home
        } else {
            Route::Login
        };
        if self.last == Some(target) {
            return None;
        }
        self.last = Some(target);
        Some(target)
    }

    /// React to session changes until the context goes away.
    ///
    /// Re-evaluates on every state replacement and issues `replace_with`
    /// for each newly decided target.
    pub async fn drive<N: Navigator>(
        mut self,
        mut changes: watch::Receiver<SessionState>,
        navigator: &mut N,
    ) {
        loop {
            let state = changes.borrow_and_update().clone();
            if let Some(route) = self.evaluate(&state) {
                log::debug!("gate redirect -> {}", route.name());
                navigator.replace_with(route);
            }
            if changes.changed().await.is_err() {
                break;
            }
        }
    }
}
