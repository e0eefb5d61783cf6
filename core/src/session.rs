//! Process-wide session context.
//!
//! Initialized once at process start; subscribes to the provider's session
//! stream and republishes it as a [`SessionState`] watch channel. The
//! spawned subscriber task is the single writer; every other component is a
//! reader, so no locking is needed beyond the channel itself.

use crate::models::SessionState;
use crate::provider::IdentityProvider;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Observable holder of the current authenticated identity.
///
/// The cached identity is never fabricated locally: it only ever mirrors the
/// provider's last-known session, replaced wholesale on every notification.
/// `loading` starts `true` and is cleared by the first notification —
/// whether or not it carries an identity — and stays `false` until process
/// restart.
#[derive(Debug)]
pub struct SessionContext {
    state: watch::Receiver<SessionState>,
    subscriber: JoinHandle<()>,
}

impl SessionContext {
    /// Start the context by subscribing to `provider`'s session stream.
    ///
    /// Must be called from within a tokio runtime. Call once at process
    /// start; there is no teardown beyond dropping the context.
    pub fn start<P: IdentityProvider>(provider: &P) -> Self {
        let mut changes = provider.session_changes();
        let (tx, rx) = watch::channel(SessionState::resolving());

        let subscriber = tokio::spawn(async move {
            while let Some(identity) = changes.recv().await {
                log::debug!(
                    "session change: identity={}",
                    identity.as_ref().map_or("none", |i| i.user_id.as_str())
                );
                tx.send_replace(SessionState {
                    identity,
                    loading: false,
                });
            }
            // Provider dropped its end; last published state stays current.
            log::debug!("session stream closed");
        });

        Self {
            state: rx,
            subscriber,
        }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribe for change notifications.
    ///
    /// The receiver yields the state at subscription time and wakes on every
    /// subsequent replacement, in arrival order.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.state.clone()
    }
}

impl Drop for SessionContext {
    fn drop(&mut self) {
        self.subscriber.abort();
    }
}
