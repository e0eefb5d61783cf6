//! Client-side authentication core.
//!
//! Everything an app shell needs to gate access behind a hosted identity
//! provider:
//! - Form validation (fixed-order syntactic rules, fixed notice pairs)
//! - Session context (observable mirror of the provider's session)
//! - Auth actions (sign-in/up/out, social, verification dispatch, with
//!   provider error translation)
//! - Router gate (which screen a user may reach, idempotently)
//!
//! The provider itself — credential storage, hashing, token issuance,
//! email dispatch — stays behind the [`provider::IdentityProvider`] trait;
//! this crate never fabricates an identity locally.
//!
//! ## Quick start
//! ```ignore
//! let provider = Arc::new(my_provider);
//! let session = SessionContext::start(provider.as_ref());
//! let actions = AuthActions::new(provider);
//!
//! match actions.login(&Credentials::login(email, password)).await {
//!     Ok(()) => {} // the session stream flips the gate to Route::Home
//!     Err(AuthError::VerificationPending) => { /* info notice */ }
//!     Err(e) => { /* error notice with e.to_string() */ }
//! }
//! ```

mod actions;
mod error;
mod gate;
mod models;
mod notify;
mod session;
mod validate;

pub mod provider;

pub use crate::actions::AuthActions;
pub use crate::error::{ActionKind, AuthError, ProviderCode, Result};
pub use crate::gate::{Navigator, Route, RouterGate};
pub use crate::models::{Credentials, Identity, SessionState, SocialProvider};
pub use crate::notify::{NoticeKind, Notifier};
pub use crate::session::SessionContext;
pub use crate::validate::{FormMode, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, ValidationFailure, validate};
