//! Home screen, reachable only through the verification gate.

use super::{Intent, pending, report};
use dialoguer::{Select, theme::ColorfulTheme};
use gatehouse_core::provider::IdentityProvider;
use gatehouse_core::{ActionKind, AuthActions, Notifier, SessionState};

const CHOICES: &[&str] = &["Logout", "Quit"];

pub async fn run<P: IdentityProvider>(
    actions: &AuthActions<P>,
    notifier: &dyn Notifier,
    state: &SessionState,
) -> anyhow::Result<Intent> {
    let email = state
        .identity
        .as_ref()
        .map(|identity| identity.email.as_str())
        .unwrap_or("<unknown>");
    println!("Logged in as: {email}");

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Home")
        .items(CHOICES)
        .default(0)
        .interact()?;

    match choice {
        0 => {
            if let Err(err) = pending("Logging out...", actions.logout()).await {
                report(notifier, ActionKind::Logout, &err);
            }
            // On success the session stream clears the identity and the
            // gate routes back to login; on failure we stay put.
            Ok(Intent::Stay)
        }
        _ => Ok(Intent::Quit),
    }
}
