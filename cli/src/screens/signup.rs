//! Signup screen.

use super::{Intent, pending, report};
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};
use gatehouse_core::provider::IdentityProvider;
use gatehouse_core::{ActionKind, AuthActions, Credentials, NoticeKind, Notifier};

const CHOICES: &[&str] = &["Sign Up", "Already have an account? Login", "Quit"];

pub async fn run<P: IdentityProvider>(
    actions: &AuthActions<P>,
    notifier: &dyn Notifier,
) -> anyhow::Result<Intent> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Sign Up")
        .items(CHOICES)
        .default(0)
        .interact()?;

    match choice {
        0 => {
            let credentials = prompt_credentials()?;
            match pending("Creating account...", actions.signup(&credentials)).await {
                Ok(()) => {
                    notifier.notify(
                        NoticeKind::Success,
                        "Verification Sent",
                        "Check your email to verify your account",
                    );
                    // The account exists but stays unverified; back to login.
                    Ok(Intent::BackToLogin)
                }
                Err(err) => {
                    report(notifier, ActionKind::Signup, &err);
                    Ok(Intent::Stay)
                }
            }
        }
        1 => Ok(Intent::BackToLogin),
        _ => Ok(Intent::Quit),
    }
}

fn prompt_credentials() -> anyhow::Result<Credentials> {
    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Email")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    let confirm = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Confirm Password")
        .allow_empty_password(true)
        .interact()?;
    Ok(Credentials::signup(email, password, confirm))
}
