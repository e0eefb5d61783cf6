//! Login screen.

use super::{Intent, pending, report};
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};
use gatehouse_core::provider::IdentityProvider;
use gatehouse_core::{ActionKind, AuthActions, Credentials, NoticeKind, Notifier, SocialProvider};

const CHOICES: &[&str] = &[
    "Login",
    "Continue with Google",
    "Don't have an account? Sign Up",
    "Quit",
];

pub async fn run<P: IdentityProvider>(
    actions: &AuthActions<P>,
    notifier: &dyn Notifier,
) -> anyhow::Result<Intent> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Login")
        .items(CHOICES)
        .default(0)
        .interact()?;

    match choice {
        0 => {
            let credentials = prompt_credentials()?;
            match pending("Logging in...", actions.login(&credentials)).await {
                Ok(()) => {
                    notifier.notify(NoticeKind::Success, "Welcome back!", "Login successful");
                }
                Err(err) => report(notifier, ActionKind::Login, &err),
            }
            Ok(Intent::Stay)
        }
        1 => {
            match pending(
                "Waiting for Google sign-in...",
                actions.social_login(SocialProvider::Google),
            )
            .await
            {
                Ok(()) => {
                    notifier.notify(NoticeKind::Success, "Welcome!", "Signed in with Google");
                }
                Err(err) => report(notifier, ActionKind::SocialLogin, &err),
            }
            Ok(Intent::Stay)
        }
        2 => Ok(Intent::Signup),
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
    Ok(Credentials::login(email, password))
}
