//! Terminal client for a hosted identity provider.
//!
//! Wires the core together the way the mobile shell would: a REST-backed
//! provider, the process-wide session context, the auth actions, and the
//! router gate feeding a screen stack.

mod api;
mod config;
mod nav;
mod notify;
mod screens;

use crate::api::{ApiClient, RestProvider};
use crate::config::CliConfig;
use crate::nav::{Screen, ScreenStack};
use crate::notify::TermNotifier;
use crate::screens::Intent;
use clap::Parser;
use gatehouse_core::{AuthActions, Navigator, RouterGate, SessionContext};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "gatehouse", version, about = "Login, signup, and session gating from the terminal")]
struct Cli {
    /// Identity API base URL (overrides the config file).
    #[arg(long, env = "GATEHOUSE_API_URL")]
    api_url: Option<String>,

    /// Project API key sent while no session exists.
    #[arg(long, env = "GATEHOUSE_API_KEY")]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut cfg = CliConfig::load()?;
    if let Some(api_url) = cli.api_url {
        cfg.api_url = api_url;
    }
    if let Some(api_key) = cli.api_key {
        cfg.api_key = Some(api_key);
    }
    log::debug!("identity api: {}", cfg.api_url);

    let provider = Arc::new(RestProvider::new(
        ApiClient::new(cfg.api_url.as_str()),
        cfg.api_key.clone(),
    ));
    let session = SessionContext::start(provider.as_ref());
    let actions = AuthActions::new(Arc::clone(&provider));
    let notifier = TermNotifier;

    // Splash: hold until the provider resolves the initial session.
    let mut changes = session.watch();
    screens::pending("Checking session...", async {
        changes.wait_for(|state| !state.loading).await.map(|_| ())
    })
    .await?;

    let mut gate = RouterGate::new();
    let mut nav = ScreenStack::new(Screen::Login);

    loop {
        let state = changes.borrow_and_update().clone();
        if let Some(route) = gate.evaluate(&state) {
            nav.replace_with(route);
        }

        let intent = match nav.current() {
            Screen::Login => screens::login::run(&actions, &notifier).await?,
            Screen::Signup => screens::signup::run(&actions, &notifier).await?,
            Screen::Home => screens::home::run(&actions, &notifier, &state).await?,
        };

        match intent {
            Intent::Stay => {}
            Intent::Signup => nav.push(Screen::Signup),
            Intent::BackToLogin => nav.go_back(),
            Intent::Quit => break,
        }

        // Session notifications are push-based; give any in-flight
        // transition a moment to land before the gate re-evaluates.
        let _ = tokio::time::timeout(Duration::from_millis(100), changes.changed()).await;
    }

    Ok(())
}
