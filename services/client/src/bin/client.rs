//! services/client/src/bin/client.rs
//!
//! An interactive shell over the chat widget and the auth pages.

use athletic_spirit_core::responder::Responder;
use athletic_spirit_core::strength;
use client_lib::{
    config::Config,
    error::ClientError,
    widgets::{
        AppState, ChatWidget, ForgotPasswordPage, LoginPage, ResetPasswordPage, SignupPage,
    },
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
commands:
  say <text>                         chat with the bot
  transcript                         print the conversation so far
  login <email> <password>           sign in
  google <id_token>                  sign in with a Google ID token
  github                             open the GitHub sign-in popup
  signup <username> <email> <password>
  strength <password>                rate a password
  forgot <email>                     request a reset link
  reset <query> <password> <confirm> reset with the link's query string (e.g. ?token=...)
  whoami                             show the stored session token
  quit";

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Backend at {}", config.api_base_url);

    // --- 2. Build the Shared AppState and Widgets ---
    let app = Arc::new(AppState::from_config(config.clone())?);
    let chat = ChatWidget::new(Responder::new()?, config.reply_delay);
    let login = LoginPage::new(app.clone());
    let signup = SignupPage::new(app.clone());
    let forgot = ForgotPasswordPage::new(app.clone());

    for turn in chat.turns().await {
        println!("bot: {}", turn.text);
    }
    println!("type 'help' for commands");

    // --- 3. Command Loop ---
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let (command, rest) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let outcome = async {
            match (command, args.as_slice()) {
                ("", _) => {}
                ("help", _) => println!("{}", HELP),
                ("quit" | "exit", _) => return Ok(false),
                ("say", _) => {
                    if chat.submit(rest).await.is_some() {
                        chat.settle().await;
                        if let Some(turn) = chat.transcript().await.last() {
                            println!("bot: {}", turn.text);
                        }
                    }
                }
                ("transcript", _) => {
                    for turn in chat.turns().await {
                        println!("{:?}: {}", turn.sender, turn.text);
                    }
                }
                ("login", [email, password]) => {
                    login.submit(email, password).await?;
                }
                ("google", [id_token]) => {
                    login.google_callback(id_token).await?;
                }
                ("github", _) => login.github().await?,
                ("signup", [username, email, password]) => {
                    signup.submit(username, email, password).await?;
                }
                ("strength", [password]) => match strength::evaluate(password) {
                    Some(report) => println!("{} ({})", report.text(), report.color()),
                    None => println!("(cleared)"),
                },
                ("forgot", [email]) => {
                    forgot.submit(email).await?;
                }
                ("reset", [query, password, confirm]) => {
                    let page = ResetPasswordPage::load(app.clone(), query).await;
                    page.submit(password, confirm).await?;
                }
                ("whoami", _) => match app.credentials.load_token().await? {
                    Some(token) => println!("token: {}", token),
                    None => println!("not signed in"),
                },
                _ => println!("unrecognized command; type 'help'"),
            }
            Ok::<bool, ClientError>(true)
        }
        .await;

        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => error!("{}", e),
        }
    }

    // --- 4. Shut Down ---
    chat.teardown().await;
    info!("Goodbye.");
    Ok(())
}
