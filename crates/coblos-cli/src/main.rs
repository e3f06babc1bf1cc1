mod config;
mod prompt;
mod terminal;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use coblos_core::{ActionGuard, ApiClient, Outcome, Registration, Settings, flow};
use colored::Colorize;
use config::{Config, DEFAULT_SERVER_URL};
use prompt::Prompter;
use std::env;
use std::process::ExitCode;
use terminal::TerminalUi;
use tracing_subscriber::EnvFilter;
use url::Url;

const SERVER_URL_ENV: &str = "COBLOS_SERVER_URL";
const SESSION_ENV: &str = "COBLOS_SESSION";

#[derive(Parser, Debug)]
#[command(name = "coblos")]
#[command(author, version, about = "Vote and register on a coblos voting server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server base URL (overrides env var and config file)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Login session cookie value (overrides env var and config file)
    #[arg(long, global = true)]
    session: Option<String>,

    /// Skip confirmation prompts
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Log requests and replies to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Vote for a candidate
    Vote {
        /// Candidate number as shown on the ballot page
        candidate: String,
    },
    /// Register a new voter account
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Prompted for (hidden) when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Set a configuration value
    Set {
        /// The key to set (server-url, session)
        key: String,
        /// The value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// The key to get (server-url, session)
        key: String,
    },
    /// Show the config file path
    Path,
    /// Clear a configuration value
    Clear {
        /// The key to clear (server-url, session)
        key: String,
    },
}

/// Flags shared by the network commands
struct Connection {
    server: Option<String>,
    session: Option<String>,
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let connection = Connection {
        server: cli.server,
        session: cli.session,
        yes: cli.yes,
    };

    match cli.command {
        Commands::Config { action } => {
            handle_config(action)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Vote { candidate } => run_vote(&connection, &candidate).await,
        Commands::Register {
            name,
            email,
            password,
        } => {
            let prompter = prompt::prompter();
            let registration = collect_registration(prompter.as_ref(), name, email, password)?;
            run_register(&connection, prompter.as_ref(), &registration).await
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "server-url" | "server_url" => {
                    Url::parse(&value)
                        .with_context(|| format!("Not a valid URL: {}", value))?;
                    config.set_server_url(value.clone());
                    config.save()?;
                    println!("{}", format!("Server set to: {}", value).green());
                }
                "session" => {
                    config.set_session(value);
                    config.save()?;
                    println!("{}", "Session saved successfully.".green());
                }
                _ => bail!(
                    "Unknown config key: {}. Available keys: server-url, session",
                    key
                ),
            }
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match key.as_str() {
                "server-url" | "server_url" => match config.server_url {
                    Some(url) => println!("server-url: {}", url),
                    None => println!(
                        "{}",
                        format!("server-url: not set (default: {})", DEFAULT_SERVER_URL).dimmed()
                    ),
                },
                "session" => match config.session {
                    Some(session) => println!("session: {}", config::mask(&session)),
                    None => println!("{}", "session: not set".dimmed()),
                },
                _ => bail!(
                    "Unknown config key: {}. Available keys: server-url, session",
                    key
                ),
            }
        }
        ConfigAction::Path => {
            if let Some(path) = Config::path() {
                println!("{}", path.display());
            } else {
                bail!("Could not determine config path");
            }
        }
        ConfigAction::Clear { key } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "server-url" | "server_url" => {
                    config.clear_server_url();
                    config.save()?;
                    println!("{}", "Server cleared.".green());
                }
                "session" => {
                    config.clear_session();
                    config.save()?;
                    println!("{}", "Session cleared.".green());
                }
                _ => bail!(
                    "Unknown config key: {}. Available keys: server-url, session",
                    key
                ),
            }
        }
    }
    Ok(())
}

async fn run_vote(connection: &Connection, candidate: &str) -> Result<ExitCode> {
    let settings = Settings::default();
    let (client, base) = connect(connection, &settings)?;
    let prompter = prompt::prompter();
    let ui = TerminalUi::new(prompter.as_ref(), &settings.messages, &base, connection.yes);

    let outcome = flow::vote(&client, &settings, &ui, &ActionGuard::new(), candidate).await;
    Ok(report(outcome))
}

async fn run_register(
    connection: &Connection,
    prompter: &dyn Prompter,
    registration: &Registration,
) -> Result<ExitCode> {
    let settings = Settings::default();
    let (client, base) = connect(connection, &settings)?;
    let ui = TerminalUi::new(prompter, &settings.messages, &base, connection.yes);

    let outcome = flow::register(&client, &settings, &ui, &ActionGuard::new(), registration).await;
    Ok(report(outcome))
}

/// Map an outcome to the process exit status. The toast has already told
/// the user what happened.
fn report(outcome: Outcome) -> ExitCode {
    if outcome == Outcome::Declined {
        println!("{}", "Cancelled.".red());
    }
    if let Outcome::Failed { error, .. } = &outcome {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    if succeeded(&outcome) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// A decline is the user's choice, not a failure.
fn succeeded(outcome: &Outcome) -> bool {
    matches!(
        outcome,
        Outcome::Redirected(_) | Outcome::Accepted(_) | Outcome::Declined
    )
}

fn connect(connection: &Connection, settings: &Settings) -> Result<(ApiClient, Url)> {
    let config = Config::load()?;
    let server = determine_server_url(
        connection.server.clone(),
        env::var(SERVER_URL_ENV).ok(),
        config.server_url,
    );
    let session = determine_session(
        connection.session.clone(),
        env::var(SESSION_ENV).ok(),
        config.session,
    );

    let base = Url::parse(&server).with_context(|| format!("Invalid server URL: {}", server))?;
    tracing::debug!(%base, has_session = session.is_some(), "connecting");

    let client =
        ApiClient::with_session(base.clone(), settings.endpoints.clone(), session.as_deref())
            .context("Failed to create HTTP client")?;
    Ok((client, base))
}

/// Pure logic to determine server precedence: CLI flag > env var > config > default
fn determine_server_url(
    cli_url: Option<String>,
    env_url: Option<String>,
    config_url: Option<String>,
) -> String {
    cli_url
        .or(env_url.filter(|u| !u.is_empty()))
        .or(config_url)
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}

/// Pure logic to determine session precedence: CLI flag > env var > config
fn determine_session(
    cli_session: Option<String>,
    env_session: Option<String>,
    config_session: Option<String>,
) -> Option<String> {
    cli_session
        .or(env_session.filter(|s| !s.is_empty()))
        .or(config_session)
}

/// Fill in whichever registration fields were not given on the command line.
fn collect_registration(
    prompter: &dyn Prompter,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<Registration> {
    let name = match name {
        Some(name) => name,
        None => prompter.input("Name")?,
    };
    let email = match email {
        Some(email) => email,
        None => prompter.input("Email")?,
    };
    let password = match password {
        Some(password) => password,
        None => prompter.password("Password")?,
    };
    Ok(Registration::new(name, email, password))
}
