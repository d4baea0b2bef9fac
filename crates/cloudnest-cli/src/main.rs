//! CloudNest CLI
//!
//! Command-line client for the CloudNest file storage service.

mod api;
mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "cloudnest")]
#[command(author, version, about = "CloudNest - store, browse and share your files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Account and session management
    #[command(name = "auth")]
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// List your files
    List {
        /// Only show names containing this text (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,

        /// Restrict to a mime family (all, image, video, audio, text, application)
        #[arg(short = 't', long = "type", default_value = "all")]
        type_filter: String,

        /// Restrict to a recency window (any, today, week, month)
        #[arg(short, long, default_value = "any")]
        date: String,

        /// Order results (none, name-asc, size-desc, modified-desc)
        #[arg(short, long, default_value = "none")]
        sort: String,
    },

    /// Show details of a single file
    Info {
        /// File ID
        id: Uuid,
    },

    /// Upload a local file
    Upload {
        /// Path of the file to upload
        path: std::path::PathBuf,
    },

    /// Download a file
    Download {
        /// File ID
        id: Uuid,

        /// Destination path (defaults to the stored file name)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Delete a file
    Delete {
        /// File ID
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Share links
    #[command(name = "share")]
    Share {
        #[command(subcommand)]
        action: ShareAction,
    },

    /// Configuration management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Login to CloudNest
    Login {
        /// Email address (optional - will prompt if not provided)
        #[arg(short, long)]
        email: Option<String>,
        /// Password (optional - will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create a new account
    Register,
    /// Logout and forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Request a password reset email
    ForgotPassword {
        /// Email address (optional - will prompt if not provided)
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Complete a password reset with the emailed token
    ResetPassword {
        /// Reset token from the email (optional - will prompt if not provided)
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[derive(Subcommand)]
enum ShareAction {
    /// Create a share link for a file
    Create {
        /// File ID
        file_id: Uuid,

        /// Password-protect the link
        #[arg(long)]
        password: Option<String>,

        /// Quick expiry preset (1h, 24h, 7d)
        #[arg(long, conflicts_with_all = ["days", "hours", "minutes"])]
        preset: Option<String>,

        /// Expire after this many days
        #[arg(long, default_value_t = 0)]
        days: i64,

        /// Expire after this many hours
        #[arg(long, default_value_t = 0)]
        hours: i64,

        /// Expire after this many minutes
        #[arg(long, default_value_t = 0)]
        minutes: i64,
    },
    /// Revoke a share link
    Revoke {
        /// Link ID
        link_id: Uuid,
    },
    /// Open a share link and print the file URL
    Access {
        /// Share URL or bare link token
        link: String,

        /// Password, if the link is protected
        #[arg(long)]
        password: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the CloudNest server URL
    SetServer {
        /// Server URL (e.g., https://api.cloudnest.dev)
        url: String,
    },
    /// Show current configuration
    Show,
    /// Reset to default configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "cloudnest_cli=debug,cloudnest_core=debug"
        } else {
            "cloudnest_cli=info"
        })
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    info!("Starting CloudNest CLI");

    let result = match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Login { email, password } => match (email, password) {
                (Some(e), Some(p)) => commands::auth::login_non_interactive(&e, &p).await,
                _ => commands::auth::login_interactive().await,
            },
            AuthAction::Register => commands::auth::register().await,
            AuthAction::Logout => commands::auth::logout().await,
            AuthAction::Whoami => commands::auth::whoami().await,
            AuthAction::ForgotPassword { email } => {
                commands::auth::forgot_password(email.as_deref()).await
            }
            AuthAction::ResetPassword { token } => {
                commands::auth::reset_password(token.as_deref()).await
            }
        },

        Commands::List {
            query,
            type_filter,
            date,
            sort,
        } => commands::files::list(query.as_deref(), &type_filter, &date, &sort).await,
        Commands::Info { id } => commands::files::info(id).await,
        Commands::Upload { path } => commands::files::upload(&path).await,
        Commands::Download { id, output } => commands::files::download(id, output).await,
        Commands::Delete { id, yes } => commands::files::delete(id, yes).await,

        Commands::Share { action } => match action {
            ShareAction::Create {
                file_id,
                password,
                preset,
                days,
                hours,
                minutes,
            } => {
                commands::share::create(commands::share::CreateOptions {
                    file_id,
                    password,
                    preset,
                    days,
                    hours,
                    minutes,
                })
                .await
            }
            ShareAction::Revoke { link_id } => commands::share::revoke(link_id).await,
            ShareAction::Access { link, password } => {
                commands::share::access(&link, password.as_deref()).await
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::SetServer { url } => commands::config::set_server(&url).await,
            ConfigAction::Show => commands::config::show().await,
            ConfigAction::Reset => commands::config::reset().await,
        },
    };

    if let Err(ref e) = result {
        error!("Command failed: {}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    result
}
