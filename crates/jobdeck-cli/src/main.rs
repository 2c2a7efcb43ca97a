//! jobdeck - a command-line client for a job-search / CV-analysis platform.
//!
//! Login goes through the backend's Google OAuth flow in the user's browser;
//! the redirect URL is pasted back into `jobdeck callback`. Every other
//! subcommand maps onto one backend operation.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jobdeck_core::models::ResumeData;
use jobdeck_core::utils::{format_date, format_optional, truncate_string};
use jobdeck_core::{
    ApiClient, CallbackParams, Config, ConsoleNavigator, FileStore, KeyringStore, SessionManager,
    SessionStore,
};

const USAGE: &str = "\
jobdeck - job search & CV analysis from the terminal

USAGE:
    jobdeck <command>

COMMANDS:
    login              Start the Google OAuth flow (prints a URL to visit)
    signup             Same handshake as login; the backend creates the account
    callback <url>     Finish login by pasting the redirect URL
    status             Show whether a session is active and for whom
    validate           Ask the backend whether the stored token is still good
    jobs               List job postings
    resume             Show the analyzed CV
    resume upload <f>  Upload a PDF CV for analysis
    resume delete      Delete the stored CV
    logout             Clear the session

Set JOBDECK_API_URL to point at a different backend, and JOBDECK_STORE=keyring
to keep the session in the OS keychain instead of on disk.
";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Pick the session store backend: the OS keychain when JOBDECK_STORE=keyring,
/// files under the data directory otherwise.
fn build_store(config: &Config) -> Result<Arc<dyn SessionStore>> {
    match std::env::var("JOBDECK_STORE").as_deref() {
        Ok("keyring") => Ok(Arc::new(KeyringStore)),
        _ => Ok(Arc::new(FileStore::new(config.data_dir()?)?)),
    }
}

fn authed_client(session: &SessionManager, base_url: &str) -> Result<ApiClient> {
    let token = session
        .token()
        .context("Not logged in. Run `jobdeck login` first.")?;
    Ok(ApiClient::new(base_url)?.with_token(token))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("help");

    let config = Config::load()?;
    let base_url = config.api_base_url();
    let store = build_store(&config)?;
    let session = SessionManager::new(store, Arc::new(ConsoleNavigator), base_url.clone());
    session.initialize()?;

    match command {
        "login" | "signup" => {
            if command == "signup" {
                session.signup_with_google();
            } else {
                session.login_with_google();
            }
            println!("After signing in, finish with:");
            println!("    jobdeck callback '<redirect-url>'");
        }
        "callback" => cmd_callback(&session, args.get(2))?,
        "status" => cmd_status(&session),
        "validate" => cmd_validate(&session, &base_url).await?,
        "jobs" => cmd_jobs(&session, &base_url).await?,
        "resume" => {
            cmd_resume(
                &session,
                &base_url,
                args.get(2).map(String::as_str),
                args.get(3),
            )
            .await?
        }
        "logout" => {
            session.logout()?;
            println!("Logged out.");
        }
        "help" | "--help" | "-h" => print!("{}", USAGE),
        other => {
            eprintln!("Unknown command: {}\n", other);
            print!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

fn cmd_callback(session: &SessionManager, url: Option<&String>) -> Result<()> {
    let url = url.context("Usage: jobdeck callback '<redirect-url>'")?;
    let profile = session
        .handle_callback(&CallbackParams::from_url(url))
        .context("Login failed")?;
    println!("Logged in as {}.", profile.display_name());
    Ok(())
}

fn cmd_status(session: &SessionManager) {
    if session.is_authenticated() {
        match session.current_user() {
            Some(user) => println!("Logged in as {}.", user.display_name()),
            None => println!("Logged in (profile unreadable)."),
        }
    } else {
        println!("Not logged in.");
    }
}

async fn cmd_validate(session: &SessionManager, base_url: &str) -> Result<()> {
    let token = session
        .token()
        .context("Not logged in. Run `jobdeck login` first.")?;
    let client = ApiClient::new(base_url)?;
    match client.validate_token(&token).await {
        Some(user) => println!("Token is valid for {}.", user.display_name()),
        // A rejected token and an unreachable backend read the same here
        None => println!("Token is invalid or the backend is unreachable."),
    }
    Ok(())
}

async fn cmd_jobs(session: &SessionManager, base_url: &str) -> Result<()> {
    let client = authed_client(session, base_url)?;
    let jobs = client.fetch_jobs().await?;
    info!(count = jobs.len(), "Fetched job listings");

    if jobs.is_empty() {
        println!("No job postings right now.");
        return Ok(());
    }

    for job in &jobs {
        println!(
            "{:<32}  {:<28}  {:<6}  {}",
            truncate_string(job.title_display(), 32),
            truncate_string(&job.location_display(), 28),
            format_optional(&job.contract, "-"),
            job.published
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| "-".to_string()),
        );
        if let Some(ref url) = job.url {
            println!("    {}", url);
        }
    }
    Ok(())
}

async fn cmd_resume(
    session: &SessionManager,
    base_url: &str,
    action: Option<&str>,
    arg: Option<&String>,
) -> Result<()> {
    let client = authed_client(session, base_url)?;

    match action.unwrap_or("show") {
        "show" => match client.fetch_resume().await? {
            Some(resume) => print_resume(&resume),
            None => {
                println!("No CV on file. Upload one with `jobdeck resume upload <file.pdf>`.")
            }
        },
        "upload" => {
            let path = arg.context("Usage: jobdeck resume upload <file.pdf>")?;
            // The analyzer only accepts PDFs, same restriction the web client enforced
            if !path.to_lowercase().ends_with(".pdf") {
                anyhow::bail!("Only PDF files are accepted: {}", path);
            }
            let bytes =
                std::fs::read(path).with_context(|| format!("Failed to read {}", path))?;
            let file_name = std::path::Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("resume.pdf");

            println!("Uploading and analyzing {}...", file_name);
            let receipt = client.upload_resume(file_name, bytes).await?;
            println!(
                "{}",
                receipt.message.as_deref().unwrap_or("Analysis complete.")
            );
        }
        "delete" => {
            client.delete_resume().await?;
            println!("CV deleted.");
        }
        other => anyhow::bail!(
            "Unknown resume action: {} (expected show, upload, or delete)",
            other
        ),
    }
    Ok(())
}

fn print_resume(resume: &ResumeData) {
    if let Some(ref personal) = resume.personal {
        println!("Name:      {}", format_optional(&personal.name, "N/A"));
        println!("Email:     {}", format_optional(&personal.email, "N/A"));
        println!("Phone:     {}", format_optional(&personal.phone, "N/A"));
        println!("Location:  {}", format_optional(&personal.location, "N/A"));
    }
    if let Some(ref skills) = resume.skills {
        if !skills.hard_skills.is_empty() {
            println!("Hard skills: {}", skills.hard_skills.join(", "));
        }
        if !skills.soft_skills.is_empty() {
            println!("Soft skills: {}", skills.soft_skills.join(", "));
        }
    }
    if resume.personal.is_none() && resume.skills.is_none() {
        println!("CV uploaded, but the analysis has no readable sections.");
    }
}
