use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use drupass::PasswordHasher;
use drupass::audit::Report;
use drupass::config::{APP_NAME, DEFAULT_HASH_COUNT};
use drupass::secret::Password;
use drupass::types::{HashFormat, Operation};
use tracing::{Level, info};

use crate::ui::progress::Spinner;
use crate::ui::{display, prompt};

#[derive(Subcommand)]
pub enum Commands {
    /// Hash a password into a new `$S$` stored hash.
    Hash {
        /// Password to hash (optional, will prompt if not provided).
        #[arg(short, long)]
        password: Option<String>,

        /// Log2 iteration count, clamped to 7..=30.
        #[arg(short, long)]
        count_log2: Option<u32>,
    },

    /// Check a password against a stored hash.
    Verify {
        /// Stored hash ($S$, $P$, $H$, optionally U-prefixed).
        #[arg(short, long)]
        stored: String,

        /// Password to check (optional, will prompt if not provided).
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Report whether a stored hash should be regenerated.
    NeedsRehash {
        #[arg(short, long)]
        stored: String,

        /// Target log2 iteration count.
        #[arg(short, long)]
        count_log2: Option<u32>,
    },

    /// Classify a file of stored hashes, one per line.
    Audit {
        #[arg(short, long)]
        input: PathBuf,

        /// Target log2 iteration count.
        #[arg(short, long)]
        count_log2: Option<u32>,
    },

    /// Start interactive mode.
    Interactive,
}

#[derive(Parser)]
#[command(name = APP_NAME, version, about = "Create and check Drupal 7 compatible password hashes.")]
pub struct App {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();

        let level = if app.verbose { Level::DEBUG } else { Level::WARN };
        let subscriber = tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;

        Ok(app)
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Hash { password, count_log2 }) => {
                let password = Self::password_or(password, prompt::new_password)?;
                Self::run_hash(password, Self::hasher(count_log2)).await
            }
            Some(Commands::Verify { stored, password }) => {
                let password = Self::password_or(password, prompt::candidate_password)?;
                Self::run_verify(password, stored).await
            }
            Some(Commands::NeedsRehash { stored, count_log2 }) => {
                Self::run_needs_rehash(&stored, Self::hasher(count_log2));
                Ok(())
            }
            Some(Commands::Audit { input, count_log2 }) => Self::run_audit(input, Self::hasher(count_log2)).await,
            Some(Commands::Interactive) | None => Self::run_interactive().await,
        }
    }

    async fn run_interactive() -> Result<()> {
        display::print_banner();

        match prompt::select_operation()? {
            Operation::Hash => Self::run_hash(prompt::new_password()?, PasswordHasher::default()).await,
            Operation::Verify => {
                let stored = prompt::stored_hash()?;
                Self::run_verify(prompt::candidate_password()?, stored).await
            }
            Operation::NeedsRehash => {
                Self::run_needs_rehash(&prompt::stored_hash()?, PasswordHasher::default());
                Ok(())
            }
        }
    }

    async fn run_hash(password: Password, hasher: PasswordHasher) -> Result<()> {
        let spinner = Spinner::new(&format!("Hashing with 2^{} rounds...", hasher.count_log2()))?;
        let stored = tokio::task::spawn_blocking(move || hasher.hash(password.expose_secret())).await.context("hashing task panicked")??;
        spinner.finish();

        info!(count_log2 = hasher.count_log2(), "generated stored hash");
        display::show_hash(&stored);

        Ok(())
    }

    async fn run_verify(password: Password, stored: String) -> Result<()> {
        let format = HashFormat::identify(&stored);

        let spinner = Spinner::new("Verifying...")?;
        let matched = tokio::task::spawn_blocking(move || drupass::verify(password.expose_secret(), &stored)).await.context("verification task panicked")?;
        spinner.finish();

        info!(matched, %format, "verified password");
        display::show_verification(matched);

        if !matched {
            bail!("password verification failed");
        }

        Ok(())
    }

    fn run_needs_rehash(stored: &str, hasher: PasswordHasher) {
        let stale = hasher.needs_rehash(stored);
        let format = HashFormat::identify(stored);

        info!(stale, %format, "checked stored hash");
        display::show_rehash(stale, format, hasher.count_log2());
    }

    async fn run_audit(input: PathBuf, hasher: PasswordHasher) -> Result<()> {
        let report = Report::from_file(&input, hasher).await.with_context(|| format!("audit failed: {}", input.display()))?;

        info!(entries = report.entries.len(), stale = report.stale(), "audit complete");
        display::show_report(&report);

        Ok(())
    }

    fn hasher(count_log2: Option<u32>) -> PasswordHasher {
        PasswordHasher::new(count_log2.unwrap_or(DEFAULT_HASH_COUNT))
    }

    fn password_or(password: Option<String>, prompt: fn() -> Result<Password>) -> Result<Password> {
        match password.map(Password::from_string) {
            Some(password) => Ok(password),
            None => prompt(),
        }
    }
}
