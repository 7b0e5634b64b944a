//! `edutech` - command-line shell over the EduTech client runtime.
//!
//! Results are printed to stdout as JSON; notifications and logs go to
//! stderr.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use serde_json::Value;

use edutech_client::config::AppConfig;
use edutech_client::domain::request::UploadFile;
use edutech_client::domain::session::PersistenceScope;
use edutech_client::domain::validation::{is_valid_email, is_valid_password};
use edutech_client::{telemetry, Runtime};

#[derive(Parser)]
#[command(name = "edutech", version, about = "EduTech learning platform client")]
struct Cli {
    /// Keep the session only for this process instead of on disk
    #[arg(long, global = true)]
    no_remember: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and store the session
    Login { email: String, password: String },
    /// Create an account from a JSON object
    Register { user_data: String },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// List lessons, optionally for one grade
    Lessons { grade: Option<String> },
    /// Show one lesson
    Lesson { id: String },
    /// List quizzes
    Quizzes,
    /// Show one quiz
    Quiz { id: String },
    /// Submit quiz answers given as a JSON value
    Submit { id: String, answers: String },
    /// List your quiz attempts
    Attempts,
    /// Show progress for a user
    Progress { user_id: String },
    /// Record progress on a lesson from a JSON object
    UpdateProgress { lesson_id: i64, progress: String },
    /// Show the student dashboard
    Dashboard,
    /// Ask the AI tutor
    Tutor { query: String },
    /// Generate study material on a topic
    Generate { topic: String },
    /// Upload a lesson file
    Upload { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    telemetry::init(&config.logging)?;

    let runtime = Runtime::from_config(&config)?;
    let outcome = run(&runtime, cli).await;

    if let Some(value) = outcome? {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}

async fn run(runtime: &Runtime, cli: Cli) -> Result<Option<Value>> {
    let client = &runtime.client;

    let value = match cli.command {
        Command::Login { email, password } => {
            if !is_valid_email(&email) {
                bail!("Please enter a valid email address");
            }
            let password = SecretString::new(password);
            let scope = PersistenceScope::from_persistent(!cli.no_remember);
            let response = client.login_with_scope(&email, &password, scope).await?;
            serde_json::to_value(response)?
        }
        Command::Register { user_data } => {
            let user_data: Value =
                serde_json::from_str(&user_data).context("user_data must be JSON")?;
            if let Some(password) = user_data.get("password").and_then(Value::as_str) {
                if !is_valid_password(password) {
                    bail!("Password must be at least 8 characters");
                }
            }
            client.register(user_data).await?
        }
        Command::Logout => {
            client.logout().await?;
            return Ok(None);
        }
        Command::Whoami => match client.current_session().await {
            Some(session) => serde_json::to_value(session)?,
            None => bail!("Not logged in"),
        },
        Command::Lessons { grade } => client.list_lessons(grade.as_deref()).await?,
        Command::Lesson { id } => client.get_lesson(id).await?,
        Command::Quizzes => client.list_quizzes().await?,
        Command::Quiz { id } => client.get_quiz(id).await?,
        Command::Submit { id, answers } => {
            let answers: Value = serde_json::from_str(&answers).context("answers must be JSON")?;
            client.submit_quiz(id, answers).await?
        }
        Command::Attempts => client.list_quiz_attempts().await?,
        Command::Progress { user_id } => client.get_progress(user_id).await?,
        Command::UpdateProgress {
            lesson_id,
            progress,
        } => {
            let progress = match serde_json::from_str::<Value>(&progress)
                .context("progress must be a JSON object")?
            {
                Value::Object(map) => map,
                _ => bail!("progress must be a JSON object"),
            };
            client.update_progress(lesson_id, progress).await?
        }
        Command::Dashboard => client.student_dashboard().await?,
        Command::Tutor { query } => client.ai_tutor_query(&query).await?,
        Command::Generate { topic } => client.generate_content(&topic).await?,
        Command::Upload { path } => {
            let file = read_upload(&path).await?;
            if let Err(e) = runtime.upload_policy.check(&file.file_name, file.len()) {
                tracing::warn!(error = %e, "Upload may be rejected by the server");
            }
            client.upload_file(file).await?
        }
    };

    Ok(Some(value))
}

async fn read_upload(path: &Path) -> Result<UploadFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .context("Upload path has no file name")?;
    Ok(UploadFile::new(file_name, bytes))
}
