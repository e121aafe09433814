//! Drives a task board through a scripted session and prints the final
//! board snapshot as JSON.
//!
//! Usage:
//!
//! ```text
//! taskboard-demo [script-path]
//! ```
//!
//! The optional script is a JSON array of board events. Without one, a
//! built-in session creates a task, then filters and sorts the board. A
//! representative script is:
//!
//! ```json
//! [
//!   "toggleForm",
//!   { "editDraft": { "setTitle": "Plan launch" } },
//!   { "editDraft": { "setPriority": "high" } },
//!   { "editDraft": "addTag" },
//!   { "editDraft": { "updateTag": { "index": 0, "value": "marketing" } } },
//!   "submitDraft",
//!   { "selectFilter": "high" },
//!   { "selectSort": "title" }
//! ]
//! ```
//!
//! Notifications and mutations are logged to stderr; set `RUST_LOG` to
//! change verbosity.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mockable::DefaultClock;
use std::env;
use std::io::{self, Write};
use std::sync::Arc;
use taskboard::board::{
    adapters::{logging::TracingNotifier, memory::InMemoryTaskRepository},
    config::BoardConfig,
    domain::{DraftEdit, Priority},
    services::{BoardEvent, TaskBoard, TaskStoreError},
    view::{SortKey, TaskFilter},
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while running a demo session.
#[derive(Debug, Error)]
enum DemoError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read script {path}: {source}")]
    ScriptRead {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse script: {0}")]
    ScriptParse(#[source] serde_json::Error),
    #[error("failed to build board: {0}")]
    Board(#[from] TaskStoreError),
    #[error("failed to write snapshot: {0}")]
    Output(#[source] serde_json::Error),
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let script = parse_args(env::args())?;
    run(script.as_deref()).map_err(Into::into)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Utf8PathBuf>, DemoError> {
    let _program = args.next();
    let script = args.next().map(Utf8PathBuf::from);
    if let Some(extra) = args.next() {
        return Err(DemoError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok(script)
}

fn run(script: Option<&Utf8Path>) -> Result<(), DemoError> {
    let events = match script {
        Some(path) => load_script(path)?,
        None => default_script(),
    };
    tracing::info!(events = events.len(), "starting demo session");

    let mut board = TaskBoard::new(
        InMemoryTaskRepository::new(),
        TracingNotifier,
        Arc::new(DefaultClock),
        BoardConfig::default(),
    )?;
    for event in events {
        board.handle(event);
    }

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &board.snapshot()).map_err(DemoError::Output)?;
    writeln!(stdout).map_err(|err| DemoError::Output(serde_json::Error::io(err)))
}

fn load_script(path: &Utf8Path) -> Result<Vec<BoardEvent>, DemoError> {
    let text = read_script(path).map_err(|source| DemoError::ScriptRead {
        path: path.to_owned(),
        source,
    })?;
    parse_script(&text)
}

fn read_script(path: &Utf8Path) -> io::Result<String> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "script path has no file name"))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}

fn parse_script(text: &str) -> Result<Vec<BoardEvent>, DemoError> {
    serde_json::from_str(text).map_err(DemoError::ScriptParse)
}

fn default_script() -> Vec<BoardEvent> {
    vec![
        BoardEvent::ToggleForm,
        BoardEvent::EditDraft(DraftEdit::SetTitle("Plan launch".to_owned())),
        BoardEvent::EditDraft(DraftEdit::SetDescription(
            "Coordinate the release announcement".to_owned(),
        )),
        BoardEvent::EditDraft(DraftEdit::SetPriority(Priority::High)),
        BoardEvent::EditDraft(DraftEdit::AddTag),
        BoardEvent::EditDraft(DraftEdit::UpdateTag {
            index: 0,
            value: "marketing".to_owned(),
        }),
        BoardEvent::SubmitDraft,
        BoardEvent::SelectFilter(TaskFilter::priority(Priority::High)),
        BoardEvent::SelectSort(SortKey::Title),
    ]
}
