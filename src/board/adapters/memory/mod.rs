//! In-memory adapters.

mod notifier;
mod task;

pub use notifier::RecordingNotifier;
pub use task::InMemoryTaskRepository;
