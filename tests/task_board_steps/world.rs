//! Shared world state for task board BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::{InMemoryTaskRepository, RecordingNotifier},
    config::BoardConfig,
    domain::TaskId,
    services::{TaskBoard, TaskStoreError},
};

/// Clock frozen at the scenario reference time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<InMemoryTaskRepository, RecordingNotifier, FixedClock>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub now: DateTime<Utc>,
    pub board: TestBoard,
    pub ids: HashMap<String, TaskId>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    ///
    /// # Panics
    ///
    /// Panics if the reference time or the board cannot be built.
    #[must_use]
    #[expect(clippy::expect_used, reason = "fixture setup failures abort the scenario")]
    pub fn new() -> Self {
        let now = Utc
            .with_ymd_and_hms(2024, 3, 10, 12, 0, 0)
            .single()
            .expect("valid reference time");
        Self {
            now,
            board: board_over(InMemoryTaskRepository::new(), now)
                .expect("board construction should succeed"),
            ids: HashMap::new(),
        }
    }

    /// Looks up the identifier of a task created under `title`.
    pub fn id_of(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a board over `repository` without sample tasks, frozen at `now`.
pub fn board_over(
    repository: InMemoryTaskRepository,
    now: DateTime<Utc>,
) -> Result<TestBoard, TaskStoreError> {
    TaskBoard::new(
        repository,
        RecordingNotifier::new(),
        Arc::new(FixedClock(now)),
        BoardConfig::default().with_seed_tasks(false),
    )
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
