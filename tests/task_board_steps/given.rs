//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, board_over};
use chrono::Duration;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, Task, TaskData, TaskId, TaskStatus},
    ports::TaskRepository,
};

#[given("an empty board")]
fn an_empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.board = board_over(InMemoryTaskRepository::new(), world.now)
        .wrap_err("build empty board")?;
    world.ids.clear();
    Ok(())
}

#[given("the two-task scenario board")]
fn two_task_scenario_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let now = world.now;
    let task_a = Task::from_data(TaskData {
        id: TaskId::new(),
        title: "Task A".to_owned(),
        description: None,
        priority: Priority::High,
        status: TaskStatus::InProgress,
        due_date: now + Duration::days(2),
        tags: Vec::new(),
    })
    .wrap_err("build task A")?;
    let task_b = Task::from_data(TaskData {
        id: TaskId::new(),
        title: "Task B".to_owned(),
        description: None,
        priority: Priority::Medium,
        status: TaskStatus::Todo,
        due_date: now + Duration::days(5),
        tags: Vec::new(),
    })
    .wrap_err("build task B")?;

    world.ids.clear();
    let mut repository = InMemoryTaskRepository::new();
    for task in [task_a, task_b] {
        world.ids.insert(task.title().to_owned(), task.id());
        repository.insert(task).wrap_err("insert scenario task")?;
    }
    world.board = board_over(repository, now).wrap_err("build scenario board")?;
    Ok(())
}

#[given(r#"task "{title}" has moved to "{status}""#)]
fn task_has_moved(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    let target = TaskStatus::try_from(status.as_str()).wrap_err("parse target status")?;
    world
        .board
        .change_status(id, target)
        .ok_or_else(|| eyre::eyre!("task {title:?} did not move to {status}"))?;
    world.board.notifier_mut().drain();
    Ok(())
}
