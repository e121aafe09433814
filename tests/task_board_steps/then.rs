//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskboard::board::{domain::TaskStatus, ports::Severity};

#[then("the task count is {count:usize}")]
fn task_count_is(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board.tasks().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then(r#"task "{title}" is in the "{status}" column"#)]
fn task_is_in_column(
    world: &BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str()).wrap_err("parse column status")?;
    let snapshot = world.board.snapshot();
    let column = snapshot
        .columns
        .iter()
        .find(|column| column.id == expected)
        .ok_or_else(|| eyre::eyre!("missing {status} column in snapshot"))?;
    if !column.cards.iter().any(|card| card.title == title) {
        return Err(eyre::eyre!("task {title:?} is not in the {status} column"));
    }
    Ok(())
}

#[then(r#"the last notification is a "{severity}" reading "{message}""#)]
fn last_notification_is(
    world: &BoardWorld,
    severity: String,
    message: String,
) -> Result<(), eyre::Report> {
    let last = world
        .board
        .notifier()
        .last()
        .ok_or_else(|| eyre::eyre!("no notification was sent"))?;
    if last.severity.as_str() != severity || last.message != message {
        return Err(eyre::eyre!(
            "expected {severity} notification {message:?}, got {last}"
        ));
    }
    Ok(())
}

#[then(r#"the view shows only "{title}""#)]
fn view_shows_only(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let titles: Vec<String> = world
        .board
        .view()
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    if titles != [title.clone()] {
        return Err(eyre::eyre!("expected only {title:?} in view, got {titles:?}"));
    }
    Ok(())
}

#[then(r#"the board holds only "{title}""#)]
fn board_holds_only(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let titles: Vec<String> = world
        .board
        .tasks()
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    if titles != [title.clone()] {
        return Err(eyre::eyre!("expected only {title:?} on board, got {titles:?}"));
    }
    if world
        .board
        .notifier()
        .delivered()
        .iter()
        .any(|note| note.severity == Severity::Error)
    {
        return Err(eyre::eyre!("deleting produced an error notification"));
    }
    Ok(())
}

#[then("no notification was sent since the move")]
fn no_notification_since_move(world: &BoardWorld) -> Result<(), eyre::Report> {
    let delivered = world.board.notifier().delivered();
    if !delivered.is_empty() {
        return Err(eyre::eyre!("unexpected notifications: {delivered:?}"));
    }
    Ok(())
}
