//! When steps for task board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::{
    domain::{DraftEdit, Priority, TaskStatus},
    services::BoardEvent,
    view::{SortKey, TaskFilter},
};

#[when(r#"a draft titled "{title}" with priority "{priority}" is submitted"#)]
fn submit_draft(
    world: &mut BoardWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let draft_priority =
        Priority::try_from(priority.as_str()).wrap_err("parse draft priority")?;
    world.board.handle(BoardEvent::ToggleForm);
    world
        .board
        .handle(BoardEvent::EditDraft(DraftEdit::SetTitle(title.clone())));
    world
        .board
        .handle(BoardEvent::EditDraft(DraftEdit::SetPriority(draft_priority)));
    world.board.handle(BoardEvent::SubmitDraft);

    if let Some(task) = world
        .board
        .tasks()
        .into_iter()
        .find(|task| task.title() == title)
    {
        world.ids.insert(title, task.id());
    }
    Ok(())
}

#[when(r#"the "{filter}" filter is selected with "{sort}" sort"#)]
fn select_filter_and_sort(
    world: &mut BoardWorld,
    filter: String,
    sort: String,
) -> Result<(), eyre::Report> {
    let selected_filter = TaskFilter::try_from(filter.as_str()).wrap_err("parse filter")?;
    let selected_sort = SortKey::try_from(sort.as_str()).wrap_err("parse sort key")?;
    world.board.handle(BoardEvent::SelectFilter(selected_filter));
    world.board.handle(BoardEvent::SelectSort(selected_sort));
    Ok(())
}

#[when(r#"task "{title}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    world.board.handle(BoardEvent::DeleteTask(id));
    Ok(())
}

#[when(r#"task "{title}" is deleted a second time"#)]
fn delete_task_again(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    let before = world.board.tasks();
    world.board.handle(BoardEvent::DeleteTask(id));
    if world.board.tasks() != before {
        return Err(eyre::eyre!("second delete of {title:?} changed the store"));
    }
    Ok(())
}

#[when(r#"task "{title}" is dragged onto the "{status}" column"#)]
fn drag_onto_column(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    let target = TaskStatus::try_from(status.as_str()).wrap_err("parse column status")?;
    world.board.handle(BoardEvent::DragStart(id));
    world.board.handle(BoardEvent::Drop(target));
    Ok(())
}
