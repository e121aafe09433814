//! The task board: an explicit state container for one board session.
//!
//! The board owns three private regions: the task store, the draft form and
//! the transient drag selection, plus the active filter and sort key.
//! Presentation layers send [`BoardEvent`]s in and read a
//! [`BoardSnapshot`] back out.

use super::store::{TaskStoreResult, TaskStoreService};
use crate::board::{
    config::BoardConfig,
    domain::{DraftEdit, DraftTask, Task, TaskId, TaskStatus},
    ports::{Notifier, TaskRepository},
    seed::sample_tasks,
    view::{
        BoardSnapshot, ColumnSnapshot, SortKey, TaskFilter, ViewQuery, derive_view,
        partition_columns,
        snapshot::{filter_options, sort_options},
    },
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// User interaction delivered by the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoardEvent {
    /// Opens or closes the new-task form.
    ToggleForm,
    /// Edits the draft.
    EditDraft(DraftEdit),
    /// Submits the draft.
    SubmitDraft,
    /// Discards the draft and closes the form.
    CancelDraft,
    /// Deletes a task.
    DeleteTask(TaskId),
    /// Starts dragging a task.
    DragStart(TaskId),
    /// Drops the dragged task onto a column.
    Drop(TaskStatus),
    /// Selects the active filter.
    SelectFilter(TaskFilter),
    /// Selects the active sort key.
    SelectSort(SortKey),
}

/// Interactive task board.
#[derive(Debug)]
pub struct TaskBoard<R, N, C>
where
    R: TaskRepository,
    N: Notifier,
    C: Clock,
{
    store: TaskStoreService<R, N>,
    clock: Arc<C>,
    config: BoardConfig,
    filter: TaskFilter,
    sort: SortKey,
    draft: DraftTask,
    form_open: bool,
    dragging: Option<TaskId>,
}

impl<R, N, C> TaskBoard<R, N, C>
where
    R: TaskRepository,
    N: Notifier,
    C: Clock,
{
    /// Creates a board over `repository`, seeding the sample tasks when the
    /// configuration asks for them.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`](super::TaskStoreError) when the sample
    /// tasks cannot be stored.
    pub fn new(
        repository: R,
        notifier: N,
        clock: Arc<C>,
        config: BoardConfig,
    ) -> TaskStoreResult<Self> {
        let mut store = TaskStoreService::new(repository, notifier);
        if config.seed_tasks {
            store.load(sample_tasks(clock.utc())?)?;
        }
        let draft = fresh_draft(&*clock, &config);
        Ok(Self {
            store,
            clock,
            config,
            filter: TaskFilter::default(),
            sort: SortKey::default(),
            draft,
            form_open: false,
            dragging: None,
        })
    }

    /// Applies one interaction event.
    pub fn handle(&mut self, event: BoardEvent) {
        tracing::trace!(?event, "board event");
        match event {
            BoardEvent::ToggleForm => self.toggle_form(),
            BoardEvent::EditDraft(edit) => self.edit_draft(edit),
            BoardEvent::SubmitDraft => {
                if let Err(err) = self.submit_draft() {
                    tracing::debug!(error = %err, "draft submission rejected");
                }
            }
            BoardEvent::CancelDraft => self.cancel_draft(),
            BoardEvent::DeleteTask(id) => {
                self.delete_task(id);
            }
            BoardEvent::DragStart(id) => self.drag_start(id),
            BoardEvent::Drop(status) => {
                self.drop_on(status);
            }
            BoardEvent::SelectFilter(filter) => self.select_filter(filter),
            BoardEvent::SelectSort(sort) => self.select_sort(sort),
        }
    }

    /// Opens the form when closed and closes it when open.
    pub const fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    /// Applies an edit to the draft. The store is not touched.
    pub fn edit_draft(&mut self, edit: DraftEdit) {
        self.draft.apply(edit);
    }

    /// Commits the draft as a new task.
    ///
    /// On success the form closes and the draft resets. On failure the form
    /// and draft are left as they were so the user can correct them.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`](super::TaskStoreError) when the draft is
    /// rejected.
    pub fn submit_draft(&mut self) -> TaskStoreResult<Task> {
        let task = self.store.create(&self.draft)?;
        self.reset_draft();
        self.form_open = false;
        Ok(task)
    }

    /// Discards the draft and closes the form.
    pub fn cancel_draft(&mut self) {
        self.reset_draft();
        self.form_open = false;
    }

    /// Deletes a task, returning it when it existed.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        self.store.delete(id)
    }

    /// Moves a task to `status`, returning the updated task when it moved.
    pub fn change_status(&mut self, id: TaskId, status: TaskStatus) -> Option<Task> {
        self.store.change_status(id, status)
    }

    /// Marks a task as being dragged.
    pub const fn drag_start(&mut self, id: TaskId) {
        self.dragging = Some(id);
    }

    /// Drops the dragged task onto the `status` column.
    ///
    /// The task moves only when it still exists and is not already in that
    /// column. The drag selection is cleared either way.
    pub fn drop_on(&mut self, status: TaskStatus) -> Option<Task> {
        let task = self
            .dragging
            .take()
            .and_then(|id| self.store.find_by_id(id))?;
        if task.status() == status {
            return None;
        }
        self.store.change_status(task.id(), status)
    }

    /// Selects the active filter.
    pub const fn select_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Selects the active sort key.
    pub const fn select_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Returns the view query for the current selections and time.
    #[must_use]
    pub fn query(&self) -> ViewQuery {
        ViewQuery::new(self.filter, self.sort, self.clock.utc())
            .with_upcoming_window(self.config.upcoming_window)
    }

    /// Returns the filtered, sorted tasks.
    #[must_use]
    pub fn view(&self) -> Vec<Task> {
        let tasks = self.store.tasks();
        derive_view(&tasks, &self.query())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns the presentation model of the whole board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let query = self.query();
        let tasks = self.store.tasks();
        let view = derive_view(&tasks, &query);
        let columns = partition_columns(&view)
            .iter()
            .map(|column| ColumnSnapshot::new(column, query.now, self.config.visible_tag_limit))
            .collect();

        BoardSnapshot {
            filter: self.filter,
            sort: self.sort,
            filter_options: filter_options(),
            sort_options: sort_options(),
            columns,
            form_open: self.form_open,
            draft: self.draft.clone(),
            dragging: self.dragging,
        }
    }

    /// Returns every task in store order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.store.tasks()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.store.find_by_id(id)
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &DraftTask {
        &self.draft
    }

    /// Returns whether the new-task form is open.
    #[must_use]
    pub const fn form_open(&self) -> bool {
        self.form_open
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn dragging(&self) -> Option<TaskId> {
        self.dragging
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Returns the active sort key.
    #[must_use]
    pub const fn sort(&self) -> SortKey {
        self.sort
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        self.store.notifier()
    }

    /// Returns the notifier mutably, e.g. to drain pending messages.
    pub const fn notifier_mut(&mut self) -> &mut N {
        self.store.notifier_mut()
    }

    fn reset_draft(&mut self) {
        self.draft = fresh_draft(&*self.clock, &self.config);
    }
}

fn fresh_draft(clock: &impl Clock, config: &BoardConfig) -> DraftTask {
    DraftTask::new(
        config.default_priority,
        clock.utc() + config.default_due_offset,
    )
}
