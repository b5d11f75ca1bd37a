//! Application container owning the task list and the active filter.

use std::{fmt, sync::Arc};

use thiserror::Error;
use tracing::{debug, warn};

use super::{
    command::TodoCommand,
    focus::{FocusCoordinator, FocusRequest},
    view::{TodoView, compose_view},
};
use crate::todo::{
    config::{MissingTaskPolicy, TodoConfig, UnknownFilterPolicy},
    domain::{
        ActiveFilter, Filter, FilterSelector, ParseFilterError, Task, TaskDomainError, TaskId,
        TaskList, TaskName,
    },
    ports::{HeadingFocus, SubscriptionId, ViewObserver},
};

/// Errors returned by [`TodoApp`] operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoAppError {
    /// Domain validation or lookup failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// A filter name was not recognised.
    #[error(transparent)]
    Filter(#[from] ParseFilterError),
}

/// Result type for [`TodoApp`] operations.
pub type TodoAppResult<T> = Result<T, TodoAppError>;

/// Single owner of the to-do state.
///
/// Every mutating call applies its change to a working copy and, if anything
/// changed, commits it in one step:
///
/// 1. the new list and filter replace the current ones;
/// 2. a fresh [`TodoView`] is delivered to every subscribed observer;
/// 3. the focus coordinator sees the new task count and may ask the attached
///    heading for focus.
///
/// # Examples
///
/// ```
/// use todomatic::todo::services::TodoApp;
///
/// let mut app = TodoApp::new();
/// let id = app.add_task("Buy milk").expect("valid name");
/// app.toggle_task_completed(id).expect("tolerant by default");
/// assert_eq!(app.view().heading, "1 task remaining");
/// ```
pub struct TodoApp {
    config: TodoConfig,
    tasks: TaskList,
    filter: FilterSelector,
    focus: FocusCoordinator,
    heading: Option<Arc<dyn HeadingFocus>>,
    observers: Vec<(SubscriptionId, Arc<dyn ViewObserver>)>,
    next_subscription: u64,
}

/// Working copy of the state while commands are applied.
struct PendingState {
    tasks: TaskList,
    filter: FilterSelector,
    changed: bool,
}

impl TodoApp {
    /// Creates an empty container with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TodoConfig::default())
    }

    /// Creates an empty container with custom configuration.
    #[must_use]
    pub fn with_config(config: TodoConfig) -> Self {
        Self::from_parts(config, TaskList::new())
    }

    /// Creates a container seeded with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTaskId`] when two seeded tasks
    /// share an identifier.
    pub fn with_tasks(
        config: TodoConfig,
        tasks: impl IntoIterator<Item = Task>,
    ) -> TodoAppResult<Self> {
        let list = TaskList::from_tasks(tasks)?;
        Ok(Self::from_parts(config, list))
    }

    fn from_parts(config: TodoConfig, tasks: TaskList) -> Self {
        let filter = FilterSelector::new(config.initial_filter);
        let focus = FocusCoordinator::starting_at(tasks.len());
        Self {
            config,
            tasks,
            filter,
            focus,
            heading: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TodoConfig {
        &self.config
    }

    /// Returns the full task list.
    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn active_filter(&self) -> &ActiveFilter {
        self.filter.active()
    }

    /// Derives the view from the current state.
    #[must_use]
    pub fn view(&self) -> TodoView {
        compose_view(&self.tasks, self.filter.active())
    }

    /// Attaches the heading that receives focus after single deletions.
    ///
    /// Replaces any previously attached heading.
    pub fn attach_heading(&mut self, heading: Arc<dyn HeadingFocus>) {
        self.heading = Some(heading);
    }

    /// Registers an observer notified after every commit.
    pub fn subscribe(&mut self, observer: Arc<dyn ViewObserver>) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription = self.next_subscription.saturating_add(1);
        self.observers.push((id, observer));
        debug!(subscription = %id, "view observer subscribed");
        id
    }

    /// Removes a registered observer.
    ///
    /// Returns `false` when the subscription was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(subscription, _)| *subscription != id);
        self.observers.len() != before
    }

    /// Adds a task named `name` to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the name is blank.
    pub fn add_task(&mut self, name: impl Into<String>) -> TodoAppResult<TaskId> {
        let task_name = TaskName::new(name)?;
        let mut pending = self.pending();
        let id = append_task(&mut pending, task_name);
        self.finish(pending);
        Ok(id)
    }

    /// Inverts completion of the task `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] for an unknown identifier
    /// under [`MissingTaskPolicy::Report`].
    pub fn toggle_task_completed(&mut self, id: TaskId) -> TodoAppResult<()> {
        self.dispatch(TodoCommand::ToggleCompleted(id))?;
        Ok(())
    }

    /// Removes the task `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] for an unknown identifier
    /// under [`MissingTaskPolicy::Report`].
    pub fn delete_task(&mut self, id: TaskId) -> TodoAppResult<()> {
        self.dispatch(TodoCommand::Delete(id))?;
        Ok(())
    }

    /// Renames the task `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the new name is blank,
    /// or [`TaskDomainError::TaskNotFound`] for an unknown identifier under
    /// [`MissingTaskPolicy::Report`].
    pub fn edit_task(&mut self, id: TaskId, new_name: impl Into<String>) -> TodoAppResult<()> {
        let name = TaskName::new(new_name)?;
        self.dispatch(TodoCommand::Edit { id, name })?;
        Ok(())
    }

    /// Selects `filter`.
    pub fn set_filter(&mut self, filter: Filter) {
        let mut pending = self.pending();
        apply_filter(&mut pending, ActiveFilter::Known(filter));
        self.finish(pending);
    }

    /// Selects a filter by display name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFilterError`] for an unknown name under
    /// [`UnknownFilterPolicy::Reject`]. Under
    /// [`UnknownFilterPolicy::ShowNothing`] the name is selected and the
    /// view is empty.
    pub fn set_filter_named(&mut self, name: &str) -> TodoAppResult<()> {
        self.dispatch(TodoCommand::SetFilterNamed(name.to_owned()))?;
        Ok(())
    }

    /// Applies one command and commits it.
    ///
    /// Returns the identifier of the added task for [`TodoCommand::Add`].
    ///
    /// # Errors
    ///
    /// Returns the error of the command; nothing is committed in that case.
    pub fn dispatch(&mut self, command: TodoCommand) -> TodoAppResult<Option<TaskId>> {
        let added = self.dispatch_batch([command])?;
        Ok(added.into_iter().next())
    }

    /// Applies `commands` in order and commits once.
    ///
    /// Observers and the focus coordinator see a single transition for the
    /// whole batch. Returns the identifiers of added tasks in order.
    ///
    /// # Errors
    ///
    /// Returns the first command error. The batch is then discarded and
    /// nothing is committed.
    #[tracing::instrument(skip_all)]
    pub fn dispatch_batch(
        &mut self,
        commands: impl IntoIterator<Item = TodoCommand>,
    ) -> TodoAppResult<Vec<TaskId>> {
        let mut pending = self.pending();
        let mut added = Vec::new();
        for command in commands {
            if let Some(id) = self.apply(&mut pending, command)? {
                added.push(id);
            }
        }
        self.finish(pending);
        Ok(added)
    }

    fn pending(&self) -> PendingState {
        PendingState {
            tasks: self.tasks.clone(),
            filter: self.filter.clone(),
            changed: false,
        }
    }

    fn apply(
        &self,
        pending: &mut PendingState,
        command: TodoCommand,
    ) -> TodoAppResult<Option<TaskId>> {
        match command {
            TodoCommand::Add(name) => Ok(Some(append_task(pending, name))),
            TodoCommand::ToggleCompleted(id) => {
                let rebuilt = pending.tasks.toggle_completed(id);
                self.replace_tasks(pending, rebuilt)?;
                Ok(None)
            }
            TodoCommand::Delete(id) => {
                let rebuilt = pending.tasks.delete(id);
                self.replace_tasks(pending, rebuilt)?;
                Ok(None)
            }
            TodoCommand::Edit { id, name } => {
                let rebuilt = pending.tasks.edit(id, name);
                self.replace_tasks(pending, rebuilt)?;
                Ok(None)
            }
            TodoCommand::SetFilter(filter) => {
                apply_filter(pending, ActiveFilter::Known(filter));
                Ok(None)
            }
            TodoCommand::SetFilterNamed(name) => {
                let selected = self.resolve_filter(name)?;
                apply_filter(pending, selected);
                Ok(None)
            }
        }
    }

    /// Installs a rebuilt list, tolerating unknown identifiers when the
    /// policy allows it.
    fn replace_tasks(
        &self,
        pending: &mut PendingState,
        rebuilt: Result<TaskList, TaskDomainError>,
    ) -> TodoAppResult<()> {
        match rebuilt {
            Ok(tasks) => {
                pending.tasks = tasks;
                pending.changed = true;
                Ok(())
            }
            Err(TaskDomainError::TaskNotFound(id))
                if self.config.missing_task == MissingTaskPolicy::Ignore =>
            {
                warn!(task_id = %id, "ignoring operation on unknown task");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn resolve_filter(&self, name: String) -> TodoAppResult<ActiveFilter> {
        match Filter::try_from(name.as_str()) {
            Ok(filter) => Ok(ActiveFilter::Known(filter)),
            Err(err) => match self.config.unknown_filter {
                UnknownFilterPolicy::ShowNothing => {
                    warn!(filter = %name, "selecting unknown filter, view will be empty");
                    Ok(ActiveFilter::Unrecognised(name))
                }
                UnknownFilterPolicy::Reject => Err(err.into()),
            },
        }
    }

    fn finish(&mut self, pending: PendingState) {
        if pending.changed {
            self.commit(pending.tasks, pending.filter);
        }
    }

    fn commit(&mut self, tasks: TaskList, filter: FilterSelector) {
        self.tasks = tasks;
        self.filter = filter;

        let view = self.view();
        debug!(
            total = view.total,
            visible = view.count,
            filter = %view.active_filter,
            observers = self.observers.len(),
            "committed todo state"
        );
        for (_, observer) in &self.observers {
            observer.view_changed(&view);
        }

        if self.focus.observe(self.tasks.len()) == FocusRequest::Heading {
            match &self.heading {
                Some(heading) => heading.focus_heading(),
                None => debug!("single task removed but no heading attached"),
            }
        }
    }
}

fn append_task(pending: &mut PendingState, name: TaskName) -> TaskId {
    let (tasks, id) = pending.tasks.add(name);
    debug!(task_id = %id, "task added");
    pending.tasks = tasks;
    pending.changed = true;
    id
}

fn apply_filter(pending: &mut PendingState, selected: ActiveFilter) {
    if pending.filter.active() == &selected {
        return;
    }
    match selected {
        ActiveFilter::Known(filter) => pending.filter.set_filter(filter),
        ActiveFilter::Unrecognised(name) => pending.filter.set_unrecognised(name),
    }
    pending.changed = true;
}

impl Default for TodoApp {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TodoApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoApp")
            .field("config", &self.config)
            .field("tasks", &self.tasks)
            .field("filter", &self.filter)
            .field("focus", &self.focus)
            .field("observers", &self.observers.len())
            .field("heading_attached", &self.heading.is_some())
            .finish_non_exhaustive()
    }
}
