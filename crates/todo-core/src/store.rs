use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::datetime::{
  Clock,
  SystemClock,
  parse_due_date
};
use crate::storage::TaskStorage;
use crate::summary::Summary;
use crate::task::{
  Task,
  TaskId
};

const SUBMIT_KEY: &str = "Enter";

/// The task list plus the two draft
/// inputs. Every effective mutation
/// writes the full list back to
/// storage.
#[derive(Debug, Clone)]
pub struct TaskStore<
  S,
  C = SystemClock
> {
  tasks:          Vec<Task>,
  draft_text:     String,
  draft_due_date: String,
  last_id:        u64,
  storage:        S,
  clock:          C
}

impl<S, C> TaskStore<S, C>
where
  S: TaskStorage,
  C: Clock
{
  /// Hydrates from storage once. A
  /// stored list that cannot be read
  /// is logged and replaced by an
  /// empty one. Tasks sharing an id
  /// get fresh ids; hydration never
  /// writes.
  #[tracing::instrument(skip_all)]
  pub fn open(
    storage: S,
    clock: C
  ) -> Self {
    let tasks = match storage.load() {
      | Ok(Some(tasks)) => tasks,
      | Ok(None) => Vec::new(),
      | Err(error) => {
        error!(
          %error,
          "failed loading stored \
           tasks; starting with an \
           empty list"
        );
        Vec::new()
      }
    };

    let last_id = tasks
      .iter()
      .map(|task| task.id.0)
      .max()
      .unwrap_or(0);

    let mut store = Self {
      tasks,
      draft_text: String::new(),
      draft_due_date: String::new(),
      last_id,
      storage,
      clock
    };
    store.reassign_duplicate_ids();

    info!(
      count = store.tasks.len(),
      last_id = store.last_id,
      "opened task store"
    );
    store
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn draft_text(&self) -> &str {
    &self.draft_text
  }

  /// Raw date-picker value; empty
  /// when no date is chosen.
  pub fn draft_due_date(&self) -> &str {
    &self.draft_due_date
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  pub fn today(&self) -> NaiveDate {
    self.clock.today()
  }

  pub fn summary(&self) -> Summary {
    Summary::of(
      &self.tasks,
      self.clock.today()
    )
  }

  pub fn set_draft_text(
    &mut self,
    text: impl Into<String>
  ) {
    self.draft_text = text.into();
  }

  pub fn set_draft_due_date(
    &mut self,
    raw: impl Into<String>
  ) {
    self.draft_due_date = raw.into();
  }

  /// Appends the draft as a new task
  /// and clears both drafts. Blank
  /// text is ignored.
  #[tracing::instrument(skip(self))]
  pub fn add_task(
    &mut self
  ) -> Option<TaskId> {
    let text = self.draft_text.trim();
    if text.is_empty() {
      debug!("ignoring blank task text");
      return None;
    }

    let text = text.to_string();
    let due_date = parse_due_date(
      &self.draft_due_date
    );
    let id = self.next_id();

    self.tasks.push(Task::new(
      id, text, due_date
    ));
    self.draft_text.clear();
    self.draft_due_date.clear();

    info!(
      %id,
      due = ?due_date,
      count = self.tasks.len(),
      "added task"
    );
    self.persist();
    Some(id)
  }

  /// Key presses in the text field.
  /// Enter submits through the same
  /// path as the add button.
  pub fn handle_key(
    &mut self,
    key: &str
  ) -> Option<TaskId> {
    if key == SUBMIT_KEY {
      self.add_task()
    } else {
      None
    }
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle_task(
    &mut self,
    id: TaskId
  ) -> bool {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    else {
      debug!("toggle for unknown task");
      return false;
    };

    task.completed = !task.completed;
    info!(
      completed = task.completed,
      "toggled task"
    );
    self.persist();
    true
  }

  #[tracing::instrument(skip(self))]
  pub fn delete_task(
    &mut self,
    id: TaskId
  ) -> bool {
    let before = self.tasks.len();
    self
      .tasks
      .retain(|task| task.id != id);

    if self.tasks.len() == before {
      debug!("delete for unknown task");
      return false;
    }

    info!(
      count = self.tasks.len(),
      "deleted task"
    );
    self.persist();
    true
  }

  /// Millisecond timestamp, bumped
  /// past the last issued id when the
  /// clock has not advanced. Once ids
  /// reach `u64::MAX` the lowest free
  /// id is used instead.
  fn next_id(&mut self) -> TaskId {
    let now = u64::try_from(
      self.clock.now_millis()
    )
    .unwrap_or(0);

    let Some(bumped) =
      self.last_id.checked_add(1)
    else {
      return self.lowest_unused_id();
    };

    let id = now.max(bumped);
    self.last_id = id;
    TaskId(id)
  }

  fn lowest_unused_id(&self) -> TaskId {
    let used: HashSet<u64> = self
      .tasks
      .iter()
      .map(|task| task.id.0)
      .collect();
    // More candidates than used ids,
    // so one of them is free.
    let id = (1..=used.len() as u64 + 1)
      .find(|candidate| {
        !used.contains(candidate)
      })
      .unwrap_or(0);
    TaskId(id)
  }

  /// Keeps the first task with a given
  /// id and gives later ones fresh ids.
  fn reassign_duplicate_ids(&mut self) {
    let mut seen =
      HashSet::with_capacity(
        self.tasks.len()
      );
    let duplicates: Vec<usize> = self
      .tasks
      .iter()
      .enumerate()
      .filter(|(_, task)| {
        !seen.insert(task.id)
      })
      .map(|(idx, _)| idx)
      .collect();

    for idx in duplicates {
      let old = self.tasks[idx].id;
      let id = self.next_id();
      self.tasks[idx].id = id;
      warn!(
        %old,
        new = %id,
        "reassigned duplicate task id"
      );
    }
  }

  fn persist(&mut self) {
    if let Err(error) =
      self.storage.save(&self.tasks)
    {
      error!(
        %error,
        count = self.tasks.len(),
        "failed to persist task list"
      );
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::TaskStore;
  use crate::datetime::FixedClock;
  use crate::storage::{
    JsonTaskStorage,
    MemoryBackend
  };
  use crate::task::TaskId;

  const NOW_MS: i64 = 1_781_481_600_000;

  fn store() -> TaskStore<
    JsonTaskStorage<MemoryBackend>,
    FixedClock
  > {
    TaskStore::open(
      JsonTaskStorage::with_default_key(
        MemoryBackend::new()
      ),
      FixedClock::new(
        NOW_MS,
        NaiveDate::from_ymd_opt(
          2026, 6, 15
        )
        .expect("valid date")
      )
    )
  }

  #[test]
  fn same_millisecond_adds_get_distinct_ids()
  {
    let mut store = store();
    store.set_draft_text("first");
    let first =
      store.add_task().expect("added");
    store.set_draft_text("second");
    let second =
      store.add_task().expect("added");

    assert_eq!(
      first,
      TaskId(NOW_MS as u64)
    );
    assert_eq!(
      second,
      TaskId(NOW_MS as u64 + 1)
    );
  }

  #[test]
  fn blank_text_keeps_drafts() {
    let mut store = store();
    store.set_draft_text("   ");
    store.set_draft_due_date("2026-07-01");

    assert_eq!(store.add_task(), None);
    assert_eq!(store.draft_text(), "   ");
    assert_eq!(
      store.draft_due_date(),
      "2026-07-01"
    );
    assert_eq!(
      store
        .storage()
        .backend()
        .write_count(),
      0
    );
  }

  #[test]
  fn only_enter_submits() {
    let mut store = store();
    store.set_draft_text("via keyboard");

    assert_eq!(store.handle_key("a"), None);
    assert!(store.tasks().is_empty());

    assert!(
      store.handle_key("Enter").is_some()
    );
    assert_eq!(
      store.tasks()[0].text,
      "via keyboard"
    );
    assert_eq!(store.draft_text(), "");
  }

  #[test]
  fn unparsable_draft_date_becomes_no_date()
  {
    let mut store = store();
    store.set_draft_text("odd date");
    store.set_draft_due_date("2026-13-40");
    store.add_task().expect("added");

    assert_eq!(
      store.tasks()[0].due_date,
      None
    );
  }

  #[test]
  fn ids_continue_after_hydrated_maximum()
  {
    let backend = MemoryBackend::with_entry(
      "todos",
      format!(
        r#"[{{"id":{},"text":"from the future","completed":false,"dueDate":null}}]"#,
        NOW_MS + 50
      )
    );
    let mut store = TaskStore::open(
      JsonTaskStorage::with_default_key(
        backend
      ),
      FixedClock::new(
        NOW_MS,
        NaiveDate::from_ymd_opt(
          2026, 6, 15
        )
        .expect("valid date")
      )
    );

    store.set_draft_text("next");
    assert_eq!(
      store.add_task(),
      Some(TaskId(NOW_MS as u64 + 51))
    );
  }

  fn open_with(
    raw: &str
  ) -> TaskStore<
    JsonTaskStorage<MemoryBackend>,
    FixedClock
  > {
    TaskStore::open(
      JsonTaskStorage::with_default_key(
        MemoryBackend::with_entry(
          "todos", raw
        )
      ),
      FixedClock::new(
        NOW_MS,
        NaiveDate::from_ymd_opt(
          2026, 6, 15
        )
        .expect("valid date")
      )
    )
  }

  #[test]
  fn later_duplicates_get_fresh_ids() {
    let store = open_with(
      r#"[{"id":5,"text":"a"},{"id":5,"text":"b"},{"id":5,"text":"c"}]"#
    );

    let ids: Vec<TaskId> = store
      .tasks()
      .iter()
      .map(|task| task.id)
      .collect();
    assert_eq!(
      ids,
      [
        TaskId(5),
        TaskId(NOW_MS as u64),
        TaskId(NOW_MS as u64 + 1)
      ]
    );
    assert_eq!(
      store
        .storage()
        .backend()
        .write_count(),
      0
    );
  }

  #[test]
  fn max_id_falls_back_to_lowest_free()
  {
    let mut store = open_with(&format!(
      r#"[{{"id":{},"text":"maxed"}},{{"id":1,"text":"one"}}]"#,
      u64::MAX
    ));

    store.set_draft_text("next");
    assert_eq!(
      store.add_task(),
      Some(TaskId(2))
    );
    store.set_draft_text("after");
    assert_eq!(
      store.add_task(),
      Some(TaskId(3))
    );
  }
}
