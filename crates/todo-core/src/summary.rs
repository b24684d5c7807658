use chrono::NaiveDate;

use crate::task::Task;

/// Counts shown under the list.
/// Recomputed from the task list on
/// every render.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct Summary {
  pub total:     usize,
  pub completed: usize,
  pub overdue:   usize
}

impl Summary {
  #[must_use]
  pub fn of(
    tasks: &[Task],
    today: NaiveDate
  ) -> Self {
    tasks.iter().fold(
      Self::default(),
      |mut acc, task| {
        acc.total += 1;
        if task.completed {
          acc.completed += 1;
        }
        if task.shows_overdue(today) {
          acc.overdue += 1;
        }
        acc
      }
    )
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.total == 0
  }
}
