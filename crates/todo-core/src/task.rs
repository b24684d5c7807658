use std::fmt;

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

use crate::datetime::is_overdue;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// One to-do item as it is kept in
/// memory and in local storage.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:        TaskId,
  pub text:      String,
  #[serde(default)]
  pub completed: bool,
  #[serde(
    rename = "dueDate",
    default
  )]
  pub due_date:  Option<NaiveDate>
}

impl Task {
  pub fn new(
    id: TaskId,
    text: String,
    due_date: Option<NaiveDate>
  ) -> Self {
    Self {
      id,
      text,
      completed: false,
      due_date
    }
  }

  /// Whether the row should carry the
  /// overdue warning. Completed tasks
  /// never do.
  #[must_use]
  pub fn shows_overdue(
    &self,
    today: NaiveDate
  ) -> bool {
    !self.completed
      && is_overdue(
        self.due_date,
        today
      )
  }
}
