use serde::{
  Deserialize,
  Serialize
};

use crate::summary::Summary;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Ja
}

/// Every user-facing string of the
/// page, resolved for one locale.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Labels {
  pub locale:         Locale,
  pub title:          &'static str,
  pub placeholder:    &'static str,
  pub add:            &'static str,
  pub due:            &'static str,
  pub empty:          &'static str,
  pub delete:         &'static str,
  pub completed:      &'static str,
  pub overdue:        &'static str,
  pub overdue_marker: &'static str
}

impl Labels {
  #[must_use]
  pub fn for_locale(
    locale: Locale
  ) -> Self {
    match locale {
      | Locale::En => {
        Self {
          locale,
          title: "Todo List",
          placeholder: "Add a new task...",
          add: "Add",
          due: "Due:",
          empty: "No tasks",
          delete: "Delete",
          completed: "Completed",
          overdue: "Overdue",
          overdue_marker: "⚠ "
        }
      }
      | Locale::Ja => {
        Self {
          locale,
          title: "Todo List",
          placeholder:
            "新しいタスクを入力...",
          add: "追加",
          due: "期限:",
          empty: "タスクがありません",
          delete: "削除",
          completed: "完了",
          overdue: "期限切れ",
          overdue_marker: "⚠ "
        }
      }
    }
  }

  /// `Completed: 1 / 2`
  #[must_use]
  pub fn completion_line(
    &self,
    summary: &Summary
  ) -> String {
    format!(
      "{}: {} / {}",
      self.completed,
      summary.completed,
      summary.total
    )
  }

  /// `(Overdue: 1)`, or `None` when
  /// nothing is overdue.
  #[must_use]
  pub fn overdue_note(
    &self,
    summary: &Summary
  ) -> Option<String> {
    (summary.overdue > 0).then(|| {
      format!(
        "({}: {})",
        self.overdue, summary.overdue
      )
    })
  }
}

impl Default for Labels {
  fn default() -> Self {
    Self::for_locale(Locale::default())
  }
}

#[cfg(test)]
mod tests {
  use super::{
    Labels,
    Locale
  };
  use crate::summary::Summary;

  #[test]
  fn renders_summary_lines() {
    let summary = Summary {
      total:     2,
      completed: 1,
      overdue:   1
    };

    let en = Labels::for_locale(
      Locale::En
    );
    assert_eq!(
      en.completion_line(&summary),
      "Completed: 1 / 2"
    );
    assert_eq!(
      en.overdue_note(&summary)
        .as_deref(),
      Some("(Overdue: 1)")
    );

    let ja = Labels::for_locale(
      Locale::Ja
    );
    assert_eq!(
      ja.completion_line(&summary),
      "完了: 1 / 2"
    );
    assert_eq!(
      ja.overdue_note(&summary)
        .as_deref(),
      Some("(期限切れ: 1)")
    );
  }

  #[test]
  fn omits_overdue_note_when_zero() {
    let summary = Summary {
      total:     3,
      completed: 0,
      overdue:   0
    };
    assert_eq!(
      Labels::default()
        .overdue_note(&summary),
      None
    );
  }
}
