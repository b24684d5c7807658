use chrono::{
  Datelike,
  Local,
  NaiveDate
};

use crate::i18n::Locale;

const DUE_DATE_FORMAT: &str =
  "%Y-%m-%d";

/// Source of "now" for id assignment
/// and of "today" for overdue checks.
pub trait Clock {
  fn now_millis(&self) -> i64;

  fn today(&self) -> NaiveDate;
}

/// Wall clock in the local time zone.
/// On wasm32 this reads the browser's
/// `Date`.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now_millis(&self) -> i64 {
    Local::now().timestamp_millis()
  }

  fn today(&self) -> NaiveDate {
    Local::now().date_naive()
  }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
  pub millis: i64,
  pub today:  NaiveDate
}

impl FixedClock {
  #[must_use]
  pub fn new(
    millis: i64,
    today: NaiveDate
  ) -> Self {
    Self { millis, today }
  }
}

impl Clock for FixedClock {
  fn now_millis(&self) -> i64 {
    self.millis
  }

  fn today(&self) -> NaiveDate {
    self.today
  }
}

/// Parses a date-picker value. An
/// empty value means "no due date".
pub fn parse_due_date(
  raw: &str
) -> Option<NaiveDate> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }

  match NaiveDate::parse_from_str(
    trimmed,
    DUE_DATE_FORMAT
  ) {
    | Ok(date) => Some(date),
    | Err(error) => {
      tracing::warn!(
        %error,
        raw = trimmed,
        "ignoring unparsable due date"
      );
      None
    }
  }
}

/// Strictly before today, at day
/// granularity. Due today is not
/// overdue.
#[must_use]
pub fn is_overdue(
  due: Option<NaiveDate>,
  today: NaiveDate
) -> bool {
  due.is_some_and(|due| due < today)
}

#[must_use]
pub fn format_date(
  due: NaiveDate,
  locale: Locale
) -> String {
  match locale {
    | Locale::En => {
      due.format("%b %-d, %Y").to_string()
    }
    | Locale::Ja => {
      format!(
        "{}年{}月{}日",
        due.year(),
        due.month(),
        due.day()
      )
    }
  }
}
