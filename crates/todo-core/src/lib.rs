pub mod config;
pub mod datetime;
pub mod i18n;
pub mod storage;
pub mod store;
pub mod summary;
pub mod task;

pub use config::AppConfig;
pub use datetime::{
  Clock,
  FixedClock,
  SystemClock,
  format_date,
  is_overdue
};
pub use i18n::{
  Labels,
  Locale
};
pub use storage::{
  JsonTaskStorage,
  KeyValueBackend,
  MemoryBackend,
  StorageError,
  TaskStorage
};
pub use store::TaskStore;
pub use summary::Summary;
pub use task::{
  Task,
  TaskId
};
