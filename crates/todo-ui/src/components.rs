mod summary_bar;
mod task_input;
mod task_list;
mod task_list_row;

pub use summary_bar::SummaryBar;
pub use task_input::TaskInput;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
