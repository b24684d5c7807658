use chrono::NaiveDate;
use todo_core::{
  Labels,
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub today:     NaiveDate,
  pub labels:    Labels,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  if props.tasks.is_empty() {
    return html! {
        <p class="empty">{ props.labels.empty }</p>
    };
  }

  html! {
      <ul class="task-list">
          {
              for props.tasks.iter().cloned().map(|task| {
                  let key = task.id.0.to_string();
                  html! {
                      <TaskListRow
                          key={key}
                          task={task}
                          today={props.today}
                          labels={props.labels.clone()}
                          on_toggle={props.on_toggle.clone()}
                          on_delete={props.on_delete.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use todo_core::{
    Labels,
    Locale,
    Task,
    TaskId
  };
  use yew::{
    Callback,
    ServerRenderer
  };

  use super::{
    TaskList,
    TaskListProps
  };

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  async fn render(
    tasks: Vec<Task>,
    locale: Locale
  ) -> String {
    ServerRenderer::<TaskList>::with_props(
      move || TaskListProps {
        tasks,
        today: date(2026, 6, 15),
        labels: Labels::for_locale(locale),
        on_toggle: Callback::noop(),
        on_delete: Callback::noop()
      }
    )
    .hydratable(false)
    .render()
    .await
  }

  #[tokio::test]
  async fn empty_list_shows_empty_state() {
    let html =
      render(vec![], Locale::Ja).await;
    assert!(html.contains("タスクがありません"));
    assert!(!html.contains("task-list"));
  }

  #[tokio::test]
  async fn renders_one_row_per_task() {
    let mut done = Task::new(
      TaskId(2),
      "call mom".to_string(),
      Some(date(2026, 6, 1))
    );
    done.completed = true;
    let tasks = vec![
      Task::new(
        TaskId(1),
        "pay rent".to_string(),
        Some(date(2026, 6, 14))
      ),
      done,
      Task::new(
        TaskId(3),
        "someday".to_string(),
        None
      ),
    ];

    let html =
      render(tasks, Locale::En).await;
    assert!(!html.contains("No tasks"));
    assert_eq!(
      html.matches("<li").count(),
      3
    );
    assert!(html.contains("pay rent"));
    assert!(html.contains("task-text done"));
    assert_eq!(
      html.matches("⚠").count(),
      1
    );
    assert!(html.contains("Jun 14, 2026"));
    assert_eq!(
      html.matches("Delete").count(),
      3
    );
  }
}
