use chrono::NaiveDate;
use todo_core::{
  Labels,
  Task,
  TaskId,
  format_date
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:      Task,
  pub today:     NaiveDate,
  pub labels:    Labels,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.task.id;
  let overdue =
    props.task.shows_overdue(props.today);
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  let text_class =
    if props.task.completed {
      "task-text done"
    } else {
      "task-text"
    };

  html! {
      <li class={classes!("task-row", overdue.then_some("overdue"))}>
          <input
              type="checkbox"
              class="task-check"
              checked={props.task.completed}
              onchange={move |_| on_toggle.emit(id)}
          />
          <div class="task-body">
              <span class={text_class}>{ &props.task.text }</span>
              {
                  match due_label_text(&props.task, props.today, &props.labels) {
                      | Some(text) => html! {
                          <span class={due_label_class(&props.task, props.today)}>{ text }</span>
                      },
                      | None => html! {}
                  }
              }
          </div>
          <button class="delete-button" onclick={move |_| on_delete.emit(id)}>
              { props.labels.delete }
          </button>
      </li>
  }
}

fn due_label_class(
  task: &Task,
  today: NaiveDate
) -> &'static str {
  if task.completed {
    "due due-done"
  } else if task.shows_overdue(today) {
    "due due-overdue"
  } else {
    "due due-upcoming"
  }
}

/// `⚠ Due: Dec 31, 2026`; the marker
/// only for overdue incomplete tasks.
fn due_label_text(
  task: &Task,
  today: NaiveDate,
  labels: &Labels
) -> Option<String> {
  let due = task.due_date?;
  let marker =
    if task.shows_overdue(today) {
      labels.overdue_marker
    } else {
      ""
    };
  Some(format!(
    "{marker}{} {}",
    labels.due,
    format_date(due, labels.locale)
  ))
}
