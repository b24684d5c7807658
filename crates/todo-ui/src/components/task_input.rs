use todo_core::Labels;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskInputProps {
  pub draft_text:        String,
  pub draft_due_date:    String,
  pub labels:            Labels,
  pub on_draft_text:     Callback<String>,
  pub on_draft_due_date: Callback<String>,
  pub on_add:            Callback<()>,
  pub on_key:            Callback<String>
}

#[function_component(TaskInput)]
pub fn task_input(
  props: &TaskInputProps
) -> Html {
  let on_text_input = {
    let on_draft_text =
      props.on_draft_text.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_draft_text.emit(input.value());
      }
    )
  };

  let on_date_change = {
    let on_draft_due_date =
      props.on_draft_due_date.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_draft_due_date
          .emit(input.value());
      }
    )
  };

  let on_keydown = {
    let on_key = props.on_key.clone();
    Callback::from(
      move |e: web_sys::KeyboardEvent| {
        on_key.emit(e.key());
      }
    )
  };

  let on_add = props.on_add.clone();

  html! {
      <div class="composer">
          <div class="composer-row">
              <input
                  type="text"
                  class="text-input"
                  value={props.draft_text.clone()}
                  placeholder={props.labels.placeholder}
                  oninput={on_text_input}
                  onkeydown={on_keydown}
              />
              <button class="add-button" onclick={move |_| on_add.emit(())}>
                  { props.labels.add }
              </button>
          </div>
          <div class="composer-row">
              <label class="due-caption">{ props.labels.due }</label>
              <input
                  type="date"
                  class="date-input"
                  value={props.draft_due_date.clone()}
                  onchange={on_date_change}
              />
          </div>
      </div>
  }
}
