use todo_core::{
  Labels,
  Summary
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SummaryBarProps {
  pub summary: Summary,
  pub labels:  Labels
}

#[function_component(SummaryBar)]
pub fn summary_bar(
  props: &SummaryBarProps
) -> Html {
  if props.summary.is_empty() {
    return html! {};
  }

  html! {
      <div class="summary">
          { props.labels.completion_line(&props.summary) }
          {
              if let Some(note) = props.labels.overdue_note(&props.summary) {
                  html! { <span class="summary-overdue">{ note }</span> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
