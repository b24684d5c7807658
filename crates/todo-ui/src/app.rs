use todo_core::{
  AppConfig,
  Clock,
  JsonTaskStorage,
  Labels,
  SystemClock,
  TaskId,
  TaskStorage,
  TaskStore
};
use yew::{
  Callback,
  Html,
  Properties,
  UseStateHandle,
  function_component,
  html,
  use_state
};

use crate::components::{
  SummaryBar,
  TaskInput,
  TaskList
};
use crate::storage::BrowserBackend;

const APP_CONFIG_TOML: &str =
  include_str!("../assets/todo.toml");

type BrowserStore = TaskStore<
  JsonTaskStorage<BrowserBackend>,
  SystemClock
>;

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: AppConfig
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let labels = Labels::for_locale(
    props.config.locale
  );

  let store = {
    let key =
      props.config.storage_key.clone();
    use_state(move || {
      TaskStore::open(
        JsonTaskStorage::new(
          BrowserBackend,
          key
        ),
        SystemClock
      )
    })
  };

  let on_draft_text = {
    let store = store.clone();
    Callback::from(move |text: String| {
      update_store(&store, |next| {
        next.set_draft_text(text);
      });
    })
  };

  let on_draft_due_date = {
    let store = store.clone();
    Callback::from(move |raw: String| {
      update_store(&store, |next| {
        next.set_draft_due_date(raw);
      });
    })
  };

  let on_add = {
    let store = store.clone();
    Callback::from(move |()| {
      update_store(&store, |next| {
        next.add_task();
      });
    })
  };

  let on_key = {
    let store = store.clone();
    Callback::from(move |key: String| {
      if let Some(next) =
        submit_on_key(&*store, &key)
      {
        store.set(next);
      }
    })
  };

  let on_toggle = {
    let store = store.clone();
    Callback::from(move |id: TaskId| {
      update_store(&store, |next| {
        next.toggle_task(id);
      });
    })
  };

  let on_delete = {
    let store = store.clone();
    Callback::from(move |id: TaskId| {
      update_store(&store, |next| {
        next.delete_task(id);
      });
    })
  };

  html! {
      <div class="page">
          <main class="todo">
              <h1 class="title">{ labels.title }</h1>
              <TaskInput
                  draft_text={store.draft_text().to_string()}
                  draft_due_date={store.draft_due_date().to_string()}
                  labels={labels.clone()}
                  on_draft_text={on_draft_text}
                  on_draft_due_date={on_draft_due_date}
                  on_add={on_add}
                  on_key={on_key}
              />
              <TaskList
                  tasks={store.tasks().to_vec()}
                  today={store.today()}
                  labels={labels.clone()}
                  on_toggle={on_toggle}
                  on_delete={on_delete}
              />
              <SummaryBar summary={store.summary()} labels={labels} />
          </main>
      </div>
  }
}

/// Applies one operation to a copy
/// of the store and commits it, which
/// triggers the next render.
fn update_store(
  store: &UseStateHandle<BrowserStore>,
  apply: impl FnOnce(&mut BrowserStore)
) {
  let mut next = (**store).clone();
  apply(&mut next);
  store.set(next);
}

/// Keydown in the text field. Only a
/// key that actually adds a task
/// yields a new store to commit.
fn submit_on_key<S, C>(
  current: &TaskStore<S, C>,
  key: &str
) -> Option<TaskStore<S, C>>
where
  S: TaskStorage + Clone,
  C: Clock + Clone
{
  let mut next = current.clone();
  next.handle_key(key).map(|_| next)
}

pub fn load_app_config() -> AppConfig {
  match AppConfig::from_toml_str(
    APP_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::debug!(
        "loaded bundled app config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed to parse app config; \
         using defaults"
      );
      AppConfig::default()
    }
  }
}
