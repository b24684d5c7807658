use todo_core::{
  KeyValueBackend,
  StorageError
};

/// `window.localStorage` of the
/// current browsing context.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct BrowserBackend;

impl BrowserBackend {
  fn storage()
  -> Result<web_sys::Storage, StorageError>
  {
    web_sys::window()
      .ok_or_else(|| {
        StorageError::Unavailable(
          "no window".to_string()
        )
      })?
      .local_storage()
      .map_err(|error| {
        StorageError::Unavailable(
          format!("{error:?}")
        )
      })?
      .ok_or_else(|| {
        StorageError::Unavailable(
          "local storage disabled"
            .to_string()
        )
      })
  }
}

impl KeyValueBackend for BrowserBackend {
  fn get_item(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError>
  {
    Self::storage()?
      .get_item(key)
      .map_err(|error| {
        StorageError::Read {
          key:     key.to_string(),
          message: format!("{error:?}")
        }
      })
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError> {
    Self::storage()?
      .set_item(key, value)
      .map_err(|error| {
        StorageError::Write {
          key:     key.to_string(),
          message: format!("{error:?}")
        }
      })
  }
}
