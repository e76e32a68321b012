use async_std::sync::Arc;
use std::io::Result;

use crate::messages::MessageBoard;
use crate::session::{Session, SessionStore};
use crate::storage::Storage;
use crate::view::{AuthUi, Message, View};
use crate::{errors, Configuration};

// Everything a handler may touch: configuration, the backend transport, the session store and
// the view. Handlers take a context instead of reaching for module state.
pub struct Context<T, S, V> {
  _config: Configuration,
  _transport: T,
  _session: SessionStore<S>,
  _view: Arc<V>,
  _messages: MessageBoard<V>,
}

impl<T, S, V> Context<T, S, V>
where
  S: Storage,
  V: View,
{
  pub fn builder() -> ContextBuilder<T, S, V> {
    ContextBuilder::default()
  }

  pub fn config(&self) -> &Configuration {
    &self._config
  }

  pub fn api_base(&self) -> &str {
    self._config.api_base.as_str()
  }

  pub fn transport(&self) -> &T {
    &self._transport
  }

  pub fn session(&self) -> &SessionStore<S> {
    &self._session
  }

  pub async fn current_session(&self) -> Option<Session> {
    self._session.current().await
  }

  pub fn view(&self) -> &V {
    &self._view
  }

  pub fn notify(&self, message: Message) {
    self._messages.show(message)
  }

  pub async fn update_auth_ui(&self) {
    let session = self.current_session().await;
    self._view.apply_auth(&AuthUi::from_session(session.as_ref()));
  }
}

impl<T, S, V> std::fmt::Debug for Context<T, S, V> {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "Context<api:{}>", &self._config.api_base)
  }
}

pub struct ContextBuilder<T, S, V> {
  _config: Option<Configuration>,
  _transport: Option<T>,
  _storage: Option<S>,
  _view: Option<Arc<V>>,
}

impl<T, S, V> Default for ContextBuilder<T, S, V> {
  fn default() -> Self {
    ContextBuilder {
      _config: None,
      _transport: None,
      _storage: None,
      _view: None,
    }
  }
}

impl<T, S, V> ContextBuilder<T, S, V>
where
  S: Storage,
  V: View,
{
  pub fn configuration(self, config: &Configuration) -> Self {
    ContextBuilder {
      _config: Some(config.clone()),
      ..self
    }
  }

  pub fn transport(self, transport: T) -> Self {
    ContextBuilder {
      _transport: Some(transport),
      ..self
    }
  }

  pub fn storage(self, storage: S) -> Self {
    ContextBuilder {
      _storage: Some(storage),
      ..self
    }
  }

  pub fn view(self, view: Arc<V>) -> Self {
    ContextBuilder {
      _view: Some(view),
      ..self
    }
  }

  // Restores the persisted session as part of building; this is the "page load".
  pub fn build(self) -> Result<Context<T, S, V>> {
    let _config = self
      ._config
      .ok_or(errors::e("missing configuration from context"))?;

    let _transport = self
      ._transport
      .ok_or(errors::e("missing transport for context"))?;

    let storage = self
      ._storage
      .ok_or(errors::e("missing storage for context"))?;

    let _view = self._view.ok_or(errors::e("missing view for context"))?;
    let _messages = MessageBoard::new(_view.clone(), _config.timings.message());

    Ok(Context {
      _session: SessionStore::open(storage),
      _config,
      _transport,
      _view,
      _messages,
    })
  }
}

#[cfg(test)]
mod test {
  use super::Context;
  use crate::storage::MemoryStorage;
  use crate::test_helpers::{FakeTransport, RecordingView};
  use crate::Configuration;
  use async_std::sync::Arc;

  #[test]
  fn build_requires_every_part() {
    let result = Context::<FakeTransport, MemoryStorage, RecordingView>::builder()
      .configuration(&Configuration::default())
      .storage(MemoryStorage::default())
      .view(Arc::new(RecordingView::default()))
      .build();
    assert!(result.is_err());
  }

  #[test]
  fn build_restores_session() {
    let storage = MemoryStorage::with_entry(
      "currentUser",
      r#"{"email":"a@b.com","token":"T1","is_admin":false}"#,
    );
    let context = Context::builder()
      .configuration(&Configuration::default())
      .transport(FakeTransport::default())
      .storage(storage)
      .view(Arc::new(RecordingView::default()))
      .build()
      .expect("unable to build");

    let session = async_std::task::block_on(context.current_session());
    assert_eq!(session.map(|s| s.email), Some("a@b.com".to_string()));
  }
}
