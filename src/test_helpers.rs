use async_std::sync::Arc;
use std::collections::VecDeque;
use std::io::Result;
use std::sync::Mutex;

use crate::configuration::test_helpers::load_test_config;
use crate::context::Context;
use crate::errors;
use crate::http::{header, Method, Request, Response, Transport};
use crate::interchange::http::Product;
use crate::storage::{MemoryStorage, Storage};
use crate::view::{AuthUi, Card, Message, Page, ProductForm, View};
use crate::IsahcTransport;

pub const TEST_BASE: &'static str = "http://backend.test";

#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
  pub method: Method,
  pub uri: String,
  pub authorization: Option<String>,
  pub content_type: Option<String>,
  pub body: Vec<u8>,
}

impl SentRequest {
  pub fn json(&self) -> serde_json::Value {
    serde_json::from_slice(&self.body).expect("request body was not json")
  }
}

#[derive(Default)]
struct Script {
  responses: VecDeque<Result<Response<Vec<u8>>>>,
  sent: Vec<SentRequest>,
}

// Replays scripted responses in order and remembers every request it was handed.
#[derive(Clone, Default)]
pub struct FakeTransport {
  _script: Arc<Mutex<Script>>,
}

fn header_value(request: &Request<Vec<u8>>, name: header::HeaderName) -> Option<String> {
  request
    .headers()
    .get(name)
    .and_then(|value| value.to_str().ok())
    .map(String::from)
}

impl FakeTransport {
  pub fn respond(&self, status: u16, body: &str) {
    let response = Response::builder()
      .status(status)
      .header(header::CONTENT_TYPE, "application/json")
      .body(body.as_bytes().to_vec())
      .expect("unable to build scripted response");
    let mut script = self._script.lock().expect("poisoned script");
    script.responses.push_back(Ok(response));
  }

  pub fn fail(&self, message: &str) {
    let mut script = self._script.lock().expect("poisoned script");
    script.responses.push_back(Err(errors::e(message)));
  }

  pub fn sent(&self) -> Vec<SentRequest> {
    self._script.lock().expect("poisoned script").sent.clone()
  }
}

impl Transport for FakeTransport {
  async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>> {
    let sent = SentRequest {
      method: request.method().clone(),
      uri: request.uri().to_string(),
      authorization: header_value(&request, header::AUTHORIZATION),
      content_type: header_value(&request, header::CONTENT_TYPE),
      body: request.body().clone(),
    };

    let mut script = self._script.lock().expect("poisoned script");
    script.sent.push(sent);
    script
      .responses
      .pop_front()
      .unwrap_or_else(|| Err(errors::e("no scripted response")))
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
  Auth(AuthUi),
  Message(Message),
  HideMessage,
  Catalog(Vec<Card>),
  AdminPanel(bool),
  Form(ProductForm),
  ResetForm,
  Confirm(String),
  Navigate(Page),
}

#[derive(Debug, Default)]
pub struct RecordingView {
  _events: Mutex<Vec<ViewEvent>>,
  _confirm: Mutex<bool>,
}

impl RecordingView {
  fn record(&self, event: ViewEvent) {
    self._events.lock().expect("poisoned view").push(event);
  }

  pub fn answer_confirmations(&self, answer: bool) {
    *self._confirm.lock().expect("poisoned view") = answer;
  }

  pub fn events(&self) -> Vec<ViewEvent> {
    self
      ._events
      .lock()
      .expect("poisoned view")
      .iter()
      .filter(|event| **event != ViewEvent::HideMessage)
      .cloned()
      .collect()
  }

  pub fn all_events(&self) -> Vec<ViewEvent> {
    self._events.lock().expect("poisoned view").clone()
  }

  pub fn count<F: Fn(&ViewEvent) -> bool>(&self, predicate: F) -> usize {
    self.all_events().iter().filter(|e| predicate(e)).count()
  }

  pub fn messages(&self) -> Vec<Message> {
    self
      .events()
      .into_iter()
      .filter_map(|event| match event {
        ViewEvent::Message(message) => Some(message),
        _ => None,
      })
      .collect()
  }

  pub fn navigations(&self) -> Vec<Page> {
    self
      .events()
      .into_iter()
      .filter_map(|event| match event {
        ViewEvent::Navigate(page) => Some(page),
        _ => None,
      })
      .collect()
  }

  pub fn last_catalog(&self) -> Option<Vec<Card>> {
    self.events().into_iter().rev().find_map(|event| match event {
      ViewEvent::Catalog(cards) => Some(cards),
      _ => None,
    })
  }

  pub fn last_form(&self) -> Option<ProductForm> {
    self.events().into_iter().rev().find_map(|event| match event {
      ViewEvent::Form(form) => Some(form),
      _ => None,
    })
  }

  pub fn last_auth(&self) -> Option<AuthUi> {
    self.events().into_iter().rev().find_map(|event| match event {
      ViewEvent::Auth(ui) => Some(ui),
      _ => None,
    })
  }
}

impl View for RecordingView {
  fn apply_auth(&self, ui: &AuthUi) {
    self.record(ViewEvent::Auth(ui.clone()));
  }

  fn show_message(&self, message: &Message) {
    self.record(ViewEvent::Message(message.clone()));
  }

  fn hide_message(&self) {
    self.record(ViewEvent::HideMessage);
  }

  fn render_catalog(&self, cards: &[Card]) {
    self.record(ViewEvent::Catalog(cards.to_vec()));
  }

  fn set_admin_panel(&self, visible: bool) {
    self.record(ViewEvent::AdminPanel(visible));
  }

  fn fill_form(&self, form: &ProductForm) {
    self.record(ViewEvent::Form(form.clone()));
  }

  fn reset_form(&self) {
    self.record(ViewEvent::ResetForm);
  }

  fn confirm(&self, prompt: &str) -> bool {
    self.record(ViewEvent::Confirm(prompt.to_string()));
    *self._confirm.lock().expect("poisoned view")
  }

  fn navigate(&self, page: Page) {
    self.record(ViewEvent::Navigate(page));
  }
}

pub fn product(id: i64, name: &str) -> Product {
  Product {
    id,
    name: name.to_string(),
    description: format!("{} description", name),
    price: 9.5,
    stock: 4,
    created_at: None,
    updated_at: None,
  }
}

pub fn admin_storage() -> MemoryStorage {
  MemoryStorage::with_entry(
    "currentUser",
    r#"{"email":"a@b.com","token":"T1","is_admin":true}"#,
  )
}

pub fn customer_storage() -> MemoryStorage {
  MemoryStorage::with_entry(
    "currentUser",
    r#"{"email":"c@d.com","token":"T2","is_admin":false}"#,
  )
}

// Reads every key back but refuses every write.
#[derive(Debug, Default)]
pub struct ReadOnlyStorage {
  _inner: MemoryStorage,
}

impl Storage for ReadOnlyStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    self._inner.get(key)
  }

  fn set(&self, _key: &str, _value: &str) -> Result<()> {
    Err(errors::e("read-only file system"))
  }

  fn remove(&self, _key: &str) -> Result<()> {
    Err(errors::e("read-only file system"))
  }
}

pub fn context_with<S: Storage>(
  storage: S,
) -> (
  Context<FakeTransport, S, RecordingView>,
  FakeTransport,
  Arc<RecordingView>,
) {
  let transport = FakeTransport::default();
  let view = Arc::new(RecordingView::default());
  let context = Context::builder()
    .configuration(&load_test_config(TEST_BASE))
    .transport(transport.clone())
    .storage(storage)
    .view(view.clone())
    .build()
    .expect("unable to build test context");
  (context, transport, view)
}

pub fn live_context(
  api_base: &str,
  storage: MemoryStorage,
) -> (
  Context<IsahcTransport, MemoryStorage, RecordingView>,
  Arc<RecordingView>,
) {
  let view = Arc::new(RecordingView::default());
  let context = Context::builder()
    .configuration(&load_test_config(api_base))
    .transport(IsahcTransport::open().expect("unable to build client"))
    .storage(storage)
    .view(view.clone())
    .build()
    .expect("unable to build test context");
  (context, view)
}
