use chrono::NaiveDateTime;

use crate::handlers::Command;
use crate::session::{is_admin, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
  Landing,
  Login,
  Register,
  Products,
}

impl std::fmt::Display for Page {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    let name = match self {
      Page::Landing => "index",
      Page::Login => "login",
      Page::Register => "register",
      Page::Products => "products",
    };
    write!(formatter, "{}", name)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  Success,
  Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
  pub text: String,
  pub level: Level,
}

impl Message {
  pub fn success<S: Into<String>>(text: S) -> Self {
    Message {
      text: text.into(),
      level: Level::Success,
    }
  }

  pub fn error<S: Into<String>>(text: S) -> Self {
    Message {
      text: text.into(),
      level: Level::Error,
    }
  }
}

// Visibility of the four session-dependent regions of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUi {
  pub guest_links: bool,
  pub user_links: bool,
  pub user_email: Option<String>,
  pub add_product: bool,
}

impl AuthUi {
  pub fn from_session(session: Option<&Session>) -> Self {
    AuthUi {
      guest_links: session.is_none(),
      user_links: session.is_some(),
      user_email: session.map(|s| s.email.clone()),
      add_product: is_admin(session),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardActions {
  pub edit: Command,
  pub delete: Command,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
  pub id: i64,
  pub name: String,
  pub description: String,
  pub price: String,
  pub stock: String,
  pub updated: Option<NaiveDateTime>,
  pub actions: Option<CardActions>,
}

// Text state of the product edit form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
  pub id: Option<i64>,
  pub name: String,
  pub description: String,
  pub price: String,
  pub stock: String,
}

// Everything the controller is allowed to do to the screen. Implementations are shared with
// detached timer tasks, hence the thread-safety bounds.
pub trait View: Send + Sync + 'static {
  fn apply_auth(&self, ui: &AuthUi);
  fn show_message(&self, message: &Message);
  fn hide_message(&self);
  fn render_catalog(&self, cards: &[Card]);
  fn set_admin_panel(&self, visible: bool);
  fn fill_form(&self, form: &ProductForm);
  fn reset_form(&self);
  fn confirm(&self, prompt: &str) -> bool;
  fn navigate(&self, page: Page);
}
