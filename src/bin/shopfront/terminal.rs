use log::debug;
use std::io::{stdin, stdout, BufRead, Write};

use shopfront::{AuthUi, Card, Level, Message, Page, ProductForm, View};

// Renders the storefront as plain text on stdout. Hiding a message has nothing to undo on a
// terminal, so it only shows up in the debug log.
#[derive(Debug, Default)]
pub struct TerminalView {
  pub assume_yes: bool,
}

impl View for TerminalView {
  fn apply_auth(&self, ui: &AuthUi) {
    match &ui.user_email {
      Some(email) if ui.add_product => println!("signed in as {} (admin)", email),
      Some(email) => println!("signed in as {}", email),
      None => println!("not signed in - use `login` or `register`"),
    }
  }

  fn show_message(&self, message: &Message) {
    match message.level {
      Level::Success => println!("[ok] {}", message.text),
      Level::Error => eprintln!("[error] {}", message.text),
    }
  }

  fn hide_message(&self) {
    debug!("message region hidden");
  }

  fn render_catalog(&self, cards: &[Card]) {
    if cards.is_empty() {
      println!("no products");
      return;
    }

    for card in cards {
      println!("#{} {}", card.id, card.name);

      if !card.description.is_empty() {
        println!("    {}", card.description);
      }

      println!("    {} | {}", card.price, card.stock);

      if let Some(updated) = &card.updated {
        println!("    updated {}", updated.format("%Y-%m-%d %H:%M"));
      }

      if card.actions.is_some() {
        println!("    edit: `edit -i {}`  delete: `delete -i {}`", card.id, card.id);
      }
    }
  }

  fn set_admin_panel(&self, visible: bool) {
    debug!("admin panel visible: {}", visible);
  }

  fn fill_form(&self, form: &ProductForm) {
    let id = form.id.map(|id| id.to_string()).unwrap_or_default();
    println!("id:          {}", id);
    println!("name:        {}", form.name);
    println!("description: {}", form.description);
    println!("price:       {}", form.price);
    println!("stock:       {}", form.stock);
  }

  fn reset_form(&self) {
    debug!("product form reset");
  }

  fn confirm(&self, prompt: &str) -> bool {
    if self.assume_yes {
      return true;
    }

    print!("{} [y/N] ", prompt);

    if stdout().flush().is_err() {
      return false;
    }

    let mut answer = String::new();
    match stdin().lock().read_line(&mut answer) {
      Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
      Err(_) => false,
    }
  }

  fn navigate(&self, page: Page) {
    match page {
      Page::Products => println!("next: `shopfront products`"),
      Page::Login => println!("next: `shopfront login`"),
      Page::Register => println!("next: `shopfront register`"),
      Page::Landing => println!("signed out"),
    }
  }
}
