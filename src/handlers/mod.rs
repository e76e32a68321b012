use async_std::task;
use log::{debug, info};
use std::time::Duration;

use crate::context::Context;
use crate::http::Transport;
use crate::storage::Storage;
use crate::view::{Page, ProductForm, View};

pub mod auth;
pub mod products;

// Every user action the storefront reacts to. Card actions carry these so a click is just a
// dispatch of the bound command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  Register {
    email: String,
    password: String,
    confirm_password: String,
  },
  Login {
    email: String,
    password: String,
  },
  Logout,
  LoadProducts,
  ShowProductForm,
  CancelEdit,
  SaveProduct(ProductForm),
  EditProduct {
    id: i64,
  },
  DeleteProduct {
    id: i64,
  },
}

async fn navigate_after<T, S, V>(context: &Context<T, S, V>, page: Page, delay: Duration)
where
  S: Storage,
  V: View,
{
  if !delay.is_zero() {
    task::sleep(delay).await;
  }

  info!("navigating to '{}'", page);
  context.view().navigate(page);
}

impl<T, S, V> Context<T, S, V>
where
  T: Transport,
  S: Storage,
  V: View,
{
  // Runs once per page load: reconcile the session dependent regions and, on the catalog page,
  // render the catalog.
  pub async fn boot(&self, page: Page) {
    debug!("booting page '{}'", page);
    self.update_auth_ui().await;

    if page == Page::Products {
      products::load_products(self).await;
    }
  }

  pub async fn dispatch(&self, command: Command) {
    debug!("dispatching {:?}", command);

    match command {
      Command::Register {
        email,
        password,
        confirm_password,
      } => auth::register(self, &email, &password, &confirm_password).await,
      Command::Login { email, password } => auth::login(self, &email, &password).await,
      Command::Logout => auth::logout(self).await,
      Command::LoadProducts => products::load_products(self).await,
      Command::ShowProductForm => products::show_product_form(self),
      Command::CancelEdit => products::cancel_edit(self),
      Command::SaveProduct(form) => products::save_product(self, &form).await,
      Command::EditProduct { id } => products::edit_product(self, id).await,
      Command::DeleteProduct { id } => products::delete_product(self, id).await,
    }
  }
}
