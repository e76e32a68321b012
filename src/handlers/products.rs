use log::{debug, info, warn};

use crate::constants::{
  ADMIN_REQUIRED, DELETE_CONFIRMATION, DELETE_FALLBACK, DELETE_SUCCESS, LOAD_PRODUCTS_FAILED,
  LOAD_PRODUCT_FAILED, PRODUCT_CREATED, PRODUCT_UPDATED, SAVE_FALLBACK,
};
use crate::context::Context;
use crate::http::Transport;
use crate::session::is_admin;
use crate::storage::Storage;
use crate::view::{Message, ProductForm, View};
use crate::{api, catalog};

pub async fn load_products<T, S, V>(context: &Context<T, S, V>)
where
  T: Transport,
  S: Storage,
  V: View,
{
  let products = match api::products(context.transport(), context.api_base()).await {
    Ok(products) => products,
    Err(failure) => {
      warn!("unable to load catalog - {}", failure);
      context.notify(Message::error(failure.describe_load(LOAD_PRODUCTS_FAILED)));
      return;
    }
  };

  let session = context.current_session().await;
  let cards = catalog::render(&products, session.as_ref());
  debug!("rendering {} catalog cards", cards.len());
  context.view().render_catalog(&cards);
}

pub fn show_product_form<T, S, V>(context: &Context<T, S, V>)
where
  S: Storage,
  V: View,
{
  context.view().set_admin_panel(true);
  context.view().reset_form();
}

pub fn cancel_edit<T, S, V>(context: &Context<T, S, V>)
where
  S: Storage,
  V: View,
{
  context.view().set_admin_panel(false);
  context.view().reset_form();
}

pub async fn save_product<T, S, V>(context: &Context<T, S, V>, form: &ProductForm)
where
  T: Transport,
  S: Storage,
  V: View,
{
  let session = context.current_session().await;

  if !is_admin(session.as_ref()) {
    context.notify(Message::error(ADMIN_REQUIRED));
    return;
  }

  let payload = match form.payload() {
    Ok(payload) => payload,
    Err(failure) => {
      context.notify(Message::error(failure.describe(SAVE_FALLBACK)));
      return;
    }
  };

  let (transport, base) = (context.transport(), context.api_base());
  let result = match form.id {
    Some(id) => api::update_product(transport, base, session.as_ref(), id, &payload)
      .await
      .map(|_| PRODUCT_UPDATED),
    None => api::create_product(transport, base, session.as_ref(), &payload)
      .await
      .map(|_| PRODUCT_CREATED),
  };

  match result {
    Ok(text) => {
      info!("saved product '{}' ({:?})", payload.name, form.id);
      context.notify(Message::success(text));
      cancel_edit(context);
      load_products(context).await;
    }
    Err(failure) => {
      warn!("unable to save product {:?} - {}", form.id, failure);
      context.notify(Message::error(failure.describe(SAVE_FALLBACK)));
    }
  }
}

// There is no single product endpoint; the whole collection is fetched and searched. An id that
// isn't in the collection leaves the form untouched.
pub async fn edit_product<T, S, V>(context: &Context<T, S, V>, id: i64)
where
  T: Transport,
  S: Storage,
  V: View,
{
  let products = match api::products(context.transport(), context.api_base()).await {
    Ok(products) => products,
    Err(failure) => {
      warn!("unable to load product {} - {}", id, failure);
      context.notify(Message::error(failure.describe_load(LOAD_PRODUCT_FAILED)));
      return;
    }
  };

  match products.iter().find(|product| product.id == id) {
    Some(product) => {
      context.view().set_admin_panel(true);
      context.view().fill_form(&ProductForm::from(product));
    }
    None => warn!("product {} not found in catalog, leaving form as-is", id),
  }
}

pub async fn delete_product<T, S, V>(context: &Context<T, S, V>, id: i64)
where
  T: Transport,
  S: Storage,
  V: View,
{
  if !context.view().confirm(DELETE_CONFIRMATION) {
    debug!("delete of product {} declined", id);
    return;
  }

  let session = context.current_session().await;
  let result =
    api::delete_product(context.transport(), context.api_base(), session.as_ref(), id).await;

  match result {
    Ok(()) => {
      info!("deleted product {}", id);
      context.notify(Message::success(DELETE_SUCCESS));
      load_products(context).await;
    }
    Err(failure) => {
      warn!("unable to delete product {} - {}", id, failure);
      context.notify(Message::error(failure.describe(DELETE_FALLBACK)));
    }
  }
}
