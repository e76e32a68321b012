use log::{info, warn};

use crate::api;
use crate::constants::{
  LOGIN_FALLBACK, LOGIN_SUCCESS, PASSWORD_MISMATCH, REGISTER_FALLBACK, REGISTER_SUCCESS,
};
use crate::context::Context;
use crate::errors::Failure;
use crate::handlers::navigate_after;
use crate::http::Transport;
use crate::interchange::http::Credentials;
use crate::session::Session;
use crate::storage::Storage;
use crate::view::{Message, Page, View};

fn credentials(email: &str, password: &str) -> Credentials {
  Credentials {
    email: email.to_string(),
    password: password.to_string(),
  }
}

pub async fn register<T, S, V>(
  context: &Context<T, S, V>,
  email: &str,
  password: &str,
  confirm_password: &str,
) where
  T: Transport,
  S: Storage,
  V: View,
{
  if password != confirm_password {
    context.notify(Message::error(PASSWORD_MISMATCH));
    return;
  }

  let result = api::register(
    context.transport(),
    context.api_base(),
    &credentials(email, password),
  )
  .await;

  match result {
    Ok(_) => {
      info!("registration accepted for '{}'", email);
      context.notify(Message::success(REGISTER_SUCCESS));
      navigate_after(
        context,
        Page::Login,
        context.config().timings.register_redirect(),
      )
      .await;
    }
    Err(failure) => {
      warn!("registration failed for '{}' - {}", email, failure);
      context.notify(Message::error(failure.describe(REGISTER_FALLBACK)));
    }
  }
}

async fn attempt_login<T, S, V>(
  context: &Context<T, S, V>,
  email: &str,
  password: &str,
) -> Result<Session, Failure>
where
  T: Transport,
  S: Storage,
  V: View,
{
  let token = api::login(
    context.transport(),
    context.api_base(),
    &credentials(email, password),
  )
  .await?;

  let session = Session {
    email: email.to_string(),
    token: token.access_token,
    is_admin: token.is_admin,
  };

  context
    .session()
    .set(session.clone())
    .await
    .map_err(|e| Failure::transport(format!("unable to save session: {}", e)))?;

  Ok(session)
}

pub async fn login<T, S, V>(context: &Context<T, S, V>, email: &str, password: &str)
where
  T: Transport,
  S: Storage,
  V: View,
{
  match attempt_login(context, email, password).await {
    Ok(session) => {
      info!("logged in as '{}' (admin: {})", session.email, session.is_admin);
      context.update_auth_ui().await;
      context.notify(Message::success(LOGIN_SUCCESS));
      navigate_after(
        context,
        Page::Products,
        context.config().timings.login_redirect(),
      )
      .await;
    }
    Err(failure) => {
      warn!("login failed for '{}' - {}", email, failure);
      context.notify(Message::error(failure.describe(LOGIN_FALLBACK)));
    }
  }
}

pub async fn logout<T, S, V>(context: &Context<T, S, V>)
where
  T: Transport,
  S: Storage,
  V: View,
{
  if let Err(e) = context.session().clear().await {
    warn!("unable to remove persisted session - {}", e);
  }

  context.update_auth_ui().await;
  context.view().navigate(Page::Landing);
}
