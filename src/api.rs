use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::{endpoint_url, product_url, LOGIN_PATH, PRODUCTS_PATH, REGISTER_PATH};
use crate::errors::Failure;
use crate::http::{header, Method, Request, Response, Transport, Url};
use crate::interchange::http::{
  Credentials, ErrorPayload, Product, ProductPayload, RegisteredUser, TokenPayload,
};
use crate::session::Session;

fn parse_url(raw: String) -> Result<Url, Failure> {
  Url::parse(&raw).map_err(|e| Failure::transport(format!("invalid url '{}' - {}", raw, e)))
}

// Builds a json request, attaching the bearer token only when a session was handed in.
fn build<B: Serialize>(
  method: Method,
  url: String,
  body: Option<&B>,
  session: Option<&Session>,
) -> Result<Request<Vec<u8>>, Failure> {
  let url = parse_url(url)?;
  let mut builder = Request::builder().method(method).uri(url.as_str());

  if let Some(session) = session {
    builder = builder.header(header::AUTHORIZATION, session.bearer());
  }

  let bytes = match body {
    Some(body) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      serde_json::to_vec(body).map_err(Failure::transport)?
    }
    None => Vec::new(),
  };

  builder.body(bytes).map_err(Failure::transport)
}

// Sends the request, turning any non-2xx response into a rejection that carries the backend's
// `detail` when one could be read.
async fn execute<T: Transport>(
  transport: &T,
  request: Request<Vec<u8>>,
) -> Result<Response<Vec<u8>>, Failure> {
  let (method, uri) = (request.method().clone(), request.uri().clone());
  let response = transport.send(request).await.map_err(|e| {
    warn!("{} {} never completed - {}", method, uri, e);
    Failure::transport(e)
  })?;

  if response.status().is_success() {
    return Ok(response);
  }

  let detail = serde_json::from_slice::<ErrorPayload>(response.body())
    .ok()
    .and_then(|payload| payload.message());

  info!(
    "{} {} rejected with {} ({:?})",
    method,
    uri,
    response.status(),
    detail
  );

  Err(Failure::Rejected {
    status: response.status(),
    detail,
  })
}

fn decode<D: DeserializeOwned>(response: &Response<Vec<u8>>) -> Result<D, Failure> {
  serde_json::from_slice(response.body())
    .map_err(|e| Failure::transport(format!("unable to parse response body: {}", e)))
}

pub async fn register<T: Transport>(
  transport: &T,
  base: &str,
  credentials: &Credentials,
) -> Result<Option<RegisteredUser>, Failure> {
  let request = build(
    Method::POST,
    endpoint_url(base, REGISTER_PATH),
    Some(credentials),
    None,
  )?;
  let response = execute(transport, request).await?;

  // The created user is informational only; an unexpected body doesn't undo the registration.
  let user = decode::<RegisteredUser>(&response).ok();
  debug!("registered user - {:?}", user);
  Ok(user)
}

pub async fn login<T: Transport>(
  transport: &T,
  base: &str,
  credentials: &Credentials,
) -> Result<TokenPayload, Failure> {
  let request = build(
    Method::POST,
    endpoint_url(base, LOGIN_PATH),
    Some(credentials),
    None,
  )?;
  let response = execute(transport, request).await?;
  decode(&response)
}

pub async fn products<T: Transport>(transport: &T, base: &str) -> Result<Vec<Product>, Failure> {
  let request = build::<()>(Method::GET, endpoint_url(base, PRODUCTS_PATH), None, None)?;
  let response = execute(transport, request).await?;
  let products = decode::<Vec<Product>>(&response)?;
  debug!("loaded {} products", products.len());
  Ok(products)
}

pub async fn create_product<T: Transport>(
  transport: &T,
  base: &str,
  session: Option<&Session>,
  payload: &ProductPayload,
) -> Result<Option<Product>, Failure> {
  let request = build(
    Method::POST,
    endpoint_url(base, PRODUCTS_PATH),
    Some(payload),
    session,
  )?;
  let response = execute(transport, request).await?;
  Ok(decode(&response).ok())
}

pub async fn update_product<T: Transport>(
  transport: &T,
  base: &str,
  session: Option<&Session>,
  id: i64,
  payload: &ProductPayload,
) -> Result<Option<Product>, Failure> {
  let request = build(Method::PUT, product_url(base, id), Some(payload), session)?;
  let response = execute(transport, request).await?;
  Ok(decode(&response).ok())
}

pub async fn delete_product<T: Transport>(
  transport: &T,
  base: &str,
  session: Option<&Session>,
  id: i64,
) -> Result<(), Failure> {
  let request = build::<()>(Method::DELETE, product_url(base, id), None, session)?;
  execute(transport, request).await?;
  Ok(())
}
