extern crate http;

pub use http::header;
pub use http::{Method, Request, Response, StatusCode};
pub use url::Url;

use async_std::io::ReadExt;
use isahc::HttpClient;
use log::debug;
use std::io::Result;

use crate::errors;

// The seam between the storefront and the network. Implementations hand back the full response
// regardless of status; deciding what a status means is left to the caller.
pub trait Transport {
  async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>>;
}

pub struct IsahcTransport {
  _client: HttpClient,
}

impl std::fmt::Debug for IsahcTransport {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "IsahcTransport")
  }
}

impl IsahcTransport {
  pub fn open() -> Result<Self> {
    let client = HttpClient::new().map_err(errors::humanize_error)?;
    Ok(IsahcTransport { _client: client })
  }
}

impl Transport for IsahcTransport {
  async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>> {
    let (method, uri) = (request.method().clone(), request.uri().clone());
    let response = self
      ._client
      .send_async(request)
      .await
      .map_err(errors::humanize_error)?;

    let (parts, mut body) = response.into_parts();
    let mut bytes = Vec::new();
    body.read_to_end(&mut bytes).await?;

    debug!(
      "{} {} -> {} ({} bytes)",
      method,
      uri,
      parts.status,
      bytes.len()
    );

    Ok(Response::from_parts(parts, bytes))
  }
}
