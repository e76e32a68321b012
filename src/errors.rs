use std::io::{Error, ErrorKind};

use crate::constants::NETWORK_ERROR;
use crate::http::StatusCode;

pub fn humanize_error<E: std::error::Error>(e: E) -> Error {
  Error::new(ErrorKind::Other, format!("{}", e))
}

pub fn e<S: std::fmt::Display>(message: S) -> Error {
  Error::new(ErrorKind::Other, format!("{}", message))
}

// Every way a storefront operation can fail. Validation failures never reach the network; the
// other two are the backend saying no and the transport never getting an answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
  Validation(String),
  Rejected {
    status: StatusCode,
    detail: Option<String>,
  },
  Transport(String),
}

impl Failure {
  pub fn validation<S: std::fmt::Display>(message: S) -> Self {
    Failure::Validation(format!("{}", message))
  }

  pub fn transport<S: std::fmt::Display>(message: S) -> Self {
    Failure::Transport(format!("{}", message))
  }

  // The text shown in the message region for a failed operation; `fallback` is used when the
  // backend rejected the request without saying why.
  pub fn describe(&self, fallback: &str) -> String {
    match self {
      Failure::Validation(message) => message.clone(),
      Failure::Rejected {
        detail: Some(detail),
        ..
      } => detail.clone(),
      Failure::Rejected { detail: None, .. } => fallback.to_string(),
      Failure::Transport(message) => format!("{}: {}", NETWORK_ERROR, message),
    }
  }

  // Loading failures are reported under a single prefix regardless of their kind.
  pub fn describe_load(&self, prefix: &str) -> String {
    let reason = match self {
      Failure::Validation(message) | Failure::Transport(message) => message.clone(),
      Failure::Rejected {
        detail: Some(detail),
        ..
      } => detail.clone(),
      Failure::Rejected {
        status,
        detail: None,
      } => format!("{}", status),
    };

    format!("{}: {}", prefix, reason)
  }
}

impl std::fmt::Display for Failure {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Failure::Validation(message) => write!(formatter, "validation failure - {}", message),
      Failure::Rejected { status, detail } => write!(
        formatter,
        "rejected by backend ({}) - {}",
        status,
        detail.as_deref().unwrap_or("no detail")
      ),
      Failure::Transport(message) => write!(formatter, "transport failure - {}", message),
    }
  }
}

impl std::error::Error for Failure {}

impl From<Error> for Failure {
  fn from(error: Error) -> Self {
    Failure::Transport(format!("{}", error))
  }
}
