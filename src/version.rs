const GITHUB_SHA: Option<&'static str> = option_env!("GITHUB_SHA");
const SHOPFRONT_VERSION: Option<&'static str> = option_env!("SHOPFRONT_VERSION");

pub fn version() -> String {
  SHOPFRONT_VERSION
    .or(GITHUB_SHA)
    .unwrap_or(env!("CARGO_PKG_VERSION"))
    .to_string()
}
