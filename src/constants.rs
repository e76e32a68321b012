pub const API_BASE: &'static str = "http://localhost:8000";

pub const SESSION_STORAGE_KEY: &'static str = "currentUser";
pub const DEFAULT_STORAGE_PATH: &'static str = ".shopfront-storage.json";
pub const STORAGE_PATH_ENV: &'static str = "SHOPFRONT_STORAGE";

pub const REGISTER_REDIRECT_MS: u64 = 2000;
pub const LOGIN_REDIRECT_MS: u64 = 1000;
pub const MESSAGE_HIDE_MS: u64 = 5000;

pub const REGISTER_PATH: &'static str = "register";
pub const LOGIN_PATH: &'static str = "login";
pub const PRODUCTS_PATH: &'static str = "products";

pub const PASSWORD_MISMATCH: &'static str = "Passwords do not match";
pub const REGISTER_SUCCESS: &'static str = "Registration successful! Please login.";
pub const REGISTER_FALLBACK: &'static str = "Registration failed";
pub const LOGIN_SUCCESS: &'static str = "Login successful!";
pub const LOGIN_FALLBACK: &'static str = "Login failed";
pub const ADMIN_REQUIRED: &'static str = "You need to be an admin to perform this action";
pub const SAVE_FALLBACK: &'static str = "Operation failed";
pub const DELETE_CONFIRMATION: &'static str = "Are you sure you want to delete this product?";
pub const DELETE_SUCCESS: &'static str = "Product deleted successfully!";
pub const DELETE_FALLBACK: &'static str = "Delete failed";
pub const LOAD_PRODUCTS_FAILED: &'static str = "Error loading products";
pub const LOAD_PRODUCT_FAILED: &'static str = "Error loading product";
pub const NETWORK_ERROR: &'static str = "Network error";
pub const PRICE_NOT_NUMBER: &'static str = "Price must be a number";
pub const STOCK_NOT_NUMBER: &'static str = "Stock must be a whole number";
pub const PRODUCT_CREATED: &'static str = "Product created successfully!";
pub const PRODUCT_UPDATED: &'static str = "Product updated successfully!";

pub fn endpoint_url(base: &str, path: &str) -> String {
  format!("{}/{}", base.trim_end_matches('/'), path)
}

pub fn product_url(base: &str, id: i64) -> String {
  format!("{}/{}", endpoint_url(base, PRODUCTS_PATH), id)
}
