//! Double-submit anti-forgery token for the add-review form.
//!
//! The GET handler sets the token in a cookie and in a hidden form field; the
//! POST handler accepts the form only when both are present and equal.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

pub const CSRF_COOKIE: &str = "odetofood_csrf";
pub const CSRF_FIELD: &str = "__RequestVerificationToken";

/// 32 random bytes, hex encoded.
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

/// `Set-Cookie` value scoped to the add-review routes.
pub fn set_cookie_value(token: &str) -> String {
    format!(
        "{}={}; Path=/Home/AddReview; HttpOnly; SameSite=Strict",
        CSRF_COOKIE, token
    )
}

pub fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .map(|(_, value)| value.to_string())
}

/// True when the cookie token exists and matches the submitted one.
pub fn verify(headers: &HeaderMap, submitted: &str) -> bool {
    match token_from_cookies(headers) {
        Some(expected) if !expected.is_empty() => constant_time_eq(&expected, submitted),
        _ => false,
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
