//! JSON body extractor whose rejections use the API error format.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] in handler arguments.
///
/// Malformed bodies, unknown fields, and wrong content types are rejected
/// with a 400 `{ error, code }` body instead of axum's plain-text default.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
