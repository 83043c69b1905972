// src/presentation/http/controllers/mod.rs
pub mod manager_articles;
pub mod manager_companies;
pub mod manager_members;
pub mod membership;
pub mod user_articles;
pub mod user_companies;

use crate::application::error::ApplicationError;
use crate::presentation::http::{
    constants::attrs,
    error::{HttpError, HttpResult},
    redirect::decode_value,
    view::View,
};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

/// Query of a finish page that names the record it reports on.
#[derive(Debug, Deserialize)]
pub struct NameParams {
    #[serde(default)]
    pub name: String,
}

impl NameParams {
    pub fn decoded(&self) -> HttpResult<String> {
        decode_value(&self.name).ok_or_else(|| HttpError::bad_request("malformed name parameter"))
    }
}

/// Re-renders a form page after a rejected submission.
///
/// Field rule failures land in `errors` with `isBeanValidationError` set,
/// business rejections land in `error`. Anything else becomes an error
/// response.
pub(crate) fn form_failure(view: View, err: ApplicationError) -> HttpResult<Response> {
    if let ApplicationError::Invalid(errors) = &err {
        return Ok(view
            .attr(attrs::ERRORS, errors)
            .attr(attrs::IS_BEAN_VALIDATION_ERROR, &true)
            .into_response());
    }
    match err.business_message() {
        Some(key) => Ok(view.attr(attrs::ERROR, key).into_response()),
        None => Err(HttpError::from_error(err)),
    }
}
