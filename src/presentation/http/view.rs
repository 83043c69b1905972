// src/presentation/http/view.rs
//! Server-side view responder.
//!
//! A handler answers with a view name and a model of named attributes. The
//! markup is produced elsewhere, so the response body is the JSON document
//! `{"view": <name>, "model": {...}}`.

use crate::presentation::http::constants::attrs;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    view: &'static str,
    model: Map<String, Value>,
}

impl View {
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            model: Map::new(),
        }
    }

    pub fn layout(self, layout_path: &'static str) -> Self {
        self.attr(attrs::LAYOUT_PATH, layout_path)
    }

    /// Adds or replaces a model attribute.
    pub fn attr<T: Serialize + ?Sized>(mut self, name: &str, value: &T) -> Self {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(attribute = name, error = %err, "model attribute not serializable");
                Value::Null
            }
        };
        self.model.insert(name.to_string(), value);
        self
    }

    pub fn name(&self) -> &str {
        self.view
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.model.get(name)
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
