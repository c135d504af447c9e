use axum::{
    body::to_bytes,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, state::AppState};

mod people;
mod sitemap;

/// Converts a handler result into a response, rendering errors the same way axum does.
fn into_response<T: IntoResponse>(result: Result<T, AppError>) -> Response {
    match result {
        Ok(body) => body.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Reads the full response body as JSON.
async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
