use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` as a JSON response body.
pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body =
        serde_json::to_string(value).map_err(|e| ServerError::Internal(e.to_string()))?;

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}
