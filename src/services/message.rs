//! Message services - pagina principale e inserimento messaggi

use crate::core::{AppError, AppState};
use crate::dtos::SubmissionDTO;
use crate::render::render_page;
use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{HeaderMap, header::CONTENT_TYPE},
    response::{Html, Redirect},
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Body di `POST /add`: JSON se il Content-Type lo dichiara, altrimenti form urlencoded
pub struct Submission(pub SubmissionDTO);

impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = if has_json_content_type(req.headers()) {
            Json::<SubmissionDTO>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| {
                    warn!("Rejected JSON body: {}", rejection.body_text());
                    AppError::bad_request("Invalid request body").with_details(rejection.body_text())
                })?
        } else {
            Form::<SubmissionDTO>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|rejection| {
                    warn!("Rejected form body: {}", rejection.body_text());
                    AppError::bad_request("Invalid request body").with_details(rejection.body_text())
                })?
        };

        Ok(Self(body))
    }
}

/// `application/json` o `application/*+json`, senza distinzione maiuscole/minuscole
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok())
    else {
        return false;
    };

    content_type.type_() == mime::APPLICATION
        && (content_type.subtype() == mime::JSON || content_type.suffix() == Some(mime::JSON))
}

#[debug_handler]
#[instrument(skip(state))]
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    debug!("Rendering message board");
    let messages = state.msg.read_all().await.map_err(|err| {
        AppError::storage_unavailable(
            "Could not connect to database. Make sure PostgreSQL is running.",
            err,
        )
        .as_html()
    })?;

    Ok(Html(render_page(&messages)))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn add_message(
    State(state): State<Arc<AppState>>,
    Submission(body): Submission,
) -> Result<Redirect, AppError> {
    let data = body.validate_submission().inspect_err(|_| {
        warn!("Message submission missing author or content");
    })?;

    let message = state
        .msg
        .create(&data)
        .await
        .map_err(|err| AppError::storage_unavailable("Error saving message", err))?;

    info!(message_id = message.id, "Message saved");
    // 303: il browser ricarica la pagina con una GET
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(has_json_content_type(&headers_with("application/json")));
        assert!(has_json_content_type(&headers_with("application/json; charset=utf-8")));
        assert!(has_json_content_type(&headers_with("Application/JSON")));
        assert!(has_json_content_type(&headers_with("application/vnd.api+json")));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!has_json_content_type(&HeaderMap::new()));
        assert!(!has_json_content_type(&headers_with("application/x-www-form-urlencoded")));
        assert!(!has_json_content_type(&headers_with("text/plain")));
        assert!(!has_json_content_type(&headers_with("not a mime")));
    }
}
