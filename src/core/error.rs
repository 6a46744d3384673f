use crate::render::render_error_page;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tracing::error;

/// Formato del body di errore
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorFormat {
    PlainText,
    Html,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
    format: ErrorFormat,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
            format: ErrorFormat::PlainText,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Risponde con una pagina HTML invece che con testo semplice
    pub fn as_html(mut self) -> Self {
        self.format = ErrorFormat::Html;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // Common error constructors
    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Database irraggiungibile o query fallita. Nessun retry.
    pub fn storage_unavailable(message: &'static str, err: sqlx::Error) -> Self {
        error!("Storage unavailable: {:?}", err);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message).with_details(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        // il dettaglio di validator non serve al client, basta il messaggio
        tracing::debug!("Validation failed: {}", err);
        Self::bad_request("Author and content are required")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self.format {
            ErrorFormat::PlainText => {
                let body = match self.details {
                    Some(details) => format!("{}: {}", self.message, details),
                    None => self.message.to_string(),
                };
                (self.status, body).into_response()
            }
            ErrorFormat::Html => {
                let body = render_error_page(self.message, self.details.as_deref());
                (self.status, Html(body)).into_response()
            }
        }
    }
}
