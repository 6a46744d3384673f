//! Message DTOs - Data Transfer Objects per messaggi

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Body grezzo di `POST /add`, così come arriva dal form o dal JSON.
/// I campi mancanti diventano `None` e vengono respinti in validazione.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SubmissionDTO {
    pub author: Option<String>,
    pub content: Option<String>,
}

impl SubmissionDTO {
    pub fn validate_submission(self) -> Result<CreateMessageDTO, ValidationErrors> {
        validate_submission(self.author, self.content)
    }
}

/// DTO per creare un nuovo messaggio (senza id né created_at, li assegna lo store)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct CreateMessageDTO {
    #[validate(custom(function = "not_blank"))]
    pub author: String,

    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

/// Checks that both fields are present and contain something other than whitespace.
///
/// On success the values are forwarded exactly as submitted: no trimming and no
/// escaping. Escaping happens only when the page is rendered.
pub fn validate_submission(
    author: Option<String>,
    content: Option<String>,
) -> Result<CreateMessageDTO, ValidationErrors> {
    let dto = CreateMessageDTO {
        author: author.unwrap_or_default(),
        content: content.unwrap_or_default(),
    };
    dto.validate()?;
    Ok(dto)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("Author and content are required"));
        return Err(err);
    }
    Ok(())
}
