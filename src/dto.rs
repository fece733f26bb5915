use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::models::TagKind;

/// Data transfer object for submitting an inquiry
///
/// Every field is optional at the wire level so presence can be checked
/// here with field-specific messages instead of failing JSON
/// deserialization.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CreateInquiryDto {
    /// Name of the person inquiring
    pub name: Option<String>,

    /// Reply address
    pub email: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Company or organization
    pub company: Option<String>,

    /// Slug of the project the inquiry refers to
    pub project_slug: Option<String>,

    /// The inquiry text
    pub message: Option<String>,
}

impl CreateInquiryDto {
    /// Checks the submission before anything is written.
    ///
    /// ### Errors
    ///
    /// `MissingField` when `name`, `email`, or `message` is absent or
    /// blank after trimming; `InvalidEmail` when the email shape is off.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.as_deref().is_none_or(|s| s.trim().is_empty()) {
            return Err(ApiError::MissingField("name"));
        }
        let Some(email) = self.email.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Err(ApiError::MissingField("email"));
        };
        if self.message.as_deref().is_none_or(|s| s.trim().is_empty()) {
            return Err(ApiError::MissingField("message"));
        }
        if !is_valid_email(email) {
            return Err(ApiError::InvalidEmail);
        }
        Ok(())
    }
}

/// Accepts addresses shaped like `local@domain` where the whole string
/// is whitespace-free, the local part is non-empty, and the domain has
/// an interior dot.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Response body for a successful inquiry submission
#[derive(Serialize, Deserialize, Debug)]
pub struct InquiryReceipt {
    pub success: bool,
}

/// Query parameters for the photo wall
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct PhotoWallQuery {
    /// Maximum number of photos to return
    pub limit: Option<i64>,
}

/// Query parameters for the tag listing
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct TagListQuery {
    /// Restrict to tags applying to one entity kind
    pub kind: Option<TagKind>,
}
