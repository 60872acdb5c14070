//! # Review Form
//!
//! The draft a user types on the detail page, and the rules it must pass
//! before it becomes a `NewReview` for `POST /review`.
//!
//! Rules: name and review must be non-blank after trimming, and the name is
//! at most `MAX_NAME_CHARS` characters. Values are trimmed on the way out.

use thiserror::Error;

use crate::api::NewReview;

pub const MAX_NAME_CHARS: usize = 50;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFormError {
    #[error("No restaurant selected")]
    MissingRestaurant,
    #[error("Name is required")]
    EmptyName,
    #[error("Name must be at most {} characters", MAX_NAME_CHARS)]
    NameTooLong,
    #[error("Review is required")]
    EmptyReview,
}

/// Which input a validation error belongs to, so the form can show it inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    Name,
    Review,
}

impl ReviewFormError {
    pub fn field(self) -> Option<ReviewField> {
        match self {
            ReviewFormError::MissingRestaurant => None,
            ReviewFormError::EmptyName | ReviewFormError::NameTooLong => Some(ReviewField::Name),
            ReviewFormError::EmptyReview => Some(ReviewField::Review),
        }
    }
}

/// Unvalidated form contents. `id` is the restaurant being reviewed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub id: String,
    pub name: String,
    pub review: String,
}

impl ReviewDraft {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Checks every rule, reporting the first failure in field order.
    pub fn validate(&self) -> Result<NewReview, ReviewFormError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(ReviewFormError::MissingRestaurant);
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(ReviewFormError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ReviewFormError::NameTooLong);
        }

        let review = self.review.trim();
        if review.is_empty() {
            return Err(ReviewFormError::EmptyReview);
        }

        Ok(NewReview {
            id: id.to_string(),
            name: name.to_string(),
            review: review.to_string(),
        })
    }
}
