//! Failure taxonomy for calls to the content API.

use thiserror::Error;

use crate::models::CommentRejected;

/// Why a call to the content API produced no usable data.
///
/// None of these are shown verbatim to readers; collection call sites
/// collapse them to an empty list and entity call sites to "not found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    Status(u16),
    /// The body was not the JSON shape we expected.
    #[error("parse error: {0}")]
    Decode(String),
    /// The response was fine but carried no entity.
    #[error("not found")]
    NotFound,
    /// Rejected locally before sending.
    #[error("invalid input: {0}")]
    Validation(String),
}

impl ApiError {
    /// Map a status code to an error, 404 becoming [`ApiError::NotFound`].
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            Self::NotFound
        } else {
            Self::Status(status)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Short wording that is safe to put in front of a reader.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "The server could not be reached. Please try again.",
            Self::Status(401) | Self::Status(403) => "You are not allowed to do that.",
            Self::Status(_) | Self::Decode(_) => "Something went wrong while loading data.",
            Self::NotFound => "We could not find what you were looking for.",
            Self::Validation(_) => "Please check the form and try again.",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<CommentRejected> for ApiError {
    fn from(err: CommentRejected) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_means_not_found() {
        assert!(ApiError::from_status(404).is_not_found());
        assert_eq!(ApiError::from_status(500), ApiError::Status(500));
    }

    #[test]
    fn user_message_hides_technical_detail() {
        let err = ApiError::Decode("expected value at line 1 column 1".to_string());
        assert!(!err.user_message().contains("line 1"));
        assert_eq!(
            ApiError::from(CommentRejected::EmptyName),
            ApiError::Validation("name is required".to_string())
        );
    }
}
