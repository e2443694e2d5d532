use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Everything that can go wrong while answering a `/predict` request.
///
/// `MissingImage` is the only client-distinguished case; the rest all
/// surface as 500 with the underlying failure's message, but stay separate
/// variants so callers can tell a bad upload from a broken model.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("No image uploaded")]
    MissingImage,

    /// The multipart stream itself failed mid-read.
    #[error("{0}")]
    Upload(String),

    /// The uploaded bytes could not be decoded as an image.
    #[error("{0}")]
    Decode(#[from] image::ImageError),

    /// The model rejected the feature vector or produced a bad class code.
    #[error("{0}")]
    Model(String),
}

impl actix_web::ResponseError for PredictError {
    fn status_code(&self) -> StatusCode {
        match self {
            PredictError::MissingImage => StatusCode::BAD_REQUEST,
            PredictError::Upload(_) | PredictError::Decode(_) | PredictError::Model(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("prediction failed: {self}");
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn missing_image_is_a_client_error_with_fixed_message() {
        let err = PredictError::MissingImage;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No image uploaded");
    }

    #[test]
    fn processing_errors_are_server_errors() {
        let err = PredictError::Model("shape mismatch".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "shape mismatch");
    }
}
