use actix_web::{error::ResponseError, HttpResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("vote_type must be \"like\" or \"dislike\"")]
    InvalidVoteType,

    #[error("image {0} not found")]
    ImageNotFound(i32),

    #[error("database error")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error")]
    Pool(#[from] r2d2::Error),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InvalidVoteType => HttpResponse::BadRequest().body(self.to_string()),
            ApiError::ImageNotFound(_) => HttpResponse::NotFound().body(self.to_string()),
            ApiError::Database(e) => {
                error!("database error: {}", e);
                HttpResponse::InternalServerError().finish()
            }
            ApiError::Pool(e) => {
                error!("connection pool error: {}", e);
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}
