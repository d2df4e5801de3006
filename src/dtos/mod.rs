extern crate serde;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct ImageDto {
    pub id: i32,
    pub url: String,
    pub likes: i64,
    pub dislikes: i64,
}

#[derive(Deserialize, Serialize)]
pub struct VoteDto {
    pub image_id: i32,
    pub vote_type: String,
}

#[derive(Deserialize, Serialize)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Deserialize, Serialize)]
pub struct HealthDto {
    pub status: String,
}
