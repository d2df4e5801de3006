use super::schema::{images, votes};

use chrono::NaiveDateTime;

#[derive(Queryable, Insertable, Debug)]
pub struct Image {
    pub id: i32,
    pub url: String,
}

#[derive(Queryable, Debug)]
pub struct Vote {
    pub id: i32,
    pub image_id: i32,
    pub vote_type: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[table_name = "votes"]
pub struct NewVote {
    pub image_id: i32,
    pub vote_type: String,
    pub created_at: NaiveDateTime,
}
