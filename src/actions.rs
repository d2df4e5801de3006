use chrono::Utc;
use diesel::prelude::*;

use crate::models;

/// How many placeholder images an empty store gets on startup.
pub const SEED_COUNT: i32 = 100;

pub fn init_schema(conn: &SqliteConnection) -> Result<(), diesel::result::Error> {
    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS images (
            id INTEGER PRIMARY KEY,
            url TEXT NOT NULL
        )",
    )
    .execute(conn)?;
    // votes.image_id is checked in the vote handler, not by a constraint
    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS votes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            image_id INTEGER NOT NULL,
            vote_type TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )",
    )
    .execute(conn)?;
    Ok(())
}

/// Populates the placeholder images once; returns how many rows were
/// inserted (0 when the table already has any row).
pub fn seed_images(conn: &SqliteConnection) -> Result<usize, diesel::result::Error> {
    use crate::schema::images::dsl::*;

    let existing: i64 = images.count().get_result(conn)?;
    if existing > 0 {
        return Ok(0);
    }

    for n in 1..=SEED_COUNT {
        let row = models::Image {
            id: n,
            url: format!("https://picsum.photos/id/{}/400/300", n),
        };
        diesel::insert_into(images).values(&row).execute(conn)?;
    }

    Ok(SEED_COUNT as usize)
}

pub fn list_images(conn: &SqliteConnection) -> Result<Vec<models::Image>, diesel::result::Error> {
    use crate::schema::images::dsl::*;

    images.order(id.asc()).load::<models::Image>(conn)
}

pub fn find_image_by_id(
    search_id: i32,
    conn: &SqliteConnection,
) -> Result<Option<models::Image>, diesel::result::Error> {
    use crate::schema::images::dsl::*;

    let img = images
        .filter(id.eq(search_id))
        .first::<models::Image>(conn)
        .optional()?;

    Ok(img)
}

pub fn count_votes(
    img_id: i32,
    kind: &str,
    conn: &SqliteConnection,
) -> Result<i64, diesel::result::Error> {
    use crate::schema::votes::dsl::*;

    votes
        .filter(image_id.eq(img_id))
        .filter(vote_type.eq(kind))
        .count()
        .get_result(conn)
}

pub fn insert_vote(
    img_id: i32,
    kind: &str,
    conn: &SqliteConnection,
) -> Result<(), diesel::result::Error> {
    use crate::schema::votes::dsl::*;

    let new_vote = models::NewVote {
        image_id: img_id,
        vote_type: kind.to_string(),
        created_at: Utc::now().naive_utc(),
    };

    diesel::insert_into(votes).values(&new_vote).execute(conn)?;
    Ok(())
}

pub fn list_votes(conn: &SqliteConnection) -> Result<Vec<models::Vote>, diesel::result::Error> {
    use crate::schema::votes::dsl::*;

    votes.order(id.asc()).load::<models::Vote>(conn)
}
