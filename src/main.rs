use actix_cors::Cors;
use actix_web::{get, http, middleware::Logger, post, web, App, HttpResponse, HttpServer, Responder};

#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;
extern crate dotenv;

use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};

mod schema;

mod dtos;
use dtos::*;
mod actions;
mod error;
mod models;

use error::ApiError;

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

#[get("/health")]
async fn get_health() -> impl Responder {
    HttpResponse::Ok().json(HealthDto {
        status: "ok".to_string(),
    })
}

#[get("/images")]
async fn get_images(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let conn = pool.get()?;
    let rows = actions::list_images(&conn)?;
    let mut result = Vec::with_capacity(rows.len());
    for img in rows {
        let likes = actions::count_votes(img.id, "like", &conn)?;
        let dislikes = actions::count_votes(img.id, "dislike", &conn)?;
        result.push(ImageDto {
            id: img.id,
            url: img.url,
            likes,
            dislikes,
        });
    }
    Ok(HttpResponse::Ok().json(result))
}

#[post("/vote")]
async fn add_vote(
    pool: web::Data<DbPool>,
    model: web::Json<VoteDto>,
) -> Result<HttpResponse, ApiError> {
    if model.vote_type != "like" && model.vote_type != "dislike" {
        return Err(ApiError::InvalidVoteType);
    }
    let conn = pool.get()?;
    // check-then-insert is not transactional; concurrent votes for a
    // just-checked image may race
    if actions::find_image_by_id(model.image_id, &conn)?.is_none() {
        return Err(ApiError::ImageNotFound(model.image_id));
    }
    actions::insert_vote(model.image_id, &model.vote_type, &conn)?;
    Ok(HttpResponse::Ok().json(MessageDto {
        message: "Vote recorded".to_string(),
    }))
}

#[get("/export")]
async fn export_votes(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let conn = pool.get()?;
    let rows = actions::list_votes(&conn)?;
    let mut body = String::from("Vote ID,Image ID,Vote Type,Created At\n");
    for vote in &rows {
        body.push_str(&format!(
            "{},{},{},{}\n",
            vote.id, vote.image_id, vote.vote_type, vote.created_at
        ));
    }
    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .header(
            http::header::CONTENT_DISPOSITION,
            "attachment; filename=\"votes.csv\"",
        )
        .body(body))
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let connspec = std::env::var("DATABASE_URL").unwrap_or_else(|_| "picsfeed.db".to_string());
    let manager = ConnectionManager::<SqliteConnection>::new(connspec);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool.");

    {
        let conn = pool.get().expect("couldn't get db connection from pool");
        actions::init_schema(&conn).expect("Failed to create tables.");
        let seeded = actions::seed_images(&conn).expect("Failed to seed images.");
        if seeded > 0 {
            info!("seeded {} placeholder images", seeded);
        }
    }

    HttpServer::new(move || {
        let cors = Cors::new()
            .allowed_origin("http://localhost:3000")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(http::header::CONTENT_TYPE)
            .finish();
        App::new()
            .data(pool.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .service(get_health)
            .service(get_images)
            .service(add_vote)
            .service(export_votes)
    })
    .bind("127.0.0.1:8000")?
    .run()
    .await
}
