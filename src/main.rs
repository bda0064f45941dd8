#[macro_use]
extern crate diesel;

mod appoint;
mod database;
mod models;
mod protocol;
mod schema;
mod slots;
mod user;
mod utils;

use actix_web::{web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use tracing::info;

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let conn_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not found");
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("clinic server listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            // accounts
            .service(
                web::scope("/user")
                    .configure(user::config),
            )
            // appointments
            .service(
                web::scope("/appoint")
                    .configure(appoint::config),
            )
    })
    .bind(bind)?
    .run()
    .await
}
