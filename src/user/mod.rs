mod requests;
mod responses;
mod utils;

use crate::{
    database::get_db_conn,
    models::{
        user_logins::UserLoginData,
        users::{UserData, ROLE_ADMIN, ROLE_STAFF},
    },
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use blake2::{Blake2b, Digest};
use chrono::Utc;
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub use self::utils::get_email_from_token;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login).service(logout);
}

crate::post_funcs! {
    (register, "/register", RegisterRequest, SimpleResponse),
    (login, "/login", LoginRequest, LoginResponse),
    (logout, "/logout", LogoutRequest, SimpleResponse),
}

async fn register_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RegisterRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::users;

    let info = info.into_inner();
    if info.name.is_empty() || info.email.is_empty() || info.password.is_empty() {
        bail!("All fields are required.");
    }

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            let res = users::table
                .filter(users::email.eq(&info.email))
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            if res > 0 {
                bail!("Email already registered.");
            }

            // anything but an explicit admin registers as staff
            let role = if info.role == ROLE_ADMIN {
                ROLE_ADMIN
            } else {
                ROLE_STAFF
            };

            let hashed_password = format!("{:x}", Blake2b::digest(info.password.as_bytes()));
            let data = UserData {
                email: info.email,
                password: hashed_password,
                name: info.name,
                role: role.to_string(),
            };

            diesel::insert_into(users::table)
                .values(data)
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn login_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    use crate::schema::{user_logins, users};

    let info = info.into_inner();

    let conn = get_db_conn(&pool)?;
    let login_token = web::block(move || {
        conn.transaction(|| {
            let hashed_password = format!("{:x}", Blake2b::digest(info.password.as_bytes()));
            let res = users::table
                .filter(users::email.eq(&info.email))
                .filter(users::password.eq(&hashed_password))
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            if res != 1 {
                bail!("Invalid email or password.");
            }

            let login_token = format!("{:x}", Blake2b::digest(info.email.as_bytes()));
            let token_data = UserLoginData {
                token: login_token.clone(),
                email: info.email,
                login_time: Utc::now().naive_utc(),
            };
            diesel::insert_into(user_logins::table)
                .values(token_data)
                .execute(&conn)
                .context("DB error")?;

            Ok(login_token)
        })
    })
    .await?;

    Ok(LoginResponse {
        success: true,
        err: "".to_string(),
        login_token,
    })
}

async fn logout_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LogoutRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::user_logins;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(user_logins::table.filter(user_logins::token.eq(info.login_token)))
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}
