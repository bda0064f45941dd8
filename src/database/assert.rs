use actix_web::web;
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{database::get_db_conn, DbPool};

pub async fn assert_user(pool: &web::Data<DbPool>, email: String) -> anyhow::Result<()> {
    use crate::schema::users;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        users::table
            .filter(users::email.eq(email))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such user");
    }

    Ok(())
}
