mod requests;
mod responses;

use crate::{
    database::{assert, get_db_conn},
    models::{appointments::Appointment, users::ROLE_ADMIN},
    protocol::SimpleResponse,
    slots::{
        authority::{self, BookingRequest},
        availability,
        error::BookingError,
        store::DbStore,
    },
    user::get_email_from_token,
    DbPool,
};
use actix_web::{error::BlockingError, get, post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(free_slots)
        .service(doctor_slots)
        .service(book)
        .service(search_appoint);
}

crate::get_funcs! {
    (free_slots, "/free_slots", SlotsQuery, SlotsResponse),
    (doctor_slots, "/doctor_slots", SlotsQuery, SlotsResponse),
}

crate::post_funcs! {
    (book, "/book", BookRequest, SimpleResponse),
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
}

async fn free_slots_impl(
    pool: web::Data<DbPool>,
    query: web::Query<SlotsQuery>,
) -> anyhow::Result<SlotsResponse> {
    let query = query.into_inner();

    let conn = get_db_conn(&pool)?;
    let res = web::block(move || {
        let store = DbStore::new(&conn);
        availability::free_slots(&store, query.doctor.as_deref(), query.date.as_deref())
    })
    .await;

    match res {
        Ok(slots) => Ok(SlotsResponse {
            success: true,
            err: "".to_string(),
            slots,
        }),
        Err(BlockingError::Error(BookingError::Store(fault))) => {
            tracing::error!("availability store fault: {:#}", fault);
            bail!("Something went wrong");
        }
        Err(BlockingError::Error(e)) => bail!("{}", e),
        Err(BlockingError::Canceled) => bail!("Something went wrong"),
    }
}

// second availability entry point kept for the slot-picker widget; shares
// the resolver (and with it the weekday policy) with free_slots
async fn doctor_slots_impl(
    pool: web::Data<DbPool>,
    query: web::Query<SlotsQuery>,
) -> anyhow::Result<SlotsResponse> {
    free_slots_impl(pool, query).await
}

async fn book_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BookRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    let email = get_email_from_token(info.login_token.clone(), &pool).await?;
    assert::assert_user(&pool, email.clone()).await?;

    let req = BookingRequest {
        patient_name: info.patient_name,
        patient_email: info.patient_email,
        doctor: info.doctor,
        date: info.date,
        time: info.time,
    };

    let conn = get_db_conn(&pool)?;
    let res = web::block(move || {
        let store = DbStore::new(&conn);
        authority::book(&store, &req, &email)
    })
    .await;

    match res {
        Ok(appo) => {
            tracing::info!(
                "appointment booked: {} {} {} by {}",
                appo.doctor,
                appo.date,
                appo.time,
                appo.created_by
            );
            Ok(SimpleResponse::ok())
        }
        Err(BlockingError::Error(BookingError::Store(fault))) => {
            tracing::error!("booking store fault: {:#}", fault);
            bail!("Something went wrong");
        }
        Err(BlockingError::Error(e)) => bail!("{}", e),
        Err(BlockingError::Canceled) => bail!("Something went wrong"),
    }
}

async fn search_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    use crate::schema::{appointments, users};

    let info = info.into_inner();
    let email = get_email_from_token(info.login_token, &pool).await?;
    assert::assert_user(&pool, email.clone()).await?;

    let conn = get_db_conn(&pool)?;
    let appos = web::block(move || -> anyhow::Result<Vec<Appointment>> {
        let role = users::table
            .filter(users::email.eq(&email))
            .select(users::role)
            .get_result::<String>(&conn)
            .context("DB error")?;

        let mut query = appointments::table
            .order((appointments::date.asc(), appointments::time.asc()))
            .into_boxed();
        // staff see what they created; admins see the whole book
        if role != ROLE_ADMIN {
            query = query.filter(appointments::created_by.eq(email));
        }
        query
            .get_results::<Appointment>(&conn)
            .context("DB error")
    })
    .await?;

    let appos = appos
        .into_iter()
        .map(|data| SearchAppointItem {
            patient_name: data.patient_name,
            patient_email: data.patient_email,
            doctor: data.doctor,
            date: format!("{}", data.date),
            time: data.time,
            created_by: data.created_by,
            created_at: crate::utils::format_time_str(&data.created_at),
        })
        .collect();

    Ok(SearchAppointResponse {
        success: true,
        err: "".to_string(),
        appointments: appos,
    })
}
