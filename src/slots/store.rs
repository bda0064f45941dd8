use std::collections::HashSet;

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::models::appointments::Appointment;

use super::error::BookingError;

/// Persistence seam for the slot engine. Implementations must guarantee the
/// (doctor, date, time) uniqueness invariant atomically at the storage
/// layer; an application-level read is never enough under concurrency.
pub trait BookingStore {
    /// Times already booked for the exact (doctor, date) pair.
    fn find_booked(&self, doctor: &str, date: NaiveDate) -> Result<HashSet<String>, BookingError>;

    /// Persist an appointment. A duplicate triple is reported as
    /// `BookingError::Conflict` and leaves the store unchanged.
    fn insert(&self, appo: &Appointment) -> Result<(), BookingError>;
}

/// Diesel-backed store. The appointments table's primary key is the
/// (doctor, date, time) triple, so MySQL serializes concurrent inserts for
/// the same slot.
pub struct DbStore<'a> {
    conn: &'a MysqlConnection,
}

impl<'a> DbStore<'a> {
    pub fn new(conn: &'a MysqlConnection) -> Self {
        Self { conn }
    }
}

impl BookingStore for DbStore<'_> {
    fn find_booked(&self, doctor: &str, date: NaiveDate) -> Result<HashSet<String>, BookingError> {
        use crate::schema::appointments;

        appointments::table
            .filter(appointments::doctor.eq(doctor))
            .filter(appointments::date.eq(date))
            .select(appointments::time)
            .load::<String>(self.conn)
            .map(|times| times.into_iter().collect())
            .map_err(|e| BookingError::Store(anyhow::Error::new(e).context("DB error")))
    }

    fn insert(&self, appo: &Appointment) -> Result<(), BookingError> {
        use crate::schema::appointments;

        match diesel::insert_into(appointments::table)
            .values(appo)
            .execute(self.conn)
        {
            Ok(_) => Ok(()),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(BookingError::Conflict)
            }
            Err(e) => Err(BookingError::Store(anyhow::Error::new(e).context("DB error"))),
        }
    }
}
