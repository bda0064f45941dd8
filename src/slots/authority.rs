use chrono::Utc;

use crate::models::appointments::Appointment;

use super::error::BookingError;
use super::store::BookingStore;
use super::{grid, policy};

/// A booking request as submitted by the caller. The creator identity is
/// not part of it; it comes from the authenticated session, never from the
/// request body.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub patient_name: String,
    pub patient_email: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
}

/// Create an appointment for a (doctor, date, time) triple. Once a triple
/// is booked it stays booked; there is no cancellation path back to free.
pub fn book<S: BookingStore>(
    store: &S,
    req: &BookingRequest,
    created_by: &str,
) -> Result<Appointment, BookingError> {
    require("patient_name", &req.patient_name)?;
    require("patient_email", &req.patient_email)?;
    require("doctor", &req.doctor)?;
    require("date", &req.date)?;
    require("time", &req.time)?;

    let date = match crate::utils::parse_date_str(&req.date) {
        Ok(date) => date,
        Err(_) => {
            return Err(BookingError::Validation {
                field: "date",
                reason: "not a calendar date",
            })
        }
    };
    if !policy::is_bookable_date(date) {
        return Err(BookingError::Validation {
            field: "date",
            reason: "clinic is closed on weekends",
        });
    }
    if !grid::is_slot_label(&req.time) {
        return Err(BookingError::Validation {
            field: "time",
            reason: "not a slot on the booking grid",
        });
    }

    // Optimistic pre-check for fast feedback. A concurrent request can
    // still slip past this read; the insert below is the authoritative
    // uniqueness check.
    let booked = store.find_booked(&req.doctor, date)?;
    if booked.contains(&req.time) {
        return Err(BookingError::Conflict);
    }

    let appo = Appointment {
        doctor: req.doctor.clone(),
        date,
        time: req.time.clone(),
        patient_name: req.patient_name.clone(),
        patient_email: req.patient_email.clone(),
        created_by: created_by.to_string(),
        created_at: Utc::now().naive_utc(),
    };
    store.insert(&appo)?;

    Ok(appo)
}

fn require(field: &'static str, value: &str) -> Result<(), BookingError> {
    if value.is_empty() {
        Err(BookingError::Validation {
            field,
            reason: "required",
        })
    } else {
        Ok(())
    }
}
