use crate::schema::appointments;
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Queryable, Insertable)]
#[table_name = "appointments"]
pub struct Appointment {
    pub doctor: String,
    pub date: NaiveDate,
    pub time: String,
    pub patient_name: String,
    pub patient_email: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}
