use super::error::BookingError;
use super::store::BookingStore;
use super::{grid, policy};

/// Free slots for a (doctor, date) pair: the daily grid minus the times
/// already booked, in grid order. A missing, empty or unparseable input
/// degrades to an empty list; weekend dates are empty by policy. A store
/// failure is an error, never an empty list.
pub fn free_slots<S: BookingStore>(
    store: &S,
    doctor: Option<&str>,
    date: Option<&str>,
) -> Result<Vec<String>, BookingError> {
    let doctor = match doctor {
        Some(doctor) if !doctor.is_empty() => doctor,
        _ => return Ok(Vec::new()),
    };
    let date = match date.and_then(|d| crate::utils::parse_date_str(d).ok()) {
        Some(date) => date,
        None => return Ok(Vec::new()),
    };
    if !policy::is_bookable_date(date) {
        return Ok(Vec::new());
    }

    let booked = store.find_booked(doctor, date)?;
    let slots = grid::generate_slots()
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect();
    Ok(slots)
}
