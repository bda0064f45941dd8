#[derive(Debug)]
pub enum BookingError {
    /// A required field is missing or malformed. `field` uses the wire name.
    Validation {
        field: &'static str,
        reason: &'static str,
    },
    /// The (doctor, date, time) triple is already taken.
    Conflict,
    /// The booking store itself failed. Never to be conflated with an empty
    /// result or an available slot.
    Store(anyhow::Error),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::Validation { field, reason } => {
                write!(f, "invalid {}: {}", field, reason)
            }
            BookingError::Conflict => {
                write!(f, "This slot is already booked. Please choose another time.")
            }
            BookingError::Store(e) => write!(f, "store failure: {}", e),
        }
    }
}

impl std::error::Error for BookingError {}
