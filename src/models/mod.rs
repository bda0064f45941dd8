pub mod appointments;
pub mod users;

pub mod user_logins;
