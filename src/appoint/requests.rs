use serde::Deserialize;

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub doctor: Option<String>,
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct BookRequest {
    pub login_token: String,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub patient_email: String,
    #[serde(default)]
    pub doctor: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub login_token: String,
}
