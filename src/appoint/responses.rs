use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SlotsResponse {
    pub success: bool,
    pub err: String,
    pub slots: Vec<String>,
}

#[derive(Default, Serialize)]
pub struct SearchAppointItem {
    pub patient_name: String,
    pub patient_email: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub created_by: String,
    pub created_at: String,
}

#[derive(Default, Serialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<SearchAppointItem>,
}

crate::impl_err_response! {
    SlotsResponse,
    SearchAppointResponse,
}
