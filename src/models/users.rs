use crate::schema::users;

#[derive(Queryable, Insertable, Identifiable)]
#[primary_key(email)]
#[table_name = "users"]
pub struct UserData {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STAFF: &str = "staff";
