table! {
    appointments (doctor, date, time) {
        doctor -> Varchar,
        date -> Date,
        time -> Char,
        patient_name -> Varchar,
        patient_email -> Varchar,
        created_by -> Varchar,
        created_at -> Datetime,
    }
}

table! {
    user_logins (token, email, login_time) {
        token -> Char,
        email -> Varchar,
        login_time -> Datetime,
    }
}

table! {
    users (email) {
        email -> Varchar,
        password -> Char,
        name -> Varchar,
        role -> Char,
    }
}

allow_tables_to_appear_in_same_query!(
    appointments,
    user_logins,
    users,
);
