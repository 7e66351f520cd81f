use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Insertable)]
#[diesel(table_name = crate::schema::client_events)]
/// Row referencing a client; while it exists the client cannot be deleted.
pub struct NewClientEvent<'a> {
    pub client_id: i32,
    pub description: &'a str,
    pub created_at: NaiveDateTime,
}
