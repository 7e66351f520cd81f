use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::ClientId;

/// A persisted client record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    /// National tax identifier (CPF).
    pub cpf: String,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    /// Number of dependents.
    pub children: i32,
}

/// A client that has not been inserted yet; the store assigns its id.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    pub children: i32,
}

/// Replacement values for every mutable field of an existing client.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateClient {
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    pub children: i32,
}
