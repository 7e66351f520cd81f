//! Wire representation of a client and its mapping to domain records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::client::{Client, NewClient, UpdateClient};

/// External shape of a client. `id` is `None` until the record is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub cpf: String,
    #[validate(range(min = 0.0))]
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub children: i32,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: Some(client.id.get()),
            name: client.name,
            cpf: client.cpf,
            income: client.income,
            birth_date: client.birth_date,
            children: client.children,
        }
    }
}

/// The incoming id is dropped; the store assigns one on insert.
impl From<&ClientDto> for NewClient {
    fn from(dto: &ClientDto) -> Self {
        Self {
            name: dto.name.clone(),
            cpf: dto.cpf.clone(),
            income: dto.income,
            birth_date: dto.birth_date,
            children: dto.children,
        }
    }
}

impl From<&ClientDto> for UpdateClient {
    fn from(dto: &ClientDto) -> Self {
        Self {
            name: dto.name.clone(),
            cpf: dto.cpf.clone(),
            income: dto.income,
            birth_date: dto.birth_date,
            children: dto.children,
        }
    }
}
