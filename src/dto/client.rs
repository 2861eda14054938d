//! Externally visible representation of a client.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::client::Client;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    pub children: i32,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.get(),
            name: client.name.into_inner(),
            cpf: client.cpf.into_inner(),
            income: client.income.get(),
            birth_date: client.birth_date.get(),
            children: client.children.get(),
        }
    }
}
