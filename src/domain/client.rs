use serde::{Deserialize, Serialize};

use crate::domain::types::{BirthDate, ChildrenCount, ClientId, ClientName, Cpf, Income};

/// A persisted client record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub cpf: Cpf,
    pub income: Income,
    pub birth_date: BirthDate,
    pub children: ChildrenCount,
}

/// Data required to insert a new client.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewClient {
    pub name: ClientName,
    pub cpf: Cpf,
    pub income: Income,
    pub birth_date: BirthDate,
    pub children: ChildrenCount,
}

impl NewClient {
    #[must_use]
    pub fn new(
        name: ClientName,
        cpf: Cpf,
        income: Income,
        birth_date: BirthDate,
        children: ChildrenCount,
    ) -> Self {
        Self {
            name,
            cpf,
            income,
            birth_date,
            children,
        }
    }
}

/// Replacement values for every mutable field of a client.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateClient {
    pub name: ClientName,
    pub cpf: Cpf,
    pub income: Income,
    pub birth_date: BirthDate,
    pub children: ChildrenCount,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        name: ClientName,
        cpf: Cpf,
        income: Income,
        birth_date: BirthDate,
        children: ChildrenCount,
    ) -> Self {
        Self {
            name,
            cpf,
            income,
            birth_date,
            children,
        }
    }
}
