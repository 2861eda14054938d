use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, UpdateClient as DomainUpdateClient,
};
use crate::domain::types::{
    BirthDate, ChildrenCount, ClientId, ClientName, Cpf, Income, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    /// Stored as naive UTC.
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub name: &'a str,
    pub cpf: &'a str,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
/// Data used when updating a [`Client`] record.
pub struct UpdateClient<'a> {
    pub name: &'a str,
    pub cpf: &'a str,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::new(client.id)?,
            name: ClientName::new(client.name)?,
            cpf: Cpf::new(client.cpf)?,
            income: Income::new(client.income)?,
            birth_date: BirthDate::from_stored(client.birth_date.and_utc()),
            children: ChildrenCount::new(client.children)?,
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: client.name.as_str(),
            cpf: client.cpf.as_str(),
            income: client.income.get(),
            birth_date: client.birth_date.get().naive_utc(),
            children: client.children.get(),
        }
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateClient<'a> {
    fn from(client: &'a DomainUpdateClient) -> Self {
        Self {
            name: client.name.as_str(),
            cpf: client.cpf.as_str(),
            income: client.income.get(),
            birth_date: client.birth_date.get().naive_utc(),
            children: client.children.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn birth_date() -> BirthDate {
        BirthDate::new(Utc.with_ymd_and_hms(2003, 8, 20, 7, 50, 0).unwrap()).unwrap()
    }

    fn sample_domain_new() -> DomainNewClient {
        DomainNewClient::new(
            ClientName::new("Lucca Henrique").unwrap(),
            Cpf::new("12345678900").unwrap(),
            Income::new(5000.0).unwrap(),
            birth_date(),
            ChildrenCount::new(1).unwrap(),
        )
    }

    #[test]
    fn from_domain_new_creates_newclient() {
        let domain = sample_domain_new();
        let new: NewClient = (&domain).into();
        assert_eq!(new.name, "Lucca Henrique");
        assert_eq!(new.cpf, "12345678900");
        assert_eq!(new.income, 5000.0);
        assert_eq!(new.birth_date, birth_date().get().naive_utc());
        assert_eq!(new.children, 1);
    }

    #[test]
    fn from_domain_update_creates_updateclient() {
        let domain = DomainUpdateClient::new(
            ClientName::new("Jane").unwrap(),
            Cpf::new("10919444522").unwrap(),
            Income::new(3000.0).unwrap(),
            birth_date(),
            ChildrenCount::new(0).unwrap(),
        );
        let update: UpdateClient = (&domain).into();
        assert_eq!(update.name, "Jane");
        assert_eq!(update.cpf, "10919444522");
        assert_eq!(update.income, 3000.0);
        assert_eq!(update.children, 0);
    }

    #[test]
    fn client_into_domain() {
        let db_client = Client {
            id: 1,
            name: "n".to_string(),
            cpf: "12345678900".to_string(),
            income: 1500.5,
            birth_date: birth_date().get().naive_utc(),
            children: 2,
        };
        let domain = DomainClient::try_from(db_client).unwrap();
        assert_eq!(domain.id.get(), 1);
        assert_eq!(domain.name.as_str(), "n");
        assert_eq!(domain.cpf.as_str(), "12345678900");
        assert_eq!(domain.income.get(), 1500.5);
        assert_eq!(domain.birth_date, birth_date());
        assert_eq!(domain.children.get(), 2);
    }

    #[test]
    fn stored_birth_date_is_not_rechecked_against_clock() {
        let ahead = Utc::now().naive_utc() + chrono::Duration::minutes(5);
        let db_client = Client {
            id: 3,
            name: "n".to_string(),
            cpf: "12345678900".to_string(),
            income: 1.0,
            birth_date: ahead,
            children: 0,
        };
        let domain = DomainClient::try_from(db_client).unwrap();
        assert_eq!(domain.birth_date.get(), ahead.and_utc());
    }

    #[test]
    fn corrupted_row_is_rejected() {
        let db_client = Client {
            id: 1,
            name: "n".to_string(),
            cpf: "abc".to_string(),
            income: 1.0,
            birth_date: birth_date().get().naive_utc(),
            children: 0,
        };
        assert_eq!(
            DomainClient::try_from(db_client),
            Err(TypeConstraintError::InvalidCpf)
        );
    }
}
