use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        client::{Client, NewClient, UpdateClient},
        types::ClientId,
    },
    models::client::{
        Client as DbClient, NewClient as DbNewClient, UpdateClient as DbUpdateClient,
    },
    repository::{
        ClientFilter, ClientListQuery, ClientReader, ClientWriter, DieselRepository, Sort,
        SortDirection, SortField,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::clients,
};

/// Escapes `LIKE` wildcards so user input is matched literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn filtered(filter: Option<&ClientFilter>) -> clients::BoxedQuery<'static, Sqlite> {
    let query = clients::table.into_boxed();
    match filter {
        None => query,
        Some(ClientFilter::Income(income)) => query.filter(clients::income.eq(*income)),
        Some(ClientFilter::IncomeGreaterThan(income)) => {
            query.filter(clients::income.gt(*income))
        }
        Some(ClientFilter::CpfPrefix(prefix)) => query.filter(
            clients::cpf
                .like(format!("{}%", escape_like(prefix)))
                .escape('\\'),
        ),
    }
}

fn ordered(
    query: clients::BoxedQuery<'static, Sqlite>,
    sort: Sort,
) -> clients::BoxedQuery<'static, Sqlite> {
    macro_rules! order {
        ($column:expr) => {
            match sort.direction {
                SortDirection::Asc => query.order($column.asc()),
                SortDirection::Desc => query.order($column.desc()),
            }
        };
    }

    let query = match sort.field {
        SortField::Id => order!(clients::id),
        SortField::Name => order!(clients::name),
        SortField::Cpf => order!(clients::cpf),
        SortField::Income => order!(clients::income),
        SortField::BirthDate => order!(clients::birth_date),
        SortField::Children => order!(clients::children),
    };

    // Stable pages when the sort key has duplicates.
    query.then_order_by(clients::id.asc())
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let mut conn = self.conn()?;

        let client = clients::table
            .find(id.get())
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        client
            .map(Client::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered(query.filter.as_ref())
            .count()
            .get_result(&mut conn)?;

        let items = ordered(filtered(query.filter.as_ref()), query.sort)
            .select(DbClient::as_select())
            .limit(to_i64(query.pagination.per_page))
            .offset(to_i64(query.pagination.offset()))
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Client::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        Ok((total as usize, items))
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;

        let insertable: DbNewClient = new_client.into();
        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)?;

        Client::try_from(created).map_err(RepositoryError::from)
    }

    fn update_client(
        &self,
        client_id: ClientId,
        updates: &UpdateClient,
    ) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;

        let changes: DbUpdateClient = updates.into();
        let updated = diesel::update(clients::table.find(client_id.get()))
            .set(&changes)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Client::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(clients::table.find(client_id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
