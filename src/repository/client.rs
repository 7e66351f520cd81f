use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::sql_types::Text;
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
        ClientListQuery, ClientReader, ClientWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::clients,
};

diesel::define_sql_function! {
    fn lower(x: Text) -> Text;
}

/// Base query shared by the page and the count so both see the same filter.
fn filtered_clients(query: &ClientListQuery) -> clients::BoxedQuery<'static, Sqlite> {
    let mut items = clients::table.into_boxed();

    if let Some(min_income) = query.min_income {
        items = items.filter(clients::income.ge(min_income));
    }

    items
}

fn into_domain(rows: Vec<DbClient>) -> RepositoryResult<Vec<Client>> {
    rows.into_iter()
        .map(|row| Client::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let mut conn = self.conn()?;

        let client = clients::table
            .find(id.get())
            .first::<DbClient>(&mut conn)
            .optional()?;

        client
            .map(|c| Client::try_from(c).map_err(RepositoryError::from))
            .transpose()
    }

    fn client_exists(&self, id: ClientId) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;

        let found = diesel::select(exists(clients::table.find(id.get())))
            .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered_clients(&query).count().get_result(&mut conn)?;

        let mut items = filtered_clients(&query)
            .distinct()
            .order(clients::id.asc());

        if let Some(pagination) = &query.pagination {
            items = items.limit(pagination.limit()).offset(pagination.offset());
        }

        let items = items.load::<DbClient>(&mut conn)?;

        Ok((total as usize, into_domain(items)?))
    }

    fn list_clients_with_children(&self) -> RepositoryResult<Vec<Client>> {
        let mut conn = self.conn()?;

        let items = clients::table
            .filter(clients::children.ne(0))
            .order(clients::id.asc())
            .load::<DbClient>(&mut conn)?;

        into_domain(items)
    }

    fn find_clients_by_name(&self, name: &str) -> RepositoryResult<Vec<Client>> {
        let mut conn = self.conn()?;

        let items = clients::table
            .filter(lower(clients::name).eq(lower(name)))
            .order(clients::id.asc())
            .load::<DbClient>(&mut conn)?;

        into_domain(items)
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();

        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Client::try_from(created).map_err(RepositoryError::from)
    }

    fn update_client(
        &self,
        client_id: ClientId,
        updates: &UpdateClient,
    ) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;
        let db_updates: DbUpdateClient = updates.into();

        let updated = diesel::update(clients::table.find(client_id.get()))
            .set(&db_updates)
            .get_result::<DbClient>(&mut conn)?;

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
