use super::*;

impl<'a> WatchListRepo for DbReadOnly<'a> {
    fn create_watch_list(&self, _watch_list: &NewWatchList) -> Result<Id> {
        unreachable!();
    }
    fn get_watch_list(&self, id: Id) -> Result<WatchList> {
        get_watch_list(&mut self.conn.borrow_mut(), id)
    }
    fn load_watch_lists_of_user(&self, user_id: Id) -> Result<Vec<WatchList>> {
        load_watch_lists_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn delete_watch_list(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
    fn add_watch_list_item(&self, _item: &WatchListItem) -> Result<()> {
        unreachable!();
    }
    fn remove_watch_list_item(&self, _watch_list_id: Id, _media_id: Id) -> Result<()> {
        unreachable!();
    }
    fn load_watch_list_items(&self, watch_list_id: Id) -> Result<Vec<WatchListItem>> {
        load_watch_list_items(&mut self.conn.borrow_mut(), watch_list_id)
    }
}

impl<'a> WatchListRepo for DbReadWrite<'a> {
    fn create_watch_list(&self, watch_list: &NewWatchList) -> Result<Id> {
        create_watch_list(&mut self.conn.borrow_mut(), watch_list)
    }
    fn get_watch_list(&self, id: Id) -> Result<WatchList> {
        get_watch_list(&mut self.conn.borrow_mut(), id)
    }
    fn load_watch_lists_of_user(&self, user_id: Id) -> Result<Vec<WatchList>> {
        load_watch_lists_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn delete_watch_list(&self, id: Id) -> Result<()> {
        delete_watch_list(&mut self.conn.borrow_mut(), id)
    }
    fn add_watch_list_item(&self, item: &WatchListItem) -> Result<()> {
        add_watch_list_item(&mut self.conn.borrow_mut(), item)
    }
    fn remove_watch_list_item(&self, watch_list_id: Id, media_id: Id) -> Result<()> {
        remove_watch_list_item(&mut self.conn.borrow_mut(), watch_list_id, media_id)
    }
    fn load_watch_list_items(&self, watch_list_id: Id) -> Result<Vec<WatchListItem>> {
        load_watch_list_items(&mut self.conn.borrow_mut(), watch_list_id)
    }
}

impl From<models::WatchListEntity> for WatchList {
    fn from(from: models::WatchListEntity) -> Self {
        let models::WatchListEntity {
            id,
            user_id,
            name,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl From<models::WatchListItem> for WatchListItem {
    fn from(from: models::WatchListItem) -> Self {
        let models::WatchListItem {
            watch_list_id,
            media_id,
            added_at,
        } = from;
        Self {
            watch_list_id: watch_list_id.into(),
            media_id: media_id.into(),
            added_at: Timestamp::from_millis(added_at),
        }
    }
}

fn create_watch_list(conn: &mut SqliteConnection, watch_list: &NewWatchList) -> Result<Id> {
    let new_watch_list = models::NewWatchList {
        user_id: watch_list.user_id.get(),
        name: &watch_list.name,
        created_at: watch_list.created_at.as_millis(),
    };
    diesel::insert_into(schema::watch_lists::table)
        .values(&new_watch_list)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn get_watch_list(conn: &mut SqliteConnection, id: Id) -> Result<WatchList> {
    use schema::watch_lists::dsl;
    Ok(dsl::watch_lists
        .filter(dsl::id.eq(id.get()))
        .first::<models::WatchListEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn load_watch_lists_of_user(conn: &mut SqliteConnection, user_id: Id) -> Result<Vec<WatchList>> {
    use schema::watch_lists::dsl;
    Ok(dsl::watch_lists
        .filter(dsl::user_id.eq(user_id.get()))
        .order_by(dsl::id)
        .load::<models::WatchListEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn delete_watch_list(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::{watch_list_items::dsl as item_dsl, watch_lists::dsl};
    // Foreign key enforcement is a per-connection setting
    // and might be disabled on pooled connections.
    diesel::delete(item_dsl::watch_list_items.filter(item_dsl::watch_list_id.eq(id.get())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let count = diesel::delete(dsl::watch_lists.filter(dsl::id.eq(id.get())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn add_watch_list_item(conn: &mut SqliteConnection, item: &WatchListItem) -> Result<()> {
    let new_item = models::WatchListItem {
        watch_list_id: item.watch_list_id.get(),
        media_id: item.media_id.get(),
        added_at: item.added_at.as_millis(),
    };
    diesel::insert_into(schema::watch_list_items::table)
        .values(&new_item)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn remove_watch_list_item(
    conn: &mut SqliteConnection,
    watch_list_id: Id,
    media_id: Id,
) -> Result<()> {
    use schema::watch_list_items::dsl;
    let count = diesel::delete(
        dsl::watch_list_items
            .filter(dsl::watch_list_id.eq(watch_list_id.get()))
            .filter(dsl::media_id.eq(media_id.get())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn load_watch_list_items(
    conn: &mut SqliteConnection,
    watch_list_id: Id,
) -> Result<Vec<WatchListItem>> {
    use schema::watch_list_items::dsl;
    Ok(dsl::watch_list_items
        .filter(dsl::watch_list_id.eq(watch_list_id.get()))
        .order_by((dsl::added_at, dsl::media_id))
        .load::<models::WatchListItem>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
