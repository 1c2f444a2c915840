use super::*;

impl<'a> CategoryRepo for DbReadOnly<'a> {
    fn create_category(&self, _name: &str) -> Result<Id> {
        unreachable!();
    }
    fn get_category(&self, id: Id) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
    fn update_category(&self, _category: &Category) -> Result<()> {
        unreachable!();
    }
    fn delete_category(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
}

impl<'a> CategoryRepo for DbReadWrite<'a> {
    fn create_category(&self, name: &str) -> Result<Id> {
        create_category(&mut self.conn.borrow_mut(), name)
    }
    fn get_category(&self, id: Id) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
    fn update_category(&self, category: &Category) -> Result<()> {
        update_category(&mut self.conn.borrow_mut(), category)
    }
    fn delete_category(&self, id: Id) -> Result<()> {
        delete_category(&mut self.conn.borrow_mut(), id)
    }
}

impl From<models::CategoryEntity> for Category {
    fn from(from: models::CategoryEntity) -> Self {
        let models::CategoryEntity { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

fn create_category(conn: &mut SqliteConnection, name: &str) -> Result<Id> {
    use schema::categories::dsl;
    diesel::insert_into(schema::categories::table)
        .values(dsl::name.eq(name))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn get_category(conn: &mut SqliteConnection, id: Id) -> Result<Category> {
    use schema::categories::dsl;
    Ok(dsl::categories
        .filter(dsl::id.eq(id.get()))
        .first::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>> {
    use schema::categories::dsl;
    Ok(dsl::categories
        .order_by(dsl::name)
        .load::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn update_category(conn: &mut SqliteConnection, category: &Category) -> Result<()> {
    use schema::categories::dsl;
    let count = diesel::update(dsl::categories.filter(dsl::id.eq(category.id.get())))
        .set(dsl::name.eq(&category.name))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_category(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::categories::dsl;
    let count = diesel::delete(dsl::categories.filter(dsl::id.eq(id.get())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}
