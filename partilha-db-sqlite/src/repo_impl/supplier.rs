use super::*;

impl<'a> SupplierRepo for DbReadOnly<'a> {
    fn create_supplier(&self, _supplier: &NewSupplier) -> Result<Id> {
        unreachable!();
    }
    fn get_supplier(&self, id: Id) -> Result<Supplier> {
        get_supplier(&mut self.conn.borrow_mut(), id)
    }
    fn all_suppliers(&self, city_id: Option<Id>) -> Result<Vec<Supplier>> {
        all_suppliers(&mut self.conn.borrow_mut(), city_id)
    }
    fn update_supplier(&self, _supplier: &Supplier) -> Result<()> {
        unreachable!();
    }
    fn delete_supplier(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
}

impl<'a> SupplierRepo for DbReadWrite<'a> {
    fn create_supplier(&self, supplier: &NewSupplier) -> Result<Id> {
        create_supplier(&mut self.conn.borrow_mut(), supplier)
    }
    fn get_supplier(&self, id: Id) -> Result<Supplier> {
        get_supplier(&mut self.conn.borrow_mut(), id)
    }
    fn all_suppliers(&self, city_id: Option<Id>) -> Result<Vec<Supplier>> {
        all_suppliers(&mut self.conn.borrow_mut(), city_id)
    }
    fn update_supplier(&self, supplier: &Supplier) -> Result<()> {
        update_supplier(&mut self.conn.borrow_mut(), supplier)
    }
    fn delete_supplier(&self, id: Id) -> Result<()> {
        delete_supplier(&mut self.conn.borrow_mut(), id)
    }
}

fn load_supplier(entity: models::SupplierEntity) -> Result<Supplier> {
    let models::SupplierEntity {
        id,
        name,
        email,
        phone,
        city_id,
    } = entity;
    Ok(Supplier {
        id: id.into(),
        name,
        email: load_email(email)?,
        phone,
        city_id: city_id.into(),
    })
}

fn create_supplier(conn: &mut SqliteConnection, s: &NewSupplier) -> Result<Id> {
    let new_supplier = models::NewSupplier {
        name: &s.name,
        email: s.email.as_str(),
        phone: s.phone.as_deref(),
        city_id: s.city_id.get(),
    };
    diesel::insert_into(schema::suppliers::table)
        .values(&new_supplier)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn get_supplier(conn: &mut SqliteConnection, id: Id) -> Result<Supplier> {
    use schema::suppliers::dsl;
    dsl::suppliers
        .filter(dsl::id.eq(id.get()))
        .first::<models::SupplierEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(load_supplier)
}

fn all_suppliers(conn: &mut SqliteConnection, city_id: Option<Id>) -> Result<Vec<Supplier>> {
    use schema::suppliers::dsl;
    let mut query = dsl::suppliers.order_by(dsl::name).into_boxed();
    if let Some(city_id) = city_id {
        query = query.filter(dsl::city_id.eq(city_id.get()));
    }
    query
        .load::<models::SupplierEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_supplier)
        .collect()
}

fn update_supplier(conn: &mut SqliteConnection, s: &Supplier) -> Result<()> {
    use schema::suppliers::dsl;
    let changes = models::NewSupplier {
        name: &s.name,
        email: s.email.as_str(),
        phone: s.phone.as_deref(),
        city_id: s.city_id.get(),
    };
    let count = diesel::update(dsl::suppliers.filter(dsl::id.eq(s.id.get())))
        .set(&changes)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_supplier(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::suppliers::dsl;
    let count = diesel::delete(dsl::suppliers.filter(dsl::id.eq(id.get())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}
