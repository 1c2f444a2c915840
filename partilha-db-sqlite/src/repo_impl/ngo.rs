use super::*;

impl<'a> NgoRepo for DbReadOnly<'a> {
    fn create_ngo(&self, _ngo: &NewNgo) -> Result<Id> {
        unreachable!();
    }
    fn get_ngo(&self, id: Id) -> Result<Ngo> {
        get_ngo(&mut self.conn.borrow_mut(), id)
    }
    fn all_ngos(&self, city_id: Option<Id>) -> Result<Vec<Ngo>> {
        all_ngos(&mut self.conn.borrow_mut(), city_id)
    }
    fn update_ngo(&self, _ngo: &Ngo) -> Result<()> {
        unreachable!();
    }
    fn delete_ngo(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
}

impl<'a> NgoRepo for DbReadWrite<'a> {
    fn create_ngo(&self, ngo: &NewNgo) -> Result<Id> {
        create_ngo(&mut self.conn.borrow_mut(), ngo)
    }
    fn get_ngo(&self, id: Id) -> Result<Ngo> {
        get_ngo(&mut self.conn.borrow_mut(), id)
    }
    fn all_ngos(&self, city_id: Option<Id>) -> Result<Vec<Ngo>> {
        all_ngos(&mut self.conn.borrow_mut(), city_id)
    }
    fn update_ngo(&self, ngo: &Ngo) -> Result<()> {
        update_ngo(&mut self.conn.borrow_mut(), ngo)
    }
    fn delete_ngo(&self, id: Id) -> Result<()> {
        delete_ngo(&mut self.conn.borrow_mut(), id)
    }
}

fn load_ngo(entity: models::NgoEntity) -> Result<Ngo> {
    let models::NgoEntity {
        id,
        name,
        email,
        phone,
        city_id,
    } = entity;
    Ok(Ngo {
        id: id.into(),
        name,
        email: load_email(email)?,
        phone,
        city_id: city_id.into(),
    })
}

fn create_ngo(conn: &mut SqliteConnection, ngo: &NewNgo) -> Result<Id> {
    let new_ngo = models::NewNgo {
        name: &ngo.name,
        email: ngo.email.as_str(),
        phone: ngo.phone.as_deref(),
        city_id: ngo.city_id.get(),
    };
    diesel::insert_into(schema::ngos::table)
        .values(&new_ngo)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn get_ngo(conn: &mut SqliteConnection, id: Id) -> Result<Ngo> {
    use schema::ngos::dsl;
    dsl::ngos
        .filter(dsl::id.eq(id.get()))
        .first::<models::NgoEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(load_ngo)
}

fn all_ngos(conn: &mut SqliteConnection, city_id: Option<Id>) -> Result<Vec<Ngo>> {
    use schema::ngos::dsl;
    let mut query = dsl::ngos.order_by(dsl::name).into_boxed();
    if let Some(city_id) = city_id {
        query = query.filter(dsl::city_id.eq(city_id.get()));
    }
    query
        .load::<models::NgoEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_ngo)
        .collect()
}

fn update_ngo(conn: &mut SqliteConnection, ngo: &Ngo) -> Result<()> {
    use schema::ngos::dsl;
    let changes = models::NewNgo {
        name: &ngo.name,
        email: ngo.email.as_str(),
        phone: ngo.phone.as_deref(),
        city_id: ngo.city_id.get(),
    };
    let count = diesel::update(dsl::ngos.filter(dsl::id.eq(ngo.id.get())))
        .set(&changes)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_ngo(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::ngos::dsl;
    let count = diesel::delete(dsl::ngos.filter(dsl::id.eq(id.get())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}
