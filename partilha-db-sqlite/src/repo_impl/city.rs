use super::*;

impl<'a> CityRepo for DbReadOnly<'a> {
    fn create_city(&self, _city: &NewCity) -> Result<Id> {
        unreachable!();
    }
    fn get_city(&self, id: Id) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn all_cities(&self) -> Result<Vec<City>> {
        all_cities(&mut self.conn.borrow_mut())
    }
    fn update_city(&self, _city: &City) -> Result<()> {
        unreachable!();
    }
    fn delete_city(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
}

impl<'a> CityRepo for DbReadWrite<'a> {
    fn create_city(&self, city: &NewCity) -> Result<Id> {
        create_city(&mut self.conn.borrow_mut(), city)
    }
    fn get_city(&self, id: Id) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn all_cities(&self) -> Result<Vec<City>> {
        all_cities(&mut self.conn.borrow_mut())
    }
    fn update_city(&self, city: &City) -> Result<()> {
        update_city(&mut self.conn.borrow_mut(), city)
    }
    fn delete_city(&self, id: Id) -> Result<()> {
        delete_city(&mut self.conn.borrow_mut(), id)
    }
}

impl From<models::CityEntity> for City {
    fn from(from: models::CityEntity) -> Self {
        let models::CityEntity { id, name, state } = from;
        Self {
            id: id.into(),
            name,
            state,
        }
    }
}

fn create_city(conn: &mut SqliteConnection, city: &NewCity) -> Result<Id> {
    let new_city = models::NewCity {
        name: &city.name,
        state: &city.state,
    };
    diesel::insert_into(schema::cities::table)
        .values(&new_city)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn get_city(conn: &mut SqliteConnection, id: Id) -> Result<City> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .filter(dsl::id.eq(id.get()))
        .first::<models::CityEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_cities(conn: &mut SqliteConnection) -> Result<Vec<City>> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .order_by((dsl::state, dsl::name))
        .load::<models::CityEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn update_city(conn: &mut SqliteConnection, city: &City) -> Result<()> {
    use schema::cities::dsl;
    let changes = models::NewCity {
        name: &city.name,
        state: &city.state,
    };
    let count = diesel::update(dsl::cities.filter(dsl::id.eq(city.id.get())))
        .set(&changes)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_city(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::cities::dsl;
    let count = diesel::delete(dsl::cities.filter(dsl::id.eq(id.get())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}
