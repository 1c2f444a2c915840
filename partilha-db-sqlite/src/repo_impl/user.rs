use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &NewUser) -> Result<Id> {
        unreachable!();
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &NewUser) -> Result<Id> {
        create_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
}

fn load_user(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        name,
        email,
        password,
        created_at,
    } = entity;
    Ok(User {
        id: id.into(),
        name,
        email: load_email(email)?,
        password: Password::from_hash(password),
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_user(conn: &mut SqliteConnection, u: &NewUser) -> Result<Id> {
    let new_user = models::NewUser {
        name: &u.name,
        email: u.email.as_str(),
        password: u.password.as_ref(),
        created_at: u.created_at.as_millis(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn get_user(conn: &mut SqliteConnection, id: Id) -> Result<User> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::id.eq(id.get()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(load_user)
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}

fn get_users(conn: &mut SqliteConnection, ids: &[Id]) -> Result<Vec<User>> {
    use schema::users::dsl;
    if ids.is_empty() {
        return Ok(vec![]);
    }
    let ids: Vec<i64> = ids.iter().copied().map(Id::get).collect();
    dsl::users
        .filter(dsl::id.eq_any(ids))
        .order_by(dsl::id)
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect()
}
