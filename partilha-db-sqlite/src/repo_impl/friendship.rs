use super::*;

impl<'a> FriendshipRepo for DbReadOnly<'a> {
    fn create_friendship(&self, _friendship: &NewFriendship) -> Result<Id> {
        unreachable!();
    }
    fn get_friendship(&self, id: Id) -> Result<Friendship> {
        get_friendship(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_friendship_between(&self, a: Id, b: Id) -> Result<Option<Friendship>> {
        try_get_friendship_between(&mut self.conn.borrow_mut(), a, b)
    }
    fn update_friendship_status(&self, _id: Id, _status: FriendshipStatus) -> Result<()> {
        unreachable!();
    }
    fn delete_friendship(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
    fn load_friendships_of_user(
        &self,
        user_id: Id,
        status: Option<FriendshipStatus>,
    ) -> Result<Vec<Friendship>> {
        load_friendships_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
}

impl<'a> FriendshipRepo for DbReadWrite<'a> {
    fn create_friendship(&self, friendship: &NewFriendship) -> Result<Id> {
        create_friendship(&mut self.conn.borrow_mut(), friendship)
    }
    fn get_friendship(&self, id: Id) -> Result<Friendship> {
        get_friendship(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_friendship_between(&self, a: Id, b: Id) -> Result<Option<Friendship>> {
        try_get_friendship_between(&mut self.conn.borrow_mut(), a, b)
    }
    fn update_friendship_status(&self, id: Id, status: FriendshipStatus) -> Result<()> {
        update_friendship_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn delete_friendship(&self, id: Id) -> Result<()> {
        delete_friendship(&mut self.conn.borrow_mut(), id)
    }
    fn load_friendships_of_user(
        &self,
        user_id: Id,
        status: Option<FriendshipStatus>,
    ) -> Result<Vec<Friendship>> {
        load_friendships_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
}

fn load_friendship(entity: models::FriendshipEntity) -> Result<Friendship> {
    let models::FriendshipEntity {
        id,
        requester_id,
        addressee_id,
        status,
        created_at,
    } = entity;
    Ok(Friendship {
        id: id.into(),
        requester_id: requester_id.into(),
        addressee_id: addressee_id.into(),
        status: load_friendship_status(status)?,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_friendship(conn: &mut SqliteConnection, friendship: &NewFriendship) -> Result<Id> {
    let new_friendship = models::NewFriendship {
        requester_id: friendship.requester_id.get(),
        addressee_id: friendship.addressee_id.get(),
        status: store_friendship_status(FriendshipStatus::Pending),
        created_at: friendship.created_at.as_millis(),
    };
    diesel::insert_into(schema::friendships::table)
        .values(&new_friendship)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn get_friendship(conn: &mut SqliteConnection, id: Id) -> Result<Friendship> {
    use schema::friendships::dsl;
    dsl::friendships
        .filter(dsl::id.eq(id.get()))
        .first::<models::FriendshipEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(load_friendship)
}

fn try_get_friendship_between(
    conn: &mut SqliteConnection,
    a: Id,
    b: Id,
) -> Result<Option<Friendship>> {
    use schema::friendships::dsl;
    let (a, b) = (a.get(), b.get());
    dsl::friendships
        .filter(
            dsl::requester_id
                .eq(a)
                .and(dsl::addressee_id.eq(b))
                .or(dsl::requester_id.eq(b).and(dsl::addressee_id.eq(a))),
        )
        .first::<models::FriendshipEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_friendship)
        .transpose()
}

fn update_friendship_status(
    conn: &mut SqliteConnection,
    id: Id,
    status: FriendshipStatus,
) -> Result<()> {
    use schema::friendships::dsl;
    let count = diesel::update(dsl::friendships.filter(dsl::id.eq(id.get())))
        .set(dsl::status.eq(store_friendship_status(status)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_friendship(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::friendships::dsl;
    let count = diesel::delete(dsl::friendships.filter(dsl::id.eq(id.get())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn load_friendships_of_user(
    conn: &mut SqliteConnection,
    user_id: Id,
    status: Option<FriendshipStatus>,
) -> Result<Vec<Friendship>> {
    use schema::friendships::dsl;
    let user_id = user_id.get();
    let mut query = dsl::friendships
        .filter(
            dsl::requester_id
                .eq(user_id)
                .or(dsl::addressee_id.eq(user_id)),
        )
        .order_by(dsl::id)
        .into_boxed();
    if let Some(status) = status {
        query = query.filter(dsl::status.eq(store_friendship_status(status)));
    }
    query
        .load::<models::FriendshipEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_friendship)
        .collect()
}
