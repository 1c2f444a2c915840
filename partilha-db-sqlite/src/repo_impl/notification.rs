use super::*;

impl<'a> NotificationRepo for DbReadOnly<'a> {
    fn create_notification(&self, _notification: &NewNotification) -> Result<Id> {
        unreachable!();
    }
    fn get_notification(&self, id: Id) -> Result<Notification> {
        get_notification(&mut self.conn.borrow_mut(), id)
    }
    fn load_notifications_of_user(
        &self,
        user_id: Id,
        unread_only: bool,
    ) -> Result<Vec<Notification>> {
        load_notifications_of_user(&mut self.conn.borrow_mut(), user_id, unread_only)
    }
    fn mark_notification_read(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
}

impl<'a> NotificationRepo for DbReadWrite<'a> {
    fn create_notification(&self, notification: &NewNotification) -> Result<Id> {
        create_notification(&mut self.conn.borrow_mut(), notification)
    }
    fn get_notification(&self, id: Id) -> Result<Notification> {
        get_notification(&mut self.conn.borrow_mut(), id)
    }
    fn load_notifications_of_user(
        &self,
        user_id: Id,
        unread_only: bool,
    ) -> Result<Vec<Notification>> {
        load_notifications_of_user(&mut self.conn.borrow_mut(), user_id, unread_only)
    }
    fn mark_notification_read(&self, id: Id) -> Result<()> {
        mark_notification_read(&mut self.conn.borrow_mut(), id)
    }
}

fn load_notification(entity: models::NotificationEntity) -> Result<Notification> {
    let models::NotificationEntity {
        id,
        user_id,
        actor_id,
        kind,
        reference_id,
        is_read,
        created_at,
    } = entity;
    Ok(Notification {
        id: id.into(),
        user_id: user_id.into(),
        actor_id: actor_id.into(),
        kind: load_notification_kind(kind)?,
        reference_id: reference_id.map(Into::into),
        read: is_read,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_notification(conn: &mut SqliteConnection, n: &NewNotification) -> Result<Id> {
    let new_notification = models::NewNotification {
        user_id: n.user_id.get(),
        actor_id: n.actor_id.get(),
        kind: store_notification_kind(n.kind),
        reference_id: n.reference_id.map(Id::get),
        is_read: false,
        created_at: n.created_at.as_millis(),
    };
    diesel::insert_into(schema::notifications::table)
        .values(&new_notification)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn get_notification(conn: &mut SqliteConnection, id: Id) -> Result<Notification> {
    use schema::notifications::dsl;
    dsl::notifications
        .filter(dsl::id.eq(id.get()))
        .first::<models::NotificationEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(load_notification)
}

fn load_notifications_of_user(
    conn: &mut SqliteConnection,
    user_id: Id,
    unread_only: bool,
) -> Result<Vec<Notification>> {
    use schema::notifications::dsl;
    let mut query = dsl::notifications
        .filter(dsl::user_id.eq(user_id.get()))
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .into_boxed();
    if unread_only {
        query = query.filter(dsl::is_read.eq(false));
    }
    query
        .load::<models::NotificationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_notification)
        .collect()
}

fn mark_notification_read(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::notifications::dsl;
    let count = diesel::update(dsl::notifications.filter(dsl::id.eq(id.get())))
        .set(dsl::is_read.eq(true))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}
