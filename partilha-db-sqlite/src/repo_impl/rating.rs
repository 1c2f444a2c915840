use super::*;

impl<'a> RatingRepo for DbReadOnly<'a> {
    fn try_get_rating(&self, user_id: Id, media_id: Id) -> Result<Option<Rating>> {
        try_get_rating(&mut self.conn.borrow_mut(), user_id, media_id)
    }
    fn create_rating(&self, _rating: &NewRating) -> Result<Id> {
        unreachable!();
    }
    fn update_rating_value(&self, _id: Id, _value: RatingValue) -> Result<()> {
        unreachable!();
    }
    fn load_ratings_of_media(&self, media_id: Id) -> Result<Vec<Rating>> {
        load_ratings_of_media(&mut self.conn.borrow_mut(), media_id)
    }
}

impl<'a> RatingRepo for DbReadWrite<'a> {
    fn try_get_rating(&self, user_id: Id, media_id: Id) -> Result<Option<Rating>> {
        try_get_rating(&mut self.conn.borrow_mut(), user_id, media_id)
    }
    fn create_rating(&self, rating: &NewRating) -> Result<Id> {
        create_rating(&mut self.conn.borrow_mut(), rating)
    }
    fn update_rating_value(&self, id: Id, value: RatingValue) -> Result<()> {
        update_rating_value(&mut self.conn.borrow_mut(), id, value)
    }
    fn load_ratings_of_media(&self, media_id: Id) -> Result<Vec<Rating>> {
        load_ratings_of_media(&mut self.conn.borrow_mut(), media_id)
    }
}

fn load_rating(entity: models::RatingEntity) -> Result<Rating> {
    let models::RatingEntity {
        id,
        user_id,
        media_id,
        value,
        created_at,
    } = entity;
    let value = u8::try_from(value)
        .map(RatingValue::from)
        .ok()
        .filter(|v| v.is_valid())
        .ok_or_else(|| repo::Error::Other(anyhow!("Invalid rating value: {value}")))?;
    Ok(Rating {
        id: id.into(),
        user_id: user_id.into(),
        media_id: media_id.into(),
        value,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn try_get_rating(conn: &mut SqliteConnection, user_id: Id, media_id: Id) -> Result<Option<Rating>> {
    use schema::ratings::dsl;
    dsl::ratings
        .filter(dsl::user_id.eq(user_id.get()))
        .filter(dsl::media_id.eq(media_id.get()))
        .first::<models::RatingEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_rating)
        .transpose()
}

fn create_rating(conn: &mut SqliteConnection, rating: &NewRating) -> Result<Id> {
    let new_rating = models::NewRating {
        user_id: rating.user_id.get(),
        media_id: rating.media_id.get(),
        value: u8::from(rating.value).into(),
        created_at: rating.created_at.as_millis(),
    };
    diesel::insert_into(schema::ratings::table)
        .values(&new_rating)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn update_rating_value(conn: &mut SqliteConnection, id: Id, value: RatingValue) -> Result<()> {
    use schema::ratings::dsl;
    let count = diesel::update(dsl::ratings.filter(dsl::id.eq(id.get())))
        .set(dsl::value.eq(i16::from(u8::from(value))))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn load_ratings_of_media(conn: &mut SqliteConnection, media_id: Id) -> Result<Vec<Rating>> {
    use schema::ratings::dsl;
    dsl::ratings
        .filter(dsl::media_id.eq(media_id.get()))
        .order_by(dsl::id)
        .load::<models::RatingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_rating)
        .collect()
}
