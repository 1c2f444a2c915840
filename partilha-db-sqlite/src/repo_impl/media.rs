use super::*;

impl<'a> MediaRepo for DbReadOnly<'a> {
    fn find_media(&self, external_id: i64, media_type: MediaType) -> Result<Option<MediaRecord>> {
        find_media(&mut self.conn.borrow_mut(), external_id, media_type)
    }
    fn create_media(&self, _media: &NewMediaRecord) -> Result<Id> {
        unreachable!();
    }
    fn get_media(&self, id: Id) -> Result<MediaRecord> {
        get_media(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> MediaRepo for DbReadWrite<'a> {
    fn find_media(&self, external_id: i64, media_type: MediaType) -> Result<Option<MediaRecord>> {
        find_media(&mut self.conn.borrow_mut(), external_id, media_type)
    }
    fn create_media(&self, media: &NewMediaRecord) -> Result<Id> {
        create_media(&mut self.conn.borrow_mut(), media)
    }
    fn get_media(&self, id: Id) -> Result<MediaRecord> {
        get_media(&mut self.conn.borrow_mut(), id)
    }
}

fn load_media(entity: models::MediaEntity) -> Result<MediaRecord> {
    let models::MediaEntity {
        id,
        external_id,
        media_type,
    } = entity;
    Ok(MediaRecord {
        id: id.into(),
        external_id,
        media_type: load_media_type(&media_type)?,
    })
}

fn find_media(
    conn: &mut SqliteConnection,
    external_id: i64,
    media_type: MediaType,
) -> Result<Option<MediaRecord>> {
    use schema::media::dsl;
    dsl::media
        .filter(dsl::external_id.eq(external_id))
        .filter(dsl::media_type.eq(media_type.as_ref()))
        .first::<models::MediaEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_media)
        .transpose()
}

fn create_media(conn: &mut SqliteConnection, media: &NewMediaRecord) -> Result<Id> {
    let new_media = models::NewMedia {
        external_id: media.external_id,
        media_type: media.media_type.as_ref(),
    };
    diesel::insert_into(schema::media::table)
        .values(&new_media)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn get_media(conn: &mut SqliteConnection, id: Id) -> Result<MediaRecord> {
    use schema::media::dsl;
    dsl::media
        .filter(dsl::id.eq(id.get()))
        .first::<models::MediaEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(load_media)
}
