use super::*;

impl<'a> CommentRepo for DbReadOnly<'a> {
    fn load_comments_of_media(&self, media_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_media(&mut self.conn.borrow_mut(), media_id)
    }
    fn load_comment(&self, id: Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }

    fn create_comment(&self, _comment: &NewComment) -> Result<Id> {
        unreachable!();
    }
    fn update_comment_content(&self, _id: Id, _content: &str, _updated_at: Timestamp) -> Result<()> {
        unreachable!();
    }
    fn soft_delete_comment(&self, _id: Id, _deleted_at: Timestamp) -> Result<()> {
        unreachable!();
    }
}

impl<'a> CommentRepo for DbReadWrite<'a> {
    fn load_comments_of_media(&self, media_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_media(&mut self.conn.borrow_mut(), media_id)
    }
    fn load_comment(&self, id: Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }

    fn create_comment(&self, comment: &NewComment) -> Result<Id> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn update_comment_content(&self, id: Id, content: &str, updated_at: Timestamp) -> Result<()> {
        update_comment_content(&mut self.conn.borrow_mut(), id, content, updated_at)
    }
    fn soft_delete_comment(&self, id: Id, deleted_at: Timestamp) -> Result<()> {
        soft_delete_comment(&mut self.conn.borrow_mut(), id, deleted_at)
    }
}

impl From<models::CommentEntity> for Comment {
    fn from(from: models::CommentEntity) -> Self {
        let models::CommentEntity {
            id,
            user_id,
            media_id,
            parent_id,
            content,
            created_at,
            updated_at,
            deleted_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.map(Into::into),
            media_id: media_id.into(),
            parent_id: parent_id.map(Into::into),
            content,
            created_at: Timestamp::from_millis(created_at),
            updated_at: updated_at.map(Timestamp::from_millis),
            deleted_at: deleted_at.map(Timestamp::from_millis),
        }
    }
}

fn load_comments_of_media(conn: &mut SqliteConnection, media_id: Id) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::media_id.eq(media_id.get()))
        .order_by(dsl::id)
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_comment(conn: &mut SqliteConnection, id: Id) -> Result<Comment> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::id.eq(id.get()))
        .first::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn create_comment(conn: &mut SqliteConnection, comment: &NewComment) -> Result<Id> {
    let new_comment = models::NewComment {
        user_id: Some(comment.user_id.get()),
        media_id: comment.media_id.get(),
        parent_id: comment.parent_id.map(Id::get),
        content: &comment.content,
        created_at: comment.created_at.as_millis(),
    };
    diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn update_comment_content(
    conn: &mut SqliteConnection,
    id: Id,
    content: &str,
    updated_at: Timestamp,
) -> Result<()> {
    use schema::comments::dsl;
    let count = diesel::update(
        dsl::comments
            .filter(dsl::id.eq(id.get()))
            .filter(dsl::deleted_at.is_null()),
    )
    .set((
        dsl::content.eq(content),
        dsl::updated_at.eq(Some(updated_at.as_millis())),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_single_row(count)
}

// The row is kept to preserve the structure of the
// comment tree, only author and content are erased.
fn soft_delete_comment(conn: &mut SqliteConnection, id: Id, deleted_at: Timestamp) -> Result<()> {
    use schema::comments::dsl;
    let count = diesel::update(
        dsl::comments
            .filter(dsl::id.eq(id.get()))
            .filter(dsl::deleted_at.is_null()),
    )
    .set((
        dsl::user_id.eq(None::<i64>),
        dsl::content.eq(""),
        dsl::deleted_at.eq(Some(deleted_at.as_millis())),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_single_row(count)
}
