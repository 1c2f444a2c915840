use super::*;

impl<'a> RefreshTokenRepo for DbReadOnly<'a> {
    fn create_refresh_token(&self, _token: &RefreshToken) -> Result<()> {
        unreachable!();
    }
    fn get_refresh_token(&self, token: &str) -> Result<RefreshToken> {
        get_refresh_token(&mut self.conn.borrow_mut(), token)
    }
    fn consume_refresh_token(&self, _token: &str) -> Result<RefreshToken> {
        unreachable!();
    }
    fn delete_expired_refresh_tokens(&self, _expired_before: Timestamp) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> RefreshTokenRepo for DbReadWrite<'a> {
    fn create_refresh_token(&self, token: &RefreshToken) -> Result<()> {
        create_refresh_token(&mut self.conn.borrow_mut(), token)
    }
    fn get_refresh_token(&self, token: &str) -> Result<RefreshToken> {
        get_refresh_token(&mut self.conn.borrow_mut(), token)
    }
    fn consume_refresh_token(&self, token: &str) -> Result<RefreshToken> {
        consume_refresh_token(&mut self.conn.borrow_mut(), token)
    }
    fn delete_expired_refresh_tokens(&self, expired_before: Timestamp) -> Result<usize> {
        delete_expired_refresh_tokens(&mut self.conn.borrow_mut(), expired_before)
    }
}

fn create_refresh_token(conn: &mut SqliteConnection, token: &RefreshToken) -> Result<()> {
    let model = models::RefreshToken {
        token: token.token.clone(),
        user_id: token.user_id.get(),
        expires_at: token.expires_at.as_millis(),
    };
    diesel::insert_into(schema::refresh_tokens::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_refresh_token(model: models::RefreshToken) -> RefreshToken {
    let models::RefreshToken {
        token,
        user_id,
        expires_at,
    } = model;
    RefreshToken {
        token,
        user_id: user_id.into(),
        expires_at: Timestamp::from_millis(expires_at),
    }
}

fn get_refresh_token(conn: &mut SqliteConnection, token: &str) -> Result<RefreshToken> {
    use schema::refresh_tokens::dsl;
    dsl::refresh_tokens
        .filter(dsl::token.eq(token))
        .first::<models::RefreshToken>(conn)
        .map(load_refresh_token)
        .map_err(from_diesel_err)
}

fn consume_refresh_token(conn: &mut SqliteConnection, token: &str) -> Result<RefreshToken> {
    use schema::refresh_tokens::dsl;
    let refresh_token = get_refresh_token(conn, token)?;
    let count = diesel::delete(dsl::refresh_tokens.filter(dsl::token.eq(token)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)?;
    Ok(refresh_token)
}

fn delete_expired_refresh_tokens(
    conn: &mut SqliteConnection,
    expired_before: Timestamp,
) -> Result<usize> {
    use schema::refresh_tokens::dsl;
    diesel::delete(dsl::refresh_tokens.filter(dsl::expires_at.le(expired_before.as_millis())))
        .execute(conn)
        .map_err(from_diesel_err)
}
