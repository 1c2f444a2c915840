use time::Duration;

use super::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// An authenticated user together with the refresh token
/// that allows to renew the session.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub refresh_token: RefreshToken,
}

pub fn login<R>(repo: &R, credentials: &Credentials, refresh_valid_for: Duration) -> Result<Session>
where
    R: UserRepo + RefreshTokenRepo,
{
    let email = credentials
        .email
        .parse::<EmailAddress>()
        .map_err(|_| Error::UserNotExists)?;
    let Some(user) = repo.try_get_user_by_email(&email)? else {
        return Err(Error::UserNotExists);
    };
    if !user.password.verify(credentials.password) {
        log::debug!("Login with invalid password: user = {}", user.id);
        return Err(Error::InvalidAccess);
    }
    let refresh_token = RefreshToken::generate(user.id, Timestamp::now(), refresh_valid_for);
    repo.create_refresh_token(&refresh_token)?;
    Ok(Session {
        user,
        refresh_token,
    })
}

/// Exchanges a refresh token for a new one.
///
/// The given token is consumed even if it has already expired.
pub fn refresh_session<R>(repo: &R, token: &str, refresh_valid_for: Duration) -> Result<Session>
where
    R: UserRepo + RefreshTokenRepo,
{
    let consumed = repo
        .consume_refresh_token(token)
        .map_not_found(Error::InvalidRefreshToken)?;
    let now = Timestamp::now();
    if consumed.is_expired(now) {
        return Err(Error::InvalidRefreshToken);
    }
    let user = repo
        .get_user(consumed.user_id)
        .map_not_found(Error::InvalidRefreshToken)?;
    let refresh_token = RefreshToken::generate(user.id, now, refresh_valid_for);
    repo.create_refresh_token(&refresh_token)?;
    Ok(Session {
        user,
        refresh_token,
    })
}

/// Revokes a refresh token of the given user.
pub fn logout<R: RefreshTokenRepo>(repo: &R, user_id: Id, token: &str) -> Result<()> {
    let refresh_token = repo
        .get_refresh_token(token)
        .map_not_found(Error::InvalidRefreshToken)?;
    if refresh_token.user_id != user_id {
        log::warn!("User {user_id} tried to revoke a refresh token of another user");
        return Err(Error::InvalidRefreshToken);
    }
    repo.consume_refresh_token(token)
        .map_not_found(Error::InvalidRefreshToken)?;
    Ok(())
}

pub fn delete_expired_refresh_tokens<R: RefreshTokenRepo>(repo: &R) -> Result<usize> {
    let count = repo.delete_expired_refresh_tokens(Timestamp::now())?;
    if count > 0 {
        log::info!("Deleted {count} expired refresh token(s)");
    }
    Ok(count)
}
