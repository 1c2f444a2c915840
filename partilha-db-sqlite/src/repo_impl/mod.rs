// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::{FromPrimitive as _, ToPrimitive as _};

use partilha_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod batch;
mod category;
mod city;
mod comment;
mod friendship;
mod media;
mod ngo;
mod notification;
mod rating;
mod refresh_token;
mod supplier;
mod user;
mod watch_list;

type Result<T> = std::result::Result<T, repo::Error>;

define_sql_function! {
    fn last_insert_rowid() -> diesel::sql_types::BigInt;
}

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

// Must be invoked on the same connection immediately after the insert
fn last_insert_id(conn: &mut SqliteConnection) -> Result<Id> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map(Id::from)
        .map_err(from_diesel_err)
}

// Updates and deletes of a single row by id
fn expect_single_row(count: usize) -> Result<()> {
    match count {
        0 => Err(repo::Error::NotFound),
        1 => Ok(()),
        _ => Err(anyhow!("Unexpected number of affected rows: {count}").into()),
    }
}

fn load_email(email: String) -> Result<EmailAddress> {
    email
        .parse()
        .map_err(|_| anyhow!("Invalid email address in database: {email}").into())
}

fn load_friendship_status(status: i16) -> Result<FriendshipStatus> {
    FriendshipStatus::from_i16(status)
        .ok_or_else(|| anyhow!("Invalid friendship status: {status}").into())
}

fn store_friendship_status(status: FriendshipStatus) -> i16 {
    status.to_i16().unwrap_or_default()
}

fn load_notification_kind(kind: i16) -> Result<NotificationKind> {
    NotificationKind::from_i16(kind)
        .ok_or_else(|| anyhow!("Invalid notification kind: {kind}").into())
}

fn store_notification_kind(kind: NotificationKind) -> i16 {
    kind.to_i16().unwrap_or_default()
}

fn load_batch_status(status: i16) -> Result<BatchStatus> {
    BatchStatus::from_i16(status).ok_or_else(|| anyhow!("Invalid batch status: {status}").into())
}

fn store_batch_status(status: BatchStatus) -> i16 {
    status.to_i16().unwrap_or_default()
}

fn load_media_type(media_type: &str) -> Result<MediaType> {
    media_type
        .parse()
        .map_err(|_| anyhow!("Invalid media type: {media_type}").into())
}

#[cfg(test)]
mod tests;
