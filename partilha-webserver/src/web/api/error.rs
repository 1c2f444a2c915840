use super::json_error_response;
use anyhow::anyhow;
pub use partilha_core::{repositories::Error as RepoError, usecases::Error as AppError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
const METADATA_ERROR_MESSAGE: &str = "The metadata provider is not available";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

/// The HTTP status of an application error.
///
/// Returns `None` for errors that must not be exposed to clients.
pub fn status_of(err: &AppError) -> Option<Status> {
    use AppError as E;
    let status = match err {
        E::EmptyName
        | E::EmptyComment
        | E::EmptyDescription
        | E::EmptySearchText
        | E::EmailAddress
        | E::Password
        | E::Phone
        | E::State
        | E::RatingValue
        | E::Quantity
        | E::SelfFriendship
        | E::ReplyTooDeep
        | E::InvalidParameter(_) => Status::BadRequest,

        E::UserNotExists | E::InvalidAccess => Status::Unauthorized,

        E::InvalidRefreshToken
        | E::CommentNotOwned
        | E::FriendshipNotOwned
        | E::NotificationNotOwned
        | E::WatchListNotOwned => Status::Forbidden,

        E::UserNotFound
        | E::MediaNotFound
        | E::CommentParentNotFound
        | E::CommentNotFound
        | E::RatingNotFound
        | E::FriendshipNotFound
        | E::NotificationNotFound
        | E::WatchListNotFound
        | E::CategoryNotFound
        | E::CityNotFound
        | E::SupplierNotFound
        | E::NgoNotFound
        | E::BatchNotFound
        | E::Repo(RepoError::NotFound) => Status::NotFound,

        E::UserAlreadyExists
        | E::DuplicatedRating
        | E::FriendshipAlreadyExists
        | E::MediaAlreadyInWatchList
        | E::CategoryAlreadyExists
        | E::CityAlreadyExists
        | E::SupplierAlreadyExists
        | E::NgoAlreadyExists
        | E::BatchUnavailable
        | E::StillReferenced
        | E::InvalidStatusTransition(_)
        | E::Repo(RepoError::AlreadyExists) => Status::Conflict,

        E::Metadata(_) => Status::BadGateway,

        E::CommentTree(_) | E::Repo(RepoError::Other(_)) => return None,
    };
    Some(status)
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(AppError::Metadata(err)) => {
                warn!("Metadata provider failed: {err:#}");
                json_error_response(req, &METADATA_ERROR_MESSAGE, Status::BadGateway)
            }
            Error::App(err) => match status_of(&err) {
                Some(status) => json_error_response(req, &err, status),
                None => {
                    error!("Error: {err}");
                    json_error_response(req, &INTERNAL_ERROR_MESSAGE, Status::InternalServerError)
                }
            },
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err:#}");
                json_error_response(req, &INTERNAL_ERROR_MESSAGE, Status::InternalServerError)
            }
        }
    }
}
