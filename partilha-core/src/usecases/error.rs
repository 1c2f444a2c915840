use crate::{comment_tree::CommentTreeError, repositories};
use partilha_entities::{batch::InvalidStatusTransition, email::EmailAddressParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name must not be empty")]
    EmptyName,
    #[error("Empty comment")]
    EmptyComment,
    #[error("The description must not be empty")]
    EmptyDescription,
    #[error("The search text must not be empty")]
    EmptySearchText,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("Invalid phone number")]
    Phone,
    #[error("Invalid state")]
    State,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("The quantity must be a positive integer")]
    Quantity,
    #[error("Users cannot befriend themselves")]
    SelfFriendship,
    #[error("Invalid parameter '{0}'")]
    InvalidParameter(&'static str),

    #[error("The user already exists")]
    UserAlreadyExists,
    #[error("The user does not exist")]
    UserNotExists,
    #[error("Invalid credentials")]
    InvalidAccess,
    #[error("Invalid refresh token")]
    InvalidRefreshToken,
    #[error("User not found")]
    UserNotFound,

    #[error("Media not found")]
    MediaNotFound,
    #[error("Parent comment not found")]
    CommentParentNotFound,
    #[error("Replies must not be nested that deeply")]
    ReplyTooDeep,
    #[error("Comment not found")]
    CommentNotFound,
    #[error("The comment belongs to another user")]
    CommentNotOwned,
    #[error("The media has already been rated")]
    DuplicatedRating,
    #[error("Rating not found")]
    RatingNotFound,
    #[error("Friendship not found")]
    FriendshipNotFound,
    #[error("The friendship belongs to other users")]
    FriendshipNotOwned,
    #[error("The friendship already exists")]
    FriendshipAlreadyExists,
    #[error("Notification not found")]
    NotificationNotFound,
    #[error("The notification belongs to another user")]
    NotificationNotOwned,
    #[error("Watch list not found")]
    WatchListNotFound,
    #[error("The watch list belongs to another user")]
    WatchListNotOwned,
    #[error("The media is already part of the watch list")]
    MediaAlreadyInWatchList,

    #[error("Category not found")]
    CategoryNotFound,
    #[error("The category already exists")]
    CategoryAlreadyExists,
    #[error("City not found")]
    CityNotFound,
    #[error("The city already exists")]
    CityAlreadyExists,
    #[error("Supplier not found")]
    SupplierNotFound,
    #[error("A supplier with this email already exists")]
    SupplierAlreadyExists,
    #[error("NGO not found")]
    NgoNotFound,
    #[error("An NGO with this email already exists")]
    NgoAlreadyExists,
    #[error("Batch not found")]
    BatchNotFound,
    #[error("The batch is not available")]
    BatchUnavailable,
    #[error("The object is still referenced")]
    StillReferenced,
    #[error(transparent)]
    InvalidStatusTransition(#[from] InvalidStatusTransition),

    #[error("The metadata provider failed: {0}")]
    Metadata(anyhow::Error),
    #[error(transparent)]
    CommentTree(#[from] CommentTreeError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<partilha_entities::password::ParseError> for Error {
    fn from(_: partilha_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<EmailAddressParseError> for Error {
    fn from(_: EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

/// Replaces [`repositories::Error::NotFound`] with a more specific error.
pub(crate) trait MapNotFound<T> {
    fn map_not_found(self, err: Error) -> Result<T, Error>;
}

impl<T> MapNotFound<T> for Result<T, repositories::Error> {
    fn map_not_found(self, err: Error) -> Result<T, Error> {
        self.map_err(|e| match e {
            repositories::Error::NotFound => err,
            e => e.into(),
        })
    }
}

/// Replaces [`repositories::Error::AlreadyExists`] with a more specific error.
pub(crate) trait MapAlreadyExists<T> {
    fn map_already_exists(self, err: Error) -> Result<T, Error>;
}

impl<T> MapAlreadyExists<T> for Result<T, repositories::Error> {
    fn map_already_exists(self, err: Error) -> Result<T, Error> {
        self.map_err(|e| match e {
            repositories::Error::AlreadyExists => err,
            e => e.into(),
        })
    }
}
