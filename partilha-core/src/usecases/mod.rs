mod batches;
mod categories;
mod cities;
mod comments;
mod contact;
mod error;
mod friendships;
mod media;
mod ngos;
mod notifications;
mod ratings;
mod sessions;
mod suppliers;
mod users;
mod watch_lists;

#[cfg(test)]
pub mod tests;

pub use self::{
    batches::*, categories::*, cities::*, comments::*, contact::ContactInput, error::Error,
    friendships::*, media::*, ngos::*, notifications::*, ratings::*, sessions::*, suppliers::*,
    users::*, watch_lists::*,
};

mod prelude {
    pub use super::error::Error;
    pub(crate) use super::error::{MapAlreadyExists, MapNotFound};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
