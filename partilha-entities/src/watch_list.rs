use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchList {
    pub id         : Id,
    pub user_id    : Id,
    pub name       : String,
    pub created_at : Timestamp,
}

impl WatchList {
    pub fn is_owned_by(&self, user_id: Id) -> bool {
        self.user_id == user_id
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWatchList {
    pub user_id    : Id,
    pub name       : String,
    pub created_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchListItem {
    pub watch_list_id : Id,
    pub media_id      : Id,
    pub added_at      : Timestamp,
}
