use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FriendshipStatus {
    Pending  = 0,
    Accepted = 1,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub id           : Id,
    pub requester_id : Id,
    pub addressee_id : Id,
    pub status       : FriendshipStatus,
    pub created_at   : Timestamp,
}

impl Friendship {
    pub fn involves(&self, user_id: Id) -> bool {
        self.requester_id == user_id || self.addressee_id == user_id
    }

    /// The user on the other side of the friendship, if `user_id` is part of it.
    pub fn other_party(&self, user_id: Id) -> Option<Id> {
        if self.requester_id == user_id {
            Some(self.addressee_id)
        } else if self.addressee_id == user_id {
            Some(self.requester_id)
        } else {
            None
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFriendship {
    pub requester_id : Id,
    pub addressee_id : Id,
    pub created_at   : Timestamp,
}
