use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    FriendRequest  = 0,
    FriendAccepted = 1,
    CommentReply   = 2,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id           : Id,
    // The recipient
    pub user_id      : Id,
    pub actor_id     : Id,
    pub kind         : NotificationKind,
    // Friendship id or comment id, depending on the kind
    pub reference_id : Option<Id>,
    pub read         : bool,
    pub created_at   : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub user_id      : Id,
    pub actor_id     : Id,
    pub kind         : NotificationKind,
    pub reference_id : Option<Id>,
    pub created_at   : Timestamp,
}
