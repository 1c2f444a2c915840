use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    // None after the comment has been deleted
    pub user_id    : Option<Id>,
    pub media_id   : Id,
    pub parent_id  : Option<Id>,
    pub content    : String,
    pub created_at : Timestamp,
    pub updated_at : Option<Timestamp>,
    pub deleted_at : Option<Timestamp>,
}

impl Comment {
    pub const fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }

    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_owned_by(&self, user_id: Id) -> bool {
        self.user_id == Some(user_id)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub user_id    : Id,
    pub media_id   : Id,
    pub parent_id  : Option<Id>,
    pub content    : String,
    pub created_at : Timestamp,
}
