use crate::{email::EmailAddress, id::Id};

/// A non-governmental organization that collects donated batches.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ngo {
    pub id      : Id,
    pub name    : String,
    pub email   : EmailAddress,
    pub phone   : Option<String>,
    pub city_id : Id,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNgo {
    pub name    : String,
    pub email   : EmailAddress,
    pub phone   : Option<String>,
    pub city_id : Id,
}
