use crate::{email::EmailAddress, id::Id};

/// Someone who donates batches of goods.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    pub id      : Id,
    pub name    : String,
    pub email   : EmailAddress,
    pub phone   : Option<String>,
    pub city_id : Id,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupplier {
    pub name    : String,
    pub email   : EmailAddress,
    pub phone   : Option<String>,
    pub city_id : Id,
}
