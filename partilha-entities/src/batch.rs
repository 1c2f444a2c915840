use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BatchStatus {
    Available = 0,
    Reserved  = 1,
    Collected = 2,
    Canceled  = 3,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("A batch cannot change from '{from}' to '{to}'")]
pub struct InvalidStatusTransition {
    pub from: BatchStatus,
    pub to: BatchStatus,
}

impl BatchStatus {
    pub fn can_change_to(self, to: BatchStatus) -> bool {
        use BatchStatus as S;
        matches!(
            (self, to),
            (S::Available, S::Reserved)
                | (S::Reserved, S::Available)
                | (S::Reserved, S::Collected)
                | (S::Available, S::Canceled)
        )
    }

    pub fn change_to(self, to: BatchStatus) -> Result<BatchStatus, InvalidStatusTransition> {
        if self.can_change_to(to) {
            Ok(to)
        } else {
            Err(InvalidStatusTransition { from: self, to })
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, Self::Collected | Self::Canceled)
    }
}

/// A batch ("Lote") of donated goods offered by a supplier.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub id          : Id,
    pub supplier_id : Id,
    pub category_id : Id,
    pub description : String,
    pub quantity    : u32,
    pub status      : BatchStatus,
    // Only set while reserved or after collection
    pub ngo_id      : Option<Id>,
    pub created_at  : Timestamp,
    pub expires_at  : Option<Timestamp>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBatch {
    pub supplier_id : Id,
    pub category_id : Id,
    pub description : String,
    pub quantity    : u32,
    pub created_at  : Timestamp,
    pub expires_at  : Option<Timestamp>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchQuery {
    pub status: Option<BatchStatus>,
    pub category_id: Option<Id>,
    pub supplier_id: Option<Id>,
    pub ngo_id: Option<Id>,
    // Matches the city of the supplier
    pub city_id: Option<Id>,
}
