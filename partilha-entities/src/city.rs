use crate::id::Id;

/// A city together with its federative unit, e.g. "SP" or "RJ".
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id    : Id,
    pub name  : String,
    pub state : String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCity {
    pub name: String,
    pub state: String,
}
