use std::{fmt, num::ParseIntError, str::FromStr};

/// Numeric row identifier assigned by the database.
// TODO: use separate id types per entity to prevent mixing them up
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(i64);

impl Id {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for Id {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<Id> for i64 {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Id, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_from_str() {
        assert_eq!(Ok(Id::new(42)), " 42".parse::<Id>());
        assert!("4x2".parse::<Id>().is_err());
    }

    #[test]
    fn only_positive_ids_are_valid() {
        assert!(Id::new(1).is_valid());
        assert!(!Id::new(0).is_valid());
        assert!(!Id::new(-7).is_valid());
    }
}
