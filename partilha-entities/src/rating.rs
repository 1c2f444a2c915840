use crate::{id::*, time::*};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    pub fn new<I: Into<u8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(10)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<u8> for RatingValue {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id         : Id,
    pub user_id    : Id,
    pub media_id   : Id,
    pub value      : RatingValue,
    pub created_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRating {
    pub user_id    : Id,
    pub media_id   : Id,
    pub value      : RatingValue,
    pub created_at : Timestamp,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    // None if no ratings exist
    pub average: Option<f64>,
    pub count: usize,
}

#[derive(Debug, Default, Clone)]
pub struct RatingSummaryBuilder {
    acc: u64,
    cnt: usize,
}

impl RatingSummaryBuilder {
    fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += u64::from(val.0);
        self.cnt += 1;
    }

    pub fn build(self) -> RatingSummary {
        let average = if self.cnt > 0 {
            Some(self.acc as f64 / self.cnt as f64)
        } else {
            None
        };
        RatingSummary {
            average,
            count: self.cnt,
        }
    }
}

impl std::ops::AddAssign<RatingValue> for RatingSummaryBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

impl<'a> FromIterator<&'a Rating> for RatingSummary {
    fn from_iter<I: IntoIterator<Item = &'a Rating>>(iter: I) -> Self {
        let mut builder = RatingSummaryBuilder::default();
        for rating in iter {
            builder += rating.value;
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_value_range() {
        assert!(!RatingValue::from(0).is_valid());
        assert!(RatingValue::from(1).is_valid());
        assert!(RatingValue::from(10).is_valid());
        assert!(!RatingValue::from(11).is_valid());
    }

    #[test]
    fn summary_of_no_ratings() {
        let summary = RatingSummaryBuilder::default().build();
        assert_eq!(None, summary.average);
        assert_eq!(0, summary.count);
    }

    #[test]
    fn summary_average() {
        let mut builder = RatingSummaryBuilder::default();
        builder += RatingValue::new(3);
        builder += RatingValue::new(8);
        builder += RatingValue::new(10);
        let summary = builder.build();
        assert_eq!(Some(7.0), summary.average);
        assert_eq!(3, summary.count);
    }
}
