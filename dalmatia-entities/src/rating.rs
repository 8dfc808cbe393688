/// A single rating between 1 and 5 stars.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(i8);

impl RatingValue {
    pub fn new<I: Into<i8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    pub fn try_from_i64(val: i64) -> Option<Self> {
        i8::try_from(val).ok().map(Self).filter(|v| v.is_valid())
    }
}

impl From<i8> for RatingValue {
    fn from(from: i8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(1.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    /// Without any ratings the average is 0.
    pub const fn none() -> Self {
        Self(0.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self == Self::none() || (self >= Self::min() && self <= Self::max())
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(from).into()
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: i64,
    cnt: u32,
}

impl AvgRatingValueBuilder {
    fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += i64::from(val.0);
        self.cnt += 1;
    }

    pub fn build(self) -> RatingSummary {
        let average = if self.cnt > 0 {
            AvgRatingValue::from(self.acc as f64 / f64::from(self.cnt)).clamp()
        } else {
            AvgRatingValue::none()
        };
        RatingSummary {
            average,
            count: self.cnt,
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

impl FromIterator<RatingValue> for AvgRatingValueBuilder {
    fn from_iter<I: IntoIterator<Item = RatingValue>>(iter: I) -> Self {
        let mut builder = Self::default();
        for val in iter {
            builder += val;
        }
        builder
    }
}

/// The denormalized aggregate of all reviews of an event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average: AvgRatingValue,
    pub count: u32,
}
