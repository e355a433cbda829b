//! Product rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum RatingError {
    /// The value is outside the allowed range.
    #[error("rating must be between {min} and {max} (got {got})")]
    OutOfRange {
        /// Lowest allowed rating.
        min: f32,
        /// Highest allowed rating.
        max: f32,
        /// The rejected value.
        got: f32,
    },
    /// The value is NaN or infinite.
    #[error("rating must be a finite number")]
    NotFinite,
}

/// A star rating between 1.0 and 5.0 inclusive.
///
/// ## Examples
///
/// ```
/// use mercadito_core::Rating;
///
/// assert!(Rating::new(4.5).is_ok());
/// assert!(Rating::new(1.0).is_ok());
/// assert!(Rating::new(0.5).is_err());
/// assert!(Rating::new(5.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Rating(f32);

impl Rating {
    /// Lowest allowed rating.
    pub const MIN: f32 = 1.0;
    /// Highest allowed rating.
    pub const MAX: f32 = 5.0;

    /// Create a `Rating` from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::NotFinite`] for NaN or infinite values and
    /// [`RatingError::OutOfRange`] for values outside 1.0..=5.0.
    pub fn new(value: f32) -> Result<Self, RatingError> {
        if !value.is_finite() {
            return Err(RatingError::NotFinite);
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RatingError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                got: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the rating as an `f32`.
    #[must_use]
    pub const fn as_f32(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f32> for Rating {
    type Error = RatingError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Rating {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <f32 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <f32 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Rating {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <f32 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are constrained by a CHECK, assumed valid
        Ok(Self(raw))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Rating {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <f32 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        assert!(Rating::new(1.0).is_ok());
        assert!(Rating::new(3.7).is_ok());
        assert!(Rating::new(5.0).is_ok());
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(matches!(
            Rating::new(0.0),
            Err(RatingError::OutOfRange { .. })
        ));
        assert!(matches!(
            Rating::new(5.5),
            Err(RatingError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_new_not_finite() {
        assert!(matches!(Rating::new(f32::NAN), Err(RatingError::NotFinite)));
        assert!(matches!(
            Rating::new(f32::INFINITY),
            Err(RatingError::NotFinite)
        ));
    }

    #[test]
    fn test_as_f32() {
        let rating = Rating::new(4.5).unwrap();
        assert!((rating.as_f32() - 4.5).abs() < f32::EPSILON);
    }
}
