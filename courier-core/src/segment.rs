use crate::Coordinate;

/// A directed piece of street between two coordinates.
///
/// Two-way streets are stored as a pair of segments, one per direction.
///
/// # Examples
/// ```
/// use courier_core::{Coordinate, Segment};
///
/// # fn main() -> Result<(), courier_core::CoordinateError> {
/// let a = Coordinate::new("34.0547000", "-118.4794734")?;
/// let b = Coordinate::new("34.0544590", "-118.4801137")?;
/// let segment = Segment::new(a.clone(), b.clone(), "Glenmere Way");
/// let back = segment.reversed();
/// assert_eq!(back.start, b);
/// assert_eq!(back.end, a);
/// assert_eq!(back.street, "Glenmere Way");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Where the segment begins.
    pub start: Coordinate,
    /// Where the segment ends.
    pub end: Coordinate,
    /// Name of the street the segment belongs to.
    pub street: String,
}

impl Segment {
    /// Construct a segment from `start` to `end` on `street`.
    pub fn new(start: Coordinate, end: Coordinate, street: impl Into<String>) -> Self {
        Self {
            start,
            end,
            street: street.into(),
        }
    }

    /// The same stretch of street travelled in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
            street: self.street.clone(),
        }
    }
}
