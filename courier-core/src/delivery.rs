use crate::Coordinate;

/// An item to drop off at a location.
///
/// The item label is opaque to routing; only the location matters when
/// ordering stops.
///
/// # Examples
/// ```
/// use courier_core::{Coordinate, DeliveryRequest};
///
/// # fn main() -> Result<(), courier_core::CoordinateError> {
/// let stop = DeliveryRequest::new(Coordinate::new("34.0712323", "-118.4505969")?, "Chicken tenders");
/// assert_eq!(stop.item, "Chicken tenders");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryRequest {
    /// Drop-off point.
    pub location: Coordinate,
    /// Free-form label of what is being delivered.
    pub item: String,
}

impl DeliveryRequest {
    /// Construct a request to deliver `item` at `location`.
    pub fn new(location: Coordinate, item: impl Into<String>) -> Self {
        Self {
            location,
            item: item.into(),
        }
    }
}
