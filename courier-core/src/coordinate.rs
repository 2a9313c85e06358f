//! Geographic coordinates keyed by their source text.
//!
//! Street graphs are loaded from text, and the same intersection appears in
//! many lines. Comparing parsed `f64` values would let rounding split one
//! intersection into several nodes, so [`Coordinate`] compares and hashes the
//! exact latitude and longitude strings it was built from. The parsed values
//! are kept alongside for distance and bearing calculations.

use std::fmt;
use std::hash::{Hash, Hasher};

use geo::Point;
use thiserror::Error;

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// The latitude text is not a finite decimal number.
    #[error("invalid latitude {text:?}")]
    InvalidLatitude {
        /// Rejected input.
        text: String,
    },
    /// The longitude text is not a finite decimal number.
    #[error("invalid longitude {text:?}")]
    InvalidLongitude {
        /// Rejected input.
        text: String,
    },
    /// The latitude lies outside `[-90, 90]`.
    #[error("latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Parsed latitude.
        value: f64,
    },
    /// The longitude lies outside `[-180, 180]`.
    #[error("longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Parsed longitude.
        value: f64,
    },
}

/// A latitude/longitude pair that remembers its textual form.
///
/// Equality and hashing use the text only, so `"34.05"` and `"34.050"` are
/// different coordinates even though they parse to the same number.
///
/// # Examples
/// ```
/// use courier_core::Coordinate;
///
/// # fn main() -> Result<(), courier_core::CoordinateError> {
/// let depot = Coordinate::new("34.0625329", "-118.4470263")?;
/// assert_eq!(depot.latitude_text(), "34.0625329");
/// assert!((depot.longitude() + 118.447_026_3).abs() < 1e-9);
/// assert_ne!(depot, Coordinate::new("34.06253290", "-118.4470263")?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CoordinateText", into = "CoordinateText")
)]
pub struct Coordinate {
    latitude_text: String,
    longitude_text: String,
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Parse and validate a coordinate from its latitude and longitude text.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either component is not a finite
    /// number or lies outside the valid WGS84 range.
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Result<Self, CoordinateError> {
        let latitude_text = latitude.into();
        let longitude_text = longitude.into();
        let lat = parse_component(&latitude_text)
            .ok_or_else(|| CoordinateError::InvalidLatitude {
                text: latitude_text.clone(),
            })?;
        let lon = parse_component(&longitude_text).ok_or_else(|| {
            CoordinateError::InvalidLongitude {
                text: longitude_text.clone(),
            }
        })?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange { value: lat });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange { value: lon });
        }
        Ok(Self {
            latitude_text,
            longitude_text,
            latitude: lat,
            longitude: lon,
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude exactly as supplied.
    #[must_use]
    pub fn latitude_text(&self) -> &str {
        &self.latitude_text
    }

    /// Longitude exactly as supplied.
    #[must_use]
    pub fn longitude_text(&self) -> &str {
        &self.longitude_text
    }

    /// The coordinate as a `geo` point with `x = longitude`, `y = latitude`.
    #[must_use]
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

fn parse_component(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude_text == other.latitude_text && self.longitude_text == other.longitude_text
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude_text.hash(state);
        self.longitude_text.hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.latitude_text, self.longitude_text)
    }
}

/// Wire form of a [`Coordinate`]: the source text of both components.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CoordinateText {
    latitude: String,
    longitude: String,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordinateText> for Coordinate {
    type Error = CoordinateError;

    fn try_from(text: CoordinateText) -> Result<Self, Self::Error> {
        Self::new(text.latitude, text.longitude)
    }
}

#[cfg(feature = "serde")]
impl From<Coordinate> for CoordinateText {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude_text,
            longitude: coordinate.longitude_text,
        }
    }
}
