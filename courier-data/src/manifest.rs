//! Delivery manifests: a depot line followed by one line per delivery.
//!
//! ```text
//! <depot lat> <depot lon>
//! <lat> <lon>:<item>
//! ```

use std::io::{self, BufRead};

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::{Coordinate, CoordinateError, DeliveryRequest};
use log::info;
use thiserror::Error;

/// Errors returned when loading a delivery manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be opened.
    #[error("failed to open delivery manifest at {path}")]
    Open {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Path that was opened.
        path: Utf8PathBuf,
    },
    /// Reading a line failed.
    #[error("failed to read delivery manifest at line {line}")]
    Read {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Line being read.
        line: usize,
    },
    /// The manifest holds no depot line.
    #[error("delivery manifest has no depot line")]
    MissingDepot,
    /// A line did not hold exactly two coordinate fields.
    #[error("line {line}: expected a latitude and a longitude, found {found} fields")]
    FieldCount {
        /// Offending line.
        line: usize,
        /// Number of fields present.
        found: usize,
    },
    /// A delivery line has no `:item` part.
    #[error("line {line}: delivery has no item after ':'")]
    MissingItem {
        /// Offending line.
        line: usize,
    },
    /// A coordinate was invalid.
    #[error("line {line}: invalid coordinate")]
    Coordinate {
        /// Offending line.
        line: usize,
        /// The coordinate failure.
        #[source]
        source: CoordinateError,
    },
}

/// A depot and the deliveries to make from it, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryManifest {
    /// Where every run starts and ends.
    pub depot: Coordinate,
    /// Requested deliveries.
    pub deliveries: Vec<DeliveryRequest>,
}

impl DeliveryManifest {
    /// Load a manifest file.
    ///
    /// # Errors
    /// Returns [`ManifestError::Open`] when the file cannot be opened and
    /// the parse errors of [`DeliveryManifest::from_reader`].
    pub fn load(path: &Utf8Path) -> Result<Self, ManifestError> {
        let reader = courier_fs::open_buffered(path).map_err(|source| ManifestError::Open {
            source,
            path: path.to_path_buf(),
        })?;
        let manifest = Self::from_reader(reader)?;
        info!(
            "loaded {} deliveries from {path}",
            manifest.deliveries.len()
        );
        Ok(manifest)
    }

    /// Parse a manifest from any buffered reader. Blank lines are skipped.
    ///
    /// # Errors
    /// Returns a [`ManifestError`] naming the first bad line.
    ///
    /// # Examples
    /// ```
    /// use courier_data::DeliveryManifest;
    ///
    /// let text = "34.0625 -118.4475\n34.0640 -118.4475:Chicken tenders\n";
    /// let manifest = DeliveryManifest::from_reader(text.as_bytes())?;
    /// assert_eq!(manifest.deliveries.len(), 1);
    /// assert_eq!(manifest.deliveries[0].item, "Chicken tenders");
    /// # Ok::<(), courier_data::ManifestError>(())
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ManifestError> {
        let mut depot = None;
        let mut deliveries = Vec::new();
        for (index, read) in reader.lines().enumerate() {
            let line = index + 1;
            let text = read.map_err(|source| ManifestError::Read { source, line })?;
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            if depot.is_none() {
                depot = Some(parse_coordinate(trimmed, line)?);
            } else {
                deliveries.push(parse_delivery(trimmed, line)?);
            }
        }
        let depot = depot.ok_or(ManifestError::MissingDepot)?;
        Ok(Self { depot, deliveries })
    }
}

fn parse_coordinate(text: &str, line: usize) -> Result<Coordinate, ManifestError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[latitude, longitude] = fields.as_slice() else {
        return Err(ManifestError::FieldCount {
            line,
            found: fields.len(),
        });
    };
    Coordinate::new(latitude, longitude).map_err(|source| ManifestError::Coordinate { line, source })
}

fn parse_delivery(text: &str, line: usize) -> Result<DeliveryRequest, ManifestError> {
    let Some((location, item)) = text.split_once(':') else {
        return Err(ManifestError::MissingItem { line });
    };
    let item = item.trim();
    if item.is_empty() {
        return Err(ManifestError::MissingItem { line });
    }
    Ok(DeliveryRequest::new(parse_coordinate(location, line)?, item))
}
