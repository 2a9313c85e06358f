//! The street map: every directed segment indexed by its start coordinate.
//!
//! The text format repeats one block per street:
//!
//! ```text
//! <street name>
//! <segment count N>
//! <lat1> <lon1> <lat2> <lon2>     (N lines)
//! ```
//!
//! Each segment line adds the forward and the reverse segment. Blank lines
//! between blocks are ignored.

use std::io::{self, BufRead};

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::{Coordinate, CoordinateError, ExpandableMap, Segment, StreetGraph};
use log::{info, warn};
use thiserror::Error;

/// Errors returned when loading a street map.
#[derive(Debug, Error)]
pub enum StreetMapError {
    /// The map file could not be opened.
    #[error("failed to open street map at {path}")]
    Open {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Path that was opened.
        path: Utf8PathBuf,
    },
    /// Reading a line failed.
    #[error("failed to read street map at line {line}")]
    Read {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Line being read.
        line: usize,
    },
    /// A street name was not followed by a segment count.
    #[error("line {line}: expected a segment count for {street:?}, found {text:?}")]
    InvalidCount {
        /// Line holding the bad count.
        line: usize,
        /// Street the count belongs to.
        street: String,
        /// Offending text.
        text: String,
    },
    /// A segment line did not hold exactly four fields.
    #[error("line {line}: expected four coordinate fields, found {found}")]
    FieldCount {
        /// Line holding the segment.
        line: usize,
        /// Number of fields present.
        found: usize,
    },
    /// A segment endpoint was not a valid coordinate.
    #[error("line {line}: invalid segment coordinate")]
    Coordinate {
        /// Line holding the segment.
        line: usize,
        /// The coordinate failure.
        #[source]
        source: CoordinateError,
    },
    /// The file ended right after a street name.
    #[error("street {street:?} has no segment count")]
    MissingCount {
        /// Street missing its count.
        street: String,
    },
    /// The file ended inside a street block.
    #[error("street {street:?} declares {expected} segments but the file ends after {found}")]
    Truncated {
        /// Street whose block is incomplete.
        street: String,
        /// Segments promised by the count line.
        expected: usize,
        /// Segments actually present.
        found: usize,
    },
}

/// Street segments indexed by start coordinate.
///
/// # Examples
/// ```
/// use courier_core::StreetGraph;
/// use courier_data::StreetMap;
///
/// let text = "Gayley Ave\n1\n34.0625 -118.4475 34.0640 -118.4475\n";
/// let map = StreetMap::from_reader(text.as_bytes())?;
/// assert_eq!(map.node_count(), 2);
/// assert_eq!(map.segment_count(), 2);
/// # Ok::<(), courier_data::StreetMapError>(())
/// ```
#[derive(Debug, Default)]
pub struct StreetMap {
    segments: ExpandableMap<Coordinate, Vec<Segment>>,
    segment_count: usize,
    street_count: usize,
}

impl StreetMap {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a map file.
    ///
    /// # Errors
    /// Returns [`StreetMapError::Open`] when the file cannot be opened and
    /// the parse errors of [`StreetMap::from_reader`].
    pub fn load(path: &Utf8Path) -> Result<Self, StreetMapError> {
        let reader = courier_fs::open_buffered(path).map_err(|source| StreetMapError::Open {
            source,
            path: path.to_path_buf(),
        })?;
        let map = Self::from_reader(reader)?;
        info!(
            "loaded street map {path}: {} streets, {} nodes, {} segments",
            map.street_count,
            map.node_count(),
            map.segment_count
        );
        Ok(map)
    }

    /// Parse a map from any buffered reader.
    ///
    /// # Errors
    /// Returns a [`StreetMapError`] naming the first bad line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, StreetMapError> {
        let mut map = Self::new();
        let mut block = Block::Name;
        for (index, read) in reader.lines().enumerate() {
            let line = index + 1;
            let text = read.map_err(|source| StreetMapError::Read { source, line })?;
            block = map.consume(block, line, text.trim())?;
        }
        match block {
            Block::Name => Ok(map),
            Block::Count { street } => Err(StreetMapError::MissingCount { street }),
            Block::Segments {
                street,
                expected,
                remaining,
            } => Err(StreetMapError::Truncated {
                street,
                expected,
                found: expected - remaining,
            }),
        }
    }

    /// Add a two-way road between `a` and `b`.
    pub fn add_road(&mut self, street: &str, a: Coordinate, b: Coordinate) {
        let forward = Segment::new(a, b, street);
        let backward = forward.reversed();
        self.push(forward);
        self.push(backward);
    }

    /// Number of coordinates with at least one outgoing segment.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of directed segments.
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Number of street blocks read.
    #[must_use]
    pub const fn street_count(&self) -> usize {
        self.street_count
    }

    fn push(&mut self, segment: Segment) {
        self.segment_count += 1;
        if let Some(outgoing) = self.segments.find_mut(&segment.start) {
            outgoing.push(segment);
        } else {
            self.segments.associate(segment.start.clone(), vec![segment]);
        }
    }

    /// Advance the block parser by one trimmed line.
    fn consume(&mut self, block: Block, line: usize, text: &str) -> Result<Block, StreetMapError> {
        match block {
            Block::Name if text.is_empty() => Ok(Block::Name),
            Block::Name => {
                self.street_count += 1;
                Ok(Block::Count {
                    street: text.to_owned(),
                })
            }
            Block::Count { street } => {
                let Ok(expected) = text.parse::<usize>() else {
                    return Err(StreetMapError::InvalidCount {
                        line,
                        street,
                        text: text.to_owned(),
                    });
                };
                if expected == 0 {
                    Ok(Block::Name)
                } else {
                    Ok(Block::Segments {
                        street,
                        expected,
                        remaining: expected,
                    })
                }
            }
            Block::Segments {
                street,
                expected,
                remaining,
            } => {
                self.add_segment_line(&street, line, text)?;
                if remaining > 1 {
                    Ok(Block::Segments {
                        street,
                        expected,
                        remaining: remaining - 1,
                    })
                } else {
                    Ok(Block::Name)
                }
            }
        }
    }

    fn add_segment_line(
        &mut self,
        street: &str,
        line: usize,
        text: &str,
    ) -> Result<(), StreetMapError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let &[lat1, lon1, lat2, lon2] = fields.as_slice() else {
            return Err(StreetMapError::FieldCount {
                line,
                found: fields.len(),
            });
        };
        let parse = |lat: &str, lon: &str| {
            Coordinate::new(lat, lon).map_err(|source| StreetMapError::Coordinate { line, source })
        };
        let start = parse(lat1, lon1)?;
        let end = parse(lat2, lon2)?;
        if start == end {
            warn!("line {line}: skipping zero-length segment on {street:?} at {start}");
            return Ok(());
        }
        self.add_road(street, start, end);
        Ok(())
    }
}

impl StreetGraph for StreetMap {
    fn segments_from(&self, coordinate: &Coordinate) -> Option<&[Segment]> {
        self.segments.find(coordinate).map(Vec::as_slice)
    }
}

/// Where the parser is within a street block.
enum Block {
    /// Expecting a street name (blank lines allowed).
    Name,
    /// Expecting the segment count for `street`.
    Count { street: String },
    /// Expecting `remaining` more segment lines.
    Segments {
        street: String,
        expected: usize,
        remaining: usize,
    },
}
