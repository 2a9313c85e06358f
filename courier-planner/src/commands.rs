//! Turn-by-turn delivery commands and their rendering from route legs.

use std::fmt;

use courier_core::geodesic::{segment_bearing, segment_length};
use courier_core::{DistanceMetric, Segment};

/// One of the eight 45° compass sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CompassDirection {
    /// 337.5° to 22.5°.
    North,
    /// 22.5° to 67.5°.
    Northeast,
    /// 67.5° to 112.5°.
    East,
    /// 112.5° to 157.5°.
    Southeast,
    /// 157.5° to 202.5°.
    South,
    /// 202.5° to 247.5°.
    Southwest,
    /// 247.5° to 292.5°.
    West,
    /// 292.5° to 337.5°.
    Northwest,
}

impl CompassDirection {
    /// Sector containing a bearing in degrees clockwise from north. Any
    /// finite angle is accepted and wrapped into `[0, 360)`.
    ///
    /// # Examples
    /// ```
    /// use courier_planner::CompassDirection;
    ///
    /// assert_eq!(CompassDirection::from_bearing(10.0), CompassDirection::North);
    /// assert_eq!(CompassDirection::from_bearing(-90.0), CompassDirection::West);
    /// ```
    #[must_use]
    pub fn from_bearing(degrees: f64) -> Self {
        let bearing = degrees.rem_euclid(360.0);
        if !(22.5..337.5).contains(&bearing) {
            Self::North
        } else if bearing < 67.5 {
            Self::Northeast
        } else if bearing < 112.5 {
            Self::East
        } else if bearing < 157.5 {
            Self::Southeast
        } else if bearing < 202.5 {
            Self::South
        } else if bearing < 247.5 {
            Self::Southwest
        } else if bearing < 292.5 {
            Self::West
        } else {
            Self::Northwest
        }
    }

    /// Lower-case name used in rendered commands.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::East => "east",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::Northwest => "northwest",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of a turn onto a new street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TurnDirection {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

impl TurnDirection {
    /// Classify a clockwise heading change in degrees. Changes within one
    /// degree of straight ahead are not turns and yield `None`.
    #[must_use]
    pub fn from_heading_change(degrees: f64) -> Option<Self> {
        let change = degrees.rem_euclid(360.0);
        if !(1.0..=359.0).contains(&change) {
            None
        } else if change < 180.0 {
            Some(Self::Right)
        } else {
            Some(Self::Left)
        }
    }

    /// Lower-case name used in rendered commands.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single instruction for the courier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "command", rename_all = "snake_case")
)]
pub enum DeliveryCommand {
    /// Travel along one street.
    Proceed {
        /// Heading at the start of the stretch.
        direction: CompassDirection,
        /// Street travelled.
        street: String,
        /// Length of the stretch.
        distance: f64,
    },
    /// Turn onto a new street.
    Turn {
        /// Which way to turn.
        direction: TurnDirection,
        /// Street turned onto.
        street: String,
    },
    /// Hand over an item at the current stop.
    Deliver {
        /// The item delivered.
        item: String,
    },
}

impl fmt::Display for DeliveryCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proceed {
                direction,
                street,
                distance,
            } => write!(f, "Proceed {distance:.2} miles {direction} on {street}"),
            Self::Turn { direction, street } => write!(f, "Turn {direction} on {street}"),
            Self::Deliver { item } => write!(f, "Deliver {item}"),
        }
    }
}

/// A stretch of consecutive segments on one street.
struct Stretch<'a> {
    direction: CompassDirection,
    street: &'a str,
    distance: f64,
}

impl<'a> Stretch<'a> {
    fn start<M: DistanceMetric + ?Sized>(metric: &M, segment: &'a Segment) -> Self {
        Self {
            direction: CompassDirection::from_bearing(segment_bearing(segment)),
            street: &segment.street,
            distance: segment_length(metric, segment),
        }
    }

    fn into_command(self) -> DeliveryCommand {
        DeliveryCommand::Proceed {
            direction: self.direction,
            street: self.street.to_owned(),
            distance: self.distance,
        }
    }
}

/// Append proceed and turn commands for one leg, merging consecutive
/// segments on the same street. An empty leg adds nothing.
#[expect(
    clippy::float_arithmetic,
    reason = "stretch lengths and heading changes are float sums and differences"
)]
pub(crate) fn push_leg_commands<M: DistanceMetric + ?Sized>(
    metric: &M,
    segments: &[Segment],
    commands: &mut Vec<DeliveryCommand>,
) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    let mut stretch = Stretch::start(metric, first);
    let mut previous = first;
    for segment in rest {
        if segment.street == stretch.street {
            stretch.distance += segment_length(metric, segment);
        } else {
            commands.push(stretch.into_command());
            let change = segment_bearing(segment) - segment_bearing(previous);
            if let Some(direction) = TurnDirection::from_heading_change(change) {
                commands.push(DeliveryCommand::Turn {
                    direction,
                    street: segment.street.clone(),
                });
            }
            stretch = Stretch::start(metric, segment);
        }
        previous = segment;
    }
    commands.push(stretch.into_command());
}
