//! Road classes, growth styles, and node classification.

use std::fmt;

// ── RoadClass ─────────────────────────────────────────────────────────────────

/// Class of a road edge.  Each class has its own [`ClassParams`][crate::ClassParams].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadClass {
    Street,
    Highway,
}

impl RoadClass {
    pub const ALL: [RoadClass; 2] = [RoadClass::Street, RoadClass::Highway];

    pub fn as_str(self) -> &'static str {
        match self {
            RoadClass::Street  => "street",
            RoadClass::Highway => "highway",
        }
    }
}

impl fmt::Display for RoadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── GrowthStyle ───────────────────────────────────────────────────────────────

/// Per-location branching strategy, sampled from the growth-style field at a
/// frontier edge's far endpoint.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrowthStyle {
    /// Forward continuation only.
    #[default]
    Basic,
    /// Rectilinear grid.
    NewYork,
    /// Radial boulevards around population peaks.
    Paris,
}

impl GrowthStyle {
    /// Decode a raster channel value: 0 = Basic, 1 = NewYork, 2 = Paris.
    /// Unknown values fall back to Basic.
    pub fn from_code(code: u8) -> GrowthStyle {
        match code {
            1 => GrowthStyle::NewYork,
            2 => GrowthStyle::Paris,
            _ => GrowthStyle::Basic,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            GrowthStyle::Basic   => 0,
            GrowthStyle::NewYork => 1,
            GrowthStyle::Paris   => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GrowthStyle::Basic   => "basic",
            GrowthStyle::NewYork => "new_york",
            GrowthStyle::Paris   => "paris",
        }
    }
}

impl fmt::Display for GrowthStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NodeKind ──────────────────────────────────────────────────────────────────

/// Classification of a finalized road node by its degree.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Degree 1.
    RoadEnd,
    /// Degree 2.
    Straight,
    /// Degree 3 or more.
    Intersection,
}

impl NodeKind {
    /// `None` for an isolated node (degree 0).
    pub fn from_degree(degree: usize) -> Option<NodeKind> {
        match degree {
            0 => None,
            1 => Some(NodeKind::RoadEnd),
            2 => Some(NodeKind::Straight),
            _ => Some(NodeKind::Intersection),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::RoadEnd      => "road_end",
            NodeKind::Straight     => "straight",
            NodeKind::Intersection => "intersection",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
