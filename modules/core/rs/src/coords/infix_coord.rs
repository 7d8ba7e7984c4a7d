use std::fmt::{Display, Formatter};
use std::ops::Range;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Dissolve;
use eyre::{ensure, Report, Result};

use super::arity::{Dim2, Dim4};
use super::coordinate::{AnchoredCoordinate, Coordinate};
use crate::num::Position;

/// Named (begin, end) coordinate of an infix inside a single sequence.
/// Unlike tuples, it can only be constructed with `begin <= end`.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Dissolve)]
pub struct InfixCoord<Idx: Position> {
    begin: Idx,
    end: Idx,
}

impl<Idx: Position> InfixCoord<Idx> {
    pub fn new(begin: Idx, end: Idx) -> Result<Self> {
        ensure!(
            begin <= end,
            "Invalid infix coordinate: begin ({begin:?}) > end ({end:?})"
        );
        Ok(Self { begin, end })
    }

    /// Attach the coordinate to a member of a sequence set.
    pub fn anchored(self, string_id: Idx) -> SetInfixCoord<Idx> {
        SetInfixCoord {
            begin: self.begin,
            end: self.end,
            string_id,
            reserved: Idx::zero(),
        }
    }
}

impl<Idx: Position> Coordinate for InfixCoord<Idx> {
    type Idx = Idx;
    type Arity = Dim2;

    #[inline(always)]
    fn begin(&self) -> Idx {
        self.begin
    }

    #[inline(always)]
    fn end(&self) -> Idx {
        self.end
    }
}

impl<Idx: Position + Display> Display for InfixCoord<Idx> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

impl<Idx: Position> TryFrom<(Idx, Idx)> for InfixCoord<Idx> {
    type Error = Report;

    fn try_from(value: (Idx, Idx)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl<Idx: Position> TryFrom<Range<Idx>> for InfixCoord<Idx> {
    type Error = Report;

    fn try_from(value: Range<Idx>) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl<Idx: Position> From<InfixCoord<Idx>> for (Idx, Idx) {
    fn from(coord: InfixCoord<Idx>) -> Self {
        (coord.begin, coord.end)
    }
}

impl<Idx: Position> From<InfixCoord<Idx>> for Range<Idx> {
    fn from(coord: InfixCoord<Idx>) -> Self {
        coord.begin..coord.end
    }
}

impl<Idx: Position> PartialEq<(Idx, Idx)> for InfixCoord<Idx> {
    fn eq(&self, other: &(Idx, Idx)) -> bool {
        self.begin == other.0 && self.end == other.1
    }
}

/// Named (begin, end, string id, reserved) coordinate of an infix inside a sequence set.
///
/// The last component is kept for layout compatibility with 4-wide coordinate arrays and is
/// otherwise unused.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Dissolve)]
pub struct SetInfixCoord<Idx: Position> {
    begin: Idx,
    end: Idx,
    string_id: Idx,
    reserved: Idx,
}

impl<Idx: Position> SetInfixCoord<Idx> {
    pub fn new(begin: Idx, end: Idx, string_id: Idx) -> Result<Self> {
        Ok(InfixCoord::new(begin, end)?.anchored(string_id))
    }

    pub fn reserved(&self) -> Idx {
        self.reserved
    }

    /// Drop the owner id, keeping only the position inside the owner sequence.
    pub fn detached(&self) -> InfixCoord<Idx> {
        InfixCoord {
            begin: self.begin,
            end: self.end,
        }
    }
}

impl<Idx: Position> Coordinate for SetInfixCoord<Idx> {
    type Idx = Idx;
    type Arity = Dim4;

    #[inline(always)]
    fn begin(&self) -> Idx {
        self.begin
    }

    #[inline(always)]
    fn end(&self) -> Idx {
        self.end
    }
}

impl<Idx: Position> AnchoredCoordinate for SetInfixCoord<Idx> {
    #[inline(always)]
    fn string_id(&self) -> Idx {
        self.string_id
    }
}

impl<Idx: Position + Display> Display for SetInfixCoord<Idx> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})@{}", self.begin, self.end, self.string_id)
    }
}

impl<Idx: Position> TryFrom<(Idx, Idx, Idx, Idx)> for SetInfixCoord<Idx> {
    type Error = Report;

    fn try_from(value: (Idx, Idx, Idx, Idx)) -> Result<Self, Self::Error> {
        let mut coord = Self::new(value.0, value.1, value.2)?;
        coord.reserved = value.3;
        Ok(coord)
    }
}

impl<Idx: Position> From<SetInfixCoord<Idx>> for (Idx, Idx, Idx, Idx) {
    fn from(coord: SetInfixCoord<Idx>) -> Self {
        (coord.begin, coord.end, coord.string_id, coord.reserved)
    }
}

impl<Idx: Position> PartialEq<(Idx, Idx, Idx, Idx)> for SetInfixCoord<Idx> {
    fn eq(&self, other: &(Idx, Idx, Idx, Idx)) -> bool {
        self.begin == other.0
            && self.end == other.1
            && self.string_id == other.2
            && self.reserved == other.3
    }
}
