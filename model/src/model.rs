//! Core model types.
//!
//! [`ObjectType`] is the fixed, ordered table of physics-object types.
//! [`CollisionCode`] packs an ordered pair of those types into 16 bits, and
//! [`CollisionPair`] is one row of the full Cartesian product of the table
//! with itself.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Kind of physics object, in the order the engine numbers them.
///
/// The discriminant is the type's index in the collision code. `Charecter`
/// keeps the engine's spelling so generated identifiers match its enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ObjectType {
    /// Immovable world geometry.
    Static = 0,
    /// Immovable clipping volume.
    Clip = 1,
    /// Player- or AI-driven body.
    Charecter = 2,
    /// Rigid body driven by the solver.
    Rigid = 3,
    /// Deformable body.
    Soft = 4,
}

impl ObjectType {
    /// Every object type, ordered by index.
    pub const ALL: [ObjectType; 5] = [
        ObjectType::Static,
        ObjectType::Clip,
        ObjectType::Charecter,
        ObjectType::Rigid,
        ObjectType::Soft,
    ];

    /// The types that never move.
    pub const SPATIAL: [ObjectType; 2] = [ObjectType::Static, ObjectType::Clip];

    /// Number of object types.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the type's name as it appears in generated identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ObjectType::Static => "Static",
            ObjectType::Clip => "Clip",
            ObjectType::Charecter => "Charecter",
            ObjectType::Rigid => "Rigid",
            ObjectType::Soft => "Soft",
        }
    }

    /// Returns the type's index in [`ObjectType::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a type by index.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidTypeIndex`] if `index >= ObjectType::COUNT`.
    pub fn from_index(index: u8) -> Result<Self, ModelError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(ModelError::InvalidTypeIndex(index))
    }

    /// True for the immovable types, `Static` and `Clip`.
    #[must_use]
    pub const fn is_spatial(self) -> bool {
        matches!(self, ObjectType::Static | ObjectType::Clip)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ModelError::UnknownObjectType(s.to_string()))
    }
}

/// Packed identifier of an ordered object-type pair.
///
/// For the pair `(a, b)` the low byte holds the index of `b` and the high
/// byte the index of `a`: `b | (a << 8)`. This is the layout the engine's
/// collision dispatch switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionCode(u16);

impl CollisionCode {
    /// Packs the ordered pair `(a, b)`.
    #[must_use]
    pub const fn of(a: ObjectType, b: ObjectType) -> Self {
        Self(b.index() as u16 | ((a.index() as u16) << 8))
    }

    /// Derives the code for row `index` of the pair enumeration.
    ///
    /// The low byte is `index % COUNT` and the high byte is `index / COUNT`.
    /// Returns `None` past the last row.
    #[must_use]
    pub const fn from_pair_index(index: usize) -> Option<Self> {
        if index >= CollisionPair::COUNT {
            return None;
        }
        let first_type = (index % ObjectType::COUNT) as u16;
        let second_type = (index / ObjectType::COUNT) as u16;
        Some(Self(first_type | (second_type << 8)))
    }

    /// Returns the packed value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Low byte: the index of the second type in the pair.
    #[must_use]
    pub const fn low(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// High byte: the index of the first type in the pair.
    #[must_use]
    pub const fn high(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Unpacks the code into its ordered pair `(a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCollisionCode`] if either byte is not a
    /// valid type index.
    pub fn decode(self) -> Result<(ObjectType, ObjectType), ModelError> {
        let invalid = |_| ModelError::InvalidCollisionCode(self.0);
        let a = ObjectType::from_index(self.high()).map_err(invalid)?;
        let b = ObjectType::from_index(self.low()).map_err(invalid)?;
        Ok((a, b))
    }
}

impl TryFrom<u16> for CollisionCode {
    type Error = ModelError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        let code = Self(raw);
        code.decode()?;
        Ok(code)
    }
}

impl From<CollisionCode> for u16 {
    fn from(code: CollisionCode) -> Self {
        code.0
    }
}

impl fmt::UpperHex for CollisionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Display for CollisionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// One row of the ordered Cartesian product `ObjectType::ALL × ObjectType::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// Position in the enumeration, `0..CollisionPair::COUNT`.
    pub index: usize,
    /// Outer type; advances every `ObjectType::COUNT` rows.
    pub first: ObjectType,
    /// Inner type; advances every row.
    pub second: ObjectType,
    /// Packed code for this row.
    pub code: CollisionCode,
}

impl CollisionPair {
    /// Number of ordered pairs, repetition included.
    pub const COUNT: usize = ObjectType::COUNT * ObjectType::COUNT;

    /// Returns row `index`, or `None` if `index >= CollisionPair::COUNT`.
    #[must_use]
    pub fn at(index: usize) -> Option<Self> {
        let code = CollisionCode::from_pair_index(index)?;
        let first = *ObjectType::ALL.get(index / ObjectType::COUNT)?;
        let second = *ObjectType::ALL.get(index % ObjectType::COUNT)?;
        Some(Self {
            index,
            first,
            second,
            code,
        })
    }

    /// Iterates every row in enumeration order.
    pub fn all() -> impl Iterator<Item = CollisionPair> {
        (0..Self::COUNT).filter_map(Self::at)
    }

    /// Enum identifier for this row, e.g. `StaticClipCollision`.
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{}{}Collision", self.first, self.second)
    }

    /// Variant name without the `Collision` suffix, e.g. `StaticClip`.
    #[must_use]
    pub fn variant_name(&self) -> String {
        format!("{}{}", self.first, self.second)
    }

    /// True when both sides are the same immovable type.
    #[must_use]
    pub fn is_spatial_self_pair(&self) -> bool {
        self.first == self.second && self.first.is_spatial()
    }
}
