//! PackagingType - How a set is packaged
//!
//! PackagingType is a Value Object - two values with the same variant are equal.

use serde::{Deserialize, Serialize};

/// Packaging categories used by the Brickset dataset
///
/// Serialized as the dataset's SCREAMING_SNAKE_CASE codes (`BLISTER_PACK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackagingType {
    Box,
    BlisterPack,
    Bag,
    Bucket,
    Canister,
    FoilPack,
    Polybag,
}

impl PackagingType {
    /// Code as it appears in the dataset
    pub fn code(&self) -> &'static str {
        match self {
            PackagingType::Box => "BOX",
            PackagingType::BlisterPack => "BLISTER_PACK",
            PackagingType::Bag => "BAG",
            PackagingType::Bucket => "BUCKET",
            PackagingType::Canister => "CANISTER",
            PackagingType::FoilPack => "FOIL_PACK",
            PackagingType::Polybag => "POLYBAG",
        }
    }

    /// Get the display name of this packaging type
    pub fn display_name(&self) -> &'static str {
        match self {
            PackagingType::Box => "Box",
            PackagingType::BlisterPack => "Blister pack",
            PackagingType::Bag => "Bag",
            PackagingType::Bucket => "Bucket",
            PackagingType::Canister => "Canister",
            PackagingType::FoilPack => "Foil pack",
            PackagingType::Polybag => "Polybag",
        }
    }

    /// Get all packaging types (useful for iteration)
    pub fn all() -> &'static [PackagingType] {
        &[
            PackagingType::Box,
            PackagingType::BlisterPack,
            PackagingType::Bag,
            PackagingType::Bucket,
            PackagingType::Canister,
            PackagingType::FoilPack,
            PackagingType::Polybag,
        ]
    }
}

impl core::fmt::Display for PackagingType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when parsing an unrecognised packaging code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPackagingType(pub String);

impl core::fmt::Display for UnknownPackagingType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let known: Vec<&str> = PackagingType::all().iter().map(|p| p.code()).collect();
        write!(
            f,
            "Unknown packaging type '{}'. Known types: {}",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownPackagingType {}

impl core::str::FromStr for PackagingType {
    type Err = UnknownPackagingType;

    /// Accepts `BLISTER_PACK`, `blister_pack` and `blister-pack`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        PackagingType::all()
            .iter()
            .copied()
            .find(|p| p.code() == normalized)
            .ok_or_else(|| UnknownPackagingType(s.to_string()))
    }
}
