//! # Brickset Domain
//!
//! LEGO set records and the queries run over them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - LegoSet, PackagingType                       ││
//! │  │  repository/ - LegoSetRepository (aggregation queries)      ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! │                              │                                   │
//! │                  repository::Repository<LegoSet>                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every query is a pure computation over the snapshot loaded when the
//! repository was constructed.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use crate::model::{
    lego_set::LegoSet,
    packaging_type::{PackagingType, UnknownPackagingType},
};

pub use crate::repository::lego_set_repository::{DistinctTags, LegoSetRepository};
