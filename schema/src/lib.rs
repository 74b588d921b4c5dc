// Creature Combat Schema - Shared type definitions
// This crate contains the plain-data enums and structs shared between the
// battle engine and anything that feeds it (data files, snapshots, UIs),
// enabling the use of postcard for efficient serialization.

// Re-export the main types
pub use element::*;
pub use move_data::*;
pub use species_data::*;

pub mod element;
pub mod move_data;
pub mod species_data;
