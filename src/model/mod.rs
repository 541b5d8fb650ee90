//src/model/mod.rs
pub mod elements;
pub mod geometry;
pub mod reaction;

// Re-exports for cleaner imports
pub use elements::{display_color, lookup, ElementCategory, ElementRecord};
pub use geometry::{GeometryAtom, MolecularGeometry};
pub use reaction::BalancedReaction;
