//! ChemLab visualization core.
//!
//! Renders either a supplied molecule geometry or a Bohr-model atom
//! (electron shells + packed nucleon cluster) through a simple perspective
//! projection onto two cairo surfaces: a sharp pass and a blurred glow pass
//! composited beneath it. Chemistry reasoning (equation balancing, molecular
//! geometry) is delegated to an external generative API via `services`.

pub mod config;
pub mod driver;
pub mod model;
pub mod rendering;
pub mod services;
pub mod utils;

pub use config::RenderStyle;
pub use driver::{AnimationDriver, DriverState, FrameParams, TickHandle};
pub use model::geometry::MolecularGeometry;
pub use rendering::scene::{ElementModel, RenderTarget};
