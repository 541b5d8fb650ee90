pub mod blur;
pub mod export;
pub mod nucleus;
pub mod painter;
pub mod projection;
pub mod scene;
pub mod shells;

// Re-export specific items to keep the API clean for the rest of the app
pub use export::{export_png, render_composite};
pub use painter::{render_frame, RenderPass};
pub use projection::{project, Projected};
