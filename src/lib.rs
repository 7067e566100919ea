//! # Sello - Styled QR Code Rendering
//!
//! Sello is a Rust library for turning text into styled QR code images.
//! It provides:
//!
//! - **Encoding**: content to module matrix at a chosen error correction level
//! - **Styled rendering**: square, rounded or circular modules in any color pair
//! - **Logo overlay**: a centered, padded logo tile composited onto the symbol
//! - **Preview fitting**: downscale-only sizing for display surfaces
//! - **Sessions**: a debounced regeneration loop for interactive shells
//!
//! ## Quick Start
//!
//! ```no_run
//! use sello::{encode, export, render};
//! use sello::style::{EcLevel, ModuleShape, StyleConfig};
//!
//! // Encode content at a high correction level
//! let style = StyleConfig::new()
//!     .error_correction(EcLevel::H)
//!     .shape(ModuleShape::Rounded);
//! let matrix = encode::encode("https://example.com", style.error_correction)?;
//!
//! // Render at export resolution and save
//! let image = render::render_export(&matrix, &style)?;
//! export::save_image(&image, std::path::Path::new("qr.png"))?;
//!
//! # Ok::<(), sello::error::SelloError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`encode`] | Content to module matrix |
//! | [`render`] | Styled rasterization, logo overlay, preview fitting |
//! | [`session`] | Debounced regeneration state machine |
//! | [`settings`] | User preference persistence |
//! | [`export`] | PNG/JPEG file output |
//! | [`style`] | Shapes, levels and colors |
//! | [`error`] | Error types |
//!
//! ## Interactive Use
//!
//! Shells with a text field and style controls should drive a
//! [`session::Session`] instead of calling the pipeline directly: it
//! debounces keystrokes, coalesces redundant triggers, keeps the last
//! good preview across failures and defers fitting until the display
//! surface has a real size.

pub mod color;
pub mod encode;
pub mod error;
pub mod export;
pub mod render;
pub mod session;
pub mod settings;
pub mod style;

// Re-exports for convenience
pub use color::Color;
pub use error::SelloError;
pub use session::Session;
pub use style::{EcLevel, ModuleShape, StyleConfig};
