//! # Etiqueta - Label Compiler Library
//!
//! Etiqueta compiles a device-independent model of placed label elements
//! (text, barcode, box, line) into thermal label printer languages, and
//! decodes legacy PPLA programs back into that same model. It provides:
//!
//! - **Four language backends**: ZPL (Zebra), PPLA/PPLB (Argox), EPL (Eltron)
//! - **A compiler registry**: uniform compile/preview dispatch by language id
//! - **A legacy importer**: lenient fixed-width PPLA decoding plus canvas
//!   dimension estimation
//! - **Barcode rasterization**: on-canvas preview images for barcode elements
//!
//! ## Quick Start
//!
//! ```
//! use etiqueta::compilers::Registry;
//! use etiqueta::label::{Element, TextElement};
//!
//! let registry = Registry::standard();
//!
//! let elements = vec![Element::Text(TextElement {
//!     x: 50.0,
//!     y: 50.0,
//!     rotation: 0.0,
//!     content: "TEXTO".to_string(),
//!     font_size: 25,
//!     scale_x: 1.0,
//!     scale_y: 1.0,
//! })];
//!
//! let zpl = registry.compile("ZPL", &elements)?;
//! assert_eq!(zpl, "^XA\n^MNY\n^FO50,50^A0N,25,25^FDTEXTO^FS\n^XZ");
//!
//! # Ok::<(), etiqueta::error::EtiquetaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`label`] | Canonical element model and orientation normalizer |
//! | [`compilers`] | Backend registry and the four code generators |
//! | [`import`] | Legacy PPLA decoder and dimension estimator |
//! | [`render`] | Barcode raster previews |
//! | [`preview`] | Rendering-service HTTP transport |
//! | [`error`] | Error types |
//!
//! ## Design Notes
//!
//! Everything is a pure, synchronous function over immutable input: no
//! state is held between calls, so the library is trivially safe to use
//! from multiple threads. The single side-effecting operation is
//! `Registry::preview`, a fire-and-forget HTTP GET.

pub mod compilers;
pub mod error;
pub mod import;
pub mod label;
pub mod preview;
pub mod render;

// Re-exports for convenience
pub use compilers::Registry;
pub use error::EtiquetaError;
pub use label::{Element, LabelConfig, Project};
