//! # Raster Rendering
//!
//! Rasterization for the editing surface. The compilers never call into
//! this module — printer languages carry their own barcode commands — but
//! the editor keeps an on-canvas preview image of every barcode element in
//! sync with its data, symbology and show-text flag.

pub mod barcode;
