//! # Error Types
//!
//! This module defines error types used throughout the etiqueta library.
//!
//! Compilation never fails for a well-formed element list, and the legacy
//! PPLA decoder never fails at all (malformed lines are skipped and returned
//! as diagnostics). The errors here cover the registry boundary (unknown
//! language, missing preview capability) and the outer surfaces (preview
//! transport, barcode rasterization, project files).

use thiserror::Error;

/// Main error type for etiqueta operations
#[derive(Debug, Error)]
pub enum EtiquetaError {
    /// Requested printer language is not in the registry
    #[error("Unknown printer language: {0}")]
    UnknownLanguage(String),

    /// Backend exists but declares no preview capability.
    /// Non-fatal: surfaced to the user as a notice.
    #[error("Preview not available for {0}")]
    PreviewUnsupported(String),

    /// Preview transport failure (HTTP request to the rendering service)
    #[error("Preview request failed: {0}")]
    Preview(#[from] reqwest::Error),

    /// Barcode rasterization error (data invalid for the symbology)
    #[error("Barcode error: {0}")]
    Barcode(String),

    /// Project file serialization/deserialization error
    #[error("Project error: {0}")]
    Project(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
