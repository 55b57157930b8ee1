//! # Preview Transport
//!
//! Fire-and-forget HTTP GET against a third-party label rendering service.
//! The compiled program travels percent-encoded in the URL path (built by
//! the backend's `preview_url`); there is no request body and the response
//! is discarded — rendering happens out of process, so the caller has
//! nothing to await.

use crate::error::EtiquetaError;

/// Send a rendering request for an already-built preview URL.
///
/// Only transport-level failures (DNS, connection refused) surface as
/// errors; the response status and body are ignored.
pub fn open(url: &str) -> Result<(), EtiquetaError> {
    reqwest::blocking::get(url)?;
    Ok(())
}
