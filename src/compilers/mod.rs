//! # Compiler Registry
//!
//! Catalogue of pluggable printer-language backends. Each backend implements
//! the fixed [`Compiler`] capability surface — metadata, `compile`, and an
//! optional preview URL — and knows nothing about the other backends.
//!
//! The registry is composed once at startup via [`Registry::standard`]; it
//! is the only place new printer languages are added. Backends are
//! independent code generators that share the element model and the
//! orientation normalizer but emit their own syntax.
//!
//! ## Example
//!
//! ```
//! use etiqueta::compilers::Registry;
//! use etiqueta::label::{Element, TextElement, ElementMeta};
//!
//! let registry = Registry::standard();
//! let elements = vec![Element::Text(TextElement::editor_default())];
//! let zpl = registry.compile("ZPL", &elements).unwrap();
//! assert!(zpl.starts_with("^XA"));
//! ```

mod epl;
mod ppla;
mod pplb;
mod zpl;

pub use epl::Epl;
pub use ppla::Ppla;
pub use pplb::Pplb;
pub use zpl::Zpl;

use crate::error::EtiquetaError;
use crate::label::Element;
use crate::preview;

/// Descriptive metadata for a registered printer language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Registry key, e.g. `"ZPL"`.
    pub id: &'static str,
    /// Display name, e.g. `"Zebra ZPL"`.
    pub name: &'static str,
    pub description: &'static str,
    pub manufacturer: &'static str,
    /// Suggested extension for exported program files.
    pub file_extension: &'static str,
}

/// Capability interface every language backend implements.
///
/// `compile` is a pure function of the element list: one pass in list order
/// (insertion order is print order on the physical label), one program
/// fragment per element, fixed header and footer. An element the backend
/// cannot express is omitted silently and compilation continues — a
/// deliberate best-effort policy, not an error.
pub trait Compiler {
    /// Language metadata for catalogue listings.
    fn info(&self) -> &LanguageInfo;

    /// Compile an ordered element list to program text.
    fn compile(&self, elements: &[Element]) -> String;

    /// Rendering-service URL for a compiled program, if the backend has a
    /// preview capability. `None` means previews are unsupported.
    fn preview_url(&self, _code: &str) -> Option<String> {
        None
    }
}

/// The backend catalogue.
///
/// Dispatches `compile`/`preview` by language id and answers catalogue
/// queries. Not mutated after startup composition.
pub struct Registry {
    backends: Vec<Box<dyn Compiler>>,
}

impl Registry {
    /// An empty registry, for custom composition.
    pub fn new() -> Self {
        Registry { backends: Vec::new() }
    }

    /// The standard catalogue: ZPL, PPLA, PPLB and EPL.
    pub fn standard() -> Self {
        let mut registry = Registry::new();
        registry.register(Box::new(Zpl));
        registry.register(Box::new(Ppla));
        registry.register(Box::new(Pplb));
        registry.register(Box::new(Epl));
        registry
    }

    /// Add a backend to the catalogue. Intended for startup composition.
    pub fn register(&mut self, backend: Box<dyn Compiler>) {
        self.backends.push(backend);
    }

    /// Metadata for every registered language, in registration order.
    pub fn languages(&self) -> Vec<&LanguageInfo> {
        self.backends.iter().map(|b| b.info()).collect()
    }

    fn backend(&self, id: &str) -> Result<&dyn Compiler, EtiquetaError> {
        self.backends
            .iter()
            .map(|b| b.as_ref())
            .find(|b| b.info().id == id)
            .ok_or_else(|| EtiquetaError::UnknownLanguage(id.to_string()))
    }

    /// Compile `elements` with the backend registered under `id`.
    pub fn compile(&self, id: &str, elements: &[Element]) -> Result<String, EtiquetaError> {
        Ok(self.backend(id)?.compile(elements))
    }

    /// Open a rendering preview for already-compiled program text.
    ///
    /// Fire-and-forget: the request is sent and the response discarded.
    /// Fails with [`EtiquetaError::UnknownLanguage`] for unregistered ids and
    /// [`EtiquetaError::PreviewUnsupported`] when the backend declares no
    /// preview capability.
    pub fn preview(&self, id: &str, code: &str) -> Result<(), EtiquetaError> {
        let backend = self.backend(id)?;
        match backend.preview_url(code) {
            Some(url) => preview::open(&url),
            None => Err(EtiquetaError::PreviewUnsupported(
                backend.info().name.to_string(),
            )),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::standard()
    }
}
