//! Per-format capability flags

use std::fmt;

/// Document format families the extractor can be capable of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// PDF documents, served by the PDF image dump tool
    Pdf,
    /// DjVu documents, served by the DjVu tool family
    Djvu,
    /// Legacy binary .doc, served by the office suite plus the archive tool
    Doc,
    /// Zip-based containers (.docx, .odt, .epub), served by the archive tool
    EpubZip,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Pdf => write!(f, "pdf"),
            Format::Djvu => write!(f, "djvu"),
            Format::Doc => write!(f, "doc"),
            Format::EpubZip => write!(f, "epub_zip"),
        }
    }
}

/// Immutable set of per-format capability flags
///
/// Built once by the prober at startup and then only read. The router
/// consults it to decide which classified files it may dispatch; strategies
/// never touch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    pdf: bool,
    djvu: bool,
    doc: bool,
    epub_zip: bool,
}

impl CapabilitySet {
    /// A set with every format enabled, the prober's starting point
    pub fn all_enabled() -> Self {
        CapabilitySet {
            pdf: true,
            djvu: true,
            doc: true,
            epub_zip: true,
        }
    }

    /// Whether the given format is supported
    pub fn supports(&self, format: Format) -> bool {
        match format {
            Format::Pdf => self.pdf,
            Format::Djvu => self.djvu,
            Format::Doc => self.doc,
            Format::EpubZip => self.epub_zip,
        }
    }

    /// Return a copy with one format disabled
    ///
    /// Used by the prober while deriving the final set, and by tests to
    /// build arbitrary capability combinations.
    pub fn without(&self, format: Format) -> Self {
        let mut set = self.clone();
        match format {
            Format::Pdf => set.pdf = false,
            Format::Djvu => set.djvu = false,
            Format::Doc => set.doc = false,
            Format::EpubZip => set.epub_zip = false,
        }
        set
    }

    /// True when at least one format is still supported
    pub fn any(&self) -> bool {
        self.pdf || self.djvu || self.doc || self.epub_zip
    }
}
