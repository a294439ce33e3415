//! MIME-based document classifier
//!
//! Delegates content sniffing to the `file` tool and maps the reported
//! MIME type onto the closed set of document types the strategies handle.

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;

use crate::errors::ExtractResult;
use crate::probe::Format;
use crate::runner::CommandRunner;

/// Closed set of document type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    /// PDF document
    Pdf,
    /// DjVu document
    Djvu,
    /// Zip-based container: .docx, .odt, .epub, plain .zip
    ZipContainer,
    /// Legacy binary .doc
    DocLegacy,
    /// Anything the strategies cannot handle
    Unknown,
}

impl DocumentType {
    /// The capability this type is gated on, if it is extractable at all
    pub fn format(&self) -> Option<Format> {
        match self {
            DocumentType::Pdf => Some(Format::Pdf),
            DocumentType::Djvu => Some(Format::Djvu),
            DocumentType::ZipContainer => Some(Format::EpubZip),
            DocumentType::DocLegacy => Some(Format::Doc),
            DocumentType::Unknown => None,
        }
    }
}

lazy_static! {
    /// MIME strings that map to a document type by exact match
    static ref EXACT_MIME: HashMap<&'static str, DocumentType> = {
        let mut table = HashMap::new();
        table.insert("application/pdf", DocumentType::Pdf);
        table.insert("image/vnd.djvu", DocumentType::Djvu);
        table.insert("application/epub+zip", DocumentType::ZipContainer);
        table.insert("application/zip", DocumentType::ZipContainer);
        table.insert("application/msword", DocumentType::DocLegacy);
        table
    };
}

/// Map a MIME string onto a document type tag
///
/// Exact matches are tried first, then the substring rules: anything
/// mentioning djvu is DjVu, and the opendocument/openxmlformats families
/// are zip containers whatever their exact subtype says.
pub fn map_mime(mime: &str) -> DocumentType {
    if let Some(doc_type) = EXACT_MIME.get(mime) {
        return *doc_type;
    }

    if mime.contains("djvu") {
        return DocumentType::Djvu;
    }

    if mime.contains("opendocument") || mime.contains("openxmlformats") {
        return DocumentType::ZipContainer;
    }

    DocumentType::Unknown
}

/// Classifies files by invoking a MIME detection tool on their content
pub struct MimeClassifier<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> MimeClassifier<'a> {
    /// Create a classifier using the given process runner
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        MimeClassifier { runner }
    }

    /// Classify the file at `path` by its content
    ///
    /// # Returns
    /// The resolved document type; files the `file` tool cannot describe
    /// come back as [`DocumentType::Unknown`]
    pub fn classify(&self, path: &Path) -> ExtractResult<DocumentType> {
        let path_str = path.to_string_lossy();
        let output = self
            .runner
            .run("file", &["--brief", "--mime-type", path_str.as_ref()])?;

        // The tool terminates its single output line with a newline
        let mime = output.stdout.trim_end();
        let doc_type = map_mime(mime);
        debug!("Classified {} as {:?} (mime: {})", path.display(), doc_type, mime);

        Ok(doc_type)
    }
}
