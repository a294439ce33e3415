//! Tests for the MIME classifier

use std::path::Path;

use crate::classify::{map_mime, DocumentType, MimeClassifier};
use crate::runner::{RunOutput, ScriptedRunner};

#[test]
fn test_exact_mime_table() {
    assert_eq!(map_mime("application/pdf"), DocumentType::Pdf);
    assert_eq!(map_mime("image/vnd.djvu"), DocumentType::Djvu);
    assert_eq!(map_mime("application/epub+zip"), DocumentType::ZipContainer);
    assert_eq!(map_mime("application/zip"), DocumentType::ZipContainer);
    assert_eq!(map_mime("application/msword"), DocumentType::DocLegacy);
}

#[test]
fn test_substring_rules() {
    assert_eq!(map_mime("image/x-djvu"), DocumentType::Djvu);
    assert_eq!(
        map_mime("application/vnd.oasis.opendocument.text"),
        DocumentType::ZipContainer
    );
    assert_eq!(
        map_mime("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        DocumentType::ZipContainer
    );
    assert_eq!(
        map_mime("application/vnd.oasis.opendocument.spreadsheet"),
        DocumentType::ZipContainer
    );
}

#[test]
fn test_unmapped_mime_is_unknown() {
    assert_eq!(map_mime("text/plain"), DocumentType::Unknown);
    assert_eq!(map_mime("image/png"), DocumentType::Unknown);
    assert_eq!(map_mime("application/x-pdf"), DocumentType::Unknown);
    assert_eq!(map_mime(""), DocumentType::Unknown);
}

#[test]
fn test_classify_strips_trailing_newline() {
    let runner = ScriptedRunner::new()
        .on("file", |_| RunOutput::with_stdout(0, "application/pdf\n"));
    let classifier = MimeClassifier::new(&runner);

    let doc_type = classifier.classify(Path::new("report.pdf")).unwrap();
    assert_eq!(doc_type, DocumentType::Pdf);
}

#[test]
fn test_classify_invokes_file_on_content() {
    let runner = ScriptedRunner::new()
        .on("file", |_| RunOutput::with_stdout(0, "image/vnd.djvu\n"));
    let classifier = MimeClassifier::new(&runner);

    classifier.classify(Path::new("scan.pdf")).unwrap();

    let calls = runner.calls_to("file");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args, vec!["--brief", "--mime-type", "scan.pdf"]);
}

#[test]
fn test_classify_without_file_tool_is_unknown() {
    let runner = ScriptedRunner::new();
    let classifier = MimeClassifier::new(&runner);

    let doc_type = classifier.classify(Path::new("anything.bin")).unwrap();
    assert_eq!(doc_type, DocumentType::Unknown);
}

#[test]
fn test_capability_gating_map() {
    use crate::probe::Format;

    assert_eq!(DocumentType::Pdf.format(), Some(Format::Pdf));
    assert_eq!(DocumentType::Djvu.format(), Some(Format::Djvu));
    assert_eq!(DocumentType::ZipContainer.format(), Some(Format::EpubZip));
    assert_eq!(DocumentType::DocLegacy.format(), Some(Format::Doc));
    assert_eq!(DocumentType::Unknown.format(), None);
}
