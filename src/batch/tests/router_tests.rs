//! Tests for the batch dispatcher

use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::BatchRouter;
use crate::errors::ExtractError;
use crate::probe::{CapabilitySet, Format};
use crate::runner::{RunOutput, ScriptedRunner};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("imagesieve_router_{}_{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Creates an input file and returns its path
fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"stub").unwrap();
    path
}

/// Classifier responder mapping content type from the path suffix
///
/// Content sniffing is faked by file name here purely because the scripted
/// `file` tool needs something to key on; the router itself never looks at
/// extensions.
fn mime_by_suffix(args: &[&str]) -> RunOutput {
    let path = args[2];
    let mime = if path.ends_with(".pdf") {
        "application/pdf"
    } else if path.ends_with(".djvu") {
        "image/vnd.djvu"
    } else if path.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if path.ends_with(".doc") {
        "application/msword"
    } else {
        "text/plain"
    };
    RunOutput::with_stdout(0, &format!("{}\n", mime))
}

/// Runner where every strategy tool succeeds without writing anything
fn quiet_tools() -> ScriptedRunner {
    ScriptedRunner::new()
        .on("file", mime_by_suffix)
        .on("pdfimages", |_| RunOutput::exit(0))
        .on("unzip", |_| RunOutput::exit(0))
        .on("soffice", |_| RunOutput::exit(0))
        .on("djvused", |_| RunOutput::with_stdout(0, "0\n"))
}

#[test]
fn test_empty_batch_is_a_validation_failure() {
    let runner = quiet_tools();
    let caps = CapabilitySet::all_enabled();
    let router = BatchRouter::new(&runner, &caps);

    let result = router.process(&[], Path::new("/tmp/out"));
    assert!(matches!(result, Err(ExtractError::EmptyBatch)));
}

#[test]
fn test_missing_output_root_is_a_validation_failure() {
    let runner = quiet_tools();
    let caps = CapabilitySet::all_enabled();
    let router = BatchRouter::new(&runner, &caps);

    let result = router.process(&[PathBuf::from("a.pdf")], Path::new(""));
    assert!(matches!(result, Err(ExtractError::MissingOutputRoot)));
}

#[test]
fn test_attempt_count_is_predictable() {
    let root = scratch_dir("attempts");
    let out = root.join("out");

    let pdf = touch(&root, "report.pdf");
    let txt = touch(&root, "readme.txt");
    let missing = root.join("ghost.pdf");

    let runner = quiet_tools();
    let caps = CapabilitySet::all_enabled();
    let router = BatchRouter::new(&runner, &caps);

    let report = router.process(&[pdf, txt, missing], &out).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.attempted, 1);
    assert_eq!(report.skipped_unsupported, 1);
    assert_eq!(report.skipped_missing, 1);
    assert_eq!(report.failed, 0);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_disabled_capability_skips_file_without_output_folder() {
    let root = scratch_dir("gating");
    let out = root.join("out");

    let pdf = touch(&root, "report.pdf");
    let docx = touch(&root, "notes.docx");

    let runner = ScriptedRunner::new()
        .on("file", mime_by_suffix)
        .on("unzip", |args| {
            let pos = args.iter().position(|a| *a == "-d").unwrap();
            fs::write(Path::new(args[pos + 1]).join("pic.png"), b"x").unwrap();
            RunOutput::exit(0)
        });
    let caps = CapabilitySet::all_enabled().without(Format::Pdf);
    let router = BatchRouter::new(&runner, &caps);

    let report = router.process(&[pdf, docx], &out).unwrap();

    assert_eq!(report.attempted, 1);
    assert_eq!(report.skipped_unsupported, 1);
    assert!(out.join("notes").join("pic.png").is_file());
    assert!(!out.join("report").exists());
    // The PDF tool was never even invoked
    assert!(runner.calls_to("pdfimages").is_empty());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_one_bad_file_does_not_abort_the_batch() {
    let root = scratch_dir("isolation");
    let out = root.join("out");

    let bad = touch(&root, "broken.djvu");
    let good = touch(&root, "notes.docx");

    // djvused cannot determine a page count, so the DjVu job fails
    let runner = ScriptedRunner::new()
        .on("file", mime_by_suffix)
        .on("djvused", |_| RunOutput::with_stdout(0, "0\n"))
        .on("unzip", |_| RunOutput::exit(0));
    let caps = CapabilitySet::all_enabled();
    let router = BatchRouter::new(&runner, &caps);

    let report = router.process(&[bad, good], &out).unwrap();

    assert_eq!(report.attempted, 2);
    assert_eq!(report.failed, 1);
    // The second job still ran
    assert_eq!(runner.calls_to("unzip").len(), 1);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_stem_collisions_get_numeric_suffixes() {
    let root = scratch_dir("collisions");
    let out = root.join("out");

    let sub_a = root.join("a");
    let sub_b = root.join("b");
    fs::create_dir_all(&sub_a).unwrap();
    fs::create_dir_all(&sub_b).unwrap();
    let first = touch(&sub_a, "report.pdf");
    let second = touch(&sub_b, "report.pdf");

    let runner = ScriptedRunner::new()
        .on("file", mime_by_suffix)
        .on("pdfimages", |args| {
            fs::write(format!("{}-000.png", args[2]), b"x").unwrap();
            RunOutput::exit(0)
        });
    let caps = CapabilitySet::all_enabled();
    let router = BatchRouter::new(&runner, &caps);

    let report = router.process(&[first, second], &out).unwrap();

    assert_eq!(report.attempted, 2);
    assert!(out.join("report").join("img-000.png").is_file());
    assert!(out.join("report_2").join("img-000.png").is_file());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_inputs_are_processed_in_order() {
    let root = scratch_dir("ordering");
    let out = root.join("out");

    let first = touch(&root, "one.pdf");
    let second = touch(&root, "two.pdf");

    let runner = quiet_tools();
    let caps = CapabilitySet::all_enabled();
    let router = BatchRouter::new(&runner, &caps);

    router.process(&[first.clone(), second.clone()], &out).unwrap();

    let calls = runner.calls_to("pdfimages");
    assert_eq!(calls.len(), 2);
    assert!(calls[0].args[1].ends_with("one.pdf"));
    assert!(calls[1].args[1].ends_with("two.pdf"));

    let _ = fs::remove_dir_all(&root);
}
