//! Tests for the dependency prober

use crate::probe::{DependencyProber, Format, ProbeOutcome};
use crate::runner::{RunOutput, ScriptedRunner};

fn healthy_runner() -> ScriptedRunner {
    ScriptedRunner::new()
        .on("ddjvu", |_| RunOutput::exit(1))
        .on("djvused", |_| RunOutput::exit(10))
        .on("soffice", |_| RunOutput::exit(0))
        .on("pdfimages", |_| RunOutput::exit(0))
        .on("unzip", |_| RunOutput::exit(11))
}

#[test]
fn test_all_tools_present() {
    let runner = healthy_runner();
    let report = DependencyProber::new(&runner).probe().unwrap();

    assert_eq!(report.found, 5);
    assert_eq!(report.total, 5);
    assert_eq!(report.outcome(), ProbeOutcome::AllFound);
    assert!(report.warnings.is_empty());
    assert!(report.capabilities.supports(Format::Pdf));
    assert!(report.capabilities.supports(Format::Djvu));
    assert!(report.capabilities.supports(Format::Doc));
    assert!(report.capabilities.supports(Format::EpubZip));
}

#[test]
fn test_missing_tool_disables_format() {
    // No responder for pdfimages, so it behaves as not installed
    let runner = ScriptedRunner::new()
        .on("ddjvu", |_| RunOutput::exit(1))
        .on("djvused", |_| RunOutput::exit(10))
        .on("soffice", |_| RunOutput::exit(0))
        .on("unzip", |_| RunOutput::exit(0));
    let report = DependencyProber::new(&runner).probe().unwrap();

    assert_eq!(report.found, 4);
    assert_eq!(report.outcome(), ProbeOutcome::Partial);
    assert!(!report.capabilities.supports(Format::Pdf));
    assert!(report.capabilities.supports(Format::Djvu));
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("pdfimages"));
    assert!(report.warnings[0].contains("poppler-utils"));
}

#[test]
fn test_unexpected_exit_code_disables_dependent_formats() {
    // soffice answers but with the wrong code, which takes down both the
    // legacy doc path and the zip-container path
    let runner = healthy_runner().on("soffice", |_| RunOutput::exit(77));
    let report = DependencyProber::new(&runner).probe().unwrap();

    assert_eq!(report.found, 4);
    assert!(!report.capabilities.supports(Format::Doc));
    assert!(!report.capabilities.supports(Format::EpubZip));
    assert!(report.capabilities.supports(Format::Pdf));
    assert!(report.warnings[0].contains("Unexpected exitcode (77)"));
    assert!(report.warnings[0].contains("expected 0"));
}

#[test]
fn test_help_exit_codes_are_the_expected_signal() {
    // ddjvu exiting 0 from --help is NOT the expected behavior
    let runner = healthy_runner().on("ddjvu", |_| RunOutput::exit(0));
    let report = DependencyProber::new(&runner).probe().unwrap();

    assert_eq!(report.found, 4);
    assert!(!report.capabilities.supports(Format::Djvu));
}

#[test]
fn test_unzip_accepts_any_exit_code() {
    let runner = healthy_runner().on("unzip", |_| RunOutput::exit(10));
    let report = DependencyProber::new(&runner).probe().unwrap();

    assert_eq!(report.found, 5);
    assert!(report.capabilities.supports(Format::EpubZip));
}

#[test]
fn test_nothing_installed() {
    let runner = ScriptedRunner::new();
    let report = DependencyProber::new(&runner).probe().unwrap();

    assert_eq!(report.found, 0);
    assert_eq!(report.outcome(), ProbeOutcome::NoneFound);
    assert!(!report.capabilities.any());
    assert_eq!(report.warnings.len(), 5);
}

#[test]
fn test_probe_invocation_shapes() {
    let runner = healthy_runner();
    DependencyProber::new(&runner).probe().unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[0].program, "ddjvu");
    assert_eq!(calls[0].args, vec!["--help"]);
    assert_eq!(calls[1].program, "djvused");
    assert_eq!(calls[1].args, vec!["--help"]);
    assert_eq!(calls[2].program, "soffice");
    assert_eq!(calls[2].args, vec!["--version"]);
    assert_eq!(calls[3].program, "pdfimages");
    assert_eq!(calls[3].args, vec!["-v"]);
    assert_eq!(calls[4].program, "unzip");
    assert!(calls[4].args.is_empty());
}
