//! Dependency prober
//!
//! Runs one bounded health-check invocation per external tool and turns the
//! observed exit codes into a capability set. The expected codes are the
//! "help/usage" exit codes of the checked tool versions, not success codes:
//! `ddjvu --help` exits 1 and `djvused --help` exits 10 when the tools are
//! present and behave as expected.

use log::{info, warn};

use crate::errors::ExtractResult;
use crate::runner::CommandRunner;

use super::capability::{CapabilitySet, Format};

/// What exit behavior marks a tool as present
enum Expectation {
    /// The tool must exit with exactly this code
    ExitCode(i32),
    /// Any exit counts, only "command not found" fails
    AnyExit,
}

/// One external-tool health check
struct ProbeCheck {
    program: &'static str,
    args: &'static [&'static str],
    expectation: Expectation,
    /// Formats that become unavailable when this check fails
    affects: &'static [Format],
    install_hint: &'static str,
}

static PROBE_CHECKS: &[ProbeCheck] = &[
    ProbeCheck {
        program: "ddjvu",
        args: &["--help"],
        expectation: Expectation::ExitCode(1),
        affects: &[Format::Djvu],
        install_hint: "Make sure to install djvulibre or djvulibre-bin package",
    },
    ProbeCheck {
        program: "djvused",
        args: &["--help"],
        expectation: Expectation::ExitCode(10),
        affects: &[Format::Djvu],
        install_hint: "Make sure to install djvulibre or djvulibre-bin package",
    },
    ProbeCheck {
        program: "soffice",
        args: &["--version"],
        expectation: Expectation::ExitCode(0),
        affects: &[Format::Doc, Format::EpubZip],
        install_hint: "Make sure to install libreoffice package",
    },
    ProbeCheck {
        program: "pdfimages",
        args: &["-v"],
        expectation: Expectation::ExitCode(0),
        affects: &[Format::Pdf],
        install_hint: "Make sure to install poppler-utils",
    },
    ProbeCheck {
        program: "unzip",
        args: &[],
        expectation: Expectation::AnyExit,
        affects: &[Format::Doc, Format::EpubZip],
        install_hint: "Make sure to install unzip package",
    },
];

/// Overall outcome of a probe run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Every checked tool is present
    AllFound,
    /// Some tools are present, some formats will be unavailable
    Partial,
    /// Nothing usable is installed
    NoneFound,
}

/// Result of probing the environment
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// Capability flags derived from the checks
    pub capabilities: CapabilitySet,
    /// Number of tools found present
    pub found: usize,
    /// Number of tools checked
    pub total: usize,
    /// Human-readable warnings for checks that did not pass
    pub warnings: Vec<String>,
}

impl ProbeReport {
    /// Classify the report into the three outcomes the caller acts on
    pub fn outcome(&self) -> ProbeOutcome {
        if self.found == 0 {
            ProbeOutcome::NoneFound
        } else if self.found < self.total {
            ProbeOutcome::Partial
        } else {
            ProbeOutcome::AllFound
        }
    }
}

/// Probes the environment for the external tools the strategies need
pub struct DependencyProber<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> DependencyProber<'a> {
    /// Create a prober using the given process runner
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        DependencyProber { runner }
    }

    /// Run every health check and derive the capability set
    ///
    /// Emits one log line per check and a final found/total summary.
    /// Never fails: a check that cannot even be spawned is treated the
    /// same as a failing tool and only disables its formats.
    pub fn probe(&self) -> ExtractResult<ProbeReport> {
        info!("Checking dependencies...");

        let mut capabilities = CapabilitySet::all_enabled();
        let mut found = 0;
        let mut warnings = Vec::new();

        for check in PROBE_CHECKS {
            match self.run_check(check) {
                CheckResult::Found => {
                    info!("Found: {}", check.program);
                    found += 1;
                }
                CheckResult::Missing => {
                    let msg = format!("Command not found: {}. {}", check.program, check.install_hint);
                    warn!("{}", msg);
                    warnings.push(msg);
                    for format in check.affects {
                        capabilities = capabilities.without(*format);
                    }
                }
                CheckResult::Unexpected(code, expected) => {
                    let msg = format!(
                        "Unexpected exitcode ({}), expected {} from {} {}",
                        code,
                        expected,
                        check.program,
                        check.args.join(" ")
                    );
                    warn!("{}", msg);
                    warnings.push(msg);
                    for format in check.affects {
                        capabilities = capabilities.without(*format);
                    }
                }
            }
        }

        info!("Dependencies: {}/{}", found, PROBE_CHECKS.len());

        Ok(ProbeReport {
            capabilities,
            found,
            total: PROBE_CHECKS.len(),
            warnings,
        })
    }

    fn run_check(&self, check: &ProbeCheck) -> CheckResult {
        let output = match self.runner.run(check.program, check.args) {
            Ok(output) => output,
            // Spawn failures other than NotFound are rare; treat them
            // as a missing tool rather than aborting the probe.
            Err(_) => return CheckResult::Missing,
        };

        if output.is_not_found() {
            return CheckResult::Missing;
        }

        match check.expectation {
            Expectation::AnyExit => CheckResult::Found,
            Expectation::ExitCode(expected) => match output.code() {
                Some(code) if code == expected => CheckResult::Found,
                Some(code) => CheckResult::Unexpected(code, expected),
                None => CheckResult::Missing,
            },
        }
    }
}

enum CheckResult {
    Found,
    Missing,
    Unexpected(i32, i32),
}
