use catalog_core::config::{AppConfig, LoadOptions};
use catalog_core::{CatalogProvider, ProductQuery, StaticCatalog, ValidationResult};
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool, options: LoadOptions) -> CommandResult {
    let report = build_report(options);
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { 1 };

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report(options: LoadOptions) -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(options) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.extend(check_catalog(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            for name in ["catalog_load", "query_contract"] {
                checks.push(DoctorCheck {
                    name,
                    status: CheckStatus::Skipped,
                    details: "skipped because configuration did not load".to_string(),
                });
            }
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_catalog(config: &AppConfig) -> Vec<DoctorCheck> {
    let catalog = match StaticCatalog::load(config.catalog.seed_path.as_deref()) {
        Ok(catalog) if catalog.is_empty() => {
            return vec![
                DoctorCheck {
                    name: "catalog_load",
                    status: CheckStatus::Fail,
                    details: "catalog loaded but has no entries".to_string(),
                },
                skipped_contract_check(),
            ];
        }
        Ok(catalog) => catalog,
        Err(error) => {
            return vec![
                DoctorCheck {
                    name: "catalog_load",
                    status: CheckStatus::Fail,
                    details: error.to_string(),
                },
                skipped_contract_check(),
            ];
        }
    };

    vec![
        DoctorCheck {
            name: "catalog_load",
            status: CheckStatus::Pass,
            details: format!("{} catalog entries loaded", catalog.entries().len()),
        },
        check_query_contract(),
    ]
}

// An unconstrained query must be refused; anything else means the validator is miswired.
fn check_query_contract() -> DoctorCheck {
    match catalog_core::validate_query(&ProductQuery::default()) {
        ValidationResult::Rejected(rejection) => DoctorCheck {
            name: "query_contract",
            status: CheckStatus::Pass,
            details: format!("empty query rejected with `{rejection}`"),
        },
        ValidationResult::Accepted => DoctorCheck {
            name: "query_contract",
            status: CheckStatus::Fail,
            details: "empty query was accepted".to_string(),
        },
    }
}

fn skipped_contract_check() -> DoctorCheck {
    DoctorCheck {
        name: "query_contract",
        status: CheckStatus::Skipped,
        details: "skipped because the catalog did not load".to_string(),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
