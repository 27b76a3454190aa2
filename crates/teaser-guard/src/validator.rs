//! Result validation logic

use crate::{GuardConfig, GuardError};
use regex::Regex;
use serde_json::Value;
use tracing::warn;

/// Result of reviewing a generated summary.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the summary passed both gating checks
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

/// Validation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Summary accepted
    Accepted,

    /// Summary rejected; the orchestrator may retry generation
    Rejected,
}

/// Reasons for rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Required metric keywords absent from the financial metrics
    MissingMetrics {
        /// Sector whose rule failed
        sector: String,
        /// Keywords with no matching metric key
        missing: Vec<String>,
    },

    /// The real company name survived into the output
    NameLeak,

    /// Phrasing matched a deanonymization pattern
    SemanticLeak {
        /// The pattern that matched
        pattern: String,
    },

    /// The citations array is empty (non-gating; reported separately)
    NoCitations,
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::MissingMetrics { sector, missing } => {
                write!(f, "missing metrics for {}: {}", sector, missing.join(", "))
            }
            RejectionReason::NameLeak => write!(f, "name leak"),
            RejectionReason::SemanticLeak { pattern } => {
                write!(f, "semantic leak (pattern: {})", pattern)
            }
            RejectionReason::NoCitations => write!(f, "no citations"),
        }
    }
}

/// The Guard validates generated summaries before acceptance.
pub struct Guard {
    config: GuardConfig,
    leak_patterns: Vec<Regex>,
}

impl Guard {
    /// Create a guard, compiling the configured leak patterns.
    pub fn new(config: GuardConfig) -> Result<Self, GuardError> {
        let leak_patterns = config
            .leak_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern)
                    .map_err(|e| GuardError::Config(format!("bad leak pattern '{}': {}", pattern, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            config,
            leak_patterns,
        })
    }

    /// Run both gating checks on a (sanitized) summary.
    ///
    /// The first attempt to pass both checks is accepted by the orchestrator;
    /// a rejection carries every failing reason for diagnosis.
    pub fn review(&self, result: &Value, forbidden_name: &str) -> ValidationResult {
        let mut reasons = Vec::new();
        if let Some(reason) = self.check_metrics(result) {
            reasons.push(reason);
        }
        if let Some(reason) = self.check_anonymity(result, forbidden_name) {
            reasons.push(reason);
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };
        ValidationResult { status, reasons }
    }

    /// Structural completeness: every required keyword for the sector must
    /// match some metric key as a case-insensitive substring.
    ///
    /// A sector with no rule entry passes unconditionally; that permissive
    /// behavior is load-bearing for sectors the rule table has not caught up
    /// with.
    fn check_metrics(&self, result: &Value) -> Option<RejectionReason> {
        let sector = result
            .get("sector")
            .and_then(Value::as_str)
            .unwrap_or("General");

        let rule = match self.config.rule_for(sector) {
            Some(rule) => rule,
            None => {
                warn!("unknown sector '{}', passing metric check", sector);
                return None;
            }
        };

        let metric_keys: Vec<String> = result
            .get("slide_2")
            .and_then(|slide| slide.get("metrics"))
            .and_then(Value::as_object)
            .map(|metrics| metrics.keys().map(|k| k.to_lowercase()).collect())
            .unwrap_or_default();

        let missing: Vec<String> = rule
            .required
            .iter()
            .filter(|required| !metric_keys.iter().any(|key| key.contains(required.as_str())))
            .cloned()
            .collect();

        if missing.is_empty() {
            None
        } else {
            Some(RejectionReason::MissingMetrics {
                sector: sector.to_string(),
                missing,
            })
        }
    }

    /// Anonymity: the serialized summary must not contain the real name (in
    /// any case, with or without internal spaces) nor match a leak pattern.
    fn check_anonymity(&self, result: &Value, forbidden_name: &str) -> Option<RejectionReason> {
        let serialized = result.to_string().to_lowercase();

        let name = forbidden_name.trim().to_lowercase();
        if !name.is_empty() {
            if serialized.contains(&name) {
                return Some(RejectionReason::NameLeak);
            }
            let squashed: String = name.split_whitespace().collect();
            if squashed != name && serialized.contains(&squashed) {
                return Some(RejectionReason::NameLeak);
            }
        }

        for (pattern, regex) in self.config.leak_patterns.iter().zip(&self.leak_patterns) {
            if regex.is_match(&serialized) {
                return Some(RejectionReason::SemanticLeak {
                    pattern: pattern.clone(),
                });
            }
        }
        None
    }

    /// Citation coverage. Not a gating check; the orchestrator logs it.
    pub fn check_citations(&self, result: &Value) -> Option<RejectionReason> {
        let empty = result
            .get("citations")
            .and_then(Value::as_array)
            .map_or(true, |citations| citations.is_empty());
        if empty {
            Some(RejectionReason::NoCitations)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guard() -> Guard {
        Guard::new(GuardConfig::default()).unwrap()
    }

    #[test]
    fn test_substring_metric_match() {
        let result = json!({
            "sector": "Pharma",
            "slide_2": {"metrics": {"Total Revenue (INR Cr)": "120"}}
        });
        let review = guard().review(&result, "Acme");
        assert_eq!(review.status, ValidationStatus::Accepted);
    }

    #[test]
    fn test_missing_metrics_are_named() {
        let result = json!({
            "sector": "Manufacturing",
            "slide_2": {"metrics": {"Installed Capacity": "10k MT"}}
        });
        let review = guard().review(&result, "Acme");
        assert_eq!(review.status, ValidationStatus::Rejected);
        assert_eq!(
            review.reasons,
            vec![RejectionReason::MissingMetrics {
                sector: "Manufacturing".to_string(),
                missing: vec!["order_book".to_string()],
            }]
        );
    }

    #[test]
    fn test_unknown_sector_passes_with_warning() {
        let result = json!({
            "sector": "Mining",
            "slide_2": {"metrics": {}}
        });
        let review = guard().review(&result, "Acme");
        assert_eq!(review.status, ValidationStatus::Accepted);
    }

    #[test]
    fn test_missing_sector_defaults_to_general() {
        let result = json!({"slide_2": {"metrics": {}}});
        let review = guard().review(&result, "Acme");
        assert_eq!(review.status, ValidationStatus::Rejected);
        assert!(matches!(
            &review.reasons[0],
            RejectionReason::MissingMetrics { sector, .. } if sector == "General"
        ));
    }

    #[test]
    fn test_name_leak_any_case() {
        let result = json!({
            "sector": "Mining",
            "slide_1": {"headline": "IND SWIFT posts record quarter"}
        });
        let review = guard().review(&result, "Ind Swift");
        assert_eq!(review.status, ValidationStatus::Rejected);
        assert_eq!(review.reasons, vec![RejectionReason::NameLeak]);
    }

    #[test]
    fn test_name_leak_spaces_stripped() {
        let result = json!({
            "sector": "Mining",
            "slide_1": {"headline": "IndSwift posts record quarter"}
        });
        let review = guard().review(&result, "Ind Swift");
        assert_eq!(review.reasons, vec![RejectionReason::NameLeak]);
    }

    #[test]
    fn test_semantic_leak_pattern() {
        let result = json!({
            "sector": "Mining",
            "slide_3": {"hooks": ["The largest API maker in India"]}
        });
        let review = guard().review(&result, "Acme");
        assert_eq!(
            review.reasons,
            vec![RejectionReason::SemanticLeak {
                pattern: "largest.*in india".to_string()
            }]
        );
    }

    #[test]
    fn test_clean_result_passes_anonymity() {
        let result = json!({
            "sector": "Mining",
            "slide_1": {"headline": "Project X posts record quarter"}
        });
        let review = guard().review(&result, "Ind Swift");
        assert_eq!(review.status, ValidationStatus::Accepted);
    }

    #[test]
    fn test_both_failures_reported_together() {
        let result = json!({
            "sector": "General",
            "slide_1": {"headline": "Acme is the market leader"},
            "slide_2": {"metrics": {}}
        });
        let review = guard().review(&result, "Acme");
        assert_eq!(review.status, ValidationStatus::Rejected);
        assert_eq!(review.reasons.len(), 2);
    }

    #[test]
    fn test_citation_coverage() {
        let guard = guard();
        assert_eq!(
            guard.check_citations(&json!({"citations": []})),
            Some(RejectionReason::NoCitations)
        );
        assert_eq!(
            guard.check_citations(&json!({
                "citations": [{"id": "ab12cd34", "claim": "x", "source_display": "Internal Doc"}]
            })),
            None
        );
    }

    #[test]
    fn test_bad_leak_pattern_is_config_error() {
        let config = GuardConfig {
            leak_patterns: vec!["(unclosed".to_string()],
            ..GuardConfig::default()
        };
        assert!(Guard::new(config).is_err());
    }
}
