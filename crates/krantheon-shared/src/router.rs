//! Deterministic router - maps free text to a command kind and parameters.
//!
//! Rules are evaluated in a fixed priority order and the first match wins.
//! Callers depend on that order, not on a best-match score: "investigate
//! 8.8.8.8 risk score" is an IP investigation because that rule runs first.

use crate::command::{CommandKind, RoutedCommand};
use crate::text::{is_space, SPACE_CLASS};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

/// IP used when a risk score request names no address
pub const DEFAULT_RISK_IP: &str = "1.1.1.1";

/// Severity used when an alert request names none
pub const DEFAULT_SEVERITY: &str = "critical";

type Extractor = fn(&Captures<'_>) -> BTreeMap<String, String>;

/// One entry of the priority-ordered pattern table
struct Rule {
    kind: CommandKind,
    confidence: f64,
    pattern: Regex,
    extract: Extractor,
}

/// Compile a rule pattern. `\s` also covers the information separators.
fn pattern(source: &str) -> Regex {
    Regex::new(&source.replace(r"\s", SPACE_CLASS)).unwrap()
}

/// Priority-ordered rules. Octets are not range checked.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            kind: CommandKind::InvestigateIp,
            confidence: 0.95,
            pattern: pattern(
                r"(?:investigate|check|analyze|look\s+up)\s+(?:ip\s+)?(?P<ip>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
            ),
            extract: |caps| single("ip", caps.name("ip").map_or("", |m| m.as_str())),
        },
        Rule {
            kind: CommandKind::ShowAlerts,
            confidence: 0.9,
            pattern: pattern(
                r"(?:show|display|list|get)\s+(?P<severity>critical|high|medium|low|all)?\s*(alerts|notifications)",
            ),
            extract: |caps| {
                single(
                    "severity",
                    caps.name("severity").map_or(DEFAULT_SEVERITY, |m| m.as_str()),
                )
            },
        },
        // The IP group is optional: any "score " matches and falls back to the default IP
        Rule {
            kind: CommandKind::RiskScore,
            confidence: 0.9,
            pattern: pattern(
                r"(?:risk\s+score|score)\s+(?:for\s+)?(?P<ip>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})?",
            ),
            extract: |caps| single("ip", caps.name("ip").map_or(DEFAULT_RISK_IP, |m| m.as_str())),
        },
        Rule {
            kind: CommandKind::ComplianceReport,
            confidence: 0.9,
            pattern: pattern(r"(compliance|audit)\s+(report|status|check)"),
            extract: |_| BTreeMap::new(),
        },
    ]
});

fn single(key: &str, value: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(key.to_string(), value.to_string())])
}

/// Lower-cased, trimmed form the rules are matched against
pub fn normalize(text: &str) -> String {
    text.trim_matches(is_space).to_lowercase()
}

/// Route text to a command. Never fails: unmatched text is `Unknown`.
pub fn route(text: &str) -> RoutedCommand {
    let normalized = normalize(text);

    for rule in RULES.iter() {
        if let Some(caps) = rule.pattern.captures(&normalized) {
            let routed = RoutedCommand {
                kind: rule.kind,
                confidence: rule.confidence,
                parameters: (rule.extract)(&caps),
                raw_text: text.to_string(),
            };
            debug!(
                "Router: kind={}, confidence={}, params={:?}",
                routed.kind, routed.confidence, routed.parameters
            );
            return routed;
        }
    }

    debug!("Router: no rule matched, kind=unknown");
    RoutedCommand::unknown(text)
}

/// Classify only, discarding parameters
pub fn classify(text: &str) -> CommandKind {
    route(text).kind
}
