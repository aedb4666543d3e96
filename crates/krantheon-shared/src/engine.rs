//! Response engine - one pure function per command kind.
//!
//! Every function is deterministic in its inputs. Results carry a
//! human-readable `summary` that the transport layer echoes as the response.

use crate::command::{CommandKind, RoutedCommand};
use crate::error::{KrantheonError, Result};
use crate::text::parse_int;
use serde::{Deserialize, Serialize};

/// Guidance returned when no rule matched
pub const UNRECOGNIZED_SUMMARY: &str = "Command not recognized. Try: 'investigate 8.8.8.8', \
'show critical alerts', 'risk score 1.1.1.1', or 'compliance report'.";

/// Active alert counts per severity
const ALERT_COUNTS: [(&str, u32); 5] = [
    ("critical", 7),
    ("high", 12),
    ("medium", 18),
    ("low", 4),
    ("all", 37),
];

/// Count reported for severities outside the table
const DEFAULT_ALERT_COUNT: u32 = 7;

const SOC2_POLICIES: u32 = 247;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpInvestigation {
    pub ip: String,
    pub risk_score: f64,
    pub threats_detected: i64,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub severity: String,
    pub active_alerts: u32,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Thresholds are inclusive lower bounds, checked from the top down
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::Critical
        } else if score >= 0.6 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub ip: String,
    pub score: f64,
    pub level: RiskLevel,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub soc2_policies_total: u32,
    pub soc2_policies_passed: u32,
    pub suspensions: u32,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unrecognized {
    pub summary: String,
}

/// Output of exactly one engine function. Serializes as the bare field map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultRecord {
    IpInvestigation(IpInvestigation),
    AlertSummary(AlertSummary),
    RiskAssessment(RiskAssessment),
    ComplianceSummary(ComplianceSummary),
    Unrecognized(Unrecognized),
}

impl ResultRecord {
    pub fn summary(&self) -> &str {
        match self {
            Self::IpInvestigation(r) => &r.summary,
            Self::AlertSummary(r) => &r.summary,
            Self::RiskAssessment(r) => &r.summary,
            Self::ComplianceSummary(r) => &r.summary,
            Self::Unrecognized(r) => &r.summary,
        }
    }
}

/// Run the engine function for a routed command
pub fn dispatch(routed: &RoutedCommand) -> Result<ResultRecord> {
    let record = match routed.kind {
        CommandKind::InvestigateIp => {
            ResultRecord::IpInvestigation(investigate_ip(require(routed, "ip")?)?)
        }
        CommandKind::ShowAlerts => {
            ResultRecord::AlertSummary(show_alerts(require(routed, "severity")?))
        }
        CommandKind::RiskScore => ResultRecord::RiskAssessment(risk_score(require(routed, "ip")?)?),
        CommandKind::ComplianceReport => ResultRecord::ComplianceSummary(compliance_report()),
        CommandKind::Unknown => ResultRecord::Unrecognized(unrecognized()),
    };
    Ok(record)
}

fn require<'a>(routed: &'a RoutedCommand, key: &str) -> Result<&'a str> {
    routed.param(key).ok_or_else(|| {
        KrantheonError::Parameter(format!("{} requires parameter '{}'", routed.kind, key))
    })
}

pub fn investigate_ip(ip: &str) -> Result<IpInvestigation> {
    let last = last_octet(ip)?;
    let risk = round2(last.rem_euclid(10) as f64 / 10.0);
    let threats = last.rem_euclid(5);
    Ok(IpInvestigation {
        ip: ip.to_string(),
        risk_score: risk,
        threats_detected: threats,
        summary: format!(
            "IP {} analyzed. {} threat indicators. Risk {}.",
            ip,
            threats,
            format_decimal(risk)
        ),
    })
}

pub fn show_alerts(severity: &str) -> AlertSummary {
    let count = ALERT_COUNTS
        .iter()
        .find(|(name, _)| *name == severity)
        .map_or(DEFAULT_ALERT_COUNT, |(_, count)| *count);
    AlertSummary {
        severity: severity.to_string(),
        active_alerts: count,
        summary: format!("{} alerts: {} active.", title_case(severity), count),
    }
}

pub fn risk_score(ip: &str) -> Result<RiskAssessment> {
    let last = last_octet(ip)?;
    let score = round2(last.rem_euclid(7) as f64 / 10.0 + 0.3);
    let level = RiskLevel::from_score(score);
    Ok(RiskAssessment {
        ip: ip.to_string(),
        score,
        level,
        summary: format!(
            "Risk score for {}: {} ({}).",
            ip,
            format_decimal(score),
            level
        ),
    })
}

pub fn compliance_report() -> ComplianceSummary {
    ComplianceSummary {
        soc2_policies_total: SOC2_POLICIES,
        soc2_policies_passed: SOC2_POLICIES,
        suspensions: 0,
        summary: "Compliance 100%. 247 SOC2 policies passed. 0 suspensions.".to_string(),
    }
}

pub fn unrecognized() -> Unrecognized {
    Unrecognized {
        summary: UNRECOGNIZED_SUMMARY.to_string(),
    }
}

/// Integer value of the last dot-separated segment. Digits from any script
/// count, matching what the router's `\d` accepts.
fn last_octet(ip: &str) -> Result<i64> {
    let segment = ip.rsplit('.').next().unwrap_or(ip);
    parse_int(segment).ok_or_else(|| {
        KrantheonError::Parameter(format!(
            "invalid IP '{}': last segment '{}' is not an integer",
            ip,
            segment.trim()
        ))
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a float the way summaries expect: `0.8`, `0.45`, and `0.0` (not `0`)
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Upper-case the first letter of each alphabetic run, lower-case the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route;

    #[test]
    fn test_investigate_ip() {
        let result = investigate_ip("8.8.8.8").unwrap();
        assert_eq!(result.risk_score, 0.8);
        assert_eq!(result.threats_detected, 3);
        assert_eq!(
            result.summary,
            "IP 8.8.8.8 analyzed. 3 threat indicators. Risk 0.8."
        );
    }

    #[test]
    fn test_investigate_ip_zero_risk_keeps_decimal() {
        let result = investigate_ip("10.0.0.10").unwrap();
        assert_eq!(result.risk_score, 0.0);
        assert_eq!(result.threats_detected, 0);
        assert!(result.summary.ends_with("Risk 0.0."));
    }

    #[test]
    fn test_investigate_ip_out_of_range_octet() {
        let result = investigate_ip("1.2.3.999").unwrap();
        assert_eq!(result.risk_score, 0.9);
        assert_eq!(result.threats_detected, 4);
    }

    #[test]
    fn test_investigate_ip_rejects_non_numeric() {
        let err = investigate_ip("1.2.3.x").unwrap_err();
        assert!(matches!(err, KrantheonError::Parameter(_)));
        assert!(investigate_ip("").is_err());
    }

    #[test]
    fn test_investigate_ip_other_script_digits() {
        let result = investigate_ip("\u{668}.\u{668}.\u{668}.\u{668}").unwrap();
        assert_eq!(result.risk_score, 0.8);
        assert_eq!(result.threats_detected, 3);

        let routed = route("investigate \u{668}.\u{668}.\u{668}.\u{668}");
        assert_eq!(dispatch(&routed).unwrap().summary(), result.summary);
    }

    #[test]
    fn test_risk_score_fullwidth_digits() {
        let result = risk_score("\u{ff18}.\u{ff18}.\u{ff18}.\u{ff18}").unwrap();
        assert_eq!(result.score, 0.4);
        assert_eq!(result.level, RiskLevel::Medium);
    }

    #[test]
    fn test_octet_overflow_is_parameter_error() {
        let err = risk_score("1.1.1.99999999999999999999").unwrap_err();
        assert!(matches!(err, KrantheonError::Parameter(_)));
    }

    #[test]
    fn test_negative_octet_uses_non_negative_remainder() {
        let result = investigate_ip("-3").unwrap();
        assert_eq!(result.risk_score, 0.7);
        assert_eq!(result.threats_detected, 2);
    }

    #[test]
    fn test_show_alerts_table() {
        assert_eq!(show_alerts("critical").active_alerts, 7);
        assert_eq!(show_alerts("high").active_alerts, 12);
        assert_eq!(show_alerts("medium").active_alerts, 18);
        assert_eq!(show_alerts("low").active_alerts, 4);
        assert_eq!(show_alerts("all").active_alerts, 37);
        assert_eq!(show_alerts("critical").summary, "Critical alerts: 7 active.");
    }

    #[test]
    fn test_show_alerts_unknown_severity_defaults() {
        let result = show_alerts("spicy");
        assert_eq!(result.severity, "spicy");
        assert_eq!(result.active_alerts, 7);
        assert_eq!(result.summary, "Spicy alerts: 7 active.");
    }

    #[test]
    fn test_risk_score_levels() {
        let cases = [
            ("1.1.1.0", 0.3, RiskLevel::Low),
            ("1.1.1.1", 0.4, RiskLevel::Medium),
            ("1.1.1.2", 0.5, RiskLevel::Medium),
            ("1.1.1.3", 0.6, RiskLevel::High),
            ("1.1.1.4", 0.7, RiskLevel::High),
            ("1.1.1.5", 0.8, RiskLevel::Critical),
            ("1.1.1.6", 0.9, RiskLevel::Critical),
            ("1.1.1.7", 0.3, RiskLevel::Low),
        ];
        for (ip, score, level) in cases {
            let result = risk_score(ip).unwrap();
            assert_eq!(result.score, score, "{}", ip);
            assert_eq!(result.level, level, "{}", ip);
        }
    }

    #[test]
    fn test_risk_score_summary() {
        let result = risk_score("1.1.1.1").unwrap();
        assert_eq!(result.summary, "Risk score for 1.1.1.1: 0.4 (medium).");
    }

    #[test]
    fn test_compliance_report_is_constant() {
        let report = compliance_report();
        assert_eq!(report.soc2_policies_total, 247);
        assert_eq!(report.soc2_policies_passed, 247);
        assert_eq!(report.suspensions, 0);
        assert_eq!(report, compliance_report());
    }

    #[test]
    fn test_dispatch_follows_route() {
        let record = dispatch(&route("show high alerts")).unwrap();
        assert_eq!(record.summary(), "High alerts: 12 active.");

        let record = dispatch(&route("play some music")).unwrap();
        assert_eq!(record.summary(), UNRECOGNIZED_SUMMARY);
    }

    #[test]
    fn test_dispatch_missing_parameter() {
        let mut routed = route("investigate 8.8.8.8");
        routed.parameters.clear();
        assert!(matches!(dispatch(&routed), Err(KrantheonError::Parameter(_))));
    }

    #[test]
    fn test_record_serializes_as_plain_map() {
        let record = ResultRecord::RiskAssessment(risk_score("9.9.9.3").unwrap());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["level"], "high");
        assert_eq!(value["score"], 0.6);
        assert!(value.get("RiskAssessment").is_none());
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(0.8), "0.8");
        assert_eq!(format_decimal(0.45), "0.45");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("critical"), "Critical");
        assert_eq!(title_case("ALL"), "All");
        assert_eq!(title_case("two words"), "Two Words");
    }
}
