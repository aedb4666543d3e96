//! Command kinds and routed command values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The closed set of commands the router can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    /// "investigate 8.8.8.8" => ip
    InvestigateIp,
    /// "show critical alerts" => severity
    ShowAlerts,
    /// "risk score for 1.1.1.1" => ip
    RiskScore,
    /// "compliance report" => no parameters
    ComplianceReport,
    /// Nothing matched
    Unknown,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        Self::InvestigateIp,
        Self::ShowAlerts,
        Self::RiskScore,
        Self::ComplianceReport,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvestigateIp => "investigate_ip",
            Self::ShowAlerts => "show_alerts",
            Self::RiskScore => "risk_score",
            Self::ComplianceReport => "compliance_report",
            Self::Unknown => "unknown",
        }
    }

    /// Parse from wire name (for corpus tests)
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of routing one piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedCommand {
    #[serde(rename = "command")]
    pub kind: CommandKind,
    /// Fixed per-rule constant, not a computed probability
    pub confidence: f64,
    #[serde(rename = "params")]
    pub parameters: BTreeMap<String, String>,
    /// Input exactly as received, before normalization
    #[serde(rename = "raw")]
    pub raw_text: String,
}

impl RoutedCommand {
    pub fn unknown(raw_text: &str) -> Self {
        Self {
            kind: CommandKind::Unknown,
            confidence: 0.0,
            parameters: BTreeMap::new(),
            raw_text: raw_text.to_string(),
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }
}
