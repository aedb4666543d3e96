//! Unit tests for router module.
//!
//! Note: Corpus-driven tests are in crates/krantheond/tests/router_corpus_tests.rs

#[cfg(test)]
mod tests {
    use crate::command::CommandKind;
    use crate::router::*;
    use std::collections::BTreeMap;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_route_investigate_ip() {
        let routed = route("investigate 8.8.8.8");
        assert_eq!(routed.kind, CommandKind::InvestigateIp);
        assert_eq!(routed.confidence, 0.95);
        assert_eq!(routed.parameters, params(&[("ip", "8.8.8.8")]));
        assert_eq!(routed.raw_text, "investigate 8.8.8.8");
    }

    #[test]
    fn test_investigate_trigger_verbs() {
        for text in [
            "check 10.0.0.1",
            "analyze ip 10.0.0.1",
            "please look up 10.0.0.1 for me",
            "LOOK   UP IP 10.0.0.1",
        ] {
            let routed = route(text);
            assert_eq!(routed.kind, CommandKind::InvestigateIp, "{}", text);
            assert_eq!(routed.param("ip"), Some("10.0.0.1"), "{}", text);
        }
    }

    #[test]
    fn test_octets_are_not_range_checked() {
        let routed = route("investigate 999.300.256.999");
        assert_eq!(routed.kind, CommandKind::InvestigateIp);
        assert_eq!(routed.param("ip"), Some("999.300.256.999"));
    }

    #[test]
    fn test_investigate_without_ip_is_not_investigation() {
        assert_eq!(classify("investigate the server"), CommandKind::Unknown);
    }

    #[test]
    fn test_route_show_alerts() {
        let routed = route("show critical alerts");
        assert_eq!(routed.kind, CommandKind::ShowAlerts);
        assert_eq!(routed.confidence, 0.9);
        assert_eq!(routed.parameters, params(&[("severity", "critical")]));

        assert_eq!(route("list low notifications").param("severity"), Some("low"));
        assert_eq!(route("Display ALL alerts").param("severity"), Some("all"));
        assert_eq!(route("get high alerts").param("severity"), Some("high"));
    }

    #[test]
    fn test_show_alerts_defaults_to_critical() {
        let routed = route("show alerts");
        assert_eq!(routed.kind, CommandKind::ShowAlerts);
        assert_eq!(routed.param("severity"), Some(DEFAULT_SEVERITY));
    }

    #[test]
    fn test_route_risk_score() {
        let routed = route("risk score for 1.1.1.1");
        assert_eq!(routed.kind, CommandKind::RiskScore);
        assert_eq!(routed.confidence, 0.9);
        assert_eq!(routed.parameters, params(&[("ip", "1.1.1.1")]));

        assert_eq!(route("score 4.4.4.4").param("ip"), Some("4.4.4.4"));
    }

    #[test]
    fn test_risk_score_defaults_ip() {
        let routed = route("what is my risk score please");
        assert_eq!(routed.kind, CommandKind::RiskScore);
        assert_eq!(routed.param("ip"), Some(DEFAULT_RISK_IP));
    }

    #[test]
    fn test_score_needs_trailing_whitespace() {
        // "score" at the very end has nothing after it for \s+ to consume
        assert_eq!(classify("risk score"), CommandKind::Unknown);
        assert_eq!(classify("  risk score  "), CommandKind::Unknown);
    }

    #[test]
    fn test_route_compliance() {
        for text in ["compliance status", "compliance report", "run an audit check"] {
            let routed = route(text);
            assert_eq!(routed.kind, CommandKind::ComplianceReport, "{}", text);
            assert_eq!(routed.confidence, 0.9);
            assert!(routed.parameters.is_empty());
        }
    }

    #[test]
    fn test_route_unknown() {
        let routed = route("play some music");
        assert_eq!(routed.kind, CommandKind::Unknown);
        assert_eq!(routed.confidence, 0.0);
        assert!(routed.parameters.is_empty());
        assert_eq!(routed.raw_text, "play some music");

        assert_eq!(classify(""), CommandKind::Unknown);
        assert_eq!(classify("   "), CommandKind::Unknown);
    }

    #[test]
    fn test_investigate_wins_over_risk_score() {
        let routed = route("investigate 8.8.8.8 risk score");
        assert_eq!(routed.kind, CommandKind::InvestigateIp);
        assert_eq!(routed.param("ip"), Some("8.8.8.8"));
    }

    #[test]
    fn test_alerts_win_over_risk_score() {
        let routed = route("show alerts with score above 5");
        assert_eq!(routed.kind, CommandKind::ShowAlerts);
    }

    #[test]
    fn test_score_shadows_compliance() {
        // RiskScore runs before ComplianceReport, so an incidental "score " takes it
        let routed = route("audit report score summary");
        assert_eq!(routed.kind, CommandKind::RiskScore);
        assert_eq!(routed.param("ip"), Some(DEFAULT_RISK_IP));
    }

    #[test]
    fn test_raw_text_is_preserved() {
        let routed = route("  Investigate 8.8.8.8  ");
        assert_eq!(routed.kind, CommandKind::InvestigateIp);
        assert_eq!(routed.raw_text, "  Investigate 8.8.8.8  ");
    }

    #[test]
    fn test_routing_is_deterministic() {
        for text in ["investigate 1.2.3.4", "show alerts", "score", "compliance check", "hi"] {
            assert_eq!(route(text), route(text));
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Show CRITICAL Alerts\n"), "show critical alerts");
    }

    #[test]
    fn test_information_separators_are_whitespace() {
        assert_eq!(normalize("\x1fShow Alerts\x1c"), "show alerts");

        let routed = route("investigate\x1c8.8.8.8");
        assert_eq!(routed.kind, CommandKind::InvestigateIp);
        assert_eq!(routed.parameters, params(&[("ip", "8.8.8.8")]));

        let routed = route("risk\x1dscore\x1efor\x1f9.9.9.9");
        assert_eq!(routed.kind, CommandKind::RiskScore);
        assert_eq!(routed.parameters, params(&[("ip", "9.9.9.9")]));
    }

    #[test]
    fn test_other_script_digits_route() {
        let routed = route("investigate \u{668}.\u{668}.\u{668}.\u{668}");
        assert_eq!(routed.kind, CommandKind::InvestigateIp);
        assert_eq!(routed.param("ip"), Some("\u{668}.\u{668}.\u{668}.\u{668}"));
    }
}
