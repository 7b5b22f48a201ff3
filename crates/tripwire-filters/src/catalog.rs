//! Built-in injection signatures.
//!
//! A starter catalog covering the classic web attack classes. Impact
//! weights are calibrated relative to each other: unambiguous attack
//! markers score 7-8, context-dependent markers 4-6.

use tripwire_core::FilterSet;

use crate::signature::RegexFilter;

/// Build the default signature catalog.
///
/// Filters are registered in the order listed here; the engine evaluates
/// them in the same order for every inspected leaf.
pub fn default_filters() -> FilterSet {
    let defs: Vec<RegexFilter> = vec![
        // Cross-site scripting
        RegexFilter::new("xss-script-tag", r"(?i)<\s*script[^>]*>", 8)
            .unwrap()
            .with_description("Script tag injection")
            .with_tags(["xss"]),
        RegexFilter::new("xss-event-handler", r"(?i)\bon(?:error|load|click|mouseover|focus)\s*=", 6)
            .unwrap()
            .with_description("Inline event handler injection")
            .with_tags(["xss"]),
        RegexFilter::new("xss-js-uri", r"(?i)javascript\s*:", 6)
            .unwrap()
            .with_description("JavaScript URI scheme")
            .with_tags(["xss"]),
        // SQL injection
        RegexFilter::new("sqli-union-select", r"(?i)\bunion(?:\s+all)?\s+select\b", 8)
            .unwrap()
            .with_description("UNION-based SQL injection")
            .with_tags(["sqli"]),
        RegexFilter::new("sqli-tautology", r#"(?i)['"]\s*or\s+['"]?\d+['"]?\s*="#, 7)
            .unwrap()
            .with_description("Tautology-based SQL injection")
            .with_tags(["sqli"]),
        RegexFilter::new("sqli-comment-breakout", r"(?i)'\s*(?:--|#|;)", 5)
            .unwrap()
            .with_description("Quote followed by SQL comment or terminator")
            .with_tags(["sqli"]),
        // Path traversal / file inclusion
        RegexFilter::new("path-traversal", r"\.\./|\.\.\\", 6)
            .unwrap()
            .with_description("Relative path traversal sequence")
            .with_tags(["lfi"]),
        // Command injection
        RegexFilter::new("cmd-chained-binary", r"(?i)[;&|]\s*(?:cat|ls|id|whoami|wget|curl|nc)\b", 7)
            .unwrap()
            .with_description("Shell metacharacter chaining a known binary")
            .with_tags(["rce"]),
        RegexFilter::new("cmd-substitution", r"\$\([^)]*\)|`[^`]+`", 6)
            .unwrap()
            .with_description("Shell command substitution")
            .with_tags(["rce"]),
        // Protocol-level tricks
        RegexFilter::new("null-byte", r"%00|\x00", 4)
            .unwrap()
            .with_description("Null byte truncation")
            .with_tags(["evasion"]),
        RegexFilter::new("crlf-header-injection", r"(?i)%0d%0a|\r\n\s*(?:to|cc|bcc|location)\s*:", 5)
            .unwrap()
            .with_description("CRLF sequence injecting a header")
            .with_tags(["email", "splitting"]),
    ];

    let mut filters = FilterSet::new();
    for def in defs {
        filters.add(def);
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tripwire_core::Manager;

    fn impact_of(payload: &str) -> u32 {
        let mut manager = Manager::new(default_filters());
        manager.run(&json!({ "POST": { "field": payload } })).impact
    }

    #[test]
    fn test_catalog_is_nonempty_and_ordered() {
        let filters = default_filters();
        assert!(filters.len() >= 10);

        let ids: Vec<&str> = filters.iter().map(|f| f.id()).collect();
        assert_eq!(ids[0], "xss-script-tag");
        assert!(ids.contains(&"sqli-union-select"));
    }

    #[test]
    fn test_clean_values_pass() {
        assert_eq!(impact_of("a perfectly ordinary bio"), 0);
        assert_eq!(impact_of("bob@example.com"), 0);
        assert_eq!(impact_of("O'Brien"), 0);
    }

    #[test]
    fn test_xss_payloads_detected() {
        assert!(impact_of("<script>alert(1)</script>") > 0);
        assert!(impact_of("<img src=x onerror=alert(1)>") > 0);
        assert!(impact_of("javascript:alert(document.cookie)") > 0);
    }

    #[test]
    fn test_sqli_payloads_detected() {
        assert!(impact_of("1 UNION SELECT username, password FROM users") > 0);
        assert!(impact_of("' OR '1'='1") > 0);
        assert!(impact_of("admin'--") > 0);
    }

    #[test]
    fn test_traversal_and_command_payloads_detected() {
        assert!(impact_of("../../etc/passwd") > 0);
        assert!(impact_of("x; cat /etc/passwd") > 0);
        assert!(impact_of("$(whoami)") > 0);
    }

    #[test]
    fn test_case_insensitive_signatures() {
        assert!(impact_of("<SCRIPT>alert(1)</SCRIPT>") > 0);
        assert!(impact_of("UNION ALL SELECT NULL") > 0);
        assert!(impact_of("union select 1") > 0);
    }

    #[test]
    fn test_stacked_payload_accumulates_impact() {
        let single = impact_of("<script>x</script>");
        let stacked = impact_of("<script>x</script> UNION SELECT '../..'");
        assert!(stacked > single);
    }
}
