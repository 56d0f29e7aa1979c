//! User-agent classification
//!
//! Wraps woothee behind the contract the click recorder needs: best-effort
//! browser name, OS name, and device family, each independently falling
//! back to `"Unknown"` or a heuristic when parsing yields nothing.

use woothee::parser::Parser;

const UNKNOWN: &str = "Unknown";

// woothee's sentinel for fields it could not determine
const WOOTHEE_UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAgent {
    pub browser: String,
    pub os: String,
    pub device: String,
}

/// Classify a raw user-agent string.
///
/// Device family prefers woothee's category; when woothee cannot classify,
/// falls back to the mobile/desktop heuristic on the browser name.
pub fn classify_user_agent(ua: &str) -> ClientAgent {
    let parser = Parser::new();
    let result = parser.parse(ua).unwrap_or_default();

    let browser = if result.name != WOOTHEE_UNKNOWN && !result.name.is_empty() {
        result.name.to_string()
    } else {
        UNKNOWN.to_string()
    };

    let os = if result.os != WOOTHEE_UNKNOWN && !result.os.is_empty() {
        result.os.to_string()
    } else {
        UNKNOWN.to_string()
    };

    let device = match result.category {
        "smartphone" | "mobilephone" => "mobile".to_string(),
        "pc" => "desktop".to_string(),
        "appliance" => "smarttv".to_string(),
        "crawler" => "crawler".to_string(),
        _ => {
            if browser.contains("Mobile") {
                "mobile".to_string()
            } else {
                "desktop".to_string()
            }
        }
    };

    ClientAgent {
        browser,
        os,
        device,
    }
}
