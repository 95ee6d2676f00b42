//! Frontend Models
//!
//! Typed values read from the page and exchanged with the server.

use serde::{Deserialize, Serialize};

/// Drawing group picked in the group selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingGroup {
    Senior,
    Junior,
    NewMember,
    Other(i64),
    /// Value with no leading digits (or out of range)
    Unparsed,
}

impl DrawingGroup {
    /// Parse a selector value with base-10 `parseInt` semantics:
    /// leading whitespace and sign are accepted, trailing garbage is ignored.
    pub fn parse(raw: &str) -> Self {
        match parse_leading_int(raw) {
            Some(1) => DrawingGroup::Senior,
            Some(2) => DrawingGroup::Junior,
            Some(3) => DrawingGroup::NewMember,
            Some(n) => DrawingGroup::Other(n),
            None => DrawingGroup::Unparsed,
        }
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    // Beyond i64 counts as unparsed; `parseInt` would give an imprecise float here
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Opaque gift identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GiftId(String);

impl GiftId {
    /// Surrounding whitespace from the template is dropped before the id goes into a URL
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("gift id is empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque employee identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeCode(String);

impl EmployeeCode {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("employee code is empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `data-gift-drawn` value. Only `"0"` means the reveal is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiftDrawnFlag {
    pub pending_reveal: bool,
}

impl GiftDrawnFlag {
    pub fn from_attribute(raw: Option<&str>) -> Self {
        Self {
            pending_reveal: raw == Some("0"),
        }
    }
}

/// Server-rendered winner rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinnersFragment(pub String);

impl WinnersFragment {
    pub fn html(&self) -> &str {
        &self.0
    }
}

/// Body of `POST /redraw`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedrawRequest {
    pub employee_code: EmployeeCode,
    pub gift_id: GiftId,
}

impl RedrawRequest {
    /// Build from the `data-employee-code` / `data-gift-id` attributes of a button
    pub fn from_attributes(
        employee_code: Option<String>,
        gift_id: Option<String>,
    ) -> Result<Self, String> {
        let employee_code = employee_code.ok_or("missing data-employee-code")?;
        let gift_id = gift_id.ok_or("missing data-gift-id")?;
        Ok(Self {
            employee_code: EmployeeCode::parse(&employee_code)?,
            gift_id: GiftId::parse(&gift_id)?,
        })
    }
}

/// Wire payload returned by `POST /redraw`
#[derive(Debug, Clone, Deserialize)]
pub struct RedrawResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedrawOutcome {
    Success,
    Failure { reason: String },
}

impl From<RedrawResponse> for RedrawOutcome {
    fn from(resp: RedrawResponse) -> Self {
        if resp.success {
            RedrawOutcome::Success
        } else {
            RedrawOutcome::Failure {
                reason: resp.message.unwrap_or_else(|| "redraw rejected by server".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_group_fixed_values() {
        assert_eq!(DrawingGroup::parse("1"), DrawingGroup::Senior);
        assert_eq!(DrawingGroup::parse("2"), DrawingGroup::Junior);
        assert_eq!(DrawingGroup::parse("3"), DrawingGroup::NewMember);
    }

    #[test]
    fn test_drawing_group_parse_int_semantics() {
        assert_eq!(DrawingGroup::parse("4"), DrawingGroup::Other(4));
        assert_eq!(DrawingGroup::parse("0"), DrawingGroup::Other(0));
        assert_eq!(DrawingGroup::parse("-1"), DrawingGroup::Other(-1));
        assert_eq!(DrawingGroup::parse("  12abc"), DrawingGroup::Other(12));
        assert_eq!(DrawingGroup::parse("+2"), DrawingGroup::Junior);
        assert_eq!(DrawingGroup::parse("007"), DrawingGroup::Other(7));
    }

    #[test]
    fn test_drawing_group_unparsed() {
        assert_eq!(DrawingGroup::parse(""), DrawingGroup::Unparsed);
        assert_eq!(DrawingGroup::parse("abc"), DrawingGroup::Unparsed);
        assert_eq!(DrawingGroup::parse("-"), DrawingGroup::Unparsed);
        assert_eq!(DrawingGroup::parse("99999999999999999999"), DrawingGroup::Unparsed);
    }

    #[test]
    fn test_gift_id_trims_template_whitespace() {
        assert_eq!(GiftId::parse(" 42\n").unwrap().as_str(), "42");
        assert!(GiftId::parse("  ").is_err());
    }

    #[test]
    fn test_gift_drawn_flag() {
        assert!(GiftDrawnFlag::from_attribute(Some("0")).pending_reveal);
        assert!(!GiftDrawnFlag::from_attribute(Some("1")).pending_reveal);
        assert!(!GiftDrawnFlag::from_attribute(Some("")).pending_reveal);
        assert!(!GiftDrawnFlag::from_attribute(None).pending_reveal);
    }

    #[test]
    fn test_redraw_request_from_attributes() {
        let req = RedrawRequest::from_attributes(Some("E1".into()), Some("G1".into())).unwrap();
        assert_eq!(req.employee_code.as_str(), "E1");
        assert_eq!(req.gift_id.as_str(), "G1");

        assert!(RedrawRequest::from_attributes(None, Some("G1".into())).is_err());
        assert!(RedrawRequest::from_attributes(Some("E1".into()), None).is_err());
        assert!(RedrawRequest::from_attributes(Some(" ".into()), Some("G1".into())).is_err());
    }

    #[test]
    fn test_redraw_request_body() {
        let req = RedrawRequest::from_attributes(Some("E1".into()), Some("G1".into())).unwrap();
        let body = serde_json::to_string(&req).unwrap();
        assert_eq!(body, r#"{"employee_code":"E1","gift_id":"G1"}"#);
    }

    #[test]
    fn test_redraw_outcome_from_response() {
        let ok: RedrawResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(RedrawOutcome::from(ok), RedrawOutcome::Success);

        let rejected: RedrawResponse =
            serde_json::from_str(r#"{"success": false, "message": "no candidates"}"#).unwrap();
        assert_eq!(
            RedrawOutcome::from(rejected),
            RedrawOutcome::Failure { reason: "no candidates".to_string() }
        );

        let bare: RedrawResponse = serde_json::from_str(r#"{"success": false, "extra": 1}"#).unwrap();
        assert!(matches!(RedrawOutcome::from(bare), RedrawOutcome::Failure { .. }));
    }
}
