//! Server Routes
//!
//! Page and endpoint paths of the drawing server.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::{DrawingGroup, GiftId};

pub const SENIOR_MEMBER_PAGE: &str = "/senior_member";
pub const JUNIOR_MEMBER_PAGE: &str = "/junior_member";
pub const NEW_MEMBER_PAGE: &str = "/new_member";
pub const GIFTS_PAGE: &str = "/gifts";
pub const WINNERS_FRAGMENT: &str = "/winners_fragment";
pub const REDRAW: &str = "/redraw";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Page the browser should navigate to for a drawing group
pub fn group_page(group: DrawingGroup) -> String {
    match group {
        DrawingGroup::Senior => SENIOR_MEMBER_PAGE.to_string(),
        DrawingGroup::Junior => JUNIOR_MEMBER_PAGE.to_string(),
        DrawingGroup::NewMember => NEW_MEMBER_PAGE.to_string(),
        DrawingGroup::Other(n) => format!("{}?drawing_group={}", GIFTS_PAGE, n),
        // Matches what the server pages have always received for a non-numeric value
        DrawingGroup::Unparsed => format!("{}?drawing_group=NaN", GIFTS_PAGE),
    }
}

pub fn winners_fragment(gift_id: &GiftId) -> String {
    format!(
        "{}/{}",
        WINNERS_FRAGMENT,
        utf8_percent_encode(gift_id.as_str(), PATH_SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_page_fixed_routes() {
        assert_eq!(group_page(DrawingGroup::Senior), "/senior_member");
        assert_eq!(group_page(DrawingGroup::Junior), "/junior_member");
        assert_eq!(group_page(DrawingGroup::NewMember), "/new_member");
    }

    #[test]
    fn test_group_page_fallback() {
        for n in [4, 0, -1, 12] {
            assert_eq!(
                group_page(DrawingGroup::parse(&n.to_string())),
                format!("/gifts?drawing_group={}", n)
            );
        }
        assert_eq!(group_page(DrawingGroup::parse("x")), "/gifts?drawing_group=NaN");
    }

    #[test]
    fn test_winners_fragment_url() {
        let gift = GiftId::parse("G1").unwrap();
        assert_eq!(winners_fragment(&gift), "/winners_fragment/G1");

        let odd = GiftId::parse("a/b c").unwrap();
        assert_eq!(winners_fragment(&odd), "/winners_fragment/a%2Fb%20c");
    }
}
