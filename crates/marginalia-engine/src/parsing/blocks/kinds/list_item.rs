/// List item markers: `- ` for unordered lists, `N. ` for ordered ones.
pub struct ListItem;

impl ListItem {
    pub const BULLET: &'static str = "- ";
    pub const ORDINAL_SUFFIX: &'static str = ". ";

    pub fn is_unordered(line: &str) -> bool {
        line.starts_with(Self::BULLET)
    }

    /// Returns the byte length of an ordered marker (`12. ` is 4), if any.
    pub fn ordered_marker_len(line: &str) -> Option<usize> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || !line[digits..].starts_with(Self::ORDINAL_SUFFIX) {
            return None;
        }
        Some(digits + Self::ORDINAL_SUFFIX.len())
    }

    pub fn is_ordered(line: &str) -> bool {
        Self::ordered_marker_len(line).is_some()
    }

    /// Byte offset where the item text begins, or `None` for non-items.
    pub fn text_offset(line: &str) -> Option<usize> {
        if Self::is_unordered(line) {
            Some(Self::BULLET.len())
        } else {
            Self::ordered_marker_len(line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", true)]
    #[case("-item", false)]
    #[case("-- item", false)]
    #[case(" - item", false)]
    #[case("* item", false)]
    fn unordered_markers(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ListItem::is_unordered(line), expected);
    }

    #[rstest]
    #[case("1. first", Some(3))]
    #[case("42. answer", Some(4))]
    #[case("1.first", None)]
    #[case(". nothing", None)]
    #[case("1) paren", None)]
    #[case("a. letter", None)]
    #[case("2024", None)]
    fn ordered_markers(#[case] line: &str, #[case] expected: Option<usize>) {
        assert_eq!(ListItem::ordered_marker_len(line), expected);
    }

    #[test]
    fn text_offsets() {
        assert_eq!(ListItem::text_offset("- a"), Some(2));
        assert_eq!(ListItem::text_offset("10. b"), Some(4));
        assert_eq!(ListItem::text_offset("plain"), None);
    }
}
