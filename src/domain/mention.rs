//! Mention tokenizer.
//!
//! A mention is an ASCII `@` immediately followed by a maximal run of one or more word
//! characters (`[A-Za-z0-9_]`). Every non-overlapping occurrence is reported, in order.
//! Nothing is required before the `@`, so `mail@host` yields `host`.

/// Word characters allowed in a mentioned name.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Iterator over the raw (not yet canonicalized) names mentioned in `text`.
pub struct Mentions<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Mentions<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            let at = self.pos;
            self.pos += 1;
            if bytes[at] != b'@' {
                continue;
            }
            let start = at + 1;
            let end = bytes[start..]
                .iter()
                .position(|&b| !is_word_byte(b))
                .map_or(bytes.len(), |n| start + n);
            if end > start {
                self.pos = end;
                // Both bounds sit next to ASCII bytes, so they are char boundaries.
                return Some(&self.text[start..end]);
            }
        }
        None
    }
}

/// Scan `text` for mentions.
pub fn mentions(text: &str) -> Mentions<'_> {
    Mentions { text, pos: 0 }
}

/// Read a bare handle field (e.g. a reply target) under the same rule as a mention.
///
/// Surrounding whitespace and one leading `@` are dropped; what is left must be a
/// non-empty run of word characters, otherwise `None`.
pub fn parse_handle(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let name = trimmed.strip_prefix('@').unwrap_or(trimmed);
    if !name.is_empty() && name.bytes().all(is_word_byte) {
        Some(name)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        mentions(text).collect()
    }

    #[test]
    fn test_finds_all_mentions() {
        assert_eq!(collect("@Bob @CAROL @bob"), vec!["Bob", "CAROL", "bob"]);
    }

    #[test]
    fn test_stops_at_non_word_char() {
        assert_eq!(collect("hello @Bob!"), vec!["Bob"]);
        assert_eq!(collect("cc @dan_1.@eve-x"), vec!["dan_1", "eve"]);
    }

    #[test]
    fn test_bare_at_is_not_a_mention() {
        assert!(collect("meet @ noon, @!").is_empty());
        assert!(collect("trailing @").is_empty());
        assert_eq!(collect("@@bob"), vec!["bob"]);
    }

    #[test]
    fn test_embedded_at_still_matches() {
        assert_eq!(collect("mail me: ann@example.com"), vec!["example"]);
    }

    #[test]
    fn test_non_ascii_ends_run() {
        assert_eq!(collect("héllo @zoé and @日本"), vec!["zo"]);
    }

    #[test]
    fn test_parse_handle() {
        assert_eq!(parse_handle(" @Bob "), Some("Bob"));
        assert_eq!(parse_handle("dan_1"), Some("dan_1"));
        assert_eq!(parse_handle("Zed Smith"), None);
        assert_eq!(parse_handle("@@bob"), None);
        assert_eq!(parse_handle("@"), None);
        assert_eq!(parse_handle("   "), None);
        assert_eq!(parse_handle("zoé"), None);
    }

    #[test]
    fn test_empty_text() {
        assert!(collect("").is_empty());
    }
}
