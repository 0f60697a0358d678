// Fri Oct 16 2026 - Alex

pub struct StringUtils;

impl StringUtils {
    /// Joins the words of `s` with each word capitalised: `"on ground"` becomes
    /// `"OnGround"`. Anything that is not a letter or digit separates words.
    /// A word's tail is lower-cased unless the whole word is a two-letter (or
    /// shorter) capitalised acronym such as `ID`.
    pub fn capitalize_words(s: &str) -> String {
        let mut result = String::with_capacity(s.len());

        for word in s.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
            let keep_tail = word.chars().count() <= 2 && word.chars().all(|c| !c.is_lowercase());

            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                result.extend(first.to_uppercase());
            }
            if keep_tail {
                result.extend(chars);
            } else {
                result.extend(chars.flat_map(char::to_lowercase));
            }
        }

        result
    }

    /// Lower-cases only the first character.
    pub fn lower_first(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) => c.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn is_valid_identifier(s: &str) -> bool {
        let mut chars = s.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return false,
        };

        if !first.is_alphabetic() && first != '_' && first != '$' {
            return false;
        }

        chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    }

    /// Returns the longest word not in `ignored`; the first one wins a tie.
    pub fn longest_word<'a>(words: &[&'a str], ignored: &[&str]) -> Option<&'a str> {
        let mut selected: Option<&'a str> = None;

        for &word in words {
            if ignored.contains(&word) {
                continue;
            }
            match selected {
                Some(current) if word.len() <= current.len() => {}
                _ => selected = Some(word),
            }
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_words() {
        assert_eq!(StringUtils::capitalize_words("Entity ID"), "EntityID");
        assert_eq!(StringUtils::capitalize_words("EID"), "Eid");
        assert_eq!(StringUtils::capitalize_words("on ground"), "OnGround");
        assert_eq!(StringUtils::capitalize_words("Spawn Mob"), "SpawnMob");
        assert_eq!(StringUtils::capitalize_words("Velocity (X)"), "VelocityX");
        assert_eq!(StringUtils::capitalize_words("  "), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(StringUtils::lower_first("The entity's id"), "the entity's id");
        assert_eq!(StringUtils::lower_first("X"), "x");
        assert_eq!(StringUtils::lower_first(""), "");
    }

    #[test]
    fn test_longest_word() {
        let ignored = ["array", "of"];

        assert_eq!(StringUtils::longest_word(&["array", "of", "byte"], &ignored), Some("byte"));
        assert_eq!(StringUtils::longest_word(&["int", "array", "byte"], &ignored), Some("byte"));
        assert_eq!(StringUtils::longest_word(&["short", "array", "float"], &ignored), Some("short"));
        assert_eq!(StringUtils::longest_word(&["array", "of"], &ignored), None);
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(StringUtils::is_valid_identifier("Packet"));
        assert!(StringUtils::is_valid_identifier("_x1"));
        assert!(!StringUtils::is_valid_identifier("1x"));
        assert!(!StringUtils::is_valid_identifier("a-b"));
        assert!(!StringUtils::is_valid_identifier(""));
    }
}
