// Fri Oct 16 2026 - Alex

//! Text heuristics that turn documentation wording into source identifiers.

use crate::utils::StringUtils;

const ARRAY_STOP_WORDS: [&str; 2] = ["array", "of"];

/// Documentation vocabulary mapped onto the wrapper's type names. Applied to
/// the lower-cased token, in order.
const TYPE_ALIASES: [(&str, &str); 3] = [
    ("string", "String"),
    ("slot", "ItemStack"),
    ("metadata", "WrappedDataWatcher"),
];

const ELEMENT_FALLBACK: &str = "Object";

/// Derives the accessor type from a documented type such as `"int"`,
/// `"string"` or `"array of byte"`.
pub fn accessor_type(documented_type: &str) -> String {
    let mut token = documented_type.to_lowercase();
    for (alias, replacement) in TYPE_ALIASES {
        token = token.replace(alias, replacement);
    }
    token = token.replace("unsigned", "");

    if token.contains("array") {
        let words: Vec<&str> = token.split_whitespace().collect();
        let element = StringUtils::longest_word(&words, &ARRAY_STOP_WORDS).unwrap_or(ELEMENT_FALLBACK);
        format!("{}[]", element)
    } else {
        token.split_whitespace().collect()
    }
}

/// The `<Name>` part of `get<Name>`/`set<Name>`.
pub fn method_name(display_name: &str) -> String {
    StringUtils::capitalize_words(display_name).replace("Eid", "EntityID")
}

/// Turns a note into the tail of "Retrieve ..." / "Set ...", without the
/// closing period.
pub fn doc_sentence(note: &str, display_name: &str) -> String {
    let note = note.trim();
    let note = note.strip_suffix('.').unwrap_or(note);
    if note.is_empty() {
        return StringUtils::lower_first(display_name.trim());
    }
    StringUtils::lower_first(note)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_tokens_pass_through() {
        assert_eq!(accessor_type("int"), "int");
        assert_eq!(accessor_type("Byte"), "byte");
        assert_eq!(accessor_type("unsigned short"), "short");
        assert_eq!(accessor_type(" double "), "double");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(accessor_type("string"), "String");
        assert_eq!(accessor_type("String"), "String");
        assert_eq!(accessor_type("slot"), "ItemStack");
        assert_eq!(accessor_type("Metadata"), "WrappedDataWatcher");
    }

    #[test]
    fn test_array_element_extraction() {
        assert_eq!(accessor_type("array of byte"), "byte[]");
        assert_eq!(accessor_type("unsigned byte array"), "byte[]");
        assert_eq!(accessor_type("array of slot"), "ItemStack[]");
        assert_eq!(accessor_type("Array of String"), "String[]");
        assert_eq!(accessor_type("array"), "Object[]");
    }

    #[test]
    fn test_method_name() {
        assert_eq!(method_name("Entity ID"), "EntityID");
        assert_eq!(method_name("EID"), "EntityID");
        assert_eq!(method_name("Head Yaw"), "HeadYaw");
        assert_eq!(method_name("on ground"), "OnGround");
    }

    #[test]
    fn test_doc_sentence() {
        assert_eq!(doc_sentence("The entity's id", "Entity ID"), "the entity's id");
        assert_eq!(doc_sentence("Bit flags.", "Flags"), "bit flags");
        assert_eq!(doc_sentence("  ", "Flags"), "flags");
    }
}
