//! Pure string transforms used across emission.
//!
//! Namespace segments and directory names are UpperCamel, table and join
//! column names are snake_case, inverse field names are pluralized. All of
//! these are explicit functions; nothing is patched onto `str`.

use convert_case::{Case, Casing};

/// `"shop system"` / `"shop_system"` → `"ShopSystem"`.
pub fn upper_camel(s: &str) -> String {
    s.to_case(Case::UpperCamel)
}

/// `"PostTag"` → `"post_tag"`. Used for table and join column names.
pub fn snake(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// Lowercase the first character, leave the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Naive pluralization by appending `s`, the convention Doctrine inverse
/// field names follow here. Irregular nouns are the caller's problem.
pub fn pluralize(s: &str) -> String {
    format!("{}s", s)
}
