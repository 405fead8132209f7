// ============================================================================
// Case Conversion
// camelCase, PascalCase, snake_case, and kebab-case rewriting
// ============================================================================

/// Uppercase the first character, leaving the rest untouched.
///
/// Characters whose uppercase form expands to multiple characters (such as
/// the German sharp s) expand in place.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert `snake_case` or `kebab-case` text to `camelCase`.
///
/// A separator is consumed only when an ASCII lowercase letter follows it;
/// any other separator stays in place. `"foo-Bar"` is therefore unchanged
/// while `"foo-bar"` becomes `"fooBar"`.
pub fn to_camel_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if (ch == '-' || ch == '_') && chars.peek().is_some_and(char::is_ascii_lowercase) {
            if let Some(next) = chars.next() {
                result.push(next.to_ascii_uppercase());
            }
        } else {
            result.push(ch);
        }
    }
    result
}

/// Convert text to `PascalCase`: camel case with the first character
/// uppercased.
pub fn to_pascal_case(text: &str) -> String {
    capitalize(&to_camel_case(text))
}

/// Convert `camelCase`, `kebab-case`, or space-separated text to
/// `snake_case`.
///
/// Each ASCII uppercase letter gains a leading underscore and everything is
/// lowercased, a single leading underscore produced that way is trimmed,
/// and finally runs of hyphens and whitespace collapse to one underscore.
pub fn to_snake_case(text: &str) -> String {
    delimited_case(text, '-', '_')
}

/// Convert `camelCase`, `snake_case`, or space-separated text to
/// `kebab-case`.
pub fn to_kebab_case(text: &str) -> String {
    delimited_case(text, '_', '-')
}

/// Shared rewrite for the delimiter-based cases. `foreign` is the other
/// style's delimiter, which collapses (with whitespace) into `delimiter`.
fn delimited_case(text: &str, foreign: char, delimiter: char) -> String {
    let mut lowered = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if ch.is_ascii_uppercase() {
            lowered.push(delimiter);
        }
        lowered.extend(ch.to_lowercase());
    }

    let trimmed = match lowered.strip_prefix(delimiter) {
        Some(rest) => rest,
        None => &lowered,
    };

    let mut result = String::with_capacity(trimmed.len());
    let mut pending = false;
    for ch in trimmed.chars() {
        if ch == foreign || ch.is_whitespace() {
            pending = true;
        } else {
            if pending {
                result.push(delimiter);
                pending = false;
            }
            result.push(ch);
        }
    }
    if pending {
        result.push(delimiter);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("Hello"), "Hello");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_name"), "userName");
        assert_eq!(to_camel_case("user-name-first"), "userNameFirst");
        assert_eq!(to_camel_case("already"), "already");
        assert_eq!(to_camel_case("_leading"), "Leading");
    }

    #[test]
    fn test_to_camel_case_keeps_unconvertible_separators() {
        // Separator not followed by a lowercase letter stays put.
        assert_eq!(to_camel_case("foo-Bar"), "foo-Bar");
        assert_eq!(to_camel_case("foo--bar"), "foo-Bar");
        assert_eq!(to_camel_case("foo_1x"), "foo_1x");
        assert_eq!(to_camel_case("trailing_"), "trailing_");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user_name"), "UserName");
        assert_eq!(to_pascal_case("user-name"), "UserName");
        assert_eq!(to_pascal_case("x"), "X");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("userName"), "user_name");
        assert_eq!(to_snake_case("UserName"), "user_name");
        assert_eq!(to_snake_case("user name"), "user_name");
        assert_eq!(to_snake_case("user-name"), "user_name");
        assert_eq!(to_snake_case("user--extra name"), "user_extra_name");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("userName"), "user-name");
        assert_eq!(to_kebab_case("UserName"), "user-name");
        assert_eq!(to_kebab_case("user name"), "user-name");
        assert_eq!(to_kebab_case("user_name"), "user-name");
    }

    #[test]
    fn test_case_round_trip() {
        assert_eq!(to_camel_case(&to_snake_case("userName")), "userName");
        assert_eq!(to_kebab_case(&to_camel_case("user-name")), "user-name");
    }
}
