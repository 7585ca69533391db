//! Name derivation for columns, tables and routes.
//!
//! Column names arrive in whatever shape the database uses (`created_at`,
//! `Created At`, `created-at`, `createdAt`). Everything that needs a
//! JavaScript-safe name goes through [`to_identifier`] so the generated state
//! keys, property accesses and form bindings always agree.

/// Split a raw name into words.
///
/// `_`, `-` and whitespace separate words. Any other character that is not
/// ASCII alphanumeric is dropped without ending the current word, so `e.mail`
/// stays one word. A new word also starts at an upper-case letter that follows
/// a lower-case letter or a digit, so camelCase input splits the same way
/// snake_case does.
fn split_words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut prev: Option<char> = None;

    for c in raw.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            prev = None;
            continue;
        }
        if !c.is_ascii_alphanumeric() {
            continue;
        }

        let boundary = c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
        if boundary && !word.is_empty() {
            words.push(std::mem::take(&mut word));
        }

        word.push(c);
        prev = Some(c);
    }

    if !word.is_empty() {
        words.push(word);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

/// Derive the camelCase access name for a column (e.g., "created_at" -> "createdAt").
///
/// Returns an empty string when the name has no ASCII alphanumerics. A result
/// that would start with a digit is prefixed with `_`. The mapping is
/// idempotent: feeding an identifier back in returns it unchanged.
pub fn to_identifier(raw: &str) -> String {
    let mut ident = String::new();
    for (i, word) in split_words(raw).into_iter().enumerate() {
        let lower = word.to_ascii_lowercase();
        if i == 0 {
            ident.push_str(&lower);
        } else {
            ident.push_str(&capitalize(&lower));
        }
    }

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Convert a table name to PascalCase (e.g., "user_roles" -> "UserRoles").
///
/// Tokens are split on non-alphanumerics and title-cased, so the tail of each
/// token is lower-cased ("USER_ROLES" -> "UserRoles").
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| capitalize(&part.to_ascii_lowercase()))
        .collect()
}

/// Human-readable column heading (e.g., "created_at" -> "Created At").
pub fn to_label(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Route segment for a table (e.g., "User_Roles" -> "user-roles").
pub fn to_route_id(table: &str) -> String {
    table
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
