/// Canonicalizes a candidate identifier before classification: strips every
/// character that is not alphanumeric, upper-cases what remains, and
/// left-pads numeric-leading candidates with zeros up to the standard
/// 9 characters.
///
/// Short DNIs are the only identifiers that legitimately arrive with fewer
/// than 9 characters; NIE and CIF are letter-leading and are never padded.
/// Candidates at 9 characters or more are left untouched, never truncated.
pub fn normalize(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect();

    match cleaned.chars().next() {
        Some(first) if !first.is_alphabetic() => format!("{cleaned:0>9}"),
        _ => cleaned,
    }
}
