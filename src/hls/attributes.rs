/// Split an HLS attribute list on commas outside quoted strings.
pub fn split(s: &str) -> Vec<&str> {
    let mut attrs = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                attrs.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < s.len() {
        attrs.push(s[start..].trim());
    }

    attrs
}

/// Iterate `(KEY, value)` pairs with keys upper-cased and quotes stripped.
pub fn pairs(s: &str) -> impl Iterator<Item = (String, &str)> {
    split(s).into_iter().filter_map(|attr| {
        let (key, value) = attr.split_once('=')?;
        Some((key.trim().to_uppercase(), value.trim().trim_matches('"')))
    })
}
