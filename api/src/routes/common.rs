use validator::ValidationErrors;

/// Flattens validator field errors into one `; `-separated message.
///
/// Errors declared without a message fall back to `"<field> is invalid"`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Splits a `sort` query value such as `"-created_at,name"` into `(field, descending)` pairs.
pub fn sort_fields(sort: &str) -> impl Iterator<Item = (&str, bool)> {
    sort.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| match f.strip_prefix('-') {
            Some(field) => (field, true),
            None => (f, false),
        })
}
