//! Field name to display label conversion.

/// Converts a field identifier into an upper-snake-case label.
///
/// Word boundaries are transitions into an uppercase letter: after a
/// lowercase letter (`FieldName` -> `FIELD_NAME`), or at the last capital of
/// an acronym that is followed by a lowercase letter (`HTTPStatus` ->
/// `HTTP_STATUS`). Runs of capitals stay together (`ID` -> `ID`) and
/// snake_case identifiers keep their single underscores (`created_at` ->
/// `CREATED_AT`).
pub fn field_name_to_label(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut label = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev != '_' && (prev.is_lowercase() || next_is_lower) {
                label.push('_');
            }
        }
        label.extend(c.to_uppercase());
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_to_label() {
        let cases = [
            ("Name", "NAME"),
            ("FieldName", "FIELD_NAME"),
            ("HTTPStatus", "HTTP_STATUS"),
            ("ID", "ID"),
            ("URLPath", "URL_PATH"),
            ("XMLParser", "XML_PARSER"),
        ];
        for (input, expected) in cases {
            assert_eq!(field_name_to_label(input), expected, "input: {input}");
        }
    }

    #[test]
    fn test_snake_case_names() {
        assert_eq!(field_name_to_label("name"), "NAME");
        assert_eq!(field_name_to_label("created_at"), "CREATED_AT");
        assert_eq!(field_name_to_label("http_Status"), "HTTP_STATUS");
        assert_eq!(field_name_to_label(""), "");
    }

    #[test]
    fn test_label_is_stable() {
        let first = field_name_to_label("RequestID");
        assert_eq!(first, "REQUEST_ID");
        assert_eq!(field_name_to_label("RequestID"), first);
    }
}
