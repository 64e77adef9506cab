use once_cell::sync::Lazy;
use regex::Regex;

static SOURCE_MAP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)//[#@]\s*sourceMappingURL=([^\s]+)|/\*[#@]\s*sourceMappingURL=([^*]+)\*/").unwrap()
});

/// Extract raw `sourceMappingURL` values from generated script text.
/// Returns a vector preserving original order.
pub fn extract_map_fields(js: &str) -> Vec<String> {
    let mut fields = Vec::new();
    for caps in SOURCE_MAP_RE.captures_iter(js) {
        if let Some(m) = caps.get(1).or_else(|| caps.get(2)) {
            let field = m.as_str().trim();
            if !field.is_empty() {
                fields.push(field.to_string());
            }
        }
    }
    fields
}

/// The map field a runtime would honour: the last annotation in the script.
pub fn find_map_field(js: &str) -> Option<String> {
    extract_map_fields(js).pop()
}
