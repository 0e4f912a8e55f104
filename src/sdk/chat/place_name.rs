pub const PLACEHOLDER_PLACE: &str = "your destination";

/// Short name for a full address: the text before the first comma, or the
/// first two space-separated tokens when there is no comma.
pub fn extract_place_name(full_address: &str) -> String {
    if full_address.is_empty() {
        return String::new();
    }
    match full_address.find(',') {
        Some(idx) => full_address[..idx].to_string(),
        None => full_address.split(' ').take(2).collect::<Vec<_>>().join(" "),
    }
}

/// Like [`extract_place_name`] but never empty.
pub fn display_place_name(full_address: &str) -> String {
    let name = extract_place_name(full_address);
    if name.is_empty() {
        PLACEHOLDER_PLACE.to_string()
    } else {
        name
    }
}
