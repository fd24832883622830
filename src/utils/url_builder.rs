/// Build the external launch URL for a resource: `base/identifier`.
///
/// The identifier is percent-encoded so ARNs (which contain `:` and `/`)
/// stay a single path segment. Returns `None` for a blank identifier.
pub fn launch_url(base_url: &str, identifier: &str) -> Option<String> {
    let id = identifier.trim();
    if id.is_empty() {
        return None;
    }
    let base = base_url.trim_end_matches('/');
    Some(format!("{}/{}", base, urlencoding::encode(id)))
}
