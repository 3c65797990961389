// src/core/sanitize.rs

/// Decode the handful of entities the listing pages actually use.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&rsquo;", "'")
        .replace("&lsquo;", "'")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove every occurrence of `marker`, then re-normalize whitespace.
pub fn strip_marker(s: &str, marker: &str) -> String {
    if marker.is_empty() || !s.contains(marker) {
        return s.to_string();
    }
    normalize_ws(&s.replace(marker, ""))
}

/// File-system safe stem: alphanumerics kept, whitespace runs become '_'.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_newlines_and_tabs() {
        assert_eq!(normalize_ws("  Maoists\n\t attacked   a camp "), "Maoists attacked a camp");
    }

    #[test]
    fn marker_removed_anywhere() {
        assert_eq!(strip_marker("Two killed. Read less...", "Read less..."), "Two killed.");
        assert_eq!(strip_marker("No marker here", "Read less..."), "No marker here");
    }

    #[test]
    fn entities_decode_amp_last() {
        assert_eq!(normalize_entities("A&amp;lt;B&nbsp;C"), "A&lt;B C");
    }

    #[test]
    fn filename_keeps_words() {
        assert_eq!(sanitize_filename("ALL Data", "sheet"), "ALL_Data");
        assert_eq!(sanitize_filename("raw_zone_incident_summaries", "sheet"), "raw_zone_incident_summaries");
        assert_eq!(sanitize_filename("///", "sheet"), "sheet");
    }
}
