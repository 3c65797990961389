// src/core/html.rs
//
// Small case-insensitive scanners over raw HTML text. No DOM: we locate
// element blocks by tag name, read attributes from the opener, and strip
// tags to get visible text.
//
// All index math is done on an ASCII-lowercased copy of the document,
// which keeps byte offsets identical to the source document.

/// Next `<tag …>` opener at or after `from`. Returns (start, end_of_opener).
/// `<tdx` does not match `td`.
fn find_opener(lc: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let pat = join!("<", tag);
    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find(&pat)? + pos;
        let after = start + pat.len();
        match lc.as_bytes().get(after) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {
                let open_end = lc[after..].find('>')? + after + 1;
                return Some((start, open_end));
            }
            Some(_) => pos = after,
            None => return None,
        }
    }
}

/// End (exclusive) of the element whose opener ends at `from`, honoring
/// nested elements of the same tag.
fn match_close(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let close = join!("</", tag);
    let mut depth = 1usize;
    let mut pos = from;
    loop {
        let next_close = lc.get(pos..)?.find(&close)? + pos;
        match find_opener(lc, tag, pos) {
            Some((s, e)) if s < next_close => {
                depth += 1;
                pos = e;
            }
            _ => {
                let end = lc[next_close..]
                    .find('>')
                    .map(|i| next_close + i + 1)
                    .unwrap_or(lc.len());
                depth -= 1;
                if depth == 0 {
                    return Some(end);
                }
                pos = end;
            }
        }
    }
}

/// All `<tag>` element blocks (opener through closer) whose opener passes
/// `keep`, in opener order. Matches nested inside a kept block are returned
/// too; an unclosed block runs to the end of the document.
pub fn find_elements<'a, F>(doc: &'a str, tag: &str, mut keep: F) -> Vec<&'a str>
where
    F: FnMut(&str) -> bool,
{
    let lc = doc.to_ascii_lowercase();
    let tag = tag.to_ascii_lowercase();
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((start, open_end)) = find_opener(&lc, &tag, pos) {
        if keep(&doc[start..open_end]) {
            let end = match_close(&lc, &tag, open_end).unwrap_or(doc.len());
            out.push(&doc[start..end]);
        }
        pos = open_end;
    }
    out
}

/// Attribute value from an opener. Case-insensitive name; single, double or
/// no quotes.
pub fn attr_value(opener: &str, name: &str) -> Option<String> {
    let b = opener.as_bytes();
    let n = b.len();
    let mut i = 0usize;

    // skip "<tag"
    if b.first() == Some(&b'<') { i += 1; }
    while i < n && !b[i].is_ascii_whitespace() && b[i] != b'>' && b[i] != b'/' { i += 1; }

    while i < n {
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        if i >= n || b[i] == b'>' { return None; }

        let name_start = i;
        while i < n && !b[i].is_ascii_whitespace() && b[i] != b'=' && b[i] != b'>' && b[i] != b'/' { i += 1; }
        let attr = &opener[name_start..i];

        while i < n && b[i].is_ascii_whitespace() { i += 1; }
        let mut value = None;
        if i < n && b[i] == b'=' {
            i += 1;
            while i < n && b[i].is_ascii_whitespace() { i += 1; }
            if i < n && (b[i] == b'"' || b[i] == b'\'') {
                let q = b[i];
                let v_start = i + 1;
                i = v_start;
                while i < n && b[i] != q { i += 1; }
                value = Some(&opener[v_start..i.min(n)]);
                i += 1;
            } else {
                let v_start = i;
                while i < n && !b[i].is_ascii_whitespace() && b[i] != b'>' { i += 1; }
                value = Some(&opener[v_start..i]);
            }
        }

        if attr.eq_ignore_ascii_case(name) {
            return Some(s!(value.unwrap_or("")));
        }
    }
    None
}

/// `class` attribute contains `class` as one of its tokens.
pub fn has_class(opener: &str, class: &str) -> bool {
    attr_value(opener, "class")
        .map(|v| v.split_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
        .unwrap_or(false)
}

/// `style` attribute equals `style`, ignoring whitespace, case and a
/// trailing ';'.
pub fn style_is(opener: &str, style: &str) -> bool {
    fn norm(s: &str) -> String {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        compact.trim_end_matches(';').to_string()
    }
    attr_value(opener, "style")
        .map(|v| norm(&v) == norm(style))
        .unwrap_or(false)
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
        return block[oe + 1..].to_string();
    }
    s!()
}

/// Drop `<…>` tags; whitespace is normalized afterwards.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Visible text of an element block: inner HTML, tags stripped, entities
/// decoded, whitespace collapsed.
pub fn block_text(block: &str) -> String {
    use super::sanitize::{normalize_entities, normalize_ws};
    let inner = inner_after_open_tag(block);
    normalize_ws(&normalize_entities(&strip_tags(inner)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_value_variants() {
        let o = r#"<td STYLE="width: 15%;" class='a b' data-x=7>"#;
        assert_eq!(attr_value(o, "style").as_deref(), Some("width: 15%;"));
        assert_eq!(attr_value(o, "class").as_deref(), Some("a b"));
        assert_eq!(attr_value(o, "data-x").as_deref(), Some("7"));
        assert_eq!(attr_value(o, "id"), None);
    }

    #[test]
    fn class_and_style_matching() {
        assert!(has_class(r#"<div class="more expanded">"#, "more"));
        assert!(!has_class(r#"<div class="moreover">"#, "more"));
        assert!(style_is(r#"<td style="width:15%">"#, "width: 15%;"));
        assert!(!style_is(r#"<td style="width: 85%;">"#, "width: 15%;"));
    }

    #[test]
    fn nested_blocks_close_at_matching_tag() {
        let doc = r#"<div class="more">outer <div>inner</div> tail</div><div class="more">two</div>"#;
        let blocks = find_elements(doc, "div", |o| has_class(o, "more"));
        assert_eq!(blocks.len(), 2);
        assert_eq!(block_text(blocks[0]), "outer inner tail");
        assert_eq!(block_text(blocks[1]), "two");
    }

    #[test]
    fn matches_inside_a_kept_block_are_found() {
        let doc = r#"<div class="more">a <div class="more">b</div></div>"#;
        let blocks = find_elements(doc, "div", |o| has_class(o, "more"));
        assert_eq!(blocks.len(), 2);
        assert_eq!(block_text(blocks[0]), "a b");
        assert_eq!(block_text(blocks[1]), "b");
    }

    #[test]
    fn tag_prefix_does_not_match() {
        let doc = "<tdx>no</tdx><TD>yes</TD>";
        let blocks = find_elements(doc, "td", |_| true);
        assert_eq!(blocks, vec!["<TD>yes</TD>"]);
    }

    #[test]
    fn inline_tags_do_not_split_words() {
        assert_eq!(strip_tags("Maoists <b>kill</b>ed two &nbsp;"), "Maoists killed two &nbsp;");
        assert_eq!(block_text("<div>A&nbsp;&nbsp;<i>B</i></div>"), "A B");
    }
}
