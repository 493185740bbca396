// src/core/html.rs
//
// Hand-rolled HTML scanning, just enough for the portal's markup.
// Tag names match case-insensitively; attributes are never parsed beyond a
// substring check on the opening tag.

/// ASCII-only lowercasing. Leaves non-ASCII characters (and therefore byte
/// offsets) untouched, so positions found in the lowered copy are valid in
/// the original.
fn ascii_lower(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Iterator over `open…close` tag blocks, e.g. `<tr`/`</tr>`.
/// Yields whole blocks, opening and closing tags included.
pub struct Blocks<'a> {
    doc: &'a str,
    lowered: String,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.lowered.get(self.pos..)?.find(&self.open)? + self.pos;
        let open_end = self.doc[start..].find('>')? + start + 1;
        let close_rel = self.lowered[open_end..].find(&self.close)?;
        let end = open_end + close_rel + self.close.len();
        self.pos = end;
        Some(&self.doc[start..end])
    }
}

pub fn blocks_ci<'a>(doc: &'a str, open: &str, close: &str) -> Blocks<'a> {
    Blocks {
        doc,
        lowered: ascii_lower(doc),
        open: ascii_lower(open),
        close: ascii_lower(close),
        pos: 0,
    }
}

/// The opening tag of a block, attributes included.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Content between the opening tag and the final closing tag.
pub fn inner(block: &str) -> &str {
    let Some(open_end) = block.find('>') else { return "" };
    let Some(close_start) = block.rfind('<') else { return "" };
    if close_start > open_end {
        &block[open_end + 1..close_start]
    } else {
        ""
    }
}

/// Tables whose opening tag carries `class_sig` as a substring,
/// case-insensitive, in document order.
pub fn tables_with_class<'a>(doc: &'a str, class_sig: &str) -> Vec<&'a str> {
    let sig = ascii_lower(class_sig);
    blocks_ci(doc, "<table", "</table>")
        .filter(|t| ascii_lower(open_tag(t)).contains(&sig))
        .collect()
}

/// Drop everything between `<` and `>`. Total: an unterminated tag swallows
/// the rest of the input instead of erroring, which is the wanted behavior
/// for free-text bodies with broken markup.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
