use std::borrow::Cow;
use std::io::{self, Write};

/// Replaces the characters `&`, `<`, `>`, `"` and `'` with their HTML
/// entities. Clean input is returned borrowed.
///
/// The same table is used for text content and attribute values, so escaped
/// output is safe in both contexts regardless of the surrounding quoting.
pub fn escape(s: &str) -> Cow<'_, str> {
    let Some(first) = s.bytes().position(needs_escape) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len() + 8);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        match entity(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Streaming form of [`escape`]: unescaped runs are written as-is between
/// entities, so clean text never allocates.
pub(crate) fn escape_into(out: &mut dyn Write, s: &str) -> io::Result<()> {
    let bytes = s.as_bytes();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if needs_escape(b) {
            if start < i {
                out.write_all(&bytes[start..i])?;
            }
            // needs_escape only matches ASCII, so b is a char boundary.
            out.write_all(entity(b as char).unwrap_or_default().as_bytes())?;
            start = i + 1;
        }
    }
    if start < bytes.len() {
        out.write_all(&bytes[start..])?;
    }

    Ok(())
}

fn needs_escape(b: u8) -> bool {
    matches!(b, b'&' | b'<' | b'>' | b'"' | b'\'')
}

fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&#34;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}
