//! Filename extraction from a file URL.

/// Returns the substring after the last `/` of `url` (the whole string if it
/// has none), percent-decoded.
pub fn filename_from_url(url: &str) -> String {
    let segment = match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    };
    percent_decode(segment)
}

/// False for names that cannot be created inside the mods directory.
pub fn is_usable_filename(name: &str) -> bool {
    !(name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0'))
}

fn percent_decode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.push(b);
            continue;
        }
        let h = bytes.next();
        let l = bytes.next();
        match (h.and_then(hex_digit), l.and_then(hex_digit)) {
            (Some(high), Some(low)) => out.push(high << 4 | low),
            _ => {
                out.push(b'%');
                out.extend(h);
                out.extend(l);
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
