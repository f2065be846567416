/// Turn a caption into a URL path segment.
///
/// Whitespace runs become a single hyphen, anything outside
/// `[A-Za-z0-9_-]` is dropped, hyphen runs collapse, leading and trailing
/// hyphens are stripped and the result is lowercased. Non-ASCII letters are
/// dropped, not transliterated. The result may be empty.
pub fn slugify(caption: &str) -> String {
    let mut out = String::with_capacity(caption.len());
    let mut pending_hyphen = false;

    for ch in caption.trim().chars() {
        let ch = if ch.is_whitespace() { '-' } else { ch };
        if ch == '-' {
            pending_hyphen = true;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        }
    }

    out
}

/// Normalize a path: exactly one leading `/`, no empty segments and no
/// trailing `/` except for the root path itself.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Join a parent path and a segment into a normalized path.
pub(crate) fn join_path(parent: &str, segment: &str) -> String {
    normalize_path(&format!("{parent}/{segment}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_caption() {
        assert_eq!(slugify("Home"), "home");
        assert_eq!(slugify("Sub Menu"), "sub-menu");
    }

    #[test]
    fn slugify_strips_noise_and_non_ascii() {
        assert_eq!(slugify("Über uns! "), "ber-uns");
        assert_eq!(slugify("  Sales & Marketing  "), "sales-marketing");
        assert_eq!(slugify("--a--b--"), "a-b");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn slugify_collapses_mixed_whitespace() {
        assert_eq!(slugify("Order\t\n  History"), "order-history");
    }

    #[test]
    fn slugify_can_be_empty() {
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("Настройки"), "");
    }

    #[test]
    fn normalize_path_cases() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("home"), "/home");
        assert_eq!(normalize_path("//home//sub/"), "/home/sub");
        assert_eq!(normalize_path("/home/"), "/home");
    }

    #[test]
    fn join_path_from_root() {
        assert_eq!(join_path("/", "home"), "/home");
        assert_eq!(join_path("/home", "sub-menu"), "/home/sub-menu");
    }
}
