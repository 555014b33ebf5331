//! Remote file path derivation

/// Characters replaced by `-` in sheet names when building file paths
const HOSTILE_CHARS: &[char] = &['/', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Sanitize a sheet name for use as a file name
///
/// Path-hostile characters become `-` and whitespace runs become `_`.
pub fn sanitize_sheet_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if HOSTILE_CHARS.contains(&ch) {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Build the remote path for a sheet: `<prefix>/<sanitized-name>.json`
///
/// A trailing `/` on the prefix is trimmed; an empty prefix puts the
/// file at the repository root.
pub fn remote_path(prefix: &str, sheet_name: &str) -> String {
    let file = format!("{}.json", sanitize_sheet_name(sheet_name));
    let prefix = prefix.trim().trim_end_matches('/');
    if prefix.is_empty() {
        file
    } else {
        format!("{}/{}", prefix, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize_replaces_hostile_chars() {
        assert_eq!(sanitize_sheet_name("a/b c?"), "a-b_c-");
        assert_eq!(sanitize_sheet_name("q:1|2\"3"), "q-1-2-3");
        assert_eq!(sanitize_sheet_name("<plan>"), "-plan-");
    }

    #[test]
    fn test_sanitize_collapses_whitespace_runs() {
        assert_eq!(sanitize_sheet_name("a  b\tc"), "a_b_c");
    }

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_sheet_name("Budget2026"), "Budget2026");
    }

    #[test]
    fn test_remote_path_joins_prefix() {
        assert_eq!(remote_path("sheets", "My Sheet"), "sheets/My_Sheet.json");
        assert_eq!(remote_path("sheets/", "My Sheet"), "sheets/My_Sheet.json");
        assert_eq!(remote_path("", "My Sheet"), "My_Sheet.json");
        assert_eq!(remote_path("a/b", "x"), "a/b/x.json");
    }
}
