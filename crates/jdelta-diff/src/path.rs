//! Path encoding for change locations.
//!
//! Object members append `.key` (or start the path with a bare `key` at the
//! root). Array elements always append `[i]`, even at the root. The empty
//! string is the root itself. Keys are not escaped, so a key containing `.`
//! or `[` yields a path that cannot be split back unambiguously. Reports
//! quote paths as JSON strings, which escapes any `"` in a key.

/// Path of the member `key` of the object at `parent`.
pub fn key_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

/// Path of element `index` of the array at `parent`.
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_key_is_bare() {
        assert_eq!(key_path("", "a"), "a");
    }

    #[test]
    fn nested_keys_are_dotted() {
        assert_eq!(key_path(&key_path("a", "b"), "c"), "a.b.c");
    }

    #[test]
    fn root_index_is_bracketed() {
        assert_eq!(index_path("", 2), "[2]");
    }

    #[test]
    fn keys_and_indices_mix() {
        let p = index_path(&key_path(&index_path(&key_path("a", "b"), 2), "c"), 0);
        assert_eq!(p, "a.b[2].c[0]");
    }

    #[test]
    fn nested_arrays() {
        assert_eq!(index_path(&index_path("", 1), 0), "[1][0]");
    }
}
