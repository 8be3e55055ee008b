const ENTRY_KEY_PREFIX: &str = "entry:";

/// Returns the cache key for an entry projection, keyed by slug.
pub fn entry_key(slug: &str) -> String {
    format!("{ENTRY_KEY_PREFIX}{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key() {
        assert_eq!(entry_key("pear-watch"), "entry:pear-watch");
        assert_eq!(entry_key("pear-watch-1"), "entry:pear-watch-1");
    }
}
