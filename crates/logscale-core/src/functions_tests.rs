use std::collections::HashSet;

use crate::functions::{RESERVED_FUNCTIONS, is_reserved};

#[test]
fn catalog_has_no_duplicates() {
    let unique: HashSet<_> = RESERVED_FUNCTIONS.iter().collect();
    assert_eq!(unique.len(), RESERVED_FUNCTIONS.len());
}

#[test]
fn namespaced_entries_have_one_colon() {
    for name in RESERVED_FUNCTIONS {
        assert!(name.matches(':').count() <= 1, "{name}");
        assert!(!name.starts_with(':') && !name.ends_with(':'), "{name}");
    }
}

#[test]
fn lookup_is_case_sensitive() {
    assert!(is_reserved("groupBy"));
    assert!(is_reserved("test"));
    assert!(is_reserved("text:contains"));
    assert!(!is_reserved("groupby"));
    assert!(!is_reserved("error"));
    assert!(!is_reserved("text"));
}

