//! Property-based tests for filtering and retention.
//!
//! These tests use proptest to generate file names, pattern lists, and
//! archive histories, and check that selection and pruning rules hold for
//! all of them.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;
use zipstamp_core::FilterSpec;
use zipstamp_core::collect;
use zipstamp_core::enforce_retention;
use zipstamp_core::should_include;

fn file_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.(txt|log|csv|md)"
}

fn pattern() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\*\\.(txt|log|csv|md)",
        "[a-z]{1,3}\\*",
        "[a-z]{1,8}\\.(txt|log)",
        Just("*".to_string()),
    ]
}

proptest! {
    /// A name matching any exclude pattern is never selected.
    #[test]
    fn prop_exclude_always_wins(
        name in file_name(),
        include in prop::collection::vec(pattern(), 0..4),
        mut exclude in prop::collection::vec(pattern(), 0..4),
    ) {
        exclude.push(name.clone());
        prop_assert!(!should_include(&name, &include, &exclude));
    }

    /// With no include patterns, selection depends only on exclude patterns.
    #[test]
    fn prop_empty_include_depends_only_on_exclude(
        name in file_name(),
        exclude in prop::collection::vec(pattern(), 0..4),
    ) {
        let excluded = exclude
            .iter()
            .any(|p| zipstamp_core::creation::filters::matches_pattern(&name, p));
        prop_assert_eq!(should_include(&name, &[] as &[String], &exclude), !excluded);
    }

    /// A non-empty include list selects only names matching one of them.
    #[test]
    fn prop_include_requires_a_match(
        name in file_name(),
        include in prop::collection::vec(pattern(), 1..4),
    ) {
        let matched = include
            .iter()
            .any(|p| zipstamp_core::creation::filters::matches_pattern(&name, p));
        prop_assert_eq!(should_include(&name, &include, &[] as &[String]), matched);
    }

    /// Collecting an unchanged tree twice yields the same set.
    #[test]
    fn prop_collect_is_stable(
        names in prop::collection::btree_set(file_name(), 0..12),
        exclude in prop::collection::vec(pattern(), 0..2),
    ) {
        let temp = TempDir::new().expect("temp dir");
        for (i, name) in names.iter().enumerate() {
            let dir = temp.path().join(format!("d{}", i % 3));
            fs::create_dir_all(&dir).expect("mkdir");
            fs::write(dir.join(name), name).expect("write");
        }
        let filter = FilterSpec::default().with_exclude(exclude);

        let first: HashSet<_> = collect(temp.path(), &filter).expect("collect").into_iter().collect();
        let second: HashSet<_> = collect(temp.path(), &filter).expect("collect").into_iter().collect();
        prop_assert_eq!(first, second);
    }

    /// Retention removes exactly `max(0, m - k)` archives and keeps the
    /// `min(m, k)` most recent.
    #[test]
    fn prop_retention_count(
        days in prop::collection::btree_set(1u32..=28, 0..10),
        keep in 0usize..12,
    ) {
        let temp = TempDir::new().expect("temp dir");
        let source = temp.path().join("src");
        let dest = temp.path().join("dest");
        fs::create_dir_all(&source).expect("mkdir");
        fs::create_dir_all(&dest).expect("mkdir");

        for day in &days {
            fs::write(dest.join(format!("src_202403{day:02}.zip")), "x").expect("write");
        }

        let report = enforce_retention(&source, &dest, "%Y%m%d", keep);
        let m = days.len();

        prop_assert_eq!(report.deleted.len(), m.saturating_sub(keep));
        prop_assert_eq!(report.kept.len(), m.min(keep));
        prop_assert!(!report.has_failures());

        let newest: Vec<_> = days
            .iter()
            .rev()
            .take(keep)
            .map(|day| dest.join(format!("src_202403{day:02}.zip")))
            .collect();
        prop_assert_eq!(report.kept, newest);
    }
}
