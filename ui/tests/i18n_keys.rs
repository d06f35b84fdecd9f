//! Translation guards.
//!
//! - every locale defines every key of the fallback (en-US) `rentoora-ui.ftl`
//! - no FTL file defines a key twice
//! - every `t!("...")` literal under `src/` exists in the fallback
//!
//! Parsing is line based: `key = value` lines count as definitions; comments,
//! attributes (`.attr`) and terms (`-term`) are skipped.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

const EN_US: &str = include_str!("../i18n/en-US/rentoora-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/rentoora-ui.ftl");
const FR_FR: &str = include_str!("../i18n/fr-FR/rentoora-ui.ftl");

/// Non-fallback locales; register new ones here.
const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES), ("fr-FR", FR_FR)];

fn definitions(src: &str) -> Vec<String> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with(['#', '.', '-']))
        .filter_map(|line| line.split_once('='))
        .map(|(left, _)| left.trim())
        .filter(|key| !key.is_empty() && key.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn keys(src: &str) -> HashSet<String> {
    definitions(src).into_iter().collect()
}

#[test]
fn fallback_is_non_empty_and_unique() {
    let defs = definitions(EN_US);
    assert!(!defs.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = keys(EN_US);
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let present = keys(src);
        let missing: BTreeSet<_> = fallback.difference(&present).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn every_referenced_key_exists_in_fallback() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let fallback = keys(EN_US);

    let referenced = referenced_keys(&src_root);
    assert!(
        referenced.contains("post-submit"),
        "source scan found no t!() usages; did the macro name change?"
    );

    let mut missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );
}

/// Collect the literal first argument of every `t!("...")` in `.rs` files under `root`.
fn referenced_keys(root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (start, needle) in content.match_indices("t!(\"") {
            let rest = &content[start + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

/// Assert no duplicate key definitions in a single FTL file.
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = definitions(src)
        .into_iter()
        .filter(|key| !seen.insert(key.clone()))
        .collect();

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
