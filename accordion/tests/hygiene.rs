//! Hygiene: source-scan budgets for the accordion crate.
//!
//! Production code runs inside someone else's page: a panic takes the whole
//! module down with it, and a swallowed `Result` hides a broken widget. Each
//! pattern below has a budget (zero). If you must spend one, pay it back
//! elsewhere first.

use std::fs;
use std::path::Path;

/// A forbidden pattern and how many occurrences are tolerated.
struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
    Budget { pattern: "Closure::forget", max: 0 },
    Budget { pattern: ".forget()", max: 0 },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
];

/// Files allowed to call DOM mutators.
const DOM_WRITERS: &[&str] = &["render.rs"];

/// Calls that change what the user sees.
const DOM_MUTATORS: &[&str] = &["set_property(", "remove_property(", "toggle_with_force(", ".add_1(", ".remove_1("];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

fn report(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(p, n)| format!("  {p}: {n}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn source_tree_is_not_empty() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > budget.max {
            failures.push(format!("`{}`: found {count}, max {}\n{}", budget.pattern, budget.max, report(&found)));
        }
    }
    assert!(failures.is_empty(), "budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn dom_mutation_confined_to_render() {
    let files = source_files();
    let offenders: Vec<String> = files
        .iter()
        .filter(|f| !DOM_WRITERS.iter().any(|w| f.path.ends_with(w)))
        .filter(|f| DOM_MUTATORS.iter().any(|m| f.content.contains(m)))
        .map(|f| f.path.clone())
        .collect();
    assert!(offenders.is_empty(), "DOM mutated outside render.rs:\n  {}", offenders.join("\n  "));
}
