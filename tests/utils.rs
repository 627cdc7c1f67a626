#![allow(dead_code)]

use indexmap::IndexMap;
use log::debug;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tiergen::catalog::SchemaCatalog;
use tiergen::error::{Error, Result};
use tiergen::generator::Generator;
use tiergen::schema::{RuleChain, SchemaClassifier};
use tiergen::template::TemplateAssets;
use walkdir::WalkDir;

pub const MODELS: &str = "tests/fixtures/hotel/Models";
pub const TEMPLATES: &str = "tests/fixtures/templates";
pub const CONFIG: &str = "tests/fixtures/hotel/tiergen.yaml";
pub const CATALOG: &str = "tests/fixtures/hotel/catalog.json";
pub const EXPECTED: &str = "tests/expected/hotel";

/// In-memory catalog that records every lookup.
#[derive(Default)]
pub struct CountingCatalog {
    tables: IndexMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl CountingCatalog {
    pub fn new(tables: &[(&str, &str)]) -> Self {
        Self {
            tables: tables.iter().map(|(t, s)| (t.to_string(), s.to_string())).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// The tables behind the hotel fixture models.
    pub fn hotel() -> Self {
        Self::new(&[("Booking", "sales"), ("Invoice", "sales"), ("RoomFeatures", "pms")])
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn calls_for(&self, table: &str) -> usize {
        self.calls.borrow().iter().filter(|call| call.as_str() == table).count()
    }
}

impl SchemaCatalog for CountingCatalog {
    fn lookup(&self, table_name: &str) -> Result<Option<String>> {
        self.calls.borrow_mut().push(table_name.to_string());
        Ok(self.tables.get(table_name).cloned())
    }
}

/// Catalog whose every lookup fails, as an unreachable database would.
pub struct UnreachableCatalog;

impl SchemaCatalog for UnreachableCatalog {
    fn lookup(&self, table_name: &str) -> Result<Option<String>> {
        Err(Error::CatalogError { name: table_name.to_string(), reason: "connection refused".into() })
    }
}

/// Generator over the fixture templates with default rules and namespaces.
pub fn fixture_generator(catalog: &dyn SchemaCatalog) -> Generator<'_> {
    generator_with_templates(catalog, TEMPLATES)
}

pub fn generator_with_templates<'a>(
    catalog: &'a dyn SchemaCatalog,
    templates: impl Into<PathBuf>,
) -> Generator<'a> {
    let classifier = SchemaClassifier::new(RuleChain::default(), catalog);
    Generator::new(classifier, TemplateAssets::new(templates, ".cs.j2"))
}

/// Writes `files` (relative path, content) under `root`.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Relative paths of every file under `root`, sorted.
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry.path().strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1: std::collections::HashSet<String> = list_files(dir1).into_iter().collect();
    let files2: std::collections::HashSet<String> = list_files(dir2).into_iter().collect();

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);
    println!();

    for file in files1.difference(&files2) {
        println!("  + {file}");
    }
    for file in files2.difference(&files1) {
        println!("  - {file}");
    }

    for file in files1.intersection(&files2) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap();
        let expected = fs::read_to_string(dir2.join(file)).unwrap();
        if actual != expected {
            println!("\n  File: {file}");
            println!("  --- Actual content:\n{actual}");
            println!("  --- Expected content:\n{expected}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that `actual` and `expected` hold the same files with the same bytes,
/// printing the differences first when they do not.
pub fn assert_same_tree(actual: &Path, expected: &str) {
    match dir_diff::is_different(actual, expected) {
        Ok(true) => {
            print_dir_diff(actual, expected.as_ref());
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
        }
    }
    assert!(!dir_diff::is_different(actual, expected).unwrap());
}
