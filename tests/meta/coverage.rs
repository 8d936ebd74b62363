//! Structural checks on the test and benchmark layout

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    /// Relative paths of every `.rs` file and directory under `dir`
    fn rust_paths(dir: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        walk(dir, dir, &mut paths)?;
        Ok(paths)
    }

    fn walk(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_stripped| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                walk(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }

        Ok(())
    }

    fn is_module_glue(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn report(header: &str, lines: &[String]) -> String {
        format!("{header}:\n{}", lines.join("\n"))
    }

    // Tests every source module has a unit test file at the mirrored path
    // Verified by adding a source file without a test counterpart
    #[test]
    fn test_src_is_mirrored_by_unit_tests() {
        let src = rust_paths(Path::new("src")).unwrap_or_default();
        let unit = rust_paths(Path::new("tests/unit")).unwrap_or_default();
        assert!(!src.is_empty(), "src directory not found");

        let missing: Vec<_> = src
            .iter()
            .filter(|path| !is_module_glue(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    // Tests no unit test file outlives the module it covers
    // Verified by leaving a test file behind after deleting its module
    #[test]
    fn test_unit_tests_have_sources() {
        let src = rust_paths(Path::new("src")).unwrap_or_default();
        let unit = rust_paths(Path::new("tests/unit")).unwrap_or_default();

        let orphaned: Vec<_> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit tests without sources", &orphaned)
        );
    }

    // Tests every test file outside module glue declares at least one test
    // Verified by emptying a unit test file
    #[test]
    fn test_test_files_declare_tests() {
        let tests_dir = Path::new("tests");
        let files = rust_paths(tests_dir).unwrap_or_default();

        let empty: Vec<_> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(tests_dir.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }

    // Tests every benchmark is registered without the default harness
    // Verified by removing a [[bench]] table from the manifest
    #[test]
    fn test_benches_are_registered() {
        let manifest = fs::read_to_string("Cargo.toml").unwrap_or_default();
        let benches = rust_paths(Path::new("benches")).unwrap_or_default();

        let unregistered: Vec<_> = benches
            .iter()
            .filter_map(|path| path.strip_suffix(".rs"))
            .filter(|name| {
                let table = format!("[[bench]]\nname = \"{name}\"\nharness = false");
                !manifest.contains(&table)
            })
            .map(|name| format!("  - benches/{name}.rs"))
            .collect();

        assert!(
            unregistered.is_empty(),
            "{}",
            report("Benchmarks missing a harness = false entry", &unregistered)
        );
    }
}
