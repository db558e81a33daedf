use std::{fs, path::PathBuf};

use tempfile::tempdir;

use conmap_cli::{Args, run};

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos are at workspace root, relative to workspace not the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &PathBuf, output: &PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        summary: None,
        config: None,
        no_labels: false,
        node_props: false,
        edge_props: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_json_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename =
            format!("{}.gv", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        let args = args_for(demo_path, &output_path);

        if let Err(e) = run(&args) {
            failed_demos.push((demo_path.clone(), e));
        } else {
            let dot = fs::read_to_string(&output_path).expect("Failed to read DOT output");
            assert!(dot.starts_with("digraph {"), "Output should be DOT text");
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_json_files(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.gv",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = args_for(demo_path, &output_path);

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_summary_file_is_written() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("ada.gv");
    let summary_path = temp_dir.path().join("ada_summary.json");

    let mut args = args_for(&demos_path().join("ada.json"), &output_path);
    args.summary = Some(summary_path.to_string_lossy().to_string());

    run(&args).expect("Failed to process demo");

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary_path).expect("Failed to read summary"))
            .expect("Summary should be valid JSON");

    // One relation points at the undeclared `menabrea` concept
    assert_eq!(summary["missing_node_count"], 1);
    assert_eq!(summary["disconnected_component_count"], 1);
    assert_eq!(summary["lonely_node_count"], 0);
    assert!(summary["centrality"]["degree"].is_object());
}

#[test]
fn e2e_render_flags_change_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_path().join("ada.json");

    let plain_path = temp_dir.path().join("plain.gv");
    run(&args_for(&input, &plain_path)).expect("Failed to process demo");
    let plain = fs::read_to_string(&plain_path).expect("Failed to read DOT output");

    let expanded_path = temp_dir.path().join("expanded.gv");
    let mut args = args_for(&input, &expanded_path);
    args.no_labels = true;
    args.edge_props = true;
    run(&args).expect("Failed to process demo");
    let expanded = fs::read_to_string(&expanded_path).expect("Failed to read DOT output");

    assert!(plain.contains("<I>person</I>"));
    assert!(plain.contains("\"pred_ada_authored\""));
    assert!(!plain.contains("1843"));

    assert!(!expanded.contains("<I>person</I>"));
    assert!(expanded.contains("\"pred_ada_authored_notes\""));
    assert!(expanded.contains("1843"));
}

#[test]
fn e2e_empty_scheme_renders_without_summary() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("empty.gv");
    let summary_path = temp_dir.path().join("empty_summary.json");

    let mut args = args_for(&demos_path().join("empty.json"), &output_path);
    args.summary = Some(summary_path.to_string_lossy().to_string());

    run(&args).expect("Failed to process demo");

    let dot = fs::read_to_string(&output_path).expect("Failed to read DOT output");
    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("label=\"Concept map by conmap"));
    assert!(
        !summary_path.exists(),
        "Empty schemes have nothing to summarize"
    );
}
