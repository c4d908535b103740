//! End-to-end checks against the compiled binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const TWO_RESULTS: &str = r#"{"results":[{"command":"a","mean":1.0,"stddev":0.1},{"command":"b","mean":2.0,"stddev":0.2}]}"#;

fn bench_plot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bench-plot"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bench-plot")
}

fn write_input(dir: &Path, content: &str) -> String {
    let path = dir.join("results.json");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("chart.png");
    let missing = dir.path().join("missing.json");

    let out = bench_plot(&[
        missing.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to read"), "{}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_label_mismatch_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), TWO_RESULTS);
    let output = dir.path().join("chart.png");

    let out = bench_plot(&[&input, "--labels", "OnlyOne", "-o", output.to_str().unwrap()]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("got 1 labels for 2 benchmark results"), "{}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_missing_results_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), r#"{"notresults": []}"#);
    let output = dir.path().join("chart.png");

    let out = bench_plot(&[&input, "-o", output.to_str().unwrap()]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid benchmark results"), "{}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_unsupported_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), TWO_RESULTS);
    let output = dir.path().join("chart.pdf");

    let out = bench_plot(&[&input, "-o", output.to_str().unwrap()]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unsupported output format"), "{}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), TWO_RESULTS);
    let output = dir.path().join("chart.png");

    let out = bench_plot(&[&input, "--title", "Two commands", "-o", output.to_str().unwrap()]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn test_svg_keeps_document_order_top_to_bottom() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), TWO_RESULTS);
    let output = dir.path().join("chart.svg");

    let out = bench_plot(&[&input, "--labels", "first,second", "-o", output.to_str().unwrap()]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Time (s)"));

    let first = svg.find(">first</text>").expect("first label drawn");
    let second = svg.find(">second</text>").expect("second label drawn");
    let y_of = |end: usize| -> f64 {
        let element = &svg[svg[..end].rfind("<text").unwrap()..end];
        let at = element.find(" y=\"").unwrap() + 4;
        element[at..at + element[at..].find('"').unwrap()].parse().unwrap()
    };
    assert!(y_of(first) < y_of(second));
}
