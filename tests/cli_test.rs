#![cfg(feature = "std")]

use std::process::{Command, Output};

fn shipgrid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shipgrid"))
        .args(args)
        .env("SHIPGRID_LOG", "off")
        .output()
        .expect("failed to run shipgrid binary")
}

#[test]
fn test_place_and_query_json() {
    let output = shipgrid(&["--ship", "2,3", "--query", "2,3", "--query", "0,0", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["grid"]["ships"], serde_json::json!([[2, 3]]));
    assert_eq!(v["queries"][0]["occupied"], true);
    assert_eq!(v["queries"][1]["occupied"], false);
}

#[test]
fn test_rendered_output() {
    let output = shipgrid(&["--ship", "0,0", "--query", "0,1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "■ □ □ □ □ □ □");
    assert_eq!(lines[7], "0,1: empty");
}

#[test]
fn test_out_of_bounds_fails() {
    let output = shipgrid(&["--ship", "7,0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of bounds"), "stderr: {}", stderr);

    let output = shipgrid(&["--query", "7,0"]);
    assert!(!output.status.success());
}

#[test]
fn test_double_placement_fails() {
    let output = shipgrid(&["--ship", "2,3", "--ship", "2,3"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already holds a ship"), "stderr: {}", stderr);
}

#[test]
fn test_seeded_random_is_reproducible() {
    let a = shipgrid(&["--random", "5", "--seed", "99", "--json"]);
    let b = shipgrid(&["--random", "5", "--seed", "99", "--json"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);

    let v: serde_json::Value = serde_json::from_slice(&a.stdout).expect("invalid json");
    assert_eq!(v["grid"]["ships"].as_array().map(|s| s.len()), Some(5));
}

#[test]
fn test_random_overflow_fails() {
    let output = shipgrid(&["--random", "49", "--seed", "1"]);
    assert!(output.status.success());

    let output = shipgrid(&["--random", "50", "--seed", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no empty cell"), "stderr: {}", stderr);
}
