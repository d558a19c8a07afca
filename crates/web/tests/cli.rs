//! Black-box runs of the `shopfront` binary.

use std::process::{Command, Output};

fn shopfront(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shopfront"))
        .args(args)
        .args(["--config", "/definitely/not/here/shopfront.toml"])
        .env("RUST_LOG", "off")
        .env_remove("SHOPFRONT_CATALOG_SOURCE")
        .env_remove("SHOPFRONT_FILTER_TAGS")
        .output()
        .expect("failed to run shopfront")
}

#[test]
fn missing_catalog_is_reported_once_and_exits_non_zero() {
    let output = shopfront(&["--source", "/definitely/not/here/products.json"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert_eq!(
        stderr.matches("something went wrong").count(),
        1,
        "stderr: {stderr}"
    );
    assert!(!stderr.contains("Error:"), "stderr: {stderr}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Catalog unavailable: failed to read catalog file"));
}

#[test]
fn unsupported_scheme_is_reported_once_and_exits_non_zero() {
    let output = shopfront(&["--source", "ftp://shop.example/products.json"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert_eq!(
        stderr.matches("something went wrong").count(),
        1,
        "stderr: {stderr}"
    );
    assert!(!stderr.contains("Error:"), "stderr: {stderr}");
}

#[test]
fn fixture_catalog_renders_and_exits_zero() {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/products.json");
    let output = shopfront(&["--source", fixture, "--sort", "asc"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.starts_with("Product List\n"));
    assert!(stdout.contains("Sort by price : [Low to high]"));
    assert!(output.stderr.is_empty());
}
