//! Command-line regression test
//!
//! Runs the `quadedge` binary on a synthetic BMP and checks the report and
//! the written outputs.

use quadedge::io::{read_image, write_image};
use quadedge_test::synth;
use std::path::PathBuf;
use std::process::Command;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quadedge-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn cli_reg() {
    let dir = temp_dir();
    let input_path = dir.join("input.bmp");
    let input = synth::disc(160, 120, 40);
    write_image(&input, &input_path).expect("write input");

    let outputs: Vec<PathBuf> = ["sp.bmp", "pp.bmp", "se.bmp", "pe.bmp"]
        .iter()
        .map(|name| dir.join(name))
        .collect();

    let result = Command::new(env!("CARGO_BIN_EXE_quadedge"))
        .arg(&input_path)
        .args(&outputs)
        .output()
        .expect("run quadedge");
    let stdout = String::from_utf8_lossy(&result.stdout);
    eprintln!("{}", stdout);

    assert!(result.status.success());
    assert!(stdout.contains("Filter size: 3"));
    assert!(stdout.contains("Running serial version of edge detection using Prewitt operator"));
    assert!(stdout.contains("Running parallel version of edge detection"));
    assert!(stdout.contains("Verification: Prewitt PASS."));
    assert!(stdout.contains("Edge detection PASS."));
    assert_eq!(stdout.matches("seconds").count(), 4);

    let serial = read_image(&outputs[0]).expect("serial prewitt");
    let parallel = read_image(&outputs[1]).expect("parallel prewitt");
    assert_eq!(serial, parallel);
    assert_eq!(serial.dimensions(), input.dimensions());
    assert!(serial.count_nonzero() > 0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cli_usage_exits_zero() {
    let result = Command::new(env!("CARGO_BIN_EXE_quadedge"))
        .arg("only-one-arg.bmp")
        .output()
        .expect("run quadedge");
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("call program like"));
}

#[test]
fn cli_missing_input_fails() {
    let dir = temp_dir();
    let result = Command::new(env!("CARGO_BIN_EXE_quadedge"))
        .arg(dir.join("does-not-exist.bmp"))
        .args(["a.bmp", "b.bmp", "c.bmp", "d.bmp"].map(|n| dir.join(n)))
        .output()
        .expect("run quadedge");
    assert!(!result.status.success());
}
