use anyhow::{Context, Result};
use quadedge::io::{read_image, write_image};
use quadedge::{EdgeParams, Family, Variant, run_variant, verify_family};
use std::env;
use std::process::ExitCode;

/// Program name plus input and four output paths
const ARG_COUNT: usize = 6;

fn usage() {
    println!();
    println!("ERROR: call program like:");
    println!();
    println!(
        "quadedge input.bmp outputSerialPrewitt.bmp outputParallelPrewitt.bmp \
         outputSerialEdge.bmp outputParallelEdge.bmp"
    );
    println!();
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    // A wrong argument count is not treated as a failure
    if args.len() != ARG_COUNT {
        usage();
        return ExitCode::SUCCESS;
    }

    match run(&args[1], &args[2..]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(input_path: &str, output_paths: &[String]) -> Result<()> {
    let params = EdgeParams::default();
    params.validate().context("invalid edge parameters")?;

    println!("Filter size: {}", params.filter_size);
    println!("Point range: {}", params.point_range);

    let input = read_image(input_path).with_context(|| format!("reading {input_path}"))?;
    log::debug!("input {}x{}", input.width(), input.height());

    let mut reports = Vec::with_capacity(Variant::ALL.len());
    for (&variant, path) in Variant::ALL.iter().zip(output_paths) {
        println!("Running {}", variant.description());
        let report = run_variant(variant, &input, &params)
            .with_context(|| format!("running {variant:?}"))?;
        println!("Time: \t\t\t{} seconds", report.elapsed.as_secs_f64());
        write_image(&report.output, path).with_context(|| format!("writing {path}"))?;
        reports.push(report);
    }

    print!("Verification: ");
    for family in [Family::Prewitt, Family::Edge] {
        if let Some(result) = verify_family(&reports, family) {
            println!("{} {}", family.label(), result);
        }
    }

    Ok(())
}
