use std::env::args_os;
use std::process::ExitCode;

use rgb565_header_encoder::{collect_conversion_jobs, convert_batch, CLIParser, ConversionOptions};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let options = ConversionOptions::from(&arguments);
    let jobs = collect_conversion_jobs(arguments.inputs());
    if jobs.is_empty() {
        eprintln!("No supported image files found");
        return ExitCode::FAILURE;
    }

    let report = convert_batch(jobs, &options, arguments.number_of_threads());
    for outcome in report.outcomes() {
        match &outcome.result {
            Ok(header) => println!("Generated {}", header.display()),
            Err(e) => eprintln!(
                "Conversion of '{}' failed because of: {}",
                outcome.source.display(),
                e
            ),
        }
    }
    println!(
        "Conversion complete: {}/{} files processed",
        report.succeeded(),
        report.len()
    );
    if report.failed() > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
