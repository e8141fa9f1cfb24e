//! Interfaceable CLI
//!
//! Checks that the subjects in a manifest conform to the interfaces they
//! declare.

use std::io::IsTerminal;
use std::process::ExitCode;

use ifcc::commands::{check_manifest, explain_error, parse_check_args, print_version, Status};

fn main() -> ExitCode {
    ifcc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(Status::Failure.code());
    }

    let command = &args[1];

    let status = match command.as_str() {
        "check" => match parse_check_args(&args[2..]) {
            Ok(check_args) => {
                let is_tty = std::io::stderr().is_terminal();
                check_manifest(
                    &check_args,
                    &mut std::io::stdout().lock(),
                    &mut std::io::stderr().lock(),
                    is_tty,
                )
            }
            Err(message) => {
                eprintln!("error: {message}");
                eprintln!();
                eprintln!("Usage: ifc check <manifest.json> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --format=<fmt>     Output format: text, json (default: text)");
                eprintln!("  --color=<when>     Color: auto, always, never (default: auto)");
                eprintln!("  --exact            Require identical parameter lists");
                Status::Failure
            }
        },
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: ifc explain <ERROR_CODE>");
                eprintln!("Example: ifc explain E1002");
                Status::Failure
            } else {
                explain_error(
                    &args[2],
                    &mut std::io::stdout().lock(),
                    &mut std::io::stderr().lock(),
                )
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Status::Success
        }
        "version" | "--version" | "-V" => print_version(&mut std::io::stdout().lock()),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            Status::Failure
        }
    };

    ExitCode::from(status.code())
}

fn print_usage() {
    println!("Interfaceable conformance checker");
    println!();
    println!("Usage: ifc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <manifest.json>  Check every subject in a manifest");
    println!("  explain <code>         Explain an error code (e.g., E1002)");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Check options:");
    println!("  --format=<fmt>     Output format: text, json (default: text)");
    println!("  --color=<when>     Color: auto, always, never (default: auto)");
    println!("  --exact            Require identical parameter lists");
    println!();
    println!("Exit codes: 0 all subjects conform, 1 violations found, 2 usage or manifest error");
    println!();
    println!("Logging: set IFC_LOG (or RUST_LOG), e.g. IFC_LOG=ifc_check=debug;");
    println!("         IFC_LOG_TREE=1 prints spans as a tree");
}
