use anyhow::Result;

/// Launcher conveniences answered without opening the screen.
pub(crate) const INFO_FLAGS: [&str; 6] = ["--help", "-h", "help", "--version", "-V", "version"];

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("{}", version_line());
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn version_line() -> String {
    format!("salaryplan {}", env!("CARGO_PKG_VERSION"))
}

fn print_usage() {
    println!("SalaryPlan — monthly salary spending planner");
    println!();
    println!("Usage: salaryplan [options]");
    println!();
    println!("Options:");
    println!("  --dark                        Start in dark theme");
    println!("  --salary <amount>             Pre-fill the salary field");
    println!("  --delay <ms>                  Loading screen duration (default 3000)");
    println!("  --no-splash                   Skip the loading screen");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Set SALARYPLAN_LOG=debug to write a log file to the data directory.");
}
