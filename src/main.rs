mod config;
mod logging;
mod models;
mod plan;
mod run;
mod session;
mod ui;

use anyhow::Result;

use crate::config::Config;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match logging::init() {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "logging enabled"),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }

    if is_cli_invocation(&args) {
        run::as_cli(&args)
    } else {
        let config = Config::from_args(&args[1..])?;
        run::as_tui(&config)
    }
}

/// Help and version are answered on stdout; everything else opens the screen.
fn is_cli_invocation(args: &[String]) -> bool {
    args.get(1)
        .is_some_and(|first| run::INFO_FLAGS.contains(&first.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_tui() {
        assert!(!is_cli_invocation(&args(&["salaryplan"])));
    }

    #[test]
    fn test_flags_are_tui() {
        assert!(!is_cli_invocation(&args(&["salaryplan", "--dark"])));
        assert!(!is_cli_invocation(&args(&["salaryplan", "--salary", "10"])));
    }

    #[test]
    fn test_help_and_version_are_cli() {
        assert!(is_cli_invocation(&args(&["salaryplan", "--help"])));
        assert!(is_cli_invocation(&args(&["salaryplan", "-V"])));
        assert!(is_cli_invocation(&args(&["salaryplan", "version"])));
    }

    #[test]
    fn test_no_plan_subcommand() {
        let argv = args(&["salaryplan", "plan", "1000"]);
        assert!(!is_cli_invocation(&argv));
        assert!(Config::from_args(&argv[1..]).is_err());
    }
}
