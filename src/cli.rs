// Command line interface parsing
#![forbid(unsafe_code)]
use clap::{
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgMatches,
    Command,
};
use std::process;
use tracing::debug;

/// Name of the only subcommand.
pub const STATS_COMMAND: &str = "stats";

/// Exit code for anything that goes wrong, bad arguments included.
pub const FAILURE_EXIT_CODE: i32 = 1;

// Create the clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(STATS_COMMAND)
                .about("Report object, version and delete marker usage for a bucket")
                .arg(
                    Arg::new("BUCKET")
                        .long("bucket")
                        .short('b')
                        .value_name("BUCKET")
                        .help("Name of the bucket to scan")
                        .required(true)
                )
                .arg(
                    Arg::new("PREFIX")
                        .long("prefix")
                        .short('p')
                        .value_name("PREFIX")
                        .help("Only count objects whose keys start with PREFIX")
                )
        )
}

/// Parse the command line.
///
/// `--help` and `--version` exit successfully as usual, every other parsing
/// error is printed by clap and exits with `FAILURE_EXIT_CODE`.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    match create_app().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if e.use_stderr() => {
            // Nothing useful can be done if stderr is gone.
            let _ = e.print();

            process::exit(FAILURE_EXIT_CODE);
        },
        Err(e) => e.exit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn stats_args(args: &[&str]) -> Result<ArgMatches, clap::Error> {
        let mut argv = vec!["s3vdu", STATS_COMMAND];
        argv.extend_from_slice(args);

        let matches = create_app().try_get_matches_from(argv)?;

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, STATS_COMMAND);

        Ok(sub.clone())
    }

    #[test]
    fn test_app_is_valid() {
        create_app().debug_assert();
    }

    #[test]
    fn test_bucket_and_prefix() {
        let tests = vec![
            (vec!["--bucket", "demo"],                    ("demo", None)),
            (vec!["-b", "demo", "-p", "logs/"],           ("demo", Some("logs/"))),
            (vec!["--bucket=demo", "--prefix", "a/b/"],   ("demo", Some("a/b/"))),
        ];

        for test in tests {
            let args     = test.0;
            let expected = test.1;

            let matches = stats_args(&args).unwrap();

            let bucket = matches.get_one::<String>("BUCKET").map(String::as_str);
            let prefix = matches.get_one::<String>("PREFIX").map(String::as_str);

            assert_eq!(bucket, Some(expected.0));
            assert_eq!(prefix, expected.1);
        }
    }

    #[test]
    fn test_missing_bucket() {
        let ret = stats_args(&["--prefix", "logs/"]);

        let kind = ret.map(|_| ()).unwrap_err().kind();

        assert_eq!(kind, ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_argument() {
        let ret = stats_args(&["--bucket", "demo", "--region", "eu-west-1"]);

        assert!(ret.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        let ret = create_app().try_get_matches_from(vec!["s3vdu"]);

        assert!(ret.is_err());
    }
}
