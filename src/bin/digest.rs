use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::iter;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sha_digest::{digest_input, present, DecodeError, DEFAULT_INPUT};

const TOOL_NAME: &str = "digest";

/// Prints the SHA-256 digest of a piece of text, a 0x hex literal, a 0b
/// binary literal, or the content of a file.
#[derive(Parser, Debug)]
#[command(name = TOOL_NAME, about, disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Text, 0x-prefixed hex, 0b-prefixed binary, or a path to a file
    #[arg(
        default_value = DEFAULT_INPUT,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    input: OsString,
}

impl Cli {
    /// Parses `args` (program name first) with every argument taken as a
    /// literal, so `-1`, `--help` and `--` all reach the classifier.
    fn parse_literals<I>(args: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| TOOL_NAME.into());
        Cli::try_parse_from(iter::once(program).chain(iter::once("--".into())).chain(args))
    }
}

fn run(cli: &Cli) -> Result<(), DecodeError> {
    let digest = digest_input(&cli.input)?;
    present(&digest, &mut io::stdout().lock())?;
    Ok(())
}

fn report<W: Write>(err: &DecodeError, out: &mut W) -> io::Result<()> {
    match err {
        DecodeError::Misaligned { .. } => writeln!(out, "Error: {}.", err),
        _ => writeln!(out, "{} error: {}", TOOL_NAME, err),
    }
}

fn main() -> ExitCode {
    // silent unless RUST_LOG asks for more, stdout carries only the digest
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::parse_literals(env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{} {}", TOOL_NAME, err);
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // nothing more to do if stderr itself is gone
            let _ = report(&err, &mut io::stderr().lock());
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use rstest::rstest;
    use sha_digest::{classify, load, InputType};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::parse_literals(iter::once(TOOL_NAME).chain(args.iter().copied()).map(OsString::from))
    }

    fn reported(err: &DecodeError) -> String {
        let mut out = Vec::new();
        report(err, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    #[case::default(&[], "abc")]
    #[case::plain(&["hello"], "hello")]
    #[case::negative_number(&["-1"], "-1")]
    #[case::short_flag_lookalike(&["-h"], "-h")]
    #[case::long_flag_lookalike(&["--help"], "--help")]
    #[case::version_lookalike(&["--version"], "--version")]
    #[case::separator(&["--"], "--")]
    #[case::hex(&["0x616263"], "0x616263")]
    fn test_every_argument_is_a_literal(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(parse(args).unwrap().input, OsString::from(expected));
    }

    #[rstest]
    #[case::two(&["abc", "def"])]
    #[case::separator_and_literal(&["--", "abc"])]
    fn test_more_than_one_literal_is_rejected(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn test_misaligned_report() {
        assert_eq!(
            reported(&DecodeError::Misaligned { bits: 25 }),
            "Error: input doesn't represent a whole number of bytes (binary length must be multiple of 8).\n"
        );
    }

    #[test]
    fn test_file_vanishing_after_classification() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.txt");
        fs::write(&path, "abc").unwrap();

        let input_type = classify(&path);
        assert_eq!(input_type, InputType::FileReference);
        fs::remove_file(&path).unwrap();

        let err = load(path.as_os_str(), input_type).unwrap_err();
        assert!(matches!(err, DecodeError::FileRead { .. }));
        assert!(reported(&err).starts_with(&format!("digest error: failed to read '{}': ", path.display())));
    }
}
