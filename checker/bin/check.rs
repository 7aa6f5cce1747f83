extern crate asm_checker;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::process;

use asm_checker::source::SourceLines;
use asm_checker::{Annotations, Checker, Config, ShapePolicy, Summary};
use clap::{value_t, App, Arg, ArgMatches};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "a.txt";
const STDIN_INPUT: &str = "-";

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INVALID_STATEMENTS: i32 = 2;

fn main() {
    let matches = App::new("check_asm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks each line of an assembly program against the statement rules.")
        .arg(Arg::with_name("INPUT")
            .help("File to check, or - for standard input")
            .default_value(DEFAULT_INPUT)
            .index(1))
        .arg(Arg::with_name("strict")
            .long("strict")
            .help("Reject lines whose token count matches no statement form"))
        .arg(Arg::with_name("annotate")
            .long("annotate")
            .help("Also print annotated source snippets for each error to stderr"))
        .arg(Arg::with_name("color")
            .long("color")
            .value_name("WHEN")
            .possible_values(&["auto", "always", "never"])
            .default_value("auto")
            .help("Color annotated snippets; auto colors only when stderr is a terminal"))
        .arg(Arg::with_name("max-tokens")
            .long("max-tokens")
            .value_name("N")
            .default_value("10")
            .validator(positive_count)
            .help("Tokens kept per line; the rest are ignored"))
        .arg(Arg::with_name("max-line-len")
            .long("max-line-len")
            .value_name("BYTES")
            .takes_value(true)
            .validator(positive_count)
            .help("Bytes kept per line; the rest are ignored (unbounded by default)"))
        .arg(Arg::with_name("deny-invalid")
            .long("deny-invalid")
            .help("Exit with status 2 if any line is invalid"))
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .help("Log progress to stderr"))
        .get_matches();

    init_logging(matches.is_present("verbose"));

    let config = build_config(&matches);
    let input = matches.value_of("INPUT").unwrap_or(DEFAULT_INPUT);
    let annotate = if matches.is_present("annotate") {
        let choice = matches.value_of("color").unwrap_or("auto");
        Some(use_color(choice, io::stderr().is_terminal()))
    } else {
        None
    };

    let result = if input == STDIN_INPUT {
        let stdin = io::stdin();
        let source = SourceLines::new(stdin.lock(), config.max_line_len);
        check(source, config, None, annotate)
    } else {
        SourceLines::open(Path::new(input), config.max_line_len)
            .and_then(|source| check(source, config, Some(input), annotate))
    };

    if let Err(error) = &result {
        eprintln!("Error: {}", error);
    }
    let code = exit_code(&result, matches.is_present("deny-invalid"));
    if code != EXIT_SUCCESS {
        process::exit(code);
    }
}

/// 1 if the run failed, 2 if `deny_invalid` and some line was invalid, else 0.
fn exit_code(result: &asm_checker::Result<Summary>, deny_invalid: bool) -> i32 {
    match result {
        Err(_) => EXIT_FAILURE,
        Ok(summary) if deny_invalid && !summary.all_valid() => EXIT_INVALID_STATEMENTS,
        Ok(_) => EXIT_SUCCESS,
    }
}

fn positive_count(value: String) -> Result<(), String> {
    match value.parse::<usize>() {
        Ok(0) => Err(String::from("must be at least 1")),
        Ok(_) => Ok(()),
        Err(e) => Err(format!("'{}' is not a count: {}", value, e)),
    }
}

fn use_color(choice: &str, stderr_is_terminal: bool) -> bool {
    match choice {
        "always" => true,
        "never" => false,
        _ => stderr_is_terminal,
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn build_config(matches: &ArgMatches) -> Config {
    let max_tokens = value_t!(matches, "max-tokens", usize).unwrap_or_else(|e| e.exit());
    let max_line_len = if matches.is_present("max-line-len") {
        Some(value_t!(matches, "max-line-len", usize).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };
    let shape_policy = if matches.is_present("strict") {
        ShapePolicy::Strict
    } else {
        ShapePolicy::Lenient
    };

    Config { max_tokens, max_line_len, shape_policy }
}

/// `annotate` is `Some(color)` when annotated snippets should go to stderr.
fn check<R: BufRead>(source: SourceLines<R>, config: Config, origin: Option<&str>, annotate: Option<bool>) -> asm_checker::Result<Summary> {
    let stdout = io::stdout();
    let mut report = stdout.lock();
    let stderr = io::stderr();
    let mut diagnostics = stderr.lock();

    let annotations = annotate.map(|color| Annotations {
        sink: &mut diagnostics as &mut dyn Write,
        origin,
        color,
    });

    Checker::new(config).run(source, &mut report, annotations)
}
