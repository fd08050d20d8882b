use std::process::ExitCode;

use log::LevelFilter;
use todos::output::OutputWriter;
use todos::{PatternSet, Strictness, TodosError, search};

mod cli;

fn main() -> ExitCode {
    let matches = cli::build_cli().get_matches();
    init_logger(matches.get_flag("verbose"));

    let (cfg, opts) = cli::from_matches(&matches);
    cli::dump_parameters(&cfg, &opts);

    let patterns =
        match PatternSet::compile(&cfg.patterns, cfg.ignore_case, Strictness::Lenient) {
            Ok(patterns) => patterns,
            Err(err) => {
                eprintln!("todos error: {err}");
                return ExitCode::from(1);
            }
        };
    if patterns.is_empty() {
        eprintln!("todos error: {}", TodosError::NoValidPatterns);
        return ExitCode::from(1);
    }

    let outcome = search(&cfg, &patterns);

    match OutputWriter::new(&cfg, &opts).output(&outcome, &patterns) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("todos error: {err}");
            ExitCode::from(1)
        }
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
