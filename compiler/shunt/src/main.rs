use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shunt::config::{self, OutputMode};
use shunt::driver::{self, BatchReport};
use shunt::sink::render_outcome;
use shunt::{evaluate_expression, SharedEvaluationCache};

#[derive(Debug, Parser)]
#[command(
    name = "shunt",
    version,
    about = "Evaluate arithmetic expressions and print their expression trees",
    long_about = "shunt evaluates arithmetic expressions with + - * / ^ and log(base, value),\n\
        producing the numeric value and the binary expression tree of each.\n\n\
        EXAMPLES:\n\
        \n  shunt eval '2*2^2^3'                    Evaluate one expression\n\
        \n  shunt run --cache exprs.txt             Write exprs_0, exprs_1, ... next to the input\n\
        \n  REPEAT_TIME=100 shunt bench exprs.txt   Compare cached and uncached timing"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a single expression and print the outcome
    Eval(EvalArgs),

    /// Evaluate every line of the given files, one output file per line
    #[command(
        long_about = "Evaluate every line of the given files.\n\n\
            Line N of dir/name.ext is written to dir/name_N (N counts from 0),\n\
            holding either the value and tree or the error message."
    )]
    Run(RunArgs),

    /// Time the files without cache, then with cache
    #[command(
        long_about = "Run the whole batch without the operation cache, then with it, and\n\
            report both elapsed times.\n\n\
            The repeat count comes from --repeat, else the REPEAT_TIME environment\n\
            variable, else 1."
    )]
    Bench(BenchArgs),
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    /// The expression, e.g. "log(2, 8) * 3"
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    expression: String,

    /// Memoize binary operations
    #[arg(long)]
    cache: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args, Clone)]
struct RunArgs {
    /// Input files, one expression per line
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Memoize binary operations across the whole batch
    #[arg(long)]
    cache: bool,

    /// Write JSON instead of text
    #[arg(long)]
    json: bool,

    /// Process files on worker threads sharing one cache
    #[arg(long)]
    parallel: bool,
}

#[derive(Debug, Args, Clone)]
struct BenchArgs {
    /// Input files, one expression per line
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Number of rounds per mode (overrides REPEAT_TIME)
    #[arg(long, value_name = "N")]
    repeat: Option<u32>,
}

fn run_eval(args: &EvalArgs) -> i32 {
    let outcome = evaluate_expression(&args.expression, args.cache);
    let mut rendered = render_outcome(&outcome, OutputMode::from_json_flag(args.json));
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    print!("{rendered}");

    match outcome {
        Ok(_) => 0,
        Err(e) => {
            if e.is_internal() {
                eprintln!("error: internal evaluation failure: {e}");
            }
            1
        }
    }
}

fn print_report(report: &BatchReport) -> i32 {
    for file in &report.files {
        match &file.outputs {
            Ok(outputs) => {
                let names: Vec<_> = outputs.iter().map(|p| p.display().to_string()).collect();
                println!(
                    "results for file {}: [{}]",
                    file.input.display(),
                    names.join(", ")
                );
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }
    if report.is_success() {
        0
    } else {
        2
    }
}

fn run_files(args: &RunArgs) -> i32 {
    let mode = OutputMode::from_json_flag(args.json);
    let report = if args.parallel {
        let cache = args.cache.then(SharedEvaluationCache::new);
        driver::run_parallel(&args.files, cache.as_ref(), mode)
    } else {
        driver::run_batch(&args.files, 1, args.cache, mode)
    };
    print_report(&report)
}

fn run_bench(args: &BenchArgs) -> i32 {
    let repeat = match config::repeat_from_env(args.repeat) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{e}");
            return 2;
        }
    };

    let bench = driver::benchmark(&args.files, repeat, OutputMode::Text);
    let rc = print_report(&bench.uncached);
    println!(
        "Seconds elapsed for evaluation without cache: {:.3} seconds.",
        bench.uncached.elapsed.as_secs_f64()
    );
    let rc = rc.max(print_report(&bench.cached));
    println!(
        "Seconds elapsed for evaluation with cache: {:.3} seconds.",
        bench.cached.elapsed.as_secs_f64()
    );
    rc
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    config::init_logging(cli.verbose);

    match cli.command {
        Command::Eval(args) => run_eval(&args),
        Command::Run(args) => run_files(&args),
        Command::Bench(args) => run_bench(&args),
    }
}

fn main() {
    std::process::exit(run_cli());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["shunt", "-vvv", "eval", "1+1"]).unwrap();
        assert_eq!(cli.verbose, 3, "verbose count should be 3 for -vvv");
    }

    #[test]
    fn cli_parses_eval_with_leading_minus() {
        let cli = Cli::try_parse_from(["shunt", "eval", "-10*2", "--cache"]).unwrap();
        match cli.command {
            Command::Eval(args) => {
                assert_eq!(args.expression, "-10*2");
                assert!(args.cache);
                assert!(!args.json);
            }
            _ => panic!("expected Eval command"),
        }
    }

    #[test]
    fn cli_requires_files() {
        assert!(Cli::try_parse_from(["shunt", "run"]).is_err());
        assert!(Cli::try_parse_from(["shunt", "bench", "--repeat", "x", "a.txt"]).is_err());
    }

    #[test]
    fn cli_parses_bench_repeat() {
        let cli = Cli::try_parse_from(["shunt", "bench", "--repeat", "5", "a.txt", "b.txt"]).unwrap();
        match cli.command {
            Command::Bench(args) => {
                assert_eq!(args.repeat, Some(5));
                assert_eq!(args.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
            }
            _ => panic!("expected Bench command"),
        }
    }

    #[test]
    fn eval_exit_codes() {
        let ok = EvalArgs {
            expression: "2*(2^2)^3".to_string(),
            cache: true,
            json: false,
        };
        assert_eq!(run_eval(&ok), 0);

        let bad = EvalArgs {
            expression: "log(1)".to_string(),
            cache: false,
            json: true,
        };
        assert_eq!(run_eval(&bad), 1);
    }

    #[test]
    fn run_and_bench_on_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("exprs.txt");
        fs::write(&input, "1+2\n10^-2\n").unwrap();

        let rc = run_files(&RunArgs {
            files: vec![input.clone()],
            cache: true,
            json: false,
            parallel: true,
        });
        assert_eq!(rc, 0);
        assert_eq!(fs::read_to_string(dir.path().join("exprs_0")).unwrap(), "3.0\n+\n├── 2.0\n└── 1.0\n");

        let rc = run_bench(&BenchArgs {
            files: vec![input],
            repeat: Some(2),
        });
        assert_eq!(rc, 0);

        let rc = run_files(&RunArgs {
            files: vec![dir.path().join("absent.txt")],
            cache: false,
            json: false,
            parallel: false,
        });
        assert_eq!(rc, 2);
    }

    #[test]
    fn cli_help_lists_subcommands() {
        use clap::CommandFactory;
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        cmd.write_long_help(&mut buf).unwrap();
        let help = String::from_utf8(buf).unwrap();
        for name in ["eval", "run", "bench", "EXAMPLES", "--verbose"] {
            assert!(help.contains(name), "help should mention '{name}'");
        }
    }
}
