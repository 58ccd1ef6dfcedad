use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use calc_cli::{eval_expression, Config, Session, SessionOptions};
use clap::Parser;
use log::{debug, LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-line desktop-style calculator", long_about = None)]
struct Args {
    /// Keys to press, e.g. `3 + 4 Enter`; reads lines from stdin when empty
    keys: Vec<String>,

    /// Evaluate an arithmetic expression directly
    #[arg(short, long, conflicts_with = "keys", allow_hyphen_values = true)]
    eval: Option<String>,

    /// Print the display after every key
    #[arg(short, long)]
    trace: bool,

    /// Config file (defaults to <config dir>/calc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(buf, "[{}] {} - {}", record.level(), record.target(), record.args())
        })
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        config.level_filter()?
    };
    setup_logging(level);
    debug!("config: {:?}", config);

    if let Some(expr) = args.eval {
        return Ok(match eval_expression(&expr) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(sentinel) => {
                println!("{}", sentinel);
                ExitCode::FAILURE
            }
        });
    }

    config.trace |= args.trace;
    let stdout = io::stdout();

    if args.keys.is_empty() {
        let mut session = Session::new(stdout.lock(), SessionOptions::from(&config));
        session.repl(io::stdin().lock())?;
    } else {
        let options = SessionOptions {
            prompt: String::new(),
            ..SessionOptions::from(&config)
        };
        let mut session = Session::new(stdout.lock(), options);
        let output = session.run_script(&args.keys.join(" "))?;
        if !config.trace {
            session.print_frame(&output)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
