//! Frog Jump entry point
//!
//! Runs the simulation headless: the autopilot plays and frames are reported
//! through the log. Graphical front ends plug in their own input source and
//! render sink.

use std::path::PathBuf;

use frog_jump::platform::{App, LogSink, RunOptions, ScriptedInput};
use frog_jump::sim::GameState;
use frog_jump::{Settings, Strings};

/// Command line options
#[derive(Debug)]
struct Config {
    language: String,
    verbose: bool,
    seed: Option<u64>,
    ticks: Option<u64>,
    settings: Option<PathBuf>,
    locales: PathBuf,
    realtime: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: frog_jump::locale::DEFAULT_LANGUAGE.to_string(),
            verbose: false,
            seed: None,
            ticks: Some(60 * 60),
            settings: None,
            locales: PathBuf::from("locales"),
            realtime: false,
        }
    }
}

fn print_usage() {
    println!("Usage: frog-jump [OPTIONS]");
    println!();
    println!("  -l, --language CODE   Display language (default: en)");
    println!("  -v, --verbose         Debug logging");
    println!("      --seed N          Platform layout seed (default: clock)");
    println!("      --ticks N         Stop after N ticks, 0 = never (default: 3600)");
    println!("      --settings PATH   JSON settings file");
    println!("      --locales DIR     Locale directory (default: locales)");
    println!("      --realtime        Pace ticks to the tick rate");
    println!("  -h, --help            Show this help");
}

fn next_value<'a>(args: &'a [String], i: &mut usize, name: &str) -> Option<&'a str> {
    *i += 1;
    match args.get(*i) {
        Some(value) => Some(value.as_str()),
        None => {
            eprintln!("Error: {name} requires a value");
            None
        }
    }
}

fn parse_number(args: &[String], i: &mut usize, name: &str) -> Option<u64> {
    let value = next_value(args, i, name)?;
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            eprintln!("Error: {name} expects a number, got {value:?}");
            None
        }
    }
}

/// Parse command line arguments, or None if invalid/help requested
fn parse_args() -> Option<Config> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-l" | "--language" => {
                config.language = next_value(&args, &mut i, "--language")?.to_string();
            }
            "-v" | "--verbose" => config.verbose = true,
            "--seed" => config.seed = Some(parse_number(&args, &mut i, "--seed")?),
            "--ticks" => {
                let ticks = parse_number(&args, &mut i, "--ticks")?;
                config.ticks = (ticks > 0).then_some(ticks);
            }
            "--settings" => {
                config.settings = Some(PathBuf::from(next_value(&args, &mut i, "--settings")?));
            }
            "--locales" => {
                config.locales = PathBuf::from(next_value(&args, &mut i, "--locales")?);
            }
            "--realtime" => config.realtime = true,
            "-h" | "--help" => {
                print_usage();
                return None;
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                return None;
            }
        }
        i += 1;
    }

    Some(config)
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    let Some(config) = parse_args() else {
        std::process::exit(2);
    };

    let level = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Frog Jump (headless) starting...");

    let settings = Settings::load(config.settings.as_deref());
    let strings = Strings::load(&config.locales, &config.language);
    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("Seed {seed}");

    let mut app = App::new(GameState::new(seed, settings), strings);
    let mut input = ScriptedInput::new([]);
    let mut sink = LogSink::new(600);
    let options = RunOptions {
        max_ticks: config.ticks,
        realtime: config.realtime,
        idle_mode: true,
    };

    match app.run(&mut input, &mut sink, &options) {
        Ok(summary) => {
            log::info!(
                "Finished after {} ticks ({} frames): {} sessions, high score {}",
                summary.ticks,
                sink.frames(),
                summary.sessions,
                summary.high_score
            );
            match serde_json::to_string_pretty(&app.high_scores) {
                Ok(json) => println!("{json}"),
                Err(e) => log::warn!("Could not serialize high scores: {e}"),
            }
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

