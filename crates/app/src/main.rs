use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use services::{SessionConfig, SessionEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{MAX_DIGITS, QuizIntent, QuizPhase, QuizVm, VmError};

const TICK: Duration = Duration::from_millis(100);
const COUNTDOWN_WARNING_SECS: f32 = 5.0;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(raw: String, flag: &'static str) -> Result<T, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--config <path>] [--seed <n>] [--questions <n>] [--time <secs>]");
    eprintln!();
    eprintln!("While playing:");
    eprintln!("  <number>  submit an answer, e.g. 12, -3 or 0.75");
    eprintln!("  n         next question");
    eprintln!("  p / r     pause / resume the timer");
    eprintln!("  q         quit");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_CONFIG, QUIZ_SEED, RUST_LOG");
}

#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    questions: Option<u32>,
    time: Option<f32>,
}

impl Args {
    /// Defaults taken from `QUIZ_CONFIG` and `QUIZ_SEED`; flags override them.
    fn from_env() -> Self {
        Self {
            config_path: std::env::var_os("QUIZ_CONFIG").map(PathBuf::from),
            seed: std::env::var("QUIZ_SEED")
                .ok()
                .and_then(|value| value.parse().ok()),
            ..Self::default()
        }
    }

    fn parse(
        args: &mut impl Iterator<Item = String>,
        mut parsed: Self,
    ) -> Result<Option<Self>, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config_path = Some(PathBuf::from(require_value(args, "--config")?));
                }
                "--seed" => {
                    parsed.seed = Some(parse_number(require_value(args, "--seed")?, "--seed")?);
                }
                "--questions" => {
                    let raw = require_value(args, "--questions")?;
                    parsed.questions = Some(parse_number(raw, "--questions")?);
                }
                "--time" => {
                    parsed.time = Some(parse_number(require_value(args, "--time")?, "--time")?);
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(parsed))
    }

    fn into_config(self) -> Result<SessionConfig, Box<dyn std::error::Error>> {
        let mut config = match self.config_path {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(questions) = self.questions {
            config = config.with_max_questions(questions)?;
        }
        if let Some(time) = self.time {
            config = config.with_time_per_question(time)?;
        }
        Ok(config)
    }
}

enum Command {
    Intents(Vec<QuizIntent>),
    Quit,
    Unknown,
}

/// Translate one stdin line into numpad intents.
///
/// Numbers may carry a leading `-` and a single decimal point.
fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "q" | "quit" => return Command::Quit,
        "n" | "next" => return Command::Intents(vec![QuizIntent::Next]),
        "p" | "pause" => return Command::Intents(vec![QuizIntent::Pause]),
        "r" | "resume" => return Command::Intents(vec![QuizIntent::Resume]),
        _ => {}
    }

    let (negative, digits) = match line.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, line),
    };
    if digits.is_empty() {
        return Command::Unknown;
    }

    let mut intents = Vec::with_capacity(digits.len() + 2);
    let mut seen_point = false;
    for ch in digits.chars() {
        if ch == '.' {
            if seen_point {
                return Command::Unknown;
            }
            seen_point = true;
            intents.push(QuizIntent::DecimalPoint);
            continue;
        }
        let Some(digit) = ch.to_digit(10) else {
            return Command::Unknown;
        };
        // to_digit(10) is always < 10.
        intents.push(QuizIntent::Digit(digit as u8));
    }
    if !intents.iter().any(|intent| matches!(intent, QuizIntent::Digit(_))) {
        return Command::Unknown;
    }
    if negative {
        intents.push(QuizIntent::ToggleSign);
    }
    intents.push(QuizIntent::Submit);
    Command::Intents(intents)
}

fn report(vm: &QuizVm, events: &[SessionEvent], last_timer: &mut String) {
    for event in events {
        match event {
            SessionEvent::ProblemChanged(problem) => {
                println!("{}  {problem} = ?  ({})", vm.question_label(), vm.timer_label());
            }
            SessionEvent::Result(_) => {
                if let Some(feedback) = vm.feedback() {
                    println!("{}", feedback.text);
                }
                if vm.show_next() {
                    println!("(n for the next question)");
                }
            }
            SessionEvent::TimerChanged(remaining) => {
                let label = vm.timer_label();
                if *remaining <= COUNTDOWN_WARNING_SECS && *last_timer != label {
                    println!("{label} left");
                }
                *last_timer = label;
            }
            SessionEvent::LevelComplete => {
                if let Some(feedback) = vm.feedback() {
                    println!("{}", feedback.text);
                }
            }
            SessionEvent::QuestionNumberChanged { .. } => {}
        }
    }
}

/// Feed one line's intents to the VM.
///
/// Returns false when the entry refused a key. The partial answer is cleared
/// and the rest of the line, including its submit, is dropped.
fn apply_intents(
    vm: &mut QuizVm,
    intents: Vec<QuizIntent>,
    last_timer: &mut String,
) -> Result<bool, VmError> {
    for intent in intents {
        match vm.dispatch(intent) {
            Ok(events) => report(vm, &events, last_timer),
            Err(err @ VmError::EntryRejected(_)) => {
                warn!(%err, "answer not submitted");
                vm.dispatch(QuizIntent::Clear)?;
                return Ok(false);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(true)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let Some(args) = Args::parse(&mut argv, Args::from_env()).inspect_err(|_| print_usage())? else {
        print_usage();
        return Ok(());
    };
    let config = args.into_config()?;
    info!(?config, "starting quiz");

    let mut vm = QuizVm::start(config)?;
    let mut last_timer = String::new();
    let startup = vm.take_events();
    report(&vm, &startup, &mut last_timer);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interval = tokio::time::interval(TICK);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    // Ticks and typed answers are handled one at a time on this task.
    while vm.phase() != QuizPhase::Complete {
        tokio::select! {
            _ = interval.tick() => {
                let now = Instant::now();
                let delta = now.duration_since(last_tick).as_secs_f32();
                last_tick = now;
                let events = vm.dispatch(QuizIntent::Tick(delta))?;
                report(&vm, &events, &mut last_timer);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Command::Quit => break,
                    Command::Unknown => {
                        warn!(input = %line, "unrecognised input");
                        println!("Type a number, or n / p / r / q.");
                    }
                    Command::Intents(intents) => {
                        if !apply_intents(&mut vm, intents, &mut last_timer)? {
                            println!("Answers are limited to {MAX_DIGITS} digits; nothing was submitted.");
                        }
                    }
                }
            }
        }
    }

    let summary = vm.session().summary();
    println!(
        "Answered {} of {} questions correctly ({:.0}%), {} wrong attempts, {} timed out, {:.1}s on the clock.",
        summary.correct(),
        summary.questions(),
        summary.accuracy_percent(),
        summary.incorrect(),
        summary.timed_out(),
        summary.elapsed_secs(),
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
