use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use dataset::{CategoryRepository, InMemoryRepository};
use kana_core::model::{CategoryId, QuizMode, QuizQuestion};
use services::{
    ModeTable, QuizProgress, QuizReport, QuizService, StudyOrder, StudyService, StudySession,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingOperand { command: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidPath { flag: &'static str },
    Invalid(kana_core::Error),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingOperand { command } => write!(f, "{command} requires an argument"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidPath { flag } => write!(f, "{flag} requires a non-empty path"),
            ArgsError::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<kana_core::Error> for ArgsError {
    fn from(err: kana_core::Error) -> Self {
        ArgsError::Invalid(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { flag });
    }
    Ok(PathBuf::from(value))
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- categories [options]");
    eprintln!("  cargo run -p app -- modes      [options]");
    eprintln!("  cargo run -p app -- study <CATEGORY> [--ordered] [options]");
    eprintln!("  cargo run -p app -- quiz  <MODE> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <u64>     reproducible shuffles");
    eprintln!("  --data <path>    dataset JSON (default: built-in)");
    eprintln!("  --modes <path>   mode table JSON (default: built-in)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  KANA_SEED, KANA_DATA, KANA_MODES, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Categories,
    Modes,
    Study {
        category: CategoryId,
        order: StudyOrder,
    },
    Quiz {
        mode: QuizMode,
    },
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    command: Command,
    seed: Option<u64>,
    data: Option<PathBuf>,
    modes: Option<PathBuf>,
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

impl Args {
    /// Parses everything after the binary name. `env` supplies fallbacks for
    /// options the command line leaves unset.
    fn parse(
        argv: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut args = argv.into_iter();
        let mut seed = env("KANA_SEED").map(parse_seed).transpose()?;
        let mut data = env("KANA_DATA").filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        let mut modes = env("KANA_MODES").filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        let mut verb: Option<String> = None;
        let mut operand: Option<String> = None;
        let mut ordered = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => seed = Some(parse_seed(require_value(&mut args, "--seed")?)?),
                "--data" => data = Some(require_path(&mut args, "--data")?),
                "--modes" => modes = Some(require_path(&mut args, "--modes")?),
                "--ordered" => ordered = true,
                _ if arg.starts_with('-') => return Err(ArgsError::UnknownArg(arg)),
                _ if verb.is_none() => verb = Some(arg),
                _ if operand.is_none() => operand = Some(arg),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let command = match verb.as_deref() {
            None | Some("categories") => Command::Categories,
            Some("modes") => Command::Modes,
            Some("study") => {
                let raw = operand
                    .take()
                    .ok_or(ArgsError::MissingOperand { command: "study" })?;
                let order = if ordered {
                    StudyOrder::Ordered
                } else {
                    StudyOrder::Shuffled
                };
                Command::Study {
                    category: raw.parse().map_err(kana_core::Error::from)?,
                    order,
                }
            }
            Some("quiz") => {
                let raw = operand
                    .take()
                    .ok_or(ArgsError::MissingOperand { command: "quiz" })?;
                Command::Quiz {
                    mode: raw.parse().map_err(kana_core::Error::from)?,
                }
            }
            Some(other) => return Err(ArgsError::UnknownArg(other.to_owned())),
        };
        if let Some(extra) = operand {
            return Err(ArgsError::UnknownArg(extra));
        }
        if ordered && !matches!(command, Command::Study { .. }) {
            return Err(ArgsError::UnknownArg("--ordered".into()));
        }

        Ok(Self {
            command,
            seed,
            data,
            modes,
        })
    }
}

fn load_repository(path: Option<&PathBuf>) -> Result<InMemoryRepository, dataset::DatasetError> {
    match path {
        Some(path) => {
            log::info!("loading dataset from {}", path.display());
            dataset::json::load_file(path)
        }
        None => dataset::builtin(),
    }
}

fn load_modes(path: Option<&PathBuf>) -> Result<ModeTable, services::ModeConfigError> {
    match path {
        Some(path) => {
            log::info!("loading mode table from {}", path.display());
            ModeTable::load_file(path)
        }
        None => ModeTable::builtin(),
    }
}

//
// ─── COMMANDS ──────────────────────────────────────────────────────────────────
//

fn list_categories(
    study: &StudyService,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for item in study.overview()? {
        writeln!(out, "{:<22} {:>4}  {}", item.id.as_str(), item.size, item.label)?;
    }
    Ok(())
}

fn list_modes(table: &ModeTable, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} questions per quiz", table.target_questions())?;
    for mode in table.modes() {
        writeln!(out, "{:<14} {}", mode.id.as_str(), mode.title)?;
    }
    Ok(())
}

fn show_card(session: &StudySession, out: &mut impl Write) -> io::Result<()> {
    let progress = session.progress();
    match session.current_entry() {
        Some(entry) => {
            write!(
                out,
                "[{}/{}] {}  {}",
                progress.position,
                progress.total,
                entry.glyph(),
                entry.reading()
            )?;
            if let Some(meaning) = entry.meaning() {
                write!(out, "  ({meaning})")?;
            }
            writeln!(out)
        }
        None => writeln!(out, "{}: no cards", session.title()),
    }
}

fn run_study(
    study: &mut StudyService,
    mut session: StudySession,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{}  (n next, p prev, r restart, q quit)", session.title())?;
    show_card(&session, out)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        match line.trim() {
            "" | "n" => {
                session.next();
                if session.is_finished() {
                    writeln!(out, "End of deck. r to restart, q to quit.")?;
                    continue;
                }
            }
            "p" => session.prev(),
            "r" => study.restart(&mut session),
            "q" => return Ok(()),
            other => {
                writeln!(out, "unknown command: {other}")?;
                continue;
            }
        }
        show_card(&session, out)?;
    }
}

fn show_question(
    progress: &QuizProgress,
    question: &QuizQuestion,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Q{}/{}  {}",
        progress.answered + 1,
        progress.total,
        question.target().glyph()
    )?;
    for (i, option) in question.options().iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, option.answer_text())?;
    }
    Ok(())
}

fn show_report(report: &QuizReport, out: &mut impl Write) -> io::Result<()> {
    let summary = &report.summary;
    writeln!(out)?;
    writeln!(out, "{}", report.title)?;
    writeln!(
        out,
        "Score: {}/{} ({:.0}%)",
        summary.score,
        summary.total,
        summary.accuracy * 100.0
    )?;
    writeln!(out, "{}", summary.verdict.message())?;
    for row in &report.rows {
        let mark = if row.is_correct { "o" } else { "x" };
        writeln!(
            out,
            "{mark} {:>2}. {}  {} / {}",
            row.position, row.glyph, row.expected, row.chosen
        )?;
    }
    Ok(())
}

fn run_quiz(
    quiz: &mut QuizService,
    mode: QuizMode,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = quiz.start_quiz(mode)?;
    writeln!(out, "{}", session.title())?;
    if session.total_questions() == 0 {
        writeln!(out, "No questions available for {mode}.")?;
        return Ok(());
    }

    let mut line = String::new();
    while let Some(question) = session.current_question() {
        show_question(&session.progress(), question, out)?;
        let options = question.options().len();

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "Quiz abandoned.")?;
            return Ok(());
        }
        let choice = match line.trim().parse::<usize>() {
            Ok(n) if (1..=options).contains(&n) => n - 1,
            _ => {
                writeln!(out, "Enter a number from 1 to {options}.")?;
                continue;
            }
        };

        let answer = quiz.answer_current(&mut session, choice)?;
        if answer.result.is_correct {
            writeln!(out, "Correct!")?;
        } else {
            writeln!(
                out,
                "Wrong, it was {}.",
                answer.result.question.target().answer_text()
            )?;
        }
    }

    if let Some(report) = quiz.report(&session) {
        show_report(&report, out)?;
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let args = Args::parse(argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let repo: Arc<dyn CategoryRepository> = Arc::new(load_repository(args.data.as_ref())?);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Categories => {
            let study = StudyService::new(repo);
            list_categories(&study, &mut out)
        }
        Command::Modes => {
            list_modes(&load_modes(args.modes.as_ref())?, &mut out)?;
            Ok(())
        }
        Command::Study { category, order } => {
            let mut study = StudyService::new(repo);
            if let Some(seed) = args.seed {
                study = study.with_seed(seed);
            }
            let session = study.start(category, order);
            run_study(&mut study, session, &mut input, &mut out)?;
            Ok(())
        }
        Command::Quiz { mode } => {
            let mut quiz = QuizService::new(repo, load_modes(args.modes.as_ref())?);
            if let Some(seed) = args.seed {
                quiz = quiz.with_seed(seed);
            }
            run_quiz(&mut quiz, mode, &mut input, &mut out)
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn parses_study_with_flags() {
        let args = Args::parse(
            argv(&["study", "hiragana_basic", "--ordered", "--seed", "7"]),
            no_env,
        )
        .unwrap();
        assert_eq!(
            args.command,
            Command::Study {
                category: CategoryId::HiraganaBasic,
                order: StudyOrder::Ordered,
            }
        );
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            "KANA_SEED" => Some("1".to_owned()),
            "KANA_MODES" => Some("env-modes.json".to_owned()),
            _ => None,
        };
        let args = Args::parse(argv(&["quiz", "full-mix", "--seed", "2"]), env).unwrap();
        assert_eq!(args.command, Command::Quiz { mode: QuizMode::FullMix });
        assert_eq!(args.seed, Some(2));
        assert_eq!(args.modes, Some(PathBuf::from("env-modes.json")));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Args::parse(argv(&["study"]), no_env),
            Err(ArgsError::MissingOperand { command: "study" })
        ));
        assert!(matches!(
            Args::parse(argv(&["quiz", "EVERYTHING"]), no_env),
            Err(ArgsError::Invalid(_))
        ));
        assert!(matches!(
            Args::parse(argv(&["modes", "--seed", "x"]), no_env),
            Err(ArgsError::InvalidSeed { .. })
        ));
        assert!(matches!(
            Args::parse(argv(&["modes", "--ordered"]), no_env),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn quiz_loop_reports_score() {
        let repo: Arc<dyn CategoryRepository> = Arc::new(dataset::builtin().unwrap());
        let mut quiz = QuizService::new(repo, ModeTable::builtin().unwrap()).with_seed(5);
        let answers = "1\n".repeat(30);
        let mut out = Vec::new();
        run_quiz(&mut quiz, QuizMode::HiraganaOnly, &mut answers.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Hiragana Check"));
        assert!(text.contains("Score: "));
        assert!(text.contains("Q1/30"));
        assert!(text.contains("Q30/30"));
    }

    #[test]
    fn study_loop_walks_and_quits() {
        let repo: Arc<dyn CategoryRepository> = Arc::new(dataset::builtin().unwrap());
        let mut study = StudyService::new(repo).with_seed(1);
        let session = study.start(CategoryId::N5Particles, StudyOrder::Ordered);
        let mut out = Vec::new();
        run_study(&mut study, session, &mut "n\np\nq\n".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[1/14] は"));
        assert!(text.contains("[2/14]"));
    }
}
