use crate::reports;
use clap::Args;
use drillforge::audio::NullAudio;
use drillforge::error::{DfResult, DrillForgeError};
use drillforge::events::{EventSink, ExerciseWarning, HostEvent};
use drillforge::exercise::{
    AudioMatch, Direction, LetterChoice, Phase, RepetitionDrill, WordIdentity, WordPairing,
};
use drillforge::loader;
use drillforge::router::AnyController;
use std::io::{self, BufRead, Write};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Index of the exercise to run within the definitions file.
    #[arg(short, long, default_value_t = 0)]
    pub exercise: usize,
}

/// Host sink for the terminal: prints every controller notification.
struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: HostEvent) {
        match event {
            HostEvent::ScoreSubmitted { correct, total } => {
                println!("\n🏁 Score submitted: {}/{}", correct, total)
            }
            HostEvent::Retried => println!("\n🔄 New attempt started"),
            HostEvent::Completed => println!("\n✅ Exercise complete"),
            HostEvent::Warned(ExerciseWarning::EmptySelection) => {
                println!("\n⚠️  Select at least one item first")
            }
        }
    }
}

pub fn run(args: RunArgs, file: &str, seed: Option<u64>) -> DfResult<()> {
    let specs = loader::load_definitions(file)?;
    loader::audit_all(&specs)?;

    let count = specs.len();
    let spec = specs.into_iter().nth(args.exercise).ok_or_else(|| {
        DrillForgeError::Config(format!(
            "exercise index {} out of range (file has {})",
            args.exercise, count
        ))
    })?;

    info!("Hosting exercise {} ({})", args.exercise, spec.kind());
    println!("\n🚀 Exercise {}: {}", args.exercise, spec.kind());

    let mut controller = AnyController::from_spec(spec, seed);
    let mut events = ConsoleSink;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    match &mut controller {
        AnyController::LetterChoice(c) => run_letter_choice(c, &mut events, &mut lines)?,
        AnyController::AudioMatch(c) => run_audio_match(c, &mut events, &mut lines)?,
        AnyController::RepetitionDrill(c) => run_repetition(c, &mut events, &mut lines)?,
        AnyController::WordIdentity(c) => run_word_identity(c, &mut events, &mut lines)?,
        AnyController::WordPairing(c) => run_word_pairing(c, &mut events, &mut lines)?,
    }

    if let Some(score) = controller.score() {
        reports::print_score(controller.kind(), score);
    }
    Ok(())
}

type Lines<'a> = std::io::Lines<std::io::StdinLock<'a>>;

fn prompt(lines: &mut Lines) -> DfResult<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn run_letter_choice(
    c: &mut LetterChoice,
    events: &mut dyn EventSink,
    lines: &mut Lines,
) -> DfResult<()> {
    println!("Commands: <number> pick letter | n/p navigate | v validate | r retry | f finish | q quit");
    loop {
        if c.phase() == Phase::Completed {
            return Ok(());
        }
        if let Some(item) = c.current_item() {
            let picked = c
                .choice(item.id)
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".into());
            println!(
                "\n[{}/{}] {}   (picked: {})",
                c.cursor() + 1,
                c.items().len(),
                item.masked_text(),
                picked
            );
            let offered: Vec<String> = c
                .offered_letters()
                .iter()
                .enumerate()
                .map(|(i, l)| format!("{}:{}", i + 1, l))
                .collect();
            println!("Letters: {}", offered.join("  "));
        }
        let Some(line) = prompt(lines)? else {
            return Ok(());
        };
        match line.as_str() {
            "q" => return Ok(()),
            "n" => c.navigate(Direction::Next),
            "p" => c.navigate(Direction::Prev),
            "v" => c.validate(events),
            "r" => c.retry(events),
            "f" => c.finish(events),
            other => {
                if let Ok(pick) = other.parse::<usize>() {
                    let letter = c.offered_letters().get(pick.wrapping_sub(1)).copied();
                    let id = c.current_item().map(|item| item.id);
                    if let (Some(letter), Some(id)) = (letter, id) {
                        c.select_letter(id, letter);
                    }
                }
            }
        }
    }
}

fn run_audio_match(
    c: &mut AudioMatch,
    events: &mut dyn EventSink,
    lines: &mut Lines,
) -> DfResult<()> {
    println!("Commands: t <id> toggle | l <id> listen | v validate | r retry | f finish | q quit");
    loop {
        if c.phase() == Phase::Completed {
            return Ok(());
        }
        for item in c.items() {
            let mark = if c.is_selected(item.id) { "✔" } else { " " };
            println!("[{}] {} {}", mark, item.id, item.image);
        }
        let Some(line) = prompt(lines)? else {
            return Ok(());
        };
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q"), _) => return Ok(()),
            (Some("v"), _) => c.validate(events),
            (Some("r"), _) => c.retry(events),
            (Some("f"), _) => c.finish(events),
            (Some("t"), Some(id)) => {
                if let Ok(id) = id.parse() {
                    c.toggle_selection(id);
                }
            }
            (Some("l"), Some(id)) => {
                if let Ok(id) = id.parse() {
                    c.play_item(id, &NullAudio);
                }
            }
            _ => {}
        }
    }
}

fn run_repetition(
    c: &mut RepetitionDrill,
    events: &mut dyn EventSink,
    lines: &mut Lines,
) -> DfResult<()> {
    println!("Commands: l listen | n next | b back | q quit");
    loop {
        if c.phase() == Phase::Completed {
            return Ok(());
        }
        if let Some(word) = c.current_word() {
            println!(
                "\n[{}/{}] {}   ({}/{} plays)",
                c.cursor() + 1,
                c.words().len(),
                word.text,
                c.play_count(c.cursor()),
                c.required_repetitions()
            );
        }
        let Some(line) = prompt(lines)? else {
            return Ok(());
        };
        match line.as_str() {
            "q" => return Ok(()),
            "l" => c.play_current(&NullAudio),
            "n" => c.next(events),
            "b" => c.previous(),
            _ => {}
        }
    }
}

fn run_word_identity(
    c: &mut WordIdentity,
    events: &mut dyn EventSink,
    lines: &mut Lines,
) -> DfResult<()> {
    println!("Commands: t <seq> <candidate> toggle | v validate | r retry | f finish | q quit");
    loop {
        if c.phase() == Phase::Completed {
            return Ok(());
        }
        for (si, seq) in c.sequences().iter().enumerate() {
            let candidates: Vec<String> = seq
                .others
                .iter()
                .enumerate()
                .map(|(ci, o)| {
                    let mark = if c.is_selected(si, ci) { "◉" } else { "○" };
                    format!("{}{}", mark, o.word)
                })
                .collect();
            println!("{}. {}  →  {}", si, seq.model, candidates.join("  "));
        }
        let Some(line) = prompt(lines)? else {
            return Ok(());
        };
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("q"), _, _) => return Ok(()),
            (Some("v"), _, _) => c.validate(events),
            (Some("r"), _, _) => c.retry(events),
            (Some("f"), _, _) => c.finish(events),
            (Some("t"), Some(seq), Some(cand)) => {
                if let (Ok(seq), Ok(cand)) = (seq.parse(), cand.parse()) {
                    c.toggle_candidate(seq, cand);
                }
            }
            _ => {}
        }
    }
}

fn run_word_pairing(
    c: &mut WordPairing,
    events: &mut dyn EventSink,
    lines: &mut Lines,
) -> DfResult<()> {
    println!("Commands: a <left> arm | c <right> connect | v validate | r retry | f finish | q quit");
    loop {
        if c.phase() == Phase::Completed {
            return Ok(());
        }
        for (i, pair) in c.pairs().iter().enumerate() {
            let armed = if c.armed() == Some(i) { "▶" } else { " " };
            let target = c
                .connection_for_left(i)
                .map(|conn| c.right_order()[conn.right].clone())
                .unwrap_or_else(|| "-".into());
            println!("{} {}. {}  →  {}", armed, i, pair.left, target);
        }
        let rights: Vec<String> = c
            .right_order()
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}:{}", i, r))
            .collect();
        println!("Right column: {}", rights.join("  "));
        let Some(line) = prompt(lines)? else {
            return Ok(());
        };
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q"), _) => return Ok(()),
            (Some("v"), _) => c.validate(events),
            (Some("r"), _) => c.retry(events),
            (Some("f"), _) => c.finish(events),
            (Some("a"), Some(i)) => {
                if let Ok(i) = i.parse() {
                    c.arm_left(i);
                }
            }
            (Some("c"), Some(i)) => {
                if let Ok(i) = i.parse() {
                    c.connect_to_right(i);
                }
            }
            _ => {}
        }
    }
}
