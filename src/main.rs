use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dnamatch::{
    AlignmentResult, Comparison, RankedEntry, Session, SessionConfig, SessionId,
    SequenceGenerator, TargetChoice, TargetSource,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dnamatch", about = "Compare DNA sequences and rank the similarity scores")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare a sequence against a preset or a random sequence.
    Compare {
        /// Sequence to compare (A, T, C, G; any case). Random when omitted.
        sequence: Option<String>,
        /// "Random Sequence", "random", or a preset name.
        #[arg(long, default_value = "Random Sequence")]
        target: String,
        /// Seed for reproducible random sequences.
        #[arg(long)]
        seed: Option<u64>,
        /// Fail instead of substituting a random target for a preset of a different length.
        #[arg(long)]
        strict: bool,
    },
    /// Print a random sequence.
    Generate {
        /// Number of bases.
        #[arg(long, default_value_t = dnamatch::session::DEFAULT_SEQUENCE_LENGTH)]
        length: usize,
        /// Seed for a reproducible sequence.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the preset reference sequences.
    Presets,
    /// Interactive session reading commands from stdin.
    Play {
        /// Seed for reproducible random sequences.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            sequence,
            target,
            seed,
            strict,
        } => run_compare(sequence, &target, seed, strict)?,
        Commands::Generate { length, seed } => run_generate(length, seed)?,
        Commands::Presets => run_presets(),
        Commands::Play { seed } => run_play(seed)?,
    }

    Ok(())
}

fn session_config(seed: Option<u64>) -> SessionConfig {
    let config = SessionConfig::new();
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn run_compare(sequence: Option<String>, target: &str, seed: Option<u64>, strict: bool) -> Result<()> {
    let config = session_config(seed).with_preset_substitution(!strict);
    let mut session = Session::new(SessionId::from("cli"), config);

    let sequence = match sequence {
        Some(sequence) => sequence.trim().to_string(),
        None => session.random_sequence()?.to_string(),
    };
    let choice: TargetChoice = target.parse()?;
    let comparison = session
        .compare_request(&sequence, &choice)
        .with_context(|| format!("failed to compare '{}' against '{}'", sequence, choice))?;

    print_comparison(&sequence, comparison);
    Ok(())
}

fn run_generate(length: usize, seed: Option<u64>) -> Result<()> {
    let mut generator = match seed {
        Some(seed) => SequenceGenerator::from_seed(seed),
        None => SequenceGenerator::from_entropy(),
    };
    let sequence = generator
        .generate(length)
        .context("failed to generate sequence")?;
    println!("{}", sequence);
    Ok(())
}

fn run_presets() {
    let config = SessionConfig::new();
    for preset in config.presets.iter() {
        println!("{}\t{}", preset.name, preset.sequence);
    }
}

fn run_play(seed: Option<u64>) -> Result<()> {
    let mut session = Session::new(SessionId::from("play"), session_config(seed));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("commands: compare <SEQ> [TARGET] | submit <NAME> | board | quit");
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => {}
            "quit" | "exit" => break,
            "compare" => {
                let (sequence, target) = rest.split_once(' ').unwrap_or((rest, "random"));
                let choice: TargetChoice = target.parse()?;
                match session.compare_request(sequence, &choice) {
                    Ok(comparison) => print_comparison(sequence, comparison),
                    Err(err) => println!("error: {}", err),
                }
            }
            "submit" => match session.submit_latest(rest) {
                Ok(()) => print_board(&session.snapshot()),
                Err(err) => println!("error: {}", err),
            },
            "board" => print_board(&session.snapshot()),
            other => println!("unknown command '{}'", other),
        }

        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}

fn print_comparison(sequence: &str, comparison: &Comparison) {
    let source = match &comparison.source {
        TargetSource::Random => "random".to_string(),
        TargetSource::Preset(name) => format!("preset {}", name),
        TargetSource::Substituted {
            preset,
            preset_length,
        } => format!(
            "random, substituted for preset {} (length {})",
            preset, preset_length
        ),
    };
    println!("Your sequence:       {}", sequence.to_ascii_uppercase());
    println!("Sequence to compare: {} ({})", comparison.target, source);
    println!("Alignment:           {}", render_alignment(&comparison.result));
    println!("Similarity:          {:.2}%", comparison.similarity());
}

fn render_alignment(result: &AlignmentResult) -> String {
    result
        .tags()
        .map(|tag| {
            let marker = if tag.matched { "🟩" } else { "🟥" };
            format!("{}{}", marker, tag.symbol)
        })
        .collect()
}

fn print_board(snapshot: &[RankedEntry]) {
    if snapshot.is_empty() {
        println!("Leaderboard is empty.");
        return;
    }
    println!("Leaderboard");
    for row in snapshot {
        println!("{}. {}: {:.2}%", row.rank, row.name, row.score);
    }
}
