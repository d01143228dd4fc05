use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "stepscene", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a walkthrough and write its scene script as JSON.
    Play(PlayArgs),
    /// Print a walkthrough's reference result without recording a scene.
    Solve(SolveArgs),
    /// List the built-in sample walkthroughs.
    List,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Built-in sample walkthrough to run.
    #[arg(long, value_enum, conflicts_with = "in_path")]
    sample: Option<SampleChoice>,

    /// Input walkthrough JSON (alternative to --sample).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output scene script JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SolveArgs {
    /// Built-in sample walkthrough to run.
    #[arg(long, value_enum, conflicts_with = "in_path")]
    sample: Option<SampleChoice>,

    /// Input walkthrough JSON (alternative to --sample).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SampleChoice {
    RepeatDistance,
    DigitPairs,
    GridPairs,
    Anagrams,
    TrieOps,
    RansomNote,
    Jewels,
}

impl SampleChoice {
    fn index(self) -> usize {
        match self {
            Self::RepeatDistance => 0,
            Self::DigitPairs => 1,
            Self::GridPairs => 2,
            Self::Anagrams => 3,
            Self::TrieOps => 4,
            Self::RansomNote => 5,
            Self::Jewels => 6,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Solve(args) => cmd_solve(args),
        Command::List => cmd_list(),
    }
}

fn read_input_json(path: &Path) -> anyhow::Result<stepscene::WalkthroughInput> {
    let f = File::open(path).with_context(|| format!("open walkthrough '{}'", path.display()))?;
    let r = BufReader::new(f);
    let input: stepscene::WalkthroughInput =
        serde_json::from_reader(r).with_context(|| "parse walkthrough JSON")?;
    Ok(input)
}

fn resolve_input(
    sample: Option<SampleChoice>,
    in_path: Option<&Path>,
) -> anyhow::Result<stepscene::WalkthroughInput> {
    match (sample, in_path) {
        (Some(choice), None) => Ok(stepscene::sample_inputs()
            .swap_remove(choice.index())),
        (None, Some(path)) => read_input_json(path),
        (None, None) => anyhow::bail!("either --sample or --in is required"),
        (Some(_), Some(_)) => unreachable!("clap rejects --sample with --in"),
    }
}

#[derive(serde::Serialize)]
struct PlayOutput {
    outcome: stepscene::Outcome,
    script: stepscene::SceneScript,
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let input = resolve_input(args.sample, args.in_path.as_deref())?;

    let mut stage = stepscene::RecordingStage::new();
    let outcome = stepscene::run(&mut stage, &input)?;
    let output = PlayOutput {
        outcome,
        script: stage.into_script(),
    };

    let json = serde_json::to_string_pretty(&output).with_context(|| "serialize scene script")?;
    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write scene script '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_solve(args: SolveArgs) -> anyhow::Result<()> {
    let input = resolve_input(args.sample, args.in_path.as_deref())?;

    let mut stage = stepscene::RecordingStage::new();
    let outcome = stepscene::run(&mut stage, &input)?;

    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    for input in stepscene::sample_inputs() {
        println!("{}", serde_json::to_string(&input)?);
    }
    Ok(())
}
