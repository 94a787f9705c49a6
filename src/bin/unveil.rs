use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use unveil::{PageEngine, TimeMs};

#[derive(Parser, Debug)]
#[command(name = "unveil", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a page JSON document.
    Validate(ValidateArgs),
    /// Drive a page with a scroll script and print evaluated snapshots as
    /// JSON lines.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll script JSON: a list of `{at_ms, scroll_y}` events.
    #[arg(long)]
    script: Option<PathBuf>,

    /// End of the simulated timeline, in milliseconds.
    #[arg(long, default_value_t = 5000)]
    until_ms: u64,

    /// Sampling step, in milliseconds.
    #[arg(long, default_value_t = 100)]
    step_ms: u64,
}

#[derive(Clone, Copy, Debug, serde::Deserialize)]
struct ScriptEvent {
    at_ms: u64,
    scroll_y: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_page_json(path: &Path) -> anyhow::Result<unveil::Page> {
    let f = File::open(path).with_context(|| format!("open page '{}'", path.display()))?;
    let r = BufReader::new(f);
    let page: unveil::Page = serde_json::from_reader(r).with_context(|| "parse page JSON")?;
    Ok(page)
}

fn read_script_json(path: &Path) -> anyhow::Result<Vec<ScriptEvent>> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let r = BufReader::new(f);
    let mut events: Vec<ScriptEvent> =
        serde_json::from_reader(r).with_context(|| "parse script JSON")?;
    events.sort_by_key(|e| e.at_ms);
    Ok(events)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let page = read_page_json(&args.in_path)?;
    page.validate()?;
    eprintln!(
        "ok: {} sections, doc height {}px",
        page.sections.len(),
        page.doc_height
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if args.step_ms == 0 {
        anyhow::bail!("--step-ms must be > 0");
    }

    let page = read_page_json(&args.in_path)?;
    let events = match &args.script {
        Some(path) => read_script_json(path)?,
        None => Vec::new(),
    };

    let mut engine = PageEngine::new(page, TimeMs(0))?;

    let mut next_event = 0usize;
    let mut steps = 0usize;
    let mut t = 0u64;
    while t <= args.until_ms {
        while next_event < events.len() && events[next_event].at_ms <= t {
            let ev = events[next_event];
            engine.on_scroll(ev.scroll_y, TimeMs(ev.at_ms));
            next_event += 1;
        }
        engine.tick(TimeMs(t));

        let snapshot = engine.sample(TimeMs(t));
        println!("{}", serde_json::to_string(&snapshot)?);
        steps += 1;
        t += args.step_ms;
    }

    eprintln!("simulated {steps} steps over {}ms", args.until_ms);
    Ok(())
}
