//! onefloor — run the one-floor sweep simulation from the command line.
//!
//! A responder enters at the west exit, walks the door patrol, and clears
//! each room it dwells at, while up to three occupants drift toward the
//! nearer exit.  By default every step is drawn to the terminal; pass
//! `--no-display` for a headless run.  Trajectories, events, door states
//! and the visit heatmap are written to `--outdir` either way.
//!
//! ```text
//! cargo run -p onefloor -- --steps 200 --interval 0.02
//! cargo run -p onefloor -- --no-display --seed 11 --outdir out/seed11
//! RUST_LOG=debug cargo run -p onefloor -- --no-display
//! ```

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sweep_core::SweepConfig;
use sweep_output::{
    CsvWriter, OutputError, OutputWriter, SweepOutputObserver, render_frame, status_line,
};
use sweep_sim::{Engine, Event, SimObserver, Snapshot};


// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "onefloor", about = "One-floor responder sweep simulation")]
struct Args {
    /// Step budget (overrides the config file).
    #[arg(long)]
    steps: Option<u64>,

    /// Seconds to pause between frames in the live view.
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    interval: f64,

    /// Run headless; only the export files are produced.
    #[arg(long)]
    no_display: bool,

    /// Directory for exported files (created if missing).
    #[arg(long, default_value = "sweep_output")]
    outdir: PathBuf,

    /// RNG seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of occupants, 0 to 3 (overrides the config file).
    #[arg(long)]
    occupants: Option<usize>,

    /// JSON file with `SweepConfig` fields; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write `output.db` next to the CSV files (needs the `sqlite` feature).
    #[arg(long)]
    sqlite: bool,
}

impl Args {
    fn sweep_config(&self) -> Result<SweepConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening config {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SweepConfig::default(),
        };
        if let Some(steps) = self.steps {
            config.max_steps = steps;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(n) = self.occupants {
            config.occupant_count = n;
        }
        Ok(config)
    }

    fn frame_interval(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.interval).with_context(|| {
            format!("--interval must be a finite, non-negative number of seconds (got {})", self.interval)
        })
    }
}

// ── Live terminal view ────────────────────────────────────────────────────────

/// Redraws the floor on every [`show`][Self::show].
///
/// The first write error is stored and ends drawing; check it with
/// [`take_error`][Self::take_error] after the run.
struct LiveView<W: Write> {
    out:      W,
    interval: Duration,
    last:     Option<String>,
    error:    Option<io::Error>,
}

impl<W: Write> LiveView<W> {
    fn new(out: W, interval: Duration) -> Self {
        Self { out, interval, last: None, error: None }
    }

    fn show(&mut self, snapshot: &Snapshot<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.draw(snapshot) {
            self.error = Some(e);
            return;
        }
        if !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
    }

    fn draw(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        // Clear screen, cursor home.
        write!(self.out, "\x1b[2J\x1b[H{}", render_frame(snapshot))?;
        match &self.last {
            Some(last) => writeln!(self.out, "{}  last: {last}", status_line(snapshot))?,
            None => writeln!(self.out, "{}", status_line(snapshot))?,
        }
        self.out.flush()
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W: Write> SimObserver for LiveView<W> {
    fn on_event(&mut self, event: &Event) {
        self.last = Some(format!("{} {}", event.tick, event.kind()));
    }

    fn on_step(&mut self, snapshot: &Snapshot<'_>) {
        self.show(snapshot);
    }
}

// ── Export ────────────────────────────────────────────────────────────────────

/// An export observer whose write errors can be collected after a run.
trait Export: SimObserver {
    fn take_error(&mut self) -> Option<OutputError>;
}

impl<W: OutputWriter> Export for SweepOutputObserver<W> {
    fn take_error(&mut self) -> Option<OutputError> {
        SweepOutputObserver::take_error(self)
    }
}

impl<A: Export, B: Export> Export for (A, B) {
    fn take_error(&mut self) -> Option<OutputError> {
        let first = self.0.take_error();
        let second = self.1.take_error();
        first.or(second)
    }
}

fn run_with<E: Export, W: Write>(
    engine: &mut Engine,
    mut export: E,
    live: Option<&mut LiveView<W>>,
) -> Result<()> {
    let t0 = Instant::now();
    match live {
        Some(live) => engine.run(&mut (live, &mut export)),
        None => engine.run(&mut export),
    }
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "simulation complete");

    if let Some(e) = export.take_error() {
        return Err(e).context("writing output");
    }
    Ok(())
}

#[cfg(feature = "sqlite")]
fn export<W: Write>(
    engine: &mut Engine,
    csv: SweepOutputObserver<CsvWriter>,
    live: Option<&mut LiveView<W>>,
    args: &Args,
) -> Result<()> {
    if args.sqlite {
        let db = SweepOutputObserver::new(sweep_output::SqliteWriter::new(&args.outdir)?);
        return run_with(engine, (csv, db), live);
    }
    run_with(engine, csv, live)
}

#[cfg(not(feature = "sqlite"))]
fn export<W: Write>(
    engine: &mut Engine,
    csv: SweepOutputObserver<CsvWriter>,
    live: Option<&mut LiveView<W>>,
    _args: &Args,
) -> Result<()> {
    run_with(engine, csv, live)
}

/// Build the engine from `args`, run it to its step budget and write every
/// export file.  The live view (unless `--no-display`) goes to stdout.
fn simulate(args: &Args) -> Result<Engine> {
    if args.sqlite && !cfg!(feature = "sqlite") {
        bail!("--sqlite requires building with `--features sqlite`");
    }
    let interval = args.frame_interval()?;
    let config = args.sweep_config()?;
    let mut engine = Engine::new(config).context("invalid simulation config")?;

    std::fs::create_dir_all(&args.outdir)
        .with_context(|| format!("creating {}", args.outdir.display()))?;
    let csv = SweepOutputObserver::new(CsvWriter::new(&args.outdir, engine.occupants().len())?);

    let mut live = (!args.no_display).then(|| LiveView::new(io::stdout(), interval));
    if let Some(live) = live.as_mut() {
        live.show(&engine.snapshot());
    }

    export(&mut engine, csv, live.as_mut(), args)?;

    if let Some(e) = live.as_mut().and_then(LiveView::take_error) {
        return Err(e).context("drawing live view");
    }
    Ok(engine)
}

fn saved_files(dir: &Path, occupants: usize, sqlite: bool) -> Vec<PathBuf> {
    let mut files = vec![dir.join("responder_track.csv")];
    files.extend((0..occupants).map(|i| dir.join(format!("occupant_{i}_track.csv"))));
    files.extend(
        ["events.csv", "doors.csv", "cleared_over_time.csv", "visit_heatmap.csv"]
            .map(|name| dir.join(name)),
    );
    if sqlite {
        files.push(dir.join("output.db"));
    }
    files
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let engine = simulate(&args)?;

    if !engine.all_cleared() {
        warn!(
            cleared = engine.cleared_count(),
            doors   = engine.cleared().len(),
            "step budget ran out before every room was cleared",
        );
    }

    // Final door table.
    println!();
    println!("{:<6} {:<10} {:<8}", "Door", "Cell", "Cleared");
    println!("{}", "-".repeat(26));
    for (i, (door, &cleared)) in engine.plan().doors().iter().zip(engine.cleared()).enumerate() {
        println!("{:<6} {:<10} {:<8}", i, door.to_string(), if cleared { "yes" } else { "no" });
    }
    println!();

    for path in saved_files(&args.outdir, engine.occupants().len(), args.sqlite) {
        println!("saved {}", path.display());
    }
    Ok(())
}
