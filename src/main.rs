use std::fs::File;
use std::io;
use std::io::Stdout;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::event;
use crossterm::terminal;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use torus_life::config::Config;
use torus_life::events;
use torus_life::events::Event;
use torus_life::schedule::Ticker;
use torus_life::sim::Render;
use torus_life::sim::Simulation;
use torus_life::term::Palette;
use torus_life::term::Terminal;

/// How long to wait for input while paused
const IDLE_POLL: Duration = Duration::from_millis(250);

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;

            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::sink).init(),
    }

    Ok(())
}

fn run(
    sim: &mut Simulation,
    term: &mut Terminal<Stdout>,
    rng: &mut StdRng,
    interval: Duration,
) -> anyhow::Result<()> {
    let mut ticker = Ticker::new(interval);
    ticker.start(Instant::now());

    term.render(sim.snapshot())
        .context("Failed to draw the first generation")?;

    loop {
        let timeout = ticker.until_next(Instant::now()).unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match events::convert_event(event::read()?) {
                None => {}
                Some(Event::Exit) => break,
                Some(Event::TogglePause) => {
                    let running = ticker.toggle(Instant::now());
                    info!(running, "Toggled pause");
                }
                Some(Event::Reseed) => {
                    sim.seed_from_rng(rng);
                    term.render(sim.snapshot())
                        .context("Failed to draw the reseeded generation")?;
                }
                Some(Event::Step) => sim.step(term).context("Failed to draw generation")?,
                Some(Event::Resize { cols, rows }) => {
                    term.resize(cols, rows);
                    term.render(sim.snapshot())
                        .context("Failed to redraw after resize")?;
                }
            }
        }

        if ticker.poll(Instant::now()) {
            sim.step(term).context("Failed to draw generation")?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(config.log_file.as_deref())?;

    info!(?config, "Starting");

    let mut sim =
        Simulation::new(config.width, config.height).context("Failed to create the world")?;
    let mut rng = config.rng();
    sim.seed_from_rng(&mut rng);

    let (cols, rows) = terminal::size().context("Failed to read the terminal size")?;
    let mut term = Terminal::new(io::stdout(), cols, rows, config.tiling(), Palette::default());

    if let Err(e) = term.enter() {
        // Raw mode may already be on
        let _ = term.leave();

        return Err(e).context("Failed to set up the terminal");
    }

    let res = run(&mut sim, &mut term, &mut rng, config.interval());
    term.leave().context("Failed to restore the terminal")?;

    info!("Exiting");

    res
}
