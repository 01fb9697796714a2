use std::convert::Infallible;

use rand::SeedableRng;
use rand::rngs::StdRng;

use torus_life::grid::Grid;
use torus_life::grid::Snapshot;
use torus_life::sim::Render;
use torus_life::sim::Simulation;

/// Keeps a text copy of every generation it is handed
#[derive(Default)]
struct Recorder {
    frames: Vec<String>,
}

impl Render for Recorder {
    type Error = Infallible;

    fn render(&mut self, snapshot: Snapshot<'_>) -> Result<(), Self::Error> {
        self.frames.push(snapshot.to_string());

        Ok(())
    }
}

/// Refuses every frame
struct Broken;

impl Render for Broken {
    type Error = &'static str;

    fn render(&mut self, _snapshot: Snapshot<'_>) -> Result<(), Self::Error> {
        Err("display unplugged")
    }
}

#[test]
fn step_renders_the_new_generation_once() -> anyhow::Result<()> {
    let grid = Grid::with_alive(5, 5, [(2, 1), (2, 2), (2, 3)])?;
    let mut sim = Simulation::from_grid(grid);
    let mut recorder = Recorder::default();

    sim.step(&mut recorder)?;

    insta::assert_snapshot!(recorder.frames.join("\n"), @r"
    .....
    .....
    .###.
    .....
    .....
    ");

    sim.step(&mut recorder)?;

    assert_eq!(recorder.frames.len(), 2);
    assert_eq!(recorder.frames[1], sim.snapshot().to_string());
    assert_eq!(sim.grid().alive().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);

    Ok(())
}

#[test]
fn render_errors_are_returned() -> anyhow::Result<()> {
    let mut sim = Simulation::new(3, 3)?;

    assert_eq!(sim.step(&mut Broken), Err("display unplugged"));

    Ok(())
}

#[test]
fn headless_stepping() -> anyhow::Result<()> {
    let mut sim = Simulation::new(4, 4)?;
    sim.seed(|| 0.9);

    // A full torus is overcrowded everywhere
    sim.step(&mut ())?;

    assert_eq!(sim.grid().population(), 0);

    Ok(())
}

#[test]
fn zero_sized_world_is_rejected() {
    assert!(Simulation::new(0, 10).is_err());
    assert!(Simulation::new(10, 0).is_err());
}

#[test]
fn seeding_is_reproducible() -> anyhow::Result<()> {
    let mut a = Simulation::new(16, 16)?;
    let mut b = Simulation::new(16, 16)?;

    a.seed_from_rng(&mut StdRng::seed_from_u64(1234));
    b.seed_from_rng(&mut StdRng::seed_from_u64(1234));

    assert_eq!(a.snapshot(), b.snapshot());

    for _ in 0..20 {
        a.step(&mut ())?;
        b.step(&mut ())?;

        assert_eq!(a.snapshot(), b.snapshot());
    }

    Ok(())
}

#[test]
fn random_seeding_is_roughly_half_alive() -> anyhow::Result<()> {
    let mut sim = Simulation::new(64, 64)?;
    sim.seed_from_rng(&mut StdRng::seed_from_u64(99));

    let population = sim.grid().population();

    // 4096 fair coin flips land within 1536..2560 with overwhelming probability
    assert!((1536..2560).contains(&population), "population was {population}");

    Ok(())
}
