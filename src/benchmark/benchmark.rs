use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SimResult;
use crate::simulation::params::Parameters;
use crate::simulation::presets::Preset;
use crate::simulation::scenario::Simulation;

/// Helper to build a seeded galaxies simulation with `n` particles
fn make_simulation(n: usize) -> SimResult<Simulation> {
    let mut params = Parameters::default();
    params.set_particle_count(n);
    let mut rng = StdRng::seed_from_u64(42);
    let matrix = Preset::Galaxies.matrix(&mut rng);
    Simulation::with_matrix(params, matrix, rng)
}

/// Time a few steps for a range of population sizes
pub fn bench_step() -> SimResult<()> {
    let ns = [250, 500, 1000, 2000, 4000];
    let steps = 5;

    for n in ns {
        let mut sim = make_simulation(n)?;

        // Warm up
        sim.step()?;

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step()?;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {:8.6} s", per_step);
    }
    Ok(())
}

/// Step time for n = 200..=6000
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() -> SimResult<()> {
    println!("N,step_ms");

    for n in (200..=6000).step_by(200) {
        // All-pairs cost grows fast, so average fewer steps for large n
        let steps = if n <= 1000 { 5 } else { 1 };

        let mut sim = make_simulation(n)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step()?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}

/// Drive `sim` for `steps` steps without a window, logging progress
pub fn run_headless(sim: &mut Simulation, steps: u64) -> SimResult<()> {
    info!("headless run: {} steps, {} particles", steps, sim.system().len());

    let report_every = (steps / 10).max(1);
    let t0 = Instant::now();

    for _ in 0..steps {
        sim.tick()?;
        if sim.step_count() % report_every == 0 {
            info!(
                "step {:6}  kinetic energy {:12.4}",
                sim.step_count(),
                sim.system().kinetic_energy()
            );
        }
    }

    let elapsed = t0.elapsed().as_secs_f64();
    info!(
        "headless run done in {:.3} s ({:.3} ms/step)",
        elapsed,
        1000.0 * elapsed / steps.max(1) as f64
    );
    Ok(())
}
