// src/driver.rs
//
// Animation driver: a two-state machine (Idle / Running) that owns the
// time cursor, the seeded RNG and the active render target with its
// nucleon cache. Rotation angles are deterministic functions of elapsed
// time, so a frame is fully described by FrameParams.

use crate::model::geometry::MolecularGeometry;
use crate::rendering::nucleus::generate_nucleus;
use crate::rendering::scene::{ElementModel, RenderTarget};
use crate::rendering::shells::atomic_stats;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;

/// Fixed time increment per tick.
pub const TIME_STEP: f64 = 0.012;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Everything the renderer needs for one frame: continuous yaw,
/// oscillating pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub time: f64,
    pub rot_y: f64,
    pub rot_x: f64,
}

impl FrameParams {
    pub fn at(time: f64) -> Self {
        FrameParams {
            time,
            rot_y: time * 0.5,
            rot_x: (time * 0.3).sin() * 0.2,
        }
    }
}

/// Cancellation token for a running tick loop. Cloned handles share the
/// flag; cancelling any of them stops the loop at the next tick.
#[derive(Debug, Clone, Default)]
pub struct TickHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TickHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

pub struct AnimationDriver {
    state: DriverState,
    time: f64,
    rng: StdRng,
    target: Option<RenderTarget>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Seeded constructor for reproducible nucleon layouts.
    pub fn with_seed(seed: u64) -> Self {
        AnimationDriver {
            state: DriverState::Idle,
            time: 0.0,
            rng: StdRng::seed_from_u64(seed),
            target: None,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn target(&self) -> Option<&RenderTarget> {
        self.target.as_ref()
    }

    /// Selects an element: regenerates the nucleon cloud, discards any
    /// previous target. Starts the driver if it was idle; re-selection
    /// while running leaves the state machine alone.
    pub fn select_element(&mut self, symbol: &str) -> Result<(), String> {
        let stats =
            atomic_stats(symbol).ok_or_else(|| format!("unknown element symbol '{}'", symbol))?;
        let nucleons = generate_nucleus(stats.protons, stats.neutrons, &mut self.rng);
        self.target = Some(RenderTarget::Element(ElementModel {
            symbol: symbol.to_string(),
            stats,
            nucleons,
        }));
        self.state = DriverState::Running;
        Ok(())
    }

    /// Selects a molecule geometry, invalidating any element model.
    pub fn select_molecule(&mut self, geometry: MolecularGeometry) -> Result<(), String> {
        geometry.validate()?;
        self.target = Some(RenderTarget::Molecule(geometry));
        self.state = DriverState::Running;
        Ok(())
    }

    /// Advances the time cursor by one step and yields the frame
    /// parameters. No-op while idle.
    pub fn tick(&mut self) -> Option<FrameParams> {
        if self.state == DriverState::Idle {
            return None;
        }
        self.time += TIME_STEP;
        Some(FrameParams::at(self.time))
    }

    /// Teardown: back to Idle. The selection survives so a later
    /// restart resumes where it left off.
    pub fn stop(&mut self) {
        self.state = DriverState::Idle;
    }

    /// Drives up to `max_frames` ticks, invoking `frame` with the active
    /// target and frame parameters, until cancelled or the driver goes
    /// idle. Cancellation tears the driver down. Returns the number of
    /// frames produced.
    pub fn run<F>(&mut self, handle: &TickHandle, max_frames: usize, mut frame: F) -> usize
    where
        F: FnMut(&RenderTarget, FrameParams),
    {
        let mut produced = 0;
        while produced < max_frames {
            if handle.is_cancelled() {
                self.stop();
                break;
            }
            let params = match self.tick() {
                Some(p) => p,
                None => break,
            };
            match &self.target {
                Some(target) => frame(target, params),
                None => break,
            }
            produced += 1;
        }
        produced
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_selection() {
        let mut driver = AnimationDriver::with_seed(1);
        assert_eq!(driver.state(), DriverState::Idle);
        assert!(driver.tick().is_none());
        assert_eq!(driver.time(), 0.0);

        driver.select_element("H").unwrap();
        assert_eq!(driver.state(), DriverState::Running);
        let params = driver.tick().unwrap();
        assert!((params.time - TIME_STEP).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_derivation() {
        let p = FrameParams::at(2.0);
        assert!((p.rot_y - 1.0).abs() < 1e-12);
        assert!((p.rot_x - (0.6f64).sin() * 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_element_rejected() {
        let mut driver = AnimationDriver::with_seed(1);
        assert!(driver.select_element("Zz").is_err());
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn test_reselection_regenerates_nucleus() {
        let mut driver = AnimationDriver::with_seed(1);
        driver.select_element("O").unwrap();
        let first = match driver.target().unwrap() {
            RenderTarget::Element(m) => m.nucleons.clone(),
            _ => panic!("expected element target"),
        };
        driver.select_element("O").unwrap();
        let second = match driver.target().unwrap() {
            RenderTarget::Element(m) => m.nucleons.clone(),
            _ => panic!("expected element target"),
        };
        assert_eq!(first.len(), second.len());
        // Fresh RNG draws: the jitter radii differ.
        assert_ne!(first, second);
        assert_eq!(driver.state(), DriverState::Running);
    }

    #[test]
    fn test_molecule_selection_replaces_element() {
        let mut driver = AnimationDriver::with_seed(1);
        driver.select_element("Fe").unwrap();
        driver.select_molecule(MolecularGeometry::water()).unwrap();
        assert!(matches!(
            driver.target(),
            Some(RenderTarget::Molecule(_))
        ));
    }

    #[test]
    fn test_invalid_molecule_rejected() {
        let mut driver = AnimationDriver::with_seed(1);
        assert!(driver.select_molecule(MolecularGeometry::default()).is_err());
        assert!(driver.target().is_none());
    }

    #[test]
    fn test_run_until_cancelled() {
        let mut driver = AnimationDriver::with_seed(1);
        driver.select_element("He").unwrap();

        let handle = TickHandle::new();
        let canceller = handle.clone();
        let mut seen = 0;
        let produced = driver.run(&handle, 100, |_, _| {
            seen += 1;
            if seen == 5 {
                canceller.cancel();
            }
        });
        assert_eq!(produced, 5);
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn test_stop_is_teardown() {
        let mut driver = AnimationDriver::with_seed(1);
        driver.select_element("C").unwrap();
        driver.tick().unwrap();
        driver.stop();
        assert!(driver.tick().is_none());
        // Selection survives teardown.
        assert!(driver.target().is_some());
    }
}
