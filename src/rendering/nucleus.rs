// src/rendering/nucleus.rs

use rand::Rng;
use std::f64::consts::PI;

/// Hard ceiling on rendered nucleons. A fidelity/performance trade-off
/// for heavy elements, not a physical statement.
pub const MAX_NUCLEONS: usize = 120;

/// One particle of the nucleus cluster. `is_proton` alternates by
/// construction order and only selects the disc color.
#[derive(Debug, Clone, PartialEq)]
pub struct Nucleon {
    pub pos: [f64; 3],
    pub is_proton: bool,
    /// Phase offset in [0, 2π) for independent sinusoidal jitter.
    pub phase: f64,
}

/// Overall cluster radius for a nucleon count. Tiny nuclei (H, He) get a
/// fixed small radius instead of a degenerate point cluster.
pub fn cluster_radius(total: usize) -> f64 {
    if total < 5 {
        14.0
    } else {
        (total as f64).sqrt() * 5.5
    }
}

/// Roughly spherical nucleon cloud: Fibonacci-sphere directions with a
/// cube-root radial jitter so density increases toward the center.
/// Regenerated wholesale whenever the selected element changes.
pub fn generate_nucleus<R: Rng>(protons: u32, neutrons: u32, rng: &mut R) -> Vec<Nucleon> {
    let total = ((protons + neutrons) as usize).min(MAX_NUCLEONS);
    let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
    let radius = cluster_radius(total);

    let mut particles = Vec::with_capacity(total);
    for i in 0..total {
        let (y, ring) = if total <= 1 {
            (0.0, 0.0)
        } else {
            let y = 1.0 - (i as f64 / (total - 1) as f64) * 2.0;
            (y, (1.0 - y * y).max(0.0).sqrt())
        };
        let theta = golden_angle * i as f64;
        let r = radius * rng.gen::<f64>().cbrt();

        particles.push(Nucleon {
            pos: [theta.cos() * ring * r, y * r, theta.sin() * ring * r],
            is_proton: i % 2 == 0,
            phase: rng.gen::<f64>() * 2.0 * PI,
        });
    }
    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_count_matches_and_caps() {
        assert_eq!(generate_nucleus(1, 0, &mut rng()).len(), 1);
        assert_eq!(generate_nucleus(8, 8, &mut rng()).len(), 16);
        // Og-294 exceeds the ceiling
        assert_eq!(generate_nucleus(118, 176, &mut rng()).len(), MAX_NUCLEONS);
        assert!(generate_nucleus(0, 0, &mut rng()).is_empty());
    }

    #[test]
    fn test_particles_inside_radial_bound() {
        for &(p, n) in &[(1u32, 0u32), (2, 2), (8, 8), (79, 118), (118, 176)] {
            let cloud = generate_nucleus(p, n, &mut rng());
            let bound = cluster_radius(cloud.len()) + 1e-9;
            for nuc in &cloud {
                let d = (nuc.pos[0].powi(2) + nuc.pos[1].powi(2) + nuc.pos[2].powi(2)).sqrt();
                assert!(d <= bound, "({}, {}): {} > {}", p, n, d, bound);
            }
        }
    }

    #[test]
    fn test_single_nucleon_sits_at_origin() {
        let cloud = generate_nucleus(1, 0, &mut rng());
        assert_eq!(cloud[0].pos, [0.0, 0.0, 0.0]);
        assert!(cloud[0].is_proton);
    }

    #[test]
    fn test_kind_alternates() {
        let cloud = generate_nucleus(6, 6, &mut rng());
        for (i, nuc) in cloud.iter().enumerate() {
            assert_eq!(nuc.is_proton, i % 2 == 0);
        }
    }

    #[test]
    fn test_phase_in_range() {
        for nuc in generate_nucleus(26, 30, &mut rng()) {
            assert!(nuc.phase >= 0.0 && nuc.phase < 2.0 * PI);
        }
    }

    #[test]
    fn test_seeded_layout_is_reproducible() {
        let a = generate_nucleus(8, 8, &mut StdRng::seed_from_u64(7));
        let b = generate_nucleus(8, 8, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
