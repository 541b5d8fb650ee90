// src/rendering/shells.rs

use crate::model::elements;

/// Bohr-model shell occupancy: shell n holds up to 2n² electrons, filled
/// greedily innermost-first. Deliberately not the real Madelung filling
/// order; acceptable for visualization, not chemically exact.
pub fn compute_shells(atomic_number: u32) -> Vec<u32> {
    let mut shells = Vec::new();
    let mut remaining = atomic_number;
    let mut n = 1u32;
    while remaining > 0 {
        let capacity = 2 * n * n;
        let filled = remaining.min(capacity);
        shells.push(filled);
        remaining -= filled;
        n += 1;
    }
    shells
}

/// Derived per-element composition for the HUD and the element render
/// target. The atom is modeled as neutral (electrons == protons).
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicStats {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub valence: u32,
    pub shells: Vec<u32>,
}

pub fn atomic_stats(symbol: &str) -> Option<AtomicStats> {
    let rec = elements::lookup(symbol)?;
    let neutrons = (rec.mass - rec.number as f64).round().max(0.0) as u32;
    Some(AtomicStats {
        protons: rec.number,
        neutrons,
        electrons: rec.number,
        valence: rec.valence,
        shells: compute_shells(rec.number),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancies_sum_to_z_with_valid_capacities() {
        for z in 1u32..=118 {
            let shells = compute_shells(z);
            assert_eq!(shells.iter().sum::<u32>(), z, "sum broken at Z={}", z);
            for (idx, &count) in shells.iter().enumerate() {
                let n = idx as u32 + 1;
                assert!(count > 0 || idx + 1 < shells.len());
                assert!(count <= 2 * n * n, "Z={} shell {} overfull", z, n);
            }
            // Minimal: no trailing empty shell.
            assert_ne!(*shells.last().unwrap(), 0);
        }
    }

    #[test]
    fn test_zero_electrons_gives_no_shells() {
        assert!(compute_shells(0).is_empty());
    }

    #[test]
    fn test_hydrogen_scenario() {
        let stats = atomic_stats("H").unwrap();
        assert_eq!(stats.shells, vec![1]);
        assert_eq!(stats.protons, 1);
        // mass 1.008 rounds to 0 neutrons
        assert_eq!(stats.neutrons, 0);
        assert_eq!(stats.electrons, 1);
    }

    #[test]
    fn test_oxygen_scenario() {
        let stats = atomic_stats("O").unwrap();
        assert_eq!(stats.shells, vec![2, 6]);
        assert_eq!(stats.protons, 8);
        assert_eq!(stats.neutrons, 8);
        assert_eq!(stats.valence, 6);
    }

    #[test]
    fn test_heavy_element_shells() {
        // Greedy 2n² fill for gold: 79 = 2 + 8 + 18 + 32 + 19
        assert_eq!(compute_shells(79), vec![2, 8, 18, 32, 19]);
    }

    #[test]
    fn test_unknown_symbol_has_no_stats() {
        assert!(atomic_stats("Qq").is_none());
    }
}
