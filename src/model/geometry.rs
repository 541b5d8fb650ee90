// src/model/geometry.rs

use serde::{Deserialize, Serialize};

/// One atom of a supplied molecule geometry. Coordinates are
/// molecule-local units, roughly in [-3, 3].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryAtom {
    pub symbol: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Molecule geometry as handed back by the reasoning API. Bonds are pure
/// draw instructions (index pairs into `atoms`), no valence semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MolecularGeometry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formula: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub atoms: Vec<GeometryAtom>,
    #[serde(default)]
    pub bonds: Vec<(usize, usize)>,
}

impl MolecularGeometry {
    /// Rejects geometries the renderer cannot draw: empty atom lists and
    /// bonds pointing outside the atom list.
    pub fn validate(&self) -> Result<(), String> {
        if self.atoms.is_empty() {
            return Err(format!("geometry '{}' contains no atoms", self.name));
        }
        for &(i, j) in &self.bonds {
            if i >= self.atoms.len() || j >= self.atoms.len() {
                return Err(format!(
                    "bond ({}, {}) out of range for {} atoms",
                    i,
                    j,
                    self.atoms.len()
                ));
            }
        }
        Ok(())
    }

    /// Built-in water molecule, used by the demo binary when no reasoning
    /// API is configured.
    pub fn water() -> Self {
        let atom = |symbol: &str, x: f64, y: f64, z: f64| GeometryAtom {
            symbol: symbol.to_string(),
            x,
            y,
            z,
            color: None,
        };
        MolecularGeometry {
            name: "Water".to_string(),
            formula: "H2O".to_string(),
            description: "Bent molecule, ~104.5 degree H-O-H angle".to_string(),
            atoms: vec![
                atom("O", 0.0, 0.4, 0.0),
                atom("H", -1.2, -0.5, 0.0),
                atom("H", 1.2, -0.5, 0.0),
            ],
            bonds: vec![(0, 1), (0, 2)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_is_valid() {
        let w = MolecularGeometry::water();
        assert!(w.validate().is_ok());
        assert_eq!(w.atoms.len(), 3);
        assert_eq!(w.bonds.len(), 2);
    }

    #[test]
    fn test_empty_geometry_rejected() {
        let g = MolecularGeometry::default();
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_out_of_range_bond_rejected() {
        let mut g = MolecularGeometry::water();
        g.bonds.push((0, 7));
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_deserializes_api_shape() {
        let json = r#"{
            "name": "Methane",
            "formula": "CH4",
            "atoms": [
                {"symbol": "C", "x": 0.0, "y": 0.0, "z": 0.0},
                {"symbol": "H", "x": 1.09, "y": 0.0, "z": 0.0}
            ],
            "bonds": [[0, 1]]
        }"#;
        let g: MolecularGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(g.formula, "CH4");
        assert_eq!(g.bonds, vec![(0, 1)]);
        assert!(g.description.is_empty());
        assert!(g.validate().is_ok());
    }
}
