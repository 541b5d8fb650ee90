// src/config.rs

use serde::{Deserialize, Serialize};

// --- RenderStyle ---
// Passed into the rendering core explicitly; the core keeps no global
// styling state. Defaults reproduce the dark "lab" look: near-black
// background, cyan bonds, teal/amber nucleons, rose electrons.

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderStyle {
  pub background_color: (f64, f64, f64),

  // Molecule pass
  pub molecule_scale: f64,
  pub atom_size: f64,
  pub bond_color: (f64, f64, f64),
  pub bond_alpha: f64,
  pub bond_width: f64,

  // Element pass
  pub shell_base_radius: f64,
  pub shell_gap: f64,
  pub ring_color: (f64, f64, f64),
  pub ring_alpha: f64,
  pub ring_width: f64,
  pub electron_size: f64,
  pub electron_color: (f64, f64, f64),
  pub nucleon_size: f64,
  pub proton_color: (f64, f64, f64),
  pub neutron_color: (f64, f64, f64),

  // Glow compositing
  pub glow_opacity: f64,
  pub glow_blur_radius: usize,
  pub glow_alpha: f64,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      background_color: (0.008, 0.024, 0.090),

      molecule_scale: 140.0,
      atom_size: 18.0,
      bond_color: (0.133, 0.827, 0.933),
      bond_alpha: 0.4,
      bond_width: 2.0,

      shell_base_radius: 100.0,
      shell_gap: 45.0,
      ring_color: (1.0, 1.0, 1.0),
      ring_alpha: 0.4,
      ring_width: 1.2,
      electron_size: 7.0,
      electron_color: (0.957, 0.247, 0.369),
      nucleon_size: 11.0,
      proton_color: (0.176, 0.831, 0.749),
      neutron_color: (0.984, 0.749, 0.141),

      // Glow pass draws at reduced opacity, gets box-blurred, then is
      // composited beneath the sharp pass at glow_alpha.
      glow_opacity: 0.3,
      glow_blur_radius: 10,
      glow_alpha: 0.6,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_roundtrip_through_json() {
    let style = RenderStyle::default();
    let json = serde_json::to_string(&style).unwrap();
    let back: RenderStyle = serde_json::from_str(&json).unwrap();
    assert_eq!(back.molecule_scale, style.molecule_scale);
    assert_eq!(back.proton_color, style.proton_color);
    assert_eq!(back.glow_blur_radius, style.glow_blur_radius);
  }
}
