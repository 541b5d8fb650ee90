// src/rendering/scene.rs

use crate::config::RenderStyle;
use crate::model::elements;
use crate::model::geometry::MolecularGeometry;
use crate::rendering::nucleus::Nucleon;
use crate::rendering::projection::project;
use crate::rendering::shells::AtomicStats;
use std::cmp::Ordering;
use std::f64::consts::PI;

/// Element render target: symbol, derived composition and the cached
/// nucleon cloud. The cloud lives until the next selection.
#[derive(Debug, Clone)]
pub struct ElementModel {
  pub symbol: String,
  pub stats: AtomicStats,
  pub nucleons: Vec<Nucleon>,
}

/// Exactly one target is active at a time; switching targets discards
/// the previous model's caches entirely.
#[derive(Debug, Clone)]
pub enum RenderTarget {
  Molecule(MolecularGeometry),
  Element(ElementModel),
}

// These structs are produced here and consumed by painter.rs.
pub struct DiscPrim {
  pub x: f64,
  pub y: f64,
  pub radius: f64,
  pub color: (f64, f64, f64),
  pub label: Option<String>,
  pub depth: f64,
}

pub struct LinePrim {
  pub x1: f64,
  pub y1: f64,
  pub x2: f64,
  pub y2: f64,
}

/// One electron shell: the projected ring polyline plus its electrons.
pub struct RingPrim {
  pub path: Vec<[f64; 2]>,
  pub electrons: Vec<DiscPrim>,
}

fn by_depth_far_first(a: &DiscPrim, b: &DiscPrim) -> Ordering {
  b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal) // NaN-safe
}

/// Projects a molecule geometry into bond lines and depth-sorted atom
/// discs (painter's algorithm, far to near). Bonds with out-of-range
/// indices are skipped rather than panicking.
pub fn molecule_scene(
  geometry: &MolecularGeometry,
  rot_y: f64,
  rot_x: f64,
  width: f64,
  height: f64,
  style: &RenderStyle,
) -> (Vec<LinePrim>, Vec<DiscPrim>) {
  let s = style.molecule_scale;

  let mut lines = Vec::with_capacity(geometry.bonds.len());
  for &(i, j) in &geometry.bonds {
    let (a, b) = match (geometry.atoms.get(i), geometry.atoms.get(j)) {
      (Some(a), Some(b)) => (a, b),
      _ => continue,
    };
    let p1 = project(a.x * s, a.y * s, a.z * s, rot_y, rot_x, width, height);
    let p2 = project(b.x * s, b.y * s, b.z * s, rot_y, rot_x, width, height);
    lines.push(LinePrim {
      x1: p1.x,
      y1: p1.y,
      x2: p2.x,
      y2: p2.y,
    });
  }

  let mut discs: Vec<DiscPrim> = geometry
    .atoms
    .iter()
    .map(|atom| {
      let p = project(atom.x * s, atom.y * s, atom.z * s, rot_y, rot_x, width, height);
      DiscPrim {
        x: p.x,
        y: p.y,
        radius: style.atom_size * p.scale,
        color: elements::display_color(&atom.symbol),
        label: Some(atom.symbol.clone()),
        depth: p.depth,
      }
    })
    .collect();

  discs.sort_by(by_depth_far_first);
  (lines, discs)
}

// Tilts a point on the flat ring into the shell's 3D plane. Tilt angles
// derive from the shell index so shells visually separate.
fn tilt_ring_point(lx: f64, ly: f64, tilt_y: f64, tilt_x: f64) -> (f64, f64, f64) {
  let rx = lx * tilt_y.cos() - ly * tilt_y.sin() * tilt_x.cos();
  let ry = lx * tilt_y.sin() + ly * tilt_y.cos() * tilt_x.cos();
  let rz = ly * tilt_x.sin();
  (rx, ry, rz)
}

/// Builds one tilted ring per shell with its electrons evenly spaced on
/// the ring, each shell advancing at angular speed 1 + 0.2·index.
pub fn shell_scene(
  stats: &AtomicStats,
  time: f64,
  rot_y: f64,
  rot_x: f64,
  width: f64,
  height: f64,
  style: &RenderStyle,
) -> Vec<RingPrim> {
  let num_shells = stats.shells.len();
  let mut rings = Vec::with_capacity(num_shells);

  for (idx, &count) in stats.shells.iter().enumerate() {
    let radius = style.shell_base_radius + idx as f64 * style.shell_gap;
    let tilt_y = idx as f64 * PI / num_shells as f64;
    let tilt_x = idx as f64 * PI / (num_shells as f64 * 1.5);

    let mut path = Vec::new();
    let mut t = 0.0;
    while t <= 2.0 * PI {
      let (rx, ry, rz) = tilt_ring_point(t.cos() * radius, t.sin() * radius, tilt_y, tilt_x);
      let p = project(rx, ry, rz, rot_y, rot_x, width, height);
      path.push([p.x, p.y]);
      t += 0.1;
    }

    let mut electrons = Vec::with_capacity(count as usize);
    for e in 0..count {
      let angle = (time * (1.0 + 0.2 * idx as f64) + e as f64 * (2.0 * PI / count as f64))
        % (2.0 * PI);
      let (rx, ry, rz) = tilt_ring_point(angle.cos() * radius, angle.sin() * radius, tilt_y, tilt_x);
      let p = project(rx, ry, rz, rot_y, rot_x, width, height);
      electrons.push(DiscPrim {
        x: p.x,
        y: p.y,
        radius: style.electron_size * p.scale,
        color: style.electron_color,
        label: None,
        depth: p.depth,
      });
    }

    rings.push(RingPrim { path, electrons });
  }
  rings
}

/// Projects the nucleon cloud, each particle jittered sinusoidally along
/// Y by its stored phase, depth-sorted far to near.
pub fn nucleus_scene(
  nucleons: &[Nucleon],
  time: f64,
  rot_y: f64,
  rot_x: f64,
  width: f64,
  height: f64,
  style: &RenderStyle,
) -> Vec<DiscPrim> {
  let mut discs: Vec<DiscPrim> = nucleons
    .iter()
    .map(|n| {
      let jitter = (time * 3.0 + n.phase).sin() * 0.4;
      let p = project(n.pos[0], n.pos[1] + jitter, n.pos[2], rot_y, rot_x, width, height);
      DiscPrim {
        x: p.x,
        y: p.y,
        radius: style.nucleon_size * p.scale,
        color: if n.is_proton {
          style.proton_color
        } else {
          style.neutron_color
        },
        label: None,
        depth: p.depth,
      }
    })
    .collect();

  discs.sort_by(by_depth_far_first);
  discs
}
