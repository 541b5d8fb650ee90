// src/rendering/painter.rs

use super::scene::{self, DiscPrim, RenderTarget};
use crate::config::RenderStyle;
use cairo::{Context, FontSlant, FontWeight, RadialGradient};
use std::f64::consts::PI;

/// Which of the two surfaces a pass paints. The glow pass draws at
/// reduced opacity and omits symbol labels; the blur and final
/// compositing happen in export.rs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    Sharp,
    Glow,
}

/// Shaded sphere disc: offset radial gradient from a near-white
/// highlight through the body color down to a dark rim.
fn draw_disc(cr: &Context, disc: &DiscPrim, opacity: f64) -> Result<(), cairo::Error> {
    if !disc.radius.is_finite() || disc.radius <= 0.0 {
        return Ok(());
    }
    let (r, g, b) = disc.color;

    let gradient = RadialGradient::new(
        disc.x - disc.radius * 0.3,
        disc.y - disc.radius * 0.3,
        disc.radius * 0.1,
        disc.x,
        disc.y,
        disc.radius,
    );
    gradient.add_color_stop_rgba(0.0, 1.0, 1.0, 1.0, opacity);
    gradient.add_color_stop_rgba(0.2, r, g, b, opacity);
    gradient.add_color_stop_rgba(1.0, r * 0.1, g * 0.1, b * 0.1, opacity);

    cr.set_source(&gradient)?;
    cr.arc(disc.x, disc.y, disc.radius, 0.0, 2.0 * PI);
    cr.fill()?;
    Ok(())
}

fn draw_label(cr: &Context, disc: &DiscPrim) -> Result<(), cairo::Error> {
    let label = match &disc.label {
        Some(l) => l,
        None => return Ok(()),
    };
    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Bold);
    cr.set_font_size(disc.radius * 0.7);
    let extents = cr.text_extents(label)?;
    cr.move_to(disc.x - extents.width() / 2.0, disc.y + disc.radius / 3.0);
    cr.show_text(label)?;
    Ok(())
}

fn draw_molecule(
    cr: &Context,
    geometry: &crate::model::geometry::MolecularGeometry,
    pass: RenderPass,
    opacity: f64,
    rot_y: f64,
    rot_x: f64,
    width: f64,
    height: f64,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    let (lines, discs) = scene::molecule_scene(geometry, rot_y, rot_x, width, height, style);

    let (br, bg, bb) = style.bond_color;
    cr.set_source_rgba(br, bg, bb, style.bond_alpha * opacity);
    cr.set_line_width(style.bond_width);
    for line in &lines {
        cr.move_to(line.x1, line.y1);
        cr.line_to(line.x2, line.y2);
        cr.stroke()?;
    }

    for disc in &discs {
        draw_disc(cr, disc, opacity)?;
        if pass == RenderPass::Sharp {
            draw_label(cr, disc)?;
        }
    }
    Ok(())
}

fn draw_element(
    cr: &Context,
    model: &scene::ElementModel,
    opacity: f64,
    time: f64,
    rot_y: f64,
    rot_x: f64,
    width: f64,
    height: f64,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    // Shells first, innermost outward; each ring carries its electrons.
    let rings = scene::shell_scene(&model.stats, time, rot_y, rot_x, width, height, style);
    let (rr, rg, rb) = style.ring_color;
    for ring in &rings {
        cr.set_source_rgba(rr, rg, rb, style.ring_alpha * opacity);
        cr.set_line_width(style.ring_width);
        let mut first = true;
        for point in &ring.path {
            if first {
                cr.move_to(point[0], point[1]);
                first = false;
            } else {
                cr.line_to(point[0], point[1]);
            }
        }
        cr.stroke()?;

        for electron in &ring.electrons {
            draw_disc(cr, electron, opacity)?;
        }
    }

    // Nucleon cluster, back to front.
    let discs = scene::nucleus_scene(&model.nucleons, time, rot_y, rot_x, width, height, style);
    for disc in &discs {
        draw_disc(cr, disc, opacity)?;
    }
    Ok(())
}

/// Paints one pass of a frame onto `cr`. With no active target this is
/// an idle frame: nothing is drawn, and that is not an error.
pub fn render_frame(
    cr: &Context,
    pass: RenderPass,
    target: Option<&RenderTarget>,
    time: f64,
    rot_y: f64,
    rot_x: f64,
    width: f64,
    height: f64,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    let opacity = match pass {
        RenderPass::Sharp => 1.0,
        RenderPass::Glow => style.glow_opacity,
    };

    match target {
        None => Ok(()),
        Some(RenderTarget::Molecule(geometry)) => {
            draw_molecule(cr, geometry, pass, opacity, rot_y, rot_x, width, height, style)
        }
        Some(RenderTarget::Element(model)) => {
            draw_element(cr, model, opacity, time, rot_y, rot_x, width, height, style)
        }
    }
}
