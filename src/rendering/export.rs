// src/rendering/export.rs

use super::blur::box_blur;
use super::painter::{self, RenderPass};
use super::scene::RenderTarget;
use crate::config::RenderStyle;
use crate::driver::FrameParams;
use cairo::{Context, Format, ImageSurface};

fn pass_surface(
    target: Option<&RenderTarget>,
    pass: RenderPass,
    params: &FrameParams,
    width: i32,
    height: i32,
    style: &RenderStyle,
) -> Result<ImageSurface, String> {
    let surface =
        ImageSurface::create(Format::ARgb32, width, height).map_err(|e| e.to_string())?;
    let cr = Context::new(&surface).map_err(|e| e.to_string())?;
    painter::render_frame(
        &cr,
        pass,
        target,
        params.time,
        params.rot_y,
        params.rot_x,
        width as f64,
        height as f64,
        style,
    )
    .map_err(|e| e.to_string())?;
    drop(cr);
    Ok(surface)
}

/// Renders a full composited frame: background, blurred glow pass, then
/// the sharp pass on top. An absent target yields a plain background.
pub fn render_composite(
    target: Option<&RenderTarget>,
    params: &FrameParams,
    width: i32,
    height: i32,
    style: &RenderStyle,
) -> Result<ImageSurface, String> {
    let sharp = pass_surface(target, RenderPass::Sharp, params, width, height, style)?;
    let mut glow = pass_surface(target, RenderPass::Glow, params, width, height, style)?;
    box_blur(&mut glow, style.glow_blur_radius)?;

    let out = ImageSurface::create(Format::ARgb32, width, height).map_err(|e| e.to_string())?;
    let cr = Context::new(&out).map_err(|e| e.to_string())?;

    let (br, bg, bb) = style.background_color;
    cr.set_source_rgb(br, bg, bb);
    cr.paint().map_err(|e| e.to_string())?;

    cr.set_source_surface(&glow, 0.0, 0.0).map_err(|e| e.to_string())?;
    cr.paint_with_alpha(style.glow_alpha).map_err(|e| e.to_string())?;

    cr.set_source_surface(&sharp, 0.0, 0.0).map_err(|e| e.to_string())?;
    cr.paint().map_err(|e| e.to_string())?;

    drop(cr);
    Ok(out)
}

pub fn export_png(surface: &ImageSurface, path: &str) -> Result<(), String> {
    let mut file = std::fs::File::create(path).map_err(|e| e.to_string())?;
    surface.write_to_png(&mut file).map_err(|e| e.to_string())?;
    Ok(())
}
