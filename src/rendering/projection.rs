// src/rendering/projection.rs

/// Field-of-view distance of the fixed camera.
pub const FOV: f64 = 800.0;
/// Distance between the camera and the object-space origin. Chosen so a
/// shell model with a handful of shells fills a 600px viewport.
pub const CAMERA_OFFSET: f64 = 450.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen position in pixels, centered at (width/2, height/2).
    pub x: f64,
    pub y: f64,
    /// Post-rotation Z, used for depth sorting only (larger = farther).
    pub depth: f64,
    /// Perspective factor; sizes in object space multiply by this.
    pub scale: f64,
}

/// Perspective projection of an object-space point. Yaw rotation in the
/// X-Z plane first, then pitch in the resulting Y-Z plane. Pure and
/// deterministic; NaN inputs propagate to NaN outputs.
pub fn project(x: f64, y: f64, z: f64, rot_y: f64, rot_x: f64, width: f64, height: f64) -> Projected {
    let (sin_y, cos_y) = rot_y.sin_cos();
    let (sin_x, cos_x) = rot_x.sin_cos();

    // Yaw around Y
    let x1 = x * cos_y - z * sin_y;
    let z1 = x * sin_y + z * cos_y;

    // Pitch around X
    let y1 = y * cos_x - z1 * sin_x;
    let z2 = y * sin_x + z1 * cos_x;

    let scale = FOV / (FOV + z2 + CAMERA_OFFSET);
    Projected {
        x: width / 2.0 + x1 * scale,
        y: height / 2.0 + y1 * scale,
        depth: z2,
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 600.0;
    const H: f64 = 600.0;

    #[test]
    fn test_identity_rotation_at_z0() {
        // scale0 = 800 / (800 + 0 + 450)
        let scale0 = FOV / (FOV + CAMERA_OFFSET);
        let p = project(50.0, -30.0, 0.0, 0.0, 0.0, W, H);
        assert!((p.scale - scale0).abs() < 1e-12);
        assert!((p.x - (W / 2.0 + 50.0 * scale0)).abs() < 1e-9);
        assert!((p.y - (H / 2.0 - 30.0 * scale0)).abs() < 1e-9);
        assert!((p.depth).abs() < 1e-12);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let p = project(0.0, 0.0, 0.0, 1.3, -0.7, W, H);
        assert!((p.x - W / 2.0).abs() < 1e-9);
        assert!((p.y - H / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_farther_points_shrink() {
        let near = project(10.0, 0.0, -100.0, 0.0, 0.0, W, H);
        let far = project(10.0, 0.0, 100.0, 0.0, 0.0, W, H);
        assert!(near.scale > far.scale);
        assert!(near.depth < far.depth);
        assert!(far.scale > 0.0);
    }

    #[test]
    fn test_yaw_moves_x_into_depth() {
        // A quarter turn maps +X onto +Z.
        let p = project(100.0, 0.0, 0.0, std::f64::consts::FRAC_PI_2, 0.0, W, H);
        assert!((p.depth - 100.0).abs() < 1e-9);
        assert!((p.x - W / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_nan_propagates() {
        let p = project(f64::NAN, 0.0, 0.0, 0.0, 0.0, W, H);
        assert!(p.x.is_nan());
    }
}
