// src/rendering/blur.rs
//
// Separable box blur for the glow pass. Operates directly on ARGB32
// pixel data; since cairo image surfaces are premultiplied, blurring all
// four channels uniformly is correct.

use cairo::{Format, ImageSurface};

const CHANNELS: usize = 4;

fn blur_rows(src: &[u8], dst: &mut [u8], width: usize, height: usize, stride: usize, radius: usize) {
    for row in 0..height {
        let base = row * stride;
        for c in 0..CHANNELS {
            let mut sum: u32 = 0;
            let mut count: u32 = 0;
            for x in 0..=radius.min(width - 1) {
                sum += src[base + x * CHANNELS + c] as u32;
                count += 1;
            }
            for x in 0..width {
                dst[base + x * CHANNELS + c] = (sum / count) as u8;
                let incoming = x + radius + 1;
                if incoming < width {
                    sum += src[base + incoming * CHANNELS + c] as u32;
                    count += 1;
                }
                if x >= radius {
                    sum -= src[base + (x - radius) * CHANNELS + c] as u32;
                    count -= 1;
                }
            }
        }
    }
}

fn blur_cols(src: &[u8], dst: &mut [u8], width: usize, height: usize, stride: usize, radius: usize) {
    for col in 0..width {
        let base = col * CHANNELS;
        for c in 0..CHANNELS {
            let mut sum: u32 = 0;
            let mut count: u32 = 0;
            for y in 0..=radius.min(height - 1) {
                sum += src[y * stride + base + c] as u32;
                count += 1;
            }
            for y in 0..height {
                dst[y * stride + base + c] = (sum / count) as u8;
                let incoming = y + radius + 1;
                if incoming < height {
                    sum += src[incoming * stride + base + c] as u32;
                    count += 1;
                }
                if y >= radius {
                    sum -= src[(y - radius) * stride + base + c] as u32;
                    count -= 1;
                }
            }
        }
    }
}

/// Edge-clamped box blur over a raw ARGB32 buffer. Separable: one
/// horizontal pass, one vertical pass.
pub fn blur_buffer(data: &mut [u8], width: usize, height: usize, stride: usize, radius: usize) {
    if radius == 0 || width == 0 || height == 0 {
        return;
    }
    let mut tmp = data.to_vec();
    blur_rows(data, &mut tmp, width, height, stride, radius);
    blur_cols(&tmp, data, width, height, stride, radius);
}

/// Blurs an image surface in place.
pub fn box_blur(surface: &mut ImageSurface, radius: usize) -> Result<(), String> {
    if radius == 0 {
        return Ok(());
    }
    if surface.format() != Format::ARgb32 {
        return Err(format!("unsupported surface format {:?}", surface.format()));
    }
    let width = surface.width() as usize;
    let height = surface.height() as usize;
    let stride = surface.stride() as usize;

    surface.flush();
    {
        let mut data = surface.data().map_err(|e| e.to_string())?;
        blur_buffer(&mut data, width, height, stride, radius);
    }
    surface.mark_dirty();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 8;
    const H: usize = 8;
    const STRIDE: usize = W * CHANNELS;

    fn pixel(data: &[u8], x: usize, y: usize) -> u8 {
        data[y * STRIDE + x * CHANNELS]
    }

    #[test]
    fn test_uniform_stays_uniform() {
        let mut data = vec![100u8; H * STRIDE];
        blur_buffer(&mut data, W, H, STRIDE, 2);
        assert!(data.iter().all(|&v| v == 100));
    }

    #[test]
    fn test_impulse_spreads_symmetrically() {
        let mut data = vec![0u8; H * STRIDE];
        data[4 * STRIDE + 4 * CHANNELS] = 255;
        blur_buffer(&mut data, W, H, STRIDE, 1);

        let center = pixel(&data, 4, 4);
        assert!(center > 0 && center < 255);
        assert_eq!(pixel(&data, 3, 4), pixel(&data, 5, 4));
        assert_eq!(pixel(&data, 4, 3), pixel(&data, 4, 5));
        assert!(pixel(&data, 3, 4) > 0);
        // Energy does not travel beyond the kernel reach.
        assert_eq!(pixel(&data, 7, 7), 0);
    }

    #[test]
    fn test_zero_radius_is_noop() {
        let mut data = vec![0u8; H * STRIDE];
        data[0] = 9;
        let before = data.clone();
        blur_buffer(&mut data, W, H, STRIDE, 0);
        assert_eq!(data, before);
    }
}
