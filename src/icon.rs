use image::{Rgba, RgbaImage};

// Placeholder source artwork: blue rounded speech bubble with a tail, transparent background
pub fn speech_bubble(size: u32) -> RgbaImage {
    let w = size as f32;
    let h = size as f32;

    // Bubble body (rounded rectangle) occupies the upper part
    let left = w * 0.10;
    let right = w * 0.90;
    let top = h * 0.12;
    let bottom = h * 0.70;
    let corner = w * 0.16;

    // Tail hangs off the lower left edge
    let t1 = (w * 0.24, bottom - 1.0);
    let t2 = (w * 0.46, bottom - 1.0);
    let t3 = (w * 0.20, h * 0.88);

    RgbaImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let inside = in_rounded_rect(px, py, left, top, right, bottom, corner)
            || point_in_triangle(px, py, t1, t2, t3);
        if !inside {
            return Rgba([0, 0, 0, 0]);
        }
        // vertical gradient: lighter at the top
        let t = ((py - top) / (h * 0.76)).clamp(0.0, 1.0);
        let r = lerp(64.0, 22.0, t);
        let g = lerp(156.0, 96.0, t);
        let b = lerp(246.0, 196.0, t);
        Rgba([r as u8, g as u8, b as u8, 255])
    })
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 { a + (b - a) * t }

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 { ax * by - ay * bx }

fn in_rounded_rect(px: f32, py: f32, l: f32, t: f32, r: f32, b: f32, radius: f32) -> bool {
    if px < l || px > r || py < t || py > b {
        return false;
    }
    // distance to the nearest corner centre, only matters inside a corner square
    let cx = px.clamp(l + radius, r - radius);
    let cy = py.clamp(t + radius, b - radius);
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= radius * radius
}

fn point_in_triangle(px: f32, py: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}
