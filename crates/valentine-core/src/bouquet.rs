//! Procedural bouquet drawn next to the greeting.

use std::fmt::Write;

struct Flower {
    cx: f32,
    cy: f32,
    color: &'static str,
    petal_r: f32,
}

const MAIN_FLOWERS: [Flower; 6] = [
    Flower { cx: 100.0, cy: 80.0, color: "#5BA3D0", petal_r: 12.0 },
    Flower { cx: 65.0, cy: 110.0, color: "#4A90C9", petal_r: 11.0 },
    Flower { cx: 135.0, cy: 110.0, color: "#5BA3D0", petal_r: 11.0 },
    Flower { cx: 80.0, cy: 140.0, color: "#4A90C9", petal_r: 10.0 },
    Flower { cx: 120.0, cy: 140.0, color: "#5BA3D0", petal_r: 10.0 },
    Flower { cx: 100.0, cy: 160.0, color: "#3A7DB5", petal_r: 9.0 },
];

const SMALL_FLOWERS: [Flower; 4] = [
    Flower { cx: 55.0, cy: 130.0, color: "#4A90C9", petal_r: 6.0 },
    Flower { cx: 145.0, cy: 130.0, color: "#5BA3D0", petal_r: 6.0 },
    Flower { cx: 70.0, cy: 170.0, color: "#5BA3D0", petal_r: 6.0 },
    Flower { cx: 130.0, cy: 170.0, color: "#4A90C9", petal_r: 6.0 },
];

// (x2, y2, stroke width); every stem starts at (100, 280)
const STEMS: [(f32, f32, f32); 6] = [
    (95.0, 150.0, 4.0),
    (105.0, 150.0, 4.0),
    (80.0, 180.0, 3.0),
    (120.0, 180.0, 3.0),
    (70.0, 200.0, 2.5),
    (130.0, 200.0, 2.5),
];

pub const MAIN_PETAL_ANGLES: [f32; 5] = [0.0, 72.0, 144.0, 216.0, 288.0];
pub const SMALL_PETAL_ANGLES: [f32; 3] = [0.0, 120.0, 240.0];

/// Petal centre at `angle_deg` around (`cx`, `cy`).
#[inline]
pub fn petal_center(cx: f32, cy: f32, angle_deg: f32, distance: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (cx + rad.cos() * distance, cy + rad.sin() * distance)
}

fn flower(out: &mut String, f: &Flower, angles: &[f32], distance: f32, heart_r: f32) {
    out.push_str("<g>");
    for &angle in angles {
        let (x, y) = petal_center(f.cx, f.cy, angle, distance);
        _ = write!(
            out,
            r#"<circle class="petal" cx="{:.2}" cy="{:.2}" r="{}" fill="{}" opacity="0.9"/>"#,
            x, y, f.petal_r, f.color
        );
    }
    _ = write!(
        out,
        r##"<circle cx="{}" cy="{}" r="{}" fill="#ffffff" opacity="0.9"/>"##,
        f.cx, f.cy, heart_r
    );
    out.push_str("</g>");
}

/// Full `<svg>` markup for the bouquet.
pub fn bouquet_svg() -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(
        r#"<svg width="240" height="340" viewBox="0 0 200 300" xmlns="http://www.w3.org/2000/svg" class="bouquet-art">"#,
    );
    for (x2, y2, w) in STEMS {
        _ = write!(
            out,
            r##"<line x1="100" y1="280" x2="{}" y2="{}" stroke="#4A90C9" stroke-width="{}"/>"##,
            x2, y2, w
        );
    }
    for f in &MAIN_FLOWERS {
        flower(&mut out, f, &MAIN_PETAL_ANGLES, f.petal_r + 4.0, 7.0);
    }
    for f in &SMALL_FLOWERS {
        flower(&mut out, f, &SMALL_PETAL_ANGLES, 10.0, 4.0);
    }
    out.push_str("</svg>");
    out
}
