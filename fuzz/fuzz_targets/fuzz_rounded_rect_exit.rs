#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrollkit_core::{Point, RoundedRect};

#[derive(Debug, Arbitrary)]
struct Input {
    width: f64,
    height: f64,
    radius_frac: f64,
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
}

fn sane(value: f64, limit: f64) -> Option<f64> {
    (value.is_finite() && value.abs() <= limit).then_some(value)
}

fuzz_target!(|input: Input| {
    let (Some(w), Some(h), Some(frac)) = (
        sane(input.width, 1e6),
        sane(input.height, 1e6),
        sane(input.radius_frac, 1.0),
    ) else {
        return;
    };
    if w < 1e-6 || h < 1e-6 {
        return;
    }
    let rect = RoundedRect::new(w, h, frac.abs() * w.min(h) / 2.0);
    let (Some(ax), Some(ay), Some(bx), Some(by)) = (
        sane(input.ax, 1e6),
        sane(input.ay, 1e6),
        sane(input.bx, 1e6),
        sane(input.by, 1e6),
    ) else {
        return;
    };
    let a = Point::new(ax, ay);
    let b = Point::new(bx, by);

    let hit = rect.ray_exit(a, b);
    if a == b {
        assert!(hit.is_none());
    } else if let Some(hit) = hit {
        assert!(hit.is_finite(), "exit {hit:?} not finite");
    }

    let outline = rect.outline(a);
    assert_eq!(outline.first(), outline.last());
});
