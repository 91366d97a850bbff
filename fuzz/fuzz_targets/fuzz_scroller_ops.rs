#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrollkit_widgets::{
    Orientation, Point, RangeScroller, Scroller, ScrollerHooks, ScrollerParams,
};

#[derive(Debug, Arbitrary)]
enum Op {
    Increment,
    Decrement,
    Set(i64),
    ChangeBy(i64),
    Click(f64, f64),
    SetRange(i64),
    ChangeRangeBy(i64),
    Track(i64),
}

#[derive(Debug, Arbitrary)]
struct Input {
    vertical: bool,
    size: u32,
    init_range: u16,
    min_range: u16,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let orientation = if input.vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let Ok(params) = ScrollerParams::new(orientation, 0.1, 0.2, 10, 0.0, 1.0, 0.01) else {
        return;
    };
    let size = i64::from(input.size);
    let mut scroller = Scroller::new(params, ScrollerHooks::fixed(size));
    let window = params
        .with_range(u64::from(input.init_range), u64::from(input.min_range))
        .ok();
    let mut range =
        window.and_then(|w| RangeScroller::new(w, ScrollerHooks::fixed(size)).ok());

    for op in input.ops.iter().take(256) {
        match *op {
            Op::Increment => {
                scroller.increment();
            }
            Op::Decrement => {
                scroller.decrement();
            }
            Op::Set(n) => {
                scroller.set_position(n);
            }
            Op::ChangeBy(d) => {
                scroller.change_by(d);
            }
            Op::Click(x, y) => {
                scroller.hit_test(Point::new(x, y));
                if let Some(range) = range.as_mut() {
                    range.hit_test(Point::new(x, y));
                }
            }
            Op::SetRange(r) => {
                if let Some(range) = range.as_mut() {
                    range.set_range(r);
                }
            }
            Op::ChangeRangeBy(d) => {
                if let Some(range) = range.as_mut() {
                    range.change_range_by(d);
                }
            }
            Op::Track(t) => {
                if let Some(range) = range.as_mut() {
                    range.track(t);
                }
            }
        }

        let cursor = *scroller.cursor();
        assert!(cursor >= 0 && cursor <= (size - 1).max(0), "cursor {cursor} size {size}");
        if let Some(range) = range.as_ref() {
            let width = *range.range();
            assert!(width >= *range.min_range() && width <= size);
            if let Some(visible) = range.visible_range() {
                assert!(*visible.end() <= size - 1);
            }
        }
    }
});
