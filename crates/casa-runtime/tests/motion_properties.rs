//! Property tests for counters, parallax tracks and reveal scheduling.

use std::time::Duration;

use casa_runtime::geometry::{ElementBox, LayoutMap, ScrollPos, Viewport};
use casa_runtime::motion::{
    Counter, ParallaxTrack, RevealScheduler, RevealSpec, ScalarProp, StyleBook, track_progress,
};
use proptest::prelude::*;

fn vp(scroll_y: f64, height: f64) -> Viewport {
    Viewport {
        width: 1280.0,
        height,
        scroll_y,
    }
}

proptest! {
    #[test]
    fn counter_is_monotone_and_ends_on_target(
        target in 0u64..10_000_000,
        duration_ms in 1u64..5_000,
        mut steps in prop::collection::vec(0u64..6_000, 1..60),
    ) {
        steps.sort_unstable();
        let mut c = Counter::new(target, Duration::from_millis(duration_ms));
        c.start(Duration::ZERO);
        let mut last = 0;
        for t in steps {
            if let Some(v) = c.tick(Duration::from_millis(t)) {
                prop_assert!(v > last);
                prop_assert!(v <= target);
                last = v;
            }
        }
        c.tick(Duration::from_millis(duration_ms));
        prop_assert_eq!(c.value(), target);
        prop_assert!(c.is_finished());
    }

    #[test]
    fn parallax_is_linear_inside_and_clamped_outside(
        top in 0.0f64..10_000.0,
        height in 1.0f64..2_000.0,
        vh in 200.0f64..2_000.0,
        t in 0.0f64..=1.0,
        overshoot in 1.0f64..5_000.0,
        from in -20.0f64..20.0,
        to in -20.0f64..20.0,
    ) {
        let track = ParallaxTrack::through_viewport("img", "item", ScalarProp::YPercent, from, to);
        let bx = ElementBox { top, height };
        let start = top - vh;
        let end = top + height;
        let scroll = start + t * (end - start);
        let expected = from + (to - from) * t;
        prop_assert!((track.value_at(bx, &vp(scroll, vh)) - expected).abs() < 1e-6);
        prop_assert_eq!(track.value_at(bx, &vp(start - overshoot, vh)), from);
        prop_assert_eq!(track.value_at(bx, &vp(end + overshoot, vh)), to);
    }

    #[test]
    fn progress_is_bounded(scroll in -1e6f64..1e6, a in -1e5f64..1e5, b in -1e5f64..1e5) {
        let p = track_progress(scroll, a, b);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn each_observer_fires_at_most_once(
        scrolls in prop::collection::vec(0.0f64..5_000.0, 1..40),
        tops in prop::collection::vec(0.0f64..4_000.0, 1..8),
    ) {
        let mut styles = StyleBook::new();
        let mut rs = RevealScheduler::new();
        let mut layout = LayoutMap::new();
        let scope = rs.open_scope("prop");
        for (i, top) in tops.iter().enumerate() {
            let id = format!("el-{i}");
            layout.insert(id.clone(), ElementBox { top: *top, height: 100.0 });
            let spec = RevealSpec::signal(id.clone(), ScrollPos::new(0.0, 0.85), id);
            rs.register(scope, spec, &mut styles);
        }
        let mut seen = Vec::new();
        for y in scrolls {
            seen.extend(rs.observe(Duration::ZERO, &vp(y, 800.0), &layout).signals);
        }
        let mut dedup = seen.clone();
        dedup.sort();
        dedup.dedup();
        prop_assert_eq!(dedup.len(), seen.len());
        prop_assert_eq!(seen.len() + rs.pending_observers(), tops.len());
    }
}
