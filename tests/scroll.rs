use portfolio_engine::{ScrollMetrics, ScrollTracker, SpringConfig};
use proptest::prelude::*;

const DT: f64 = 1.0 / 60.0;

#[test]
fn reading_the_page_top_to_bottom() {
    let mut bar = ScrollTracker::new(SpringConfig::default());

    // Sit at the top
    for _ in 0..30 {
        assert_eq!(bar.update(ScrollMetrics::new(0.0, 6000.0, 900.0), DT), 0.0);
    }

    // Scroll down over two seconds, then stop at the bottom
    let mut prev = 0.0;
    for frame in 0..=120 {
        let top = 5100.0 * frame as f64 / 120.0;
        let v = bar.update(ScrollMetrics::new(top, 6000.0, 900.0), DT);
        assert!(v >= prev);
        prev = v;
    }
    assert!(prev < 1.0, "spring should lag behind the scroll");

    for _ in 0..300 {
        bar.update(ScrollMetrics::new(5100.0, 6000.0, 900.0), DT);
    }
    assert_eq!(bar.scale_x(), 1.0);
    assert!(bar.is_settled());
}

#[test]
fn custom_spring_from_json() {
    let cfg = SpringConfig::from_json(r#"{ "stiffness": 400, "damping": 40 }"#).unwrap();
    let mut fast = ScrollTracker::new(cfg);
    let mut slow = ScrollTracker::new(SpringConfig::default());
    let m = ScrollMetrics::new(1000.0, 2000.0, 1000.0);
    for _ in 0..10 {
        fast.update(m, DT);
        slow.update(m, DT);
    }
    assert!(fast.scale_x() > slow.scale_x());
}

proptest! {
    #[test]
    fn output_stays_in_unit_range(
        tops in proptest::collection::vec(-1.0e6f64..1.0e6, 1..64),
        dt in 0.0f64..1.0,
    ) {
        let mut bar = ScrollTracker::new(SpringConfig::default());
        for top in tops {
            let v = bar.update(ScrollMetrics::new(top, 4000.0, 800.0), dt);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn increasing_targets_never_pull_back(
        mut steps in proptest::collection::vec(0.0f64..1.0, 1..32),
    ) {
        steps.sort_by(f64::total_cmp);
        let mut bar = ScrollTracker::new(SpringConfig::default());
        let mut prev = 0.0;
        for p in steps {
            for _ in 0..5 {
                let v = bar.update(ScrollMetrics::new(p * 3200.0, 4000.0, 800.0), DT);
                prop_assert!(v >= prev - 1e-12);
                prev = v;
            }
        }
    }
}
