use portfolio_engine::field::{fill_sphere, magnitude};
use portfolio_engine::{StarField, StarFieldConfig};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn default_field_matches_backdrop_size() {
    let field = StarField::new(StarFieldConfig::default(), &mut SmallRng::seed_from_u64(11)).unwrap();
    assert_eq!(field.count(), 5000);
    assert_eq!(field.points().len(), 15_000);
    for p in field.points().chunks_exact(3) {
        assert!(magnitude(p) <= 1.5 + 1e-5);
    }
}

#[test]
fn default_frame_lights_some_pixels() {
    let mut field =
        StarField::new(StarFieldConfig::default(), &mut SmallRng::seed_from_u64(5)).unwrap();
    for _ in 0..60 {
        field.tick(1.0 / 60.0);
    }
    field.render(320, 180);

    let lit = field.output().iter().filter(|&&b| b > 0).count();
    assert!(lit > 100, "only {lit} pixels lit");
    // opacity 0.5 caps intensity at half scale
    assert!(field.output().iter().all(|&b| b <= 128));
}

#[test]
fn zero_opacity_field_renders_nothing() {
    let cfg = StarFieldConfig { opacity: 0.0, ..Default::default() };
    let mut field = StarField::new(cfg, &mut SmallRng::seed_from_u64(2)).unwrap();
    field.render(320, 180);
    assert!(field.output().iter().all(|&b| b == 0));
}

#[test]
fn spin_moves_the_projection() {
    let cfg = StarFieldConfig { count: 2000, ..Default::default() };
    let mut field = StarField::new(cfg, &mut SmallRng::seed_from_u64(8)).unwrap();
    field.render(200, 200);
    let before = field.output().to_vec();
    field.tick(2.0);
    field.render(200, 200);
    assert_ne!(before, field.output());
}

proptest! {
    #[test]
    fn every_point_within_radius(seed in any::<u64>(), count in 0usize..400, radius in 0.01f32..100.0) {
        let pts = fill_sphere(count, radius, &mut SmallRng::seed_from_u64(seed));
        prop_assert_eq!(pts.len(), count * 3);
        for p in pts.chunks_exact(3) {
            prop_assert!(magnitude(p) <= radius * (1.0 + 1e-6));
        }
    }
}
