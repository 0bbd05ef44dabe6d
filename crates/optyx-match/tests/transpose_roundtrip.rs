use optyx_core::Rx;
use optyx_match::transpose;
use proptest::prelude::*;

#[test]
fn plano_cylinder_has_nothing_to_transpose() {
    assert_eq!(transpose(Rx::new(-2.0, 0.0, 90)), None);
    assert_eq!(transpose(Rx::new(0.0, 0.0, 0)), None);
}

#[test]
fn known_transposition() {
    let flipped = transpose(Rx::new(-3.0, -1.0, 90)).expect("has cylinder");
    assert_eq!(flipped.sph, -4.0);
    assert_eq!(flipped.cyl, 1.0);
    assert_eq!(flipped.axis, 180);
}

#[test]
fn axis_wraps_back_under_180() {
    let flipped = transpose(Rx::new(0.0, 2.0, 135)).expect("has cylinder");
    assert_eq!(flipped.axis, 45);
}

#[test]
fn zero_axis_transposes_to_180() {
    // 0 and 180 describe the same meridian; the wrap keeps the result in
    // the catalog's 1..=180 convention.
    let flipped = transpose(Rx::new(-1.0, -2.0, 0)).expect("has cylinder");
    assert_eq!(flipped.axis, 90);
    let back = transpose(flipped).expect("still has cylinder");
    assert_eq!(back.axis, 180);
}

proptest! {
    #[test]
    fn double_transposition_restores_the_prescription(
        sph_steps in -80i32..=80,
        cyl_steps in prop_oneof![-24i32..=-1, 1i32..=24],
        axis in 1u16..=180,
    ) {
        let rx = Rx::new(f64::from(sph_steps) * 0.25, f64::from(cyl_steps) * 0.25, axis);
        let once = transpose(rx).expect("cylinder present");
        let twice = transpose(once).expect("cylinder still present");
        prop_assert!((twice.sph - rx.sph).abs() < 1e-9);
        prop_assert!((twice.cyl - rx.cyl).abs() < 1e-9);
        prop_assert_eq!(twice.axis, rx.axis);
    }

    #[test]
    fn transposition_preserves_spherical_equivalent(
        sph_steps in -80i32..=80,
        cyl_steps in prop_oneof![-24i32..=-1, 1i32..=24],
        axis in 0u16..=180,
    ) {
        let rx = Rx::new(f64::from(sph_steps) * 0.25, f64::from(cyl_steps) * 0.25, axis);
        let flipped = transpose(rx).expect("cylinder present");
        // Spherical equivalent sph + cyl/2 is invariant under transposition.
        let original = rx.sph + rx.cyl / 2.0;
        let transposed = flipped.sph + flipped.cyl / 2.0;
        prop_assert!((original - transposed).abs() < 1e-9);
    }
}
