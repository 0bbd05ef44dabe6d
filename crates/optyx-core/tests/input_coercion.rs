use optyx_core::{axis_or_zero, float_or_zero, RawAddRx, RawRx};

#[test]
fn empty_and_invalid_fields_become_zero() {
    assert_eq!(float_or_zero(""), 0.0);
    assert_eq!(float_or_zero("   "), 0.0);
    assert_eq!(float_or_zero("abc"), 0.0);
    assert_eq!(float_or_zero("1.2.3"), 0.0);
    assert_eq!(axis_or_zero(""), 0);
    assert_eq!(axis_or_zero("abc"), 0);
}

#[test]
fn valid_fields_parse_with_whitespace() {
    assert_eq!(float_or_zero(" 1.25 "), 1.25);
    assert_eq!(float_or_zero("-0.75"), -0.75);
    assert_eq!(float_or_zero("+2.50"), 2.5);
    assert_eq!(axis_or_zero(" 90 "), 90);
}

#[test]
fn axis_truncates_fractions_and_rejects_negatives() {
    assert_eq!(axis_or_zero("90.7"), 90);
    assert_eq!(axis_or_zero("-15"), 0);
}

#[test]
fn raw_rx_normalizes_every_field() {
    let raw = RawRx {
        sph: "-3.00".to_string(),
        cyl: "".to_string(),
        axis: "oops".to_string(),
    };
    let rx = raw.normalize_or_zero();
    assert_eq!(rx.sph, -3.0);
    assert_eq!(rx.cyl, 0.0);
    assert_eq!(rx.axis, 0);
}

#[test]
fn unset_sphere_is_indistinguishable_from_zero() {
    let unset = RawRx {
        sph: String::new(),
        cyl: "-1.00".to_string(),
        axis: "90".to_string(),
    };
    let zero = RawRx {
        sph: "0".to_string(),
        cyl: "-1.00".to_string(),
        axis: "90".to_string(),
    };
    assert_eq!(unset.normalize_or_zero(), zero.normalize_or_zero());
}

#[test]
fn add_form_mirrors_nv_from_dv() {
    let raw = RawAddRx {
        dv: RawRx {
            sph: "-2.00".to_string(),
            cyl: "-1.50".to_string(),
            axis: "180".to_string(),
        },
        nv_sph: String::new(),
        add: "2.00".to_string(),
    };
    let add_rx = raw.normalize_or_zero();
    assert_eq!(add_rx.dv.sph, -2.0);
    assert_eq!(add_rx.nv.sph, 0.0);
    assert_eq!(add_rx.nv.cyl, add_rx.dv.cyl);
    assert_eq!(add_rx.nv.axis, add_rx.dv.axis);
    assert_eq!(add_rx.add, 2.0);
}

#[test]
fn explicit_nv_sphere_drives_the_add_power() {
    let raw = RawAddRx {
        dv: RawRx {
            sph: "-2.00".to_string(),
            cyl: String::new(),
            axis: String::new(),
        },
        nv_sph: "0.50".to_string(),
        add: "9.99".to_string(),
    };
    let add_rx = raw.normalize_or_zero();
    assert_eq!(add_rx.nv.sph, 0.5);
    assert_eq!(add_rx.add, 2.5);
}
