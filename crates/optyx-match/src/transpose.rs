use optyx_core::Rx;

/// Rewrites a prescription into its optically equivalent opposite-cylinder
/// notation: sphere absorbs the cylinder, the cylinder flips sign, and the
/// axis rotates by 90° (wrapped to stay within 180°).
///
/// Returns `None` for prescriptions without cylinder; there is nothing to
/// transpose.
pub fn transpose(rx: Rx) -> Option<Rx> {
    if rx.cyl == 0.0 {
        return None;
    }
    let mut axis = rx.axis + 90;
    if axis > 180 {
        axis -= 180;
    }
    Some(Rx::new(rx.sph + rx.cyl, -rx.cyl, axis))
}
