use super::*;

#[test]
fn ripple_covers_largest_side() {
	let ripple = Ripple::covering(40.0, 24.0);
	assert_eq!(ripple.size, 40.0);
	assert_eq!(ripple.diameter(), 80.0);
	assert_eq!(ripple.offset(), -20.0);
}

#[test]
fn style_places_circle_and_animation() {
	let style = Ripple::covering(10.0, 30.0).style();
	assert!(style.contains("width: 60px; height: 60px"));
	assert!(style.contains("left: -15px; top: -15px"));
	assert!(style.contains("ripple-animation 0.6s"));
}

#[test]
fn lifetime_matches_animation() {
	assert_eq!(RIPPLE_LIFETIME.as_millis(), 600);
}
