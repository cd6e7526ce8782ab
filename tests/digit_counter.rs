//! Host-level tests for the cyclic digit counter.

use digit_panel::debounce::ButtonId;
use digit_panel::digit_counter::{DigitCounter, Step};

#[test]
fn starts_at_zero() {
    assert_eq!(DigitCounter::new().get(), 0);
    assert_eq!(DigitCounter::default().get(), 0);
}

#[test]
fn forward_and_backward_wrap() {
    assert_eq!(Step::Forward.apply(9), 0);
    assert_eq!(Step::Backward.apply(0), 9);
    for digit in 0..10 {
        assert_eq!(Step::Backward.apply(Step::Forward.apply(digit)), digit);
    }
}

#[test]
fn stays_in_range_for_any_sequence() {
    let counter = DigitCounter::new();
    let steps = [Step::Forward, Step::Backward, Step::Backward];
    for step in steps.iter().cycle().take(100) {
        assert!(counter.advance(*step) <= 9);
    }
}

#[test]
fn buttons_pick_direction() {
    assert_eq!(Step::from(ButtonId::A), Step::Forward);
    assert_eq!(Step::from(ButtonId::B), Step::Backward);

    let counter = DigitCounter::new();
    assert_eq!(counter.advance(ButtonId::B.into()), 9);
    assert_eq!(counter.advance(ButtonId::B.into()), 8);
    assert_eq!(counter.advance(ButtonId::A.into()), 9);
    assert_eq!(counter.get(), 9);
}
