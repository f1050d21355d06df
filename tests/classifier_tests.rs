//! Integration tests for ErrorStateClassifier

mod common;
use common::*;

use core::cell::Cell;
use ring_mirror::{Calibration, Config, DisplayColor, ErrorStateClassifier, Millis};

type Classifier<'c> = ErrorStateClassifier<MockAnalog<'c>, MockAnalog<'c>>;

fn classifier<'c>(green: &'c Cell<u16>, red: &'c Cell<u16>) -> Classifier<'c> {
    ErrorStateClassifier::new(
        MockAnalog::new(green),
        MockAnalog::new(red),
        &Config::default(),
        Millis::ZERO,
    )
}

/// Feeds a constant reading every 10ms over `[from, to)`.
fn hold(classifier: &mut Classifier<'_>, from: u32, to: u32, green: u16, red: u16) {
    for t in (from..to).step_by(10) {
        classifier.observe(Millis(t), green, red);
    }
}

#[test]
fn threshold_boundary_is_exclusive() {
    let (g, r) = (Cell::new(0), Cell::new(0));
    let mut classifier = classifier(&g, &r);

    classifier.observe(Millis(2000), 450, 450);
    assert!(!classifier.green_on());
    assert!(!classifier.red_on());

    classifier.observe(Millis(2010), 451, 451);
    assert!(classifier.green_on());
    assert!(classifier.red_on());

    classifier.observe(Millis(2020), 1023, 0);
    assert!(classifier.green_on());
    assert!(!classifier.red_on());
}

#[test]
fn no_error_during_boot_grace_window() {
    let (g, r) = (Cell::new(0), Cell::new(0));
    let mut classifier = classifier(&g, &r);

    let patterns = [(LOW, HIGH), (LOW, LOW), (HIGH, HIGH), (HIGH, LOW)];
    for t in (0..1500).step_by(5) {
        let (green, red) = patterns[(t / 5) as usize % patterns.len()];
        classifier.observe(Millis(t), green, red);
        assert!(!classifier.is_error(), "error reported at {}ms", t);
        assert!(!classifier.is_booted());
    }

    classifier.observe(Millis(1500), LOW, HIGH);
    assert!(classifier.is_booted());
    assert!(classifier.is_error());
}

#[test]
fn red_dominates_regardless_of_green() {
    let (g, r) = (Cell::new(0), Cell::new(0));
    let mut classifier = classifier(&g, &r);
    hold(&mut classifier, 0, 2000, HIGH, LOW);
    assert!(!classifier.is_error());

    classifier.observe(Millis(2000), HIGH, HIGH);
    assert!(classifier.is_error());
    assert_eq!(classifier.display_color(), DisplayColor::Orange);

    classifier.observe(Millis(2010), LOW, HIGH);
    assert!(classifier.is_error());
    assert_eq!(classifier.display_color(), DisplayColor::Red);
}

#[test]
fn both_lines_off_is_an_error() {
    let (g, r) = (Cell::new(0), Cell::new(0));
    let mut classifier = classifier(&g, &r);
    hold(&mut classifier, 0, 2000, HIGH, LOW);

    classifier.observe(Millis(2000), LOW, LOW);
    assert!(classifier.is_error());
    assert_eq!(classifier.display_color(), DisplayColor::Off);
}

#[test]
fn recent_red_transition_keeps_error_until_window_expires() {
    let (g, r) = (Cell::new(0), Cell::new(0));
    let mut classifier = classifier(&g, &r);
    hold(&mut classifier, 0, 2000, HIGH, LOW);

    classifier.observe(Millis(2000), HIGH, HIGH);
    classifier.observe(Millis(2100), HIGH, LOW);
    assert!(classifier.is_error());
    assert_eq!(classifier.display_color(), DisplayColor::Green);

    classifier.observe(Millis(3099), HIGH, LOW);
    assert!(classifier.is_error());

    classifier.observe(Millis(3100), HIGH, LOW);
    assert!(!classifier.is_error());
}

#[test]
fn green_blinking_more_than_twice_is_an_error() {
    let (g, r) = (Cell::new(0), Cell::new(0));
    let mut classifier = classifier(&g, &r);
    hold(&mut classifier, 0, 2000, LOW, LOW);
    assert_eq!(classifier.blink_count(), 0);

    classifier.observe(Millis(2000), HIGH, LOW);
    classifier.observe(Millis(2100), LOW, LOW);
    classifier.observe(Millis(2200), HIGH, LOW);
    assert_eq!(classifier.blink_count(), 2);
    assert!(!classifier.is_error());

    classifier.observe(Millis(2300), LOW, LOW);
    classifier.observe(Millis(2400), HIGH, LOW);
    assert_eq!(classifier.blink_count(), 3);
    assert!(classifier.is_error());
    assert_eq!(classifier.display_color(), DisplayColor::Green);
}

#[test]
fn sustained_green_resets_blink_count() {
    let (g, r) = (Cell::new(0), Cell::new(0));
    let mut classifier = classifier(&g, &r);
    hold(&mut classifier, 0, 2000, LOW, LOW);

    for (i, t) in (2000..2450).step_by(50).enumerate() {
        let green = if i % 2 == 0 { HIGH } else { LOW };
        classifier.observe(Millis(t), green, LOW);
    }
    // Last edge at 2400 was a rising one; five rising edges in total.
    assert_eq!(classifier.blink_count(), 5);

    classifier.observe(Millis(2900), HIGH, LOW);
    assert_eq!(classifier.blink_count(), 5);

    classifier.observe(Millis(2901), HIGH, LOW);
    assert_eq!(classifier.blink_count(), 0);

    classifier.observe(Millis(2920), HIGH, LOW);
    assert!(!classifier.is_error());
}

#[test]
fn solid_green_from_boot_is_healthy() {
    let (g, r) = (Cell::new(HIGH), Cell::new(LOW));
    let mut classifier = classifier(&g, &r);

    for t in (0..=3000).step_by(15) {
        classifier.update(Millis(t));
        assert!(!classifier.is_error(), "error reported at {}ms", t);
    }
    assert_eq!(classifier.blink_count(), 0);
    assert_eq!(classifier.display_color(), DisplayColor::Green);
}

#[test]
fn update_samples_the_inputs() {
    let (g, r) = (Cell::new(HIGH), Cell::new(LOW));
    let mut classifier = classifier(&g, &r);
    classifier.update(Millis(1600));
    assert!(classifier.green_on());
    assert!(!classifier.is_error());

    r.set(HIGH);
    classifier.update(Millis(1610));
    assert!(classifier.red_on());
    assert!(classifier.is_error());
}

#[test]
fn grace_window_works_across_clock_wrap() {
    let (g, r) = (Cell::new(LOW), Cell::new(HIGH));
    let boot = Millis(u32::MAX - 1000);
    let mut classifier = ErrorStateClassifier::new(
        MockAnalog::new(&g),
        MockAnalog::new(&r),
        &Config::default(),
        boot,
    );

    classifier.update(boot.wrapping_add(1499));
    assert!(!classifier.is_error());

    classifier.update(boot.wrapping_add(1500));
    assert!(classifier.is_error());
}

#[test]
fn calibration_overrides_are_honored() {
    let (g, r) = (Cell::new(0), Cell::new(0));
    let config = Config::builder()
        .calibration(Calibration {
            on_threshold: 700,
            boot_grace_ms: 100,
            ..Calibration::DEFAULT
        })
        .build()
        .unwrap();
    let mut classifier =
        ErrorStateClassifier::new(MockAnalog::new(&g), MockAnalog::new(&r), &config, Millis::ZERO);

    classifier.observe(Millis(100), 800, 650);
    assert!(classifier.green_on());
    assert!(!classifier.red_on());
    assert!(!classifier.is_error());
}
