use std::time::{Duration, Instant};

use filterlab::config::DemoConfig;
use filterlab::services::{Mode, QueryDispatcher};

fn dispatcher(mode: Mode) -> QueryDispatcher {
    let mut dispatcher = QueryDispatcher::new(&DemoConfig::default());
    dispatcher.set_mode(mode);
    dispatcher
}

#[test]
fn immediate_mode_applies_every_keystroke_in_order() {
    let mut d = dispatcher(Mode::Immediate);
    let t0 = Instant::now();

    for value in ["a", "ab", "abc"] {
        d.input(value, t0);
        assert_eq!(d.authoritative(), value);
    }
}

#[test]
fn debounced_mode_coalesces_a_burst_into_one_update() {
    let mut d = dispatcher(Mode::Debounced);
    let t0 = Instant::now();

    // Three keystrokes, each within the 300ms window of the previous one.
    d.input("a", t0);
    d.input("ab", t0 + Duration::from_millis(100));
    d.input("abc", t0 + Duration::from_millis(200));

    // Raw tracks every keystroke; authoritative is untouched so far.
    assert_eq!(d.raw(), "abc");
    assert_eq!(d.authoritative(), "");

    // 300ms from the *first* keystroke has passed, but the window restarted.
    assert!(!d.poll(t0 + Duration::from_millis(350)));
    assert_eq!(d.authoritative(), "");

    // 300ms of quiet after the last keystroke: exactly one update, to "abc".
    assert!(d.poll(t0 + Duration::from_millis(500)));
    assert_eq!(d.authoritative(), "abc");

    // Nothing left to fire.
    assert!(!d.poll(t0 + Duration::from_millis(900)));
}

#[test]
fn debounce_is_cancelled_when_input_returns_to_the_authoritative_value() {
    let mut d = dispatcher(Mode::Debounced);
    let t0 = Instant::now();

    d.submit("abc");
    d.input("ab", t0);
    assert!(d.is_debouncing());

    // Typing back to the current authoritative value dispatches nothing.
    d.input("abc", t0 + Duration::from_millis(100));
    assert!(!d.is_debouncing());
    assert!(!d.poll(t0 + Duration::from_secs(5)));
    assert_eq!(d.authoritative(), "abc");
}

#[test]
fn deprioritized_mode_defers_and_reports_pending() {
    let mut d = dispatcher(Mode::Deprioritized);
    let t0 = Instant::now();

    d.input("x", t0);
    assert_eq!(d.authoritative(), "", "update must not apply synchronously");
    assert!(d.is_pending());

    let update = d.take_pending().unwrap();
    assert!(!d.is_pending());
    assert!(d.commit(update));
    assert_eq!(d.authoritative(), "x");
}

#[test]
fn newer_keystroke_replaces_a_queued_update() {
    let mut d = dispatcher(Mode::Deprioritized);
    let t0 = Instant::now();

    d.input("x", t0);
    d.input("xy", t0 + Duration::from_millis(10));

    // Only the newest queued value is ever handed out.
    let update = d.take_pending().unwrap();
    assert!(d.commit(update));
    assert_eq!(d.authoritative(), "xy");
    assert!(d.take_pending().is_none());
}

#[test]
fn stale_in_flight_update_is_discarded_at_commit() {
    let mut d = dispatcher(Mode::Deprioritized);
    let t0 = Instant::now();

    d.input("x", t0);
    let in_flight = d.take_pending().unwrap();

    // "xy" arrives while "x" is still in flight.
    d.input("xy", t0 + Duration::from_millis(10));

    assert!(!d.commit(in_flight), "superseded result must be dropped");
    assert_eq!(d.authoritative(), "");

    let update = d.take_pending().unwrap();
    assert!(d.commit(update));
    assert_eq!(d.authoritative(), "xy");
}

#[test]
fn submit_bypasses_debounce_gating() {
    let mut d = dispatcher(Mode::Debounced);
    let t0 = Instant::now();

    d.input("quer", t0);
    d.submit("query");
    assert_eq!(d.authoritative(), "query");

    // The pending quiet period died with the submit.
    assert!(!d.is_debouncing());
    assert!(!d.poll(t0 + Duration::from_secs(5)));
    assert_eq!(d.authoritative(), "query");
}

#[test]
fn submit_invalidates_an_in_flight_deprioritized_update() {
    let mut d = dispatcher(Mode::Deprioritized);
    let t0 = Instant::now();

    d.input("slow", t0);
    let in_flight = d.take_pending().unwrap();

    d.submit("fast");
    assert!(!d.commit(in_flight));
    assert_eq!(d.authoritative(), "fast");
}

#[test]
fn equality_short_circuit_drops_a_queued_update() {
    let mut d = dispatcher(Mode::Deprioritized);
    let t0 = Instant::now();

    d.input("x", t0);
    assert!(d.is_pending());

    // Backspacing to the (empty) authoritative value cancels the queued work.
    d.input("", t0 + Duration::from_millis(10));
    assert!(!d.is_pending());
    assert_eq!(d.authoritative(), "");
}

#[test]
fn switching_modes_keeps_the_authoritative_query() {
    let mut d = dispatcher(Mode::Immediate);
    d.input("abc", Instant::now());
    assert_eq!(d.authoritative(), "abc");

    d.set_mode(d.mode().cycle());
    assert_eq!(d.mode(), Mode::Debounced);
    assert_eq!(d.authoritative(), "abc");
    assert_eq!(d.raw(), "abc");
}

#[test]
fn mode_cycle_and_flip_variants() {
    assert_eq!(Mode::Immediate.cycle(), Mode::Debounced);
    assert_eq!(Mode::Debounced.cycle(), Mode::Deprioritized);
    assert_eq!(Mode::Deprioritized.cycle(), Mode::Immediate);

    assert_eq!(Mode::Immediate.flip(), Mode::Deprioritized);
    assert_eq!(Mode::Deprioritized.flip(), Mode::Immediate);
    assert_eq!(Mode::Debounced.flip(), Mode::Deprioritized);
}
