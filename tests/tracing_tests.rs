//! Tests for tracing instrumentation.
//!
//! These tests verify that tracing spans and events are emitted correctly
//! when the tracing feature is enabled.

#![cfg(feature = "tracing")]
#![allow(clippy::unwrap_used)]

use readsets::config::{Designators, FallbackKey};
use readsets::resolve::{resolve, ReadInput};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

/// A simple layer that counts events at or above a level.
struct EventCounter {
    level: Level,
    count: Arc<AtomicUsize>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if event.metadata().level() <= &self.level {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_events(level: Level, input: &ReadInput) -> usize {
    let event_count = Arc::new(AtomicUsize::new(0));
    let layer = EventCounter {
        level,
        count: Arc::clone(&event_count),
    };

    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        let _resolution = resolve(input, &Designators::default(), FallbackKey::Stem);
    });

    event_count.load(Ordering::SeqCst)
}

#[test]
fn resolve_emits_tracing_events() {
    let input = ReadInput::paired(vec!["s_1.fq".to_string(), "s_2.fq".to_string()]).unwrap();
    assert!(
        count_events(Level::INFO, &input) > 0,
        "should emit tracing events"
    );
}

#[test]
fn each_warning_is_logged() {
    let input = ReadInput::paired(vec![
        "lonely_1.fq".to_string(),
        "unknown.fq".to_string(),
        "odd_S1_L001_R5_001.fq".to_string(),
    ])
    .unwrap();
    assert_eq!(count_events(Level::WARN, &input), 3);
}

#[test]
fn clean_resolution_logs_no_warnings() {
    let input = ReadInput::single(vec!["a.fq".to_string(), "b.fq".to_string()]).unwrap();
    assert_eq!(count_events(Level::WARN, &input), 0);
}
