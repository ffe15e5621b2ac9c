use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::state::RevealState;

/// One-shot viewport-entry signal for a section.
///
/// Flips `false -> true` the first time the section's visible fraction
/// reaches `threshold` and never reverts, so entry animations play once
/// per mount. A section already in view when observation starts fires on
/// the observer's initial report. Without an observer facility the
/// signal stays `false` and the content is simply left unanimated.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> Signal<bool> {
    let state = RwSignal::new(RevealState::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if state.get_untracked().is_seen() {
                return;
            }
            for entry in entries {
                let mut latch = state.get_untracked();
                if latch.observe(entry.intersection_ratio(), threshold) {
                    state.set(latch);
                    break;
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    // the latch never resets, so release the platform observer after the
    // first fire
    Effect::new(move |_| {
        if state.get().is_seen() {
            stop();
        }
    });

    Signal::derive(move || state.get().is_seen())
}
