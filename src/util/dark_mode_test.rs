#![cfg(not(feature = "hydrate"))]

use std::rc::Rc;

use super::*;

#[test]
fn system_signal_is_unavailable_in_non_hydrate_tests() {
    assert_eq!(PrefersDarkScheme.current(), None);
}

#[test]
fn subscribe_is_refused_in_non_hydrate_tests() {
    let handler: ChangeHandler<Theme> = Rc::new(|_: Theme| {});
    assert!(PrefersDarkScheme.subscribe(handler).is_none());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
