//! Property-based tests for the state match predicate.
//!
//! These tests use proptest to generate random vectors, updates, and
//! filters and verify the wildcard matching invariants hold across the
//! whole input space.

use hearken_hfp::{
    AudioState, CallActivity, CallHeld, CallSetup, ConnectState, HfpState, ServiceState,
    StateFilter, StateUpdate, StateVector,
};
use proptest::option;
use proptest::prelude::*;

fn any_hfpstate() -> impl Strategy<Value = HfpState> {
    prop_oneof![
        Just(HfpState::Invalid),
        Just(HfpState::Opened),
        Just(HfpState::OpenFailed),
        Just(HfpState::Closing),
        Just(HfpState::Closed),
    ]
}

fn any_connect_state() -> impl Strategy<Value = ConnectState> {
    prop_oneof![
        Just(ConnectState::Invalid),
        Just(ConnectState::Connecting),
        Just(ConnectState::Connected),
        Just(ConnectState::ConnectFailed),
        Just(ConnectState::Disconnecting),
        Just(ConnectState::Disconnected),
    ]
}

fn any_service() -> impl Strategy<Value = ServiceState> {
    prop_oneof![Just(ServiceState::Inactive), Just(ServiceState::Active)]
}

fn any_call() -> impl Strategy<Value = CallActivity> {
    prop_oneof![Just(CallActivity::Inactive), Just(CallActivity::Active)]
}

fn any_setup() -> impl Strategy<Value = CallSetup> {
    prop_oneof![
        Just(CallSetup::None),
        Just(CallSetup::Incoming),
        Just(CallSetup::Outgoing),
        Just(CallSetup::Alerting),
    ]
}

fn any_held() -> impl Strategy<Value = CallHeld> {
    prop_oneof![
        Just(CallHeld::None),
        Just(CallHeld::HoldActive),
        Just(CallHeld::Hold),
    ]
}

fn any_audio() -> impl Strategy<Value = AudioState> {
    prop_oneof![Just(AudioState::On), Just(AudioState::Off)]
}

prop_compose! {
    fn any_vector()(
        hfpstate in any_hfpstate(),
        connect_state in any_connect_state(),
        service in any_service(),
        call in any_call(),
        setup in any_setup(),
        held in any_held(),
        audio in any_audio(),
    ) -> StateVector {
        StateVector {
            hfpstate,
            connect_state,
            connect_address: None,
            connect_name: None,
            service,
            call,
            setup,
            held,
            audio,
        }
    }
}

prop_compose! {
    fn any_filter()(
        hfpstate in option::of(any_hfpstate()),
        connect_state in option::of(any_connect_state()),
        service in option::of(any_service()),
        call in option::of(any_call()),
        setup in option::of(any_setup()),
        held in option::of(any_held()),
        audio in option::of(any_audio()),
    ) -> StateFilter {
        StateFilter {
            hfpstate,
            connect_state,
            service,
            call,
            setup,
            held,
            audio,
        }
    }
}

/// The predicate spelled out field by field, as the reference for the
/// implementation under test.
fn matches_reference(filter: &StateFilter, vector: &StateVector) -> bool {
    (filter.hfpstate.is_none() || filter.hfpstate == Some(vector.hfpstate))
        && (filter.connect_state.is_none() || filter.connect_state == Some(vector.connect_state))
        && (filter.service.is_none() || filter.service == Some(vector.service))
        && (filter.call.is_none() || filter.call == Some(vector.call))
        && (filter.setup.is_none() || filter.setup == Some(vector.setup))
        && (filter.held.is_none() || filter.held == Some(vector.held))
        && (filter.audio.is_none() || filter.audio == Some(vector.audio))
}

fn update_from_filter(filter: &StateFilter) -> StateUpdate {
    StateUpdate {
        hfpstate: filter.hfpstate,
        connect_state: filter.connect_state,
        connect_address: None,
        connect_name: None,
        service: filter.service,
        call: filter.call,
        setup: filter.setup,
        held: filter.held,
        audio: filter.audio,
    }
}

proptest! {
    /// Property: `matches` is true iff every defined filter field equals
    /// the same field of the vector.
    #[test]
    fn prop_matches_iff_defined_fields_equal(
        filter in any_filter(),
        vector in any_vector(),
    ) {
        prop_assert_eq!(filter.matches(&vector), matches_reference(&filter, &vector));
    }

    /// Property: the empty filter matches every vector.
    #[test]
    fn prop_empty_filter_matches_everything(vector in any_vector()) {
        prop_assert!(StateFilter::any().matches(&vector));
    }

    /// Property: an update built from any subset of a vector's fields is
    /// a duplicate of that vector (the dedup rule).
    #[test]
    fn prop_subset_update_is_duplicate(
        vector in any_vector(),
        mask in any_filter(),
    ) {
        let update = StateUpdate {
            hfpstate: mask.hfpstate.map(|_| vector.hfpstate),
            connect_state: mask.connect_state.map(|_| vector.connect_state),
            connect_address: None,
            connect_name: None,
            service: mask.service.map(|_| vector.service),
            call: mask.call.map(|_| vector.call),
            setup: mask.setup.map(|_| vector.setup),
            held: mask.held.map(|_| vector.held),
            audio: mask.audio.map(|_| vector.audio),
        };
        prop_assert!(update.as_filter().matches(&vector));
    }

    /// Property: merging an update then re-testing it as a filter always
    /// reports a duplicate — merge establishes exactly the values the
    /// update carried.
    #[test]
    fn prop_merge_then_match_is_duplicate(
        vector in any_vector(),
        filter in any_filter(),
    ) {
        let update = update_from_filter(&filter);
        let mut merged = vector.clone();
        update.apply_to(&mut merged);
        prop_assert!(update.as_filter().matches(&merged));
    }

    /// Property: merge never touches a field the update leaves undefined.
    #[test]
    fn prop_merge_preserves_undefined_fields(
        vector in any_vector(),
        filter in any_filter(),
    ) {
        let update = update_from_filter(&filter);
        let mut merged = vector.clone();
        update.apply_to(&mut merged);

        if update.hfpstate.is_none() {
            prop_assert_eq!(merged.hfpstate, vector.hfpstate);
        }
        if update.connect_state.is_none() {
            prop_assert_eq!(merged.connect_state, vector.connect_state);
        }
        if update.service.is_none() {
            prop_assert_eq!(merged.service, vector.service);
        }
        if update.call.is_none() {
            prop_assert_eq!(merged.call, vector.call);
        }
        if update.setup.is_none() {
            prop_assert_eq!(merged.setup, vector.setup);
        }
        if update.held.is_none() {
            prop_assert_eq!(merged.held, vector.held);
        }
        if update.audio.is_none() {
            prop_assert_eq!(merged.audio, vector.audio);
        }
    }

    /// Property: `matches_update` agrees with `matches` whenever the
    /// update defines every field the filter defines.
    #[test]
    fn prop_matches_update_consistent_with_matches(
        filter in any_filter(),
        vector in any_vector(),
    ) {
        // An update carrying the full vector.
        let update = StateUpdate {
            hfpstate: Some(vector.hfpstate),
            connect_state: Some(vector.connect_state),
            connect_address: None,
            connect_name: None,
            service: Some(vector.service),
            call: Some(vector.call),
            setup: Some(vector.setup),
            held: Some(vector.held),
            audio: Some(vector.audio),
        };
        prop_assert_eq!(filter.matches_update(&update), filter.matches(&vector));
    }
}
