//! Property-based checks over permission evaluation and route matching.

use proptest::prelude::*;

use bridge_gateway::auth::permission::{
    CanonicalResource, PermissionEvaluator, ResourceKind, Verb,
};
use bridge_gateway::auth::Principal;
use bridge_gateway::routing::RoutePattern;

fn any_verb() -> impl Strategy<Value = Verb> {
    prop_oneof![
        Just(Verb::Get),
        Just(Verb::Create),
        Just(Verb::Update),
        Just(Verb::Delete),
    ]
}

fn any_kind() -> impl Strategy<Value = ResourceKind> {
    prop_oneof![
        Just(ResourceKind::Applications),
        Just(ResourceKind::Settings),
        Just(ResourceKind::Health),
        Just(ResourceKind::Version),
        Just(ResourceKind::Unknown),
    ]
}

fn any_resource() -> impl Strategy<Value = CanonicalResource> {
    (any_kind(), proptest::option::of("[a-z]{1,12}")).prop_map(|(kind, name)| match name {
        Some(name) => CanonicalResource::named(kind, name),
        None => CanonicalResource::collection(kind),
    })
}

fn admin() -> Principal {
    Principal::new(
        "admin-1",
        "Admin",
        "admin@example.com",
        vec!["admins".to_string()],
        true,
        "admin-token",
    )
}

fn reader() -> Principal {
    Principal::new(
        "user-1",
        "User",
        "user@example.com",
        vec!["users".to_string()],
        false,
        "demo-token",
    )
}

proptest! {
    /// The bypass rule admits admins for every verb and resource.
    #[test]
    fn admin_is_always_allowed(verb in any_verb(), resource in any_resource()) {
        let evaluator = PermissionEvaluator::with_defaults();
        prop_assert!(evaluator.evaluate(&admin(), verb, &resource));
    }

    /// Evaluation is a pure function of its inputs.
    #[test]
    fn evaluation_is_deterministic(verb in any_verb(), resource in any_resource()) {
        let evaluator = PermissionEvaluator::with_defaults();
        let first = evaluator.evaluate(&reader(), verb, &resource);
        for _ in 0..3 {
            prop_assert_eq!(evaluator.evaluate(&reader(), verb, &resource), first);
        }
    }

    /// Non-admins never get a write through the default rules.
    #[test]
    fn reader_never_writes(verb in any_verb(), resource in any_resource()) {
        let evaluator = PermissionEvaluator::with_defaults();
        if !verb.is_read() {
            prop_assert!(!evaluator.evaluate(&reader(), verb, &resource));
        }
    }

    /// Public admission is a subset of what the same evaluator grants a
    /// reader: anything anonymous may do, an authenticated reader may too.
    #[test]
    fn public_access_is_a_subset_of_reader_access(
        verb in any_verb(),
        resource in any_resource(),
    ) {
        let evaluator = PermissionEvaluator::with_defaults();
        if evaluator.allows_public(verb, &resource) {
            prop_assert!(evaluator.evaluate(&reader(), verb, &resource));
        }
    }

    /// A single-parameter pattern binds exactly the matched segment.
    #[test]
    fn named_pattern_binds_the_segment(name in "[a-zA-Z0-9_-]{1,24}") {
        let pattern = RoutePattern::parse("/applications/{name}").unwrap();
        let params = pattern.capture(&format!("/applications/{name}")).unwrap();
        prop_assert_eq!(params.get("name"), Some(name.as_str()));
    }

    /// Deeper paths never match a two-segment pattern.
    #[test]
    fn extra_segments_never_match(
        name in "[a-z]{1,12}",
        extra in "[a-z]{1,12}",
    ) {
        let pattern = RoutePattern::parse("/applications/{name}").unwrap();
        let path = format!("/applications/{name}/{extra}");
        prop_assert!(pattern.capture(&path).is_none());
    }

    /// Path-derived resources keep the second segment as the name.
    #[test]
    fn from_path_keeps_the_name(name in "[a-z]{1,12}") {
        let resource = CanonicalResource::from_path(&format!("/applications/{name}"));
        prop_assert_eq!(resource.kind, ResourceKind::Applications);
        prop_assert_eq!(resource.name.as_deref(), Some(name.as_str()));
    }
}
