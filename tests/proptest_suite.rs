//! Property-based tests for common_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use common_errors::{
    format_value, ArgumentInvalidOptions, CommonError, ErrorTemplate, MessageValue,
    NotFoundOptions, Param, TaxonomyError, TaxonomyRegistry, UnavailableOptions,
    FUNCTION_PLACEHOLDER, MAX_FIELD_OUTPUT_LEN,
};
use proptest::prelude::*;

fn kind_name() -> impl Strategy<Value = String> {
    "[A-H]Error"
}

// ============================================================================
// TAXONOMY PROPERTIES
// ============================================================================

proptest! {
    /// Whatever pairs are thrown at it, the forest stays acyclic and every
    /// rejected pair leaves it unchanged.
    #[test]
    fn forest_stays_acyclic(pairs in prop::collection::vec((kind_name(), kind_name()), 0..40)) {
        let mut registry = TaxonomyRegistry::new();

        for (child, parent) in pairs {
            let before = registry.clone();
            match registry.register_parent(child.clone(), parent.clone()) {
                Ok(()) => {}
                Err(TaxonomyError::Cycle { .. }) | Err(TaxonomyError::ConflictingParent { .. }) => {
                    prop_assert_eq!(registry.parent_of(&child), before.parent_of(&child));
                }
            }

            for name in ["AError", "BError", "CError", "DError", "EError", "FError", "GError", "HError"] {
                let lineage: Vec<_> = registry.lineage(name).collect();
                let mut seen = lineage.clone();
                seen.sort_unstable();
                seen.dedup();
                prop_assert_eq!(seen.len(), lineage.len(), "cycle through {}", name);
            }
        }
    }

    /// A child without its own status resolves to its parent's.
    #[test]
    fn status_is_inherited(status in 100u16..600, depth in 1usize..6) {
        let mut registry = TaxonomyRegistry::new();
        registry.register_status("Level0Error", status);
        for level in 1..=depth {
            registry
                .register_parent(format!("Level{level}Error"), format!("Level{}Error", level - 1))
                .unwrap();
        }

        prop_assert_eq!(registry.resolve_status(&format!("Level{depth}Error")), status);
    }

    /// Resolution is total: any name yields a status.
    #[test]
    fn resolution_is_total(name in "\\PC{0,64}") {
        let status = TaxonomyRegistry::standard().resolve_status(&name);
        prop_assert!((100..600).contains(&status));
    }
}

// ============================================================================
// ERROR CREATION PROPERTIES
// ============================================================================

proptest! {
    /// Errors can be created with arbitrary strings without panicking
    #[test]
    fn error_creation_never_panics(
        name in "\\PC{0,200}",
        message in "\\PC{0,1000}",
        status in any::<u16>(),
    ) {
        let err = CommonError::new(name, message.clone()).with_status(status);
        prop_assert_eq!(err.message(), message.as_str());
        prop_assert_eq!(err.status(), status);
        prop_assert!(!err.status_name().is_empty());
    }

    /// Template messages are non-empty and end with a period, whatever the
    /// parameters.
    #[test]
    fn template_messages_are_sentences(
        target in proptest::option::of("\\PC{1,80}"),
        hide in any::<bool>(),
        expected_time in proptest::option::of("\\PC{1,40}"),
    ) {
        let mut target: Param<String> = target.into();
        if hide {
            target = target.hide();
        }

        let not_found = NotFoundOptions::new().target(target.clone()).build();
        prop_assert!(not_found.message().ends_with('.'));

        let unavailable = UnavailableOptions::new()
            .target(target)
            .expected_time(expected_time)
            .generate_message();
        prop_assert!(unavailable.starts_with("The "));
        prop_assert!(unavailable.ends_with('.'));
    }

    /// Hidden argument values never leak into the message.
    #[test]
    fn hidden_value_never_in_message(secret in "[a-z0-9]{12,32}") {
        let err = ArgumentInvalidOptions::new()
            .argument_name("token")
            .hidden_argument_value(secret.clone())
            .build();
        prop_assert!(!err.message().contains(&secret));
        prop_assert!(!err.to_string().contains(&secret));
    }
}

// ============================================================================
// FORMATTING PROPERTIES
// ============================================================================

proptest! {
    /// Scalars render as themselves.
    #[test]
    fn scalars_render_as_is(n in any::<i64>(), s in "\\PC{0,100}") {
        let number = MessageValue::from(n);
        prop_assert_eq!(format_value(&number), n.to_string());

        let text = MessageValue::from(s.clone());
        prop_assert_eq!(format_value(&text), s);
    }

    /// Structured values never fail to render.
    #[test]
    fn structured_values_render(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let value = MessageValue::structured(values.clone());
        let rendered = format_value(&value);
        prop_assert_eq!(rendered.into_owned(), serde_json::to_string(&values).unwrap());
    }

    /// Log output stays valid UTF-8 and bounded regardless of message size.
    #[test]
    fn log_output_is_bounded(message in "\\PC{0,5000}") {
        let err = CommonError::new("CommonError", message);
        let mut buffer = String::new();
        err.with_internal_log(|log| log.write_to(&mut buffer)).unwrap();

        prop_assert!(std::str::from_utf8(buffer.as_bytes()).is_ok());
        prop_assert!(buffer.len() <= MAX_FIELD_OUTPUT_LEN + 128);
    }
}

#[test]
fn function_values_never_show_body() {
    assert_eq!(format_value(&MessageValue::function()), FUNCTION_PLACEHOLDER);
}
