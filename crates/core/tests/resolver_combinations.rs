// Combination rules
// Additive, order-preserving, strict-equality matching against the effective input

use std::collections::BTreeMap;

use vary_core::{
    AxisDef, CombinationRule, Fragments, Matcher, Selection, Value, ValueKey, VariantConfig,
    VariantResolver,
};

fn size_axis() -> AxisDef {
    AxisDef {
        name: "size".to_string(),
        values: BTreeMap::from([
            (ValueKey::from("sm"), Fragments::from("small")),
            (ValueKey::from("md"), Fragments::from("medium")),
            (ValueKey::from("lg"), Fragments::from("large")),
        ]),
    }
}

fn theme_axis() -> AxisDef {
    AxisDef {
        name: "theme".to_string(),
        values: BTreeMap::from([(ValueKey::from("neon"), Fragments::from("text-neon"))]),
    }
}

fn rule(match_values: BTreeMap<String, Matcher>, fragments: Fragments) -> CombinationRule {
    CombinationRule {
        name: None,
        match_values,
        fragments,
    }
}

#[test]
fn set_matcher_fires_only_for_members() {
    let resolver = VariantResolver::build(VariantConfig {
        axes: vec![size_axis(), theme_axis()],
        defaults: BTreeMap::from([("size".to_string(), Value::from("md"))]),
        combinations: vec![rule(
            BTreeMap::from([(
                "size".to_string(),
                Matcher::AnyOf(vec![Value::from("md"), Value::from("lg")]),
            )]),
            Fragments::from(vec!["multi"]),
        )],
        ..VariantConfig::default()
    })
    .unwrap();

    assert_eq!(
        resolver
            .resolve(&Selection::from_iter([("theme", "neon")]))
            .unwrap(),
        Some("medium text-neon multi".to_string())
    );
    assert_eq!(
        resolver
            .resolve(&Selection::from_iter([("size", "sm"), ("theme", "neon")]))
            .unwrap(),
        Some("small text-neon".to_string())
    );
}

#[test]
fn matching_rules_are_additive_in_declaration_order() {
    let resolver = VariantResolver::build(VariantConfig {
        axes: vec![size_axis()],
        combinations: vec![
            rule(
                BTreeMap::from([("size".to_string(), Matcher::Equals(Value::from("md")))]),
                Fragments::from("first"),
            ),
            rule(
                BTreeMap::from([(
                    "size".to_string(),
                    Matcher::AnyOf(vec![Value::from("sm"), Value::from("md")]),
                )]),
                Fragments::from("second"),
            ),
        ],
        ..VariantConfig::default()
    })
    .unwrap();

    assert_eq!(
        resolver.resolve(&Selection::from_iter([("size", "md")])).unwrap(),
        Some("medium first second".to_string())
    );
}

#[test]
fn a_failing_rule_does_not_block_later_rules() {
    let resolver = VariantResolver::build(VariantConfig {
        axes: vec![size_axis()],
        combinations: vec![
            rule(
                BTreeMap::from([("size".to_string(), Matcher::Equals(Value::from("lg")))]),
                Fragments::from("never"),
            ),
            rule(BTreeMap::new(), Fragments::from("always")),
        ],
        ..VariantConfig::default()
    })
    .unwrap();

    assert_eq!(
        resolver.resolve(&Selection::from_iter([("size", "sm")])).unwrap(),
        Some("small always".to_string())
    );
}

#[test]
fn empty_match_map_always_fires() {
    let resolver = VariantResolver::build(VariantConfig {
        axes: vec![size_axis()],
        optional: vec!["size".to_string()],
        combinations: vec![rule(BTreeMap::new(), Fragments::from("unconditional"))],
        ..VariantConfig::default()
    })
    .unwrap();

    assert_eq!(
        resolver.resolve(&Selection::new()).unwrap(),
        Some("unconditional".to_string())
    );
}

#[test]
fn matching_compares_raw_values_not_stringified_form() {
    let resolver = VariantResolver::build(VariantConfig {
        axes: vec![AxisDef {
            name: "tone".to_string(),
            values: BTreeMap::from([
                (ValueKey::from("null"), Fragments::from("tone-none")),
            ]),
        }],
        combinations: vec![
            rule(
                BTreeMap::from([("tone".to_string(), Matcher::Equals(Value::Null))]),
                Fragments::from("matched-null"),
            ),
            rule(
                BTreeMap::from([(
                    "tone".to_string(),
                    Matcher::Equals(Value::Str("null".to_string())),
                )]),
                Fragments::from("matched-string"),
            ),
        ],
        ..VariantConfig::default()
    })
    .unwrap();

    // Literal null selection: both land on the "null" value-key, but only the
    // raw-null matcher fires.
    let mut selection = Selection::new();
    selection.set("tone", Value::Null);
    assert_eq!(
        resolver.resolve(&selection).unwrap(),
        Some("tone-none matched-null".to_string())
    );

    // The string "null" is a different raw value.
    assert_eq!(
        resolver.resolve(&Selection::from_iter([("tone", "null")])).unwrap(),
        Some("tone-none matched-string".to_string())
    );
}

#[test]
fn partial_match_maps_leave_other_axes_unconstrained() {
    let resolver = VariantResolver::build(VariantConfig {
        axes: vec![size_axis(), theme_axis()],
        optional: vec!["theme".to_string()],
        combinations: vec![rule(
            BTreeMap::from([("size".to_string(), Matcher::Equals(Value::from("md")))]),
            Fragments::from("mid"),
        )],
        ..VariantConfig::default()
    })
    .unwrap();

    // theme may be anything or absent; only size is constrained.
    assert_eq!(
        resolver.resolve(&Selection::from_iter([("size", "md")])).unwrap(),
        Some("medium mid".to_string())
    );
    assert_eq!(
        resolver
            .resolve(&Selection::from_iter([("size", "md"), ("theme", "neon")]))
            .unwrap(),
        Some("medium text-neon mid".to_string())
    );
}
