// crates/scl-rs/tests/resolve_and_update.rs

mod fixture;

use fixture::{init_logging, logical_node, set_dai, templates};
use scl_rs::{AttributeNode, DaTypeName, DaiTracker, DoTypeName, MatchResult, SclError, Val};
use std::collections::BTreeMap;

fn names(do_name: &str, da_name: &str) -> (DoTypeName, DaTypeName) {
    (
        DoTypeName::parse(do_name).unwrap(),
        DaTypeName::parse(da_name).unwrap(),
    )
}

#[test]
fn test_nested_setting_is_resolved_updated_and_read_back() {
    init_logging();
    let dtt = templates();
    let mut ln = logical_node();
    let dai = set_dai(&mut ln, "origin.sdo1", "setMag.f", "12.5");

    let (do_name, mut da_name) = names("origin.sdo1", "setMag.f");
    let resolution = DaiTracker::new(&ln, &do_name, &da_name).search();
    assert_eq!(resolution.result, MatchResult::FullMatch);
    assert_eq!(resolution.attribute_node, Some(dai));
    assert_eq!(ln.dai_values(&do_name, &da_name).get(&0).map(String::as_str), Some("12.5"));

    da_name.add_value(None, "7.0");
    assert_eq!(ln.apply_update(&dtt, &do_name, &da_name), Ok(MatchResult::FullMatch));

    assert_eq!(ln.leaf(dai).unwrap().vals(), &[Val::new("7.0")]);
    assert_eq!(ln.dai_values(&do_name, &da_name).get(&0).map(String::as_str), Some("7.0"));
}

#[test]
fn test_missing_doi_fails_and_leaves_tree_untouched() {
    init_logging();
    let dtt = templates();
    let mut ln = logical_node();
    set_dai(&mut ln, "origin.sdo1", "setMag.f", "12.5");
    let before = ln.clone();

    let (do_name, mut da_name) = names("StrVal", "setMag.f");
    da_name.add_value(None, "1");
    assert_eq!(ln.apply_update(&dtt, &do_name, &da_name), Ok(MatchResult::Failed));
    assert_eq!(ln, before);
}

#[test]
fn test_partial_matches_are_reported_not_raised() {
    init_logging();
    let dtt = templates();
    let mut ln = logical_node();
    set_dai(&mut ln, "origin.sdo1", "setMag.f", "12.5");
    let before = ln.clone();

    for (do_path, da_path) in [
        ("origin.sdo2", "setMag.f"),
        ("origin.sdo1", "setVal"),
        ("origin.sdo1", "setMag.i"),
        ("origin", "sdo1.setMag"),
    ] {
        let (do_name, mut da_name) = names(do_path, da_path);
        da_name.add_value(None, "1");
        assert_eq!(
            ln.apply_update(&dtt, &do_name, &da_name),
            Ok(MatchResult::PartialMatch),
            "{do_path} / {da_path}"
        );
    }
    assert_eq!(ln, before);
}

#[test]
fn test_non_importable_dai_is_not_updated() {
    init_logging();
    let dtt = templates();
    let mut ln = logical_node();
    let dai = set_dai(&mut ln, "origin.sdo1", "setMag.f", "12.5");
    ln.set_val_import(dai, false).unwrap();

    let (do_name, mut da_name) = names("origin.sdo1", "setMag.f");
    da_name.add_value(None, "7.0");
    let err = ln.apply_update(&dtt, &do_name, &da_name).unwrap_err();
    assert!(matches!(err, SclError::NotUpdatable { .. }), "{err}");
    assert_eq!(ln.leaf(dai).unwrap().vals(), &[Val::new("12.5")]);
}

#[test]
fn test_grouped_settings_share_one_dai() {
    init_logging();
    let dtt = templates();
    let mut ln = logical_node();
    let dai = set_dai(&mut ln, "origin.sdo1", "setMag.f", "1.0");

    let (do_name, mut da_name) = names("origin.sdo1", "setMag.f");
    da_name
        .add_values(&[Val::grouped(1, "10.0"), Val::grouped(2, "20.0")])
        .unwrap();
    assert_eq!(ln.apply_update(&dtt, &do_name, &da_name), Ok(MatchResult::FullMatch));

    let values = ln.attribute(dai).unwrap().values();
    let expected: BTreeMap<u32, String> = [(0, "1.0"), (1, "10.0"), (2, "20.0")]
        .into_iter()
        .map(|(g, v)| (g, v.to_string()))
        .collect();
    assert_eq!(values, expected);
}

#[test]
fn test_bulk_update_with_default_group_only_writes_default() {
    init_logging();
    let dtt = templates();
    let mut ln = logical_node();
    let dai = set_dai(&mut ln, "origin.sdo1", "setMag.f", "1.0");

    let (do_name, mut da_name) = names("origin.sdo1", "setMag.f");
    da_name.add_value(None, "5.0");
    da_name.add_value(Some(3), "30.0");
    assert_eq!(ln.apply_update(&dtt, &do_name, &da_name), Ok(MatchResult::FullMatch));
    assert_eq!(ln.leaf(dai).unwrap().vals(), &[Val::new("5.0")]);
}
