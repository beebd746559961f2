// crates/scl-rs/tests/fixture/mod.rs
#![allow(dead_code)]

use scl_rs::template::{BdaDecl, DaDecl, DaType, DoDecl, DoType, LNodeType};
use scl_rs::{BasicType, Cdc, DataTypeTemplates, FunctionalConstraint, LogicalNode, NodeHandle, Val};

pub const LN_TYPE: &str = "PTOC_T";

/// Routes `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Templates of a protection function with:
/// - `StrVal` (ASG): `setMag`, `minVal`, `maxVal`, `stepSize` as `AnalogueValue`
/// - `StrInt` (ING): `setVal`, `minVal`, `maxVal` as INT32, `stepSize` as INT32U,
///   `minVal` defaulting to `-100`
/// - `origin.sdo1` (ASG nested in an SDO): `setMag` only, no bounds
/// - `BadLim` (ING): `maxVal` declared as a string
/// - `StrNote` (ING): `maxVal` defaulting to `10` beside a description `d`
///   carrying two ungrouped defaults
pub fn templates() -> DataTypeTemplates {
    let mut dtt = DataTypeTemplates::new();
    dtt.add_lnode_type(LNodeType {
        id: LN_TYPE.into(),
        ln_class: "PTOC".into(),
        data_objects: vec![
            DoDecl::new("StrVal", "ASG_T"),
            DoDecl::new("StrInt", "ING_T"),
            DoDecl::new("origin", "ORIGIN_T"),
            DoDecl::new("BadLim", "ING_BAD_T"),
            DoDecl::new("Mod", "ENC_T"),
            DoDecl::new("StrNote", "ING_NOTE_T"),
        ],
    });

    let analogue = |name: &str, fc| DaDecl::new(name, fc, BasicType::Struct).with_type_ref("AnalogueValue");
    dtt.add_do_type(DoType {
        id: "ASG_T".into(),
        cdc: Cdc::Asg,
        sdos: Vec::new(),
        das: vec![
            analogue("setMag", FunctionalConstraint::Sp).with_val_import(true),
            analogue("minVal", FunctionalConstraint::Cf),
            analogue("maxVal", FunctionalConstraint::Cf),
            analogue("stepSize", FunctionalConstraint::Cf),
        ],
    });
    dtt.add_da_type(DaType {
        id: "AnalogueValue".into(),
        bdas: vec![
            BdaDecl::new("f", BasicType::Float32),
            BdaDecl::new("i", BasicType::Int32),
        ],
    });

    dtt.add_do_type(DoType {
        id: "ING_T".into(),
        cdc: Cdc::Ing,
        sdos: Vec::new(),
        das: vec![
            DaDecl::new("setVal", FunctionalConstraint::Sp, BasicType::Int32).with_val_import(true),
            DaDecl::new("minVal", FunctionalConstraint::Cf, BasicType::Int32).with_value(Val::new("-100")),
            DaDecl::new("maxVal", FunctionalConstraint::Cf, BasicType::Int32),
            DaDecl::new("stepSize", FunctionalConstraint::Cf, BasicType::Int32U),
        ],
    });

    dtt.add_do_type(DoType {
        id: "ORIGIN_T".into(),
        cdc: Cdc::Org,
        sdos: vec![DoDecl::new("sdo1", "ASG_NO_LIMIT_T")],
        das: Vec::new(),
    });
    dtt.add_do_type(DoType {
        id: "ASG_NO_LIMIT_T".into(),
        cdc: Cdc::Asg,
        sdos: Vec::new(),
        das: vec![analogue("setMag", FunctionalConstraint::Sp).with_val_import(true)],
    });

    dtt.add_do_type(DoType {
        id: "ING_BAD_T".into(),
        cdc: Cdc::Ing,
        sdos: Vec::new(),
        das: vec![
            DaDecl::new("setVal", FunctionalConstraint::Sp, BasicType::Int32),
            DaDecl::new("maxVal", FunctionalConstraint::Cf, BasicType::VisString255).with_value(Val::new("10")),
        ],
    });

    dtt.add_do_type(DoType {
        id: "ING_NOTE_T".into(),
        cdc: Cdc::Ing,
        sdos: Vec::new(),
        das: vec![
            DaDecl::new("setVal", FunctionalConstraint::Sp, BasicType::Int32).with_val_import(true),
            DaDecl::new("maxVal", FunctionalConstraint::Cf, BasicType::Int32).with_value(Val::new("10")),
            DaDecl::new("d", FunctionalConstraint::Dc, BasicType::VisString255)
                .with_value(Val::new("a"))
                .with_value(Val::new("b")),
        ],
    });

    dtt.add_do_type(DoType {
        id: "ENC_T".into(),
        cdc: Cdc::Enc,
        sdos: Vec::new(),
        das: vec![
            DaDecl::new("ctlModel", FunctionalConstraint::Cf, BasicType::Enum).with_type_ref("CtlModelKind"),
        ],
    });
    dtt
}

/// An empty `PTOC1` instance of [`LN_TYPE`].
pub fn logical_node() -> LogicalNode {
    LogicalNode::new("PTOC", "1", LN_TYPE)
}

/// Creates the DOI/SDI chain `do_path`, then the SDI/DAI chain `da_path` below
/// it, and writes `value` as the ungrouped value of the final DAI.
pub fn set_dai(ln: &mut LogicalNode, do_path: &str, da_path: &str, value: &str) -> NodeHandle {
    let mut do_segments = do_path.split('.');
    let mut parent = ln.add_doi(do_segments.next().expect("empty DO path"));
    for sdo in do_segments {
        parent = ln.add_sdi(parent, sdo).expect("DO parent");
    }

    let da_segments: Vec<&str> = da_path.split('.').collect();
    let (leaf, bdas) = da_segments.split_last().expect("empty DA path");
    for bda in bdas {
        parent = ln.add_sdi(parent, bda).expect("DA parent");
    }
    let dai = ln.add_dai(parent, leaf).expect("DAI parent");
    ln.attribute_mut(dai)
        .expect("DAI handle")
        .update_value(None, value)
        .expect("fixture DAI is updatable");
    dai
}
