//! Serde models of the CoMPAS extension elements.
//!
//! Attributes are optional unless the schema makes them mandatory, so that a
//! partially filled block still decodes.

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// `<compas:Bay>`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CompasBay {
    #[serde(rename = "@UUID")]
    pub uuid: String,

    #[serde(rename = "@BayCodif", default, skip_serializing_if = "Option::is_none")]
    pub bay_codif: Option<String>,
}

/// `<compas:Criteria>`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CompasCriteria {
    #[serde(rename = "@IEDType", default, skip_serializing_if = "Option::is_none")]
    pub ied_type: Option<String>,

    #[serde(rename = "@IEDRedundancy", default, skip_serializing_if = "Option::is_none")]
    pub ied_redundancy: Option<String>,

    #[serde(
        rename = "@IEDSystemVersioninstance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ied_system_version_instance: Option<String>,

    #[serde(rename = "@BayIntOrExt", default, skip_serializing_if = "Option::is_none")]
    pub bay_int_or_ext: Option<String>,
}

/// `<compas:Flow>`: the source an input is expected to be bound to.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CompasFlow {
    #[serde(rename = "@dataStreamKey", default, skip_serializing_if = "Option::is_none")]
    pub data_stream_key: Option<String>,

    #[serde(rename = "@ExtRefiedName", default, skip_serializing_if = "Option::is_none")]
    pub ext_ref_ied_name: Option<String>,

    #[serde(rename = "@ExtRefldinst", default, skip_serializing_if = "Option::is_none")]
    pub ext_ref_ld_inst: Option<String>,

    #[serde(rename = "@ExtRefprefix", default, skip_serializing_if = "Option::is_none")]
    pub ext_ref_prefix: Option<String>,

    #[serde(rename = "@ExtReflnClass", default, skip_serializing_if = "Option::is_none")]
    pub ext_ref_ln_class: Option<String>,

    #[serde(rename = "@ExtReflnInst", default, skip_serializing_if = "Option::is_none")]
    pub ext_ref_ln_inst: Option<String>,

    #[serde(rename = "@FlowSourceIEDType", default, skip_serializing_if = "Option::is_none")]
    pub flow_source_ied_type: Option<String>,

    #[serde(rename = "@FlowStatus", default, skip_serializing_if = "Option::is_none")]
    pub flow_status: Option<String>,

    #[serde(rename = "@FlowKind", default, skip_serializing_if = "Option::is_none")]
    pub flow_kind: Option<String>,
}

/// `<compas:Function>`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CompasFunction {
    #[serde(rename = "@UUID")]
    pub uuid: String,

    #[serde(rename = "@Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `<compas:ICDHeader>`: identification of the ICD an IED was built from.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CompasIcdHeader {
    #[serde(rename = "@ICDSystemVersionUUID")]
    pub icd_system_version_uuid: String,

    #[serde(rename = "@IEDType", default, skip_serializing_if = "Option::is_none")]
    pub ied_type: Option<String>,

    #[serde(
        rename = "@IEDSubstationinstance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ied_substation_instance: Option<String>,

    #[serde(
        rename = "@IEDSystemVersioninstance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ied_system_version_instance: Option<String>,

    #[serde(rename = "@IEDName", default, skip_serializing_if = "Option::is_none")]
    pub ied_name: Option<String>,

    #[serde(rename = "@VendorName", default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,

    #[serde(rename = "@IEDmodel", default, skip_serializing_if = "Option::is_none")]
    pub ied_model: Option<String>,

    #[serde(rename = "@hdrVersion", default, skip_serializing_if = "Option::is_none")]
    pub hdr_version: Option<String>,

    #[serde(rename = "@hdrRevision", default, skip_serializing_if = "Option::is_none")]
    pub hdr_revision: Option<String>,

    #[serde(rename = "@headerId", default, skip_serializing_if = "Option::is_none")]
    pub header_id: Option<String>,
}

/// `<compas:LDevice>`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CompasLDevice {
    #[serde(rename = "@LDeviceStatus", default, skip_serializing_if = "Option::is_none")]
    pub ld_device_status: Option<String>,
}

/// `<compas:SclFileType>SCD</compas:SclFileType>`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CompasSclFileType {
    #[serde(rename = "$text")]
    pub value: String,
}

/// `<compas:SystemVersion>`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CompasSystemVersion {
    #[serde(rename = "compas:MainSystemVersion", alias = "MainSystemVersion")]
    pub main_system_version: String,

    #[serde(rename = "compas:MinorSystemVersion", alias = "MinorSystemVersion")]
    pub minor_system_version: String,
}
