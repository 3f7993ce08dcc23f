//! Open Packaging Conventions support.
//!
//! The OPC layer of an OOXML package: content-type and relationship-type
//! URIs shared by the part generators.

pub mod constants;
