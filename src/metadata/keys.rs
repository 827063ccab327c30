// src/metadata/keys.rs

/// Offset of the next dataset in the chain, `0` for the last one
pub const NEXTDATA: &str = "$NEXTDATA";

/// Keys identifying the instrument, site, operator or run.
///
/// Removing them leaves the acquisition itself intact.
pub const IDENTIFYING_KEYS: &[&str] = &[
    "$INSTADDRESS",
    "@LOCATION",
    "$RUNNUMBER",
    "@FILEGUID",
    "$DATE",
    "@Y2KDATE",
    "@SETTINGSFILE",
    "@SETTINGSFILEDATETIME",
    "@SAMPLEID1",
    "@SAMPLEID2",
    "@SAMPLEID3",
    "@SAMPLEID4",
    "@CYTOMETERID",
    "@BUILDNUMBER",
    "$FIL",
    "@Acquisition Protocol Offset",
];
