use crate::icon::extract::IconRecord;
use crate::icon::ConvertError;

/// First line of the generated file.
pub const HEADER: &str = "// This file was generated by cli/convert-icons";

/// Derives the exported identifier stem from an icon's file stem:
/// spaces removed, lower-cased.
pub fn slugify(name: &str) -> String {
    name.replace(' ', "").to_lowercase()
}

/// Formats one export statement for the generated file.
///
/// The record is emitted as a JSON object literal, which is also a valid
/// JavaScript expression. serde keeps the declared field order, so the
/// output is byte-stable across runs.
pub fn export_statement(slug: &str, record: &IconRecord) -> Result<String, ConvertError> {
    Ok(format!(
        "export var {}_icon = {};",
        slug,
        serde_json::to_string(record)?
    ))
}
