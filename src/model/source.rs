//! Source BOM data structures and JSON decoding.
//!
//! The source format is a flat, record-based bill of materials: hardware and
//! software component records plus pairwise relationship records. A decoded
//! [`SourceBom`] is read-only for the duration of a conversion.

use crate::error::ConvertError;
use serde::Deserialize;
use std::io::Read;

/// Category of a source component record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentCategory {
    Hardware,
    Software,
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hardware => write!(f, "hardware"),
            Self::Software => write!(f, "software"),
        }
    }
}

/// Category-specific payload of a component record.
///
/// Shared fields live on [`SourceComponent`]; only what genuinely differs
/// between the categories lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentDetail {
    Hardware(HardwareDetail),
    Software(SoftwareDetail),
}

/// Fields only hardware records carry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardwareDetail {
    /// Manufacturer name
    pub manufacturer: Option<String>,
}

/// Fields only software records carry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoftwareDetail {
    /// Vendor name
    pub vendor: Option<String>,
    /// Binary size in bytes
    pub size: Option<u64>,
}

/// One component record of the source BOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceComponent {
    /// Component identifier, unique within a BOM
    pub id: String,
    /// Component name
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Category-specific payload
    pub detail: ComponentDetail,
}

impl SourceComponent {
    /// Create a hardware component record
    #[must_use]
    pub fn hardware(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            detail: ComponentDetail::Hardware(HardwareDetail::default()),
        }
    }

    /// Create a software component record
    #[must_use]
    pub fn software(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            detail: ComponentDetail::Software(SoftwareDetail::default()),
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Category of this record
    #[must_use]
    pub const fn category(&self) -> ComponentCategory {
        match self.detail {
            ComponentDetail::Hardware(_) => ComponentCategory::Hardware,
            ComponentDetail::Software(_) => ComponentCategory::Software,
        }
    }

    /// Description, defaulting to the empty string when absent
    #[must_use]
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// One pairwise relationship record of the source BOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRelationship {
    /// Id of the component the relation originates at
    pub from_id: String,
    /// Id of the component the relation points to
    pub to_id: String,
    /// Free-form relation type from the source taxonomy
    pub relation_kind: String,
}

impl SourceRelationship {
    /// Create a relationship record
    #[must_use]
    pub fn new(
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        relation_kind: impl Into<String>,
    ) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            relation_kind: relation_kind.into(),
        }
    }
}

/// A fully decoded source BOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBom {
    /// BOM identifier
    pub id: String,
    /// BOM version
    pub version: String,
    /// Component records in source order
    pub components: Vec<SourceComponent>,
    /// Relationship records in source order
    pub relationships: Vec<SourceRelationship>,
}

impl SourceBom {
    /// Create an empty BOM with the given header
    #[must_use]
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            components: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Components in conversion order: every hardware record first, then
    /// every software record, each in source order.
    pub fn components_in_order(&self) -> impl Iterator<Item = &SourceComponent> {
        let hardware = self
            .components
            .iter()
            .filter(|c| c.category() == ComponentCategory::Hardware);
        let software = self
            .components
            .iter()
            .filter(|c| c.category() == ComponentCategory::Software);
        hardware.chain(software)
    }

    /// Decode a BOM from a JSON reader.
    ///
    /// This is the loader boundary: decode failures come back as
    /// [`ConvertError::Decode`] and are never generated past this point.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConvertError> {
        let raw: RawBom = serde_json::from_reader(reader)?;
        Ok(raw.into())
    }

    /// Decode a BOM from JSON string content.
    pub fn from_json_str(content: &str) -> Result<Self, ConvertError> {
        let raw: RawBom = serde_json::from_str(content)?;
        Ok(raw.into())
    }
}

// Wire structs mirroring the record layout on disk: separate hardware and
// software arrays, relationship endpoints named xUUID/yUUID.

#[derive(Debug, Deserialize)]
struct RawBom {
    #[serde(default)]
    uuid: String,
    #[serde(default)]
    version: String,
    hardware: Option<Vec<RawHardware>>,
    software: Option<Vec<RawSoftware>>,
    relationships: Option<Vec<RawRelationship>>,
}

#[derive(Debug, Deserialize)]
struct RawHardware {
    #[serde(default)]
    uuid: String,
    #[serde(default)]
    name: String,
    description: Option<String>,
    manufacturer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSoftware {
    #[serde(default)]
    uuid: String,
    #[serde(default)]
    name: String,
    description: Option<String>,
    vendor: Option<String>,
    size: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawRelationship {
    #[serde(rename = "xUUID", default)]
    x_uuid: String,
    #[serde(rename = "yUUID", default)]
    y_uuid: String,
    #[serde(default)]
    relationship: String,
}

impl From<RawBom> for SourceBom {
    fn from(raw: RawBom) -> Self {
        let mut components = Vec::new();
        for hw in raw.hardware.unwrap_or_default() {
            components.push(SourceComponent {
                id: hw.uuid,
                name: hw.name,
                description: hw.description,
                detail: ComponentDetail::Hardware(HardwareDetail {
                    manufacturer: hw.manufacturer,
                }),
            });
        }
        for sw in raw.software.unwrap_or_default() {
            components.push(SourceComponent {
                id: sw.uuid,
                name: sw.name,
                description: sw.description,
                detail: ComponentDetail::Software(SoftwareDetail {
                    vendor: sw.vendor,
                    size: sw.size,
                }),
            });
        }

        let relationships = raw
            .relationships
            .unwrap_or_default()
            .into_iter()
            .map(|r| SourceRelationship {
                from_id: r.x_uuid,
                to_id: r.y_uuid,
                relation_kind: r.relationship,
            })
            .collect();

        Self {
            id: raw.uuid,
            version: raw.version,
            components,
            relationships,
        }
    }
}
