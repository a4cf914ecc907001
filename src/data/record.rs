//! Penguin record types.

use serde::Deserialize;

/// Penguin species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Species {
    /// Adelie penguin (Pygoscelis adeliae).
    Adelie,
    /// Gentoo penguin (Pygoscelis papua).
    Gentoo,
    /// Chinstrap penguin (Pygoscelis antarcticus).
    Chinstrap,
}

impl Species {
    /// All species, in dataset order.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    /// Get the species name.
    pub fn name(self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        }
    }
}

/// Island in the Palmer Archipelago where the penguin was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Island {
    /// Torgersen Island.
    Torgersen,
    /// Biscoe Islands.
    Biscoe,
    /// Dream Island.
    Dream,
}

impl Island {
    /// Get the island name.
    pub fn name(self) -> &'static str {
        match self {
            Island::Torgersen => "Torgersen",
            Island::Biscoe => "Biscoe",
            Island::Dream => "Dream",
        }
    }
}

/// Penguin sex, where recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Sex {
    /// Get the display name.
    pub fn name(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// One of the four numeric measurement columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Bill length in millimeters.
    BillLength,
    /// Bill depth in millimeters.
    BillDepth,
    /// Flipper length in millimeters.
    FlipperLength,
    /// Body mass in grams.
    BodyMass,
}

impl Attribute {
    /// All attributes, in column order.
    pub const ALL: [Attribute; 4] = [
        Attribute::BillLength,
        Attribute::BillDepth,
        Attribute::FlipperLength,
        Attribute::BodyMass,
    ];

    /// Column identifier, as used in the dataset and in control values.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::BillLength => "bill_length_mm",
            Attribute::BillDepth => "bill_depth_mm",
            Attribute::FlipperLength => "flipper_length_mm",
            Attribute::BodyMass => "body_mass_g",
        }
    }

    /// Human-readable label with units.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::BillLength => "Bill Length (mm)",
            Attribute::BillDepth => "Bill Depth (mm)",
            Attribute::FlipperLength => "Flipper Length (mm)",
            Attribute::BodyMass => "Body Mass (g)",
        }
    }

    /// Parse a column identifier back into an attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        Attribute::ALL.iter().copied().find(|a| a.name() == name)
    }

    /// Extract this attribute's value from a record, if present.
    pub fn value_of(self, record: &PenguinRecord) -> Option<f64> {
        match self {
            Attribute::BillLength => record.bill_length_mm,
            Attribute::BillDepth => record.bill_depth_mm,
            Attribute::FlipperLength => record.flipper_length_mm.map(f64::from),
            Attribute::BodyMass => record.body_mass_g.map(f64::from),
        }
    }
}

/// One observed penguin.
///
/// Measurement fields are optional: the raw data contains rows where the
/// measurements were not recorded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PenguinRecord {
    /// Species.
    pub species: Species,
    /// Island where observed.
    pub island: Island,
    /// Bill length in millimeters.
    pub bill_length_mm: Option<f64>,
    /// Bill depth in millimeters.
    pub bill_depth_mm: Option<f64>,
    /// Flipper length in millimeters.
    pub flipper_length_mm: Option<u32>,
    /// Body mass in grams.
    pub body_mass_g: Option<u32>,
    /// Sex, where recorded.
    pub sex: Option<Sex>,
    /// Study year.
    pub year: u16,
}

impl PenguinRecord {
    /// Check whether all four measurements are present.
    pub fn is_complete(&self) -> bool {
        Attribute::ALL.iter().all(|a| a.value_of(self).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_names_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::from_name(attr.name()), Some(attr));
        }
        assert_eq!(Attribute::from_name("tail_length_mm"), None);
    }

    #[test]
    fn record_deserializes_with_missing_measurements() {
        let json = r#"{
            "species": "Gentoo",
            "island": "Biscoe",
            "bill_length_mm": null,
            "bill_depth_mm": null,
            "flipper_length_mm": null,
            "body_mass_g": null,
            "sex": null,
            "year": 2009
        }"#;
        let record: PenguinRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.species, Species::Gentoo);
        assert!(!record.is_complete());
        assert_eq!(Attribute::BodyMass.value_of(&record), None);
    }

    #[test]
    fn record_deserializes_complete_row() {
        let json = r#"{
            "species": "Adelie",
            "island": "Torgersen",
            "bill_length_mm": 39.1,
            "bill_depth_mm": 18.7,
            "flipper_length_mm": 181,
            "body_mass_g": 3750,
            "sex": "male",
            "year": 2007
        }"#;
        let record: PenguinRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_complete());
        assert_eq!(record.sex, Some(Sex::Male));
        assert_eq!(Attribute::BillLength.value_of(&record), Some(39.1));
        assert_eq!(Attribute::FlipperLength.value_of(&record), Some(181.0));
    }
}
