//! Utility functions for Rookery.

use crate::clipboard;
use crate::data::{Attribute, PenguinRecord, Species};
use crate::error::Result;
use crate::reactive::DerivedView;
use crate::ui::{format_number, format_stat_value};

/// Copy a text summary of the current view to the clipboard.
pub fn copy_view_summary(view: &DerivedView) -> Result<()> {
    let mut text = String::new();
    text.push_str("Palmer Penguins - current view\n");
    text.push_str(&"=".repeat(40));
    text.push('\n');
    text.push_str(&format!("Records: {}\n", format_number(view.len())));

    for species in Species::ALL {
        text.push_str(&format!(
            "  {}: {}\n",
            species.name(),
            format_number(view.species_count(species))
        ));
    }

    text.push('\n');
    for attr in Attribute::ALL {
        if let Some(stats) = view.dataset().stats(attr) {
            text.push_str(&format!(
                "{}: min {} / mean {} / max {}\n",
                attr.name(),
                format_stat_value(stats.min),
                format_stat_value(stats.mean),
                format_stat_value(stats.max)
            ));
        }
    }

    clipboard::copy_to_clipboard(&text)
}

/// Copy one record to the clipboard as labeled lines.
pub fn copy_record(record: &PenguinRecord) -> Result<()> {
    let mut text = format!("Species: {}\n", record.species.name());
    text.push_str(&format!("Island: {}\n", record.island.name()));

    for attr in Attribute::ALL {
        let value = attr
            .value_of(record)
            .map(format_stat_value)
            .unwrap_or_else(|| "NA".to_string());
        text.push_str(&format!("{}: {}\n", attr.name(), value));
    }

    let sex = record.sex.map(|s| s.name()).unwrap_or("NA");
    text.push_str(&format!("Sex: {}\n", sex));
    text.push_str(&format!("Year: {}\n", record.year));

    clipboard::copy_to_clipboard(&text)
}
