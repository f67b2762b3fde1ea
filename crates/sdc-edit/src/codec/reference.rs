//! Provenance reference builder.
//!
//! Every claim in one edit carries the same fixed-shape reference: the source
//! item the data was stated in, the source URL, and the date the source was
//! retrieved. The reference is built once per entity from that entity's own
//! retrieval date and attached to each compiled claim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec::value::{item_snak, time_value_snak, url_snak};
use crate::error::CompileError;
use crate::model::{EntityId, Reference, TimeValue};
use crate::util::datetime::{calendar_model, format_timestamp, PRECISION_DAY};
use crate::vocab::properties;

/// The date the source document was retrieved, as supplied by the caller
/// (typically derived from the source file's modification time upstream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl RetrievalDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Encodes the retrieval date at day precision.
    fn time_value(&self) -> TimeValue {
        TimeValue {
            time: format_timestamp(self.year, self.month, self.day),
            timezone: 0,
            before: 0,
            after: 0,
            precision: PRECISION_DAY,
            calendarmodel: calendar_model(self.year),
        }
    }
}

/// Builds the one-element reference list shared by all claims of an edit.
///
/// The grouping map and the `snaks-order` list carry the same three property
/// keys in the same order: P248 "stated in", P813 "retrieved", P854
/// "reference URL".
pub fn build_reference(
    stated_in: &EntityId,
    url: &str,
    retrieved: &RetrievalDate,
) -> Result<Vec<Reference>, CompileError> {
    let source = item_snak(&properties::stated_in(), stated_in)?;
    let date = time_value_snak(&properties::retrieved(), retrieved.time_value());
    let access = url_snak(&properties::reference_url(), url);

    let mut snaks = BTreeMap::new();
    snaks.insert(properties::stated_in(), vec![source]);
    snaks.insert(properties::retrieved(), vec![date]);
    snaks.insert(properties::reference_url(), vec![access]);

    Ok(vec![Reference {
        snaks_order: snaks.keys().cloned().collect(),
        snaks,
    }])
}
