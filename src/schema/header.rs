// src/schema/header.rs

use std::collections::BTreeSet;
use tracing::{debug, error, info, warn};

use super::Field;
use crate::error::{PodcastError, Result};

/// Column index of every canonical field in the input sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    columns: [usize; Field::COUNT],
}

impl ColumnMap {
    /// Match header cells against the schema.
    ///
    /// First match wins for a field that appears twice; unknown cells are
    /// only warned about. Fails if any field is left unmapped.
    pub fn from_header<I, S>(header: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut found: [Option<usize>; Field::COUNT] = [None; Field::COUNT];

        for (col, cell) in header.into_iter().enumerate() {
            let cell = cell.as_ref();
            debug!("Checking header cell {:?}", cell);
            match Field::from_label(cell) {
                Some(field) => match found[field.index()] {
                    Some(prev) => warn!(
                        "Duplicated header item {:?} (as {:?}) at col {} (it was col {} before)",
                        field.key(),
                        field.label(),
                        col,
                        prev
                    ),
                    None => {
                        debug!("{:?} matches for {}", cell, field.key());
                        found[field.index()] = Some(col);
                    }
                },
                None => warn!("Un-matched header item at col {}: {:?}", col, cell),
            }
        }

        let mapped = found.iter().filter(|c| c.is_some()).count();
        if mapped != Field::COUNT {
            error!("Not all items were found on the header");
            let expected: BTreeSet<&str> = Field::ALL.iter().map(|f| f.label()).collect();
            let present: BTreeSet<&str> = Field::ALL
                .iter()
                .filter(|f| found[f.index()].is_some())
                .map(|f| f.label())
                .collect();
            let missing: Vec<String> = expected
                .difference(&present)
                .map(|s| s.to_string())
                .collect();
            info!("   Found items: {}", quoted(present.iter()));
            info!("Expected items: {}", quoted(expected.iter()));
            info!(" Missing items: {}", quoted(missing.iter()));
            return Err(PodcastError::Schema { missing });
        }
        info!("All header items were found");

        let mut columns = [0usize; Field::COUNT];
        for (slot, col) in columns.iter_mut().zip(found) {
            // every slot is Some after the count check
            *slot = col.unwrap_or_default();
        }
        Ok(Self { columns })
    }

    pub fn column(&self, field: Field) -> usize {
        self.columns[field.index()]
    }

    /// Highest column index any field reads from.
    pub fn max_column(&self) -> usize {
        self.columns.iter().copied().max().unwrap_or(0)
    }
}

fn quoted<'a, I, S>(items: I) -> String
where
    I: Iterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    items
        .map(|s| format!("{:?}", s.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
