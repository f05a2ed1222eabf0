pub mod episode;
pub mod utils;

pub use episode::Episode;

use csv::{ReaderBuilder, StringRecord};
use std::{
    collections::{BTreeMap, HashMap},
    fs::File,
    io::Read,
    path::Path,
};
use tracing::{info, warn};

use crate::error::{PodcastError, Result, ValidationError};
use crate::schema::{ColumnMap, Field};
use utils::{clean_cell, squashed_row_text, SKIP_MARKER};

/// Every accepted episode, keyed by global program number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeCollection {
    programs: BTreeMap<String, Episode>,
    seasons: Vec<String>,
}

impl EpisodeCollection {
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, programa: &str) -> Option<&Episode> {
        self.programs.get(programa)
    }

    /// Distinct seasons in the order they first appeared in the sheet.
    pub fn seasons(&self) -> &[String] {
        &self.seasons
    }

    /// Episodes in ascending (string) program-number order.
    pub fn episodes(&self) -> impl DoubleEndedIterator<Item = &Episode> {
        self.programs.values()
    }

    fn insert(&mut self, episode: Episode) {
        if !self.seasons.contains(&episode.temporada) {
            self.seasons.push(episode.temporada.clone());
        }
        self.programs
            .insert(episode.programa_num_global.clone(), episode);
    }
}

/// Sheet row numbers, header = 1.
///
/// The reader drops empty lines, so the gap between the line one record
/// ends on and the line the next one starts on is counted back in.
struct RowCounter {
    row: usize,
    next_line: u64,
}

impl RowCounter {
    fn after_header(header: &StringRecord) -> Self {
        let mut counter = Self {
            row: 1,
            next_line: 1,
        };
        if let Some(pos) = header.position() {
            counter.next_line = pos.line() + embedded_newlines(header) + 1;
        }
        counter
    }

    fn advance(&mut self, record: &StringRecord) -> usize {
        match record.position() {
            Some(pos) => {
                let blank_lines = pos.line().saturating_sub(self.next_line) as usize;
                self.row += 1 + blank_lines;
                self.next_line = pos.line() + embedded_newlines(record) + 1;
            }
            None => self.row += 1,
        }
        self.row
    }
}

/// Line breaks inside quoted cells.
fn embedded_newlines(record: &StringRecord) -> u64 {
    record.iter().map(|c| c.matches('\n').count() as u64).sum()
}

/// Read and validate the episode sheet at `path`.
pub fn load(path: &Path) -> Result<EpisodeCollection> {
    info!("Reading data from {}", path.display());
    let file = File::open(path).map_err(|e| PodcastError::io(path, e))?;
    load_from_reader(file)
}

/// Same as [`load`], for any UTF-8 CSV source.
pub fn load_from_reader<R: Read>(reader: R) -> Result<EpisodeCollection> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = rdr.records();

    let header = match records.next() {
        Some(record) => record?,
        None => StringRecord::new(),
    };
    let columns = ColumnMap::from_header(header.iter())?;
    let max_col = columns.max_column();
    let mut rows = RowCounter::after_header(&header);

    let mut data = EpisodeCollection::default();
    // program number → row it was accepted at
    let mut first_rows: HashMap<String, usize> = HashMap::new();

    for record in records {
        let record = record?;
        let row_num = rows.advance(&record);

        let row_text = squashed_row_text(record.iter());
        if row_text.is_empty() {
            continue;
        }
        if row_text.contains(SKIP_MARKER) {
            warn!("Skipping row {}", row_num);
            continue;
        }

        // short rows: missing trailing cells read as empty
        let mut row: Vec<&str> = record.iter().collect();
        if row.len() <= max_col {
            row.resize(max_col + 1, "");
        }

        let cells: [Option<String>; Field::COUNT] =
            std::array::from_fn(|i| clean_cell(row[columns.column(Field::ALL[i])]));
        let episode = Episode::from_cells(cells, row_num)?;

        if let Some(&first_row) = first_rows.get(&episode.programa_num_global) {
            return Err(ValidationError::DuplicateProgram {
                programa: episode.programa_num_global,
                row: row_num,
                first_row,
            }
            .into());
        }
        first_rows.insert(episode.programa_num_global.clone(), row_num);
        data.insert(episode);
    }

    info!("Read {} podcast entries", data.len());
    Ok(data)
}
