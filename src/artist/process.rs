use csv::ReaderBuilder;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::artist::{info_fragment, ArtistRecord, ARTIST_TYPE};

use self::row::{text, year, SourceRow};

pub mod row;

/// Artists keyed by artist identifier, plus the counters of the run that
/// produced them.
#[derive(Debug, Default)]
pub struct Grouping {
    pub artists: HashMap<String, ArtistRecord>,
    pub seen: usize,
    pub matched: usize,
}

impl Grouping {
    fn merge(&mut self, row: &SourceRow) {
        let key = text(&row.artist_id).to_string();
        let fragment = info_fragment(text(&row.link), text(&row.title));

        let (id, info) = match self.artists.remove(&key) {
            Some(previous) => (previous.id, previous.info + &fragment),
            None => (self.artists.len() + 1, fragment),
        };

        self.artists.insert(
            key,
            ArtistRecord {
                id,
                start: text(&row.date_begin).to_string(),
                end: text(&row.date_end).trim().to_string(),
                category: ARTIST_TYPE.to_string(),
                display_name: text(&row.display_name).to_string(),
                wiki_results: 1,
                info,
            },
        );
    }
}

fn row_id(row: &SourceRow) -> &str {
    text(&row.row_id)
}

fn ok_category(row: &SourceRow) -> bool {
    if let Some(category) = &row.category {
        if category.trim() != "Artist" {
            debug!("Row {} is not by an artist", row_id(row));
            return false;
        }
    }

    true
}

fn ok_display_name(row: &SourceRow) -> bool {
    if text(&row.display_name).starts_with("Anonymous") {
        debug!("Row {} is anonymous", row_id(row));
        return false;
    }

    true
}

fn ok_public_domain(row: &SourceRow) -> bool {
    if row.public_domain.as_deref() == Some("False") {
        debug!("Row {} is not in the public domain", row_id(row));
        return false;
    }

    true
}

fn ok_required(row: &SourceRow) -> bool {
    let required = [
        ("title", &row.title),
        ("medium", &row.medium),
        ("link", &row.link),
        ("begin date", &row.date_begin),
    ];

    for (name, value) in required.iter() {
        if text(value).is_empty() {
            debug!("Row {} has no {}", row_id(row), name);
            return false;
        }
    }

    true
}

/// The row's [begin, end) must intersect the [start, end) window.
fn in_window(row: &SourceRow, start: i64, end: i64) -> bool {
    match (year(&row.date_begin), year(&row.date_end)) {
        (Some(begin), Some(finish)) if begin < end && finish > start => true,
        _ => {
            debug!("Row {} is outside of {}-{}", row_id(row), start, end);
            false
        }
    }
}

pub fn is_match(row: &SourceRow, start: i64, end: i64) -> bool {
    ok_category(row)
        && ok_display_name(row)
        && ok_required(row)
        && ok_public_domain(row)
        && in_window(row, start, end)
}

fn ok_for_grouping(row: &SourceRow) -> bool {
    if text(&row.artist_id).is_empty() {
        debug!("Row {} has no artist identifier", row_id(row));
        return false;
    }

    let begin = text(&row.date_begin).trim();
    let end = text(&row.date_end).trim();

    if begin.chars().count() != 4 || end.chars().count() != 4 {
        debug!("Row {} has no four digit years", row_id(row));
        return false;
    }

    matches!(end.parse::<i64>(), Ok(year) if year < 9999)
}

pub fn group_rows<I>(rows: I, start: i64, end: i64) -> Grouping
where
    I: IntoIterator<Item = SourceRow>,
{
    let mut grouping = Grouping::default();

    for row in rows {
        grouping.seen += 1;

        if !is_match(&row, start, end) {
            continue;
        }

        grouping.matched += 1;

        if ok_for_grouping(&row) {
            grouping.merge(&row);
        }
    }

    grouping
}

/// Groups the artworks of the CSV export at `path` by artist.
///
/// A source that can't be opened yields an empty grouping.
pub fn get_results<P>(path: P, start: i64, end: i64) -> Grouping
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path);

    let mut reader = match reader {
        Err(err) => {
            warn!("Can't open {}: {}", path.display(), err);
            return Grouping::default();
        }
        Ok(reader) => reader,
    };

    if let Ok(headers) = reader.headers() {
        debug!("Header has {} columns", headers.len());
    }

    let rows = reader.records().filter_map(|record| match record {
        Ok(record) => Some(SourceRow::from_record(&record)),
        Err(err) => {
            warn!("Can't read row from {}: {}", path.display(), err);
            None
        }
    });

    let grouping = group_rows(rows, start, end);

    info!(
        "Seen={}  Matched={}  Artists={}",
        grouping.seen,
        grouping.matched,
        grouping.artists.len()
    );

    grouping
}
