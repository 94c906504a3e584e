use csv::StringRecord;

/// Column positions in the museum's open access export.
pub mod offsets {
    pub const ROW_ID: usize = 0;
    pub const PUBLIC_DOMAIN: usize = 2;
    pub const TITLE: usize = 6;
    pub const CATEGORY: usize = 12;
    pub const DISPLAY_NAME: usize = 14;
    pub const ARTIST_ID: usize = 17;
    pub const DATE_BEGIN: usize = 19;
    pub const DATE_END: usize = 20;
    pub const MEDIUM: usize = 23;
    pub const LINK: usize = 40;
}

/// One source record with the fields the filters look at.
///
/// `None` means the record was too short to hold the column at all, which
/// is not the same as an empty column: the category and public-domain checks
/// only apply when the column is present.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SourceRow {
    pub row_id: Option<String>,
    pub public_domain: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub display_name: Option<String>,
    pub artist_id: Option<String>,
    pub date_begin: Option<String>,
    pub date_end: Option<String>,
    pub medium: Option<String>,
    pub link: Option<String>,
}

fn field(record: &StringRecord, offset: usize) -> Option<String> {
    record.get(offset).map(|value| value.to_string())
}

impl SourceRow {
    pub fn from_record(record: &StringRecord) -> SourceRow {
        SourceRow {
            row_id: field(record, offsets::ROW_ID),
            public_domain: field(record, offsets::PUBLIC_DOMAIN),
            title: field(record, offsets::TITLE),
            category: field(record, offsets::CATEGORY),
            display_name: field(record, offsets::DISPLAY_NAME),
            artist_id: field(record, offsets::ARTIST_ID),
            date_begin: field(record, offsets::DATE_BEGIN),
            date_end: field(record, offsets::DATE_END),
            medium: field(record, offsets::MEDIUM),
            link: field(record, offsets::LINK),
        }
    }
}

/// Absent and empty columns are both "empty".
pub fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

pub fn year(value: &Option<String>) -> Option<i64> {
    text(value).trim().parse::<i64>().ok()
}
