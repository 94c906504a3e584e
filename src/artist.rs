use serde::Serialize;

pub mod output;
pub mod process;

pub const ARTIST_TYPE: &str = "Artist Metropolitan Museum";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ArtistRecord {
    pub id: usize,
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(rename = "event")]
    pub display_name: String,
    pub wiki_results: u8,
    pub info: String,
}

/// Link fragment appended to `info` for every artwork grouped under an artist.
pub fn info_fragment(link: &str, title: &str) -> String {
    format!("<div><a href=\"{}\" target=_blank>{}</a></div>", link, title)
}
