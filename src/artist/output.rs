use serde::Serialize;
use serde_json::ser::{CharEscape, CompactFormatter, Formatter};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io;

use crate::artist::ArtistRecord;
use crate::error::Result;

/// Numeric keys first, in numeric order, then the rest lexicographically.
fn compare_keys(a: &str, b: &str) -> Ordering {
    let ordering = match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    };

    ordering.then_with(|| a.cmp(b))
}

pub fn sorted_by_key(artists: HashMap<String, ArtistRecord>) -> Vec<(String, ArtistRecord)> {
    let mut entries: Vec<(String, ArtistRecord)> = artists.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    entries
}

/// Escapes tags, quotes, slashes and non-ASCII characters as `\u` sequences
/// so the output can be dropped straight into an HTML page.
struct HexTagFormatter;

impl Formatter for HexTagFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;

        for (index, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003C".to_string(),
                '>' => "\\u003E".to_string(),
                '/' => "\\/".to_string(),
                ch if !ch.is_ascii() => {
                    let mut units = [0u16; 2];
                    ch.encode_utf16(&mut units)
                        .iter()
                        .map(|unit| format!("\\u{:04x}", unit))
                        .collect()
                }
                _ => continue,
            };

            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = index + ch.len_utf8();
        }

        writer.write_all(fragment[start..].as_bytes())
    }

    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match char_escape {
            CharEscape::Quote => writer.write_all(b"\\u0022"),
            other => CompactFormatter.write_char_escape(writer, other),
        }
    }
}

pub fn to_json(artists: &[ArtistRecord]) -> Result<String> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, HexTagFormatter);
    artists.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}

pub fn to_dump(entries: &[(String, ArtistRecord)]) -> String {
    format!("{:#?}", entries)
}

/// `json` gives the artists as a JSON array in key order, any other mode
/// dumps the key-sorted map.
pub fn render(artists: HashMap<String, ArtistRecord>, display_as: &str) -> Result<String> {
    let entries = sorted_by_key(artists);

    if display_as == "json" {
        let artists: Vec<ArtistRecord> = entries.into_iter().map(|(_, artist)| artist).collect();
        return to_json(&artists);
    }

    Ok(to_dump(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::{info_fragment, ARTIST_TYPE};

    fn record(id: usize) -> ArtistRecord {
        ArtistRecord {
            id,
            start: "1450".to_string(),
            end: "1470".to_string(),
            category: ARTIST_TYPE.to_string(),
            display_name: "Da Vinci".to_string(),
            wiki_results: 1,
            info: info_fragment("http://a", "X"),
        }
    }

    #[test]
    fn sorts_numeric_keys_numerically() {
        let artists: HashMap<String, ArtistRecord> = vec![
            ("100".to_string(), record(1)),
            ("abc".to_string(), record(2)),
            ("9".to_string(), record(3)),
            ("Abc".to_string(), record(4)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<String> = sorted_by_key(artists)
            .into_iter()
            .map(|(key, _)| key)
            .collect();

        assert_eq!(keys, vec!["9", "100", "Abc", "abc"]);
    }

    #[test]
    fn json_escapes_like_the_museum_page() {
        let json = to_json(&[record(1)]).unwrap();

        assert_eq!(
            json,
            "[{\"id\":1,\"start\":\"1450\",\"end\":\"1470\",\
             \"type\":\"Artist Metropolitan Museum\",\"event\":\"Da Vinci\",\
             \"wiki_results\":1,\
             \"info\":\"\\u003Cdiv\\u003E\\u003Ca href=\\u0022http:\\/\\/a\\u0022 target=_blank\\u003EX\\u003C\\/a\\u003E\\u003C\\/div\\u003E\"}]"
        );
    }

    #[test]
    fn json_escapes_non_ascii_as_utf16() {
        let mut artist = record(1);
        artist.display_name = "Dürer 𝄞".to_string();
        let json = to_json(&[artist]).unwrap();

        assert!(json.contains("\"event\":\"D\\u00fcrer \\ud834\\udd1e\""));
    }

    fn two_artists() -> HashMap<String, ArtistRecord> {
        vec![("20".to_string(), record(2)), ("3".to_string(), record(1))]
            .into_iter()
            .collect()
    }

    #[test]
    fn renders_json_values_in_key_order() {
        let json = render(two_artists(), "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[1]["id"], 2);
        assert!(!json.contains("\"20\""));
    }

    #[test]
    fn other_modes_dump_keys_and_values() {
        let dump = render(two_artists(), "array").unwrap();

        let three = dump.find("\"3\"").unwrap();
        let twenty = dump.find("\"20\"").unwrap();
        assert!(three < twenty);
        assert!(dump.contains("display_name: \"Da Vinci\""));
    }

    #[test]
    fn json_output_parses_back() {
        let json = to_json(&[record(1), record(2)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[1]["id"], 2);
        assert_eq!(value[0]["info"], record(1).info.as_str());
    }
}
