use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::person::Person;

/// Replaces whatever snapshot was at `path`.
pub fn save<P: AsRef<Path>>(path: P, people: &[Person]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    serde_json::to_writer(&mut writer, people)?;
    writer.flush()?;

    debug!("Saved {} people to {}", people.len(), path.display());
    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Person>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
