use crate::person::{Person, UNKNOWN};

/// Uppercased last name followed by the full name, so "Beru Whitesun lars"
/// files under LARS.
pub fn sort_key(name: &str) -> String {
    let last_name = name.split_whitespace().last().unwrap_or("");
    format!("{} {}", last_name.to_uppercase(), name)
}

/// Centimetres to metres; values that aren't numbers are shown as they are.
pub fn format_height(height: &str) -> String {
    if height == UNKNOWN {
        return height.to_string();
    }

    match height.trim().parse::<f64>() {
        Ok(centimetres) => format!("{}m", centimetres / 100.0),
        Err(_) => height.to_string(),
    }
}

pub fn format_mass(mass: &str) -> String {
    if mass == UNKNOWN {
        return mass.to_string();
    }

    format!("{}kg", mass)
}

pub fn decorate(mut person: Person) -> Person {
    person.sort_by = sort_key(&person.name);
    person
}

pub fn format_units(person: &mut Person) {
    person.height_formatted = format_height(&person.height);
    person.mass_formatted = format_mass(&person.mass);
}
