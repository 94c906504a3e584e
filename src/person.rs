use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod decorate;
pub mod fetch;
pub mod snapshot;
pub mod sort;
pub mod stats;

pub const UNKNOWN: &str = "unknown";

/// A person as the API supplies them, plus the fields derived for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub homeworld: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub sort_by: String,
    #[serde(default)]
    pub height_formatted: String,
    #[serde(default)]
    pub mass_formatted: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Species {
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub average_height: String,
    #[serde(default)]
    pub average_lifespan: String,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub diameter: String,
    #[serde(default)]
    pub gravity: String,
    #[serde(default)]
    pub orbital_period: String,
    #[serde(default)]
    pub population: String,
    #[serde(default)]
    pub surface_water: String,
    #[serde(default)]
    pub terrain: String,
}

/// One page of a collection resource.
#[derive(Deserialize, Debug)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

impl Person {
    pub fn row(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.name, self.height_formatted, self.mass_formatted, self.hair_color
        )
    }
}

impl Species {
    pub fn summary(&self) -> String {
        format!(
            "{}: {} {} | Average height: {} | Average lifespan: {}",
            self.name,
            self.designation,
            self.classification,
            self.average_height,
            self.average_lifespan
        )
    }

    /// Summary line marked `[active]` for the species named `active`.
    pub fn listing(&self, active: &str) -> String {
        let status = if self.name == active {
            "active"
        } else {
            "inactive"
        };
        format!("[{}] {}", status, self.summary())
    }
}

impl Planet {
    pub fn details(&self) -> Vec<String> {
        vec![
            "World Details".to_string(),
            format!("Homeworld: {}", self.name),
            format!("Climate: {}", self.climate),
            format!("Diameter: {}", self.diameter),
            format!("Gravity: {}", self.gravity),
            format!("Orbital Period: {}", self.orbital_period),
            format!("Population: {}", self.population),
            format!("Surface Water: {}", self.surface_water),
            format!("Terrain: {}", self.terrain),
        ]
    }
}

/// Picks the species named `name`; species lists are matched exactly.
pub fn select_species<'a>(species: &'a [Species], name: &str) -> Option<&'a Species> {
    species.iter().find(|species| species.name == name)
}

/// The last person with that name wins.
pub fn find_person<'a>(people: &'a [Person], name: &str) -> Option<&'a Person> {
    people.iter().rev().find(|person| person.name == name)
}
