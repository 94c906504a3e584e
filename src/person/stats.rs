use crate::person::{Person, UNKNOWN};

const NO_DATA: &str = "no data";

#[derive(Debug, Default, PartialEq)]
pub struct Averages {
    pub mean_mass: Option<f64>,
    pub tallest: Option<(String, f64)>,
    pub common_hair_color: Option<String>,
}

fn known(value: &str) -> Option<f64> {
    if value == UNKNOWN {
        return None;
    }

    value
        .replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|measured| measured.is_finite())
}

/// People with unknown or unreadable measurements are left out of the
/// corresponding figure entirely. Ties go to whoever came first.
pub fn person_averages(people: &[Person]) -> Averages {
    let mut mass_total = 0.0;
    let mut mass_count = 0;
    let mut tallest: Option<(String, f64)> = None;
    let mut hair_colors: Vec<(&str, usize)> = Vec::new();

    for person in people {
        if let Some(mass) = known(&person.mass) {
            mass_total += mass;
            mass_count += 1;
        }

        if let Some(height) = known(&person.height) {
            let taller = match &tallest {
                Some((_, tallest_height)) => height > *tallest_height,
                None => true,
            };
            if taller {
                tallest = Some((person.name.to_string(), height));
            }
        }

        match hair_colors
            .iter_mut()
            .find(|(color, _)| *color == person.hair_color)
        {
            Some((_, count)) => *count += 1,
            None => hair_colors.push((person.hair_color.as_str(), 1)),
        }
    }

    let mut common_hair_color: Option<(&str, usize)> = None;
    for (color, count) in hair_colors {
        if common_hair_color.map_or(true, |(_, leader)| count > leader) {
            common_hair_color = Some((color, count));
        }
    }

    Averages {
        mean_mass: if mass_count == 0 {
            None
        } else {
            Some(mass_total / mass_count as f64)
        },
        tallest,
        common_hair_color: common_hair_color.map(|(color, _)| color.to_string()),
    }
}

impl Averages {
    pub fn lines(&self) -> Vec<String> {
        let mass = match self.mean_mass {
            Some(mean) => format!("{}kg", mean.round()),
            None => NO_DATA.to_string(),
        };
        let tallest = match &self.tallest {
            Some((name, height)) => format!("{} {}m", name, height / 100.0),
            None => NO_DATA.to_string(),
        };
        let hair_color = match &self.common_hair_color {
            Some(color) => color.to_string(),
            None => NO_DATA.to_string(),
        };

        vec![
            format!("Average mass: {}", mass),
            format!("Name and height of tallest: {}", tallest),
            format!("Most common hair color: {}", hair_color),
        ]
    }
}
