use std::cmp::Ordering;
use std::str::FromStr;

use crate::person::{Person, UNKNOWN};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortField {
    Name,
    Height,
    Mass,
    HairColor,
    SortBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "height" => Ok(SortField::Height),
            "mass" => Ok(SortField::Mass),
            "hair_color" => Ok(SortField::HairColor),
            "sort_by" => Ok(SortField::SortBy),
            other => Err(format!("can't sort by {}", other)),
        }
    }
}

impl SortField {
    fn text<'a>(&self, person: &'a Person) -> &'a str {
        match self {
            SortField::Name => &person.name,
            SortField::Height => &person.height,
            SortField::Mass => &person.mass,
            SortField::HairColor => &person.hair_color,
            SortField::SortBy => &person.sort_by,
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, SortField::Height | SortField::Mass)
    }
}

/// Unknown, unparseable and non-finite measurements sort after every known
/// one.
fn measurement(value: &str) -> f64 {
    if value.eq_ignore_ascii_case(UNKNOWN) {
        return f64::INFINITY;
    }

    value
        .replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|measured| measured.is_finite())
        .unwrap_or(f64::INFINITY)
}

pub fn compare_values(field: SortField, order: Order) -> impl Fn(&Person, &Person) -> Ordering {
    move |a, b| {
        let (a, b) = (field.text(a), field.text(b));

        let comparison = if field.is_numeric() {
            measurement(a).total_cmp(&measurement(b))
        } else {
            a.to_uppercase().cmp(&b.to_uppercase())
        };

        match order {
            Order::Asc => comparison,
            Order::Desc => comparison.reverse(),
        }
    }
}

/// Stable: people that compare equal keep their relative order.
pub fn sort_people(people: &mut [Person], field: SortField, order: Order) {
    people.sort_by(compare_values(field, order));
}
