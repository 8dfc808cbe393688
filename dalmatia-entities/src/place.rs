use strum::{AsRefStr, Display, EnumString};

use crate::{geometry::Boundary, id::Id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlaceKind {
    Municipality,
    City,
}

/// A municipality or city with its administrative boundary.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id        : Id,
    pub name      : String,
    pub kind      : PlaceKind,
    pub county_id : u32,
    pub boundary  : Boundary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_place_kind() {
        assert_eq!(Ok(PlaceKind::City), "city".parse());
        assert_eq!(Ok(PlaceKind::Municipality), "Municipality".parse());
        assert!("village".parse::<PlaceKind>().is_err());
        assert_eq!("municipality", PlaceKind::Municipality.as_ref());
        assert_eq!("city", PlaceKind::City.to_string());
    }
}
