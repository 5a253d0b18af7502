//! Built-in gazetteer of Bangladesh divisions and Dhaka neighbourhoods.
//!
//! Lets callers request insights by name instead of raw coordinates.

use serde::Serialize;

use crate::Coordinate;

/// Administrative level of a [`Place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    /// One of the eight national divisions.
    Division,
    /// A neighbourhood within Greater Dhaka.
    Region,
}

/// A named location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Place {
    /// Display name.
    pub name: &'static str,
    /// Administrative level.
    pub kind: PlaceKind,
    /// Representative point.
    pub coordinate: Coordinate,
}

impl Place {
    const fn division(name: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            kind: PlaceKind::Division,
            coordinate: Coordinate::from_valid(lat, lng),
        }
    }

    const fn region(name: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            kind: PlaceKind::Region,
            coordinate: Coordinate::from_valid(lat, lng),
        }
    }
}

const DIVISIONS: [Place; 8] = [
    Place::division("Dhaka", 23.8103, 90.4125),
    Place::division("Chattogram", 22.3569, 91.7832),
    Place::division("Khulna", 22.8456, 89.5403),
    Place::division("Rajshahi", 24.3636, 88.6241),
    Place::division("Sylhet", 24.8949, 91.8687),
    Place::division("Barishal", 22.7010, 90.3535),
    Place::division("Rangpur", 25.7439, 89.2752),
    Place::division("Mymensingh", 24.7471, 90.4203),
];

const DHAKA_REGIONS: [Place; 38] = [
    // Greater Dhaka
    Place::region("Mirpur", 23.8223, 90.3654),
    Place::region("Gulshan", 23.7925, 90.4078),
    Place::region("Dhanmondi", 23.7461, 90.3742),
    Place::region("Motijheel", 23.7339, 90.4149),
    Place::region("Uttara", 23.8740, 90.3984),
    Place::region("Banani", 23.7935, 90.4043),
    Place::region("Tejgaon", 23.7620, 90.4003),
    Place::region("Badda", 23.7805, 90.4260),
    Place::region("Mohammadpur", 23.7640, 90.3589),
    Place::region("Farmgate", 23.7515, 90.3910),
    Place::region("Rampura", 23.7635, 90.4207),
    Place::region("Shyamoli", 23.7702, 90.3606),
    Place::region("Kallyanpur", 23.7793, 90.3604),
    Place::region("Malibagh", 23.7527, 90.4201),
    Place::region("Aftabnagar", 23.7649, 90.4409),
    Place::region("Banasree", 23.7626, 90.4515),
    Place::region("Baridhara", 23.8107, 90.4229),
    Place::region("Niketan", 23.7835, 90.4097),
    Place::region("Bashundhara", 23.8197, 90.4529),
    Place::region("Keraniganj", 23.6889, 90.3442),
    // Old Dhaka
    Place::region("Lalbagh", 23.7189, 90.3880),
    Place::region("Wari", 23.7199, 90.4215),
    Place::region("Paltan", 23.7345, 90.4101),
    Place::region("Kamalapur", 23.7331, 90.4255),
    Place::region("Chawkbazar", 23.7208, 90.3928),
    Place::region("Bangshal", 23.7178, 90.4080),
    Place::region("Kotwali", 23.7118, 90.4022),
    Place::region("Sutrapur", 23.7104, 90.4190),
    Place::region("Islampur", 23.7095, 90.4026),
    Place::region("Nababpur", 23.7165, 90.4126),
    Place::region("Armanitola", 23.7109, 90.4009),
    Place::region("Shakhari Bazar", 23.7098, 90.4064),
    Place::region("Sadarghat", 23.7065, 90.4112),
    Place::region("Gendaria", 23.7014, 90.4300),
    Place::region("Tikatuli", 23.7237, 90.4239),
    Place::region("Azimpur", 23.7317, 90.3836),
    Place::region("Nilkhet", 23.7312, 90.3878),
    Place::region("Nayabazar", 23.7139, 90.4038),
];

/// All known places, divisions first.
pub fn places() -> impl Iterator<Item = &'static Place> {
    DIVISIONS.iter().chain(DHAKA_REGIONS.iter())
}

/// Look up a place by name.
///
/// Matching trims surrounding whitespace and ignores case. Divisions take
/// precedence over neighbourhoods sharing a name.
///
/// # Examples
/// ```
/// use terrasight_core::{PlaceKind, find_place};
///
/// let gulshan = find_place("  gulshan ").expect("known neighbourhood");
/// assert_eq!(gulshan.kind, PlaceKind::Region);
/// assert!(find_place("Atlantis").is_none());
/// ```
#[must_use]
pub fn find_place(name: &str) -> Option<&'static Place> {
    let query = name.trim();
    if query.is_empty() {
        return None;
    }
    places().find(|place| place.name.eq_ignore_ascii_case(query))
}
