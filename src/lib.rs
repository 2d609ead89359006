// src/lib.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod harmony;
pub mod wisdom;

pub use aspects::{find_aspects, AspectConfig, AspectInfo};
pub use chart::{calculate_chart, BirthMoment, ChartData, ChartSource, Ephemeris};
pub use ephemeris::ApproximateEphemeris;
pub use error::ChartError;
pub use harmony::{analyze, analyze_positions, resolution_guidance, AspectObservation, ElementCounts, HarmonicAnalysis};

pub type JulianDay = f64;

/// Folds any finite longitude into `[0, 360)`. Values already in range are
/// returned untouched.
///
/// `f64::rem_euclid` can return `360.0` for tiny negative inputs, so the
/// remainder is taken twice instead.
pub fn normalize_degrees(degree: f64) -> f64 {
    if (0.0..360.0).contains(&degree) {
        return degree;
    }
    ((degree % 360.0) + 360.0) % 360.0
}

// ---------------------------
// ## Enumerations
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ascendant,
}

impl CelestialBody {
    pub fn iter() -> impl Iterator<Item = CelestialBody> {
        [
            CelestialBody::Sun,
            CelestialBody::Moon,
            CelestialBody::Mercury,
            CelestialBody::Venus,
            CelestialBody::Mars,
            CelestialBody::Jupiter,
            CelestialBody::Saturn,
            CelestialBody::Uranus,
            CelestialBody::Neptune,
            CelestialBody::Pluto,
            CelestialBody::Ascendant,
        ]
        .iter()
        .copied()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "☉",
            CelestialBody::Moon => "☽",
            CelestialBody::Mercury => "☿",
            CelestialBody::Venus => "♀",
            CelestialBody::Mars => "♂",
            CelestialBody::Jupiter => "♃",
            CelestialBody::Saturn => "♄",
            CelestialBody::Uranus => "♅",
            CelestialBody::Neptune => "♆",
            CelestialBody::Pluto => "♇",
            CelestialBody::Ascendant => "Asc",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
            CelestialBody::Ascendant => "Ascendant",
        }
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CelestialBody::iter().find(|body| body.name() == s).ok_or(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum House {
    First = 1,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl House {
    pub fn from_index(index: usize) -> Option<House> {
        match index {
            1 => Some(House::First),
            2 => Some(House::Second),
            3 => Some(House::Third),
            4 => Some(House::Fourth),
            5 => Some(House::Fifth),
            6 => Some(House::Sixth),
            7 => Some(House::Seventh),
            8 => Some(House::Eighth),
            9 => Some(House::Ninth),
            10 => Some(House::Tenth),
            11 => Some(House::Eleventh),
            12 => Some(House::Twelfth),
            _ => None,
        }
    }

    pub fn all() -> impl Iterator<Item = House> {
        (1..=12).filter_map(House::from_index)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Sign containing `longitude`; each sign spans 30 degrees from Aries at 0.
    /// A longitude exactly on a boundary belongs to the later sign.
    pub fn from_longitude(longitude: f64) -> Self {
        let sign_index = (normalize_degrees(longitude) / 30.0).floor() as usize;
        match sign_index {
            0 => ZodiacSign::Aries,
            1 => ZodiacSign::Taurus,
            2 => ZodiacSign::Gemini,
            3 => ZodiacSign::Cancer,
            4 => ZodiacSign::Leo,
            5 => ZodiacSign::Virgo,
            6 => ZodiacSign::Libra,
            7 => ZodiacSign::Scorpio,
            8 => ZodiacSign::Sagittarius,
            9 => ZodiacSign::Capricorn,
            10 => ZodiacSign::Aquarius,
            _ => ZodiacSign::Pisces,
        }
    }

    /// One-based position in the zodiac, Aries = 1.
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn element(&self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    pub fn quality(&self) -> Quality {
        match self {
            ZodiacSign::Aries | ZodiacSign::Cancer | ZodiacSign::Libra | ZodiacSign::Capricorn => {
                Quality::Cardinal
            }
            ZodiacSign::Taurus | ZodiacSign::Leo | ZodiacSign::Scorpio | ZodiacSign::Aquarius => {
                Quality::Fixed
            }
            ZodiacSign::Gemini | ZodiacSign::Virgo | ZodiacSign::Sagittarius | ZodiacSign::Pisces => {
                Quality::Mutable
            }
        }
    }

    /// Musical mode associated with a sun sign.
    pub fn musical_mode(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "A Phrygian",
            ZodiacSign::Taurus => "F Ionian",
            ZodiacSign::Gemini => "G Mixolydian",
            ZodiacSign::Cancer => "A Aeolian",
            ZodiacSign::Leo => "D Lydian",
            ZodiacSign::Virgo => "D Dorian",
            ZodiacSign::Libra => "Bb Ionian",
            ZodiacSign::Scorpio => "B Locrian",
            ZodiacSign::Sagittarius => "E Mixolydian",
            ZodiacSign::Capricorn => "C Dorian",
            ZodiacSign::Aquarius => "F# Lydian",
            ZodiacSign::Pisces => "E Phrygian",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign_str = match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        };
        write!(f, "{}", sign_str)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Enumeration order; ties between elements resolve to the earlier one.
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let element_str = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        };
        write!(f, "{}", element_str)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl Aspect {
    pub const ALL: [Aspect; 5] = [
        Aspect::Conjunction,
        Aspect::Sextile,
        Aspect::Square,
        Aspect::Trine,
        Aspect::Opposition,
    ];

    /// Exact separation in degrees.
    pub fn angle(&self) -> f64 {
        match self {
            Aspect::Conjunction => 0.0,
            Aspect::Sextile => 60.0,
            Aspect::Square => 90.0,
            Aspect::Trine => 120.0,
            Aspect::Opposition => 180.0,
        }
    }

    pub fn is_consonant(&self) -> bool {
        matches!(self, Aspect::Conjunction | Aspect::Sextile | Aspect::Trine)
    }

    pub fn is_dissonant(&self) -> bool {
        matches!(self, Aspect::Square | Aspect::Opposition)
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let aspect_str = match self {
            Aspect::Conjunction => "Conjunction",
            Aspect::Sextile => "Sextile",
            Aspect::Square => "Square",
            Aspect::Trine => "Trine",
            Aspect::Opposition => "Opposition",
        };
        write!(f, "{}", aspect_str)
    }
}

impl FromStr for Aspect {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Conjunction" => Ok(Aspect::Conjunction),
            "Sextile" => Ok(Aspect::Sextile),
            "Square" => Ok(Aspect::Square),
            "Trine" => Ok(Aspect::Trine),
            "Opposition" => Ok(Aspect::Opposition),
            _ => Err(()),
        }
    }
}

// ---------------------------
// ## Structures
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    #[serde(rename = "name")]
    pub planet: CelestialBody,
    pub symbol: &'static str,
    pub degree: f64,
    pub sign: ZodiacSign,
    pub sign_number: u8,
    #[serde(rename = "isRetrograde")]
    pub retrograde: bool,
}

impl PlanetPosition {
    /// Builds a position from any finite longitude, normalizing it first.
    pub fn new(planet: CelestialBody, longitude: f64, retrograde: bool) -> Self {
        let degree = normalize_degrees(longitude);
        let sign = ZodiacSign::from_longitude(degree);
        PlanetPosition {
            planet,
            symbol: planet.symbol(),
            degree,
            sign,
            sign_number: sign.number(),
            retrograde,
        }
    }

    pub fn element(&self) -> Element {
        self.sign.element()
    }
}
