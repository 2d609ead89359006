//! Musical vocabulary for chart interpretation: what each element, quality,
//! aspect and house sounds like.

use serde::Serialize;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementInfo {
    pub symbol: &'static str,
    pub note: &'static str,
    pub sound: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityInfo {
    pub action: &'static str,
    pub rhythm: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectMusic {
    pub interval: &'static str,
    pub feel: &'static str,
    pub music: &'static str,
    pub energy: &'static str,
    pub resolve: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HouseWisdom {
    pub area: &'static str,
    pub octave: &'static str,
    pub wisdom: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrequencyBand {
    Low,
    Mid,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyCategory {
    pub band: FrequencyBand,
    pub resonance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrbLabel {
    Exact,
    Tight,
    Moderate,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrbPrecision {
    pub label: OrbLabel,
    pub intensity: &'static str,
}

impl Element {
    pub fn info(&self) -> ElementInfo {
        match self {
            Element::Fire => ElementInfo {
                symbol: "△",
                note: "C",
                sound: "Fast vibrations, initiating energy",
                color: "warm red-orange tones",
            },
            Element::Earth => ElementInfo {
                symbol: "▽",
                note: "F",
                sound: "Slow, steady vibrations, stabilizing",
                color: "grounded green-brown tones",
            },
            Element::Air => ElementInfo {
                symbol: "◇",
                note: "G",
                sound: "Light, rapid oscillations, connecting",
                color: "bright yellow-blue tones",
            },
            Element::Water => ElementInfo {
                symbol: "○",
                note: "E♭",
                sound: "Flowing, emotional vibrations, receptive",
                color: "cool blue-violet tones",
            },
        }
    }
}

impl Quality {
    pub fn info(&self) -> QualityInfo {
        match self {
            Quality::Cardinal => QualityInfo {
                action: "Initiating",
                rhythm: "Strong downbeat, beginning of measure",
            },
            Quality::Fixed => QualityInfo {
                action: "Sustaining",
                rhythm: "Long sustained note, holding the tone",
            },
            Quality::Mutable => QualityInfo {
                action: "Transitioning",
                rhythm: "Syncopated, bridge between movements",
            },
        }
    }
}

impl Aspect {
    pub fn music(&self) -> AspectMusic {
        match self {
            Aspect::Conjunction => AspectMusic {
                interval: "Unison",
                feel: "Unity & Amplification",
                music: "two voices singing the same note",
                energy: "Pure consonance—energies merge and amplify each other. Like an octave, this creates unity and power.",
                resolve: "Already in perfect harmony. Use this unified energy intentionally.",
            },
            Aspect::Sextile => AspectMusic {
                interval: "Major Third",
                feel: "Harmonious & Flowing",
                music: "a pleasant major chord",
                energy: "Consonant and supportive. Like notes that naturally complement each other, creating opportunity and ease.",
                resolve: "Natural harmony. These energies want to collaborate—simply allow them to flow together.",
            },
            Aspect::Square => AspectMusic {
                interval: "Tritone (Devil's Interval)",
                feel: "Tension & Dynamic Friction",
                music: "a dissonant clash demanding resolution",
                energy: "Maximum dissonance. Like the tritone that medieval musicians called \"diabolus in musica,\" \
                         this creates uncomfortable tension. But here's the secret: dissonance drives evolution. \
                         We don't avoid dissonance—we learn from it.",
                resolve: "Find the middle path. A square yearns for resolution. Conscious action transforms friction \
                          into growth. Lean into the discomfort—it's pushing you to harmonize at a higher octave.",
            },
            Aspect::Trine => AspectMusic {
                interval: "Perfect Fifth",
                feel: "Effortless Flow & Grace",
                music: "the most consonant interval after unison",
                energy: "Divine consonance. Like the perfect fifth that forms the basis of all harmony, this creates natural talent and ease.",
                resolve: "Already beautifully resolved. These energies flow naturally—trust and follow their lead.",
            },
            Aspect::Opposition => AspectMusic {
                interval: "Octave Polarity",
                feel: "Mirror Tension",
                music: "the same note in different registers",
                energy: "Polarized consonance. Like an octave, these are the same note at opposite ends—creating both \
                         tension and recognition. We crave resolution because we sense the underlying unity.",
                resolve: "Integration through awareness. These opposing forces want to become conscious partners. \
                          Find the balance point to harmonize the polarity.",
            },
        }
    }
}

impl House {
    pub fn wisdom(&self) -> HouseWisdom {
        let (area, octave, wisdom) = match self {
            House::First => (
                "Self & Identity",
                "Root Note",
                "This is your fundamental frequency—the keynote of your entire symphony.",
            ),
            House::Second => (
                "Resources & Values",
                "Second",
                "The harmonic that grounds your material reality and what you find valuable.",
            ),
            House::Third => (
                "Communication & Mind",
                "Third",
                "The melody of your thoughts and how you express your inner music.",
            ),
            House::Fourth => (
                "Home & Roots",
                "Fourth",
                "Your bass line—the foundational rhythm that supports everything above.",
            ),
            House::Fifth => (
                "Creativity & Joy",
                "Fifth",
                "The perfect fifth—pure creative expression and authentic playfulness.",
            ),
            House::Sixth => (
                "Service & Health",
                "Sixth",
                "The tuning process—where you refine and harmonize your daily rhythms.",
            ),
            House::Seventh => (
                "Relationships",
                "Seventh",
                "The leading tone—seeking resolution through partnership and union.",
            ),
            House::Eighth => (
                "Transformation",
                "Octave",
                "The death and rebirth of the note—transformation into a higher frequency.",
            ),
            House::Ninth => (
                "Wisdom & Expansion",
                "Ninth",
                "Extended harmony—reaching beyond the octave into philosophical resonance.",
            ),
            House::Tenth => (
                "Career & Legacy",
                "Tenth",
                "Your public performance—the song you sing for the world to hear.",
            ),
            House::Eleventh => (
                "Community & Vision",
                "Eleventh",
                "Collective harmony—the orchestra of your tribe and future vision.",
            ),
            House::Twelfth => (
                "Spirituality & Unity",
                "Twelfth",
                "The cosmic sustain—where all notes dissolve back into infinite silence.",
            ),
        };
        HouseWisdom { area, octave, wisdom }
    }
}

pub fn frequency_category(frequency: f64) -> FrequencyCategory {
    if frequency < 300.0 {
        FrequencyCategory { band: FrequencyBand::Low, resonance: "grounding, foundational" }
    } else if frequency < 500.0 {
        FrequencyCategory { band: FrequencyBand::Mid, resonance: "balancing, bridging" }
    } else {
        FrequencyCategory { band: FrequencyBand::High, resonance: "elevating, transcendent" }
    }
}

pub fn orb_precision(orb: f64) -> OrbPrecision {
    if orb < 1.0 {
        OrbPrecision {
            label: OrbLabel::Exact,
            intensity: "Maximum power—this aspect is singing at full volume!",
        }
    } else if orb < 3.0 {
        OrbPrecision { label: OrbLabel::Tight, intensity: "Strong resonance—clearly felt" }
    } else if orb < 6.0 {
        OrbPrecision { label: OrbLabel::Moderate, intensity: "Present but softer—background melody" }
    } else {
        OrbPrecision { label: OrbLabel::Wide, intensity: "Subtle influence—barely audible overtone" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orb_precision_bands() {
        assert_eq!(orb_precision(0.0).label, OrbLabel::Exact);
        assert_eq!(orb_precision(1.0).label, OrbLabel::Tight);
        assert_eq!(orb_precision(2.99).label, OrbLabel::Tight);
        assert_eq!(orb_precision(3.0).label, OrbLabel::Moderate);
        assert_eq!(orb_precision(6.0).label, OrbLabel::Wide);
    }

    #[test]
    fn test_frequency_bands() {
        assert_eq!(frequency_category(126.22).band, FrequencyBand::Low);
        assert_eq!(frequency_category(300.0).band, FrequencyBand::Mid);
        assert_eq!(frequency_category(499.9).band, FrequencyBand::Mid);
        assert_eq!(frequency_category(500.0).band, FrequencyBand::High);
    }

    #[test]
    fn test_tables_cover_every_variant() {
        assert_eq!(Element::Water.info().note, "E♭");
        assert_eq!(Quality::Fixed.info().action, "Sustaining");
        assert_eq!(Aspect::Trine.music().interval, "Perfect Fifth");
        assert!(Aspect::Square.music().energy.contains("diabolus in musica"));
        let octaves: Vec<&str> = House::all().map(|house| house.wisdom().octave).collect();
        assert_eq!(octaves.len(), 12);
        assert_eq!(octaves[0], "Root Note");
        assert_eq!(octaves[7], "Octave");
    }
}
