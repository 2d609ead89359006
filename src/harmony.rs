use serde::Serialize;
use tracing::debug;

use super::*;

const TENSION_THRESHOLD: f64 = 50.0;
const CONSONANCE_THRESHOLD: f64 = 60.0;
const COMPLEXITY_THRESHOLD: f64 = 70.0;

/// One aspect between two bodies as seen by the analyzer.
///
/// `aspect` is `None` when the aspect name is not one of the five modeled
/// aspects. Such observations add nothing to consonance or tension but still
/// count toward complexity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectObservation {
    pub aspect: Option<Aspect>,
    pub orb: f64,
}

impl AspectObservation {
    pub fn new(aspect: Aspect, orb: f64) -> Self {
        AspectObservation { aspect: Some(aspect), orb }
    }

    pub fn named(name: &str, orb: f64) -> Self {
        AspectObservation { aspect: name.parse().ok(), orb }
    }

    /// `1 - orb/10`; negative once the orb is wider than ten degrees.
    pub fn orb_factor(&self) -> f64 {
        1.0 - self.orb / 10.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementCounts {
    pub fire: u32,
    pub earth: u32,
    pub air: u32,
    pub water: u32,
}

impl ElementCounts {
    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    fn add(&mut self, element: Element) {
        match element {
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Air => self.air += 1,
            Element::Water => self.water += 1,
        }
    }

    /// Most frequent element; the first in Fire, Earth, Air, Water order wins ties.
    pub fn dominant(&self) -> (Element, u32) {
        let mut best = (Element::Fire, self.fire);
        for element in Element::ALL.iter().copied().skip(1) {
            let count = self.get(element);
            if count > best.1 {
                best = (element, count);
            }
        }
        best
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HarmonicAnalysis {
    pub consonance: f64,
    pub tension: f64,
    pub complexity: f64,
    pub elements: ElementCounts,
}

/// Scores a chart from its aspects and the element of each planet's sign.
///
/// Planets without element data are skipped in the element tally but still
/// count toward complexity. Scores are capped at 100 and never floored, so
/// many wide dissonant aspects can push tension below zero.
pub fn analyze(aspects: &[AspectObservation], planets: &[Option<Element>]) -> HarmonicAnalysis {
    let mut consonance_score = 0.0;
    let mut tension_score = 0.0;

    for observation in aspects {
        let Some(aspect) = observation.aspect else {
            continue;
        };
        if aspect.is_consonant() {
            consonance_score += observation.orb_factor();
        }
        if aspect.is_dissonant() {
            tension_score += observation.orb_factor();
        }
    }

    // zero aspects still count as one
    let total_aspects = aspects.len().max(1) as f64;
    let complexity_score = total_aspects + planets.len() as f64 / 2.0;

    let mut elements = ElementCounts::default();
    for element in planets.iter().flatten() {
        elements.add(*element);
    }

    let analysis = HarmonicAnalysis {
        consonance: (consonance_score * 20.0).min(100.0),
        tension: (tension_score * 25.0).min(100.0),
        complexity: (complexity_score * 8.0).min(100.0),
        elements,
    };
    debug!(
        aspects = aspects.len(),
        planets = planets.len(),
        consonance = analysis.consonance,
        tension = analysis.tension,
        complexity = analysis.complexity,
        "harmonic analysis"
    );
    analysis
}

/// Same as [`analyze`], taking each planet's element from its sign.
pub fn analyze_positions(aspects: &[AspectObservation], planets: &[PlanetPosition]) -> HarmonicAnalysis {
    let elements: Vec<Option<Element>> = planets.iter().map(|p| Some(p.element())).collect();
    analyze(aspects, &elements)
}

/// Advice derived from an analysis, in a fixed order: tension, consonance,
/// complexity, then the dominant element.
pub fn resolution_guidance(analysis: &HarmonicAnalysis) -> Vec<String> {
    let mut guidance = Vec::new();

    if analysis.tension > TENSION_THRESHOLD {
        guidance.push(
            "High tension detected. This chart has significant dissonant aspects creating evolutionary pressure. \
             Embrace this friction—it's the universe asking you to grow."
                .to_string(),
        );
    }

    if analysis.consonance > CONSONANCE_THRESHOLD {
        guidance.push(
            "Harmonious flow dominates. Natural talents and ease abound. The challenge is to not become \
             complacent—sometimes we need dissonance to evolve."
                .to_string(),
        );
    }

    if analysis.complexity > COMPLEXITY_THRESHOLD {
        guidance.push(
            "Complex symphony. This is a rich, multi-layered chart. Focus on one chord at a time, allowing \
             each harmonic relationship to teach its unique lesson."
                .to_string(),
        );
    }

    let (dominant, count) = analysis.elements.dominant();
    if count > 0 {
        guidance.push(element_guidance(dominant).to_string());
    }

    guidance
}

fn element_guidance(element: Element) -> &'static str {
    match element {
        Element::Fire => {
            "Fire frequencies sing loudly—fast, initiating, bold. Ground this energy through earth practices to avoid burnout."
        }
        Element::Earth => {
            "Earth tones resonate—slow, steady, building. Introduce air and fire to prevent stagnation."
        }
        Element::Air => {
            "Air frequencies vibrate—mental, connecting, communicating. Balance with water to avoid living only in your head."
        }
        Element::Water => {
            "Water frequencies flow—emotional, receptive, intuitive. Ground with earth to avoid being overwhelmed."
        }
    }
}
