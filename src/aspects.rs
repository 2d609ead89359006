use serde::Serialize;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectConfig {
    /// Widest orb, in degrees, still reported as an aspect.
    pub max_orb: f64,
}

impl Default for AspectConfig {
    fn default() -> Self {
        AspectConfig { max_orb: 8.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectInfo {
    pub aspect: Aspect,
    pub planet1: CelestialBody,
    pub planet2: CelestialBody,
    pub orb: f64,
}

impl AspectInfo {
    pub fn observation(&self) -> AspectObservation {
        AspectObservation::new(self.aspect, self.orb)
    }
}

/// Shortest arc between two longitudes, in `[0, 180]`.
pub fn separation(longitude1: f64, longitude2: f64) -> f64 {
    let diff = (normalize_degrees(longitude1) - normalize_degrees(longitude2)).abs();
    diff.min(360.0 - diff)
}

/// Closest aspect to a separation and its orb.
pub fn nearest_aspect(separation: f64) -> (Aspect, f64) {
    Aspect::ALL
        .iter()
        .map(|&aspect| (aspect, (separation - aspect.angle()).abs()))
        .fold((Aspect::Conjunction, f64::INFINITY), |best, candidate| {
            if candidate.1 < best.1 {
                candidate
            } else {
                best
            }
        })
}

/// Aspects between every pair of positions, pairs taken in input order.
pub fn find_aspects(planets: &[PlanetPosition], config: &AspectConfig) -> Vec<AspectInfo> {
    let mut aspects = Vec::new();
    for (i, first) in planets.iter().enumerate() {
        for second in &planets[i + 1..] {
            let (aspect, orb) = nearest_aspect(separation(first.degree, second.degree));
            if orb <= config.max_orb {
                aspects.push(AspectInfo {
                    aspect,
                    planet1: first.planet,
                    planet2: second.planet,
                    orb,
                });
            }
        }
    }
    aspects
}
