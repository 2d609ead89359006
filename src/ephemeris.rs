use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

use super::*;

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000: JulianDay = 2451545.0;

/// Mean longitude at J2000 and daily motion, both in degrees, for the
/// planets approximated as circular orbits.
const MEAN_MOTIONS: [(CelestialBody, f64, f64); 5] = [
    (CelestialBody::Mercury, 252.251, 4.09233),
    (CelestialBody::Venus, 181.979, 1.60213),
    (CelestialBody::Mars, 355.433, 0.52403),
    (CelestialBody::Jupiter, 34.351, 0.08309),
    (CelestialBody::Saturn, 50.077, 0.03350),
];

/// Low-fidelity closed-form ephemeris used when no real ephemeris answers.
///
/// Positions are tropical ecliptic longitudes of Sun, Moon and the five
/// visible planets plus an ascendant placed a quarter turn ahead of the Sun.
/// No timezone adjustment is made: the time given is taken as universal time.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApproximateEphemeris;

impl ApproximateEphemeris {
    pub fn new() -> Self {
        ApproximateEphemeris
    }

    /// Positions for Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn and
    /// Ascendant, in that order.
    pub fn estimate(&self, year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Vec<PlanetPosition> {
        let julian_day = julian_day(year, month, day, hour, minute);
        let d = days_since_j2000(julian_day);
        debug!(year, month, day, hour, minute, julian_day, d, "estimating approximate positions");

        let sun = PlanetPosition::new(CelestialBody::Sun, sun_longitude(d), false);
        let ascendant = PlanetPosition::new(CelestialBody::Ascendant, sun.degree + 90.0, false);

        let mut positions = Vec::with_capacity(8);
        positions.push(sun);
        positions.push(PlanetPosition::new(CelestialBody::Moon, moon_longitude(d), false));
        positions.extend(
            MEAN_MOTIONS
                .iter()
                .map(|&(planet, epoch_longitude, daily_motion)| {
                    PlanetPosition::new(planet, circular_longitude(epoch_longitude, daily_motion, d), false)
                }),
        );
        positions.push(ascendant);
        positions
    }

    pub fn estimate_at(&self, date_time: NaiveDateTime) -> Vec<PlanetPosition> {
        self.estimate(
            date_time.year(),
            date_time.month(),
            date_time.day(),
            date_time.hour(),
            date_time.minute(),
        )
    }
}

/// Julian Day Number of a proleptic Gregorian civil date.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32045
}

/// Julian day for a civil date and time; the day starts at noon.
pub fn julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> JulianDay {
    let day_fraction = (hour as f64 + minute as f64 / 60.0) / 24.0;
    julian_day_number(year, month, day) as f64 + day_fraction - 0.5
}

pub fn days_since_j2000(julian_day: JulianDay) -> f64 {
    julian_day - J2000
}

/// Sun longitude from its mean longitude and the equation of center.
pub fn sun_longitude(d: f64) -> f64 {
    let mean_longitude = (280.4606184 + 0.9856473662 * d) % 360.0;
    let anomaly = ((357.5291092 + 0.9856002585 * d) % 360.0).to_radians();
    (mean_longitude + 1.9148 * anomaly.sin() + 0.02 * (2.0 * anomaly).sin()) % 360.0
}

pub fn moon_longitude(d: f64) -> f64 {
    let mean_longitude = (218.316 + 13.176396 * d) % 360.0;
    let anomaly = ((134.963 + 13.064993 * d) % 360.0).to_radians();
    (mean_longitude + 6.289 * anomaly.sin()) % 360.0
}

/// Circular-orbit longitude for the planets in the mean motion table;
/// `None` for bodies outside it.
pub fn mean_longitude(planet: CelestialBody, d: f64) -> Option<f64> {
    MEAN_MOTIONS
        .iter()
        .find(|&&(body, _, _)| body == planet)
        .map(|&(_, epoch_longitude, daily_motion)| circular_longitude(epoch_longitude, daily_motion, d))
}

fn circular_longitude(epoch_longitude: f64, daily_motion: f64, d: f64) -> f64 {
    (epoch_longitude + daily_motion * d) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    #[test]
    fn test_julian_day_number() {
        assert_eq!(julian_day_number(2000, 1, 1), 2451545);
        assert_eq!(julian_day_number(1970, 1, 1), 2440588);
        // leap day and the day after
        assert_eq!(julian_day_number(2000, 2, 29) + 1, julian_day_number(2000, 3, 1));
        // 1900 is not a leap year
        assert_eq!(julian_day_number(1900, 2, 28) + 1, julian_day_number(1900, 3, 1));
        assert_eq!(julian_day_number(1999, 12, 31) + 1, julian_day_number(2000, 1, 1));
    }

    #[test]
    fn test_julian_day_at_j2000() {
        assert_eq!(julian_day(2000, 1, 1, 12, 0), J2000);
        assert_eq!(days_since_j2000(julian_day(2000, 1, 1, 12, 0)), 0.0);
        assert_relative_eq!(julian_day(2000, 1, 1, 0, 0), 2451544.5);
        assert_relative_eq!(julian_day(2000, 1, 1, 18, 30), 2451545.0 + 6.5 / 24.0);
    }

    #[test]
    fn test_sun_at_epoch_applies_equation_of_center() {
        let anomaly = 357.5291092_f64.to_radians();
        let expected = 280.4606184 + 1.9148 * anomaly.sin() + 0.02 * (2.0 * anomaly).sin();
        assert_relative_eq!(sun_longitude(0.0), expected, epsilon = 1e-9);

        let positions = ApproximateEphemeris::new().estimate(2000, 1, 1, 12, 0);
        assert_eq!(positions[0].planet, CelestialBody::Sun);
        assert_relative_eq!(positions[0].degree, expected, epsilon = 1e-9);
        assert_eq!(positions[0].sign, ZodiacSign::Capricorn);
    }

    #[test]
    fn test_moon_and_planets_at_epoch() {
        let moon_anomaly = 134.963_f64.to_radians();
        assert_relative_eq!(moon_longitude(0.0), 218.316 + 6.289 * moon_anomaly.sin(), epsilon = 1e-9);
        assert_eq!(mean_longitude(CelestialBody::Mercury, 0.0), Some(252.251));
        assert_eq!(mean_longitude(CelestialBody::Saturn, 0.0), Some(50.077));
        assert_eq!(mean_longitude(CelestialBody::Sun, 0.0), None);
    }

    #[test]
    fn test_estimate_order_and_shape() {
        let positions = ApproximateEphemeris::new().estimate(1991, 6, 18, 7, 10);
        let names: Vec<CelestialBody> = positions.iter().map(|p| p.planet).collect();
        assert_eq!(
            names,
            vec![
                CelestialBody::Sun,
                CelestialBody::Moon,
                CelestialBody::Mercury,
                CelestialBody::Venus,
                CelestialBody::Mars,
                CelestialBody::Jupiter,
                CelestialBody::Saturn,
                CelestialBody::Ascendant,
            ]
        );
        assert!(positions.iter().all(|p| !p.retrograde));
        // mid June sun is in Gemini
        assert_eq!(positions[0].sign, ZodiacSign::Gemini);
    }

    #[test]
    fn test_degrees_stay_in_range_and_signs_agree() {
        let eph = ApproximateEphemeris::new();
        for (year, month, day, hour, minute) in [
            (1, 1, 1, 0, 0),
            (1600, 2, 29, 23, 59),
            (1899, 12, 31, 6, 15),
            (1970, 1, 1, 0, 0),
            (2000, 1, 1, 12, 0),
            (2024, 2, 29, 12, 30),
            (2999, 7, 4, 18, 45),
        ] {
            for position in eph.estimate(year, month, day, hour, minute) {
                assert!(position.degree >= 0.0 && position.degree < 360.0, "{:?}", position);
                assert_eq!(position.sign_number as f64, (position.degree / 30.0).floor() + 1.0);
                assert_eq!(position.sign, ZodiacSign::from_longitude(position.degree));
            }
        }
    }

    #[test]
    fn test_ascendant_is_quarter_turn_after_sun() {
        let eph = ApproximateEphemeris::new();
        for year in [1850, 1950, 1999, 2000, 2050] {
            let positions = eph.estimate(year, 3, 21, 4, 0);
            let sun = &positions[0];
            let ascendant = &positions[7];
            assert_eq!(ascendant.planet, CelestialBody::Ascendant);
            assert_eq!(ascendant.degree, normalize_degrees(sun.degree + 90.0));
        }
    }

    #[test]
    fn test_estimate_at_matches_estimate() {
        let eph = ApproximateEphemeris::new();
        let date_time = NaiveDate::from_ymd_opt(1991, 6, 18)
            .unwrap()
            .and_hms_opt(7, 10, 0)
            .unwrap();
        assert_eq!(eph.estimate_at(date_time), eph.estimate(1991, 6, 18, 7, 10));
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let eph = ApproximateEphemeris::new();
        assert_eq!(eph.estimate(1984, 11, 5, 22, 1), eph.estimate(1984, 11, 5, 22, 1));
    }
}
