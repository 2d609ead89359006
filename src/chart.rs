use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use super::*;

/// Where the planet positions of a chart came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSource {
    Api,
    Approximate,
}

/// A birth instant expressed in universal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthMoment {
    pub date_time: NaiveDateTime,
}

impl BirthMoment {
    pub fn new(date_time: NaiveDateTime) -> Self {
        BirthMoment { date_time }
    }

    /// Parses `YYYY-MM-DD` and `HH:MM` wall-clock values and shifts them to
    /// universal time using an offset in hours east of Greenwich.
    pub fn from_local(date: &str, time: &str, utc_offset_hours: f64) -> Result<Self, ChartError> {
        let date_part = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ChartError::InvalidDate(date.to_string()))?;
        let time_part = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|_| ChartError::InvalidTime(time.to_string()))?;

        if !utc_offset_hours.is_finite() {
            return Err(ChartError::InvalidOffset(utc_offset_hours));
        }
        let offset = FixedOffset::east_opt((utc_offset_hours * 3600.0).round() as i32)
            .ok_or(ChartError::InvalidOffset(utc_offset_hours))?;
        let local = offset
            .from_local_datetime(&date_part.and_time(time_part))
            .single()
            .ok_or(ChartError::InvalidOffset(utc_offset_hours))?;

        Ok(BirthMoment::new(local.naive_utc()))
    }
}

/// Source of planet positions for a birth moment.
pub trait Ephemeris {
    fn planet_positions(&self, moment: &BirthMoment) -> Result<Vec<PlanetPosition>, ChartError>;
}

impl Ephemeris for ApproximateEphemeris {
    fn planet_positions(&self, moment: &BirthMoment) -> Result<Vec<PlanetPosition>, ChartError> {
        Ok(self.estimate_at(moment.date_time))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub planets: Vec<PlanetPosition>,
    #[serde(serialize_with = "sign_or_unknown")]
    pub sun_sign: Option<ZodiacSign>,
    #[serde(serialize_with = "sign_or_unknown")]
    pub moon_sign: Option<ZodiacSign>,
    #[serde(serialize_with = "sign_or_unknown")]
    pub ascendant: Option<ZodiacSign>,
    pub source: ChartSource,
}

impl ChartData {
    pub fn from_planets(planets: Vec<PlanetPosition>, source: ChartSource) -> Self {
        let sign_of = |body: CelestialBody| planets.iter().find(|p| p.planet == body).map(|p| p.sign);
        let sun_sign = sign_of(CelestialBody::Sun);
        let moon_sign = sign_of(CelestialBody::Moon);
        let ascendant = sign_of(CelestialBody::Ascendant);
        ChartData {
            planets,
            sun_sign,
            moon_sign,
            ascendant,
            source,
        }
    }

    /// Mode of the sun sign, D Dorian when the chart has no Sun.
    pub fn musical_mode(&self) -> &'static str {
        self.sun_sign.map(|sign| sign.musical_mode()).unwrap_or("D Dorian")
    }
}

fn sign_or_unknown<S: Serializer>(sign: &Option<ZodiacSign>, serializer: S) -> Result<S::Ok, S::Error> {
    match sign {
        Some(sign) => serializer.collect_str(sign),
        None => serializer.serialize_str("Unknown"),
    }
}

/// Builds a chart from `primary`, falling back to the approximation when it
/// is absent, fails, or returns no positions.
pub fn calculate_chart(primary: Option<&dyn Ephemeris>, moment: &BirthMoment) -> ChartData {
    if let Some(ephemeris) = primary {
        match ephemeris.planet_positions(moment) {
            Ok(planets) if !planets.is_empty() => {
                debug!(count = planets.len(), "using primary ephemeris positions");
                return ChartData::from_planets(planets, ChartSource::Api);
            }
            Ok(_) => warn!("primary ephemeris returned no positions, using approximation"),
            Err(e) => warn!(error = %e, "primary ephemeris failed, using approximation"),
        }
    }

    let planets = ApproximateEphemeris::new().estimate_at(moment.date_time);
    ChartData::from_planets(planets, ChartSource::Approximate)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl Ephemeris for Failing {
        fn planet_positions(&self, _moment: &BirthMoment) -> Result<Vec<PlanetPosition>, ChartError> {
            Err(ChartError::Ephemeris("503 Service Unavailable".to_string()))
        }
    }

    struct Empty;

    impl Ephemeris for Empty {
        fn planet_positions(&self, _moment: &BirthMoment) -> Result<Vec<PlanetPosition>, ChartError> {
            Ok(Vec::new())
        }
    }

    struct Fixed;

    impl Ephemeris for Fixed {
        fn planet_positions(&self, _moment: &BirthMoment) -> Result<Vec<PlanetPosition>, ChartError> {
            Ok(vec![
                PlanetPosition::new(CelestialBody::Sun, 125.0, false),
                PlanetPosition::new(CelestialBody::Moon, 200.0, false),
                PlanetPosition::new(CelestialBody::Pluto, 230.0, true),
            ])
        }
    }

    fn moment() -> BirthMoment {
        BirthMoment::from_local("1991-06-18", "07:10", 0.0).unwrap()
    }

    #[test]
    fn test_from_local_shifts_to_universal_time() {
        let moment = BirthMoment::from_local("1991-06-18", "07:10", 5.5).unwrap();
        let expected = NaiveDate::from_ymd_opt(1991, 6, 18)
            .unwrap()
            .and_hms_opt(1, 40, 0)
            .unwrap();
        assert_eq!(moment.date_time, expected);

        let west = BirthMoment::from_local("2000-12-31", "22:00", -5.0).unwrap();
        assert_eq!(west.date_time.date(), NaiveDate::from_ymd_opt(2001, 1, 1).unwrap());
    }

    #[test]
    fn test_from_local_rejects_bad_input() {
        assert_eq!(
            BirthMoment::from_local("1991-02-30", "07:10", 0.0),
            Err(ChartError::InvalidDate("1991-02-30".to_string()))
        );
        assert_eq!(
            BirthMoment::from_local("1991-06-18", "25:00", 0.0),
            Err(ChartError::InvalidTime("25:00".to_string()))
        );
        assert_eq!(
            BirthMoment::from_local("1991-06-18", "07:10", 30.0),
            Err(ChartError::InvalidOffset(30.0))
        );
    }

    #[test]
    fn test_falls_back_when_primary_fails_or_is_empty() {
        let failing = Failing;
        let empty = Empty;
        for primary in [Some(&failing as &dyn Ephemeris), Some(&empty as &dyn Ephemeris), None] {
            let chart = calculate_chart(primary, &moment());
            assert_eq!(chart.source, ChartSource::Approximate);
            assert_eq!(chart.planets.len(), 8);
            assert_eq!(chart.sun_sign, Some(ZodiacSign::Gemini));
            assert_eq!(chart.planets, ApproximateEphemeris::new().estimate(1991, 6, 18, 7, 10));
        }
    }

    #[test]
    fn test_uses_primary_positions() {
        let chart = calculate_chart(Some(&Fixed as &dyn Ephemeris), &moment());
        assert_eq!(chart.source, ChartSource::Api);
        assert_eq!(chart.sun_sign, Some(ZodiacSign::Leo));
        assert_eq!(chart.moon_sign, Some(ZodiacSign::Libra));
        assert_eq!(chart.ascendant, None);
        assert!(chart.planets[2].retrograde);
        assert_eq!(chart.musical_mode(), "D Lydian");
    }

    #[test]
    fn test_missing_signs_serialize_as_unknown() {
        let chart = ChartData::from_planets(Vec::new(), ChartSource::Api);
        assert_eq!(chart.musical_mode(), "D Dorian");
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["sunSign"], "Unknown");
        assert_eq!(json["ascendant"], "Unknown");
        assert_eq!(json["source"], "api");
    }
}
