//! Choropleth aggregation and colouring for the population map.
//!
//! The filtered rows are grouped by country (max population, max land
//! area), placed via [`geo_registry`](crate::core::geo_registry), and
//! coloured on the Viridis scale by population.

use std::collections::BTreeMap;

use crate::core::country_record::CountryRecord;
use crate::core::geo_registry;
use crate::util::error::{PopDashError, Result};

/// Viridis colour stops, evenly spaced from 0.0 to 1.0.
const VIRIDIS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

/// One aggregated map row per country.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MapAggregate {
    pub country: String,
    pub pop2023: f64,
    pub land_area_km: f64,
}

/// A located and coloured map region.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRegion {
    pub country: String,
    pub iso3: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub pop2023: f64,
    pub land_area_km: f64,
    /// Fill colour as RGB.
    pub color: [u8; 3],
}

/// Group rows by country, keeping the max population and max land area.
/// Output is ordered by country name.
pub fn aggregate<'a, I>(rows: I) -> Vec<MapAggregate>
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    let mut groups: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for row in rows {
        let slot = groups
            .entry(row.country.as_str())
            .or_insert((f64::NEG_INFINITY, f64::NEG_INFINITY));
        slot.0 = slot.0.max(row.pop2023);
        slot.1 = slot.1.max(row.land_area_km);
    }
    groups
        .into_iter()
        .map(|(country, (pop2023, land_area_km))| MapAggregate {
            country: country.to_owned(),
            pop2023,
            land_area_km,
        })
        .collect()
}

/// Value range used to normalise the colour scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    pub min: f64,
    pub max: f64,
}

impl ColorRange {
    /// Range spanning `values`, or `None` if there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self { min: v, max: v }),
            Some(r) => Some(Self {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    /// Position of `value` in the range, clamped to `0.0..=1.0`.
    /// A degenerate range maps everything to the middle of the scale.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 || !span.is_finite() {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Sample the Viridis scale at `t` in `0.0..=1.0`.
pub fn viridis(t: f64) -> [u8; 3] {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(VIRIDIS.len() - 1);
    let frac = scaled - lo as f64;

    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        let a = VIRIDIS[lo][i] as f64;
        let b = VIRIDIS[hi][i] as f64;
        *channel = (a + (b - a) * frac).round() as u8;
    }
    out
}

/// Resolve every aggregate in the registry and colour it by population.
///
/// # Errors
/// [`PopDashError::UnknownCountry`] for the first country with no registry
/// entry.
pub fn locate(aggregates: &[MapAggregate]) -> Result<Vec<MapRegion>> {
    let range = ColorRange::from_values(aggregates.iter().map(|a| a.pop2023));
    aggregates
        .iter()
        .map(|agg| {
            let geo = geo_registry::lookup(&agg.country)
                .ok_or_else(|| PopDashError::UnknownCountry(agg.country.clone()))?;
            let t = range.map(|r| r.normalize(agg.pop2023)).unwrap_or(0.5);
            Ok(MapRegion {
                country: agg.country.clone(),
                iso3: geo.iso3,
                lat: geo.lat,
                lon: geo.lon,
                pop2023: agg.pop2023,
                land_area_km: agg.land_area_km,
                color: viridis(t),
            })
        })
        .collect()
}
