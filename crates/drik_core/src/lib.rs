//! Geocentric ephemeris engine.
//!
//! [`Engine`] answers "where is this body, seen from Earth, at this Julian
//! Day" for the Sun, Moon, and five classical planets. Planets go through
//! the heliocentric VSOP87D series and a vector subtraction of Earth's
//! position; the Moon comes straight from its own geocentric series.
//!
//! Longitudes are geometric and referred to the mean equinox of date.

pub mod error;
pub mod geocentric;

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use drik_frames::{SphericalCoords, wrap_180};
use drik_series::{PeriodicTermTable, SeriesBody, VSOP87D, moon_position, validate_lunar_terms};
use drik_time::{DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, J2000_JD};
use log::{debug, info};

pub use error::EngineError;
pub use geocentric::{SUN_AT_ORIGIN, heliocentric_to_geocentric};

/// Kilometres per astronomical unit (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Engine configuration used at startup time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Compute daily longitude speed alongside each position.
    pub compute_speed: bool,
    /// Half-width of the central difference used for speed, in days.
    pub speed_step_days: f64,
    /// Queries further than this from J2000 (Julian centuries) are rejected.
    pub max_centuries: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            compute_speed: true,
            speed_step_days: 0.5,
            max_centuries: 40.0,
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<(), EngineError> {
        if !self.speed_step_days.is_finite() || self.speed_step_days <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "speed_step_days must be positive and finite",
            ));
        }
        if self.speed_step_days > 5.0 {
            return Err(EngineError::InvalidConfig(
                "speed_step_days must not exceed 5 days",
            ));
        }
        if !self.max_centuries.is_finite() || self.max_centuries <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "max_centuries must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// Bodies the engine can place.
///
/// Computed points (lunar nodes, ascendant) are not bodies; they live in
/// `drik_vedic_base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// The heliocentric series for this body, if it has one.
    ///
    /// The Sun sits at the heliocentric origin and the Moon has its own
    /// geocentric theory, so both return `None`.
    pub const fn series_body(self) -> Option<SeriesBody> {
        match self {
            Self::Sun | Self::Moon => None,
            Self::Mercury => Some(SeriesBody::Mercury),
            Self::Venus => Some(SeriesBody::Venus),
            Self::Mars => Some(SeriesBody::Mars),
            Self::Jupiter => Some(SeriesBody::Jupiter),
            Self::Saturn => Some(SeriesBody::Saturn),
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Single ephemeris request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub body: Body,
    pub jd: f64,
}

/// Geocentric ecliptic position, tropical, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees. `None` for the Moon, whose latitude series
    /// is not carried.
    pub lat_deg: Option<f64>,
    /// Distance from Earth's center in AU.
    pub distance_au: f64,
    /// Longitude speed in degrees per day, when enabled in [`EngineConfig`].
    pub speed_deg_per_day: Option<f64>,
}

impl EclipticPosition {
    /// Apparent backward motion along the ecliptic.
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day.is_some_and(|s| s < 0.0)
    }
}

/// Telemetry from a query or batch of queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryStats {
    pub evaluations: u32,
    pub cache_hits: u32,
}

/// What a cached evaluation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Source {
    Heliocentric(SeriesBody),
    Moon,
}

/// Per-request memoization context.
///
/// Created at the start of each query/batch, dropped at the end. Keys
/// use `jd.to_bits()`: within one request every epoch comes from the
/// same arithmetic on the same input, so equal epochs are bit-identical.
struct ComputationContext {
    cache: HashMap<(Source, u64), SphericalCoords>,
    evaluations: u32,
    cache_hits: u32,
}

impl ComputationContext {
    fn new() -> Self {
        Self {
            cache: HashMap::with_capacity(16),
            evaluations: 0,
            cache_hits: 0,
        }
    }

    fn stats(&self) -> QueryStats {
        QueryStats {
            evaluations: self.evaluations,
            cache_hits: self.cache_hits,
        }
    }
}

/// Core query engine.
///
/// `Engine` is [`Send`] + [`Sync`]: it holds only a reference to the
/// static term tables and its config, so it can be shared across threads
/// via `Arc<Engine>` or a `static`. Each query creates its own short-lived
/// [`ComputationContext`] for memoization, so there is no cross-request
/// locking.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    table: &'static PeriodicTermTable,
}

impl Engine {
    /// Create an engine over the built-in VSOP87D table.
    ///
    /// Fails with [`EngineError::MalformedReferenceData`] if any table
    /// fails its integrity check.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_table(config, &VSOP87D)
    }

    /// Create an engine over a caller-supplied planetary table.
    pub fn with_table(
        config: EngineConfig,
        table: &'static PeriodicTermTable,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        table.validate()?;
        validate_lunar_terms()?;
        info!(
            "ephemeris engine ready: {} planetary terms, speed {}",
            table.term_count(),
            if config.compute_speed { "on" } else { "off" }
        );
        Ok(Self { config, table })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Heliocentric position of a series body, memoized in `ctx`.
    fn heliocentric(
        &self,
        body: SeriesBody,
        jd: f64,
        ctx: &mut ComputationContext,
    ) -> Result<SphericalCoords, EngineError> {
        let key = (Source::Heliocentric(body), jd.to_bits());
        if let Some(cached) = ctx.cache.get(&key) {
            ctx.cache_hits += 1;
            return Ok(*cached);
        }
        let tau = (jd - J2000_JD) / DAYS_PER_MILLENNIUM;
        let pos = self
            .table
            .heliocentric(body, tau)
            .ok_or_else(|| EngineError::Internal(format!("no series for {body}")))?;
        ctx.evaluations += 1;
        ctx.cache.insert(key, pos);
        Ok(pos)
    }

    fn moon(&self, jd: f64, ctx: &mut ComputationContext) -> SphericalCoords {
        let key = (Source::Moon, jd.to_bits());
        if let Some(cached) = ctx.cache.get(&key) {
            ctx.cache_hits += 1;
            return *cached;
        }
        let p = moon_position((jd - J2000_JD) / DAYS_PER_CENTURY);
        let pos = SphericalCoords {
            lon_deg: p.longitude_deg,
            lat_deg: 0.0,
            distance_au: p.distance_km / AU_KM,
        };
        ctx.evaluations += 1;
        ctx.cache.insert(key, pos);
        pos
    }

    /// Geocentric coordinates of `body` at one epoch.
    fn geocentric_at(
        &self,
        body: Body,
        jd: f64,
        ctx: &mut ComputationContext,
    ) -> Result<SphericalCoords, EngineError> {
        match (body, body.series_body()) {
            (Body::Moon, _) => Ok(self.moon(jd, ctx)),
            (_, Some(series)) => {
                let target = self.heliocentric(series, jd, ctx)?;
                let earth = self.heliocentric(SeriesBody::Earth, jd, ctx)?;
                Ok(heliocentric_to_geocentric(&target, &earth))
            }
            (_, None) => {
                let earth = self.heliocentric(SeriesBody::Earth, jd, ctx)?;
                Ok(heliocentric_to_geocentric(&SUN_AT_ORIGIN, &earth))
            }
        }
    }

    /// Evaluate a query, returning the body's geocentric position.
    pub fn query(&self, query: Query) -> Result<EclipticPosition, EngineError> {
        let mut ctx = ComputationContext::new();
        self.query_with_ctx(query, &mut ctx)
    }

    /// Evaluate a query and return telemetry alongside the result.
    pub fn query_with_stats(
        &self,
        query: Query,
    ) -> Result<(EclipticPosition, QueryStats), EngineError> {
        let mut ctx = ComputationContext::new();
        let pos = self.query_with_ctx(query, &mut ctx)?;
        Ok((pos, ctx.stats()))
    }

    fn query_with_ctx(
        &self,
        query: Query,
        ctx: &mut ComputationContext,
    ) -> Result<EclipticPosition, EngineError> {
        if !query.jd.is_finite() {
            return Err(EngineError::InvalidQuery("jd must be finite"));
        }
        let t = (query.jd - J2000_JD) / DAYS_PER_CENTURY;
        if t.abs() > self.config.max_centuries {
            return Err(EngineError::EpochOutOfRange { jd: query.jd });
        }

        let at = self.geocentric_at(query.body, query.jd, ctx)?;

        // Central difference; wrap_180 keeps the step across 0°/360° small.
        let speed_deg_per_day = if self.config.compute_speed {
            let h = self.config.speed_step_days;
            let before = self.geocentric_at(query.body, query.jd - h, ctx)?;
            let after = self.geocentric_at(query.body, query.jd + h, ctx)?;
            Some(wrap_180(after.lon_deg - before.lon_deg) / (2.0 * h))
        } else {
            None
        };

        debug!(
            "{} at JD {:.6}: lon {:.6}°, r {:.6} AU",
            query.body, query.jd, at.lon_deg, at.distance_au
        );

        Ok(EclipticPosition {
            lon_deg: at.lon_deg,
            lat_deg: (query.body != Body::Moon).then_some(at.lat_deg),
            distance_au: at.distance_au,
            speed_deg_per_day,
        })
    }

    /// Evaluate multiple queries, sharing memoization across queries at the
    /// same epoch. Returns results in input order.
    pub fn query_batch(&self, queries: &[Query]) -> Vec<Result<EclipticPosition, EngineError>> {
        self.query_batch_with_stats(queries).0
    }

    /// Evaluate multiple queries with telemetry.
    ///
    /// Queries are grouped by epoch; each group shares one context, so
    /// Earth's heliocentric position is evaluated once per distinct JD.
    pub fn query_batch_with_stats(
        &self,
        queries: &[Query],
    ) -> (Vec<Result<EclipticPosition, EngineError>>, QueryStats) {
        let mut results: Vec<Result<EclipticPosition, EngineError>> =
            Vec::with_capacity(queries.len());
        results.resize_with(queries.len(), || {
            Err(EngineError::Internal("unprocessed".into()))
        });

        let mut indexed: Vec<(u64, usize)> = queries
            .iter()
            .enumerate()
            .map(|(i, q)| (q.jd.to_bits(), i))
            .collect();
        indexed.sort_unstable_by_key(|(bits, _)| *bits);

        let mut total_stats = QueryStats::default();

        let mut group_start = 0;
        while group_start < indexed.len() {
            let jd_bits = indexed[group_start].0;
            let mut group_end = group_start + 1;
            while group_end < indexed.len() && indexed[group_end].0 == jd_bits {
                group_end += 1;
            }

            let mut ctx = ComputationContext::new();
            for &(_, idx) in &indexed[group_start..group_end] {
                results[idx] = self.query_with_ctx(queries[idx], &mut ctx);
            }

            let group_stats = ctx.stats();
            total_stats.evaluations += group_stats.evaluations;
            total_stats.cache_hits += group_stats.cache_hits;

            group_start = group_end;
        }

        (results, total_stats)
    }
}
