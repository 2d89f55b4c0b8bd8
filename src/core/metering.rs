use crate::core::CoreError;
use crate::enums::measurand_enum_type::MeasurandEnumType;
use crate::enums::reading_context_enum_type::ReadingContextEnumType;
use crate::structures::meter_value_type::MeterValueType;
use crate::structures::sampled_meter_value_type::SampledValueType;
use chrono::{DateTime, Duration, Timelike, Utc};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum MeteringError {
    #[error("no sampler registered for measurand {0}")]
    #[diagnostic()]
    NoSampler(String),
}

impl CoreError for MeteringError {
    fn to_call_error(&self) -> (&'static str, String) {
        ("InternalError", self.to_string())
    }
}

/// Parses a comma-separated list configuration value (e.g. `MeterValuesSampledData`)
/// into the measurands it names, skipping entries that do not match a known
/// `MeasurandEnumType` value rather than failing the whole parse.
pub fn parse_measurand_csl(csl: &str) -> Vec<MeasurandEnumType> {
    csl.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| MeasurandEnumType::try_from(s).ok())
        .collect()
}

/// Produces one sampled value for a measurand. Registered per-measurand against
/// a [`SamplerRegistry`]; the station's platform layer supplies the closures
/// that actually read hardware.
pub type Sampler = Box<dyn Fn() -> f64 + Send + Sync>;

/// Maps a measurand to the callback that samples it. Measurands with no
/// registered sampler are silently skipped when building a reading, since a
/// station need not instrument every measurand a server happens to request.
#[derive(Default)]
pub struct SamplerRegistry {
    samplers: Vec<(MeasurandEnumType, Sampler)>,
}

impl SamplerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, measurand: MeasurandEnumType, sampler: Sampler) {
        self.samplers.retain(|(m, _)| *m != measurand);
        self.samplers.push((measurand, sampler));
    }

    fn sample(&self, measurand: &MeasurandEnumType) -> Option<f64> {
        self.samplers
            .iter()
            .find(|(m, _)| m == measurand)
            .map(|(_, s)| s())
    }

    /// Samples every measurand in `measurands`, tagging each resulting value
    /// with `context`. Measurands with no registered sampler are skipped.
    pub fn read(
        &self,
        measurands: &[MeasurandEnumType],
        context: ReadingContextEnumType,
    ) -> Vec<SampledValueType> {
        measurands
            .iter()
            .filter_map(|m| {
                self.sample(m).map(|value| SampledValueType {
                    value,
                    measurand: Some(m.clone()),
                    context: Some(context.clone()),
                    phase: None,
                    location: None,
                    unit_of_measure: None,
                })
            })
            .collect()
    }
}

/// Buffers meter values collected over the lifetime of one transaction,
/// grouped by reading context so the state machine (C9) can attach the right
/// subset to each outbound event (e.g. only clock/periodic readings go into
/// `TransactionEventRequest::meter_value` for an `Updated` event, while the
/// transaction-begin/end readings are folded into `meterStart`/`meterStop`).
#[derive(Debug, Default)]
pub struct TransactionAccumulator {
    clock_aligned: Vec<MeterValueType>,
    periodic: Vec<MeterValueType>,
    transaction_begin: Option<MeterValueType>,
    transaction_end: Option<MeterValueType>,
}

impl TransactionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: MeterValueType, context: ReadingContextEnumType) {
        match context {
            ReadingContextEnumType::SampleClock => self.clock_aligned.push(value),
            ReadingContextEnumType::SamplePeriodic => self.periodic.push(value),
            ReadingContextEnumType::TransactionBegin => self.transaction_begin = Some(value),
            ReadingContextEnumType::TransactionEnd => self.transaction_end = Some(value),
            _ => self.periodic.push(value),
        }
    }

    /// Whether any periodic/clock-aligned reading is waiting to be drained.
    pub fn has_pending(&self) -> bool {
        !self.clock_aligned.is_empty() || !self.periodic.is_empty()
    }

    /// Drains every buffered periodic/clock-aligned value, for attaching to
    /// an outbound `TransactionEvent`/`MeterValues` and then clearing so the
    /// next event only carries newly-collected readings.
    pub fn drain_pending(&mut self) -> Vec<MeterValueType> {
        let mut drained = Vec::with_capacity(self.clock_aligned.len() + self.periodic.len());
        drained.append(&mut self.clock_aligned);
        drained.append(&mut self.periodic);
        drained
    }

    pub fn transaction_begin(&self) -> Option<&MeterValueType> {
        self.transaction_begin.as_ref()
    }

    pub fn transaction_end(&self) -> Option<&MeterValueType> {
        self.transaction_end.as_ref()
    }

    /// All buffered values including begin/end, for serializing into a
    /// transaction record's stop-tx meter data on durability write-through.
    pub fn all(&self) -> Vec<MeterValueType> {
        let mut values = Vec::new();
        values.extend(self.transaction_begin.clone());
        values.extend(self.clock_aligned.iter().cloned());
        values.extend(self.periodic.iter().cloned());
        values.extend(self.transaction_end.clone());
        values
    }
}

/// Drives periodic and clock-aligned sampling. `MeterValueSampleInterval`
/// (periodic) fires on elapsed monotonic time from C1, the way any other
/// interval timer in this crate does. `ClockAlignedDataInterval` is a
/// different kind of interval by design: the server wants samples that land
/// on wall-clock boundaries (every interval seconds since UTC midnight) so
/// that readings from independently-clocked stations line up, which a
/// monotonic elapsed-time check can never guarantee. `MeterValueSampleInterval`
/// and `ClockAlignedDataInterval` are read from the configuration store (C3)
/// by the caller and passed in here; a zero interval disables that sampling
/// kind (`ClockAlignedDataInterval` defaults to 0, i.e. off).
#[derive(Debug, Default)]
pub struct SampleScheduler {
    periodic_interval_s: u64,
    clock_aligned_interval_s: u64,
    last_periodic_ms: u64,
    last_clock_aligned_boundary: Option<DateTime<Utc>>,
}

impl SampleScheduler {
    pub fn new(periodic_interval_s: u64, clock_aligned_interval_s: u64) -> Self {
        Self {
            periodic_interval_s,
            clock_aligned_interval_s,
            last_periodic_ms: 0,
            last_clock_aligned_boundary: None,
        }
    }

    pub fn reset(&mut self, now_monotonic_ms: u64) {
        self.last_periodic_ms = now_monotonic_ms;
        self.last_clock_aligned_boundary = None;
    }

    /// The most recent wall-clock instant that is both `<= now` and an exact
    /// multiple of `clock_aligned_interval_s` seconds past UTC midnight on
    /// `now`'s date.
    fn aligned_boundary(&self, now_wall: DateTime<Utc>) -> DateTime<Utc> {
        let secs_since_midnight = now_wall.num_seconds_from_midnight() as i64;
        let interval = self.clock_aligned_interval_s as i64;
        let boundary_secs = (secs_since_midnight / interval) * interval;
        now_wall - Duration::seconds(secs_since_midnight - boundary_secs)
    }

    /// Returns which sampling kinds are due. Periodic sampling advances off
    /// `now_monotonic_ms` (C1); clock-aligned sampling advances off
    /// `now_wall`, firing once per crossed interval boundary rather than once
    /// per elapsed interval since the last fire.
    pub fn poll(&mut self, now_monotonic_ms: u64, now_wall: DateTime<Utc>) -> Vec<ReadingContextEnumType> {
        let mut due = Vec::new();

        if self.periodic_interval_s > 0
            && now_monotonic_ms.saturating_sub(self.last_periodic_ms) >= self.periodic_interval_s * 1000
        {
            self.last_periodic_ms = now_monotonic_ms;
            due.push(ReadingContextEnumType::SamplePeriodic);
        }

        if self.clock_aligned_interval_s > 0 {
            let boundary = self.aligned_boundary(now_wall);
            if self.last_clock_aligned_boundary != Some(boundary) {
                self.last_clock_aligned_boundary = Some(boundary);
                due.push(ReadingContextEnumType::SampleClock);
            }
        }

        due
    }
}
