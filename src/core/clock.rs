use chrono::{DateTime, TimeZone, Utc};

/// Wall-clock time before the station has ever synchronized with a server,
/// e.g. via a BootNotification response's `currentTime`. Records written with
/// this timestamp are "pre-clock" and cannot later be time-adjusted.
pub fn pre_clock_sentinel() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
}

/// A synchronization point: the monotonic tick count and wall-clock time that
/// were true at the moment the station last learned the real time.
#[derive(Debug, Clone, Copy)]
struct SyncPoint {
    tick_ms_at_sync: u64,
    wall_time_at_sync: DateTime<Utc>,
}

/// Wall-clock source with pre-boot adjustment, backed by a monotonic ms
/// counter advanced externally by the `loop()` driver (C1).
///
/// Embedded stations typically have no battery-backed RTC: wall time is
/// reconstructed from a monotonic tick count plus the most recent
/// synchronization point learned from the server.
#[derive(Debug)]
pub struct Clock {
    boot_number: u64,
    monotonic_ms: u64,
    sync: Option<SyncPoint>,
}

impl Clock {
    pub fn new(boot_number: u64) -> Self {
        Self {
            boot_number,
            monotonic_ms: 0,
            sync: None,
        }
    }

    /// The boot counter value for this run, incremented by the caller on every
    /// start-up and persisted as a configuration variable.
    pub fn boot_number(&self) -> u64 {
        self.boot_number
    }

    /// Advance the monotonic counter by `elapsed_ms`. Called once per tick by
    /// the outer driver; never goes backwards.
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.monotonic_ms = self.monotonic_ms.saturating_add(elapsed_ms);
    }

    pub fn monotonic_ms(&self) -> u64 {
        self.monotonic_ms
    }

    /// Record that `wall_time` is the real time right now, establishing (or
    /// re-establishing) the sync point all future `now()` calls are derived
    /// from.
    pub fn synchronize(&mut self, wall_time: DateTime<Utc>) {
        self.sync = Some(SyncPoint {
            tick_ms_at_sync: self.monotonic_ms,
            wall_time_at_sync: wall_time,
        });
    }

    pub fn is_synchronized(&self) -> bool {
        self.sync.is_some()
    }

    /// The station's current best estimate of wall-clock time. Returns
    /// [`pre_clock_sentinel`] if the clock has never been synchronized.
    pub fn now(&self) -> DateTime<Utc> {
        match self.sync {
            None => pre_clock_sentinel(),
            Some(sync) => {
                let delta_ms = self.monotonic_ms.saturating_sub(sync.tick_ms_at_sync) as i64;
                sync.wall_time_at_sync + chrono::Duration::milliseconds(delta_ms)
            }
        }
    }

    /// True if `timestamp` was recorded before this clock was ever
    /// synchronized in any boot (i.e. it is the sentinel value, or predates
    /// it). Used to decide whether a stale transaction record can be
    /// time-adjusted on restart.
    pub fn is_pre_clock(timestamp: DateTime<Utc>) -> bool {
        timestamp <= pre_clock_sentinel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsynchronized_clock_reads_sentinel() {
        let clock = Clock::new(1);
        assert_eq!(clock.now(), pre_clock_sentinel());
        assert!(!clock.is_synchronized());
    }

    #[test]
    fn synchronize_then_advance_tracks_elapsed_time() {
        let mut clock = Clock::new(1);
        let t0 = Utc.with_ymd_and_hms(2026, 7, 28, 12, 0, 0).unwrap();
        clock.synchronize(t0);
        clock.tick(1_500);
        assert_eq!(clock.now(), t0 + chrono::Duration::milliseconds(1_500));
    }

    #[test]
    fn resynchronize_rebases_the_sync_point() {
        let mut clock = Clock::new(1);
        let t0 = Utc.with_ymd_and_hms(2026, 7, 28, 12, 0, 0).unwrap();
        clock.synchronize(t0);
        clock.tick(10_000);

        let t1 = Utc.with_ymd_and_hms(2026, 7, 28, 13, 0, 0).unwrap();
        clock.synchronize(t1);
        clock.tick(2_000);
        assert_eq!(clock.now(), t1 + chrono::Duration::milliseconds(2_000));
    }

    #[test]
    fn monotonic_counter_never_goes_backwards() {
        let mut clock = Clock::new(1);
        clock.tick(100);
        clock.tick(50);
        assert_eq!(clock.monotonic_ms(), 150);
    }

    #[test]
    fn pre_clock_detection() {
        assert!(Clock::is_pre_clock(pre_clock_sentinel()));
        assert!(!Clock::is_pre_clock(
            Utc.with_ymd_and_hms(2026, 7, 28, 12, 0, 0).unwrap()
        ));
    }
}
