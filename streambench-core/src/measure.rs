//! High-Precision Timing
//!
//! Wall-clock time comes from the monotonic `std::time::Instant`. Alongside
//! it, the raw CPU counter is sampled where one is readable from userspace
//! (RDTSCP on x86_64, CNTVCT_EL0 on AArch64) so reports can show cycles.

use std::time::Duration;

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycles() -> u64 {
    // SAFETY: RDTSCP exists on every x86_64 CPU this crate targets and waits
    // for prior instructions to retire before reading the counter.
    unsafe {
        let mut _aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut _aux)
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycles() -> u64 {
    let cnt: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0 on all AArch64 implementations.
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt, options(nostack, nomem));
    }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn read_cycles() -> u64 {
    0
}

/// Whether cycle deltas carry real data on this platform.
pub const HAS_CYCLE_COUNTER: bool = cfg!(target_arch = "x86_64") || cfg!(target_arch = "aarch64");

/// A point in time, captured as both a monotonic instant and a cycle count
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    instant: std::time::Instant,
    tsc: u64,
}

impl Instant {
    /// Capture the current instant
    #[inline(always)]
    pub fn now() -> Self {
        let tsc = read_cycles();
        Self {
            instant: std::time::Instant::now(),
            tsc,
        }
    }

    /// Wall-clock time since this instant
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.instant.elapsed()
    }

    /// Raw counter value (always 0 without a cycle counter)
    #[inline(always)]
    pub fn cycles(&self) -> u64 {
        self.tsc
    }
}

/// Time and cycles spent in one measured call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    /// Wall-clock nanoseconds
    pub nanos: u64,
    /// Cycle-counter delta
    pub cycles: u64,
}

/// Stopwatch around a single measured call
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start timing
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Read the elapsed time and cycle delta
    #[inline(always)]
    pub fn stop(&self) -> Elapsed {
        let nanos = u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        let cycles = read_cycles().saturating_sub(self.start.cycles());
        Elapsed { nanos, cycles }
    }
}

/// Time one call of `f`, keeping its result out of the optimizer's reach.
#[inline]
pub fn time<T, F>(f: F) -> (T, Elapsed)
where
    F: FnOnce() -> T,
{
    let timer = Timer::start();
    let value = std::hint::black_box(f());
    let elapsed = timer.stop();
    (value, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_elapsed() {
        let start = Instant::now();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(5));
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_timer_measures_sleep() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();

        assert!(elapsed.nanos >= 5_000_000);
        if HAS_CYCLE_COUNTER {
            assert!(elapsed.cycles > 0);
        }
    }

    #[test]
    fn test_time_returns_value() {
        let (sum, elapsed) = time(|| (1..=100u64).sum::<u64>());
        assert_eq!(sum, 5050);
        assert!(elapsed.nanos < 1_000_000_000);
    }
}
