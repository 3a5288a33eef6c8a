//! Performance monitoring utilities.
//!
//! Pointer-move recomputation runs at input rate and must stay well inside
//! a frame for the box to track the pointer. This module provides the
//! instrumentation to verify that:
//!
//! - **Scoped timers**: RAII-style timing for code blocks
//! - **Dispatch timing**: rolling statistics over pointer-move dispatches
//! - **Aggregated statistics**: per-operation timing windows
//! - **Conditional compilation**: zero-cost when profiling disabled
//!
//! ## Usage
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! resizable = { features = ["profiling"] }
//! ```
//!
//! Use the profiling macros for zero-cost instrumentation:
//! ```ignore
//! use resizable::profile_scope;
//!
//! fn recompute() {
//!     profile_scope!("recompute");
//!     // ... work ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

// ============================================================================
// Constants
// ============================================================================

/// Budget for a single pointer-move dispatch in milliseconds. Half a 60 FPS
/// frame: recomputation plus the host's re-render must fit in one frame.
pub const TARGET_DISPATCH_MS: f64 = 8.0;

/// Number of dispatch samples to keep for rolling averages
const SAMPLE_COUNT: usize = 120;

/// Threshold multiplier for warning (2.0 = warn past 2x target)
const WARN_THRESHOLD: f64 = 2.0;

/// Number of samples to keep for operation statistics
const STATS_SAMPLE_COUNT: usize = 100;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Global counter for unique timer IDs
static TIMER_COUNTER: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// use resizable::profile_scope;
///
/// fn handle_pointer_move() {
///     profile_scope!("handle_pointer_move");
///     // ... recomputation ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Profile the current function. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::profile_scope!(concat!(module_path!(), "::", $crate::function_name!()));
    };
}

/// Helper macro to get the enclosing function name.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // Strip the trailing "::f" from the function name
        &name[..name.len() - 3]
    }};
}

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Dispatch Monitor
// ============================================================================

/// Rolling statistics over pointer-move dispatches and named operations.
/// Hosts that want live numbers wrap their dispatch in
/// `begin_dispatch`/`end_dispatch`.
pub struct DispatchMonitor {
    /// Recent dispatch times in milliseconds
    dispatch_times: VecDeque<f64>,
    /// When the current dispatch started
    dispatch_start: Option<Instant>,
    /// Count of dispatches that exceeded the warning threshold
    slow_dispatch_count: u64,
    /// Total dispatches tracked
    total_dispatches: u64,
    /// Per-operation timing statistics
    operation_stats: HashMap<&'static str, OperationStats>,
}

/// Statistics for a specific operation type.
#[derive(Debug, Clone)]
pub struct OperationStats {
    /// Recent timing samples in milliseconds
    samples: VecDeque<f64>,
    /// Total invocation count
    count: u64,
    /// Minimum observed time
    min_ms: f64,
    /// Maximum observed time
    max_ms: f64,
    /// Running sum for average calculation
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            min_ms: f64::MAX,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    /// Record a new timing sample.
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.min_ms = self.min_ms.min(ms);
        self.max_ms = self.max_ms.max(ms);
    }

    /// Get the average time over recent samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// Get the p95 (95th percentile) time.
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted.get(idx.min(sorted.len() - 1)).copied().unwrap_or(0.0)
    }

    /// Maximum observed time in milliseconds.
    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }

    /// Total invocation count.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Default for DispatchMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchMonitor {
    /// Create a new dispatch monitor.
    pub fn new() -> Self {
        Self {
            dispatch_times: VecDeque::with_capacity(SAMPLE_COUNT),
            dispatch_start: None,
            slow_dispatch_count: 0,
            total_dispatches: 0,
            operation_stats: HashMap::new(),
        }
    }

    /// Mark the start of a pointer-move dispatch.
    pub fn begin_dispatch(&mut self) {
        self.dispatch_start = Some(Instant::now());
    }

    /// Mark the end of a dispatch and record timing.
    /// Returns the dispatch time in milliseconds.
    pub fn end_dispatch(&mut self) -> Option<f64> {
        let start = self.dispatch_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;

        if self.dispatch_times.len() >= SAMPLE_COUNT {
            self.dispatch_times.pop_front();
        }
        self.dispatch_times.push_back(ms);
        self.total_dispatches += 1;

        if ms > TARGET_DISPATCH_MS * WARN_THRESHOLD {
            self.slow_dispatch_count += 1;
            warn!(
                dispatch_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_DISPATCH_MS),
                "Slow pointer-move dispatch"
            );
        }

        Some(ms)
    }

    /// Record an operation timing.
    pub fn record_operation(&mut self, name: &'static str, elapsed_ms: f64) {
        self.operation_stats
            .entry(name)
            .or_default()
            .record(elapsed_ms);
    }

    /// Get the average dispatch time over recent samples.
    pub fn average_dispatch_time(&self) -> f64 {
        if self.dispatch_times.is_empty() {
            return 0.0;
        }
        self.dispatch_times.iter().sum::<f64>() / self.dispatch_times.len() as f64
    }

    /// Get the maximum dispatch time in recent samples.
    pub fn max_dispatch_time(&self) -> f64 {
        self.dispatch_times.iter().copied().fold(0.0, f64::max)
    }

    /// Get the percentage of dispatches that were slow.
    pub fn slow_dispatch_percentage(&self) -> f64 {
        if self.total_dispatches == 0 {
            return 0.0;
        }
        (self.slow_dispatch_count as f64 / self.total_dispatches as f64) * 100.0
    }

    /// Get statistics for a specific operation.
    pub fn get_operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.operation_stats.get(name)
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        self.dispatch_times.clear();
        self.dispatch_start = None;
        self.slow_dispatch_count = 0;
        self.total_dispatches = 0;
        self.operation_stats.clear();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs its duration on drop when it exceeds the
/// configured threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    #[allow(dead_code)]
    timer_id: u64,
    #[cfg(feature = "profiling")]
    depth: usize,
}

// Thread-local depth tracking for hierarchical profiling
#[cfg(feature = "profiling")]
thread_local! {
    static CURRENT_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        let timer_id = TIMER_COUNTER.fetch_add(1, Ordering::Relaxed);

        #[cfg(feature = "profiling")]
        let depth = CURRENT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });

        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            timer_id,
            #[cfg(feature = "profiling")]
            depth,
        }
    }

    /// Create a timer with the default threshold (the dispatch budget).
    pub fn with_default_threshold(name: &'static str) -> Self {
        Self::new(name, TARGET_DISPATCH_MS)
    }

    /// Create a timer for profiling (lower threshold, 1ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Get the timer's name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;

        #[cfg(feature = "profiling")]
        {
            CURRENT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));

            if is_profiling_enabled() && elapsed_ms > self.threshold_ms {
                let indent = "  ".repeat(self.depth);
                trace!("{}[PERF] {}: {:.2}ms", indent, self.name, elapsed_ms);
            }
        }

        #[cfg(not(feature = "profiling"))]
        {
            if elapsed_ms > self.threshold_ms.max(TARGET_DISPATCH_MS) {
                warn!(
                    operation = self.name,
                    elapsed_ms = format!("{:.2}", elapsed_ms),
                    "Operation exceeded its time budget"
                );
            }
        }
    }
}
