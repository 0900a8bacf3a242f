// src/common/timing.rs

use core::time::Duration;

// Note: These are the datasheet minimums. Implementations delay for at
// least these durations; overshooting is harmless apart from latency.

// === Wake Handshake ===

/// Settle time after the wake pulse before the sensor accepts a command.
pub const WAKE_SETTLE: Duration = Duration::from_micros(850);
/// Idle time after which the sensor drops back into self-sleep, so the
/// wake handshake must precede every exchange.
pub const SELF_SLEEP_AFTER: Duration = Duration::from_secs(3);

// === Request/Response Timing ===

/// Conversion time between sending a read request and fetching the
/// response frame.
pub const PROCESSING_DELAY: Duration = Duration::from_micros(1800);

// === Sampling ===

/// Shortest useful gap between consecutive reads; the sensor refreshes
/// its registers at most once per 2 s.
pub const SAMPLE_DELAY_MIN: Duration = Duration::from_secs(2);
/// Longest gap that still keeps the previous read's self-heating out of
/// the next one without the sensor re-entering a cold state.
pub const SAMPLE_DELAY_MAX: Duration = Duration::from_secs(5);
/// Default gap between the warm-up read and the reported read.
pub const SAMPLE_DELAY_DEFAULT: Duration = SAMPLE_DELAY_MIN;
