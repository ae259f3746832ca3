//! Exact integer arithmetic for Western musical intervals.
pub mod interval;
