//! Runtime configuration.
//!
//! The sink mode is set via the `MINIFMT_SINK_MODE` environment variable:
//! - `both` (default): every case without an explicit capacity is rendered
//!   through the stream form and through the bounded form sized to the
//!   expected length, and the two must agree byte for byte.
//! - `stream`: stream form only.
//! - `bounded`: bounded form only.
//!
//! Cases that pin a `capacity` always use the bounded form.

use std::sync::OnceLock;

/// Which entry point(s) the runner exercises.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkMode {
    /// Unbounded sink.
    Stream,
    /// Fixed buffer with a reserved terminator slot.
    Bounded,
    /// Both, cross-checked.
    #[default]
    Both,
}

impl SinkMode {
    /// Parse from string (case-insensitive). Unknown values fall back to the default.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "stream" | "unbounded" | "printf" => Self::Stream,
            "bounded" | "buffer" | "snprintf" => Self::Bounded,
            "both" | "all" | "parity" => Self::Both,
            _ => Self::Both,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stream => "stream",
            Self::Bounded => "bounded",
            Self::Both => "both",
        }
    }

    #[must_use]
    pub const fn uses_stream(self) -> bool {
        matches!(self, Self::Stream | Self::Both)
    }

    #[must_use]
    pub const fn uses_bounded(self) -> bool {
        matches!(self, Self::Bounded | Self::Both)
    }
}

static GLOBAL_MODE: OnceLock<SinkMode> = OnceLock::new();

/// Get the configured sink mode (reads env var on first call, caches thereafter).
#[must_use]
pub fn sink_mode() -> SinkMode {
    *GLOBAL_MODE.get_or_init(|| {
        std::env::var("MINIFMT_SINK_MODE")
            .map(|v| SinkMode::from_str_loose(&v))
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sink_modes() {
        assert_eq!(SinkMode::from_str_loose("stream"), SinkMode::Stream);
        assert_eq!(SinkMode::from_str_loose("STREAM"), SinkMode::Stream);
        assert_eq!(SinkMode::from_str_loose("printf"), SinkMode::Stream);
        assert_eq!(SinkMode::from_str_loose("bounded"), SinkMode::Bounded);
        assert_eq!(SinkMode::from_str_loose(" snprintf "), SinkMode::Bounded);
        assert_eq!(SinkMode::from_str_loose("both"), SinkMode::Both);
        assert_eq!(SinkMode::from_str_loose("bogus"), SinkMode::Both);
    }

    #[test]
    fn default_is_both() {
        assert_eq!(SinkMode::default(), SinkMode::Both);
    }

    #[test]
    fn mode_coverage() {
        assert!(SinkMode::Stream.uses_stream());
        assert!(!SinkMode::Stream.uses_bounded());
        assert!(SinkMode::Bounded.uses_bounded());
        assert!(!SinkMode::Bounded.uses_stream());
        assert!(SinkMode::Both.uses_stream() && SinkMode::Both.uses_bounded());
    }

    #[test]
    fn names_round_trip() {
        for mode in [SinkMode::Stream, SinkMode::Bounded, SinkMode::Both] {
            assert_eq!(SinkMode::from_str_loose(mode.as_str()), mode);
        }
    }
}
