//! Video metadata probing and running time computation.
//!
//! Frame count and frame rate are read from container metadata via ffprobe.
//! The running time in minutes is `frame_count / frame_rate / 60`, rounded
//! to two decimal places. Probing fails soft: media that cannot be opened or
//! that reports no usable metadata yields a zero duration, never an error.

use std::path::Path;

use ffprobe::ffprobe;

/// Outcome of probing a single video file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationOutcome {
    /// Running time in minutes, rounded to two decimal places.
    Minutes(f64),
    /// The file could not be opened or carried no usable video metadata.
    Unreadable,
}

impl DurationOutcome {
    /// Renders the outcome as a displayable duration. Unreadable media is
    /// indistinguishable from a zero-length video here.
    pub fn minutes(self) -> f64 {
        match self {
            DurationOutcome::Minutes(m) => m,
            DurationOutcome::Unreadable => 0.0,
        }
    }

    pub fn is_readable(self) -> bool {
        matches!(self, DurationOutcome::Minutes(_))
    }
}

/// Computes the running time in minutes from raw stream properties.
///
/// A non-positive frame rate yields `0.0`.
pub fn duration_minutes(frame_count: u64, frame_rate: f64) -> f64 {
    if frame_rate > 0.0 {
        round2(frame_count as f64 / frame_rate / 60.0)
    } else {
        0.0
    }
}

/// Probes `path` and returns the running time in minutes.
///
/// Unopenable or unreadable media maps to `0.0`; the failure is logged and
/// never propagated to the caller.
pub fn compute_duration(path: &Path) -> f64 {
    probe_video(path).minutes()
}

/// Probes `path` for frame count and frame rate and computes the running
/// time, distinguishing unreadable media from a genuinely empty video.
pub fn probe_video(path: &Path) -> DurationOutcome {
    log::debug!("Running ffprobe on: {}", path.display());
    match ffprobe(path) {
        Ok(metadata) => {
            let Some(video_stream) = metadata
                .streams
                .iter()
                .find(|s| s.codec_type.as_deref() == Some("video"))
            else {
                log::warn!("No video stream found in {}", path.display());
                return DurationOutcome::Unreadable;
            };

            let frame_rate = parse_frame_rate(&video_stream.avg_frame_rate)
                .filter(|r| *r > 0.0)
                .or_else(|| parse_frame_rate(&video_stream.r_frame_rate))
                .unwrap_or(0.0);

            // nb_frames is absent for containers that do not index frames;
            // fall back to the container duration times the frame rate.
            let frame_count = video_stream
                .nb_frames
                .as_deref()
                .and_then(|f| f.parse::<u64>().ok())
                .or_else(|| {
                    estimate_frame_count(metadata.format.duration.as_deref(), frame_rate)
                });

            match frame_count {
                Some(frames) => DurationOutcome::Minutes(duration_minutes(frames, frame_rate)),
                None => {
                    log::warn!("No frame count available for {}", path.display());
                    DurationOutcome::Unreadable
                }
            }
        }
        Err(err) => {
            log::warn!("ffprobe failed on {}: {:?}", path.display(), err);
            DurationOutcome::Unreadable
        }
    }
}

/// Parses an ffprobe rational frame rate such as "30000/1001" or "25".
fn parse_frame_rate(raw: &str) -> Option<f64> {
    match raw.split_once('/') {
        Some((num, den)) => {
            let num = num.trim().parse::<f64>().ok()?;
            let den = den.trim().parse::<f64>().ok()?;
            if den == 0.0 { None } else { Some(num / den) }
        }
        None => raw.trim().parse::<f64>().ok(),
    }
}

fn estimate_frame_count(duration: Option<&str>, frame_rate: f64) -> Option<u64> {
    if frame_rate <= 0.0 {
        return None;
    }
    duration
        .and_then(|d| d.parse::<f64>().ok())
        .filter(|secs| *secs >= 0.0)
        .map(|secs| (secs * frame_rate).round() as u64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_duration_minutes() {
        assert_eq!(duration_minutes(1800, 30.0), 1.0);
        assert_eq!(duration_minutes(905, 24.0), 0.63);
        assert_eq!(duration_minutes(0, 30.0), 0.0);
        assert_eq!(duration_minutes(54000, 25.0), 36.0);
    }

    #[test]
    fn test_duration_minutes_zero_frame_rate() {
        assert_eq!(duration_minutes(1800, 0.0), 0.0);
        assert_eq!(duration_minutes(1800, -1.0), 0.0);
    }

    #[test]
    fn test_parse_frame_rate() {
        assert_eq!(parse_frame_rate("30000/1001"), Some(30000.0 / 1001.0));
        assert_eq!(parse_frame_rate("25/1"), Some(25.0));
        assert_eq!(parse_frame_rate("24"), Some(24.0));
        assert_eq!(parse_frame_rate("0/0"), None);
        assert_eq!(parse_frame_rate("garbage"), None);
    }

    #[test]
    fn test_estimate_frame_count() {
        assert_eq!(estimate_frame_count(Some("60.0"), 30.0), Some(1800));
        assert_eq!(estimate_frame_count(Some("37.708333"), 24.0), Some(905));
        assert_eq!(estimate_frame_count(Some("60.0"), 0.0), None);
        assert_eq!(estimate_frame_count(None, 30.0), None);
        assert_eq!(estimate_frame_count(Some("bad"), 30.0), None);
    }

    #[test]
    fn test_unopenable_path_is_zero() {
        let path = PathBuf::from("surely_this_does_not_exist_42.mp4");
        assert_eq!(probe_video(&path), DurationOutcome::Unreadable);
        assert_eq!(compute_duration(&path), 0.0);
    }

    #[test]
    fn test_unopenable_path_is_idempotent() {
        let path = PathBuf::from("surely_this_does_not_exist_42.mp4");
        assert_eq!(compute_duration(&path), compute_duration(&path));
    }

    #[test]
    fn test_outcome_rendering() {
        assert_eq!(DurationOutcome::Minutes(1.5).minutes(), 1.5);
        assert_eq!(DurationOutcome::Unreadable.minutes(), 0.0);
        assert!(DurationOutcome::Minutes(0.0).is_readable());
        assert!(!DurationOutcome::Unreadable.is_readable());
    }
}
