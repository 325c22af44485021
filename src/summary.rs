//! Run summary accumulation
//!
//! The summary is the sole side-effect-free observable result of a run:
//! counts per outcome, total token usage, and elapsed wall time. It is
//! created at run start, mutated incrementally by the pipeline, and read
//! once at run end.

use std::time::Duration;

/// Aggregated counts and totals for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Assets returned by the store
    pub seen: u64,
    /// Assets skipped because the content type is not an image
    pub skipped_not_image: u64,
    /// Assets skipped because an alt-text exists and overwrite is off
    pub skipped_existing_alt: u64,
    /// Assets updated in the store
    pub updated: u64,
    /// Assets previewed under dry-run (would have been updated)
    pub previewed: u64,
    /// Total OpenAI tokens spent across the run
    pub total_tokens: u64,
    /// Elapsed wall time of the run
    pub elapsed: Duration,
}

impl RunSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Assets skipped for any reason
    pub fn skipped(&self) -> u64 {
        self.skipped_not_image + self.skipped_existing_alt
    }

    /// Elapsed time rounded to whole seconds for the digest
    pub fn elapsed_seconds(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        secs.round() as u64
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Assets seen:            {}", self.seen)?;
        writeln!(f, "Skipped (not an image): {}", self.skipped_not_image)?;
        writeln!(f, "Skipped (existing alt): {}", self.skipped_existing_alt)?;
        writeln!(f, "Updated:                {}", self.updated)?;
        writeln!(f, "Previewed (dry-run):    {}", self.previewed)?;
        writeln!(f, "Total OpenAI tokens:    {}", self.total_tokens)?;
        write!(f, "Elapsed:                {}s", self.elapsed_seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_zeroed() {
        let summary = RunSummary::new();
        assert_eq!(summary.seen, 0);
        assert_eq!(summary.skipped(), 0);
        assert_eq!(summary.updated, 0);
        assert_eq!(summary.previewed, 0);
        assert_eq!(summary.total_tokens, 0);
        assert_eq!(summary.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_skipped_sums_both_reasons() {
        let summary = RunSummary {
            skipped_not_image: 2,
            skipped_existing_alt: 3,
            ..Default::default()
        };
        assert_eq!(summary.skipped(), 5);
    }

    #[test]
    fn test_elapsed_seconds_rounds() {
        let summary = RunSummary {
            elapsed: Duration::from_millis(2_600),
            ..Default::default()
        };
        assert_eq!(summary.elapsed_seconds(), 3);

        let summary = RunSummary {
            elapsed: Duration::from_millis(2_400),
            ..Default::default()
        };
        assert_eq!(summary.elapsed_seconds(), 2);
    }

    #[test]
    fn test_display_contains_all_counts() {
        let summary = RunSummary {
            seen: 10,
            skipped_not_image: 2,
            skipped_existing_alt: 3,
            updated: 4,
            previewed: 1,
            total_tokens: 1234,
            elapsed: Duration::from_secs(7),
        };
        let rendered = summary.to_string();
        assert!(rendered.contains("Assets seen:            10"));
        assert!(rendered.contains("Updated:                4"));
        assert!(rendered.contains("Total OpenAI tokens:    1234"));
        assert!(rendered.contains("7s"));
    }
}
