/// Fraction of a wrapped section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Slack for crossing reports that land just under the threshold because the
/// browser rounds the intersection to whole pixels.
pub const RATIO_TOLERANCE: f64 = 1e-2;

/// Ratios to register with the observer: the threshold itself, then steps up
/// to full visibility. A report rejected at the crossing is followed by another
/// one as soon as the element scrolls further in.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let threshold = threshold.clamp(0.0, 1.0);
    let mut ratios = vec![threshold];
    ratios.extend(
        [0.25, 0.5, 0.75, 1.0]
            .into_iter()
            .filter(|r| *r > threshold + RATIO_TOLERANCE),
    );
    ratios
}

/// One-shot "has this element been visible enough" predicate.
///
/// Feeds on raw intersection reports and trips exactly once, the first time an
/// intersecting report reaches the threshold. Later reports are ignored, so a
/// section that scrolls back out of view stays revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    tripped: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            tripped: false,
        }
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped
    }

    /// Returns true only for the report that trips the latch.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.tripped || !intersecting {
            return false;
        }
        if ratio + RATIO_TOLERANCE >= self.threshold {
            self.tripped = true;
            return true;
        }
        false
    }

    /// Trips without a report, used when the observer is unavailable.
    pub fn force(&mut self) -> bool {
        let was = self.tripped;
        self.tripped = true;
        !was
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trips_once_at_threshold() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(!latch.observe(true, 0.1));
        assert!(!latch.observe(false, 0.9));
        assert!(latch.observe(true, 0.3));
        assert!(latch.is_tripped());
        assert!(!latch.observe(true, 1.0));
    }

    #[test]
    fn leaving_the_viewport_does_not_reset() {
        let mut latch = VisibilityLatch::new(REVEAL_THRESHOLD);
        assert!(latch.observe(true, 0.5));
        assert!(!latch.observe(false, 0.0));
        assert!(latch.is_tripped());
    }

    #[test]
    fn pixel_rounded_crossing_still_trips() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(latch.observe(true, 0.2999));
        assert!(latch.is_tripped());

        let mut latch = VisibilityLatch::new(REVEAL_THRESHOLD);
        assert!(latch.observe(true, 0.0951));
    }

    #[test]
    fn zero_threshold_trips_on_any_intersection() {
        let mut latch = VisibilityLatch::new(0.0);
        assert!(!latch.observe(false, 0.0));
        assert!(latch.observe(true, 0.0));
    }

    #[test]
    fn thresholds_climb_past_the_requested_ratio() {
        assert_eq!(observer_thresholds(0.3), vec![0.3, 0.5, 0.75, 1.0]);
        assert_eq!(observer_thresholds(REVEAL_THRESHOLD), vec![0.1, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(observer_thresholds(1.0), vec![1.0]);
    }

    #[test]
    fn force_reports_only_the_first_trip() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(latch.force());
        assert!(!latch.force());
        assert!(!latch.observe(true, 1.0));
    }
}
