/// One intersection-observer report for a section.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }
}

/// Scroll-triggered one-way visibility flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an observer report. Returns `true` only on the call that flips the
    /// latch; the caller can disconnect its observer at that point.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.visible {
            return false;
        }
        if sample.is_intersecting && sample.ratio >= self.threshold {
            self.visible = true;
            return true;
        }
        false
    }
}
