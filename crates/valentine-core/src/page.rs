/// Latest vertical scroll offset of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    y: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the offset changed.
    pub fn record(&mut self, y: f64) -> bool {
        if (y - self.y).abs() < f64::EPSILON {
            return false;
        }
        self.y = y;
        true
    }

    pub fn position(&self) -> f64 {
        self.y
    }

    /// Value for the `--scroll-y` custom property on the page root.
    pub fn css_var(&self) -> String {
        format!("{}px", self.y)
    }
}
