/// Linear map from a numeric domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    round: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range, round: false }
    }

    /// Same mapping, with outputs rounded to whole pixels.
    pub fn rounded(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range, round: true }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        // A collapsed domain maps everything to the middle of the range.
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        let out = r0 + t * (r1 - r0);
        if self.round { out.round() } else { out }
    }
}
