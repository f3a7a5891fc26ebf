use crate::common::*;

#[doc = r#"
    Five-number summary of one (crate, algorithm) group.

    Quartiles use linear interpolation between closest ranks. Whiskers reach the most
    extreme observations that lie within 1.5 IQR of the box; everything beyond them is a flier.
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct BoxStats {
    pub count: usize,
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
    pub fliers: Vec<f64>,
}

impl BoxStats {
    #[doc = "Smallest value drawn for this box, fliers included"]
    pub fn drawn_min(&self) -> f64 {
        self.fliers
            .iter()
            .copied()
            .fold(self.whisker_low, f64::min)
    }

    #[doc = "Largest value drawn for this box, fliers included"]
    pub fn drawn_max(&self) -> f64 {
        self.fliers
            .iter()
            .copied()
            .fold(self.whisker_high, f64::max)
    }
}
