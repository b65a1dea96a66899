/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time(pub f64); // milliseconds

impl Time {
    /// Elapsed milliseconds since `earlier`. Negative if `earlier` is later.
    pub fn since(self, earlier: Time) -> f64 {
        self.0 - earlier.0
    }
}
