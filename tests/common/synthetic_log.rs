/// Builds trajectory log text one sample at a time.
pub struct TrackBuilder {
    x: f64,
    z: f64,
    heading: f64,
    lines: Vec<String>,
}

impl TrackBuilder {
    /// Starts a track with its first sample.
    pub fn new(x: f64, z: f64, heading: f64) -> Self {
        let mut builder = Self {
            x,
            z,
            heading,
            lines: Vec::new(),
        };
        builder.record();
        builder
    }

    fn record(&mut self) {
        self.lines
            .push(format!("{},{},{}", self.x, self.z, self.heading));
    }

    /// Repeats the current sample `n` times.
    pub fn pause(mut self, n: usize) -> Self {
        for _ in 0..n {
            self.record();
        }
        self
    }

    /// Moves by `(dx, dz)` `n` times at the current heading.
    pub fn walk(mut self, dx: f64, dz: f64, n: usize) -> Self {
        for _ in 0..n {
            self.x += dx;
            self.z += dz;
            self.record();
        }
        self
    }

    /// Changes heading and moves in the same sample.
    pub fn pivot(mut self, heading: f64, dx: f64, dz: f64) -> Self {
        self.heading = heading;
        self.walk(dx, dz, 1)
    }

    /// Log text with the recorder header and a blank separator line.
    pub fn build(&self) -> String {
        let mut text = String::from("Camera Path \n \n");
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}
