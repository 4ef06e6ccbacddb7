//! Page load timing

/// Timestamps from the navigation performance entry, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadTiming {
    pub fetch_start: f64,
    pub load_event_end: f64,
}

impl LoadTiming {
    /// Time from fetch start to the end of the load event.
    ///
    /// Returns `None` while the load event has not finished, in which case
    /// the browser reports `loadEventEnd` as zero.
    pub fn load_time_ms(&self) -> Option<f64> {
        if self.load_event_end <= 0.0 || self.load_event_end < self.fetch_start {
            return None;
        }
        Some(self.load_event_end - self.fetch_start)
    }
}

/// Console line for a measured load time, logged unrounded
pub fn load_time_message(ms: f64) -> String {
    format!("Page load time: {} ms", ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_time() {
        let timing = LoadTiming {
            fetch_start: 3.5,
            load_event_end: 812.5,
        };
        assert_eq!(timing.load_time_ms(), Some(809.0));
    }

    #[test]
    fn test_incomplete_load_event() {
        let timing = LoadTiming {
            fetch_start: 3.5,
            load_event_end: 0.0,
        };
        assert_eq!(timing.load_time_ms(), None);
    }

    #[test]
    fn test_load_time_message() {
        assert_eq!(load_time_message(809.4), "Page load time: 809.4 ms");
        assert_eq!(load_time_message(812.0), "Page load time: 812 ms");
    }
}
