use std::time::{Duration, Instant};

/// Stage stopwatch for the debug log.
pub struct Timer{
    start: Instant,
    last: Instant,
}

impl Timer{
    pub fn new() -> Self{
        let start = Instant::now();
        Self{ start, last: start }
    }

    /// Log the time spent since the previous lap under `stage`.
    pub fn lap(&mut self, stage: &str) -> Duration{
        let now = Instant::now();
        let took = now - self.last;
        self.last = now;
        log::debug!("{stage}: {:?}ms", took.as_millis());
        took
    }

    pub fn total(&self) -> Duration{
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests{

    use super::*;

    #[test]
    fn test_laps_add_up(){
        let mut timer = Timer::new();
        let a = timer.lap("one");
        std::thread::sleep(Duration::from_millis(2));
        let b = timer.lap("two");
        assert!(b >= Duration::from_millis(2));
        assert!(timer.total() >= a + b);
    }
}
