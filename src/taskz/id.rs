//! # Task Ids
//!
//! Ids are handed out by a per-session counter. Every call to
//! [`IdSource::next_id`] returns the previous value plus one, starting at 1,
//! so ids are positive, strictly increasing and gapless for a single caller.
//!
//! There is no global counter: each [`IdGenerator`] owns its own state, and two
//! generators never observe each other. The only way to start over is to build
//! a new generator.
//!
//! Anything that can produce ids implements [`IdSource`]. Besides the
//! generator this includes plain `FnMut() -> u64` closures, which is handy
//! when a caller wants to capture its own counter.

/// Something that hands out the next task id.
pub trait IdSource {
    fn next_id(&mut self) -> u64;
}

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent id produced, or 0 if none has been.
    pub fn last_issued(&self) -> u64 {
        self.last
    }
}

impl IdSource for IdGenerator {
    /// # Panics
    ///
    /// Panics once every `u64` id has been handed out.
    fn next_id(&mut self) -> u64 {
        self.last = self.last.checked_add(1).expect("task id space exhausted");
        self.last
    }
}

impl<F> IdSource for F
where
    F: FnMut() -> u64,
{
    fn next_id(&mut self) -> u64 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_generator_counts_from_one() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn generators_are_independent() {
        let mut first = IdGenerator::new();
        let mut second = IdGenerator::new();

        assert_eq!(first.next_id(), 1);
        assert_eq!(first.next_id(), 2);
        assert_eq!(second.next_id(), 1);
        assert_eq!(first.next_id(), 3);
        assert_eq!(second.next_id(), 2);
    }

    #[test]
    fn last_issued_does_not_advance() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.last_issued(), 0);
        ids.next_id();
        assert_eq!(ids.last_issued(), 1);
        assert_eq!(ids.last_issued(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    #[should_panic(expected = "task id space exhausted")]
    fn exhausted_generator_panics_instead_of_wrapping() {
        let mut ids = IdGenerator { last: u64::MAX - 1 };
        assert_eq!(ids.next_id(), u64::MAX);
        ids.next_id();
    }

    #[test]
    fn closures_are_id_sources() {
        let mut counter: u64 = 100;
        let mut source = || {
            counter += 10;
            counter
        };
        assert_eq!(source.next_id(), 110);
        assert_eq!(source.next_id(), 120);
    }
}
