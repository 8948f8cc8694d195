use crate::types::TicketId;

/// Default prefix for generated ticket ids
pub const DEFAULT_ID_PREFIX: &str = "SUP";

/// Monotonic ticket id generator.
///
/// Ids are `<prefix>-<n>` with `n` starting at 1. Uniqueness does not depend
/// on clock resolution, so rapid submissions never collide.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: String,
    next: u64,
}

impl IdSequence {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    pub fn next_id(&mut self) -> TicketId {
        let id = TicketId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut ids = IdSequence::default();
        assert_eq!(ids.next_id().as_str(), "SUP-1");
        assert_eq!(ids.next_id().as_str(), "SUP-2");
    }

    #[test]
    fn test_custom_prefix() {
        let mut ids = IdSequence::new("IT");
        assert_eq!(ids.next_id().as_str(), "IT-1");
    }

    #[test]
    fn test_rapid_generation_is_unique() {
        let mut ids = IdSequence::default();
        let generated: HashSet<_> = (0..10_000).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 10_000);
    }
}
