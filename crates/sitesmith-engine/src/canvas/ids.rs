use uuid::Uuid;

use crate::content::BlockId;

/// Source of fresh block ids. The canvas keeps drawing until it gets an id the
/// document does not already use.
pub trait IdSource {
    fn next_id(&mut self) -> BlockId;
}

/// Short random ids (eight hex characters of a v4 UUID).
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> BlockId {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(8);
        BlockId::new(id)
    }
}

/// Deterministic `{prefix}{n}` ids, counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> BlockId {
        let id = BlockId::new(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_ids_are_short_hex() {
        let mut ids = RandomIds;
        let id = ids.next_id();
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sequential_ids_never_repeat() {
        let mut ids = SequentialIds::new("b");
        let drawn: HashSet<_> = (0..50).map(|_| ids.next_id()).collect();
        assert_eq!(drawn.len(), 50);
        assert!(drawn.contains(&BlockId::new("b1")));
    }
}
