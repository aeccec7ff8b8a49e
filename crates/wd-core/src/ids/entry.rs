use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Stable identifier of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl_id!(EntryId);

#[cfg(test)]
mod tests {
    use super::EntryId;

    #[test]
    fn generated_ids_are_unique_and_nonempty() {
        let a = EntryId::new();
        let b = EntryId::new();

        assert_ne!(a, b);
        assert!(!a.as_ref().is_empty());
    }

    #[test]
    fn display_matches_the_seeded_form() {
        assert_eq!(EntryId::from("42").to_string(), "42");
    }
}
