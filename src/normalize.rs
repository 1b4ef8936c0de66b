// src/normalize.rs

use tracing::debug;

use crate::model::StateRecord;
use crate::states;

/// Attach the postal abbreviation to every record whose state is known.
/// Records with an unknown state keep whatever `abbreviation` they had.
pub fn normalize(records: &mut [StateRecord]) {
    let mut unmatched = 0usize;
    for rec in records.iter_mut() {
        match states::lookup(&rec.state) {
            Some(code) => rec.abbreviation = Some(code.to_string()),
            None => unmatched += 1,
        }
    }
    debug!(total = records.len(), unmatched, "normalized records");
}

/// Owning form of [`normalize`].
pub fn normalized(mut records: Vec<StateRecord>) -> Vec<StateRecord> {
    normalize(&mut records);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record;

    #[test]
    fn test_sets_abbreviation_iff_known() {
        let out = normalized(vec![
            record("Texas", 1),
            record("Atlantis", 2),
            record("Puerto Rico", 3),
        ]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].abbreviation.as_deref(), Some("TX"));
        assert_eq!(out[1].abbreviation, None);
        assert_eq!(out[2].abbreviation.as_deref(), Some("PR"));
    }

    #[test]
    fn test_preserves_order_and_other_fields() {
        let input = vec![record("Wyoming", 576_851), record("Alabama", 5_039_877)];
        let out = normalized(input.clone());
        for (before, after) in input.iter().zip(&out) {
            assert_eq!(before.state, after.state);
            assert_eq!(before.population, after.population);
            assert_eq!(before.state_slug, after.state_slug);
        }
    }

    #[test]
    fn test_unknown_state_keeps_existing_value() {
        let mut recs = vec![record("Atlantis", 1)];
        recs[0].abbreviation = Some("AT".to_string());
        normalize(&mut recs);
        assert_eq!(recs[0].abbreviation.as_deref(), Some("AT"));
    }

    #[test]
    fn test_empty_input() {
        assert!(normalized(Vec::new()).is_empty());
    }
}
