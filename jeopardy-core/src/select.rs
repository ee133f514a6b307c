use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{BoardError, Result};
use crate::models::CategoryId;

/// Draw `count` distinct ids uniformly at random, without replacement.
///
/// Duplicate entries in `all_ids` count once. The input slice is left as is.
/// The result is shuffled, so column order on the board is random too.
pub fn select_category_ids<R: Rng + ?Sized>(
    all_ids: &[CategoryId],
    count: usize,
    rng: &mut R,
) -> Result<Vec<CategoryId>> {
    let mut seen = HashSet::with_capacity(all_ids.len());
    let distinct: Vec<&CategoryId> = all_ids.iter().filter(|id| seen.insert(*id)).collect();

    if distinct.len() < count {
        return Err(BoardError::InsufficientSource {
            requested: count,
            available: distinct.len(),
        });
    }

    let mut selected: Vec<CategoryId> = distinct
        .choose_multiple(rng, count)
        .map(|id| (*id).clone())
        .collect();
    // choose_multiple makes no promise about order
    selected.shuffle(rng);
    tracing::debug!(
        available = distinct.len(),
        selected = ?selected,
        "selected categories"
    );
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ids(n: u64) -> Vec<CategoryId> {
        (0..n).map(CategoryId::from).collect()
    }

    #[test]
    fn returns_requested_number_of_distinct_members() {
        let all = ids(20);
        let mut rng = StdRng::seed_from_u64(7);
        for count in 0..=20 {
            let selected = select_category_ids(&all, count, &mut rng).unwrap();
            assert_eq!(selected.len(), count);
            let unique: HashSet<_> = selected.iter().collect();
            assert_eq!(unique.len(), count);
            assert!(selected.iter().all(|id| all.contains(id)));
        }
    }

    #[test]
    fn fails_when_source_is_too_small() {
        let err = select_category_ids(&ids(3), 6, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(
            err,
            BoardError::InsufficientSource {
                requested: 6,
                available: 3,
            }
        );
    }

    #[test]
    fn duplicates_do_not_count_toward_the_source() {
        let all: Vec<CategoryId> = ["1", "1", "2", "2"].into_iter().map(Into::into).collect();
        assert!(select_category_ids(&all, 3, &mut StdRng::seed_from_u64(1)).is_err());
        let selected = select_category_ids(&all, 2, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_ne!(selected[0], selected[1]);
    }

    #[test]
    fn does_not_touch_the_input() {
        let all = ids(10);
        let copy = all.clone();
        select_category_ids(&all, 6, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(all, copy);
    }

    #[test]
    fn same_seed_same_selection() {
        let all = ids(50);
        let a = select_category_ids(&all, 6, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = select_category_ids(&all, 6, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_id_can_be_drawn() {
        let all = ids(8);
        let mut rng = StdRng::seed_from_u64(11);
        let mut drawn = HashSet::new();
        for _ in 0..200 {
            drawn.extend(select_category_ids(&all, 2, &mut rng).unwrap());
        }
        assert_eq!(drawn.len(), 8);
    }

    #[test]
    fn order_of_the_selection_is_random() {
        let all = ids(6);
        let firsts: HashSet<CategoryId> = (0..50)
            .map(|seed| {
                let selected =
                    select_category_ids(&all, 6, &mut StdRng::seed_from_u64(seed)).unwrap();
                selected[0].clone()
            })
            .collect();
        assert!(firsts.len() > 1, "first column was always {firsts:?}");
    }
}
