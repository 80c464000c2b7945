// ABOUTME: Tag-association reconciliation for product updates
// ABOUTME: Computes the minimal insert/delete delta between desired and stored tag sets

use std::collections::HashSet;

/// A persisted join row linking a product to a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagAssociation {
    /// The join row's own identifier; deletion targets this, not the tag.
    pub id: i64,
    pub tag_id: i64,
}

/// The minimal change set transforming the current associations into the
/// desired ones. The tag identifiers affected by `delete` and `create` are
/// disjoint, so the two halves can be applied in either order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDelta {
    /// Association ids whose join rows should be removed.
    pub delete: Vec<i64>,
    /// Tag ids for which a new join row should be inserted.
    pub create: Vec<i64>,
}

impl TagDelta {
    pub fn is_empty(&self) -> bool {
        self.delete.is_empty() && self.create.is_empty()
    }
}

/// Diff a desired tag list against the current association rows.
///
/// Duplicates in `desired` collapse to a single create request. Deletes are
/// emitted in current-row order, creates in first-occurrence desired order,
/// so the output is deterministic. Reconciling twice with the same desired
/// set (after the delta is applied) yields an empty delta.
pub fn reconcile_tags(desired: &[i64], current: &[TagAssociation]) -> TagDelta {
    let current_tags: HashSet<i64> = current.iter().map(|assoc| assoc.tag_id).collect();
    let desired_tags: HashSet<i64> = desired.iter().copied().collect();

    let mut seen = HashSet::new();
    let create = desired
        .iter()
        .copied()
        .filter(|tag_id| seen.insert(*tag_id))
        .filter(|tag_id| !current_tags.contains(tag_id))
        .collect();

    let delete = current
        .iter()
        .filter(|assoc| !desired_tags.contains(&assoc.tag_id))
        .map(|assoc| assoc.id)
        .collect();

    TagDelta { delete, create }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assoc(id: i64, tag_id: i64) -> TagAssociation {
        TagAssociation { id, tag_id }
    }

    #[test]
    fn identical_sets_are_a_no_op() {
        let current = vec![assoc(1, 5), assoc(2, 7)];
        let delta = reconcile_tags(&[5, 7], &current);

        assert!(delta.is_empty());
    }

    #[test]
    fn missing_tags_are_created() {
        let current = vec![assoc(1, 5)];
        let delta = reconcile_tags(&[5, 7, 9], &current);

        assert!(delta.delete.is_empty());
        assert_eq!(delta.create, vec![7, 9]);
    }

    #[test]
    fn unwanted_associations_are_deleted_by_association_id() {
        let current = vec![assoc(1, 5), assoc(2, 7)];
        let delta = reconcile_tags(&[9], &current);

        assert_eq!(delta.delete, vec![1, 2]);
        assert_eq!(delta.create, vec![9]);
    }

    #[test]
    fn both_empty_yields_empty_delta() {
        let delta = reconcile_tags(&[], &[]);

        assert!(delta.is_empty());
    }

    #[test]
    fn duplicate_desired_tags_collapse() {
        let current = vec![assoc(1, 5)];
        let delta = reconcile_tags(&[5, 5, 5], &current);

        assert!(delta.is_empty());
    }

    #[test]
    fn duplicate_desired_tags_create_once() {
        let delta = reconcile_tags(&[3, 3, 4], &[]);

        assert_eq!(delta.create, vec![3, 4]);
    }

    #[test]
    fn empty_desired_deletes_everything() {
        let current = vec![assoc(10, 1), assoc(11, 2), assoc(12, 3)];
        let delta = reconcile_tags(&[], &current);

        assert_eq!(delta.delete, vec![10, 11, 12]);
        assert!(delta.create.is_empty());
    }

    #[test]
    fn empty_current_creates_everything() {
        let delta = reconcile_tags(&[4, 8], &[]);

        assert!(delta.delete.is_empty());
        assert_eq!(delta.create, vec![4, 8]);
    }

    #[test]
    fn outputs_cover_the_symmetric_difference_disjointly() {
        let cases: Vec<(Vec<i64>, Vec<TagAssociation>)> = vec![
            (vec![1, 2, 3], vec![assoc(1, 2), assoc(2, 4)]),
            (vec![], vec![assoc(1, 1)]),
            (vec![7], vec![]),
            (vec![5, 6, 5], vec![assoc(1, 6), assoc(2, 9)]),
        ];

        for (desired, current) in cases {
            let delta = reconcile_tags(&desired, &current);

            let desired_set: std::collections::HashSet<i64> = desired.iter().copied().collect();
            let current_set: std::collections::HashSet<i64> =
                current.iter().map(|a| a.tag_id).collect();

            let created: std::collections::HashSet<i64> = delta.create.iter().copied().collect();
            let deleted_tags: std::collections::HashSet<i64> = current
                .iter()
                .filter(|a| delta.delete.contains(&a.id))
                .map(|a| a.tag_id)
                .collect();

            let expected_creates: std::collections::HashSet<i64> =
                desired_set.difference(&current_set).copied().collect();
            let expected_deletes: std::collections::HashSet<i64> =
                current_set.difference(&desired_set).copied().collect();

            assert_eq!(created, expected_creates);
            assert_eq!(deleted_tags, expected_deletes);
            assert!(created.is_disjoint(&deleted_tags));
        }
    }

    #[test]
    fn reconciling_after_applying_the_delta_is_idempotent() {
        let desired = vec![2, 3, 5];
        let current = vec![assoc(1, 1), assoc(2, 2)];

        let delta = reconcile_tags(&desired, &current);

        // Simulate the persistence layer applying the delta.
        let mut next_id = 100;
        let mut applied: Vec<TagAssociation> = current
            .into_iter()
            .filter(|a| !delta.delete.contains(&a.id))
            .collect();
        for tag_id in &delta.create {
            applied.push(assoc(next_id, *tag_id));
            next_id += 1;
        }

        let second = reconcile_tags(&desired, &applied);
        assert!(second.is_empty());
    }

    #[test]
    fn surviving_duplicate_rows_are_left_alone() {
        // Two join rows for the same desired tag: the reconciler preserves
        // the stored state rather than repairing it.
        let current = vec![assoc(1, 5), assoc(2, 5)];
        let delta = reconcile_tags(&[5], &current);

        assert!(delta.is_empty());
    }
}
