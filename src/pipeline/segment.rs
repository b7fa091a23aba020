//! Grouping of labeled entities into per-instruction runs.

use std::collections::HashSet;

use crate::labeler::Entity;
use crate::models::EntityLabel;

/// Splits an entity stream into one group per dosing instruction.
///
/// A sig that chains instructions repeats labels ("take 1 tablet every day
/// and then 2 tablets every week" carries two Dosage spans), so a label
/// seen twice opens a new group. The final group is always emitted; an
/// empty stream yields a single empty group.
pub fn segment_entities(entities: Vec<Entity>) -> Vec<Vec<Entity>> {
    let mut groups: Vec<Vec<Entity>> = Vec::new();
    let mut current: Vec<Entity> = Vec::new();
    let mut seen: HashSet<EntityLabel> = HashSet::new();
    for entity in entities {
        if seen.contains(&entity.label) {
            groups.push(std::mem::take(&mut current));
            seen.clear();
        }
        seen.insert(entity.label);
        current.push(entity);
    }
    groups.push(current);
    groups
}
