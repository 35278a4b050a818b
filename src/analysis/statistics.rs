//! Aggregate statistics over the whole tree

use crate::config::StoryConfig;
use crate::model::FamilyTree;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Earliest and latest event years; both absent when nothing is dated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub earliest: Option<i32>,
    pub latest: Option<i32>,
}

impl DateRange {
    /// Years between earliest and latest, when both exist
    pub fn span(&self) -> Option<i32> {
        Some(self.latest? - self.earliest?)
    }
}

/// Summary statistics block of the story record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_individuals: usize,
    pub total_families: usize,
    pub generations: i32,
    pub average_lifespan: Option<f64>,
    pub average_children_per_family: f64,
    /// `(display name, count)`, most frequent first
    pub most_common_locations: Vec<(String, usize)>,
    pub date_range: DateRange,
}

impl Statistics {
    pub fn compute(tree: &FamilyTree, config: &StoryConfig) -> Self {
        let date_range = date_range(tree);
        Self {
            total_individuals: tree.person_count(),
            total_families: tree.family_count(),
            generations: estimate_generations(&date_range, config.years_per_generation),
            average_lifespan: average_lifespan(tree),
            average_children_per_family: average_children(tree),
            most_common_locations: common_locations(tree, config.top_locations),
            date_range,
        }
    }
}

pub fn date_range(tree: &FamilyTree) -> DateRange {
    let years = tree
        .persons()
        .flat_map(|p| p.events.iter())
        .filter_map(|e| e.year());

    years.fold(DateRange::default(), |range, year| DateRange {
        earliest: Some(range.earliest.map_or(year, |y| y.min(year))),
        latest: Some(range.latest.map_or(year, |y| y.max(year))),
    })
}

/// `max(1, span / years_per_generation)`, or 1 with no dated events
pub fn estimate_generations(range: &DateRange, years_per_generation: i32) -> i32 {
    match range.span() {
        Some(span) => (span / years_per_generation.max(1)).max(1),
        None => 1,
    }
}

/// Mean of the strictly positive lifespans
pub fn average_lifespan(tree: &FamilyTree) -> Option<f64> {
    let lifespans: Vec<i32> = tree
        .persons()
        .filter_map(|p| p.lifespan())
        .filter(|&l| l > 0)
        .collect();

    if lifespans.is_empty() {
        return None;
    }
    let total: i64 = lifespans.iter().map(|&l| i64::from(l)).sum();
    Some(total as f64 / lifespans.len() as f64)
}

/// Children per family; 0 when there are no families
pub fn average_children(tree: &FamilyTree) -> f64 {
    let families = tree.family_count();
    if families == 0 {
        return 0.0;
    }
    let children: usize = tree.families().map(|f| f.child_count()).sum();
    children as f64 / families as f64
}

/// Most frequent person-event locations, ties in order of first sighting
pub fn common_locations(tree: &FamilyTree, limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for name in tree
        .persons()
        .flat_map(|p| p.events.iter())
        .filter_map(|e| e.location_name())
    {
        match slots.get(&name) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(name.clone(), counts.len());
                counts.push((name, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_str;

    #[test]
    fn test_empty_tree() {
        let tree = FamilyTree::new();
        let stats = Statistics::compute(&tree, &StoryConfig::default());
        assert_eq!(stats.total_individuals, 0);
        assert_eq!(stats.generations, 1);
        assert_eq!(stats.average_lifespan, None);
        assert_eq!(stats.average_children_per_family, 0.0);
        assert!(stats.most_common_locations.is_empty());
        assert_eq!(stats.date_range, DateRange::default());
    }

    #[test]
    fn test_date_range_and_generations() {
        let tree = parse_str(
            "0 @I1@ INDI\n1 BIRT\n2 DATE 1820\n1 DEAT\n2 DATE 1860\n\
             0 @I2@ INDI\n1 BIRT\n2 DATE ABT 1905\n",
        );
        let range = date_range(&tree);
        assert_eq!(range.earliest, Some(1820));
        assert_eq!(range.latest, Some(1905));
        assert_eq!(estimate_generations(&range, 25), 3);
    }

    #[test]
    fn test_short_span_is_one_generation() {
        let range = DateRange {
            earliest: Some(1900),
            latest: Some(1910),
        };
        assert_eq!(estimate_generations(&range, 25), 1);
    }

    #[test]
    fn test_average_lifespan_skips_non_positive() {
        let tree = parse_str(
            "0 @I1@ INDI\n1 BIRT\n2 DATE 1800\n1 DEAT\n2 DATE 1860\n\
             0 @I2@ INDI\n1 BIRT\n2 DATE 1800\n1 DEAT\n2 DATE 1880\n\
             0 @I3@ INDI\n1 BIRT\n2 DATE 1850\n1 DEAT\n2 DATE 1850\n\
             0 @I4@ INDI\n1 BIRT\n2 DATE 1900\n1 DEAT\n2 DATE 1850\n",
        );
        assert_eq!(average_lifespan(&tree), Some(70.0));
    }

    #[test]
    fn test_average_children() {
        let tree = parse_str(
            "0 @F1@ FAM\n1 CHIL @I1@\n1 CHIL @I2@\n1 CHIL @I3@\n0 @F2@ FAM\n",
        );
        assert_eq!(average_children(&tree), 1.5);
    }

    #[test]
    fn test_common_locations_ranked_with_stable_ties() {
        let tree = parse_str(
            "0 @I1@ INDI\n\
             1 BIRT\n2 PLAC Galway, Ireland\n\
             1 MARR\n2 PLAC Boston, Massachusetts, USA\n\
             1 DEAT\n2 PLAC Boston, Massachusetts, USA\n\
             1 IMMI\n2 PLAC New York, New York, USA\n\
             1 OCCU\n2 PLAC Lowell, Massachusetts, USA\n\
             1 EDUC\n2 PLAC Salem, Massachusetts, USA\n\
             1 MILI\n2 PLAC France\n",
        );

        let top = common_locations(&tree, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0], ("Boston, Massachusetts".to_string(), 2));
        assert_eq!(top[1], ("Galway, Ireland".to_string(), 1));
        assert_eq!(top[2].0, "New York, New York");
        assert_eq!(top[4].0, "Salem, Massachusetts");
    }
}
