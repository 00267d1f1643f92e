// per-project tallies and the corpus-wide roll-up for the line-level census

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::SCANNER_CATALOG;
use super::lines::LineTally;

/// running totals for one scanned project directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTally {
    pub project_id: String,
    pub total_files: usize,
    pub patterns: BTreeMap<String, usize>,
    pub pattern_loc: usize,
}

impl ProjectTally {
    pub fn new(project_id: String) -> ProjectTally {
        ProjectTally {
            project_id,
            total_files: 0,
            patterns: zeroed_categories(),
            pattern_loc: 0,
        }
    }

    /// add one file's census to this project
    pub fn absorb(&mut self, tally: &LineTally) {
        for (category, count) in &tally.matches {
            *self.patterns.entry(category.clone()).or_insert(0) += count;
        }
        self.pattern_loc += tally.pattern_loc;
    }
}

/// roll-up across all scanned projects, same shape as the per-project record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustrySummary {
    pub total_projects: usize,
    pub total_files: usize,
    pub total_patterns: BTreeMap<String, usize>,
    pub total_pattern_loc: usize,
    pub projects: Vec<ProjectTally>,
}

impl Default for IndustrySummary {
    fn default() -> IndustrySummary {
        IndustrySummary {
            total_projects: 0,
            total_files: 0,
            total_patterns: zeroed_categories(),
            total_pattern_loc: 0,
            projects: Vec::new(),
        }
    }
}

impl IndustrySummary {
    pub fn new() -> IndustrySummary {
        IndustrySummary::default()
    }

    /// fold a finished project tally into the corpus totals
    pub fn absorb_project(&mut self, project: ProjectTally) {
        self.total_projects += 1;
        self.total_files += project.total_files;
        for (category, count) in &project.patterns {
            *self.total_patterns.entry(category.clone()).or_insert(0) += count;
        }
        self.total_pattern_loc += project.pattern_loc;
        self.projects.push(project);
    }
}

fn zeroed_categories() -> BTreeMap<String, usize> {
    SCANNER_CATALOG
        .categories()
        .iter()
        .map(|category| (category.name.to_string(), 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::lines::count_lines;

    #[test]
    fn new_tally_covers_every_category_with_zero() {
        let tally = ProjectTally::new("Project 1".to_string());
        assert_eq!(tally.patterns.len(), SCANNER_CATALOG.categories().len());
        assert!(tally.patterns.values().all(|&count| count == 0));
        assert_eq!(tally.pattern_loc, 0);
    }

    #[test]
    fn absorb_accumulates_across_files() {
        let mut tally = ProjectTally::new("Project 1".to_string());
        tally.absorb(&count_lines("m.put(a, b);\n"));
        tally.absorb(&count_lines("m.put(c, d);\nCollections.sort(list);\n"));
        assert_eq!(tally.patterns["hash_map"], 2);
        assert_eq!(tally.patterns["sorting"], 1);
        assert_eq!(tally.pattern_loc, 3);
    }

    #[test]
    fn roll_up_sums_projects() {
        let mut first = ProjectTally::new("Project 1".to_string());
        first.total_files = 2;
        first.absorb(&count_lines("m.put(a, b);\n"));
        let mut second = ProjectTally::new("Project 2".to_string());
        second.total_files = 1;
        second.absorb(&count_lines("Collections.sort(list);\n"));

        let mut summary = IndustrySummary::new();
        summary.absorb_project(first);
        summary.absorb_project(second);

        assert_eq!(summary.total_projects, 2);
        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.total_patterns["hash_map"], 1);
        assert_eq!(summary.total_patterns["sorting"], 1);
        assert_eq!(summary.total_pattern_loc, 2);
        assert_eq!(summary.projects[0].project_id, "Project 1");
    }

    #[test]
    fn roll_up_round_trips_through_json() {
        let mut summary = IndustrySummary::new();
        let mut project = ProjectTally::new("Project 1".to_string());
        project.total_files = 1;
        project.absorb(&count_lines("m.put(a, b);\n"));
        summary.absorb_project(project);

        let json = serde_json::to_string(&summary).unwrap();
        let reloaded: IndustrySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, reloaded);
    }
}
