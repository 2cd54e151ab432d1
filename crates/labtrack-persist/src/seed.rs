//! Built-in seed projects used when nothing usable is stored

use chrono::NaiveDate;
use labtrack_model::{
    Priority, Progress, Project, ProjectId, Stage, Step,
    StepCategory::{Analysis, LabWork},
};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn steps(entries: &[(&str, labtrack_model::StepCategory)]) -> Vec<Step> {
    entries
        .iter()
        .map(|(text, category)| Step::new(*text, *category))
        .collect()
}

/// The two default projects
#[must_use]
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::from_raw("1"),
            name: "RNA-seq Analysis - Cancer Study".to_string(),
            stage: Stage::DataProcessing,
            progress: Progress::new(65),
            priority: Priority::High,
            start_date: date(2025, 5, 15),
            due_date: date(2025, 7, 1),
            description: "Differential expression analysis of tumor vs normal samples".to_string(),
            completed_steps: steps(&[
                ("Sample Collection", LabWork),
                ("Quality Control", LabWork),
                ("Alignment", Analysis),
            ]),
            next_steps: steps(&[
                ("Differential Expression", Analysis),
                ("Pathway Analysis", Analysis),
                ("Visualization", Analysis),
            ]),
            attachments: Vec::new(),
            tags: ["RNA-seq", "Cancer", "High-throughput"]
                .into_iter()
                .map(String::from)
                .collect(),
            time_tracked: 7200,
            last_activity: None,
        },
        Project {
            id: ProjectId::from_raw("2"),
            name: "Genome Assembly - Plant Species".to_string(),
            stage: Stage::Assembly,
            progress: Progress::new(30),
            priority: Priority::Medium,
            start_date: date(2025, 5, 20),
            due_date: date(2025, 8, 15),
            description: "De novo genome assembly using long-read sequencing".to_string(),
            completed_steps: steps(&[("DNA Extraction", LabWork), ("Sequencing", LabWork)]),
            next_steps: steps(&[
                ("Assembly", Analysis),
                ("Annotation", Analysis),
                ("Quality Assessment", Analysis),
            ]),
            attachments: Vec::new(),
            tags: ["Genome", "Assembly", "Plant", "Long-read"]
                .into_iter()
                .map(String::from)
                .collect(),
            time_tracked: 14400,
            last_activity: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_two_distinct_projects() {
        let seed = seed_projects();
        assert_eq!(seed.len(), 2);
        assert_ne!(seed[0].id, seed[1].id);
        assert_eq!(seed[1].tags.len(), 4);
    }
}
