//! Built-in step templates and common-step autocomplete

use crate::step::Step;
use crate::step::StepCategory::{self, Analysis, Documentation, LabWork};

/// Named, ordered step list for a common pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTemplate {
    /// Template name
    pub name: &'static str,
    /// Dominant category of the pipeline
    pub category: StepCategory,
    entries: &'static [(&'static str, StepCategory)],
}

impl StepTemplate {
    /// Number of steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Template has no steps
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Template steps in order
    #[must_use]
    pub fn steps(&self) -> Vec<Step> {
        self.entries
            .iter()
            .map(|(text, category)| Step::new(*text, *category))
            .collect()
    }
}

/// Bioinformatics pipeline templates
pub const TEMPLATES: &[StepTemplate] = &[
    StepTemplate {
        name: "RNA-seq Analysis",
        category: Analysis,
        entries: &[
            ("Sample Collection", LabWork),
            ("RNA Extraction", LabWork),
            ("Quality Control (Bioanalyzer)", LabWork),
            ("Library Preparation", LabWork),
            ("Sequencing", LabWork),
            ("FastQC Quality Assessment", Analysis),
            ("Read Trimming and Filtering", Analysis),
            ("Genome Alignment", Analysis),
            ("Read Counting", Analysis),
            ("Differential Expression Analysis", Analysis),
            ("Pathway Enrichment Analysis", Analysis),
            ("Data Visualization", Analysis),
            ("Statistical Validation", Analysis),
            ("Report Generation", Documentation),
            ("Manuscript Preparation", Documentation),
        ],
    },
    StepTemplate {
        name: "Genome Assembly",
        category: Analysis,
        entries: &[
            ("DNA Extraction", LabWork),
            ("Quality Assessment", LabWork),
            ("Library Preparation", LabWork),
            ("Sequencing (PacBio/Nanopore)", LabWork),
            ("Raw Data Quality Control", Analysis),
            ("Read Error Correction", Analysis),
            ("Genome Assembly", Analysis),
            ("Assembly Quality Assessment", Analysis),
            ("Scaffolding", Analysis),
            ("Gap Filling", Analysis),
            ("Genome Annotation", Analysis),
            ("Functional Annotation", Analysis),
            ("Comparative Genomics", Analysis),
            ("Assembly Report", Documentation),
        ],
    },
    StepTemplate {
        name: "Variant Calling",
        category: Analysis,
        entries: &[
            ("Sample Preparation", LabWork),
            ("WGS/WES Sequencing", LabWork),
            ("Raw Data QC", Analysis),
            ("Read Alignment", Analysis),
            ("Duplicate Removal", Analysis),
            ("Base Quality Recalibration", Analysis),
            ("Variant Calling", Analysis),
            ("Variant Filtering", Analysis),
            ("Variant Annotation", Analysis),
            ("Functional Impact Prediction", Analysis),
            ("Population Frequency Analysis", Analysis),
            ("Clinical Interpretation", Analysis),
            ("Report Generation", Documentation),
        ],
    },
    StepTemplate {
        name: "Metagenomics",
        category: Analysis,
        entries: &[
            ("Sample Collection", LabWork),
            ("DNA Extraction", LabWork),
            ("Library Preparation", LabWork),
            ("Shotgun Sequencing", LabWork),
            ("Quality Control", Analysis),
            ("Host DNA Removal", Analysis),
            ("Taxonomic Classification", Analysis),
            ("Functional Annotation", Analysis),
            ("Diversity Analysis", Analysis),
            ("Differential Abundance", Analysis),
            ("Pathway Analysis", Analysis),
            ("Visualization", Analysis),
            ("Statistical Analysis", Analysis),
            ("Report Writing", Documentation),
        ],
    },
];

/// Frequently used step names offered while typing
pub const COMMON_STEPS: [&str; 12] = [
    "Sample Collection",
    "DNA/RNA Extraction",
    "Quality Control",
    "Library Preparation",
    "Sequencing",
    "Data Processing",
    "Statistical Analysis",
    "Visualization",
    "Report Generation",
    "Manuscript Preparation",
    "Peer Review",
    "Data Submission",
];

const MAX_STEP_SUGGESTIONS: usize = 5;

/// Look up a template by name (case-insensitive)
#[must_use]
pub fn template(name: &str) -> Option<&'static StepTemplate> {
    let wanted = name.trim();
    TEMPLATES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(wanted))
}

/// Common steps containing `input`, excluding an exact match, at most five
#[must_use]
pub fn step_suggestions(input: &str) -> Vec<&'static str> {
    let needle = input.to_lowercase();
    COMMON_STEPS
        .iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&needle) && *s != input)
        .take(MAX_STEP_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectDraft;

    #[test]
    fn template_lookup() {
        assert_eq!(template("rna-seq analysis").map(|t| t.len()), Some(15));
        assert!(template("Proteomics").is_none());
    }

    #[test]
    fn apply_template_splits_first_third() {
        let mut draft = ProjectDraft::new("Genome");
        let genome = template("Genome Assembly").unwrap();
        draft.apply_template(genome);

        // 14 steps: floor(14 / 3) = 4 completed
        assert_eq!(draft.completed_steps.len(), 4);
        assert_eq!(draft.next_steps.len(), 10);
        assert_eq!(draft.completed_steps[0].text, "DNA Extraction");
        assert_eq!(draft.next_steps[0].text, "Raw Data Quality Control");
    }

    #[test]
    fn apply_template_appends_to_existing_steps() {
        let mut draft = ProjectDraft::new("Variants");
        draft.apply_template(template("Variant Calling").unwrap());
        draft.apply_template(template("Variant Calling").unwrap());
        assert_eq!(draft.completed_steps.len(), 8);
        assert_eq!(draft.next_steps.len(), 18);
    }

    #[test]
    fn step_suggestions_filter() {
        assert_eq!(
            step_suggestions("analysis"),
            vec!["Statistical Analysis"]
        );
        assert!(step_suggestions("Sequencing").is_empty());
        assert_eq!(step_suggestions("").len(), 5);
    }
}
