use labtrack_model::{Priority, Project, Stage};
use labtrack_test_utils::{fixed_today, project};
use labtrack_views::filter::{matches_priority, matches_stage, matches_tags, matches_text};
use labtrack_views::{
    filter_projects, matches, suggest_at, summarize_at, FilterQuery, Insights, SuggestionPriority,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const TAGS: [&str; 4] = ["RNA-seq", "Cancer", "Genome", "Plant"];
const WORDS: [&str; 4] = ["tumor", "assembly", "variant", "soil"];

fn arb_project() -> impl Strategy<Value = Project> {
    (
        0..WORDS.len(),
        0..Stage::ALL.len(),
        0..Priority::ALL.len(),
        0i64..=100,
        proptest::option::of(-20i64..20),
        proptest::collection::vec(0..TAGS.len(), 0..3),
        proptest::bool::ANY,
    )
        .prop_map(|(word, stage, priority, progress, due, tags, with_step)| {
            let mut b = project(&format!("{} study", WORDS[word]))
                .stage(Stage::ALL[stage])
                .priority(Priority::ALL[priority])
                .progress(progress);
            if let Some(days) = due {
                b = b.due_in(days);
            }
            for t in tags {
                b = b.tag(TAGS[t]);
            }
            if with_step {
                b = b.next_step(WORDS[(word + 1) % WORDS.len()]);
            }
            b.build()
        })
}

fn arb_query() -> impl Strategy<Value = FilterQuery> {
    (
        proptest::option::of(0..WORDS.len()),
        proptest::option::of(0..Stage::ALL.len()),
        proptest::option::of(0..Priority::ALL.len()),
        proptest::collection::vec(0..TAGS.len(), 0..3),
    )
        .prop_map(|(word, stage, priority, tags)| {
            let mut q = FilterQuery::new();
            if let Some(w) = word {
                q = q.with_text(WORDS[w].to_uppercase());
            }
            if let Some(s) = stage {
                q = q.with_stage(Stage::ALL[s]);
            }
            if let Some(p) = priority {
                q = q.with_priority(Priority::ALL[p]);
            }
            for t in tags {
                q = q.with_tag(TAGS[t]);
            }
            q
        })
}

fn ids(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_summarize_empty() {
    let insights = summarize_at(&[], fixed_today());
    assert_eq!(insights.total_projects, 0);
    assert_eq!(insights.completed_projects, 0);
    assert_eq!(insights.average_progress, 0.0);
    assert!(insights.projects_by_stage.is_empty());
    assert!(insights.projects_by_priority.is_empty());
    assert!(insights.upcoming_deadlines.is_empty());
    assert!(insights.overdue_projects.is_empty());
    assert_eq!(insights.time_metrics.average_project_duration, 0.0);
    assert_eq!(insights.time_metrics.average_steps_per_project, 0.0);
}

#[test]
fn test_completed_and_one_day_overdue() {
    let projects = vec![
        project("finished").progress(100).build(),
        project("late").progress(40).due_in(-1).build(),
    ];
    let insights = summarize_at(&projects, fixed_today());
    assert_eq!(insights.completed_projects, 1);
    assert_eq!(insights.overdue_projects.len(), 1);
    assert_eq!(insights.overdue_projects[0].project.name, "late");
    assert_eq!(insights.overdue_projects[0].days_overdue, 1);
}

#[test]
fn test_deadline_then_plan_next_steps() {
    let focus = project("focus").progress(50).due_in(2).build();
    let out = suggest_at(&[], Some(&focus), fixed_today());
    let titles: Vec<_> = out.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Deadline Approaching", "Plan Next Steps"]);
    assert!(out[0].description.contains('2'));
}

#[test]
fn test_suggestions_sorted_by_rank() {
    let focus = project("focus").progress(0).build();
    let others = vec![
        project("late").progress(10).due_in(-3).next_step("x").build(),
        project("late too").progress(95).due_in(-1).next_step("x").build(),
    ];
    let out = suggest_at(&others, Some(&focus), fixed_today());
    let ranks: Vec<_> = out.iter().map(|s| s.priority.rank()).collect();
    let mut sorted = ranks.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(ranks, sorted);
    assert_eq!(out[0].priority, SuggestionPriority::High);
}

#[test]
fn test_filter_by_tag_and_text() {
    let projects = vec![
        project("Tumor RNA").tag("Cancer").build(),
        project("Soil survey").tag("Plant").build(),
        project("Tumor WGS").tag("Genome").build(),
    ];
    let query = FilterQuery::new()
        .with_text("tumor")
        .with_tag("Cancer")
        .with_tag("Genome");
    let names: Vec<_> = filter_projects(&projects, &query)
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Tumor RNA", "Tumor WGS"]);
}

fn same_counts(a: &Insights, b: &Insights) -> bool {
    a.total_projects == b.total_projects
        && a.completed_projects == b.completed_projects
        && a.high_priority_projects == b.high_priority_projects
        && a.projects_by_stage == b.projects_by_stage
        && a.projects_by_priority == b.projects_by_priority
        && a.stage_buckets == b.stage_buckets
        && a.upcoming_deadlines.len() == b.upcoming_deadlines.len()
        && a.overdue_projects.len() == b.overdue_projects.len()
        && a.time_metrics.total_time_tracked == b.time_metrics.total_time_tracked
}

proptest! {
    #[test]
    fn prop_matches_is_conjunction(p in arb_project(), q in arb_query()) {
        let expected = matches_text(&p, &q.text)
            && matches_stage(&p, q.stage)
            && matches_priority(&p, q.priority)
            && matches_tags(&p, &q.tags);
        prop_assert_eq!(matches(&p, &q), expected);

        let any_tag = q.tags.is_empty() || q.tags.iter().any(|t| p.tags.contains(t));
        prop_assert_eq!(matches_tags(&p, &q.tags), any_tag);
    }

    #[test]
    fn prop_filter_preserves_order(
        projects in proptest::collection::vec(arb_project(), 0..12),
        q in arb_query(),
    ) {
        let kept: Vec<Project> = filter_projects(&projects, &q).into_iter().cloned().collect();
        let expected: Vec<Project> = projects.iter().filter(|p| matches(p, &q)).cloned().collect();
        prop_assert_eq!(ids(&kept), ids(&expected));
    }

    #[test]
    fn prop_summarize_is_permutation_invariant(
        (original, shuffled) in proptest::collection::vec(arb_project(), 0..12)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = summarize_at(&original, fixed_today());
        let b = summarize_at(&shuffled, fixed_today());
        prop_assert!(same_counts(&a, &b));
        prop_assert!((a.average_progress - b.average_progress).abs() < 1e-9);

        for (input, insights) in [(&original, &a), (&shuffled, &b)] {
            let overdue: Vec<&str> =
                insights.overdue_projects.iter().map(|o| o.project.id.as_str()).collect();
            let expected: Vec<&str> = input
                .iter()
                .filter(|p| p.is_overdue(fixed_today()))
                .map(|p| p.id.as_str())
                .collect();
            prop_assert_eq!(overdue, expected);

            let upcoming: Vec<&str> =
                insights.upcoming_deadlines.iter().map(|u| u.project.id.as_str()).collect();
            let expected: Vec<&str> = input
                .iter()
                .filter(|p| p.days_until_due(fixed_today()).is_some_and(|d| (0..=7).contains(&d)))
                .map(|p| p.id.as_str())
                .collect();
            prop_assert_eq!(upcoming, expected);
        }
    }
}
