//! Subcommand handlers
//!
//! Each handler reads its typed arguments, drives the store or a view and
//! writes human-readable (or JSON) output.

use anyhow::{anyhow, bail, Context as _, Result};
use chrono::NaiveDate;
use clap::ArgMatches;
use labtrack_export::{write_report, ReportFormat};
use labtrack_model::{
    step_suggestions, template, Attachment, AttachmentId, Priority, Project, ProjectDraft,
    ProjectId, ProjectPatch, Stage, Step, StepCategory, StepList, TEMPLATES,
};
use labtrack_persist::StorageBackend;
use labtrack_store::ProjectStore;
use labtrack_views::format::{format_file_size, format_tracked};
use labtrack_views::{
    matches, suggest_with, summarize_with, timeline, FilterQuery, Insights, Suggestion,
    ViewConfig,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Inputs shared by every handler
#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
    /// View thresholds
    pub views: &'a ViewConfig,
    /// Reference date for date metrics
    pub today: NaiveDate,
}

fn required<T: Clone + Send + Sync + 'static>(args: &ArgMatches, name: &str) -> Result<T> {
    args.get_one::<T>(name)
        .cloned()
        .ok_or_else(|| anyhow!("missing argument <{name}>"))
}

fn strings(args: &ArgMatches, name: &str) -> Vec<String> {
    args.get_many::<String>(name)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn project_id(args: &ArgMatches) -> Result<ProjectId> {
    required::<String>(args, "id").map(ProjectId::from_raw)
}

fn find<'s, B: StorageBackend>(store: &'s ProjectStore<B>, id: &ProjectId) -> Result<&'s Project> {
    store
        .get(id)
        .ok_or_else(|| anyhow!("no project with id {id}"))
}

/// Run a synchronous subcommand
///
/// # Errors
/// Returns an error for unknown ids, invalid input, failed exports and
/// output failures.
pub fn execute<B: StorageBackend>(
    store: &mut ProjectStore<B>,
    ctx: RunContext<'_>,
    name: &str,
    args: &ArgMatches,
    out: &mut dyn Write,
) -> Result<()> {
    match name {
        "list" => list(store, args, out),
        "show" => show(store, ctx, args, out),
        "add" => add(store, args, out),
        "update" => update(store, args, out),
        "remove" => {
            let id = project_id(args)?;
            if !store.remove(&id) {
                bail!("no project with id {id}");
            }
            writeln!(out, "Removed {id}")?;
            Ok(())
        }
        "move" => {
            let id = project_id(args)?;
            let index = required::<usize>(args, "index")?;
            if !store.reposition(&id, index) {
                bail!("no project with id {id}");
            }
            let at = store.position(&id).unwrap_or(index);
            writeln!(out, "Moved {id} to position {at}")?;
            Ok(())
        }
        "move-step" => {
            let id = project_id(args)?;
            let list = required::<StepList>(args, "list")?;
            let from = required::<usize>(args, "from")?;
            let to = required::<usize>(args, "to")?;
            find(store, &id)?;
            if !store.reposition_step(&id, list, from, to) {
                bail!("step index {from} out of range");
            }
            writeln!(out, "Moved step {from} to {to}")?;
            Ok(())
        }
        "attach" => attach(store, args, out),
        "detach" => {
            let id = project_id(args)?;
            let attachment = AttachmentId::from_raw(required::<String>(args, "attachment")?);
            find(store, &id)?;
            if !store.remove_attachment(&id, &attachment) {
                bail!("no attachment with id {attachment}");
            }
            writeln!(out, "Removed attachment {attachment}")?;
            Ok(())
        }
        "insights" => {
            let insights = summarize_with(store.projects(), ctx.today, ctx.views);
            if args.get_flag("json") {
                serde_json::to_writer_pretty(&mut *out, &insights)?;
                writeln!(out)?;
            } else {
                print_insights(&insights, out)?;
            }
            Ok(())
        }
        "suggest" => {
            let focus = match args.get_one::<String>("focus") {
                Some(raw) => Some(find(store, &ProjectId::from_raw(raw.as_str()))?),
                None => None,
            };
            let suggestions = suggest_with(store.projects(), focus, ctx.today, ctx.views);
            if args.get_flag("json") {
                serde_json::to_writer_pretty(&mut *out, &suggestions)?;
                writeln!(out)?;
            } else {
                print_suggestions(&suggestions, out)?;
            }
            Ok(())
        }
        "export" => export(store, ctx, args, out),
        "dark-mode" => {
            if let Some(enabled) = args.get_one::<bool>("state") {
                store.set_dark_mode(*enabled);
            }
            let state = if store.dark_mode() { "on" } else { "off" };
            writeln!(out, "Dark mode: {state}")?;
            Ok(())
        }
        "tags" => {
            for tag in store.available_tags() {
                writeln!(out, "{tag}")?;
            }
            Ok(())
        }
        "templates" => {
            for t in TEMPLATES {
                writeln!(out, "{} ({} steps, {})", t.name, t.len(), t.category)?;
            }
            Ok(())
        }
        "step-hints" => {
            let input = required::<String>(args, "input")?;
            for hint in step_suggestions(&input) {
                writeln!(out, "{hint}")?;
            }
            Ok(())
        }
        other => bail!("unsupported command '{other}'"),
    }
}

fn list<B: StorageBackend>(store: &ProjectStore<B>, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let mut query = FilterQuery::new();
    if let Some(text) = args.get_one::<String>("search") {
        query = query.with_text(text.as_str());
    }
    if let Some(stage) = args.get_one::<Stage>("stage") {
        query = query.with_stage(*stage);
    }
    if let Some(priority) = args.get_one::<Priority>("priority") {
        query = query.with_priority(*priority);
    }
    for tag in strings(args, "tag") {
        query = query.with_tag(tag);
    }

    let listed: Vec<(usize, &Project)> = store
        .projects()
        .iter()
        .enumerate()
        .filter(|(_, project)| matches(project, &query))
        .collect();
    if args.get_flag("json") {
        let projects: Vec<&Project> = listed.iter().map(|(_, project)| *project).collect();
        serde_json::to_writer_pretty(&mut *out, &projects)?;
        writeln!(out)?;
        return Ok(());
    }

    if listed.is_empty() {
        writeln!(out, "No projects found")?;
    }
    for (position, project) in listed {
        write!(
            out,
            "{position:>3}. [{}] {} | {} | {} | {}",
            project.id, project.name, project.stage, project.progress, project.priority
        )?;
        if let Some(due) = project.due_date {
            write!(out, " | due {due}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn show<B: StorageBackend>(
    store: &ProjectStore<B>,
    ctx: RunContext<'_>,
    args: &ArgMatches,
    out: &mut dyn Write,
) -> Result<()> {
    let project = find(store, &project_id(args)?)?;
    if args.get_flag("json") {
        serde_json::to_writer_pretty(&mut *out, project)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{} [{}]", project.name, project.id)?;
    writeln!(out, "Stage: {}", project.stage)?;
    writeln!(out, "Progress: {}", project.progress)?;
    writeln!(out, "Priority: {}", project.priority)?;
    if !project.description.is_empty() {
        writeln!(out, "Description: {}", project.description)?;
    }
    if !project.tags.is_empty() {
        let tags: Vec<&str> = project.tags.iter().map(String::as_str).collect();
        writeln!(out, "Tags: {}", tags.join(", "))?;
    }
    if let Some(t) = timeline(project, ctx.today) {
        writeln!(
            out,
            "Timeline: {} to {}, {}% ({} of {} days)",
            t.start,
            t.due,
            t.rounded_percent(),
            t.elapsed_days,
            t.total_days
        )?;
    } else if let Some(days) = project.days_until_due(ctx.today) {
        writeln!(out, "Due in {days} days")?;
    }
    if project.time_tracked > 0 {
        writeln!(out, "Tracked: {}", format_tracked(project.time_tracked))?;
    }

    for (label, list) in [("Completed", StepList::Completed), ("Next", StepList::Next)] {
        let steps = project.steps(list);
        if steps.is_empty() {
            continue;
        }
        writeln!(out, "{label} steps:")?;
        for (i, step) in steps.iter().enumerate() {
            writeln!(out, "  {i}. {} ({})", step.text, step.category)?;
        }
    }

    if !project.attachments.is_empty() {
        writeln!(out, "Attachments:")?;
        for a in &project.attachments {
            writeln!(
                out,
                "  [{}] {} {} {}",
                a.id,
                a.name,
                format_file_size(a.size),
                a.uploaded_at.format("%b %d, %Y")
            )?;
        }
    }

    let suggestions = suggest_with(store.projects(), Some(project), ctx.today, ctx.views);
    if !suggestions.is_empty() {
        writeln!(out)?;
        print_suggestions(&suggestions, out)?;
    }
    Ok(())
}

fn add<B: StorageBackend>(store: &mut ProjectStore<B>, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let mut draft = ProjectDraft::new(required::<String>(args, "name")?);
    if let Some(stage) = args.get_one::<Stage>("stage") {
        draft = draft.with_stage(*stage);
    }
    if let Some(priority) = args.get_one::<Priority>("priority") {
        draft = draft.with_priority(*priority);
    }
    if let Some(progress) = args.get_one::<i64>("progress") {
        draft = draft.with_progress(*progress);
    }
    draft = draft.with_dates(
        args.get_one::<NaiveDate>("start").copied(),
        args.get_one::<NaiveDate>("due").copied(),
    );
    if let Some(description) = args.get_one::<String>("description") {
        draft = draft.with_description(description.as_str());
    }
    for tag in strings(args, "tag") {
        draft = draft.with_tag(tag);
    }
    if let Some(name) = args.get_one::<String>("template") {
        let tpl = template(name).ok_or_else(|| anyhow!("unknown template '{name}'"))?;
        draft.apply_template(tpl);
    }
    for step in strings(args, "next") {
        draft = draft.with_step(StepList::Next, Step::new(step, StepCategory::Other));
    }

    let id = store.append(draft)?;
    writeln!(out, "Created {id}")?;
    Ok(())
}

fn update<B: StorageBackend>(store: &mut ProjectStore<B>, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let id = project_id(args)?;
    let mut patch = ProjectPatch::new();
    if let Some(name) = args.get_one::<String>("name") {
        patch = patch.with_name(name.as_str());
    }
    if let Some(stage) = args.get_one::<Stage>("stage") {
        patch = patch.with_stage(*stage);
    }
    if let Some(priority) = args.get_one::<Priority>("priority") {
        patch = patch.with_priority(*priority);
    }
    if let Some(progress) = args.get_one::<i64>("progress") {
        patch = patch.with_progress(*progress);
    }
    if let Some(start) = args.get_one::<NaiveDate>("start") {
        patch = patch.with_start_date(Some(*start));
    } else if args.get_flag("clear-start") {
        patch = patch.with_start_date(None);
    }
    if let Some(due) = args.get_one::<NaiveDate>("due") {
        patch = patch.with_due_date(Some(*due));
    } else if args.get_flag("clear-due") {
        patch = patch.with_due_date(None);
    }
    if let Some(description) = args.get_one::<String>("description") {
        patch = patch.with_description(description.as_str());
    }
    let tags = strings(args, "tag");
    if !tags.is_empty() {
        patch = patch.with_tags(tags);
    }

    if patch.is_empty() {
        writeln!(out, "Nothing to update")?;
        return Ok(());
    }
    if !store.update(&id, patch)? {
        bail!("no project with id {id}");
    }
    writeln!(out, "Updated {id}")?;
    Ok(())
}

fn attach<B: StorageBackend>(store: &mut ProjectStore<B>, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let id = project_id(args)?;
    let path = required::<PathBuf>(args, "file")?;
    find(store, &id)?;

    let meta = std::fs::metadata(&path).with_context(|| format!("cannot stat {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("{} has no file name", path.display()))?;
    let attachment = Attachment::new(name, meta.len(), guess_mime(&path));
    let attachment_id = attachment.id.clone();

    store.add_attachment(&id, attachment);
    writeln!(out, "Attached {attachment_id} ({})", format_file_size(meta.len()))?;
    Ok(())
}

fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "txt" | "fasta" | "fa" | "fastq" | "fq" | "vcf" | "sam" | "gff" | "gtf" | "bed" => "text/plain",
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gz" => "application/gzip",
        _ => "application/octet-stream",
    }
}

fn export<B: StorageBackend>(
    store: &ProjectStore<B>,
    ctx: RunContext<'_>,
    args: &ArgMatches,
    out: &mut dyn Write,
) -> Result<()> {
    let format = args.get_one::<ReportFormat>("format").copied().unwrap_or_default();
    let path = args
        .get_one::<PathBuf>("out")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(format.file_name()));

    let insights = summarize_with(store.projects(), ctx.today, ctx.views);
    let exporter = format.exporter();
    write_report(&path, exporter.as_ref(), store.projects(), &insights, ctx.today)?;
    writeln!(out, "Report written to {}", path.display())?;
    Ok(())
}

fn print_insights(insights: &Insights, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Total projects: {}", insights.total_projects)?;
    writeln!(out, "Completed: {}", insights.completed_projects)?;
    writeln!(out, "High priority: {}", insights.high_priority_projects)?;
    writeln!(out, "Average progress: {}%", insights.rounded_average_progress())?;
    let buckets = insights.stage_buckets;
    writeln!(
        out,
        "Planning / in progress / complete: {} / {} / {}",
        buckets.planning, buckets.in_progress, buckets.complete
    )?;

    if !insights.projects_by_stage.is_empty() {
        writeln!(out, "By stage:")?;
        for (stage, count) in &insights.projects_by_stage {
            writeln!(out, "  {stage}: {count}")?;
        }
    }
    if !insights.projects_by_priority.is_empty() {
        writeln!(out, "By priority:")?;
        for (priority, count) in &insights.projects_by_priority {
            writeln!(out, "  {priority}: {count}")?;
        }
    }
    if !insights.upcoming_deadlines.is_empty() {
        writeln!(out, "Upcoming deadlines:")?;
        for u in &insights.upcoming_deadlines {
            writeln!(out, "  {} (in {} days)", u.project.name, u.days_until_due)?;
        }
    }
    if !insights.overdue_projects.is_empty() {
        writeln!(out, "Overdue:")?;
        for o in &insights.overdue_projects {
            writeln!(out, "  {} ({} days overdue)", o.project.name, o.days_overdue)?;
        }
    }

    let metrics = insights.time_metrics;
    writeln!(out, "Average duration: {:.1} days", metrics.average_project_duration)?;
    writeln!(out, "Average steps: {:.1}", metrics.average_steps_per_project)?;
    writeln!(out, "Time tracked: {}", format_tracked(metrics.total_time_tracked))?;
    Ok(())
}

fn print_suggestions(suggestions: &[Suggestion], out: &mut dyn Write) -> Result<()> {
    if suggestions.is_empty() {
        writeln!(out, "No suggestions")?;
    }
    for s in suggestions {
        writeln!(out, "[{}] {}: {}", s.priority, s.title, s.description)?;
    }
    Ok(())
}
