use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use mealmix_shared::{Plan, PlanKind, Slot};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Markdown,
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// One day of an exported plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Single-page document: a title followed by one section per day, in day
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn from_plan(title: impl Into<String>, plan: &Plan) -> Self {
        let sections = plan
            .days
            .iter()
            .map(|day| Section {
                heading: day.label.to_owned(),
                lines: Slot::all()
                    .iter()
                    .map(|slot| format!("{}: {}", slot.title(), day.meals.get(*slot).unwrap_or("-")))
                    .collect(),
            })
            .collect();

        Self {
            title: title.into(),
            sections,
        }
    }

    pub fn render(&self, format: ExportFormat) -> Result<String> {
        let mut out = String::new();

        match format {
            ExportFormat::Markdown => {
                writeln!(out, "# {}", self.title)?;
                for section in &self.sections {
                    writeln!(out, "\n## {}\n", section.heading)?;
                    for line in &section.lines {
                        writeln!(out, "- {line}")?;
                    }
                }
            }
            ExportFormat::Text => {
                writeln!(out, "{}", self.title)?;
                writeln!(out, "{}", "=".repeat(self.title.chars().count()))?;
                for section in &self.sections {
                    writeln!(out, "\n{}", section.heading)?;
                    for line in &section.lines {
                        writeln!(out, "  {line}")?;
                    }
                }
            }
            ExportFormat::Json => {
                out = serde_json::to_string_pretty(self)?;
                out.push('\n');
            }
        }

        Ok(out)
    }

    pub fn write(&self, path: &Path, format: ExportFormat) -> Result<()> {
        let rendered = self.render(format)?;
        std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write export to '{}'", path.display()))?;

        tracing::info!(path = %path.display(), sections = self.sections.len(), "plan exported");

        Ok(())
    }
}

/// Target file for one plan. With several plans in one run, the plan's
/// 1-based position and kind are appended to the file stem
/// (`plan.md` → `plan-2-month.md`).
pub fn export_path(
    base: &Path,
    position: Option<usize>,
    kind: PlanKind,
    format: ExportFormat,
) -> PathBuf {
    let mut path = base.to_path_buf();
    if path.extension().is_none() {
        path.set_extension(format.extension());
    }

    let Some(position) = position else {
        return path;
    };

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}-{position}-{kind}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{position}-{kind}"),
    };
    path.set_file_name(file_name);
    path
}
