use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use mealmix_catalog::MealCatalog;
use mealmix_mealplan::{PlanGenerator, UsedMealMemory, find_overused};
use mealmix_shared::{Error, Plan, PlanKind};
use mealmix_shopping::ShoppingList;
use rand::Rng;

use crate::config::PlannerConfig;
use crate::export::{Document, ExportFormat, export_path};

#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub kinds: Vec<PlanKind>,
    pub shopping: bool,
    pub export: Option<PathBuf>,
    pub format: ExportFormat,
}

#[derive(Debug)]
pub struct PlanReport {
    pub plans: Vec<Plan>,
    pub failures: Vec<(PlanKind, Error)>,
    pub shopping: Option<ShoppingList>,
    pub output: String,
}

/// Generates every requested plan in order with one shared memory.
///
/// A plan whose generation runs out of options is reported and skipped;
/// the remaining plans are still generated.
#[tracing::instrument(skip(catalog, planner, rng))]
pub fn plan<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    planner: &PlannerConfig,
    request: &PlanRequest,
    rng: &mut R,
) -> Result<PlanReport> {
    let mut memory = UsedMealMemory::new(planner.memory_capacity, planner.eviction);
    let mut plans = Vec::new();
    let mut failures = Vec::new();
    let mut output = String::new();

    for kind in &request.kinds {
        match PlanGenerator::generate_plan(catalog, *kind, &mut memory, rng) {
            Ok(plan) => {
                let document = Document::from_plan(kind.title(), &plan);
                output.push_str(&document.render(ExportFormat::Text)?);

                for entry in find_overused(&plan, planner.overuse_threshold) {
                    writeln!(
                        output,
                        "Warning: '{}' is planned {} times",
                        entry.item, entry.count
                    )?;
                }
                output.push('\n');

                plans.push(plan);
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(%kind, "{e}");
                writeln!(output, "Error: {kind} plan not generated: {e}\n")?;
                failures.push((*kind, e));
            }
            Err(e) => return Err(e.into()),
        }
    }

    let shopping = request.shopping.then(|| ShoppingList::aggregate(&plans));
    if let Some(list) = &shopping {
        writeln!(output, "Shopping list\n=============")?;
        for entry in list.items() {
            writeln!(output, "- {}: {}", entry.item, entry.count)?;
        }
    }

    if let Some(base) = &request.export {
        let several = plans.len() > 1;
        for (index, plan) in plans.iter().enumerate() {
            let position = several.then_some(index + 1);
            let path = export_path(base, position, plan.kind, request.format);
            Document::from_plan(plan.kind.title(), plan).write(&path, request.format)?;
            writeln!(output, "Exported {} plan to {}", plan.kind, path.display())?;
        }
    }

    Ok(PlanReport {
        plans,
        failures,
        shopping,
        output,
    })
}
