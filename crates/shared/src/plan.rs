use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Weekday;

use crate::DayPlan;

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    #[default]
    Week,
    Month,
}

impl PlanKind {
    pub fn day_count(&self) -> usize {
        match self {
            PlanKind::Week => 7,
            PlanKind::Month => 30,
        }
    }

    /// Weekly plans start on Monday, monthly plans are numbered from 1.
    pub fn day_label(&self, index: usize) -> String {
        match self {
            PlanKind::Week => Weekday::Monday.nth_next((index % 7) as u8).to_string(),
            PlanKind::Month => format!("Day {}", index + 1),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PlanKind::Week => "Weekly meal plan",
            PlanKind::Month => "Monthly meal plan",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedDay {
    pub label: String,
    pub meals: DayPlan,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub kind: PlanKind,
    pub days: Vec<PlannedDay>,
}

impl Plan {
    /// A plan with every day present and every slot unset, for manual filling.
    pub fn empty(kind: PlanKind) -> Self {
        Self::from_days(kind, vec![DayPlan::default(); kind.day_count()])
    }

    /// Labels `days` in order. Extra days beyond the kind's length keep
    /// being labelled by the same scheme.
    pub fn from_days(kind: PlanKind, days: Vec<DayPlan>) -> Self {
        let days = days
            .into_iter()
            .enumerate()
            .map(|(index, meals)| PlannedDay {
                label: kind.day_label(index),
                meals,
            })
            .collect();

        Self { kind, days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day_mut(&mut self, index: usize) -> Option<&mut DayPlan> {
        self.days.get_mut(index).map(|day| &mut day.meals)
    }

    /// Every set meal value, day by day in slot order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.days.iter().flat_map(|day| day.meals.meals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Slot;

    #[test]
    fn test_week_labels() {
        let plan = Plan::empty(PlanKind::Week);
        let labels = plan
            .days
            .iter()
            .map(|d| d.label.as_str())
            .collect::<Vec<_>>();

        assert_eq!(
            labels,
            vec![
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }

    #[test]
    fn test_month_labels() {
        let plan = Plan::empty(PlanKind::Month);
        assert_eq!(plan.len(), 30);
        assert_eq!(plan.days[0].label, "Day 1");
        assert_eq!(plan.days[29].label, "Day 30");
    }

    #[test]
    fn test_manual_fill_and_items() {
        let mut plan = Plan::empty(PlanKind::Week);
        plan.day_mut(0).unwrap().set(Slot::Breakfast, "oats");
        plan.day_mut(3).unwrap().set(Slot::Dinner, "rice");

        assert_eq!(plan.items().collect::<Vec<_>>(), vec!["oats", "rice"]);
        assert!(plan.day_mut(7).is_none());
    }
}
