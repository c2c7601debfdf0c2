use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Breakfast,
    Lunch,
    Dinner,
}

impl Slot {
    /// Breakfast matches case-insensitively, lunch and dinner only ignore
    /// surrounding whitespace.
    pub fn normalize(&self, value: &str) -> String {
        match self {
            Slot::Breakfast => value.trim().to_lowercase(),
            Slot::Lunch | Slot::Dinner => value.trim().to_owned(),
        }
    }

    /// Slots in draw order.
    pub fn all() -> &'static [Slot] {
        Self::VARIANTS
    }

    pub fn title(&self) -> &'static str {
        match self {
            Slot::Breakfast => "Breakfast",
            Slot::Lunch => "Lunch",
            Slot::Dinner => "Dinner",
        }
    }
}

/// A row as read from the data source, before cleaning.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawRow {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}

impl RawRow {
    pub fn new(
        breakfast: impl Into<String>,
        lunch: impl Into<String>,
        dinner: impl Into<String>,
    ) -> Self {
        Self {
            breakfast: Some(breakfast.into()),
            lunch: Some(lunch.into()),
            dinner: Some(dinner.into()),
        }
    }

    /// Returns the normalized row, or `None` when any slot is missing or blank.
    pub fn normalize(&self) -> Option<MealRow> {
        let field = |slot: Slot, value: &Option<String>| {
            value
                .as_deref()
                .map(|v| slot.normalize(v))
                .filter(|v| !v.is_empty())
        };

        Some(MealRow {
            breakfast: field(Slot::Breakfast, &self.breakfast)?,
            lunch: field(Slot::Lunch, &self.lunch)?,
            dinner: field(Slot::Dinner, &self.dinner)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRow {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

impl MealRow {
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Breakfast => &self.breakfast,
            Slot::Lunch => &self.lunch,
            Slot::Dinner => &self.dinner,
        }
    }
}

/// One day's meals. Automatic generation fills every slot; manual flows may
/// leave some unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}

impl DayPlan {
    pub fn complete(
        breakfast: impl Into<String>,
        lunch: impl Into<String>,
        dinner: impl Into<String>,
    ) -> Self {
        Self {
            breakfast: Some(breakfast.into()),
            lunch: Some(lunch.into()),
            dinner: Some(dinner.into()),
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Breakfast => self.breakfast.as_deref(),
            Slot::Lunch => self.lunch.as_deref(),
            Slot::Dinner => self.dinner.as_deref(),
        }
    }

    pub fn set(&mut self, slot: Slot, value: impl Into<String>) {
        let value = Some(value.into());
        match slot {
            Slot::Breakfast => self.breakfast = value,
            Slot::Lunch => self.lunch = value,
            Slot::Dinner => self.dinner = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        Slot::VARIANTS.iter().all(|slot| self.get(*slot).is_some())
    }

    /// Set values in slot order.
    pub fn meals(&self) -> impl Iterator<Item = &str> {
        Slot::VARIANTS.iter().filter_map(|slot| self.get(*slot))
    }
}
