use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Trigger content categories, in report order.
///
/// The order is fixed and significant: prompts list the categories in this
/// order and the final report is emitted in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Violence,
    Death,
    SubstanceUse,
    Gore,
    Vomit,
    SexualContent,
    SexualAbuse,
    SelfHarm,
    GunUse,
    AnimalCruelty,
    MentalHealth,
}

impl Category {
    /// All categories in report order
    pub const ALL: [Category; 11] = [
        Category::Violence,
        Category::Death,
        Category::SubstanceUse,
        Category::Gore,
        Category::Vomit,
        Category::SexualContent,
        Category::SexualAbuse,
        Category::SelfHarm,
        Category::GunUse,
        Category::AnimalCruelty,
        Category::MentalHealth,
    ];

    /// Canonical label with underscores, as rendered in prompts and reports
    pub fn name(&self) -> &'static str {
        match self {
            Category::Violence => "VIOLENCE",
            Category::Death => "DEATH",
            Category::SubstanceUse => "SUBSTANCE_USE",
            Category::Gore => "GORE",
            Category::Vomit => "VOMIT",
            Category::SexualContent => "SEXUAL_CONTENT",
            Category::SexualAbuse => "SEXUAL_ABUSE",
            Category::SelfHarm => "SELF_HARM",
            Category::GunUse => "GUN_USE",
            Category::AnimalCruelty => "ANIMAL_CRUELTY",
            Category::MentalHealth => "MENTAL_HEALTH",
        }
    }

    /// Matching form: the label with underscores replaced by spaces.
    ///
    /// Model output routinely drops the underscores, so responses are
    /// matched against this phrase rather than the canonical label.
    pub fn display_phrase(&self) -> String {
        self.name().replace('_', " ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-window outcome for a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Yes,
    No,
    Maybe,
}

/// Ordered verdicts for one window, one per `Category::ALL` entry
pub type VerdictVector = Vec<Verdict>;
