//! Buy-back result records and recommendation tiers

use serde::{Deserialize, Serialize};

/// Recommendation tier classified on break-even years
///
/// Boundaries are 2, 5, and 10 years, each exclusive of the upper edge:
/// a break-even of exactly 5.0 lands in the under-ten tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationTier {
    /// Break-even under two years
    HighlyRecommended,
    /// Break-even under five years
    StronglyRecommended,
    /// Break-even under ten years
    Recommended,
    /// Break-even at ten years or more
    ConsultSpecialist,
}

impl RecommendationTier {
    /// Classify a break-even period in years
    pub fn from_break_even(break_even_years: f64) -> Self {
        if break_even_years < 2.0 {
            RecommendationTier::HighlyRecommended
        } else if break_even_years < 5.0 {
            RecommendationTier::StronglyRecommended
        } else if break_even_years < 10.0 {
            RecommendationTier::Recommended
        } else {
            RecommendationTier::ConsultSpecialist
        }
    }

    /// Reader-facing recommendation text for the tier
    pub fn render(&self, break_even_years: f64) -> String {
        match self {
            RecommendationTier::HighlyRecommended => format!(
                "Highly recommended: the deposit pays for itself in about {:.1} years of retirement",
                break_even_years
            ),
            RecommendationTier::StronglyRecommended => {
                "Strongly recommended: the annuity increase recovers the deposit in under five years"
                    .to_string()
            }
            RecommendationTier::Recommended => {
                "Recommended: the deposit breaks even within ten years of retirement".to_string()
            }
            RecommendationTier::ConsultSpecialist => {
                "Consult a benefits specialist: the break-even period runs ten years or more"
                    .to_string()
            }
        }
    }
}

/// Deposit contribution of one grade period
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDeposit {
    /// Pay grade held during the period
    pub grade: String,

    /// Elapsed service in the period, 365.25-day years
    pub years: f64,

    /// Deposit principal contributed by the period
    pub deposit: f64,
}

/// Result record of a military buy-back calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilitaryBuyBackResult {
    /// Elapsed military service in 365.25-day years
    pub total_military_service: f64,

    /// Deposit principal before interest
    pub base_deposit: f64,

    /// Accrued interest on the unpaid deposit, never negative
    pub interest_amount: f64,

    /// Total owed: principal plus accrued interest
    pub deposit_amount: f64,

    /// Level monthly payment over the years remaining to retirement
    pub monthly_payment_option: f64,

    /// Annual annuity increase bought by the credited service
    pub annuity_increase: f64,

    /// Years of retirement for the annuity increase to repay the deposit
    pub break_even_years: f64,

    /// Annuity increase accumulated over a twenty year retirement
    pub lifetime_benefit: f64,

    /// Tier classification of the break-even period
    pub tier: RecommendationTier,

    /// Rendered recommendation text for the tier
    pub recommendation: String,

    /// Per-period deposits, present only in multi-period mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_breakdown: Option<Vec<PeriodDeposit>>,
}
