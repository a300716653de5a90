use serde::{Deserialize, Deserializer, Serialize};

/// Single customer snapshot consumed by every calculator. Identity fields
/// are passthrough only and never influence a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(default, alias = "Customer_ID")]
    pub customer_id: Option<String>,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(alias = "Num_of_Delayed_Payment")]
    pub delayed_payments: u32,
    #[serde(alias = "Delay_from_due_date")]
    pub delay_days: u32,
    #[serde(
        alias = "Payment_of_Min_Amount",
        deserialize_with = "bool_or_zero_one"
    )]
    pub min_payment_only: bool,
    #[serde(alias = "Credit_Utilization_Ratio")]
    pub utilization: f64,
    #[serde(alias = "Credit_History_Age_Years")]
    pub history_years: f64,
    #[serde(alias = "Credit_Mix")]
    pub credit_mix: CreditMix,
    #[serde(alias = "Num_Credit_Inquiries")]
    pub inquiries: u32,
}

/// Bureau-reported account mix. Anything other than an exact "Good" label
/// is treated as Other, matching the upstream data dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CreditMix {
    Good,
    Other,
}

impl CreditMix {
    pub fn from_label(label: &str) -> Self {
        if label.trim() == "Good" {
            Self::Good
        } else {
            Self::Other
        }
    }
}

impl<'de> Deserialize<'de> for CreditMix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(CreditMix::from_label(&raw))
    }
}

fn bool_or_zero_one<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Numeric(u8),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Numeric(0) => Ok(false),
        Flag::Numeric(1) => Ok(true),
        Flag::Numeric(other) => Err(serde::de::Error::custom(format!(
            "minimum-payment flag must be 0 or 1, got {other}"
        ))),
    }
}

/// Named risk band derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditTier {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl CreditTier {
    /// Threshold ladder, first match wins.
    pub fn for_score(score: u16) -> Self {
        if score >= 750 {
            Self::Excellent
        } else if score >= 700 {
            Self::VeryGood
        } else if score >= 650 {
            Self::Good
        } else if score >= 550 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Traffic-light indicator shown next to the tier label.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Excellent | Self::VeryGood => "\u{1F7E2}",
            Self::Good => "\u{1F7E1}",
            Self::Fair => "\u{1F7E0}",
            Self::Poor => "\u{1F534}",
        }
    }

    /// Percentage-point adjustment applied on top of a loan base rate.
    pub fn rate_adjustment(self) -> f64 {
        match self {
            Self::Excellent => -1.5,
            Self::VeryGood => -0.75,
            Self::Good => 0.0,
            Self::Fair => 2.5,
            Self::Poor => 5.0,
        }
    }

    pub fn ordered() -> [CreditTier; 5] {
        [
            Self::Excellent,
            Self::VeryGood,
            Self::Good,
            Self::Fair,
            Self::Poor,
        ]
    }
}

/// Loan product category used to select a pricing base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanCategory {
    Personal,
    Housing,
    Auto,
    Student,
    Other,
}

impl Default for LoanCategory {
    fn default() -> Self {
        Self::Other
    }
}

impl LoanCategory {
    /// Annual base rate in percent before tier and DTI adjustments.
    pub fn base_rate(self) -> f64 {
        match self {
            Self::Personal => 10.5,
            Self::Housing => 7.5,
            Self::Auto => 8.0,
            Self::Student => 6.5,
            Self::Other => 11.0,
        }
    }

    /// Accepts both the short form ("housing") and the upstream display
    /// labels ("Housing Loan"); unknown input falls back to Other.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized
            .strip_suffix(" loan")
            .unwrap_or(normalized.as_str())
        {
            "personal" => Self::Personal,
            "housing" | "home" => Self::Housing,
            "auto" | "car" => Self::Auto,
            "student" => Self::Student,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Loan",
            Self::Housing => "Housing Loan",
            Self::Auto => "Auto Loan",
            Self::Student => "Student Loan",
            Self::Other => "Other",
        }
    }
}

/// Urgency attached to an improvement suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SuggestionPriority {
    High,
    Medium,
}

impl SuggestionPriority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
        }
    }
}

/// Scoring factor a suggestion targets. Each category fires at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionCategory {
    PaymentHistory,
    CreditUtilization,
    CreditHistory,
    PaymentBehavior,
}

impl SuggestionCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::PaymentHistory => "Payment History",
            Self::CreditUtilization => "Credit Utilization",
            Self::CreditHistory => "Credit History",
            Self::PaymentBehavior => "Payment Behavior",
        }
    }
}

/// Single improvement action with its expected score impact range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub priority: SuggestionPriority,
    pub category: SuggestionCategory,
    pub message: String,
    pub impact: &'static str,
}
