use serde::{Deserialize, Serialize};

/// Points each scoring rule contributed, after its own cap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub contact: u32,
    pub sections: u32,
    pub keywords: u32,
    pub achievements: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.contact + self.sections + self.keywords + self.achievements
    }
}

/// Evidence behind a score. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsFactors {
    pub email: bool,
    pub phone: bool,
    pub sections_found: Vec<String>,
    pub keywords_found: Vec<String>,
    pub quantifiable_achievements: u32,
    pub breakdown: ScoreBreakdown,
    /// Role table key the requested role resolved to; `None` means generic keywords only.
    pub matched_role: Option<String>,
    pub total_score: u32,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32, // 0 – 100
    pub factors: AtsFactors,
}

/// JSON body for POST /analyze. Missing fields default so the handler can report them.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Successful response for both entry points.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub score: u32,
    pub factors: AtsFactors,
    pub suggestions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub role: String,
}
