//! Company size / industry / hiring-focus heuristics

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    Startup,
    /// Part of the persisted schema; the classifier never produces it.
    #[serde(rename = "Mid-size")]
    MidSize,
    Enterprise,
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanySize::Startup => write!(f, "Startup"),
            CompanySize::MidSize => write!(f, "Mid-size"),
            CompanySize::Enterprise => write!(f, "Enterprise"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIntel {
    pub size: CompanySize,
    pub industry: String,
    pub focus: String,
}

const ENTERPRISE_COMPANIES: &[&str] = &[
    "google",
    "amazon",
    "microsoft",
    "meta",
    "facebook",
    "netflix",
    "apple",
    "adobe",
    "salesforce",
    "uber",
    "infosys",
    "tcs",
    "wipro",
    "accenture",
    "cognizant",
    "ibm",
    "oracle",
    "sap",
    "cisco",
    "intel",
];

const ENTERPRISE_JD_MARKERS: &[&str] = &["mnc", "corporation", "global"];

const DEFAULT_INDUSTRY: &str = "Technology Services";

/// Evaluated in order; a later match overrides an earlier one.
const INDUSTRY_RULES: &[(&[&str], &str)] = &[
    (&["bank", "financial"], "FinTech"),
    (&["health", "pharma"], "HealthTech"),
    (&["commerce", "retail"], "E-commerce"),
];

const ENTERPRISE_FOCUS: &str = "Strong Fundamentals (DSA, Core CS) & System Design capability.";
const STARTUP_FOCUS: &str = "Practical problem solving & strict tech stack adherence.";

/// Classify a company by name fragments and JD wording.
pub fn profile_company(company: &str, jd_text: &str) -> CompanyIntel {
    let lower_company = company.to_lowercase();
    let lower_jd = jd_text.to_lowercase();

    let is_enterprise = ENTERPRISE_COMPANIES
        .iter()
        .any(|name| lower_company.contains(name))
        || ENTERPRISE_JD_MARKERS
            .iter()
            .any(|marker| lower_jd.contains(marker));

    let size = if is_enterprise {
        CompanySize::Enterprise
    } else {
        CompanySize::Startup
    };

    let focus = match size {
        CompanySize::Enterprise => ENTERPRISE_FOCUS,
        CompanySize::Startup | CompanySize::MidSize => STARTUP_FOCUS,
    };

    let mut industry = DEFAULT_INDUSTRY;
    for &(fragments, label) in INDUSTRY_RULES {
        if fragments.iter().any(|f| lower_company.contains(f)) {
            industry = label;
        }
    }

    CompanyIntel {
        size,
        industry: industry.to_string(),
        focus: focus.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_enterprise_name() {
        let intel = profile_company("Google Inc", "Build services.");
        assert_eq!(intel.size, CompanySize::Enterprise);
        assert_eq!(intel.focus, ENTERPRISE_FOCUS);
    }

    #[test]
    fn test_enterprise_from_jd_wording() {
        let intel = profile_company("Acme", "Join our global engineering team");
        assert_eq!(intel.size, CompanySize::Enterprise);

        let intel = profile_company("Acme", "A leading MNC in logistics");
        assert_eq!(intel.size, CompanySize::Enterprise);
    }

    #[test]
    fn test_default_is_startup() {
        let intel = profile_company("Acme Startup", "Small team, big goals.");
        assert_eq!(intel.size, CompanySize::Startup);
        assert_eq!(intel.industry, "Technology Services");
        assert_eq!(intel.focus, STARTUP_FOCUS);
    }

    #[test]
    fn test_industry_overrides_last_match_wins() {
        assert_eq!(profile_company("First Bank", "").industry, "FinTech");
        assert_eq!(profile_company("PharmaCo", "").industry, "HealthTech");
        assert_eq!(profile_company("Retail Hub", "").industry, "E-commerce");
        assert_eq!(profile_company("Health Bank Retail", "").industry, "E-commerce");
        assert_eq!(profile_company("Financial Health", "").industry, "HealthTech");
    }

    #[test]
    fn test_mid_size_serializes_with_hyphen() {
        assert_eq!(serde_json::to_string(&CompanySize::MidSize).unwrap(), "\"Mid-size\"");
        let size: CompanySize = serde_json::from_str("\"Mid-size\"").unwrap();
        assert_eq!(size, CompanySize::MidSize);
    }
}
