//! Static fixture records served by the read-only dashboard endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyDashboard {
    pub suspensions: u32,
    pub tickets_resolved_pct: u32,
    pub clv_usd: u64,
    pub roas: f64,
    pub campaigns_active: u32,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: String,
    pub name: String,
    pub sport: String,
    pub monthly_rate: u64,
    pub predicted_ctr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteRoster {
    pub athletes: Vec<Athlete>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRegistry {
    pub total_assets: u64,
    pub enterprise_value: u64,
    pub defi_collateral: u64,
    pub hca_tokens: u64,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub active: u32,
    pub budget_usd: u64,
    pub roas: f64,
    pub platforms: Vec<String>,
    pub summary: String,
}

/// Read-only fixture providers, keyed by endpoint name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fixture {
    Agency,
    Athletes,
    Hca,
    Campaigns,
}

/// Any one fixture record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FixtureRecord {
    Agency(AgencyDashboard),
    Athletes(AthleteRoster),
    Hca(AssetRegistry),
    Campaigns(CampaignSummary),
}

impl Fixture {
    pub const ALL: [Fixture; 4] = [Self::Agency, Self::Athletes, Self::Hca, Self::Campaigns];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agency => "agency",
            Self::Athletes => "athletes",
            Self::Hca => "hca",
            Self::Campaigns => "campaigns",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    pub fn record(&self) -> FixtureRecord {
        match self {
            Self::Agency => FixtureRecord::Agency(agency_dashboard()),
            Self::Athletes => FixtureRecord::Athletes(athlete_roster()),
            Self::Hca => FixtureRecord::Hca(asset_registry()),
            Self::Campaigns => FixtureRecord::Campaigns(campaign_summary()),
        }
    }
}

impl std::fmt::Display for Fixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn agency_dashboard() -> AgencyDashboard {
    AgencyDashboard {
        suspensions: 0,
        tickets_resolved_pct: 95,
        clv_usd: 47_000,
        roas: 4.2,
        campaigns_active: 23,
        summary: "Agency: 4.2x ROAS, 0 suspensions, 95% tickets auto-resolved.".to_string(),
    }
}

pub fn athlete_roster() -> AthleteRoster {
    AthleteRoster {
        athletes: vec![
            Athlete {
                id: "ath-1".to_string(),
                name: "Sarah Swift".to_string(),
                sport: "Track".to_string(),
                monthly_rate: 2_500,
                predicted_ctr: 0.023,
            },
            Athlete {
                id: "ath-2".to_string(),
                name: "Mike Thunder".to_string(),
                sport: "Basketball".to_string(),
                monthly_rate: 4_500,
                predicted_ctr: 0.031,
            },
        ],
        summary: "Athlete hub: 2 featured talents with live CTR predictions.".to_string(),
    }
}

pub fn asset_registry() -> AssetRegistry {
    AssetRegistry {
        total_assets: 5_600_000,
        enterprise_value: 49_300_000,
        defi_collateral: 25_600_000,
        hca_tokens: 430_000,
        summary: "HCA Registry: 5.6M assets, $49.3M enterprise value, $25.6M DeFi collateral."
            .to_string(),
    }
}

pub fn campaign_summary() -> CampaignSummary {
    CampaignSummary {
        active: 12,
        budget_usd: 284_000,
        roas: 3.8,
        platforms: ["Google", "Meta", "TikTok", "Reddit"]
            .iter()
            .map(|p| p.to_string())
            .collect(),
        summary: "12 active campaigns, $284K budget, 3.8x blended ROAS.".to_string(),
    }
}
