use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown project type: {0}")]
pub struct UnknownProjectType(pub String);

/// Options of the contact form's project type select, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectType {
    #[default]
    BrandIdentity,
    WebDesign,
    PrintDesign,
    UiUxDesign,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::BrandIdentity,
        ProjectType::WebDesign,
        ProjectType::PrintDesign,
        ProjectType::UiUxDesign,
        ProjectType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::BrandIdentity => "Brand Identity",
            ProjectType::WebDesign => "Web Design",
            ProjectType::PrintDesign => "Print Design",
            ProjectType::UiUxDesign => "UI/UX Design",
            ProjectType::Other => "Other",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectType {
    type Err = UnknownProjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| UnknownProjectType(s.to_string()))
    }
}

/// Everything the contact form collects. Nothing sends it anywhere yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_type: ProjectType,
    pub message: String,
}

impl ContactRequest {
    pub fn from_fields(
        first_name: &str,
        last_name: &str,
        email: &str,
        project_type: &str,
        message: &str,
    ) -> Self {
        let project_type = project_type.parse().unwrap_or_else(|e| {
            log::warn!("{e}, falling back to Other");
            ProjectType::Other
        });
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            project_type,
            message: message.to_string(),
        }
    }
}
