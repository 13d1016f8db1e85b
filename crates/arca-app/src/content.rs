//! Static copy for the landing page

pub const PRODUCT_NAME: &str = "ARCA";

pub const HERO_TITLE: &str = "Regulatory Compliance Reimagined";
pub const HERO_SUBTITLE: &str = "Automate your compliance with artificial intelligence";
pub const HERO_CALL_TO_ACTION: &str = "Get Started";

/// One stage of the analysis pipeline, as pitched on the landing page.
#[derive(Debug, Clone, Copy)]
pub struct PipelineStep {
    pub agent: &'static str,
    pub description: &'static str,
}

pub const PIPELINE: &[PipelineStep] = &[
    PipelineStep {
        agent: "Policy Researcher",
        description: "Policy Researcher retrieves relevant policies",
    },
    PipelineStep {
        agent: "Compliance Auditor",
        description: "Compliance Auditor identifies conflicts",
    },
    PipelineStep {
        agent: "Report Generator",
        description: "Report Generator structures findings",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const TEAM_NAME: &str = "Law Watchers";
pub const TEAM_TAGLINE: &str =
    "The team behind ARCA, combining legal expertise with cutting-edge AI development";

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Hicham Ait El Arouri",
        role: "UI/UX Designer",
    },
    TeamMember {
        name: "Ismail El Amali",
        role: "Product Owner",
    },
    TeamMember {
        name: "Chaima Drai",
        role: "Scrum Master",
    },
    TeamMember {
        name: "Sabah Ettaleb",
        role: "Project Manager",
    },
    TeamMember {
        name: "Yahya Allaoui",
        role: "Creative Director",
    },
    TeamMember {
        name: "Mohamed Ghazouan",
        role: "AI Developer",
    },
];

pub const FOOTER_TAGLINE: &str = "AI-powered regulatory compliance analysis";
pub const FOOTER_CONNECT: &str = "Connect With Us";
