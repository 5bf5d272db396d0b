//! Portfolio project records and their filters.
//!
//! Filters never fail: a status, category or technology that matches nothing
//! gives an empty result.

use std::{fmt, str::FromStr, sync::OnceLock};

use indexmap::IndexMap;

/// Delivery status of a [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectStatus {
    Completed,
    Ongoing,
    Planned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Completed, Self::Ongoing, Self::Planned];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Ongoing => "ongoing",
            Self::Planned => "planned",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "ongoing" => Ok(Self::Ongoing),
            "planned" => Ok(Self::Planned),
            other => Err(format!("unknown project status `{other}`")),
        }
    }
}

/// A portfolio case study.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    slug: String,
    title: String,
    client: String,
    status: ProjectStatus,
    category: String,
    year: u16,
    technologies: Vec<String>,
}

impl Project {
    pub fn new(
        slug: &str,
        title: &str,
        client: &str,
        status: ProjectStatus,
        category: &str,
        year: u16,
        technologies: &[&str],
    ) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            client: client.to_string(),
            status,
            category: category.to_string(),
            year,
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// The projects that ship with the crate.
    pub fn builtin() -> &'static [Project] {
        static PROJECTS: OnceLock<Vec<Project>> = OnceLock::new();
        PROJECTS.get_or_init(builtin_projects)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn client(&self) -> &str {
        &self.client
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }
}

/// Projects whose status equals `status`, in their original order.
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<&Project> {
    projects.iter().filter(|p| p.status == status).collect()
}

/// Projects whose category equals `category` exactly.
pub fn filter_by_category<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects.iter().filter(|p| p.category == category).collect()
}

/// Projects with at least one technology containing `query`, ignoring case.
///
/// ```
/// # use flowsheet::projects::{Project, search_by_technology};
/// let hits = search_by_technology(Project::builtin(), "ANAMMOX");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].slug(), "sidestream-deammonification");
/// ```
pub fn search_by_technology<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    let query = query.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            p.technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(&query))
        })
        .collect()
}

/// Number of projects per status, with every status present.
pub fn status_counts(projects: &[Project]) -> IndexMap<ProjectStatus, usize> {
    let mut counts: IndexMap<ProjectStatus, usize> =
        ProjectStatus::ALL.iter().map(|status| (*status, 0)).collect();
    for project in projects {
        *counts.entry(project.status).or_default() += 1;
    }
    counts
}

fn builtin_projects() -> Vec<Project> {
    use ProjectStatus::*;

    vec![
        Project::new(
            "riverside-mbr-upgrade",
            "Riverside WWTP MBR Upgrade",
            "Riverside Water Authority",
            Completed,
            "Municipal Wastewater",
            2021,
            &["Membrane Bioreactor", "Fine Screening", "SCADA Integration"],
        ),
        Project::new(
            "coastal-brackish-ro",
            "Coastal Brackish Water RO Plant",
            "Harbor Utilities District",
            Completed,
            "Desalination",
            2022,
            &["Reverse Osmosis", "Cartridge Filtration", "Energy Recovery Devices"],
        ),
        Project::new(
            "dairy-biogas-recovery",
            "Dairy Processing Biogas Recovery",
            "Valley Creamery Co-op",
            Ongoing,
            "Industrial Wastewater",
            2024,
            &["Anaerobic Digestion", "Combined Heat and Power", "Dissolved Air Flotation"],
        ),
        Project::new(
            "sidestream-deammonification",
            "Sidestream Deammonification Retrofit",
            "Metro Sewer District",
            Ongoing,
            "Municipal Wastewater",
            2025,
            &["Anammox", "Sequencing Batch Reactor", "Online Ammonia Analyzers"],
        ),
        Project::new(
            "brewery-water-reuse",
            "Brewery Process Water Reuse",
            "Northfork Brewing",
            Completed,
            "Industrial Wastewater",
            2020,
            &["Ultrafiltration", "Reverse Osmosis", "UV Disinfection"],
        ),
    ]
}
