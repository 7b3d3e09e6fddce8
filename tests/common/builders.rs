//! Test builders: ergonomic constructors for clusters and mentors.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. Unset fields get plausible defaults.

use mm_core::{CareerCluster, Category, Mentor};

// ---------------------------------------------------------------------------
// ClusterBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`CareerCluster`] fixtures.
///
/// ```rust
/// let navy = ClusterBuilder::new(19, "Navy").military().build();
/// ```
pub struct ClusterBuilder {
    id: u32,
    name: String,
    category: Category,
    description: Option<String>,
    icon_name: String,
}

impl ClusterBuilder {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: Category::Florida,
            description: None,
            icon_name: "ri-question-line".to_string(),
        }
    }

    pub fn military(mut self) -> Self {
        self.category = Category::Military;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> CareerCluster {
        let description = self
            .description
            .unwrap_or_else(|| format!("Careers in {}", self.name));
        CareerCluster {
            id: self.id,
            name: self.name,
            category: self.category,
            description,
            icon_name: self.icon_name,
        }
    }
}

// ---------------------------------------------------------------------------
// MentorBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Mentor`] fixtures. Optional fields start absent.
///
/// ```rust
/// let jane = MentorBuilder::new(1, "Jane Doe")
///     .bio("I fly planes")
///     .keywords(["aviation"])
///     .build();
/// ```
pub struct MentorBuilder {
    mentor: Mentor,
}

impl MentorBuilder {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            mentor: Mentor {
                id,
                name: name.into(),
                title: "Mentor".to_string(),
                company: "Independent".to_string(),
                avatar_url: None,
                rating: 45,
                years_experience: 5,
                location: "Orlando, FL".to_string(),
                expertise: Vec::new(),
                bio: None,
                cluster_id: 0,
                cluster_name: None,
                keywords: None,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.mentor.title = title.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.mentor.company = company.into();
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.mentor.bio = Some(bio.into());
        self
    }

    pub fn expertise<I, S>(mut self, expertise: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mentor.expertise = expertise.into_iter().map(Into::into).collect();
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mentor.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn cluster(mut self, cluster: &CareerCluster) -> Self {
        self.mentor.cluster_id = cluster.id;
        self.mentor.cluster_name = Some(cluster.name.clone());
        self
    }

    /// Point at a cluster id without a name, e.g. a dangling reference.
    pub fn cluster_id(mut self, cluster_id: u32) -> Self {
        self.mentor.cluster_id = cluster_id;
        self
    }

    pub fn build(self) -> Mentor {
        self.mentor
    }
}
