//! Expansion tables: curated domain synonyms used to broaden search recall.
//!
//! Each table maps a canonical key phrase to a list of related terms. A query
//! term triggers an entry when the term contains the key *or* the key contains
//! the term. This containment test is intentionally loose: `chart` triggers
//! `art`, `air` triggers `ai`, and `software` triggers `war`.
//!
//! Two tables exist and are never merged:
//!
//! - [`CLUSTER_TABLE`] keys broad domain words and relates them to **cluster
//!   names**, so `water` routes to `Navy` and `Coast Guard`.
//! - [`MENTOR_TABLE`] keys finer-grained skill and role words and relates them
//!   to vocabulary found on mentor profiles.
//!
//! Relations are neither symmetric nor transitive. `military` expands to every
//! branch but the branches do not expand back to `military`.

use crate::normalizer::TermSet;

type Entries = phf::OrderedMap<&'static str, &'static [&'static str]>;

// ---------------------------------------------------------------------------
// Table wrapper
// ---------------------------------------------------------------------------

/// A read-only expansion table backed by a compile-time ordered map.
#[derive(Debug)]
pub struct ExpansionTable {
    name: &'static str,
    entries: &'static Entries,
}

impl ExpansionTable {
    const fn new(name: &'static str, entries: &'static Entries) -> Self {
        Self { name, entries }
    }

    /// Short label used in logs (`cluster` or `mentor`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup of a canonical key.
    pub fn get(&self, key: &str) -> Option<&'static [&'static str]> {
        self.entries.get(key).copied()
    }

    /// Every `(key, related)` pair in authored order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        let entries: &'static Entries = self.entries;
        entries.entries().map(|(key, related)| (*key, *related))
    }

    /// Entries triggered by `term` under bidirectional substring containment.
    pub fn hits<'t>(
        &self,
        term: &'t str,
    ) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + 't {
        let entries: &'static Entries = self.entries;
        entries
            .entries()
            .map(|(key, related)| (*key, *related))
            .filter(move |(key, _)| term.contains(*key) || key.contains(term))
    }

    /// Union of `terms` and every related term they trigger, lowercased.
    pub fn expand(&self, terms: &TermSet) -> TermSet {
        let mut expanded = terms.clone();
        for term in terms {
            for (_, related) in self.hits(term) {
                expanded.extend(related.iter().map(|r| r.to_lowercase()));
            }
        }

        tracing::debug!(
            table = self.name,
            input = terms.len(),
            output = expanded.len(),
            "expanded query terms"
        );
        expanded
    }
}

// ---------------------------------------------------------------------------
// Cluster-oriented table (related terms are cluster names)
// ---------------------------------------------------------------------------

const ARTS: &str = "Arts, A/V Technology & Communication";
const ARCHITECTURE: &str = "Architecture & Construction";
const BUSINESS: &str = "Business Management & Administration";
const MARKETING: &str = "Marketing, Sales, & Service";
const FINANCE: &str = "Finance";
const IT: &str = "Information Technology";
const STEM: &str = "Engineering & Technology Education";
const HEALTH: &str = "Health Science";
const HUMAN_SERVICES: &str = "Human Services";
const MANUFACTURING: &str = "Manufacturing";
const EDUCATION: &str = "Education & Training";
const GOVERNMENT: &str = "Government & Public Administration";
const LAW: &str = "Law, Public Safety & Security";
const AGRICULTURE: &str = "Agriculture, Food, & Natural Resources";
const HOSPITALITY: &str = "Hospitality & Tourism";
const TRANSPORTATION: &str = "Transportation, Distribution, & Logistics";

const ARMY: &str = "Army";
const NAVY: &str = "Navy";
const AIR_FORCE: &str = "Air Force";
const MARINES: &str = "Marine Corps";
const COAST_GUARD: &str = "Coast Guard";
const SPACE_FORCE: &str = "Space Force";

const ALL_BRANCHES: &[&str] = &[ARMY, NAVY, AIR_FORCE, MARINES, COAST_GUARD, SPACE_FORCE];
const SERVICE_BRANCHES: &[&str] = &[ARMY, NAVY, AIR_FORCE, MARINES, COAST_GUARD];

static CLUSTER_EXPANSIONS: Entries = phf::phf_ordered_map! {
    // Arts & communications
    "art" => &[ARTS],
    "music" => &[ARTS],
    "media" => &[ARTS],
    "creative" => &[ARTS],
    "writing" => &[ARTS],
    "design" => &[ARTS, ARCHITECTURE],
    "communication" => &[ARTS],
    "journalism" => &[ARTS],
    "film" => &[ARTS],
    "video" => &[ARTS],
    "photography" => &[ARTS],

    // Business & finance
    "business" => &[BUSINESS, MARKETING, FINANCE],
    "finance" => &[FINANCE, BUSINESS],
    "money" => &[FINANCE, BUSINESS],
    "budget" => &[FINANCE, BUSINESS],
    "wealth" => &[FINANCE, BUSINESS],
    "accounting" => &[FINANCE, BUSINESS],
    "marketing" => &[MARKETING, BUSINESS],
    "economics" => &[FINANCE, BUSINESS],
    "management" => &[BUSINESS],
    "sales" => &[MARKETING, BUSINESS],
    "entrepreneurship" => &[BUSINESS],
    "banking" => &[FINANCE],
    "investment" => &[FINANCE],
    "financial" => &[FINANCE],
    "loan" => &[FINANCE],
    "credit" => &[FINANCE],
    "stocks" => &[FINANCE],

    // Technology
    "computer" => &[IT],
    "tech" => &[IT, STEM],
    "programming" => &[IT],
    "web" => &[IT],
    "app" => &[IT],
    "data" => &[IT],
    "ai" => &[IT, STEM],
    "it" => &[IT],
    "software" => &[IT],
    "network" => &[IT],
    "cyber" => &[IT],
    "security" => &[IT, LAW],

    // Healthcare
    "medical" => &[HEALTH],
    "healthcare" => &[HEALTH],
    "doctor" => &[HEALTH],
    "nurse" => &[HEALTH],
    "therapy" => &[HEALTH],
    "psychology" => &[HEALTH, HUMAN_SERVICES],
    "medicine" => &[HEALTH],
    "dental" => &[HEALTH],
    "pharmacy" => &[HEALTH],
    "health" => &[HEALTH],
    "patient" => &[HEALTH],

    // Engineering
    "engineering" => &[STEM, ARCHITECTURE],
    "robotics" => &[STEM, MANUFACTURING],
    "mechanical" => &[STEM, MANUFACTURING],
    "electrical" => &[STEM],
    "manufacturing" => &[MANUFACTURING],
    "architecture" => &[ARCHITECTURE],
    "construction" => &[ARCHITECTURE],
    "building" => &[ARCHITECTURE],

    // Education
    "education" => &[EDUCATION],
    "teaching" => &[EDUCATION],
    "academic" => &[EDUCATION],
    "training" => &[EDUCATION],
    "learning" => &[EDUCATION],
    "school" => &[EDUCATION],
    "teacher" => &[EDUCATION],

    // Public service & military
    "government" => &[GOVERNMENT, LAW],
    "military" => ALL_BRANCHES,
    "army" => &[ARMY],
    "navy" => &[NAVY],
    "air force" => &[AIR_FORCE],
    "marines" => &[MARINES],
    "coast guard" => &[COAST_GUARD],
    "soldier" => SERVICE_BRANCHES,
    "veteran" => SERVICE_BRANCHES,
    "defense" => SERVICE_BRANCHES,
    "service" => SERVICE_BRANCHES,
    "uniform" => SERVICE_BRANCHES,
    "combat" => SERVICE_BRANCHES,
    "naval" => &[NAVY, COAST_GUARD],
    "war" => SERVICE_BRANCHES,
    "space force" => &[AIR_FORCE],
    "water" => &[NAVY, COAST_GUARD, MARINES, AGRICULTURE],
    "sea" => &[NAVY, COAST_GUARD, MARINES],
    "ocean" => &[NAVY, COAST_GUARD, MARINES],
    "ship" => &[NAVY, COAST_GUARD],
    "law" => &[LAW],
    "legal" => &[LAW],
    "police" => &[LAW],
    "criminal" => &[LAW],
    "justice" => &[LAW],

    // Science & research
    "science" => &[STEM, HEALTH],
    "biology" => &[STEM, HEALTH],
    "chemistry" => &[STEM],
    "physics" => &[STEM],
    "research" => &[STEM],
    "lab" => &[STEM, HEALTH],

    // Agriculture & natural resources
    "agriculture" => &[AGRICULTURE],
    "environment" => &[AGRICULTURE],
    "veterinary" => &[AGRICULTURE],
    "farming" => &[AGRICULTURE],
    "animal" => &[AGRICULTURE],
    "food" => &[AGRICULTURE, HOSPITALITY],
    "nature" => &[AGRICULTURE],

    // Hospitality & tourism
    "hospitality" => &[HOSPITALITY],
    "culinary" => &[HOSPITALITY],
    "tourism" => &[HOSPITALITY],
    "hotel" => &[HOSPITALITY],
    "restaurant" => &[HOSPITALITY],
    "chef" => &[HOSPITALITY],
    "travel" => &[HOSPITALITY],

    // Transportation, distribution & logistics
    "transport" => &[TRANSPORTATION],
    "logistics" => &[TRANSPORTATION],
    "shipping" => &[TRANSPORTATION],
    "aviation" => &[TRANSPORTATION],
    "pilot" => &[TRANSPORTATION, AIR_FORCE, NAVY],
    "driving" => &[TRANSPORTATION],
    "automotive" => &[TRANSPORTATION],

    // Human services
    "counseling" => &[HUMAN_SERVICES, HEALTH],
    "social work" => &[HUMAN_SERVICES],
    "community" => &[HUMAN_SERVICES],
    "family" => &[HUMAN_SERVICES],
    "childcare" => &[HUMAN_SERVICES, EDUCATION],
};

/// Cluster-oriented expansion table.
pub static CLUSTER_TABLE: ExpansionTable = ExpansionTable::new("cluster", &CLUSTER_EXPANSIONS);

// ---------------------------------------------------------------------------
// Mentor-oriented table (related terms are profile vocabulary)
// ---------------------------------------------------------------------------

static MENTOR_EXPANSIONS: Entries = phf::phf_ordered_map! {
    // Arts & communications
    "art" => &["drawing", "creative", "design", "artist", "arts", "painting", "sculpture", "visual"],
    "music" => &["audio", "sound", "recording", "band", "musician", "instrument", "singer", "composer", "orchestra"],
    "media" => &["video", "film", "photography", "camera", "production", "broadcast", "television", "radio", "streaming"],
    "creative" => &["drawing", "arts", "design", "video", "music", "innovative", "artistic"],
    "writing" => &["author", "content", "blog", "journalist", "writer", "editor", "publishing", "books"],
    "design" => &["drawing", "architecture", "creative", "graphics", "ux", "ui", "layouts", "visual"],
    "communication" => &["speaking", "public", "presentation", "journalism", "broadcasting", "media"],

    // Business & finance
    "business" => &["office", "manager", "planning", "company", "entrepreneur", "corporate", "industry", "commercial"],
    "finance" => &["banking", "money", "budget", "investment", "financial", "accounting", "economics", "stocks"],
    "money" => &["finance", "banking", "budget", "investment", "wealth", "financial"],
    "marketing" => &["advertising", "promotion", "brand", "selling", "ads", "seo", "social media", "digital"],
    "management" => &["leadership", "administration", "supervising", "manager", "executive", "director", "supervisor"],
    "sales" => &["retail", "selling", "commerce", "business", "customer", "market"],
    "entrepreneurship" => &["startup", "business", "founder", "innovation", "venture"],

    // Technology
    "computer" => &["coding", "tech", "software", "programming", "apps", "internet", "it", "hardware"],
    "tech" => &["computers", "coding", "software", "internet", "technology", "digital", "electronics"],
    "programming" => &["coding", "software", "development", "apps", "computer", "java", "python", "javascript"],
    "web" => &["internet", "website", "coding", "design", "online", "browser", "development"],
    "app" => &["mobile", "software", "development", "android", "ios", "programming"],
    "data" => &["database", "analytics", "statistics", "science", "big data"],
    "ai" => &["artificial intelligence", "machine learning", "neural networks", "algorithms", "tech"],

    // Healthcare
    "medical" => &["doctor", "nurse", "medicine", "hospital", "health", "healthcare", "clinical", "patient"],
    "healthcare" => &["doctor", "nurse", "medicine", "hospital", "health", "patient", "treatment", "care"],
    "doctor" => &["physician", "medical", "healthcare", "medicine", "hospital", "health", "specialist"],
    "nurse" => &["nursing", "healthcare", "medical", "health", "hospital", "patient", "care"],
    "therapy" => &["rehabilitation", "treatment", "counseling", "medical", "health"],
    "psychology" => &["mental health", "counseling", "behavior", "therapy", "brain"],

    // Engineering
    "engineering" => &["machines", "design", "technology", "robotics", "mechanical", "electrical", "civil", "chemical"],
    "robotics" => &["machines", "automation", "programming", "technology", "ai", "electronics", "mechanical"],
    "mechanical" => &["engineering", "machines", "design", "manufacturing", "automotive"],
    "electrical" => &["engineering", "electronics", "power", "circuits", "technology"],
    "manufacturing" => &["production", "factory", "industrial", "assembly", "engineering"],

    // Education
    "education" => &["teaching", "classroom", "learning", "school", "students", "instructor", "academic", "professor"],
    "teaching" => &["classroom", "education", "learning", "school", "instructor", "students", "faculty"],
    "academic" => &["education", "research", "university", "college", "school", "professor"],
    "training" => &["education", "learning", "development", "skills", "teaching"],

    // Public service & military
    "government" => &["public", "administration", "law", "policy", "rules", "agency", "federal", "state"],
    "military" => &["army", "navy", "air force", "marines", "soldier", "service", "defense", "veteran", "naval", "combat", "uniform", "war", "weapon", "ship", "sea", "ocean", "water", "coast guard", "space force"],
    "army" => &["soldier", "infantry", "tactical", "recruits", "sergeant"],
    "navy" => &["ship", "sea", "ocean", "water", "sailor", "vessel", "maritime", "naval"],
    "air force" => &["aviation", "pilot", "flight", "planes", "aircraft", "aerospace", "airman"],
    "marines" => &["marine", "corps", "combat", "amphibious", "elite"],
    "coast guard" => &["maritime", "rescue", "patrol", "coast", "sea"],
    "space force" => &["space", "satellite", "aerospace", "orbital", "rocket"],
    "water" => &["ocean", "sea", "maritime", "boat", "ship", "marine", "naval"],
    "ocean" => &["sea", "marine", "water", "maritime", "naval", "coast"],
    "sea" => &["ocean", "water", "maritime", "ship", "marine", "naval"],
    "ship" => &["boat", "vessel", "navy", "ocean", "sea", "maritime"],
    "law" => &["legal", "justice", "police", "rules", "courts", "attorney", "lawyer", "judge"],
    "public service" => &["government", "community", "nonprofit", "social work", "civic"],
    "police" => &["law enforcement", "security", "criminal justice", "detective", "officer"],

    // Science & research
    "science" => &["research", "laboratory", "experiment", "scientist", "biology", "chemistry", "physics"],
    "biology" => &["science", "life", "organisms", "medical", "research", "genetic"],
    "chemistry" => &["science", "laboratory", "compounds", "materials", "research"],
    "physics" => &["science", "engineering", "mathematics", "research", "technology"],
    "research" => &["science", "development", "study", "investigation", "analysis"],

    // Agriculture & natural resources
    "agriculture" => &["farming", "crops", "livestock", "food", "production", "agribusiness"],
    "environment" => &["ecology", "conservation", "natural resources", "sustainability", "green"],
    "veterinary" => &["animal", "doctor", "medicine", "health", "biology"],

    // Hospitality & tourism
    "hospitality" => &["hotel", "restaurant", "tourism", "service", "customer", "food", "beverage"],
    "culinary" => &["cooking", "chef", "food", "restaurant", "kitchen", "baking", "gastronomy"],
    "tourism" => &["travel", "hotel", "hospitality", "guide", "international"],
};

/// Mentor-oriented expansion table.
pub static MENTOR_TABLE: ExpansionTable = ExpansionTable::new("mentor", &MENTOR_EXPANSIONS);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    #[test]
    fn exact_key_expands() {
        let out = CLUSTER_TABLE.expand(&normalize("water"));
        assert!(out.contains("navy"));
        assert!(out.contains("coast guard"));
        assert!(out.contains("water"), "input terms are preserved");
    }

    #[test]
    fn term_containing_key_triggers_entry() {
        // "arts" contains "art"
        let hits: Vec<_> = MENTOR_TABLE.hits("arts").map(|(k, _)| k).collect();
        assert!(hits.contains(&"art"));
    }

    #[test]
    fn key_containing_term_triggers_entry() {
        // "air force" contains "air"
        let hits: Vec<_> = MENTOR_TABLE.hits("air").map(|(k, _)| k).collect();
        assert!(hits.contains(&"air force"));
    }

    #[test]
    fn loose_containment_over_matches_short_keys() {
        let hits: Vec<_> = CLUSTER_TABLE.hits("chart").map(|(k, _)| k).collect();
        assert!(hits.contains(&"art"));
    }

    #[test]
    fn military_expansion_is_one_directional() {
        let military = MENTOR_TABLE.get("military").unwrap();
        assert!(military.contains(&"navy"));
        assert!(!MENTOR_TABLE.get("navy").unwrap().contains(&"military"));
    }

    #[test]
    fn tables_stay_separate() {
        assert_eq!(CLUSTER_TABLE.name(), "cluster");
        assert_eq!(MENTOR_TABLE.name(), "mentor");
        assert!(CLUSTER_TABLE.get("it").is_some());
        assert!(MENTOR_TABLE.get("it").is_none());
        assert!(MENTOR_TABLE.get("air force").unwrap().contains(&"aviation"));
        assert_eq!(CLUSTER_TABLE.get("air force").unwrap(), &["Air Force"]);
    }

    #[test]
    fn expansion_is_lowercase() {
        let out = CLUSTER_TABLE.expand(&normalize("finance"));
        assert!(out.contains("business management & administration"));
        assert!(out.iter().all(|t| t == &t.to_lowercase()));
    }

    #[test]
    fn nonsense_term_expands_to_itself() {
        let input = normalize("xyz123nonsense");
        assert_eq!(CLUSTER_TABLE.expand(&input), input);
        assert_eq!(MENTOR_TABLE.expand(&input), input);
    }

    #[test]
    fn entries_preserve_authored_order() {
        let first = CLUSTER_TABLE.entries().next().map(|(k, _)| k);
        assert_eq!(first, Some("art"));
        assert!(!CLUSTER_TABLE.is_empty());
        assert_eq!(CLUSTER_TABLE.entries().count(), CLUSTER_TABLE.len());
    }

    proptest::proptest! {
        #[test]
        fn expansion_is_a_superset(query in "[a-z ]{0,30}") {
            let input = normalize(&query);
            for table in [&CLUSTER_TABLE, &MENTOR_TABLE] {
                let out = table.expand(&input);
                proptest::prop_assert!(input.iter().all(|t| out.contains(t)));
            }
        }
    }
}
