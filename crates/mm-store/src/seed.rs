//! Built-in seed catalog: the Florida career clusters, the military branches,
//! one mentor per cluster, curated career keywords and availability slots,
//! plus two school counselors and a handful of career events.

use chrono::{DateTime, Duration, Utc};
use mm_core::{
    CareerCluster, CareerEvent, CareerKeyword, Category, Counselor, CounselorAvailability,
    MentorAvailability, NewMentor,
};

use crate::catalog::Catalog;

/// Days of availability generated per mentor.
pub const AVAILABILITY_DAYS: u32 = 10;

// (name, description, icon)
const FLORIDA: &[(&str, &str, &str)] = &[
    ("Agriculture, Food, & Natural Resources", "Careers in agriculture and natural resources", "ri-plant-line"),
    ("Architecture & Construction", "Careers in building design and construction", "ri-building-line"),
    ("Arts, A/V Technology & Communication", "Careers in creative and media fields", "ri-movie-line"),
    ("Business Management & Administration", "Careers in business operations and leadership", "ri-user-settings-line"),
    ("Education & Training", "Careers in teaching and training", "ri-graduation-cap-line"),
    ("Energy", "Careers in energy production and management", "ri-flashlight-line"),
    ("Engineering & Technology Education", "Careers in engineering and technology development", "ri-tools-line"),
    ("Finance", "Careers in financial services", "ri-money-dollar-circle-line"),
    ("Government & Public Administration", "Careers in public service", "ri-government-line"),
    ("Health Science", "Careers in healthcare and medical science", "ri-hospital-line"),
    ("Hospitality & Tourism", "Careers in travel and hospitality", "ri-hotel-line"),
    ("Human Services", "Careers in social services", "ri-team-line"),
    ("Information Technology", "Careers in computing and digital technology", "ri-code-box-line"),
    ("Law, Public Safety & Security", "Careers in legal and safety fields", "ri-shield-check-line"),
    ("Manufacturing", "Careers in product manufacturing", "ri-robot-line"),
    ("Marketing, Sales, & Service", "Careers in marketing and sales", "ri-store-2-line"),
    ("Transportation, Distribution, & Logistics", "Careers in transportation and logistics", "ri-truck-line"),
];

const MILITARY: &[(&str, &str, &str)] = &[
    ("Army", "Careers in the U.S. Army", "ri-shield-star-line"),
    ("Navy", "Careers in the U.S. Navy", "ri-ship-line"),
    ("Air Force", "Careers in the U.S. Air Force", "ri-plane-line"),
    ("Marine Corps", "Careers in the U.S. Marine Corps", "ri-anchor-line"),
    ("Coast Guard", "Careers in the U.S. Coast Guard", "ri-lifebuoy-line"),
    ("Space Force", "Careers in the U.S. Space Force", "ri-rocket-line"),
];

/// Curated keywords per cluster, in cluster order. The same word may appear
/// under several clusters; the keyword table keeps only its first owner.
const CLUSTER_KEYWORDS: &[&[&str]] = &[
    &["farming", "animals", "plants", "environment", "food"],
    &["building", "tools", "design", "homes", "construction"],
    &["drawing", "music", "video", "writing", "speaking"],
    &["money", "planning", "office", "manager", "teamwork"],
    &["teaching", "classroom", "learning", "kids", "school"],
    &["electricity", "power", "solar", "wind", "energy"],
    &["machines", "coding", "design", "invent", "robotics"],
    &["banking", "money", "budget", "saving", "investing"],
    &["law", "voting", "rules", "community", "leadership"],
    &["doctor", "nurse", "medicine", "hospital", "health"],
    &["travel", "hotels", "food", "guests", "service"],
    &["helping", "family", "support", "social work", "care"],
    &["computers", "apps", "code", "tech", "internet"],
    &["police", "safety", "law", "fire", "protect"],
    &["factory", "machines", "tools", "parts", "make"],
    &["selling", "ads", "store", "customer", "products"],
    &["trucks", "travel", "planes", "packages", "delivery"],
    &["soldier", "army", "discipline", "mission", "service"],
    &["navy", "ship", "sailor", "ocean", "service"],
    &["air force", "pilot", "aviation", "planes", "service"],
    &["marines", "corps", "discipline", "mission", "service"],
    &["coast guard", "rescue", "maritime", "patrol", "service"],
    &["space force", "space", "satellite", "aerospace", "service"],
];

struct MentorSeed {
    name: &'static str,
    title: &'static str,
    company: &'static str,
    rating: u8,
    years: u32,
    location: &'static str,
    expertise: [&'static str; 3],
    bio: &'static str,
}

// One per cluster, in cluster order. Each mentor is tagged with its
// cluster's keywords.
const MENTORS: &[MentorSeed] = &[
    MentorSeed {
        name: "Dr. Maya Fields",
        title: "Environmental Scientist",
        company: "Green Earth Research Institute",
        rating: 48,
        years: 12,
        location: "Tampa, FL",
        expertise: ["Sustainable Agriculture", "Environmental Impact Assessment", "Conservation Biology"],
        bio: "I specialize in sustainable farming practices and environmental conservation. Let me help you explore green careers!",
    },
    MentorSeed {
        name: "Carlos Bennett",
        title: "Civil Engineer",
        company: "Bennett Infrastructure Solutions",
        rating: 49,
        years: 15,
        location: "Orlando, FL",
        expertise: ["Structural Engineering", "Project Management", "Urban Planning"],
        bio: "I design infrastructure projects with a focus on earthquake-resistant structures. I can guide you through the engineering field.",
    },
    MentorSeed {
        name: "Lena Rosario",
        title: "Multimedia Artist",
        company: "Creative Vision Studios",
        rating: 47,
        years: 8,
        location: "Miami, FL",
        expertise: ["Digital Art", "Animation", "Social Media Content"],
        bio: "I create digital content across multiple platforms for major entertainment brands. Let me show you how to break into creative fields!",
    },
    MentorSeed {
        name: "Thomas Kim",
        title: "Operations Manager",
        company: "TechForward Enterprises",
        rating: 46,
        years: 10,
        location: "Jacksonville, FL",
        expertise: ["Strategic Planning", "Team Leadership", "Business Operations"],
        bio: "I oversee daily operations for a Fortune 500 technology company. I can help you understand what it takes to succeed in business management.",
    },
    MentorSeed {
        name: "Maria Nunez",
        title: "High School Teacher",
        company: "Westside High School",
        rating: 50,
        years: 14,
        location: "Gainesville, FL",
        expertise: ["STEM Education", "Curriculum Development", "Educational Technology"],
        bio: "I'm an award-winning high school educator specializing in innovative STEM programs. Let me guide you toward an impactful teaching career!",
    },
    MentorSeed {
        name: "Devon Price",
        title: "Energy Technician",
        company: "Bright Future Energy",
        rating: 45,
        years: 7,
        location: "Tampa, FL",
        expertise: ["Solar Panel Installation", "Energy Efficiency", "Renewable Energy"],
        bio: "I install and maintain renewable energy systems for commercial buildings. I can help you enter this growing green tech field!",
    },
    MentorSeed {
        name: "Angela Leung",
        title: "Robotics Engineer",
        company: "Innovation Robotics",
        rating: 48,
        years: 9,
        location: "Orlando, FL",
        expertise: ["Automation", "AI Development", "Mechanical Engineering"],
        bio: "I design and develop automation solutions for manufacturing industries. Let me show you how to build a career in cutting-edge robotics!",
    },
    MentorSeed {
        name: "Raj Patel",
        title: "Financial Advisor",
        company: "Secure Wealth Management",
        rating: 47,
        years: 11,
        location: "Miami, FL",
        expertise: ["Investment Planning", "Retirement Strategies", "Personal Finance"],
        bio: "I help individuals and businesses plan for financial success and security. I can guide you toward a rewarding career in finance!",
    },
    MentorSeed {
        name: "Jasmine Carter",
        title: "City Council Member",
        company: "Oakville City Government",
        rating: 46,
        years: 6,
        location: "Jacksonville, FL",
        expertise: ["Policy Development", "Community Relations", "Public Speaking"],
        bio: "I work on policy development and community improvement initiatives. Let me show you how to make a difference through public service!",
    },
    MentorSeed {
        name: "Dr. Isaiah Greene",
        title: "Pediatrician",
        company: "Children's Wellness Center",
        rating: 49,
        years: 16,
        location: "Gainesville, FL",
        expertise: ["Pediatric Care", "Preventative Medicine", "Medical Education"],
        bio: "I provide comprehensive healthcare for children from newborns to adolescents. I can guide you on the path to a medical career!",
    },
    MentorSeed {
        name: "Chloe Duval",
        title: "Hotel Director",
        company: "Grand Plaza Hotels",
        rating: 48,
        years: 13,
        location: "Tampa, FL",
        expertise: ["Hospitality Management", "Customer Experience", "Event Planning"],
        bio: "I manage luxury hotel operations and enhance guest experiences. Let me help you explore exciting careers in hospitality and tourism!",
    },
    MentorSeed {
        name: "Darnell Reed",
        title: "Family Counselor",
        company: "Community Support Services",
        rating: 47,
        years: 8,
        location: "Orlando, FL",
        expertise: ["Family Therapy", "Crisis Intervention", "Mental Health Support"],
        bio: "I provide guidance and support for individuals facing personal challenges. I can help you pursue a fulfilling career helping others!",
    },
    MentorSeed {
        name: "Zoey Wang",
        title: "Software Developer",
        company: "MedTech Solutions",
        rating: 46,
        years: 7,
        location: "Miami, FL",
        expertise: ["Mobile App Development", "UX Design", "Health Informatics"],
        bio: "I create innovative software solutions for healthcare applications. I can guide you into the exciting world of tech careers!",
    },
    MentorSeed {
        name: "Nathaniel Brooks",
        title: "Police Officer",
        company: "Oakville Police Department",
        rating: 47,
        years: 9,
        location: "Jacksonville, FL",
        expertise: ["Community Policing", "Public Safety", "Criminal Justice"],
        bio: "I serve the community through law enforcement and public safety initiatives. Let me help you explore careers in public safety!",
    },
    MentorSeed {
        name: "Emily Ortiz",
        title: "Machine Operator",
        company: "Precision Products Manufacturing",
        rating: 45,
        years: 5,
        location: "Gainesville, FL",
        expertise: ["CNC Machining", "Quality Control", "Industrial Safety"],
        bio: "I operate advanced machinery in precision manufacturing environments. I can show you the path to modern manufacturing careers!",
    },
    MentorSeed {
        name: "Jared Lewis",
        title: "Marketing Specialist",
        company: "Brand Elevate Marketing",
        rating: 46,
        years: 8,
        location: "Tampa, FL",
        expertise: ["Digital Marketing", "Brand Strategy", "Social Media"],
        bio: "I develop strategic marketing campaigns for consumer product companies. I can guide you into the dynamic world of marketing!",
    },
    MentorSeed {
        name: "Kiana Thomas",
        title: "Logistics Coordinator",
        company: "Global Transit Solutions",
        rating: 45,
        years: 7,
        location: "Orlando, FL",
        expertise: ["Supply Chain Management", "International Shipping", "Inventory Control"],
        bio: "I manage supply chain logistics for international shipping operations. I can help you navigate careers in this global field!",
    },
    MentorSeed {
        name: "Sgt. Leo Morales",
        title: "Army Sergeant",
        company: "U.S. Army",
        rating: 48,
        years: 10,
        location: "Fort Liberty, NC",
        expertise: ["Leadership", "Tactical Operations", "Training & Development"],
        bio: "I lead tactical operations and train new recruits in specialized skills. I can help you understand military career opportunities!",
    },
    MentorSeed {
        name: "Lt. Sofia Rodriguez",
        title: "Navy Lieutenant",
        company: "U.S. Navy",
        rating: 47,
        years: 8,
        location: "Jacksonville, FL",
        expertise: ["Naval Operations", "Maritime Strategy", "Personnel Management"],
        bio: "I manage operations aboard naval vessels and lead teams at sea. I can guide you through Navy career opportunities!",
    },
    MentorSeed {
        name: "Capt. Marcus Wilson",
        title: "Air Force Captain",
        company: "U.S. Air Force",
        rating: 49,
        years: 9,
        location: "Tampa, FL",
        expertise: ["Flight Operations", "Aviation Technology", "Aerospace Management"],
        bio: "I serve as a flight operations officer and coordinate missions. Let me show you the exciting career possibilities in the Air Force!",
    },
    MentorSeed {
        name: "Lt. James Cooper",
        title: "Marine Corps Lieutenant",
        company: "U.S. Marine Corps",
        rating: 48,
        years: 7,
        location: "Jacksonville, FL",
        expertise: ["Combat Operations", "Strategic Planning", "Team Leadership"],
        bio: "I lead combat operations and train elite forces for specialized missions. I can help you understand Marine Corps career paths!",
    },
    MentorSeed {
        name: "Ens. Lily Nguyen",
        title: "Coast Guard Ensign",
        company: "U.S. Coast Guard",
        rating: 46,
        years: 5,
        location: "Miami, FL",
        expertise: ["Maritime Safety", "Search & Rescue", "Law Enforcement"],
        bio: "I conduct maritime search and rescue operations and enforce federal laws at sea. I can guide you toward Coast Guard careers!",
    },
    MentorSeed {
        name: "Lt. Alex Chen",
        title: "Space Force Lieutenant",
        company: "U.S. Space Force",
        rating: 49,
        years: 6,
        location: "Cape Canaveral, FL",
        expertise: ["Satellite Operations", "Space Systems", "Cyber Defense"],
        bio: "I manage satellite operations and space domain awareness for national security. Let me show you the cutting-edge career opportunities in Space Force!",
    },
];

const AVATAR: &str = "/mentor-avatars/default-avatar.jpg";

/// Florida clusters (ids 1..=17) followed by military branches (18..=23).
pub fn clusters() -> Vec<CareerCluster> {
    FLORIDA
        .iter()
        .map(|row| (Category::Florida, row))
        .chain(MILITARY.iter().map(|row| (Category::Military, row)))
        .zip(1..)
        .map(|((category, &(name, description, icon)), id)| CareerCluster {
            id,
            name: name.to_string(),
            category,
            description: description.to_string(),
            icon_name: icon.to_string(),
        })
        .collect()
}

/// Career keywords with the first owning cluster of each distinct word.
pub fn keywords() -> Vec<CareerKeyword> {
    let mut out: Vec<CareerKeyword> = Vec::new();
    for (words, cluster_id) in CLUSTER_KEYWORDS.iter().zip(1u32..) {
        for &word in words.iter() {
            if out.iter().any(|k| k.keyword == word) {
                continue;
            }
            out.push(CareerKeyword {
                id: out.len() as u32 + 1,
                cluster_id,
                keyword: word.to_string(),
            });
        }
    }
    out
}

/// One mentor insert per cluster. The store fills `cluster_name`.
pub fn mentors() -> Vec<NewMentor> {
    MENTORS
        .iter()
        .zip(CLUSTER_KEYWORDS)
        .zip(1u32..)
        .map(|((seed, words), cluster_id)| NewMentor {
            name: seed.name.to_string(),
            title: seed.title.to_string(),
            company: seed.company.to_string(),
            avatar_url: Some(AVATAR.to_string()),
            rating: seed.rating,
            years_experience: seed.years,
            location: seed.location.to_string(),
            expertise: seed.expertise.iter().map(|e| e.to_string()).collect(),
            bio: Some(seed.bio.to_string()),
            cluster_id,
            cluster_name: None,
            keywords: Some(words.iter().map(|w| w.to_string()).collect()),
        })
        .collect()
}

/// Ten daily slots per mentor starting at `now`'s date, between 09:00 and
/// 16:00 UTC. Roughly seven in ten are open; the pattern is fixed per mentor
/// so repeated runs agree.
pub fn availability(mentor_ids: impl IntoIterator<Item = u32>, now: DateTime<Utc>) -> Vec<MentorAvailability> {
    let today = now.date_naive();
    let mut slots = Vec::new();

    for mentor_id in mentor_ids {
        for day in 0..AVAILABILITY_DAYS {
            let date = today + Duration::days(i64::from(day));
            let Some(start) = date.and_hms_opt(9 + day % 8, 0, 0) else {
                continue;
            };
            slots.push(MentorAvailability {
                id: slots.len() as u32 + 1,
                mentor_id,
                date: start.and_utc(),
                is_available: (mentor_id + day) % 10 >= 3,
            });
        }
    }

    slots
}

struct CounselorSeed {
    name: &'static str,
    title: &'static str,
    department: &'static str,
    email: &'static str,
    phone: &'static str,
    bio: &'static str,
    specialties: &'static [&'static str],
    office: &'static str,
    hours: &'static str,
}

const COUNSELORS: &[CounselorSeed] = &[
    CounselorSeed {
        name: "Dr. Sarah Mitchell",
        title: "Academic Advisor & College Application Specialist",
        department: "Student Success Center",
        email: "s.mitchell@chamberlain.edu",
        phone: "(813) 555-0123",
        bio: "Dr. Mitchell has over 15 years of experience helping students navigate college applications and academic planning. She specializes in university transfer programs and scholarship applications.",
        specialties: &["College Applications", "Transfer Planning", "Scholarship Guidance", "Academic Planning"],
        office: "Student Success Center, Room 205",
        hours: "Monday-Friday 8:00 AM - 5:00 PM",
    },
    CounselorSeed {
        name: "Mark Thompson",
        title: "Career Counselor & Academic Success Coach",
        department: "Career Services",
        email: "m.thompson@chamberlain.edu",
        phone: "(813) 555-0124",
        bio: "Mark specializes in helping students develop study skills, plan their academic journey, and connect their education to career goals. He has a background in both education and industry.",
        specialties: &["Study Skills", "Course Planning", "Career Guidance", "Time Management", "Academic Support"],
        office: "Career Services Center, Room 110",
        hours: "Tuesday-Thursday 9:00 AM - 6:00 PM, Friday 9:00 AM - 3:00 PM",
    },
];

// (day, start, end)
const COUNSELOR_WEEK: &[(&str, &str, &str)] = &[
    ("Monday", "09:00", "17:00"),
    ("Tuesday", "09:00", "17:00"),
    ("Wednesday", "09:00", "17:00"),
    ("Thursday", "09:00", "17:00"),
    ("Friday", "09:00", "15:00"),
];

pub fn counselors() -> Vec<Counselor> {
    COUNSELORS
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| Counselor {
            id,
            name: seed.name.to_string(),
            title: seed.title.to_string(),
            department: seed.department.to_string(),
            email: seed.email.to_string(),
            phone: Some(seed.phone.to_string()),
            bio: Some(seed.bio.to_string()),
            specialties: seed.specialties.iter().map(|s| s.to_string()).collect(),
            avatar_url: None,
            office_location: Some(seed.office.to_string()),
            office_hours: Some(seed.hours.to_string()),
            is_active: true,
        })
        .collect()
}

/// The same weekday windows for every counselor.
pub fn counselor_availability(counselor_ids: impl IntoIterator<Item = u32>) -> Vec<CounselorAvailability> {
    let mut windows = Vec::new();
    for counselor_id in counselor_ids {
        for &(day, start, end) in COUNSELOR_WEEK {
            windows.push(CounselorAvailability {
                id: windows.len() as u32 + 1,
                counselor_id,
                day_of_week: day.to_string(),
                start_time: start.to_string(),
                end_time: end.to_string(),
                is_available: true,
            });
        }
    }
    windows
}

// (title, description, location, days from today, cluster)
const EVENTS: &[(&str, &str, &str, i64, Option<u32>)] = &[
    ("Construction Trades Expo", "Hands-on demos from local builders and trade schools", "Florida State Fairgrounds, Tampa", -5, Some(2)),
    ("Tampa Bay Healthcare Career Fair", "Meet hospitals and clinics hiring nurses, techs and interns", "Tampa Convention Center", 7, Some(10)),
    ("Intro to Coding Night", "A beginner-friendly evening with local software teams", "Hillsborough Community College, Dale Mabry", 14, Some(13)),
    ("Joint Services Recruiting Day", "Talk with recruiters from every branch in one place", "MacDill Air Force Base Visitor Center", 21, None),
];

/// Seed events at 17:00 UTC, offset from `now`'s date. One is already past.
pub fn events(now: DateTime<Utc>) -> Vec<CareerEvent> {
    let today = now.date_naive();
    EVENTS
        .iter()
        .zip(1u32..)
        .filter_map(|(&(title, description, location, offset, cluster_id), id)| {
            let date = (today + Duration::days(offset)).and_hms_opt(17, 0, 0)?;
            Some(CareerEvent {
                id,
                title: title.to_string(),
                description: description.to_string(),
                location: location.to_string(),
                event_date: date.and_utc(),
                registration_url: None,
                image_url: None,
                cluster_id,
                created_at: now,
            })
        })
        .collect()
}

/// The full seed catalog, with availability and events anchored at `now`.
pub fn catalog(now: DateTime<Utc>) -> Catalog {
    let counselors = counselors();
    let windows = counselor_availability(counselors.iter().map(|c| c.id));
    let mut catalog = Catalog {
        clusters: clusters(),
        keywords: keywords(),
        events: events(now),
        counselors,
        counselor_availability: windows,
        ..Catalog::default()
    };

    for mentor in mentors() {
        // Every seed mentor points at a seeded cluster.
        if let Err(err) = catalog.insert_mentor(mentor) {
            tracing::error!(%err, "seed mentor rejected");
        }
    }

    let ids: Vec<u32> = catalog.mentors.iter().map(|m| m.id).collect();
    catalog.availability = availability(ids, now);
    catalog
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
