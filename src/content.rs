//! Everything the page says, as plain literals.
//!
//! Collections render in declaration order, so the order here is the order
//! on the page.

use std::sync::LazyLock;

use crate::media::{asset, youtube_thumbnail};

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub paper: &'static str,
    pub demo: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Shravani Chavan",
    tagline: "MS CS @ UPenn (’26) • Ex-SWE Intern @ Oracle • Ex-SWE @ Flipkart",
    location: "Philadelphia, PA",
    email: "schavan@seas.upenn.edu",
    linkedin: "https://linkedin.com/in/shravanichavan05",
    github: "https://github.com/shravani05",
    paper: "https://link.springer.com/chapter/10.1007/978-981-19-8094-7_35",
    demo: "https://youtu.be/pmGDxj7VQFk?si=7gK2XanwFnxS-Qfi",
};

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn photo(&self) -> String {
        asset("pic.jpeg")
    }

    pub fn resume(&self) -> String {
        asset("Shravani_Chavan_Resume.pdf")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub static SECTIONS: &[NavSection] = &[
    NavSection { id: "about", label: "About" },
    NavSection { id: "education", label: "Education" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "experience", label: "Experience" },
    NavSection { id: "achievements", label: "Achievements" },
    NavSection { id: "contact", label: "Contact" },
];

pub struct EducationEntry {
    pub school: &'static str,
    pub degree: &'static str,
    pub when: &'static str,
    pub gpa: &'static str,
    pub coursework: &'static [&'static str],
}

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        school: "University of Pennsylvania",
        degree: "MSE in Computer & Information Science",
        when: "Expected May 2026",
        gpa: "3.62/4",
        coursework: &[
            "Distributed Systems",
            "Operating Systems",
            "Artificial Intelligence",
            "Applied Machine Learning",
            "Big Data",
        ],
    },
    EducationEntry {
        school: "MKSSS’s Cummins College of Engineering for Women",
        degree: "B.Tech in Information Technology",
        when: "May 2022",
        gpa: "9.04/10",
        coursework: &[
            "Data Structures and Algorithms",
            "Object Oriented Programming",
            "Computer Networks",
            "Database and Management Systems",
        ],
    },
];

pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        skills: &[
            "Python", "Java", "C++", "C", "JavaScript", "Kotlin", "Go", "R", "SQL", "HTML", "CSS",
        ],
    },
    SkillGroup {
        category: "Frameworks",
        skills: &[
            "React", "Node.js", "Express", "Redux", "Vue", "Angular", "Flask", "JUnit", "jQuery",
            "Kubernetes", "TensorFlow", "Keras", "OpenCV",
        ],
    },
    SkillGroup {
        category: "Databases",
        skills: &["MongoDB", "MySQL", "SQLite", "PostgreSQL"],
    },
    SkillGroup {
        category: "Other",
        skills: &[
            "Applied AI/ML",
            "LLMs",
            "Apache Pulsar",
            "AWS",
            "GCP",
            "Git",
            "GitHub",
            "CI/CD",
            "Docker",
            "Postman",
            "Agile Development",
        ],
    },
];

pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub cta: Option<CallToAction>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "AI Agent Test Framework (Oracle Fusion ERP)",
        period: "May 2025 – Aug 2025",
        summary: "Unified platform to evaluate non-deterministic ERP AI agents with LLM-as-a-Judge; backend built with Flask + MySQL, integrated with AI Studio, caching & multithreading.",
        highlights: &[
            "Accelerated agent development by ~30%; tripled test coverage",
            "Automated test case generation, run comparison, and summarization using LLM",
            "Centralized results, reusable cases across agents/use-cases",
        ],
        tags: &[
            "Flask", "Python", "MySQL", "AI Studio", "LLM-as-a-Judge", "Caching", "Parallelism",
            "React", "Node",
        ],
        cta: None,
    },
    Project {
        title: "Guidance System for Claims & Needs of Labor (SIH ‘22 Winner)",
        period: "Aug 2022",
        summary: "A web application that streamlines Employee Provident Fund claim filing with a multilingual assistant and OCR-based ID extraction; built with MERN (MongoDB + Express + React + Node) and OCR (Python).",
        highlights: &[
            "Reduced claim filing time by ~60% via guided, simplified workflow",
            "Multilingual chatbot to assist workers through each step",
            "OCR auto-extracts identifiers from documents; fewer manual errors",
        ],
        tags: &["MongoDB", "Express", "React", "Redux", "Node", "OCR", "Python"],
        cta: None,
    },
    Project {
        title: "Smart Soft Landing of Aerial Vehicles (Research)",
        period: "Jul 2021 – Apr 2022",
        summary: "Convolutional Neural Network (CNN) estimates drone velocity from onboard frames for smooth landings; trained in AirSim across diverse terrains using Deep Learning (CV/CNN).",
        highlights: &[
            "Achieved ~97% accuracy on balanced evaluation data",
            "Robust to varied surfaces (moon/exoplanet/mountain) and lighting",
            "Compared deep learning and optical-flow approaches for velocity estimation; findings published in a Springer book",
        ],
        tags: &[
            "Python",
            "TensorFlow",
            "Keras",
            "CNN",
            "Deep Learning",
            "Computer Vision",
            "AirSim",
        ],
        cta: Some(CallToAction {
            label: "Read Paper",
            href: PROFILE.paper,
        }),
    },
    Project {
        title: "New Normal Scheduler (Microsoft Engage 2021)",
        period: "Nov 2021",
        summary: "A web application that streamlines hybrid-learning logistics: students submit weekly in-person/remote preferences and the system auto-generates capacity-aware class rosters (MERN).",
        highlights: &[
            "Cut TA/faculty scheduling from hours to minutes",
            "Faculty dashboard for review/overrides",
            "Role-based access (Student/Faculty) with secure login",
        ],
        tags: &["React", "Redux", "Node", "Express", "MongoDB"],
        cta: Some(CallToAction {
            label: "Watch Demo",
            href: PROFILE.demo,
        }),
    },
];

pub struct ExperienceEntry {
    pub company: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Oracle",
        title: "Software Engineer Intern",
        location: "Redwood City, CA",
        period: "May 2025 – Aug 2025",
        bullets: &[
            "Designed & deployed AI agent testing platform for Fusion ERP Payment Agents.",
            "Automated evaluation via LLM-as-a-Judge across metrics like answer correctness/ query alignment/clarity.",
            "Introduced advanced LLM-driven features such as automated test case creation, test run comparison, and result summarization.",
            "Eliminated redundant calls & races with in-memory caching, multithreading, and locking.",
        ],
    },
    ExperienceEntry {
        company: "Flipkart",
        title: "Software Engineer 1",
        location: "Bangalore, India",
        period: "Jul 2022 – Jul 2024",
        bullets: &[
            "Scaled Apache Pulsar on Kubernetes for high-fan-out workloads; hardened configs and tightened SLAs.",
            "Benchmarked and rolled out Pulsar 3.0.x across five isolation groups; validated throughput/latency and SLA compliance.",
            "Built capacity planning feature in Java that cut required producer quota by 62.5% and reduced hardware cost by 15%.",
            "Created Grafana dashboards and client-side metrics, reducing support inquiries by 30%.",
        ],
    },
    ExperienceEntry {
        company: "Nanyang Technological University (NTU)",
        title: "Research Intern",
        location: "Singapore",
        period: "May 2021 – Jul 2021",
        bullets: &[
            "Concept-level sentiment analysis on climate change tweets using SenticNet.",
            "Revealed global sentiment trends on topics such as global warming, advancing AI-for-social-good research.",
            "Trained and compared RNN (Recurrent Neural Network), LSTM (Long Short-Term Memory), and BERT (Bidirectional Encoder Representations from Transformers) models.",
            "Achieved 89% accuracy and actionable insights.",
        ],
    },
];

/// Media shown next to an achievement, settled when the entry is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AchievementMedia {
    None,
    Image {
        src: String,
    },
    Video {
        url: &'static str,
        thumbnail: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct Achievement {
    pub title: &'static str,
    pub when: &'static str,
    pub desc: &'static str,
    pub media: AchievementMedia,
    pub link: Option<&'static str>,
}

impl Achievement {
    pub fn new(title: &'static str, when: &'static str, desc: &'static str) -> Self {
        Self {
            title,
            when,
            desc,
            media: AchievementMedia::None,
            link: None,
        }
    }

    /// Static thumbnail from the bundled assets. On a video entry this
    /// replaces the derived preview.
    pub fn with_image(mut self, path: &str) -> Self {
        let src = asset(path);
        self.media = match self.media {
            AchievementMedia::Video { url, .. } => AchievementMedia::Video {
                url,
                thumbnail: Some(src),
            },
            _ => AchievementMedia::Image { src },
        };
        self
    }

    pub fn with_video(mut self, url: &'static str) -> Self {
        let thumbnail = match self.media {
            AchievementMedia::Image { src } => Some(src),
            _ => youtube_thumbnail(url),
        };
        self.media = AchievementMedia::Video { url, thumbnail };
        self
    }

    pub fn with_link(mut self, href: &'static str) -> Self {
        self.link = Some(href);
        self
    }

    pub fn thumbnail(&self) -> Option<&str> {
        match &self.media {
            AchievementMedia::None => None,
            AchievementMedia::Image { src } => Some(src.as_str()),
            AchievementMedia::Video { thumbnail, .. } => thumbnail.as_deref(),
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self.media, AchievementMedia::Video { .. })
    }

    /// Where the card points: the explicit link, else the video itself.
    pub fn href(&self) -> Option<&'static str> {
        match (&self.media, self.link) {
            (_, Some(link)) => Some(link),
            (AchievementMedia::Video { url, .. }, None) => Some(*url),
            _ => None,
        }
    }

    /// Text for the card's outbound link, if it has one.
    pub fn link_label(&self) -> Option<&'static str> {
        if self.is_video() {
            Some("Watch video")
        } else if self.link.is_some() {
            Some("Learn more")
        } else {
            None
        }
    }
}

pub static ACHIEVEMENTS: LazyLock<Vec<Achievement>> = LazyLock::new(|| {
    vec![
        Achievement::new(
            "Winner · Smart India Hackathon",
            "2022",
            "Emerged victorious from 160,000+ participants. Built a top-tier solution for the Ministry of Labour & Employment’s “Guidance system for claims and needs of labour” problem statement",
        )
        .with_image("achievements/sih.jpeg"),
        Achievement::new(
            "Top 500 Mentee · Microsoft Engage",
            "2021",
            "Selected from 25,000+ students; built New Normal Scheduler to mitigate hybrid-learning challenges post-COVID.",
        )
        .with_video(PROFILE.demo)
        .with_link(PROFILE.demo),
        Achievement::new(
            "Flipkart Girls Wanna Code Scholar",
            "2021",
            "Recognized among the top 200 scholars out of 5,000+ participants.",
        )
        .with_image("achievements/fk.jpeg"),
        Achievement::new(
            "2nd Runner-Up · IBM Software Hackathon",
            "2020",
            "Placed among 80+ teams; delivered an ML solution to help disaster victims navigate to safety.",
        ),
        Achievement::new(
            "Economic Times Campus Stars 4.0",
            "2021",
            "Among 87 students selected from 40,368 applicants across 2,000+ colleges after tests, GDs, and interviews.",
        )
        .with_image("achievements/ET.jpg"),
        Achievement::new(
            "1st Place · Code-It (ACM-W)",
            "2019",
            "Ranked #1 among 250 competitors in ACM-W chapter’s coding contest.",
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Bundled assets are deployed separately; the manifest lists them all.
    #[test]
    fn test_bundled_assets_are_in_manifest() {
        let manifest = include_str!("../public/README.md");
        let mut local = vec![PROFILE.photo(), PROFILE.resume()];
        local.extend(
            ACHIEVEMENTS
                .iter()
                .filter_map(|a| a.thumbnail())
                .filter(|src| !src.starts_with("http"))
                .map(str::to_string),
        );
        assert_eq!(local.len(), 5);
        for path in &local {
            let file = path
                .strip_prefix(crate::config::BASE_PATH)
                .unwrap_or_else(|| panic!("{path} not under base path"));
            assert!(manifest.contains(&format!("`{file}`")), "{file} not listed");
        }
    }

    #[test]
    fn test_section_order_and_ids() {
        let ids = SECTIONS.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "about",
                "education",
                "skills",
                "projects",
                "experience",
                "achievements",
                "contact"
            ]
        );
        let unique = ids.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_video_achievement_derives_thumbnail() {
        let engage = &ACHIEVEMENTS[1];
        assert!(engage.is_video());
        assert_eq!(
            engage.thumbnail(),
            Some("https://img.youtube.com/vi/pmGDxj7VQFk/hqdefault.jpg")
        );
        assert_eq!(engage.href(), Some(PROFILE.demo));
        assert_eq!(engage.link_label(), Some("Watch video"));
    }

    #[test]
    fn test_image_and_text_only_achievements() {
        let sih = &ACHIEVEMENTS[0];
        assert!(matches!(sih.media, AchievementMedia::Image { .. }));
        assert!(sih.thumbnail().is_some_and(|t| t.ends_with("achievements/sih.jpeg")));
        assert_eq!(sih.href(), None);
        assert_eq!(sih.link_label(), None);

        let ibm = &ACHIEVEMENTS[3];
        assert_eq!(ibm.media, AchievementMedia::None);
        assert_eq!(ibm.thumbnail(), None);
    }

    #[test]
    fn test_unrecognized_video_renders_without_thumbnail() {
        let a = Achievement::new("t", "2020", "d").with_video("https://example.com/talk");
        assert_eq!(a.thumbnail(), None);
        assert_eq!(a.href(), Some("https://example.com/talk"));
        assert_eq!(a.link_label(), Some("Watch video"));
    }

    #[test]
    fn test_explicit_image_wins_over_derived_thumbnail() {
        let a = Achievement::new("t", "2020", "d")
            .with_video(PROFILE.demo)
            .with_image("custom.png");
        assert!(a.is_video());
        assert!(a.thumbnail().is_some_and(|t| t.ends_with("/custom.png")));

        let b = Achievement::new("t", "2020", "d")
            .with_image("custom.png")
            .with_video(PROFILE.demo);
        assert_eq!(a.thumbnail(), b.thumbnail());
    }

    #[test]
    fn test_plain_link_label() {
        let a = Achievement::new("t", "2020", "d").with_link("https://example.com");
        assert_eq!(a.href(), Some("https://example.com"));
        assert_eq!(a.link_label(), Some("Learn more"));
    }

    #[test]
    fn test_collections_keep_declaration_order() {
        assert_eq!(EDUCATION[0].school, "University of Pennsylvania");
        assert_eq!(SKILLS.iter().map(|g| g.category).collect::<Vec<_>>(), [
            "Languages",
            "Frameworks",
            "Databases",
            "Other"
        ]);
        assert_eq!(
            EXPERIENCE.iter().map(|e| e.company).collect::<Vec<_>>(),
            ["Oracle", "Flipkart", "Nanyang Technological University (NTU)"]
        );
        assert_eq!(ACHIEVEMENTS.len(), 6);
        assert_eq!(ACHIEVEMENTS[5].when, "2019");
        assert_eq!(PROJECTS[2].cta.as_ref().map(|c| c.label), Some("Read Paper"));
    }
}
