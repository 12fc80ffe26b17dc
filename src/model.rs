//! Static site content. Every record is a `'static` literal constructed
//! once and never mutated; sections render straight from these slices.

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub intro: &'static str,
    pub portrait: &'static str,
    pub portrait_alt: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Swaraj Kumar",
    role: "Web Developer & Electronics Engineer",
    intro: "I specialize in creating responsive web applications and innovative \
            electronic solutions. With a background in project management and \
            research, I bring a unique perspective to every project.",
    portrait: "/assets/portrait.jpg",
    portrait_alt: "Portrait of Swaraj Kumar",
};

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Gituswaraj",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/swaraj-kumar-07470b259/",
    },
    SocialLink {
        label: "Email",
        href: "mailto:swarajkumar830@gmail.com",
    },
];

pub struct NavLink {
    pub name: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", anchor: "#home" },
    NavLink { name: "About", anchor: "#about" },
    NavLink { name: "Skills", anchor: "#skills" },
    NavLink { name: "Experience", anchor: "#experience" },
    NavLink { name: "Projects", anchor: "#projects" },
    NavLink { name: "Education", anchor: "#education" },
    NavLink { name: "Certifications", anchor: "#certifications" },
    NavLink { name: "Contact", anchor: "#contact" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm Swaraj Kumar, a passionate Electronics and Communication Engineering \
     undergraduate with a strong foundation in web development and programming.",
    "My journey in technology has equipped me with skills in project management \
     and research, allowing me to approach problems with analytical thinking and \
     creative solutions.",
    "I specialize in developing responsive web applications using modern \
     technologies, while also leveraging my background in electronics for \
     innovative projects that bridge hardware and software.",
];

pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
}

pub const ABOUT_STATS: &[StatCard] = &[
    StatCard { label: "Education", value: "B.Tech in ECE" },
    StatCard { label: "Experience", value: "Project Management & Research" },
    StatCard { label: "Projects", value: "4+ Completed" },
];

pub struct SkillItem {
    pub name: &'static str,
    /// Self-assessed proficiency in percent, drives the bar width only.
    pub level: u8,
}

pub const TECHNICAL_SKILLS: &[SkillItem] = &[
    SkillItem { name: "Java", level: 85 },
    SkillItem { name: "C++", level: 80 },
    SkillItem { name: "JavaScript", level: 90 },
    SkillItem { name: "React.js", level: 85 },
    SkillItem { name: "Next.js", level: 80 },
    SkillItem { name: "Data Structures", level: 75 },
];

pub const SOFT_SKILLS: &[SkillItem] = &[
    SkillItem { name: "Team Collaboration", level: 90 },
    SkillItem { name: "Problem Solving", level: 85 },
    SkillItem { name: "Analytical Thinking", level: 80 },
];

pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Project Management Intern",
        company: "MDOC INFO PVT. LTD.",
        period: "July 2024 - September 2024",
        description: "Led project management initiatives, coordinated with \
                      cross-functional teams, and implemented efficient workflows \
                      to ensure timely project delivery.",
        skills: &["Project Management", "Team Coordination", "Workflow Optimization"],
    },
    ExperienceEntry {
        title: "Research Assistant",
        company: "CodeHelp",
        period: "Jul 2023 - Dec 2023",
        description: "Conducted research on emerging technologies, assisted in \
                      developing educational content, and contributed to technical \
                      documentation for programming courses.",
        skills: &["Technical Research", "Content Development", "Documentation"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Proximity Sensor",
        description: "An IoT-based proximity detection system using Arduino and \
                      ultrasonic sensors for accurate distance measurement and \
                      obstacle detection.",
        image: "/assets/proximity.webp",
        tags: &["Arduino", "IoT", "Electronics", "C++"],
        github: None,
        demo: None,
    },
    Project {
        title: "E-cart Website",
        description: "A full-featured e-commerce platform with product catalog, \
                      shopping cart, user authentication, and payment integration.",
        image: "/assets/ecart.jpg",
        tags: &["React.js", "Node.js", "MongoDB", "Express"],
        github: Some("https://github.com/Gituswaraj"),
        demo: None,
    },
    Project {
        title: "Portfolio Website",
        description: "A modern, responsive portfolio website to showcase skills, \
                      projects, and professional experience.",
        image: "/assets/portfolio.png",
        tags: &["Rust", "Yew", "WebAssembly", "axum"],
        github: Some("https://github.com/Gituswaraj"),
        demo: Some("https://portfolio-git-main-swarajs-projects-69d918fd.vercel.app/"),
    },
    Project {
        title: "TourPhin",
        description: "A travel companion app that helps users discover local \
                      attractions, plan itineraries, and navigate unfamiliar \
                      destinations.",
        image: "/assets/tourphin.png",
        tags: &["React Native", "Firebase", "Google Maps API", "Node.js"],
        github: Some("https://github.com/Gituswaraj"),
        demo: Some("https://tour-phin.vercel.app/"),
    },
];

pub struct EducationEntry {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub courses: &'static [&'static str],
}

pub const EDUCATION: &[EducationEntry] = &[EducationEntry {
    degree: "Bachelor of Technology",
    field: "Electronics and Communication Engineering",
    institution: "Bhagwan Parshuram Institute Of Technology, IPU",
    location: "Delhi, India",
    period: "2022 - 2026",
    description: "Pursuing B.Tech in Electronics and Communication Engineering \
                  with a focus on embedded systems and digital signal processing. \
                  Participated in various technical competitions and workshops, \
                  enhancing practical knowledge and team collaboration skills.",
    courses: &[
        "Digital Electronics",
        "Microprocessors",
        "Signal Processing",
        "Communication Systems",
        "Embedded Systems",
    ],
}];

pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub verify_url: Option<&'static str>,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "IEEE DTU VIHAAN 6.0",
        issuer: "IEEE DTU",
        date: "March 2023",
        image: "/assets/cert-vihaan.jpg",
        verify_url: Some(
            "https://certificate.givemycertificate.com/c/def31769-6a25-4557-b69e-fa55306852f3",
        ),
    },
    Certificate {
        title: "Problem Solving",
        issuer: "HackerRank",
        date: "March 2025",
        image: "/assets/cert-problem-solving.jpg",
        verify_url: Some("https://www.hackerrank.com/certificates/ec5b8db97669"),
    },
    Certificate {
        title: "Java Basics",
        issuer: "HackerRank",
        date: "July 2023",
        image: "/assets/cert-java.jpg",
        verify_url: Some("https://www.hackerrank.com/certificates/fdf2832bc51b"),
    },
    Certificate {
        title: "Internship",
        issuer: "mDoc",
        date: "September 2024",
        image: "/assets/cert-internship.jpg",
        verify_url: None,
    },
];

pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Email",
        value: "swarajkumar830@gmail.com",
        href: Some("mailto:swarajkumar830@gmail.com"),
    },
    ContactChannel {
        title: "Phone",
        value: "+91 9876000000",
        href: Some("tel:+919876000000"),
    },
    ContactChannel {
        title: "Location",
        value: "Delhi, India",
        href: None,
    },
];

/// A named alternate arrangement of one section's fixed item list. Modes
/// change layout only; the items a section renders never depend on them.
pub trait ViewMode: Copy + PartialEq + Default + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SkillsMode {
    #[default]
    Grid,
    Bars,
}

impl ViewMode for SkillsMode {
    const ALL: &'static [Self] = &[Self::Grid, Self::Bars];

    fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::Bars => "Bars",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ExperienceMode {
    #[default]
    Timeline,
    Cards,
}

impl ViewMode for ExperienceMode {
    const ALL: &'static [Self] = &[Self::Timeline, Self::Cards];

    fn label(self) -> &'static str {
        match self {
            Self::Timeline => "Timeline",
            Self::Cards => "Cards",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ProjectsMode {
    #[default]
    Grid,
    Showcase,
}

impl ViewMode for ProjectsMode {
    const ALL: &'static [Self] = &[Self::Grid, Self::Showcase];

    fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::Showcase => "Showcase",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mode_invariants<M: ViewMode + std::fmt::Debug>() {
        assert!(!M::ALL.is_empty());
        assert!(
            M::ALL.contains(&M::default()),
            "remount default must be a listed mode"
        );

        for (index, mode) in M::ALL.iter().enumerate() {
            for other in &M::ALL[index + 1..] {
                assert_ne!(mode.label(), other.label(), "duplicate mode label");
            }
        }
    }

    #[test]
    fn view_modes_are_well_formed() {
        assert_mode_invariants::<SkillsMode>();
        assert_mode_invariants::<ExperienceMode>();
        assert_mode_invariants::<ProjectsMode>();
    }

    #[test]
    fn section_data_is_present() {
        assert_eq!(TECHNICAL_SKILLS.len(), 6);
        assert_eq!(SOFT_SKILLS.len(), 3);
        assert_eq!(EXPERIENCES.len(), 2);
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(CERTIFICATES.len(), 4);
        assert_eq!(NAV_LINKS.len(), 8);
    }

    #[test]
    fn skill_levels_are_percentages() {
        for skill in TECHNICAL_SKILLS.iter().chain(SOFT_SKILLS) {
            assert!(skill.level <= 100, "{} level out of range", skill.name);
        }
    }
}
