//! Static portfolio content.
//!
//! Everything the page says about its owner lives here so section
//! components only decide layout.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const SITE_TITLE: &str = "Developer Portfolio";
pub const SITE_DESCRIPTION: &str = "A minimalistic developer portfolio";

pub const OWNER_NAME: &str = "Manish Reddy";
pub const OWNER_FULL_NAME: &str = "Madi Manish Reddy";
pub const TAGLINE: &str = "A passionate full-stack developer crafting elegant solutions to complex problems.";
pub const RESUME_PATH: &str = "/resume/manish-reddy-resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Manish_Reddy_Resume.pdf";
pub const PROFILE_IMAGE: &str = "/images/profile.jpg";
/// Year printed in the footer when rendered on the server.
pub const COPYRIGHT_YEAR: i32 = 2025;

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", section: "hero" },
    NavItem { label: "About", section: "about" },
    NavItem { label: "Skills", section: "skills" },
    NavItem { label: "Projects", section: "projects" },
    NavItem { label: "Stats", section: "github-activity" },
    NavItem { label: "Contact", section: "contact" },
];

/// Section ids in document order, as rendered by the home page.
pub const SECTION_IDS: &[&str] = &["hero", "about", "skills", "projects", "github-activity", "contact"];

// =============================================================================
// SOCIAL
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// External links open in a new tab; `mailto:` links do not.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("https://")
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", icon: "GH", href: "https://github.com/madimanish14" },
    SocialLink { label: "LinkedIn", icon: "in", href: "https://www.linkedin.com/in/manish-reddy-390b7825b/" },
    SocialLink { label: "Twitter", icon: "𝕏", href: "https://twitter.com" },
    SocialLink { label: "Email", icon: "✉", href: "mailto:manish14.official@gmail.com" },
];

// =============================================================================
// ABOUT
// =============================================================================

/// A run of about-me text; highlighted runs render emphasized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
    Plain(&'static str),
    Highlight(&'static str),
}

pub const ABOUT_PARAGRAPHS: &[&[Span]] = &[
    &[
        Span::Plain("I'm Madi Manish Reddy, a "),
        Span::Highlight("Computer Science and Engineering"),
        Span::Plain(" undergraduate from "),
        Span::Highlight("VJIT, Hyderabad"),
        Span::Plain(". I'm deeply passionate about technology and continuously exploring the fields of "),
        Span::Highlight("full-stack development"),
        Span::Plain(", "),
        Span::Highlight("data science"),
        Span::Plain(", and "),
        Span::Highlight("machine learning"),
        Span::Plain("."),
    ],
    &[
        Span::Plain("I've built projects ranging from "),
        Span::Highlight("interactive web applications"),
        Span::Plain(" to "),
        Span::Highlight("analytical tools"),
        Span::Plain(" powered by machine learning. I've completed certifications from "),
        Span::Highlight("Meta"),
        Span::Plain(", "),
        Span::Highlight("Oracle"),
        Span::Plain(", "),
        Span::Highlight("IBM"),
        Span::Plain(", and "),
        Span::Highlight("Cisco"),
        Span::Plain(
            ", strengthening my foundation in front-end development, databases, and cloud technologies. \
             I also actively sharpen my problem-solving skills on platforms like ",
        ),
        Span::Highlight("LeetCode"),
        Span::Plain(", where I've achieved a rating of "),
        Span::Highlight("1662"),
        Span::Plain("."),
    ],
    &[
        Span::Plain("As a developer, I believe in "),
        Span::Highlight("clean design"),
        Span::Plain(", "),
        Span::Highlight("continuous learning"),
        Span::Plain(", and building "),
        Span::Highlight("impactful solutions"),
        Span::Plain(" with code."),
    ],
];

// =============================================================================
// SKILLS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    /// CSS accent modifier, e.g. `skill-category--purple`.
    pub accent: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming Languages",
        accent: "skill-category--purple",
        skills: &["Java", "Python", "JavaScript", "C", "SQL", "PHP"],
    },
    SkillCategory {
        name: "Frontend Development",
        accent: "skill-category--blue",
        skills: &["React", "HTML", "CSS", "Tailwind CSS", "Bootstrap", "jQuery"],
    },
    SkillCategory {
        name: "Backend Development",
        accent: "skill-category--green",
        skills: &[
            "Node.js",
            "Flask",
            "FastAPI",
            "PostgreSQL",
            "MySQL",
            "SQLite",
            "Redis",
            "Firebase",
            "Supabase",
            "GraphQL",
            "REST APIs",
        ],
    },
    SkillCategory {
        name: "Machine Learning & Data Science",
        accent: "skill-category--orange",
        skills: &[
            "TensorFlow",
            "Keras",
            "Scikit-Learn",
            "Pandas",
            "NumPy",
            "Matplotlib",
            "Seaborn",
            "OpenCV",
            "XGBoost",
            "Hugging Face",
            "Plotly",
            "MLflow",
        ],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        accent: "skill-category--indigo",
        skills: &[
            "AWS EC2",
            "AWS S3",
            "AWS Lambda",
            "Docker",
            "GitHub Actions",
            "Firebase",
            "Kubernetes",
            "CI/CD",
            "Git",
            "Linux",
        ],
    },
];

/// Glyph shown next to a skill name.
pub fn skill_glyph(skill: &str) -> &'static str {
    match skill {
        "Java" => "☕",
        "Python" | "C" | "Linux" => "⌨",
        "JavaScript" | "React" | "jQuery" => "{}",
        "SQL" | "PostgreSQL" | "MySQL" | "SQLite" | "Redis" | "Firebase" | "Supabase" | "AWS S3" => "🗄",
        "CSS" | "Tailwind CSS" => "✎",
        "Node.js" | "Flask" | "FastAPI" | "AWS EC2" => "🖥",
        "GraphQL" | "REST APIs" => "🔗",
        "TensorFlow" | "Keras" => "🧠",
        "Scikit-Learn" | "Pandas" | "NumPy" | "XGBoost" => "📊",
        "Matplotlib" | "Seaborn" | "Plotly" => "📈",
        "OpenCV" => "📷",
        "Hugging Face" => "🤗",
        "MLflow" | "GitHub Actions" | "CI/CD" => "⚙",
        "Docker" | "Kubernetes" => "🌐",
        "Git" => "⎇",
        _ => "</>",
    }
}

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "🏠 Housing Markets Analysis",
        description: "A data-driven dashboard analyzing housing trends across India with interactive visualizations.",
        image: "/images/housing-market.png",
        tech: &["Python", "Streamlit", "Pandas", "Matplotlib", "Plotly"],
        github: "https://github.com/m-manish03/Indian-Housing-Markets-Analysis-and-Visualization",
        demo: "https://indian-housing-markets-analysis-and-visualization.streamlit.app/",
    },
    Project {
        id: 2,
        title: "🧠 Brain Hemorrhage Detection",
        description: "Deep learning-based tool to detect brain hemorrhages in CT scans using CNN architectures.",
        image: "/images/brain-hemorrhage.png",
        tech: &["Python", "Flask", "Keras", "Numpy"],
        github: "https://github.com/m-manish03/Brain-Hemorrhage-Detection",
        demo: "https://github.com/m-manish03/Brain-Hemorrhage-Detection",
    },
    Project {
        id: 3,
        title: "☁️ Weather App",
        description: "A sleek and responsive weather forecasting app showing real-time weather info for any location.",
        image: "/images/weather-app.png",
        tech: &["React", "Vite", "JavaScript", "CSS"],
        github: "https://github.com/m-manish03/Weather-App",
        demo: "https://earnest-tiramisu-c1119c.netlify.app/",
    },
    Project {
        id: 4,
        title: "🔢 Sorting Algorithms Visualizer",
        description: "Interactive visualizer that animates various sorting algorithms to aid understanding.",
        image: "/images/sorting-algorithms.png",
        tech: &["React", "Vite", "JavaScript", "CSS"],
        github: "https://github.com/m-manish03/Sorting-Algorithms-Visualizer",
        demo: "https://sorting-algorithms-visualizer-blue.vercel.app/",
    },
    Project {
        id: 5,
        title: "💰 Expense Tracker",
        description: "A simple tool to track and manage expenses with real-time total calculation.",
        image: "/images/expense-tracker.png",
        tech: &["HTML", "CSS (Bootstrap)", "JavaScript"],
        github: "https://github.com/m-manish03/Expense-Tracker",
        demo: "https://expense-tracker-navy-nine.vercel.app/",
    },
    Project {
        id: 6,
        title: "⌨️ TypeRush",
        description: "Typing game designed to improve speed and accuracy with live performance tracking.",
        image: "/images/type-rush.png",
        tech: &["HTML", "JavaScript", "CSS"],
        github: "https://github.com/m-manish03/TypeRush",
        demo: "https://type-rush-fawn.vercel.app/",
    },
];

// =============================================================================
// STATS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformRating {
    pub platform: &'static str,
    pub rating: u32,
    pub detail: &'static str,
    /// CSS accent modifier, e.g. `rating-card--amber`.
    pub accent: &'static str,
    pub profile_url: &'static str,
}

pub const PLATFORM_RATINGS: &[PlatformRating] = &[
    PlatformRating {
        platform: "LeetCode",
        rating: 1651,
        detail: "top 17%",
        accent: "rating-card--amber",
        profile_url: "https://leetcode.com/u/manish-madi/",
    },
    PlatformRating {
        platform: "CodeChef",
        rating: 1627,
        detail: "3★, Division 2",
        accent: "rating-card--green",
        profile_url: "https://codechef.com/users/manishreddy14",
    },
    PlatformRating {
        platform: "Codeforces",
        rating: 1194,
        detail: "Rank 5796",
        accent: "rating-card--blue",
        profile_url: "https://codeforces.com/profile/manishreddy14",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GithubStats {
    pub handle: &'static str,
    pub profile_url: &'static str,
    pub avatar_url: &'static str,
    pub repos: u32,
    pub stars: u32,
    pub commits: u32,
    pub pull_requests: u32,
}

pub const GITHUB_STATS: GithubStats = GithubStats {
    handle: "m-manish03",
    profile_url: "https://github.com/m-manish03",
    avatar_url: "https://github.com/m-manish03.png",
    repos: 21,
    stars: 31,
    commits: 423,
    pull_requests: 74,
};

impl GithubStats {
    /// Label/value pairs for the counter tiles.
    pub fn counters(&self) -> [(&'static str, u32); 4] {
        [
            ("Repositories", self.repos),
            ("Stars", self.stars),
            ("Commits", self.commits),
            ("Pull Requests", self.pull_requests),
        ]
    }
}
