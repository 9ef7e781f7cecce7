//! Static career-options catalog: role lists, closed enums for the form
//! fields, country codes and the fixed skill set. Nothing here is fetched;
//! the client receives this verbatim and the services match on the enums.

use serde::{Deserialize, Serialize};

pub const CURRENT_ROLES: &[&str] = &[
    "AI Engineer",
    "Data Scientist",
    "Designer",
    "Entrepreneur",
    "Finance Professional",
    "Management Professional",
    "Marketing Specialist",
    "Product Manager",
    "Software Engineer",
    "Student",
    "Tech Lead",
];

pub const FUTURE_ROLES: &[&str] = &[
    "AI Engineer",
    "Data Scientist",
    "Designer",
    "Entrepreneur",
    "Finance Professional",
    "Management Professional",
    "Marketing Specialist",
    "Product Manager",
    "Software Engineer",
    "Tech Lead",
];

pub const ASSESSMENT_URL: &str = "https://theclassment.com/psychometrics";
pub const EXPLORER_URL: &str = "https://theclassment.streamlit.app/Explorer_Lab";
pub const BOOKING_PATH: &str = "/booking";

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Timeframe {
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "12months")]
    TwelveMonths,
    #[serde(rename = "24months")]
    TwentyFourMonths,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::ThreeMonths,
        Timeframe::SixMonths,
        Timeframe::TwelveMonths,
        Timeframe::TwentyFourMonths,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Timeframe::ThreeMonths => "3months",
            Timeframe::SixMonths => "6months",
            Timeframe::TwelveMonths => "12months",
            Timeframe::TwentyFourMonths => "24months",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::ThreeMonths => "3 months",
            Timeframe::SixMonths => "6 months",
            Timeframe::TwelveMonths => "12 months",
            Timeframe::TwentyFourMonths => "24 months",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Timeframe::ThreeMonths => "🔜",
            Timeframe::SixMonths => "⏳",
            Timeframe::TwelveMonths | Timeframe::TwentyFourMonths => "📆",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Impact,
    Salary,
    Balance,
    Recognition,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Impact,
        Priority::Salary,
        Priority::Balance,
        Priority::Recognition,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Impact => "Impact",
            Priority::Salary => "Salary",
            Priority::Balance => "Work-life Balance",
            Priority::Recognition => "Job Satisfaction",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Priority::Impact => "🌍",
            Priority::Salary => "💰",
            Priority::Balance => "🏖️",
            Priority::Recognition => "🏆",
        }
    }
}

/// Closed set of mentoring personas. The advice generator matches on this
/// exhaustively, so a new style fails to compile until it gets a paragraph.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum MentorStyle {
    Visionary,
    Practical,
    Challenger,
    Supportive,
    Analytical,
}

impl MentorStyle {
    pub const ALL: [MentorStyle; 5] = [
        MentorStyle::Visionary,
        MentorStyle::Practical,
        MentorStyle::Challenger,
        MentorStyle::Supportive,
        MentorStyle::Analytical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MentorStyle::Visionary => "Visionary",
            MentorStyle::Practical => "Practical",
            MentorStyle::Challenger => "Challenger",
            MentorStyle::Supportive => "Supportive",
            MentorStyle::Analytical => "Analytical",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MentorStyle::Visionary => "🔮",
            MentorStyle::Practical => "🛠️",
            MentorStyle::Challenger => "🔥",
            MentorStyle::Supportive => "🌱",
            MentorStyle::Analytical => "📊",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MentorStyle::Visionary => {
                "Sees the big picture and inspires with bold ideas and future possibilities."
            }
            MentorStyle::Practical => {
                "Focuses on real-world applications and actionable steps to achieve goals."
            }
            MentorStyle::Challenger => {
                "Pushes you beyond your comfort zone and holds you accountable."
            }
            MentorStyle::Supportive => {
                "Nurtures your growth with encouragement and positive reinforcement."
            }
            MentorStyle::Analytical => {
                "Uses data and logic to guide decisions and measure progress."
            }
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug)]
pub struct Country {
    pub value: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { value: "au", label: "Australia", emoji: "🇦🇺" },
    Country { value: "br", label: "Brazil", emoji: "🇧🇷" },
    Country { value: "ca", label: "Canada", emoji: "🇨🇦" },
    Country { value: "cn", label: "China", emoji: "🇨🇳" },
    Country { value: "fr", label: "France", emoji: "🇫🇷" },
    Country { value: "de", label: "Germany", emoji: "🇩🇪" },
    Country { value: "in", label: "India", emoji: "🇮🇳" },
    Country { value: "ie", label: "Ireland", emoji: "🇮🇪" },
    Country { value: "it", label: "Italy", emoji: "🇮🇹" },
    Country { value: "jp", label: "Japan", emoji: "🇯🇵" },
    Country { value: "mx", label: "Mexico", emoji: "🇲🇽" },
    Country { value: "nl", label: "Netherlands", emoji: "🇳🇱" },
    Country { value: "sg", label: "Singapore", emoji: "🇸🇬" },
    Country { value: "za", label: "South Africa", emoji: "🇿🇦" },
    Country { value: "kr", label: "South Korea", emoji: "🇰🇷" },
    Country { value: "es", label: "Spain", emoji: "🇪🇸" },
    Country { value: "se", label: "Sweden", emoji: "🇸🇪" },
    Country { value: "ae", label: "UAE", emoji: "🇦🇪" },
    Country { value: "uk", label: "United Kingdom", emoji: "🇬🇧" },
    Country { value: "us", label: "United States", emoji: "🇺🇸" },
];

pub fn country_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.value == code)
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Functional,
    Soft,
}

#[derive(Serialize, Clone, Copy, Debug)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: SkillKind,
    pub description: &'static str,
    pub learning_resource: &'static str,
}

/// The skill set is static and role-independent for now.
pub const SKILLS: &[Skill] = &[
    Skill {
        id: "skill1",
        name: "Strategic Thinking",
        kind: SkillKind::Functional,
        description: "The ability to think long-term, identify patterns, and develop effective strategies to achieve business goals.",
        learning_resource: "https://www.coursera.org/learn/strategic-thinking",
    },
    Skill {
        id: "skill2",
        name: "Data Analysis",
        kind: SkillKind::Functional,
        description: "Ability to interpret complex data sets, extract insights, and make data-driven decisions.",
        learning_resource: "https://www.udemy.com/course/data-analysis-with-excel-pivot-tables/",
    },
    Skill {
        id: "skill3",
        name: "Project Management",
        kind: SkillKind::Functional,
        description: "Skills to plan, execute, and close projects successfully, including resource allocation and timeline management.",
        learning_resource: "https://www.pmi.org/learning/courses",
    },
    Skill {
        id: "skill4",
        name: "Communication",
        kind: SkillKind::Soft,
        description: "Ability to clearly articulate ideas, listen effectively, and tailor communication to different audiences.",
        learning_resource: "https://www.linkedin.com/learning/communication-foundations-4",
    },
    Skill {
        id: "skill5",
        name: "Leadership",
        kind: SkillKind::Soft,
        description: "Capacity to inspire and motivate teams, delegate effectively, and drive organizational change.",
        learning_resource: "https://www.edx.org/learn/leadership",
    },
    Skill {
        id: "skill6",
        name: "Problem Solving",
        kind: SkillKind::Soft,
        description: "Ability to identify issues, analyze root causes, and develop effective solutions.",
        learning_resource: "https://www.coursera.org/learn/problem-solving-skills",
    },
    Skill {
        id: "skill7",
        name: "Industry Knowledge",
        kind: SkillKind::Functional,
        description: "Deep understanding of industry trends, competitive landscape, and market dynamics.",
        learning_resource: "https://trends.google.com/trends/",
    },
    Skill {
        id: "skill8",
        name: "Stakeholder Management",
        kind: SkillKind::Functional,
        description: "Skills to identify, engage, and manage relationships with key stakeholders.",
        learning_resource: "https://www.udemy.com/course/stakeholder-management/",
    },
];

pub fn skill_by_id(id: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|s| s.id == id)
}

/// Full catalog payload served to the client and written into the
/// `roadmapCareerOptions` slot on generation.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CareerOptions {
    pub current_roles: Vec<&'static str>,
    pub future_roles: Vec<&'static str>,
    pub timeframes: Vec<OptionEntry>,
    pub countries: Vec<Country>,
    pub priorities: Vec<OptionEntry>,
    pub mentor_styles: Vec<MentorStyleEntry>,
    pub skills: Vec<Skill>,
}

#[derive(Serialize, Debug)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

#[derive(Serialize, Debug)]
pub struct MentorStyleEntry {
    pub value: MentorStyle,
    pub label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

impl CareerOptions {
    pub fn catalog() -> Self {
        CareerOptions {
            current_roles: CURRENT_ROLES.to_vec(),
            future_roles: FUTURE_ROLES.to_vec(),
            timeframes: Timeframe::ALL
                .iter()
                .map(|t| OptionEntry {
                    value: t.value(),
                    label: t.label(),
                    emoji: t.emoji(),
                })
                .collect(),
            countries: COUNTRIES.to_vec(),
            priorities: Priority::ALL
                .iter()
                .map(|p| OptionEntry {
                    value: match p {
                        Priority::Impact => "impact",
                        Priority::Salary => "salary",
                        Priority::Balance => "balance",
                        Priority::Recognition => "recognition",
                    },
                    label: p.label(),
                    emoji: p.emoji(),
                })
                .collect(),
            mentor_styles: MentorStyle::ALL
                .iter()
                .map(|s| MentorStyleEntry {
                    value: *s,
                    label: s.label(),
                    emoji: s.emoji(),
                    description: s.description(),
                })
                .collect(),
            skills: SKILLS.to_vec(),
        }
    }
}
