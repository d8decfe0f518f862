//! Fixed option lists rendered by the wizards.

pub const YES_NO: &[&str] = &["Yes", "No"];
pub const WORK_MODES: &[&str] = &["Remote", "Hybrid", "Onsite"];
pub const PERKS: &[&str] = &[
    "Learning budget",
    "Certificate",
    "PPO opportunity",
    "Flexible hours",
    "Health insurance",
];

pub const JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Contract", "Fresher"];
pub const JOB_EXPERIENCE: &[&str] = &["Fresher", "0–1 year", "1–3 years", "3–5 years", "5+ years"];
pub const JOB_SKILLS: &[&str] = &[
    "Excel",
    "Basic SQL",
    "Communication",
    "Power BI",
    "Python",
    "Tableau",
    "R",
    "Machine Learning",
    "JavaScript",
    "React",
    "Node.js",
];

pub const INTERNSHIP_TYPES: &[&str] = &["Internship", "Part-time", "Project-based"];
pub const INTERNSHIP_EXPERIENCE: &[&str] = &["Fresher", "Final-year Student", "0–1 year"];
pub const INTERNSHIP_SKILLS: &[&str] = &[
    "Excel",
    "Basic SQL",
    "Communication",
    "Power BI",
    "Python",
    "Tableau",
    "R",
    "Machine Learning",
];
pub const EDUCATION: &[&str] = &[
    "Any degree",
    "Bachelor's degree in related field",
    "Master's degree in related field",
    "Final-year students allowed",
    "Specific degree (CS/IT/Data Science)",
];

pub const COURSE_CATEGORIES: &[&str] = &["Tech", "Finance", "Design", "Marketing", "Operations", "Soft Skills"];
pub const COURSE_SKILLS: &[&str] = &[
    "Excel",
    "Data Analysis",
    "Internship Prep",
    "Python",
    "React",
    "Communication",
];
pub const COURSE_TYPES: &[&str] = &["Recorded", "Live", "Hybrid"];
pub const OPPORTUNITIES: &[&str] = &["Internship roles", "Entry-level jobs", "Mentorships"];
pub const LESSON_TYPES: &[&str] = &["Video", "PDF/Notes", "Assignment", "Quiz", "Live Session"];
pub const PRICE_TYPES: &[&str] = &["Free", "Paid"];
pub const ACCESS_TYPES: &[&str] = &["Lifetime", "Limited"];
pub const COMPLETION_LOGIC: &[&str] = &["Watch %", "Submit Assignment", "Manual Approval"];
pub const PUBLISH_STATUS: &[&str] = &["Draft", "Published"];
pub const VISIBILITY: &[&str] = &["Public", "Private"];

pub const MENTOR_DOMAINS: &[&str] = &["Tech", "Finance", "Design", "Marketing", "Operations"];
pub const MENTOR_SUB_SKILLS: &[&str] = &[
    "Excel",
    "SQL",
    "Power BI",
    "Python",
    "Interview Prep",
    "Data Analysis",
    "Product Management",
    "Machine Learning",
    "UI/UX Design",
    "Digital Marketing",
];
pub const MENTORSHIP_TYPES: &[&str] = &[
    "Career Guidance",
    "Job Preparation",
    "Internship Guidance",
    "Skill Review",
    "Portfolio Review",
];
pub const MENTORSHIP_FORMATS: &[&str] = &["1:1", "Group", "Chat-based", "Live session"];
pub const MENTORSHIP_DURATIONS: &[&str] = &["Single session", "1 month", "3 months"];
pub const COURSE_COMPLETION: &[&str] = &["Optional", "Recommended", "Mandatory"];
pub const INTERNSHIP_HISTORY: &[&str] = &["None", "0-6 months", "6-12 months", "1+ year"];

/// Cap on mentor sub-skills.
pub const MAX_SUB_SKILLS: usize = 7;
