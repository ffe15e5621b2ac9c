//! Static content records for the portfolio sections.
//!
//! These are build-time constants; the section components only select
//! presentation for them. Reveal staggering is carried per record as a
//! `delay_ms` applied as a `transition-delay`.

/// One entry in the skills grid and proficiency graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillEntry {
    pub name: &'static str,
    /// Remixicon class, e.g. `ri-html5-fill`.
    pub icon: &'static str,
    /// Tailwind text color token for the icon.
    pub color: &'static str,
    pub delay_ms: u32,
    /// Proficiency, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub years: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CertificationEntry {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub valid_until: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub delay_ms: u32,
}

pub static SKILLS: [SkillEntry; 8] = [
    SkillEntry {
        name: "HTML",
        icon: "ri-html5-fill",
        color: "text-orange-500",
        delay_ms: 100,
        level: 90,
    },
    SkillEntry {
        name: "CSS",
        icon: "ri-css3-fill",
        color: "text-blue-500",
        delay_ms: 200,
        level: 85,
    },
    SkillEntry {
        name: "JavaScript",
        icon: "ri-javascript-fill",
        color: "text-yellow-500",
        delay_ms: 300,
        level: 80,
    },
    SkillEntry {
        name: "React.js",
        icon: "ri-reactjs-fill",
        color: "text-cyan-500",
        delay_ms: 400,
        level: 75,
    },
    SkillEntry {
        name: "Power BI",
        icon: "ri-bar-chart-box-fill",
        color: "text-indigo-600",
        delay_ms: 500,
        level: 70,
    },
    SkillEntry {
        name: "GSAP",
        icon: "ri-animation-fill",
        color: "text-green-500",
        delay_ms: 600,
        level: 65,
    },
    SkillEntry {
        name: "Responsive Design",
        icon: "ri-layout-responsive-fill",
        color: "text-pink-500",
        delay_ms: 700,
        level: 85,
    },
    SkillEntry {
        name: "Problem Solving",
        icon: "ri-puzzle-fill",
        color: "text-purple-500",
        delay_ms: 800,
        level: 80,
    },
];

pub static EDUCATION: [EducationEntry; 2] = [
    EducationEntry {
        institution: "CCS University",
        degree: "B.Sc. in Computer Science",
        years: "2023-2027",
        logo: "https://media.licdn.com/dms/image/v2/C560BAQE8Muk3BIhxVw/company-logo_400_400/company-logo_400_400/0/1631342697054",
        description: "Pursuing a comprehensive computer science education with a focus on software development and programming fundamentals.",
        delay_ms: 200,
    },
    EducationEntry {
        institution: "Gagan Public School",
        degree: "Science (Physics, Chemistry, Biology)",
        years: "2019-2023",
        logo: "https://media.licdn.com/dms/image/v2/C4E0BAQEyPqLuvZcgmw/company-logo_400_400/company-logo_400_400/0/1630613464939/ghpsalumnus_logo",
        description: "Completed science-focused secondary education, building a strong foundation in analytical thinking and problem-solving.",
        delay_ms: 400,
    },
];

pub static CERTIFICATIONS: [CertificationEntry; 2] = [
    CertificationEntry {
        name: "Data Structures and Algorithms",
        issuer: "Simplilearn",
        date: "Issued 2024",
        valid_until: "Valid until 2034",
        logo: "https://media.licdn.com/dms/image/v2/C510BAQEvNU0EYy6wUw/company-logo_400_400/company-logo_400_400/0/1631319527790",
        description: "Comprehensive certification covering fundamental data structures and algorithm design principles.",
        delay_ms: 200,
    },
    CertificationEntry {
        name: "JavaScript Certification Test",
        issuer: "Complete Coding by Prashant Sir",
        date: "Issued 2024",
        valid_until: "Valid until 2030",
        logo: "https://media.licdn.com/dms/image/v2/D4D0BAQGg45ydFaEvpw/company-logo_400_400/company-logo_400_400/0/1697701381332",
        description: "Advanced JavaScript certification covering modern practices, frameworks, and optimization techniques.",
        delay_ms: 400,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_in_range() {
        for skill in &SKILLS {
            assert!(skill.level <= 100, "{} level out of range", skill.name);
            assert!(skill.icon.starts_with("ri-"), "{} icon class", skill.name);
            assert!(!skill.color.is_empty());
        }
    }

    #[test]
    fn stagger_delays_increase() {
        for table in [
            SKILLS.iter().map(|s| s.delay_ms).collect::<Vec<_>>(),
            EDUCATION.iter().map(|e| e.delay_ms).collect::<Vec<_>>(),
            CERTIFICATIONS.iter().map(|c| c.delay_ms).collect::<Vec<_>>(),
        ] {
            assert!(table.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn records_are_complete() {
        for entry in &EDUCATION {
            assert!(!entry.institution.is_empty());
            assert!(!entry.degree.is_empty());
            assert!(entry.logo.starts_with("https://"));
        }
        for cert in &CERTIFICATIONS {
            assert!(!cert.name.is_empty());
            assert!(!cert.issuer.is_empty());
            assert!(cert.logo.starts_with("https://"));
        }
    }
}
