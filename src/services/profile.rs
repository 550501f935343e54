//! Portfolio owner profile and the system prompt rendered from it.
//!
//! The profile is static site content. Only the owner's name is
//! configurable; everything else mirrors the resume section of the page.

use std::fmt::{self, Write as _};

pub struct Role {
    pub title: &'static str,
    pub org: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct SkillGroup {
    pub area: &'static str,
    /// `(skill, proficiency percent)`
    pub skills: &'static [(&'static str, u8)],
}

pub struct Profile {
    pub headline: &'static str,
    pub years: u8,
    pub summary: &'static str,
    pub experience: &'static [Role],
    pub education: &'static [Role],
    pub skills: &'static [SkillGroup],
    pub certifications: &'static [(&'static str, u16)],
    pub technologies: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    headline: "Data Engineer & DevOps Specialist",
    years: 5,
    summary: "transforms complex data challenges into efficient, scalable solutions.",
    experience: &[
        Role {
            title: "Senior Data Engineer",
            org: "TechCorp Inc.",
            period: "2020-Present",
            highlights: &[
                "Led the design and implementation of scalable data pipelines processing 5TB+ daily.",
                "Reduced processing time by 40% through optimization and parallel processing techniques.",
            ],
        },
        Role {
            title: "DevOps Engineer",
            org: "InnoSystems LLC",
            period: "2018-2020",
            highlights: &[
                "Implemented CI/CD pipelines reducing deployment time by 60%.",
                "Managed Kubernetes clusters and containerized applications for improved scalability and resource utilization.",
            ],
        },
    ],
    education: &[
        Role {
            title: "M.S. in Computer Science",
            org: "Stanford University",
            period: "2016-2018",
            highlights: &[
                "Specialized in Data Systems and Cloud Computing.",
                "Thesis on distributed data processing systems.",
            ],
        },
        Role {
            title: "B.S. in Computer Engineering",
            org: "MIT",
            period: "2012-2016",
            highlights: &["Graduated with honors. Focus on software engineering and database systems."],
        },
    ],
    skills: &[
        SkillGroup {
            area: "Data Engineering",
            skills: &[
                ("SQL & NoSQL Databases", 90),
                ("ETL/ELT Pipelines", 85),
                ("Data Warehousing", 80),
                ("Big Data Technologies", 75),
                ("Data Modeling", 85),
            ],
        },
        SkillGroup {
            area: "DevOps",
            skills: &[
                ("CI/CD Pipelines", 90),
                ("Container Orchestration", 85),
                ("Infrastructure as Code", 80),
                ("Cloud Platforms", 85),
                ("Monitoring & Observability", 75),
            ],
        },
    ],
    certifications: &[
        ("AWS Certified Data Analytics Specialty", 2022),
        ("Certified Kubernetes Administrator", 2021),
        ("Google Professional Data Engineer", 2020),
        ("Azure DevOps Engineer Expert", 2019),
    ],
    technologies: &["Python", "SQL", "AWS", "Docker", "Kubernetes", "Git"],
};

/// First whitespace-separated word of the owner's name ("John" for "John Doe").
#[must_use]
pub fn first_name(owner: &str) -> &str {
    owner.split_whitespace().next().unwrap_or(owner)
}

/// Render the fixed system prompt that grounds every chat reply.
#[must_use]
pub fn build_system_prompt(owner: &str, profile: &Profile) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_prompt(&mut out, owner, profile);
    out
}

fn write_prompt(out: &mut String, owner: &str, profile: &Profile) -> fmt::Result {
    let first = first_name(owner);

    writeln!(out, "You are a helpful assistant for {owner}'s portfolio website.")?;
    writeln!(
        out,
        "Your role is to answer questions about {first}'s background, skills, and experience based on the following information:"
    )?;

    writeln!(out, "\nABOUT {}:", first.to_uppercase())?;
    writeln!(out, "{first} is a {} with over {} years of experience.", profile.headline, profile.years)?;
    writeln!(out, "{first} {}", profile.summary)?;

    writeln!(out, "\nWORK EXPERIENCE:")?;
    write_roles(out, profile.experience)?;

    writeln!(out, "\nEDUCATION:")?;
    write_roles(out, profile.education)?;

    writeln!(out, "\nSKILLS:")?;
    for group in profile.skills {
        let skills = group
            .skills
            .iter()
            .map(|(name, pct)| format!("{name} ({pct}%)"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "- {}: {skills}", group.area)?;
    }

    writeln!(out, "\nCERTIFICATIONS:")?;
    for (name, year) in profile.certifications {
        writeln!(out, "- {name} ({year})")?;
    }

    writeln!(out, "\nTECHNOLOGIES:")?;
    writeln!(out, "{}", profile.technologies.join(", "))?;

    writeln!(
        out,
        "\nKeep your answers focused on the details provided. Be helpful, concise, and professional. \
         If you don't know something, say so rather than making up information."
    )
}

fn write_roles(out: &mut String, roles: &[Role]) -> fmt::Result {
    for role in roles {
        writeln!(out, "- {} at {} ({})", role.title, role.org, role.period)?;
        for line in role.highlights {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
