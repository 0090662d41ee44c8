// System prompt for the portfolio chat assistant.
// Built from the static content data on every send; never cached.

use crate::content::{ExperienceItem, Portfolio, Project, SkillCategory};

/// Formats the portfolio into the assistant's system prompt.
///
/// Section order is fixed: identity, contact, education, experience, skills,
/// projects. Only absent contact fields change the shape of the output.
pub fn build_system_prompt(portfolio: &Portfolio) -> String {
    let personal = &portfolio.personal;
    let full_name = personal.name.full();
    let first_name = personal.name.first;

    let mut lines = vec![
        format!(
            "You are a friendly AI assistant on {full_name}'s portfolio website. \
             Answer questions about {first_name}'s background, skills, experience, and projects \
             based on the following information. Keep answers concise, professional, and helpful. \
             If asked something unrelated to {first_name}'s portfolio, politely redirect to \
             portfolio-related topics."
        ),
        String::new(),
        format!("**Name:** {full_name}"),
        format!("**Title:** {}", personal.title),
        format!("**Bio:** {}", personal.bio.short),
        format!("**Email:** {}", personal.contact.email),
    ];

    if let Some(phone) = personal.contact.phone {
        lines.push(format!("**Phone:** {phone}"));
    }
    lines.push(format!("**Location:** {}", personal.contact.location));
    lines.push(format!("**GitHub:** {}", personal.contact.github));
    if let Some(linkedin) = personal.contact.linkedin {
        lines.push(format!("**LinkedIn:** {linkedin}"));
    }

    let education = &personal.education;
    lines.push(format!(
        "**Education:** {} from {} ({})",
        education.degree, education.institution, education.year
    ));

    lines.push(String::new());
    lines.push("**Experience:**".to_string());
    lines.push(
        portfolio
            .experience
            .iter()
            .map(format_experience)
            .collect::<Vec<_>>()
            .join("\n\n"),
    );

    lines.push(String::new());
    lines.push("**Skills:**".to_string());
    lines.extend(portfolio.skills.iter().map(format_skill_category));

    lines.push(String::new());
    lines.push("**Projects:**".to_string());
    lines.extend(portfolio.projects.iter().map(format_project));

    lines.join("\n")
}

fn format_experience(exp: &ExperienceItem) -> String {
    let achievements = exp
        .achievements
        .iter()
        .map(|a| format!("  - {a}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{} at {} ({}), {}:\n{}",
        exp.title, exp.company, exp.location, exp.period, achievements
    )
}

fn format_skill_category(category: &SkillCategory) -> String {
    format!("{}: {}", category.title, category.skills.join(", "))
}

fn format_project(project: &Project) -> String {
    format!(
        "{} [{}]: {}",
        project.title,
        project.tags.join(", "),
        project.summary()
    )
}
