// src/profile.rs
//! The portfolio owner's profile and the instruction preamble rendered from it.

const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Default)]
pub struct Education {
    pub school: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub website: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileContext {
    pub name: String,
    pub full_name: String,
    pub role: String,
    pub location: String,
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub projects: Vec<String>,
    pub interests: Vec<String>,
    pub contact: Contact,
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { PLACEHOLDER } else { value }
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return format!("- {PLACEHOLDER}");
    }
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn education_list(entries: &[Education]) -> String {
    if entries.is_empty() {
        return format!("- {PLACEHOLDER} ({PLACEHOLDER})\n  {PLACEHOLDER}");
    }
    entries
        .iter()
        .map(|e| {
            format!(
                "- {} ({})\n  {}",
                or_dash(&e.school),
                or_dash(&e.period),
                or_dash(&e.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl ProfileContext {
    /// The profile shipped with the service. Intentionally blank; every field
    /// renders as `-` until someone fills it in.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn render_preamble(&self) -> String {
        let c = &self.contact;
        format!(
            "You are a professional AI assistant representing a user's portfolio.\n\
             \n\
             ABOUT ME:\n\
             - Name: {full_name}\n\
             - Nickname: {name}\n\
             - Role: {role}\n\
             - Location: {location}\n\
             \n\
             TECHNICAL SKILLS:\n\
             {skills}\n\
             \n\
             EDUCATION:\n\
             {education}\n\
             \n\
             PROJECTS:\n\
             {projects}\n\
             \n\
             INTERESTS:\n\
             {interests}\n\
             \n\
             CONTACT:\n\
             - Email: {email}\n\
             - Phone: {phone}\n\
             - Website: {website}\n\
             - GitHub: {github}\n\
             - LinkedIn: {linkedin}\n\
             \n\
             INSTRUCTIONS:\n\
             1. Answer in Thai unless explicitly asked to use English.\n\
             2. Be concise, friendly and professional.\n\
             3. Use the data above when appropriate.\n\
             4. If unsure, suggest contacting the user directly.\n",
            full_name = or_dash(&self.full_name),
            name = or_dash(&self.name),
            role = or_dash(&self.role),
            location = or_dash(&self.location),
            skills = bullet_list(&self.skills),
            education = education_list(&self.education),
            projects = bullet_list(&self.projects),
            interests = bullet_list(&self.interests),
            email = or_dash(&c.email),
            phone = or_dash(&c.phone),
            website = or_dash(&c.website),
            github = or_dash(&c.github),
            linkedin = or_dash(&c.linkedin),
        )
    }
}
