//! Static page content: the profile record and navigation entries.
//!
//! The page is a fixed sequence of five content regions. The profile carries
//! every string rendered into them and can be overridden from a TOML file;
//! the compiled-in default keeps the binary runnable with no files at all.

use serde::Deserialize;
use std::path::Path;

/// Region identifiers, in page order. Services renders above skills even
/// though the navigation bar lists skills first; the page has always been
/// laid out that way.
pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const SERVICES: &str = "services";
pub const SKILLS: &str = "skills";
pub const CONTACT: &str = "contact";

/// All region ids in page order.
pub fn region_ids() -> [&'static str; 5] {
    [HOME, ABOUT, SERVICES, SKILLS, CONTACT]
}

/// A navigation entry: a label shown in the nav bar and the id of the region
/// it targets. The sequence is fixed at startup and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub target_id: String,
}

impl NavEntry {
    fn new(label: &str, target_id: &str) -> Self {
        Self {
            label: label.to_string(),
            target_id: target_id.to_string(),
        }
    }
}

/// The navigation bar entries, in display order.
pub fn nav_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Home", HOME),
        NavEntry::new("About", ABOUT),
        NavEntry::new("Skills", SKILLS),
        NavEntry::new("Services", SERVICES),
        NavEntry::new("Contact", CONTACT),
    ]
}

/// Check that every nav entry targets exactly one known region. A dangling
/// target would make navigation and highlighting for that entry a silent
/// no-op, so it is rejected at startup instead.
pub fn validate_nav_targets(entries: &[NavEntry], regions: &[&str]) -> Result<(), ProfileError> {
    for entry in entries {
        let matches = regions.iter().filter(|r| **r == entry.target_id).count();
        if matches != 1 {
            return Err(ProfileError::DanglingNavTarget {
                label: entry.label.clone(),
                target: entry.target_id.clone(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Owner name, shown in the nav bar and the hero region.
    pub name: String,
    /// Short hero greeting line.
    pub greeting: String,
    /// Lead-in for the typed line ("And I am a ...").
    pub tagline_prefix: String,
    /// Phrases cycled by the typing effect, visited in order.
    pub phrases: Vec<String>,
    /// One-paragraph hero summary.
    pub summary: String,
    /// About-region paragraphs.
    pub about: Vec<String>,
    pub skills: Vec<Skill>,
    pub services: Vec<Service>,
    pub contact: ContactDetails,
    /// Exactly four social links.
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactDetails {
    pub pitch: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Facebook,
    WhatsApp,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Facebook => "Facebook",
            SocialKind::WhatsApp => "WhatsApp",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid profile value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("Nav entry '{label}' targets unknown region '{target}'")]
    DanglingNavTarget { label: String, target: String },
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let contents = std::fs::read_to_string(path)?;
        let profile: Profile = toml::from_str(&contents)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::InvalidValue {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.phrases.is_empty() {
            return Err(ProfileError::InvalidValue {
                field: "phrases",
                reason: "at least one phrase is required".to_string(),
            });
        }
        if self.phrases.iter().any(|p| p.trim().is_empty()) {
            return Err(ProfileError::InvalidValue {
                field: "phrases",
                reason: "phrases must not be empty".to_string(),
            });
        }
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ProfileError::InvalidValue {
                field: "skills",
                reason: format!("level for '{}' exceeds 100", skill.name),
            });
        }
        if self.social.len() != 4 {
            return Err(ProfileError::InvalidValue {
                field: "social",
                reason: format!("exactly four links are expected, got {}", self.social.len()),
            });
        }
        Ok(())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Ayaan Mirza".to_string(),
            greeting: "Hello, it's me".to_string(),
            tagline_prefix: "And I am a ".to_string(),
            phrases: vec![
                "Full Stack Developer".to_string(),
                "Frontend Developer".to_string(),
                "Backend Developer".to_string(),
                "MERN Developer".to_string(),
            ],
            summary: "I am a Full Stack Developer passionate about building dynamic web \
                      applications. I focus on clean UI, strong UX, and reliable backends."
                .to_string(),
            about: vec![
                "I am a passionate Full Stack Developer with expertise in building modern, \
                 responsive applications using the latest technologies."
                    .to_string(),
                "I specialize in creating seamless user experiences and robust server-side \
                 architectures, turning ideas into functional, scalable applications."
                    .to_string(),
            ],
            skills: vec![
                Skill { name: "HTML".to_string(), level: 90 },
                Skill { name: "CSS".to_string(), level: 85 },
                Skill { name: "JavaScript".to_string(), level: 80 },
                Skill { name: "React".to_string(), level: 75 },
                Skill { name: "Next.js".to_string(), level: 70 },
                Skill { name: "Node.js".to_string(), level: 75 },
                Skill { name: "Python".to_string(), level: 70 },
                Skill { name: "MongoDB".to_string(), level: 65 },
                Skill { name: "Git".to_string(), level: 80 },
            ],
            services: vec![
                Service {
                    title: "Full Stack Development".to_string(),
                    desc: "Building responsive, fast, and scalable applications tailored to \
                           your needs."
                        .to_string(),
                },
                Service {
                    title: "Frontend Development".to_string(),
                    desc: "Crafting intuitive and user-friendly interfaces with modern tools \
                           and practices."
                        .to_string(),
                },
                Service {
                    title: "Backend Development".to_string(),
                    desc: "Creating robust, secure, and scalable server-side applications and \
                           APIs."
                        .to_string(),
                },
                Service {
                    title: "Version Control".to_string(),
                    desc: "Managing repositories, version control, and collaborative \
                           development."
                        .to_string(),
                },
            ],
            contact: ContactDetails {
                pitch: "Feel free to reach out for collaborations or just a friendly hello."
                    .to_string(),
                email: "hello@ayaanmirza.dev".to_string(),
                phone: "+92 300 0000000".to_string(),
                location: "Lahore, Pakistan".to_string(),
            },
            social: vec![
                SocialLink {
                    kind: SocialKind::GitHub,
                    url: "https://github.com/ayaanmz".to_string(),
                },
                SocialLink {
                    kind: SocialKind::LinkedIn,
                    url: "https://www.linkedin.com/in/ayaan-mirza".to_string(),
                },
                SocialLink {
                    kind: SocialKind::Facebook,
                    url: "https://www.facebook.com/ayaanmz".to_string(),
                },
                SocialLink {
                    kind: SocialKind::WhatsApp,
                    url: "https://wa.me/923000000000".to_string(),
                },
            ],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
