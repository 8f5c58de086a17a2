#![forbid(unsafe_code)]

//! Team roster: the display records shown by the team view.
//!
//! The controller is generic over its items and never looks inside them;
//! this module only provides the record type the host renders and a
//! loader for it.

#[cfg(feature = "config-files")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optional contact links for a team member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SocialLinks {
    /// GitHub profile URL.
    pub github: Option<String>,
    /// LinkedIn profile URL.
    pub linkedin: Option<String>,
    /// `mailto:` URL.
    pub email: Option<String>,
}

/// Kind of a social link, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialKind {
    /// GitHub profile.
    GitHub,
    /// LinkedIn profile.
    LinkedIn,
    /// Email contact.
    Email,
}

impl SocialKind {
    /// Accessible label for the link button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub Profile",
            Self::LinkedIn => "LinkedIn Profile",
            Self::Email => "Email Contact",
        }
    }
}

impl SocialLinks {
    /// Present links in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SocialKind, &str)> {
        [
            (SocialKind::GitHub, self.github.as_deref()),
            (SocialKind::LinkedIn, self.linkedin.as_deref()),
            (SocialKind::Email, self.email.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.map(|url| (kind, url)))
    }

    /// Whether no link is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// One card in the team carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TeamMember {
    /// Display name.
    pub name: String,
    /// Role or title.
    pub role: String,
    /// Image path or URL.
    pub image: String,
    /// Short biography.
    pub bio: String,
    /// Contact links.
    pub social: SocialLinks,
}

impl TeamMember {
    /// Create a member with a name and role.
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            ..Self::default()
        }
    }

    /// Set the image path.
    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the biography.
    #[must_use]
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Set the contact links.
    #[must_use]
    pub fn social(mut self, social: SocialLinks) -> Self {
        self.social = social;
        self
    }
}

/// A non-empty list of team members.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Roster {
    members: Vec<TeamMember>,
}

#[cfg(feature = "config-files")]
#[derive(Deserialize)]
struct RosterFile {
    members: Vec<TeamMember>,
}

impl Roster {
    /// Build a roster, rejecting an empty member list.
    pub fn new(members: Vec<TeamMember>) -> Result<Self, RosterError> {
        if members.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { members })
    }

    /// Placeholder roster with the four roles of the team view.
    #[must_use]
    pub fn builtin() -> Self {
        let member = |name: &str, role: &str, slug: &str, bio: &str| {
            TeamMember::new(name, role)
                .image(format!("public/{slug}.jpg"))
                .bio(bio)
                .social(SocialLinks {
                    github: Some(format!("https://github.com/{slug}")),
                    linkedin: Some(format!("https://www.linkedin.com/in/{slug}/")),
                    email: Some(format!("mailto:{slug}@example.org")),
                })
        };
        Self {
            members: vec![
                member(
                    "Member One",
                    "Lead AI Researcher",
                    "member-one",
                    "Deep learning and medical image analysis for early detection.",
                ),
                member(
                    "Member Two",
                    "UI Designer and Backend Developer",
                    "member-two",
                    "Builds the web client and the prediction service.",
                ),
                member(
                    "Member Three",
                    "Web Development & Machine Learning",
                    "member-three",
                    "Explores AI-driven tooling for the classifier front end.",
                ),
                member(
                    "Member Four",
                    "Database Manager",
                    "member-four",
                    "Keeps the data systems efficient and secure.",
                ),
            ],
        }
    }

    /// Members in display order.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Number of members (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster has no members. Never true once constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Consume the roster, returning the members.
    #[must_use]
    pub fn into_members(self) -> Vec<TeamMember> {
        self.members
    }

    /// Load from a TOML string with a `[[members]]` array.
    #[cfg(feature = "config-files")]
    pub fn from_toml_str(s: &str) -> Result<Self, RosterError> {
        let file: RosterFile = toml::from_str(s).map_err(RosterError::Toml)?;
        Self::new(file.members)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-files")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RosterError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string with a `members` array.
    #[cfg(feature = "config-files")]
    pub fn from_json_str(s: &str) -> Result<Self, RosterError> {
        let file: RosterFile = serde_json::from_str(s).map_err(RosterError::Json)?;
        Self::new(file.members)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-files")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RosterError::Io)?;
        Self::from_json_str(&content)
    }
}

/// Errors that can occur when building or loading a roster.
#[derive(Debug)]
pub enum RosterError {
    /// The roster had no members.
    Empty,
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config-files")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config-files")]
    Json(serde_json::Error),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "roster has no members"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config-files")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config-files")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io(e) => Some(e),
            #[cfg(feature = "config-files")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config-files")]
            Self::Json(e) => Some(e),
        }
    }
}
