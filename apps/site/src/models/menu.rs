use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sidebar navigation choice. Exactly one is active per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    #[default]
    Home,
    Projects,
    Contact,
    Testimonials,
    Education,
}

impl MenuChoice {
    /// All choices in sidebar order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Home,
        MenuChoice::Projects,
        MenuChoice::Contact,
        MenuChoice::Testimonials,
        MenuChoice::Education,
    ];

    /// URL slug used in `?page=` and the JSON API.
    pub fn slug(self) -> &'static str {
        match self {
            MenuChoice::Home => "home",
            MenuChoice::Projects => "projects",
            MenuChoice::Contact => "contact",
            MenuChoice::Testimonials => "testimonials",
            MenuChoice::Education => "education",
        }
    }

    /// Label shown next to the sidebar radio.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Home => "Home",
            MenuChoice::Projects => "Projects",
            MenuChoice::Contact => "Contact",
            MenuChoice::Testimonials => "Testimonials",
            MenuChoice::Education => "Education",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page '{0}'")]
pub struct UnknownChoice(pub String);

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}
