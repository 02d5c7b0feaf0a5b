//! Fixed catalogs of code themes, backgrounds, and languages.
//!
//! Every catalog is keyed by a closed enumeration. String keys from settings files or the
//! command line are resolved with [std::str::FromStr], which rejects unknown keys instead of
//! falling back to a default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Colors of a code window.
#[derive(Debug, PartialEq, Eq)]
pub struct CodeTheme {
    pub name: &'static str,
    pub value: &'static str,
    pub background: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    Amoled,
    Dracula,
    GithubLight,
    Monokai,
    OneDark,
    TokyoNight,
}

impl ThemeName {
    pub const ALL: [ThemeName; 6] = [
        ThemeName::Amoled,
        ThemeName::Dracula,
        ThemeName::GithubLight,
        ThemeName::Monokai,
        ThemeName::OneDark,
        ThemeName::TokyoNight,
    ];

    pub fn theme(&self) -> &'static CodeTheme {
        match self {
            ThemeName::Amoled => &CodeTheme {
                name: "AMOLED",
                value: "amoled",
                background: "#000000",
                color: "#ffffff",
            },
            ThemeName::Dracula => &CodeTheme {
                name: "Dracula",
                value: "dracula",
                background: "#282a36",
                color: "#f8f8f2",
            },
            ThemeName::GithubLight => &CodeTheme {
                name: "GitHub Light",
                value: "github-light",
                background: "#ffffff",
                color: "#24292f",
            },
            ThemeName::Monokai => &CodeTheme {
                name: "Monokai",
                value: "monokai",
                background: "#272822",
                color: "#f8f8f2",
            },
            ThemeName::OneDark => &CodeTheme {
                name: "One Dark",
                value: "one-dark",
                background: "#282c34",
                color: "#abb2bf",
            },
            ThemeName::TokyoNight => &CodeTheme {
                name: "Tokyo Night",
                value: "tokyo-night",
                background: "#1a1b26",
                color: "#a9b1d6",
            },
        }
    }
}

impl FromStr for ThemeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<ThemeName, Error> {
        ThemeName::ALL
            .into_iter()
            .find(|name| name.theme().value == s)
            .ok_or_else(|| Error::UnknownTheme(s.to_string()))
    }
}

/// A backdrop gradient behind the code window.
#[derive(Debug, PartialEq, Eq)]
pub struct Background {
    pub name: &'static str,
    pub value: &'static str,
    pub gradient: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundName {
    Purple,
    Blue,
    Green,
    Orange,
    Dark,
    Light,
}

impl BackgroundName {
    pub const ALL: [BackgroundName; 6] = [
        BackgroundName::Purple,
        BackgroundName::Blue,
        BackgroundName::Green,
        BackgroundName::Orange,
        BackgroundName::Dark,
        BackgroundName::Light,
    ];

    pub fn background(&self) -> &'static Background {
        match self {
            BackgroundName::Purple => &Background {
                name: "Purple Gradient",
                value: "purple",
                gradient: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            },
            BackgroundName::Blue => &Background {
                name: "Blue Gradient",
                value: "blue",
                gradient: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
            },
            BackgroundName::Green => &Background {
                name: "Green Gradient",
                value: "green",
                gradient: "linear-gradient(135deg, #11998e 0%, #38ef7d 100%)",
            },
            BackgroundName::Orange => &Background {
                name: "Orange Gradient",
                value: "orange",
                gradient: "linear-gradient(135deg, #FF4B1F 0%, #FF9068 100%)",
            },
            BackgroundName::Dark => &Background {
                name: "Dark Gradient",
                value: "dark",
                gradient: "linear-gradient(135deg, #2c3e50 0%, #34495e 100%)",
            },
            BackgroundName::Light => &Background {
                name: "Light Gradient",
                value: "light",
                gradient: "linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%)",
            },
        }
    }
}

impl FromStr for BackgroundName {
    type Err = Error;

    fn from_str(s: &str) -> Result<BackgroundName, Error> {
        BackgroundName::ALL
            .into_iter()
            .find(|name| name.background().value == s)
            .ok_or_else(|| Error::UnknownBackground(s.to_string()))
    }
}

/// The language label shown in the title bar. It has no effect on tokenizing, which is the same
/// for every language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Python,
    Java,
    Cpp,
    Html,
    Css,
    Json,
    Xml,
    Bash,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::Javascript,
        Language::Typescript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Html,
        Language::Css,
        Language::Json,
        Language::Xml,
        Language::Bash,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Xml => "xml",
            Language::Bash => "bash",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Javascript => "JavaScript",
            Language::Typescript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Xml => "XML",
            Language::Bash => "Bash",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Language, Error> {
        Language::ALL
            .into_iter()
            .find(|language| language.value() == s)
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}
