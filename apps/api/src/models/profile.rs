#![allow(dead_code)]

//! Résumé input data. Owned by the caller and only ever read by the renderer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Returns the trimmed text, or `None` when it is empty or whitespace.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// [`non_blank`] over an optional field.
pub fn non_blank_opt(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(non_blank)
}

/// Reads an explicit JSON `null` the same way as a missing key. Form editors
/// send `null` for cleared fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One complete résumé. `personal_info` and `visibility` are required; every list
/// defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub personal_info: PersonalInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<NamedItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<NamedItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<NamedItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_sections: Vec<CustomSection>,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Image reference handed straight to the host surface (URL or data URL).
    pub photo: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_fields: Vec<CustomField>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Shared shape of skills, languages and interests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub proficiency: Option<Proficiency>,
}

/// Either a free-form label ("Fluent", "Expert") or a numeric level out of
/// [`Proficiency::MAX_LEVEL`]. Any other JSON value is kept but never shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Proficiency {
    Level(f64),
    Label(String),
    Other(Value),
}

impl Proficiency {
    pub const MAX_LEVEL: f64 = 5.0;

    /// `None` for blank labels, non-positive levels and unrecognized values so
    /// they are omitted like any other empty field.
    pub fn display(&self) -> Option<String> {
        match self {
            Proficiency::Level(level) if level.is_finite() && *level > 0.0 => {
                Some(self.to_string())
            }
            Proficiency::Label(label) => non_blank(label).map(str::to_string),
            _ => None,
        }
    }
}

fn format_level(level: f64) -> String {
    if level.fract() == 0.0 {
        format!("{level:.0}")
    } else {
        format!("{level:.1}")
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proficiency::Level(level) => write!(
                f,
                "{}/{}",
                format_level(level.clamp(0.0, Self::MAX_LEVEL)),
                format_level(Self::MAX_LEVEL)
            ),
            Proficiency::Label(label) => f.write_str(label.trim()),
            Proficiency::Other(_) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<CustomItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Sections whose rendering is switched by a visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Skills,
    Languages,
    Interests,
    Experience,
    Education,
    CustomSections,
}

impl SectionKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionKey::Skills => "skills",
            SectionKey::Languages => "languages",
            SectionKey::Interests => "interests",
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::CustomSections => "customSections",
        }
    }
}

/// Section key → visible. A key that is absent or `null` counts as hidden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Visibility(BTreeMap<String, Option<bool>>);

impl Visibility {
    pub fn is_visible(&self, key: SectionKey) -> bool {
        self.0.get(key.as_str()).copied().flatten().unwrap_or(false)
    }

    pub fn set(&mut self, key: SectionKey, visible: bool) {
        self.0.insert(key.as_str().to_string(), Some(visible));
    }

    /// Every built-in section switched on.
    pub fn all() -> Self {
        let mut visibility = Visibility::default();
        for key in [
            SectionKey::Skills,
            SectionKey::Languages,
            SectionKey::Interests,
            SectionKey::Experience,
            SectionKey::Education,
            SectionKey::CustomSections,
        ] {
            visibility.set(key, true);
        }
        visibility
    }
}
