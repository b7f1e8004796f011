//! Section gating.
//!
//! A section renders only when its visibility flag is on and it has something
//! to show. The decision is made once here; templates iterate the plan and
//! never consult `visibility` themselves.

use serde::Serialize;

use crate::models::profile::{
    non_blank, non_blank_opt, CustomSection, Education, Experience, NamedItem, ProfileDocument,
    SectionKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Custom,
}

impl ContactKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContactKind::Email => "email",
            ContactKind::Phone => "phone",
            ContactKind::Location => "location",
            ContactKind::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactEntry<'a> {
    pub kind: ContactKind,
    /// Identity for custom fields; built-in entries use their kind.
    pub id: &'a str,
    pub label: &'a str,
    pub value: &'a str,
    pub href: Option<String>,
}

/// What a single render will show, borrowed from the document.
#[derive(Debug, Clone)]
pub struct LayoutPlan<'a> {
    pub full_name: &'a str,
    pub title: Option<&'a str>,
    pub photo: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub contact: Vec<ContactEntry<'a>>,
    pub skills: &'a [NamedItem],
    pub languages: &'a [NamedItem],
    pub interests: &'a [NamedItem],
    pub experience: &'a [Experience],
    pub education: &'a [Education],
    pub custom_sections: Vec<&'a CustomSection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Sidebar,
    Main,
}

/// One rendered section, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineSection {
    pub region: Region,
    pub key: String,
    pub heading: String,
    pub item_count: usize,
}

pub const ABOUT_HEADING: &str = "About Me";
pub const CONTACT_HEADING: &str = "Contact";
pub const SKILLS_HEADING: &str = "Skills";
pub const LANGUAGES_HEADING: &str = "Languages";
pub const INTERESTS_HEADING: &str = "Interests";
pub const EXPERIENCE_HEADING: &str = "Experience";
pub const EDUCATION_HEADING: &str = "Education";

fn gated<'a, T>(doc: &ProfileDocument, key: SectionKey, items: &'a [T]) -> &'a [T] {
    if doc.visibility.is_visible(key) {
        items
    } else {
        &[]
    }
}

fn contact_entries(doc: &ProfileDocument) -> Vec<ContactEntry<'_>> {
    let info = &doc.personal_info;
    let mut entries = Vec::new();

    if let Some(email) = non_blank_opt(&info.email) {
        entries.push(ContactEntry {
            kind: ContactKind::Email,
            id: ContactKind::Email.as_str(),
            label: "Email",
            value: email,
            href: Some(format!("mailto:{email}")),
        });
    }
    if let Some(phone) = non_blank_opt(&info.phone) {
        let dial: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        entries.push(ContactEntry {
            kind: ContactKind::Phone,
            id: ContactKind::Phone.as_str(),
            label: "Phone",
            value: phone,
            href: (!dial.is_empty()).then(|| format!("tel:{dial}")),
        });
    }
    if let Some(location) = non_blank_opt(&info.location) {
        entries.push(ContactEntry {
            kind: ContactKind::Location,
            id: ContactKind::Location.as_str(),
            label: "Location",
            value: location,
            href: None,
        });
    }

    entries.extend(info.custom_fields.iter().filter_map(|field| {
        non_blank(&field.value).map(|value| ContactEntry {
            kind: ContactKind::Custom,
            id: &field.id,
            label: field.label.trim(),
            value,
            href: None,
        })
    }));

    entries
}

impl<'a> LayoutPlan<'a> {
    pub fn for_document(doc: &'a ProfileDocument) -> Self {
        let info = &doc.personal_info;

        let custom_sections = if doc.visibility.is_visible(SectionKey::CustomSections) {
            doc.custom_sections
                .iter()
                .filter(|section| !section.items.is_empty())
                .collect()
        } else {
            Vec::new()
        };

        LayoutPlan {
            full_name: info.full_name.trim(),
            title: non_blank(&info.title),
            photo: non_blank_opt(&info.photo),
            summary: non_blank(&info.summary),
            contact: contact_entries(doc),
            skills: gated(doc, SectionKey::Skills, &doc.skills),
            languages: gated(doc, SectionKey::Languages, &doc.languages),
            interests: gated(doc, SectionKey::Interests, &doc.interests),
            experience: gated(doc, SectionKey::Experience, &doc.experience),
            education: gated(doc, SectionKey::Education, &doc.education),
            custom_sections,
        }
    }

    /// Sections that will render, sidebar first, each in display order.
    pub fn outline(&self) -> Vec<OutlineSection> {
        let mut sections = Vec::new();
        let mut push = |region, key: &str, heading: &str, item_count: usize| {
            if item_count > 0 {
                sections.push(OutlineSection {
                    region,
                    key: key.to_string(),
                    heading: heading.to_string(),
                    item_count,
                });
            }
        };

        push(
            Region::Sidebar,
            "summary",
            ABOUT_HEADING,
            usize::from(self.summary.is_some()),
        );
        push(Region::Sidebar, "contact", CONTACT_HEADING, self.contact.len());
        push(
            Region::Sidebar,
            SectionKey::Skills.as_str(),
            SKILLS_HEADING,
            self.skills.len(),
        );
        push(
            Region::Sidebar,
            SectionKey::Languages.as_str(),
            LANGUAGES_HEADING,
            self.languages.len(),
        );
        push(
            Region::Sidebar,
            SectionKey::Interests.as_str(),
            INTERESTS_HEADING,
            self.interests.len(),
        );
        push(
            Region::Main,
            SectionKey::Experience.as_str(),
            EXPERIENCE_HEADING,
            self.experience.len(),
        );
        push(
            Region::Main,
            SectionKey::Education.as_str(),
            EDUCATION_HEADING,
            self.education.len(),
        );
        for section in &self.custom_sections {
            push(
                Region::Main,
                &section.id,
                section.title.trim(),
                section.items.len(),
            );
        }

        sections
    }
}
