//! Résumé templates.
//!
//! A template turns a [`ProfileDocument`] into markup. Templates are pure:
//! the same document always yields byte-identical output. `AppState` holds an
//! `Arc<dyn ResumeTemplate>`, so another layout can be swapped in at startup
//! without touching the handlers.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use tracing::debug;

use crate::models::profile::{non_blank, non_blank_opt, NamedItem, ProfileDocument};
use crate::render::dates::{format_date, format_range};
use crate::render::plan::{
    LayoutPlan, ABOUT_HEADING, CONTACT_HEADING, EDUCATION_HEADING, EXPERIENCE_HEADING,
    INTERESTS_HEADING, LANGUAGES_HEADING, SKILLS_HEADING,
};
use crate::render::text::{description_blocks, Block};

pub const PHOTO_PLACEHOLDER: &str = "Photo";

pub trait ResumeTemplate: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn render(&self, doc: &ProfileDocument) -> Markup;
}

/// Two-column layout: a sidebar with photo, summary, contact, skills, languages
/// and interests beside a main column with the header and the timeline sections.
pub struct SidebarTemplate;

impl ResumeTemplate for SidebarTemplate {
    fn name(&self) -> &'static str {
        "sidebar"
    }

    fn description(&self) -> &'static str {
        "Photo sidebar with contact and skills beside an experience-first main column"
    }

    fn render(&self, doc: &ProfileDocument) -> Markup {
        let plan = LayoutPlan::for_document(doc);
        debug!(
            "Rendering '{}' template: {} contact entries, {} custom sections",
            self.name(),
            plan.contact.len(),
            plan.custom_sections.len()
        );

        html! {
            div class="resume" data-template=(self.name()) {
                (sidebar(&plan))
                (main_column(&plan))
            }
        }
    }
}

fn sidebar(plan: &LayoutPlan<'_>) -> Markup {
    html! {
        aside class="sidebar" {
            div class="photo-frame" {
                @if let Some(src) = plan.photo {
                    img class="photo" src=(src) alt=(plan.full_name);
                } @else {
                    div class="photo-placeholder" { (PHOTO_PLACEHOLDER) }
                }
            }

            @if let Some(summary) = plan.summary {
                section class="sidebar-section" data-section="summary" {
                    h3 { (ABOUT_HEADING) }
                    p class="summary" { (summary) }
                }
            }

            @if !plan.contact.is_empty() {
                section class="sidebar-section" data-section="contact" {
                    h3 { (CONTACT_HEADING) }
                    ul class="contact" {
                        @for entry in &plan.contact {
                            li class="contact-item" data-kind=(entry.kind.as_str()) data-id=(entry.id) {
                                @if !entry.label.is_empty() {
                                    span class="contact-label" { (entry.label) }
                                }
                                @if let Some(href) = &entry.href {
                                    a class="contact-value" href=(href) { (entry.value) }
                                } @else {
                                    span class="contact-value" { (entry.value) }
                                }
                            }
                        }
                    }
                }
            }

            @if !plan.skills.is_empty() {
                section class="sidebar-section" data-section="skills" {
                    h3 { (SKILLS_HEADING) }
                    ul class="skills" {
                        @for skill in plan.skills {
                            (named_item(skill, "skill"))
                        }
                    }
                }
            }

            @if !plan.languages.is_empty() {
                section class="sidebar-section" data-section="languages" {
                    h3 { (LANGUAGES_HEADING) }
                    ul class="languages" {
                        @for language in plan.languages {
                            (named_item(language, "language"))
                        }
                    }
                }
            }

            @if !plan.interests.is_empty() {
                section class="sidebar-section" data-section="interests" {
                    h3 { (INTERESTS_HEADING) }
                    ul class="interests" {
                        @for interest in plan.interests {
                            li class="interest" data-id=(interest.id) { (interest.name.trim()) }
                        }
                    }
                }
            }
        }
    }
}

fn named_item(item: &NamedItem, class: &str) -> Markup {
    let proficiency = item.proficiency.as_ref().and_then(|p| p.display());
    html! {
        li class=(class) data-id=(item.id) {
            span class="item-name" { (item.name.trim()) }
            @if let Some(level) = proficiency {
                span class="item-proficiency" { (level) }
            }
        }
    }
}

fn main_column(plan: &LayoutPlan<'_>) -> Markup {
    html! {
        main class="main" {
            header class="header" {
                h1 class="full-name" { (plan.full_name) }
                @if let Some(title) = plan.title {
                    p class="job-title" { (title) }
                }
            }

            @if !plan.experience.is_empty() {
                section class="main-section" data-section="experience" {
                    h2 { (EXPERIENCE_HEADING) }
                    @for job in plan.experience {
                        (entry(
                            &job.id,
                            &job.title,
                            &org_line(&job.company, &job.location),
                            format_range(&job.start_date, &job.end_date, job.current),
                            &job.description,
                        ))
                    }
                }
            }

            @if !plan.education.is_empty() {
                section class="main-section" data-section="education" {
                    h2 { (EDUCATION_HEADING) }
                    @for school in plan.education {
                        (entry(
                            &school.id,
                            &school.degree,
                            &org_line(&school.school, &school.location),
                            format_range(&school.start_date, &school.end_date, school.current),
                            &school.description,
                        ))
                    }
                }
            }

            @for custom in &plan.custom_sections {
                section class="main-section custom-section" data-section="custom" data-id=(custom.id) {
                    @if let Some(title) = non_blank(&custom.title) {
                        h2 { (title) }
                    }
                    @for item in &custom.items {
                        (entry(
                            &item.id,
                            &item.title,
                            item.subtitle.trim(),
                            non_blank(&item.date).map(|d| format_date(d).into_owned()),
                            &item.description,
                        ))
                    }
                }
            }
        }
    }
}

/// "Company, City" with either half omitted when blank.
fn org_line(org: &str, location: &Option<String>) -> String {
    [non_blank(org), non_blank_opt(location)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}

fn entry(id: &str, title: &str, org: &str, dates: Option<String>, description: &str) -> Markup {
    let title = non_blank(title);
    let org = non_blank(org);
    html! {
        article class="entry" data-id=(id) {
            @if title.is_some() || dates.is_some() {
                div class="entry-head" {
                    @if let Some(title) = title {
                        h3 class="entry-title" { (title) }
                    }
                    @if let Some(dates) = &dates {
                        span class="entry-dates" { (dates) }
                    }
                }
            }
            @if let Some(org) = org {
                p class="entry-org" { (org) }
            }
            (description_markup(description))
        }
    }
}

fn description_markup(text: &str) -> Markup {
    let blocks = description_blocks(text);
    html! {
        @if !blocks.is_empty() {
            div class="entry-description" {
                @for block in &blocks {
                    @match block {
                        Block::Paragraph(line) => {
                            p { (line) }
                        }
                        Block::Bullets(items) => {
                            ul {
                                @for item in items {
                                    li { (item) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

const STYLESHEET: &str = "
*{box-sizing:border-box}
body{margin:0;font-family:'Inter',Arial,sans-serif;color:#1f2933;background:#fff}
.resume{display:flex;min-height:100vh;max-width:210mm;margin:0 auto}
.sidebar{width:34%;padding:24px;background:#1f3a5f;color:#f5f7fa}
.sidebar h3{margin:20px 0 8px;font-size:13px;letter-spacing:.08em;text-transform:uppercase;border-bottom:1px solid rgba(255,255,255,.3);padding-bottom:4px}
.sidebar ul{list-style:none;margin:0;padding:0}
.sidebar li{margin:4px 0;font-size:13px}
.sidebar a{color:inherit}
.photo-frame{display:flex;justify-content:center}
.photo,.photo-placeholder{width:128px;height:128px;border-radius:50%;object-fit:cover}
.photo-placeholder{display:flex;align-items:center;justify-content:center;background:rgba(255,255,255,.15);font-size:13px}
.contact-label{display:block;font-size:11px;opacity:.7}
.item-proficiency{float:right;opacity:.8}
.main{flex:1;padding:32px}
.full-name{margin:0;font-size:30px}
.job-title{margin:4px 0 0;font-size:16px;color:#52606d}
.main-section h2{margin:24px 0 10px;font-size:16px;text-transform:uppercase;letter-spacing:.06em;color:#1f3a5f;border-bottom:2px solid #1f3a5f}
.entry{margin-bottom:14px}
.entry-head{display:flex;justify-content:space-between;align-items:baseline}
.entry-title{margin:0;font-size:14px}
.entry-dates{font-size:12px;color:#7b8794;white-space:nowrap}
.entry-org{margin:2px 0;font-size:13px;font-style:italic}
.entry-description{font-size:13px}
.entry-description p{margin:4px 0}
.entry-description ul{margin:4px 0;padding-left:18px}
";

/// Standalone HTML page around a template's output.
pub fn render_page(template: &dyn ResumeTemplate, doc: &ProfileDocument) -> Markup {
    let name = doc.personal_info.full_name.trim();
    let title = if name.is_empty() { "Résumé" } else { name };
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                (template.render(doc))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{
        CustomItem, CustomSection, Education, Experience, PersonalInfo, Proficiency, SectionKey,
        Visibility,
    };

    fn named(id: &str, name: &str, proficiency: Option<Proficiency>) -> NamedItem {
        NamedItem {
            id: id.to_string(),
            name: name.to_string(),
            proficiency,
        }
    }

    fn make_doc() -> ProfileDocument {
        ProfileDocument {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                title: "Analyst".to_string(),
                summary: "First programmer.".to_string(),
                email: Some("ada@engine.org".to_string()),
                phone: None,
                location: Some("London".to_string()),
                photo: Some("https://example.org/ada.png".to_string()),
                custom_fields: vec![],
            },
            experience: vec![Experience {
                id: "e1".to_string(),
                title: "Translator".to_string(),
                company: "Analytical Engine".to_string(),
                location: Some("London".to_string()),
                start_date: "1842-01".to_string(),
                end_date: "1843-09".to_string(),
                current: false,
                description: "Notes on the engine\n- Note G".to_string(),
            }],
            education: vec![Education {
                id: "ed1".to_string(),
                degree: "Private tutoring".to_string(),
                school: "Augustus De Morgan".to_string(),
                ..Default::default()
            }],
            skills: vec![named("s1", "Mathematics", Some(Proficiency::Level(5.0)))],
            languages: vec![named(
                "l1",
                "French",
                Some(Proficiency::Label("Fluent".to_string())),
            )],
            interests: vec![named("i1", "Poetical science", None)],
            custom_sections: vec![],
            visibility: Visibility::all(),
        }
    }

    fn render(doc: &ProfileDocument) -> String {
        SidebarTemplate.render(doc).into_string()
    }

    fn custom_section(id: &str, title: &str, item_title: &str) -> CustomSection {
        CustomSection {
            id: id.to_string(),
            title: title.to_string(),
            items: vec![CustomItem {
                id: format!("{id}-item"),
                title: item_title.to_string(),
                subtitle: "Sub".to_string(),
                date: "2020-05".to_string(),
                description: String::new(),
            }],
        }
    }

    #[test]
    fn test_full_document_renders_every_section() {
        let html = render(&make_doc());
        for heading in [
            "About Me",
            "Contact",
            "Skills",
            "Languages",
            "Interests",
            "Experience",
            "Education",
        ] {
            assert!(html.contains(heading), "missing heading {heading}");
        }
        assert!(html.contains("<h1 class=\"full-name\">Ada Lovelace</h1>"));
        assert!(html.contains("<p class=\"job-title\">Analyst</p>"));
        assert!(html.contains("Jan 1842 - Sep 1843"));
        assert!(html.contains("Analytical Engine, London"));
        assert!(html.contains("<li>Note G</li>"));
        assert!(html.contains("5/5"));
        assert!(html.contains("Fluent"));
    }

    #[test]
    fn test_skills_hidden_by_flag() {
        let mut doc = make_doc();
        doc.visibility.set(SectionKey::Skills, false);
        let html = render(&doc);
        assert!(!html.contains("Skills"));
        assert!(!html.contains("Mathematics"));
    }

    #[test]
    fn test_empty_experience_has_no_heading() {
        let mut doc = make_doc();
        doc.experience.clear();
        assert!(doc.visibility.is_visible(SectionKey::Experience));
        assert!(!render(&doc).contains("Experience"));
    }

    #[test]
    fn test_placeholder_without_photo() {
        let mut doc = make_doc();
        doc.personal_info.photo = None;
        let html = render(&doc);
        assert!(html.contains("<div class=\"photo-placeholder\">Photo</div>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_photo_renders_image() {
        let html = render(&make_doc());
        assert!(html.contains("src=\"https://example.org/ada.png\""));
        assert!(!html.contains("photo-placeholder"));
    }

    #[test]
    fn test_contact_with_email_only_has_one_entry() {
        let mut doc = make_doc();
        doc.personal_info.email = Some("a@b.com".to_string());
        doc.personal_info.phone = None;
        doc.personal_info.location = None;
        let html = render(&doc);
        assert_eq!(html.matches("class=\"contact-item\"").count(), 1);
        assert!(html.contains("href=\"mailto:a@b.com\""));
    }

    #[test]
    fn test_no_contact_heading_when_nothing_to_show() {
        let mut doc = make_doc();
        doc.personal_info.email = None;
        doc.personal_info.location = None;
        assert!(!render(&doc).contains("Contact"));
    }

    #[test]
    fn test_custom_sections_render_in_order_with_own_items() {
        let mut doc = make_doc();
        doc.custom_sections = vec![
            custom_section("c1", "Awards", "Royal Medal"),
            custom_section("c2", "Talks", "On Engines"),
        ];
        let html = render(&doc);
        let awards = html.find("<h2>Awards</h2>").unwrap();
        let medal = html.find("Royal Medal").unwrap();
        let talks = html.find("<h2>Talks</h2>").unwrap();
        let engines = html.find("On Engines").unwrap();
        assert!(awards < medal && medal < talks && talks < engines);
        assert!(html.contains("May 2020"));
    }

    #[test]
    fn test_blank_custom_section_title_has_no_heading() {
        let mut doc = make_doc();
        doc.custom_sections = vec![custom_section("c1", "   ", "Royal Medal")];
        let html = render(&doc);
        assert!(html.contains("Royal Medal"));
        assert!(!html.contains("<h2></h2>"));
        assert!(!html.contains("<h2>   </h2>"));
    }

    #[test]
    fn test_null_fields_render_as_omitted() {
        let doc: ProfileDocument = serde_json::from_value(serde_json::json!({
            "personalInfo": { "fullName": "Ada", "title": null, "summary": null },
            "experience": [{
                "id": "e1",
                "title": "Translator",
                "startDate": "2020-01",
                "endDate": null,
                "description": null
            }],
            "visibility": { "experience": true }
        }))
        .unwrap();
        let html = render(&doc);
        assert!(html.contains("Jan 2020 - Present"));
        assert!(!html.contains("About Me"));
        assert!(!html.contains("job-title"));
        assert!(!html.contains("entry-description"));
    }

    #[test]
    fn test_main_sections_keep_fixed_order() {
        let mut doc = make_doc();
        doc.custom_sections = vec![custom_section("c1", "Awards", "Royal Medal")];
        let html = render(&doc);
        let experience = html.find("<h2>Experience</h2>").unwrap();
        let education = html.find("<h2>Education</h2>").unwrap();
        let awards = html.find("<h2>Awards</h2>").unwrap();
        assert!(experience < education && education < awards);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let doc = make_doc();
        assert_eq!(render(&doc), render(&doc));
        assert_eq!(
            render_page(&SidebarTemplate, &doc).into_string(),
            render_page(&SidebarTemplate, &doc).into_string()
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = make_doc();
        doc.personal_info.full_name = "<script>alert(1)</script>".to_string();
        let html = render(&doc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_items_carry_stable_ids() {
        let html = render(&make_doc());
        assert!(html.contains("data-id=\"e1\""));
        assert!(html.contains("data-id=\"s1\""));
        assert!(html.contains("data-id=\"i1\""));
    }

    #[test]
    fn test_page_wraps_markup() {
        let page = render_page(&SidebarTemplate, &make_doc()).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Ada Lovelace</title>"));
        assert!(page.contains("<style>"));
        assert!(page.contains("class=\"resume\""));
    }
}
