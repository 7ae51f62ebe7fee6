//! Display-ready cards built from store rows for one language.
//!
//! Each constructor takes a raw [`Row`] and a [`SupportedLanguage`] and
//! never fails: missing or malformed columns degrade to empty values.

use chrono::{DateTime, FixedOffset};
use lodge_core::Row;
use lodge_i18n::format::{format_phone_number, format_price};
use lodge_i18n::{
    is_usable, pick_localized, pick_localized_by, t, to_bullets, LocalizedRow, SupportedLanguage,
};
use serde::Serialize;
use serde_json::Value;

use crate::store::cell_text;

/// Gallery columns shared by rooms and blog posts.
const IMAGE_COLUMNS: [&str; 4] = ["image_1", "image_2", "image_3", "image_4"];

/// Character budget of a blog card summary.
const BLOG_SUMMARY_CHARS: usize = 150;

/// Comment timestamps are shown in Yerevan time (UTC+4).
const COMMENT_UTC_OFFSET_SECS: i32 = 4 * 60 * 60;

fn id_of(row: &Row) -> String {
    row.get("id").and_then(cell_text).unwrap_or_default()
}

/// A non-blank string column.
fn usable_text(row: &Row, key: &str) -> Option<String> {
    row.text(key).filter(|v| is_usable(v)).map(str::to_string)
}

fn images(row: &Row) -> Vec<String> {
    IMAGE_COLUMNS
        .iter()
        .filter_map(|key| usable_text(row, key))
        .collect()
}

/// A room in the catalog listing or on its detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub capacity: Option<i64>,
    pub bed_type: Option<String>,
    pub size: Option<f64>,
    pub floor: Option<i64>,
    /// `"30.000/night"`, or empty when the room has no standard price.
    pub price_text: String,
    pub images: Vec<String>,
}

impl RoomCard {
    pub fn from_row(row: &Row, lang: SupportedLanguage) -> Self {
        let name = match pick_localized(row, "name", lang) {
            "" => t("room", lang).to_string(),
            name => name.to_string(),
        };
        let price_text = row
            .get("price_standard")
            .filter(|v| !v.is_null())
            .and_then(cell_text)
            .map(|price| format!("{}/{}", format_price(&price, lang), t("night", lang)))
            .unwrap_or_default();

        Self {
            id: id_of(row),
            name,
            description: pick_localized(row, "description", lang).to_string(),
            capacity: row.get("capacity").and_then(Value::as_i64),
            bed_type: usable_text(row, "bed_type"),
            size: row.get("size").and_then(Value::as_f64),
            floor: row.get("floor").and_then(Value::as_i64),
            price_text,
            images: images(row),
        }
    }
}

/// A hotel amenity tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCard {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

impl ServiceCard {
    pub fn from_row(row: &Row, lang: SupportedLanguage) -> Self {
        Self {
            id: id_of(row),
            name: pick_localized(row, "name", lang).to_string(),
            image: usable_text(row, "image"),
        }
    }
}

/// Contact block for the footer and contact page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactCard {
    /// `phone1` and `phone2`, digits localized.
    pub phones: Vec<String>,
    pub email: Option<String>,
    pub working_hours: Option<String>,
    pub address: String,
}

impl ContactCard {
    pub fn from_row(row: &Row, lang: SupportedLanguage) -> Self {
        let phones = ["phone1", "phone2"]
            .iter()
            .filter_map(|key| usable_text(row, key))
            .map(|phone| format_phone_number(&phone, lang))
            .collect();
        Self {
            phones,
            email: usable_text(row, "email"),
            working_hours: usable_text(row, "working_hours"),
            address: pick_localized(row, "address", lang).to_string(),
        }
    }
}

/// Column holding the about text in `lang`.
///
/// The `about_us` table keeps Armenian in `about_text` and the others in
/// `about_<lang>_text`.
pub fn about_column(lang: SupportedLanguage) -> String {
    match lang {
        SupportedLanguage::Am => "about_text".to_string(),
        other => format!("about_{}_text", other.code()),
    }
}

/// The about-us section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutSection {
    pub text: String,
    pub images: Vec<String>,
}

impl AboutSection {
    pub fn from_row(row: &Row, lang: SupportedLanguage) -> Self {
        Self {
            text: pick_localized_by(row, lang, about_column).to_string(),
            images: images(row),
        }
    }
}

/// A blog post preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub bullets: Vec<String>,
    pub image: Option<String>,
}

impl BlogCard {
    pub fn from_row(row: &Row, lang: SupportedLanguage) -> Self {
        let title = match pick_localized(row, "title", lang) {
            "" => t("untitled", lang).to_string(),
            title => title.to_string(),
        };
        let content = pick_localized(row, "content", lang).to_string();
        Self {
            id: id_of(row),
            title,
            bullets: to_bullets(&content, BLOG_SUMMARY_CHARS),
            content,
            image: usable_text(row, "image_1"),
        }
    }
}

/// A guest comment under a room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentCard {
    pub id: String,
    pub guest_name: String,
    pub comment: String,
    /// `dd/mm/yyyy HH:MM` in hotel time, empty if the timestamp is unreadable.
    pub posted_at: String,
}

impl CommentCard {
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: id_of(row),
            guest_name: row.text("guest_name").unwrap_or_default().to_string(),
            comment: row.text("comment").unwrap_or_default().to_string(),
            posted_at: row
                .text("created_at")
                .map(format_comment_time)
                .unwrap_or_default(),
        }
    }
}

/// Render an RFC 3339 timestamp as `dd/mm/yyyy HH:MM` at UTC+4.
pub fn format_comment_time(timestamp: &str) -> String {
    let Some(offset) = FixedOffset::east_opt(COMMENT_UTC_OFFSET_SECS) else {
        return String::new();
    };
    DateTime::parse_from_rfc3339(timestamp)
        .map(|ts| ts.with_timezone(&offset).format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_default()
}

/// A social network link in the footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub id: String,
    pub url: String,
    pub image: Option<String>,
}

impl SocialLink {
    /// `None` when the row has no usable URL.
    pub fn from_row(row: &Row) -> Option<Self> {
        Some(Self {
            id: id_of(row),
            url: usable_text(row, "url")?,
            image: usable_text(row, "image"),
        })
    }
}
