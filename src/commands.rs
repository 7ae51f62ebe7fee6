//! Subcommand output: text for terminals, JSON with `--json`.

use lodge_content::store::cell_text;
use lodge_content::views::{
    AboutSection, BlogCard, CommentCard, ContactCard, RoomCard, ServiceCard, SocialLink,
};
use lodge_core::{Query, Row, RowSource};
use lodge_i18n::format::format_price;
use lodge_i18n::{
    fallback_order, pick_localized, resolve_language, split_title, LanguageContext,
    SupportedLanguage,
};
use serde::Serialize;
use serde_json::json;

pub struct Output {
    pub json: bool,
}

impl Output {
    fn emit<T: Serialize + ?Sized>(
        &self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    pub fn resolutions(&self, hints: &[String]) -> anyhow::Result<()> {
        let resolved: Vec<_> = hints
            .iter()
            .map(|hint| (hint.as_str(), resolve_language(Some(hint.as_str()))))
            .collect();
        let value: Vec<_> = resolved
            .iter()
            .map(|(hint, lang)| json!({ "hint": hint, "language": lang }))
            .collect();
        self.emit(&value, || render_resolutions(&resolved))
    }

    pub fn languages(&self) -> anyhow::Result<()> {
        let value: Vec<_> = SupportedLanguage::ALL
            .iter()
            .map(|lang| {
                json!({
                    "code": lang,
                    "name": lang.english_name(),
                    "fallback": fallback_order(*lang),
                })
            })
            .collect();
        self.emit(&value, render_languages)
    }

    pub fn price(&self, amount: &str, lang: SupportedLanguage) -> anyhow::Result<()> {
        let formatted = format_price(amount, lang);
        self.emit(&json!({ "language": lang, "price": formatted.as_str() }), || formatted.clone())
    }

    pub fn direction(&self, ctx: &LanguageContext) -> anyhow::Result<()> {
        self.emit(ctx, || {
            format!(
                "hint: {}\nlanguage: {}\ndir: {}\nlang: {}\nmobile: {}",
                ctx.hint(),
                ctx.language(),
                ctx.direction().as_str(),
                ctx.html_lang(),
                ctx.is_mobile()
            )
        })
    }

    pub async fn pick<S: RowSource>(
        &self,
        source: &S,
        table: &str,
        field: &str,
        id: Option<&str>,
        lang: SupportedLanguage,
    ) -> anyhow::Result<()> {
        let rows: Vec<Row> = match id {
            Some(id) => source.fetch_by_id(table, id).await?.into_iter().collect(),
            None => source.select(table, &Query::new()).await?,
        };
        let picked: Vec<(String, &str)> = rows
            .iter()
            .map(|row| {
                let id = row.get("id").and_then(cell_text).unwrap_or_default();
                (id, pick_localized(row, field, lang))
            })
            .collect();
        let value: Vec<_> = picked
            .iter()
            .map(|(id, text)| json!({ "id": id, "value": text }))
            .collect();
        self.emit(&value, || {
            picked
                .iter()
                .map(|(id, text)| format!("{id}\t{text}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn rooms(&self, rooms: &[RoomCard]) -> anyhow::Result<()> {
        self.emit(rooms, || {
            rooms.iter().map(render_room_line).collect::<Vec<_>>().join("\n")
        })
    }

    pub fn room(&self, room: &RoomCard, comments: &[CommentCard]) -> anyhow::Result<()> {
        let value = json!({ "room": room, "comments": comments });
        self.emit(&value, || render_room_detail(room, comments))
    }

    pub fn services(&self, services: &[ServiceCard]) -> anyhow::Result<()> {
        self.emit(services, || {
            services
                .iter()
                .map(|s| s.name.clone())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn contact(&self, contact: &ContactCard) -> anyhow::Result<()> {
        self.emit(contact, || {
            let mut lines = contact.phones.clone();
            lines.extend(contact.email.clone());
            lines.extend(contact.working_hours.clone());
            lines.push(contact.address.clone());
            lines.join("\n")
        })
    }

    pub fn about(&self, about: &AboutSection) -> anyhow::Result<()> {
        self.emit(about, || about.text.clone())
    }

    pub fn blog(&self, posts: &[BlogCard]) -> anyhow::Result<()> {
        self.emit(posts, || {
            posts
                .iter()
                .map(render_blog_card)
                .collect::<Vec<_>>()
                .join("\n\n")
        })
    }

    pub fn social(&self, links: &[SocialLink]) -> anyhow::Result<()> {
        self.emit(links, || {
            links
                .iter()
                .map(|l| l.url.clone())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

fn render_resolutions(resolved: &[(&str, SupportedLanguage)]) -> String {
    resolved
        .iter()
        .map(|(hint, lang)| format!("{hint:?} -> {lang}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_languages() -> String {
    SupportedLanguage::ALL
        .iter()
        .map(|lang| {
            let chain: Vec<&str> = fallback_order(*lang).iter().map(|l| l.code()).collect();
            format!("{lang}  {:<8}  {}", lang.english_name(), chain.join(" > "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_room_line(room: &RoomCard) -> String {
    if room.price_text.is_empty() {
        format!("[{}] {}", room.id, room.name)
    } else {
        format!("[{}] {} - {}", room.id, room.name, room.price_text)
    }
}

fn render_room_detail(room: &RoomCard, comments: &[CommentCard]) -> String {
    let title = split_title(&room.name);
    let mut out = if title.has_two_words {
        format!("{} *{}*", title.first_word, title.rest_words)
    } else {
        title.first_word.to_string()
    };
    if !room.price_text.is_empty() {
        out.push_str(&format!("\n{}", room.price_text));
    }
    if !room.description.is_empty() {
        out.push_str(&format!("\n\n{}", room.description));
    }
    for c in comments {
        out.push_str(&format!("\n\n{} ({})\n{}", c.guest_name, c.posted_at, c.comment));
    }
    out
}

fn render_blog_card(post: &BlogCard) -> String {
    let mut out = post.title.clone();
    for bullet in &post.bullets {
        out.push_str(&format!("\n  • {bullet}"));
    }
    out
}
