//! Page-level content queries: fetch rows, localize them into cards.

use lodge_core::{error::LodgeError, Query, RowSource};
use lodge_i18n::SupportedLanguage;
use tracing::debug;

use crate::views::{
    AboutSection, BlogCard, CommentCard, ContactCard, RoomCard, ServiceCard, SocialLink,
};

pub const ROOMS: &str = "rooms";
pub const SERVICES: &str = "services";
pub const CONTACT: &str = "contact";
pub const ABOUT_US: &str = "about_us";
pub const BLOG: &str = "blog";
pub const ROOM_COMMENTS: &str = "room_comments";
pub const SOCIAL_MEDIA: &str = "social_media";

/// Content access for the site's pages over any [`RowSource`].
pub struct Catalog<S: RowSource> {
    source: S,
}

impl<S: RowSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// All rooms, oldest first.
    pub async fn rooms(&self, lang: SupportedLanguage) -> Result<Vec<RoomCard>, LodgeError> {
        let rows = self
            .source
            .select(ROOMS, &Query::new().order_asc("created_at"))
            .await?;
        debug!("{}: {} rooms ({lang})", self.source.name(), rows.len());
        Ok(rows.iter().map(|r| RoomCard::from_row(r, lang)).collect())
    }

    /// One room by id.
    pub async fn room(&self, id: &str, lang: SupportedLanguage) -> Result<RoomCard, LodgeError> {
        self.source
            .fetch_by_id(ROOMS, id)
            .await?
            .map(|r| RoomCard::from_row(&r, lang))
            .ok_or_else(|| LodgeError::NotFound(format!("room '{id}'")))
    }

    /// Other rooms for the "you may also like" strip on a room page.
    pub async fn other_rooms(
        &self,
        id: &str,
        lang: SupportedLanguage,
    ) -> Result<Vec<RoomCard>, LodgeError> {
        let mut rooms = self.rooms(lang).await?;
        rooms.retain(|room| room.id != id);
        Ok(rooms)
    }

    pub async fn services(&self, lang: SupportedLanguage) -> Result<Vec<ServiceCard>, LodgeError> {
        let rows = self
            .source
            .select(SERVICES, &Query::new().order_asc("created_at"))
            .await?;
        Ok(rows.iter().map(|r| ServiceCard::from_row(r, lang)).collect())
    }

    pub async fn contact(&self, lang: SupportedLanguage) -> Result<Option<ContactCard>, LodgeError> {
        Ok(self
            .source
            .fetch_first(CONTACT)
            .await?
            .map(|r| ContactCard::from_row(&r, lang)))
    }

    pub async fn about(&self, lang: SupportedLanguage) -> Result<Option<AboutSection>, LodgeError> {
        Ok(self
            .source
            .fetch_first(ABOUT_US)
            .await?
            .map(|r| AboutSection::from_row(&r, lang)))
    }

    /// Blog posts, newest first.
    pub async fn blog(&self, lang: SupportedLanguage) -> Result<Vec<BlogCard>, LodgeError> {
        let rows = self
            .source
            .select(BLOG, &Query::new().order_desc("created_at"))
            .await?;
        Ok(rows.iter().map(|r| BlogCard::from_row(r, lang)).collect())
    }

    pub async fn blog_post(&self, id: &str, lang: SupportedLanguage) -> Result<BlogCard, LodgeError> {
        self.source
            .fetch_by_id(BLOG, id)
            .await?
            .map(|r| BlogCard::from_row(&r, lang))
            .ok_or_else(|| LodgeError::NotFound(format!("blog post '{id}'")))
    }

    /// Comments under a room, newest first.
    pub async fn comments(&self, room_id: &str) -> Result<Vec<CommentCard>, LodgeError> {
        let query = Query::new().eq("room_id", room_id).order_desc("created_at");
        let rows = self.source.select(ROOM_COMMENTS, &query).await?;
        Ok(rows.iter().map(CommentCard::from_row).collect())
    }

    /// Footer social links by `display_order`; rows without a URL are dropped.
    pub async fn social_links(&self) -> Result<Vec<SocialLink>, LodgeError> {
        let rows = self
            .source
            .select(SOCIAL_MEDIA, &Query::new().order_asc("display_order"))
            .await?;
        Ok(rows.iter().filter_map(SocialLink::from_row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonStore;
    use lodge_i18n::SupportedLanguage::*;
    use serde_json::json;

    fn catalog() -> Catalog<JsonStore> {
        let store = JsonStore::from_value(json!({
            "rooms": [
                {
                    "id": "2", "created_at": "2024-02-01T00:00:00Z",
                    "name_en": "Family Suite", "name_am": "Ընտանեկան",
                    "price_standard": 60000
                },
                {
                    "id": "1", "created_at": "2024-01-01T00:00:00Z",
                    "name_en": "Standard", "name_fa": "استاندارد"
                }
            ],
            "services": [ { "id": "s1", "name_ru": "Сауна", "image": "/s.jpg" } ],
            "about_us": [ { "about_en_text": "Boutique hotel." } ],
            "blog": [
                { "id": "old", "created_at": "2024-01-01T00:00:00Z", "title_en": "Winter" },
                { "id": "new", "created_at": "2024-06-01T00:00:00Z", "title_en": "Summer" }
            ],
            "room_comments": [
                { "id": "c1", "room_id": "1", "guest_name": "Ani", "comment": "Nice", "created_at": "2024-03-01T08:00:00Z" },
                { "id": "c2", "room_id": "2", "guest_name": "Oleg", "comment": "Good", "created_at": "2024-03-02T08:00:00Z" },
                { "id": "c3", "room_id": "1", "guest_name": "Sara", "comment": "Quiet", "created_at": "2024-03-03T08:00:00Z" }
            ],
            "social_media": [
                { "id": "b", "url": "https://facebook.com/x", "display_order": 2 },
                { "id": "a", "url": "https://instagram.com/x", "display_order": 1 },
                { "id": "c", "url": null, "display_order": 0 }
            ]
        }))
        .unwrap();
        Catalog::new(store)
    }

    #[tokio::test]
    async fn test_rooms_oldest_first_and_localized() {
        let rooms = catalog().rooms(Fa).await.unwrap();
        let names: Vec<_> = rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["استاندارد", "Family Suite"]);
    }

    #[tokio::test]
    async fn test_room_lookup() {
        let c = catalog();
        assert_eq!(c.room("2", Am).await.unwrap().name, "Ընտանեկան");
        assert!(matches!(c.room("9", Am).await, Err(LodgeError::NotFound(_))));

        let others = c.other_rooms("2", En).await.unwrap();
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].id, "1");
    }

    #[tokio::test]
    async fn test_single_row_tables() {
        let c = catalog();
        let about = c.about(Ru).await.unwrap().unwrap();
        assert_eq!(about.text, "Boutique hotel.");
        assert!(c.contact(Ru).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_services_fall_back_past_english() {
        let services = catalog().services(En).await.unwrap();
        assert_eq!(services[0].name, "Сауна");
    }

    #[tokio::test]
    async fn test_blog_newest_first() {
        let c = catalog();
        let posts = c.blog(En).await.unwrap();
        assert_eq!(posts[0].title, "Summer");
        assert_eq!(c.blog_post("old", En).await.unwrap().title, "Winter");
    }

    #[tokio::test]
    async fn test_comments_filtered_by_room() {
        let comments = catalog().comments("1").await.unwrap();
        let names: Vec<_> = comments.iter().map(|c| c.guest_name.as_str()).collect();
        assert_eq!(names, vec!["Sara", "Ani"]);
        assert_eq!(comments[1].posted_at, "01/03/2024 12:00");
    }

    #[tokio::test]
    async fn test_social_links_ordered() {
        let links = catalog().social_links().await.unwrap();
        let ids: Vec<_> = links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
