use chrono::{DateTime, Local};
use sqlx::types::Json;

use crate::content::{
    Category, Channel, ContentItem, ListStrategy, ListingSettings, LocalizedField, RichText,
};

/// 文章行
///
/// 多语言字段以 `jsonb` 存储，形如 `{"jp": ..., "zh": ..., "en": ...}`。
#[derive(Debug, sqlx::FromRow)]
pub struct PostRow {
    pub id: String,
    pub channel: String,
    pub published_at: Option<DateTime<Local>>,
    pub pinned: bool,
    pub featured: bool,
    pub title: Json<LocalizedField<String>>,
    pub excerpt: Json<LocalizedField<String>>,
    pub body: Json<LocalizedField<RichText>>,
    pub slug: Json<LocalizedField<String>>,
    pub tags: Vec<String>,

    // 平铺的分类字段
    pub category_id: Option<String>,
    pub category_title: Option<Json<LocalizedField<String>>>,
}

impl PostRow {
    /// 频道无法识别时返回 `None`
    pub fn into_item(self) -> Option<ContentItem> {
        let channel = match self.channel.parse::<Channel>() {
            Ok(channel) => channel,
            Err(e) => {
                tracing::warn!(id = %self.id, %e, "skipping post with unknown channel");
                return None;
            }
        };

        let category = self.category_id.map(|id| Category {
            id,
            title: self.category_title.map(|t| t.0).unwrap_or_default(),
        });

        Some(ContentItem {
            id: self.id,
            channel,
            published_at: self.published_at,
            pinned: self.pinned,
            featured: self.featured,
            title: self.title.0,
            excerpt: self.excerpt.0,
            body: self.body.0,
            slug: self.slug.0,
            category,
            tags: self.tags,
        })
    }
}

/// 频道列表设置行
#[derive(Debug, sqlx::FromRow)]
pub struct ListingSettingsRow {
    pub list_strategy: String,
    pub manual_order: Vec<String>,
    pub featured_posts: Vec<String>,
}

impl ListingSettingsRow {
    pub fn into_settings(self, channel: Channel) -> ListingSettings {
        ListingSettings {
            channel,
            list_strategy: ListStrategy::from(self.list_strategy),
            manual_order: self.manual_order,
            featured_posts: self.featured_posts,
        }
    }
}

/// 分类行
#[derive(Debug, sqlx::FromRow)]
pub struct CategoryRow {
    pub id: String,
    pub title: Json<LocalizedField<String>>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            title: row.title.0,
        }
    }
}
