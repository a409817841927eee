use serde::Serialize;

use super::{Category, ContentItem, DisplayLocale, FallbackChains, RichText};

/// 已按语言解析的条目，页面直接渲染这一结构
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedItem {
    pub id: String,
    pub channel: String,
    pub title: String,
    pub excerpt: String,
    pub body: RichText,
    pub slug: String,
    /// 毫秒时间戳
    pub published_at: Option<i64>,
    pub pinned: bool,
    pub featured: bool,
    pub category: Option<ResolvedCategory>,
    pub tags: Vec<String>,
    pub lang: DisplayLocale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCategory {
    pub id: String,
    pub title: String,
}

impl ResolvedCategory {
    pub fn new(category: &Category, chains: &FallbackChains, lang: DisplayLocale) -> Self {
        Self {
            id: category.id.clone(),
            title: chains.resolve_or_default(&category.title, lang.content_locale()),
        }
    }
}

impl ResolvedItem {
    /// 按回退链解析每个字段
    ///
    /// 没有任何语言值的字段解析为空，由调用方决定是否隐藏。
    pub fn new(item: &ContentItem, chains: &FallbackChains, lang: DisplayLocale) -> Self {
        let locale = lang.content_locale();

        Self {
            id: item.id.clone(),
            channel: item.channel.to_string(),
            title: chains.resolve_or_default(&item.title, locale),
            excerpt: chains.resolve_or_default(&item.excerpt, locale),
            body: chains.resolve_or_default(&item.body, locale),
            slug: chains.resolve_or_default(&item.slug, locale),
            published_at: item.published_at.map(|t| t.timestamp_millis()),
            pinned: item.pinned,
            featured: item.featured,
            category: item
                .category
                .as_ref()
                .map(|c| ResolvedCategory::new(c, chains, lang)),
            tags: item.tags.clone(),
            lang,
        }
    }
}
