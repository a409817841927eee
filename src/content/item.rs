use std::{fmt, str::FromStr};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{LocalizedField, RichText};

/// CMS 草稿副本的 id 前缀，草稿永远不会出现在列表里
const DRAFT_PREFIX: &str = "drafts.";

/// 内容频道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    News,
    Column,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::News => "news",
            Channel::Column => "column",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "news" => Ok(Channel::News),
            "column" => Ok(Channel::Column),
            _ => Err(UnknownChannel(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown channel: {0}")]
pub struct UnknownChannel(pub String);

/// 分类，标题按语言区分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: LocalizedField<String>,
}

/// 可列出的内容条目（新闻、专栏文章）
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: String,
    pub channel: Channel,
    /// 为空表示尚未发布
    pub published_at: Option<DateTime<Local>>,
    pub pinned: bool,
    pub featured: bool,
    pub title: LocalizedField<String>,
    pub excerpt: LocalizedField<String>,
    pub body: LocalizedField<RichText>,
    /// 每种语言各自的 slug
    pub slug: LocalizedField<String>,
    pub category: Option<Category>,
    pub tags: Vec<String>,
}

impl ContentItem {
    pub fn is_draft(&self) -> bool {
        self.id.starts_with(DRAFT_PREFIX)
    }

    /// 频道一致、发布时间已到且不是草稿
    pub fn is_eligible(&self, channel: Channel, now: DateTime<Local>) -> bool {
        self.channel == channel
            && !self.is_draft()
            && self.published_at.is_some_and(|published| published <= now)
    }

    /// 任意语言的 slug 与给定值相同
    pub fn has_slug(&self, slug: &str) -> bool {
        self.slug.variants().any(|(_, s)| s == slug)
    }
}

/// 列表排序策略。
///
/// 无法识别的取值按 [`ListStrategy::Newest`] 处理。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum ListStrategy {
    #[default]
    Newest,
    FeaturedThenNewest,
    PinnedFeaturedNewest,
    Manual,
}

impl From<&str> for ListStrategy {
    fn from(value: &str) -> Self {
        match value {
            "newest" => ListStrategy::Newest,
            "featuredThenNewest" => ListStrategy::FeaturedThenNewest,
            "pinnedFeaturedNewest" => ListStrategy::PinnedFeaturedNewest,
            "manual" => ListStrategy::Manual,
            other => {
                tracing::debug!(strategy = other, "unknown list strategy, using newest");
                ListStrategy::Newest
            }
        }
    }
}

impl From<String> for ListStrategy {
    fn from(value: String) -> Self {
        ListStrategy::from(value.as_str())
    }
}

/// 频道的列表配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSettings {
    pub channel: Channel,
    #[serde(default)]
    pub list_strategy: ListStrategy,
    /// 仅在 [`ListStrategy::Manual`] 下生效
    #[serde(default)]
    pub manual_order: Vec<String>,
    #[serde(default)]
    pub featured_posts: Vec<String>,
}

impl ListingSettings {
    /// 频道没有配置时使用的设置
    pub fn newest(channel: Channel) -> Self {
        Self {
            channel,
            list_strategy: ListStrategy::Newest,
            manual_order: Vec::new(),
            featured_posts: Vec::new(),
        }
    }
}
