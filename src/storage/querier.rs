use std::future::Future;

use super::{
    DBPool,
    models::{CategoryRow, ListingSettingsRow, PostRow},
};
use crate::content::{Category, Channel, ContentItem, ListingSettings};

/// 内容存储的查询接口
///
/// 存储只负责按频道取出候选条目，可展示性筛选和列表组装在调用方完成。
pub trait Querier: Send + Sync {
    type Error;

    /// 查询频道下的全部条目，包括草稿和未发布的条目
    fn channel_items(
        &self,
        channel: Channel,
    ) -> impl Future<Output = Result<Vec<ContentItem>, Self::Error>> + Send;

    /// 查询频道的列表设置，未配置时返回 `None`
    fn listing_settings(
        &self,
        channel: Channel,
    ) -> impl Future<Output = Result<Option<ListingSettings>, Self::Error>> + Send;

    /// 查询任意语言 slug 与给定值相同的条目
    ///
    /// 草稿与正式版本可能共用 slug，因此返回列表。
    fn items_by_slug(
        &self,
        channel: Channel,
        slug: &str,
    ) -> impl Future<Output = Result<Vec<ContentItem>, Self::Error>> + Send;

    /// 查询所有分类
    fn categories(&self) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send;
}

const POST_COLUMNS: &str = r#"
    SELECT p.id, p.channel, p.published_at, p.pinned, p.featured,
           p.title, p.excerpt, p.body, p.slug, p.tags,
           c.id AS category_id,
           c.title AS category_title
    FROM posts p
    LEFT JOIN categories c ON p.category_id = c.id
"#;

impl Querier for DBPool {
    type Error = sqlx::Error;

    async fn channel_items(&self, channel: Channel) -> Result<Vec<ContentItem>, Self::Error> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "{POST_COLUMNS} WHERE p.channel = $1 ORDER BY p.published_at DESC NULLS LAST"
        ))
        .bind(channel.as_str())
        .fetch_all(self)
        .await?;

        Ok(rows.into_iter().filter_map(PostRow::into_item).collect())
    }

    async fn listing_settings(
        &self,
        channel: Channel,
    ) -> Result<Option<ListingSettings>, Self::Error> {
        let row = sqlx::query_as::<_, ListingSettingsRow>(
            r#"
                SELECT list_strategy, manual_order, featured_posts
                FROM listing_settings
                WHERE channel = $1
                "#,
        )
        .bind(channel.as_str())
        .fetch_optional(self)
        .await?;

        Ok(row.map(|r| r.into_settings(channel)))
    }

    async fn items_by_slug(
        &self,
        channel: Channel,
        slug: &str,
    ) -> Result<Vec<ContentItem>, Self::Error> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            r#"{POST_COLUMNS}
                WHERE p.channel = $1
                AND $2 IN (p.slug ->> 'jp', p.slug ->> 'zh', p.slug ->> 'zh-cn', p.slug ->> 'en')
                "#
        ))
        .bind(channel.as_str())
        .bind(slug)
        .fetch_all(self)
        .await?;

        Ok(rows.into_iter().filter_map(PostRow::into_item).collect())
    }

    async fn categories(&self) -> Result<Vec<Category>, Self::Error> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
                SELECT id, title
                FROM categories
                ORDER BY id
                "#,
        )
        .fetch_all(self)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }
}
