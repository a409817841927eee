use chrono::{DateTime, Local};
use tracing::instrument;

use crate::{
    config::SiteConfig,
    content::{
        Channel, DisplayLocale, FallbackChains, ListingSettings, ResolvedCategory, ResolvedItem,
        RouteAliases, RouteError, assemble_feed,
    },
    error::{Error, Result},
    storage::Querier,
};

/// 页面请求用到的内容解析规则：回退链与路由别名表
///
/// 本身不持有可变状态，可在任意数量的请求间共享。
#[derive(Debug, Clone, Default)]
pub struct Site {
    chains: FallbackChains,
    routes: RouteAliases,
}

impl Site {
    pub fn new(chains: FallbackChains, routes: RouteAliases) -> Self {
        Self { chains, routes }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.fallback_chains(), config.route_aliases())
    }

    /// 查询频道列表并按语言解析
    ///
    /// 频道没有列表设置时按 `newest` 处理。
    #[instrument(skip(self, querier, now))]
    pub async fn feed<Q>(
        &self,
        querier: &Q,
        channel: Channel,
        lang: DisplayLocale,
        limit: usize,
        now: DateTime<Local>,
    ) -> Result<Vec<ResolvedItem>>
    where
        Q: Querier,
        Q::Error: Into<Error>,
    {
        let settings = querier
            .listing_settings(channel)
            .await
            .map_err(Into::<Error>::into)?
            .unwrap_or_else(|| ListingSettings::newest(channel));
        let items = querier.channel_items(channel).await.map_err(Into::<Error>::into)?;

        Ok(assemble_feed(&items, &settings, now, limit)
            .into_iter()
            .map(|item| ResolvedItem::new(item, &self.chains, lang))
            .collect())
    }

    /// 按 slug 查询单个可展示的条目
    pub async fn post<Q>(
        &self,
        querier: &Q,
        channel: Channel,
        slug: &str,
        lang: DisplayLocale,
        now: DateTime<Local>,
    ) -> Result<Option<ResolvedItem>>
    where
        Q: Querier,
        Q::Error: Into<Error>,
    {
        let items = querier
            .items_by_slug(channel, slug)
            .await
            .map_err(Into::<Error>::into)?;

        Ok(items
            .iter()
            .filter(|item| item.has_slug(slug) && item.is_eligible(channel, now))
            .max_by_key(|item| item.published_at)
            .map(|item| ResolvedItem::new(item, &self.chains, lang)))
    }

    pub async fn categories<Q>(
        &self,
        querier: &Q,
        lang: DisplayLocale,
    ) -> Result<Vec<ResolvedCategory>>
    where
        Q: Querier,
        Q::Error: Into<Error>,
    {
        let categories = querier.categories().await.map_err(Into::<Error>::into)?;

        Ok(categories
            .iter()
            .map(|c| ResolvedCategory::new(c, &self.chains, lang))
            .collect())
    }

    /// 将作者填写的链接目标转换为站内链接
    pub fn href(&self, target: &str, lang: DisplayLocale) -> std::result::Result<String, RouteError> {
        self.routes.href(target, lang).inspect_err(|e| {
            tracing::warn!(%e, link = target, "content link has no destination");
        })
    }
}
