use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Local};

use super::{Channel, ContentItem, ListStrategy, ListingSettings};

/// 从候选条目中筛出可展示的条目
///
/// 见 [`ContentItem::is_eligible`]。
pub fn eligible_pool(
    candidates: &[ContentItem],
    channel: Channel,
    now: DateTime<Local>,
) -> Vec<&ContentItem> {
    candidates
        .iter()
        .filter(|item| item.is_eligible(channel, now))
        .collect()
}

/// 筛选并按频道设置组装列表，最多返回 `limit` 条
///
/// ```ignore
/// let items = querier.channel_items(Channel::News).await?;
/// let settings = querier.listing_settings(Channel::News).await?;
/// let feed = assemble_feed(&items, &settings, Local::now(), 10);
/// ```
pub fn assemble_feed<'a>(
    candidates: &'a [ContentItem],
    settings: &ListingSettings,
    now: DateTime<Local>,
    limit: usize,
) -> Vec<&'a ContentItem> {
    let pool = eligible_pool(candidates, settings.channel, now);
    assemble(pool, settings, limit)
}

/// 按策略组装已筛选过的条目池
///
/// - `newest`：发布时间倒序
/// - `featuredThenNewest`：精选引用按配置顺序在前，其后为倒序列表，按 id 去重保留首次出现
/// - `pinnedFeaturedNewest`：置顶、精选（非置顶）、其余三层，各层内倒序，层间互斥
/// - `manual`：按 `manualOrder` 原样输出，解析不到的引用直接丢弃
pub fn assemble<'a>(
    pool: Vec<&'a ContentItem>,
    settings: &ListingSettings,
    limit: usize,
) -> Vec<&'a ContentItem> {
    let pool = newest_first(pool);

    match settings.list_strategy {
        ListStrategy::Newest => pool.into_iter().take(limit).collect(),
        ListStrategy::FeaturedThenNewest => {
            let featured = resolve_refs(&pool, &settings.featured_posts);
            distinct_by_id(featured.into_iter().chain(pool))
                .take(limit)
                .collect()
        }
        ListStrategy::PinnedFeaturedNewest => {
            let (pinned, rest): (Vec<_>, Vec<_>) = pool.into_iter().partition(|i| i.pinned);
            let (featured, rest): (Vec<_>, Vec<_>) = rest.into_iter().partition(|i| i.featured);

            pinned
                .into_iter()
                .chain(featured)
                .chain(rest)
                .take(limit)
                .collect()
        }
        ListStrategy::Manual => distinct_by_id(resolve_refs(&pool, &settings.manual_order))
            .take(limit)
            .collect(),
    }
}

/// 发布时间倒序，时间相同按 id 升序
fn newest_first(mut pool: Vec<&ContentItem>) -> Vec<&ContentItem> {
    pool.sort_by(|a, b| {
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    pool
}

/// 将 id 引用解析为池中的条目，保持引用顺序
fn resolve_refs<'a>(pool: &[&'a ContentItem], refs: &[String]) -> Vec<&'a ContentItem> {
    let by_id: HashMap<&str, &'a ContentItem> =
        pool.iter().map(|item| (item.id.as_str(), *item)).collect();

    refs.iter()
        .filter_map(|id| {
            let found = by_id.get(id.as_str()).copied();
            if found.is_none() {
                tracing::debug!(id, "dropping dangling content reference");
            }
            found
        })
        .collect()
}

fn distinct_by_id<'a>(
    items: impl IntoIterator<Item = &'a ContentItem>,
) -> impl Iterator<Item = &'a ContentItem> {
    let mut seen: HashSet<&'a str> = HashSet::new();
    items
        .into_iter()
        .filter(move |&item| seen.insert(item.id.as_str()))
}
