use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::Query;
use chrono::Local;
use serde::{Deserialize, Serialize};

use super::{ApiError, Result};

use crate::{
    content::{Channel, ResolvedCategory, ResolvedItem, normalize_for_display},
    site::Site,
    state::AppState,
    storage::DBPool,
};

/// 配置内容查询路由。
///
/// 路由包括：
/// - `GET /{channel}/posts`：频道列表，`limit` 必填
/// - `GET /{channel}/posts/{slug}`：获取单篇文章
/// - `GET /categories`：获取所有分类
/// - `GET /routes/{*target}`：将链接目标解析为站内链接
pub fn setup_route() -> Router<AppState> {
    Router::new()
        .route("/{channel}/posts", get(post_list))
        .route("/{channel}/posts/{slug}", get(post))
        .route("/categories", get(category_list))
        .route("/routes/{*target}", get(route_href))
}

/// 列表查询参数
///
/// `limit` 没有默认值，缺失时由提取器返回 400。
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    #[serde(default)]
    lang: String,
    limit: usize,
}

/// 只带语言的查询参数，缺省时按 `jp` 处理
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LangParams {
    lang: String,
}

#[derive(Debug, Serialize)]
pub struct RouteHref {
    href: String,
}

fn parse_channel(channel: &str) -> Result<Channel> {
    channel.parse().map_err(|_| ApiError::NotFound.into())
}

/// 获取频道列表。
///
/// 按频道的列表设置排序，返回 [`ResolvedItem`] 列表。
async fn post_list(
    Path(channel): Path<String>,
    Query(params): Query<FeedParams>,
    State(pool): State<DBPool>,
    State(site): State<Arc<Site>>,
) -> Result<Json<Vec<ResolvedItem>>> {
    let channel = parse_channel(&channel)?;
    let lang = normalize_for_display(&params.lang);

    site.feed(&pool, channel, lang, params.limit, Local::now())
        .await
        .map(Json)
}

/// 根据任意语言的 slug 获取单篇文章。
///
/// 文章不存在或不可展示时返回 [`ApiError::NotFound`]。
async fn post(
    Path((channel, slug)): Path<(String, String)>,
    Query(params): Query<LangParams>,
    State(pool): State<DBPool>,
    State(site): State<Arc<Site>>,
) -> Result<Json<ResolvedItem>> {
    let channel = parse_channel(&channel)?;
    let lang = normalize_for_display(&params.lang);

    let item = site
        .post(&pool, channel, &slug, lang, Local::now())
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(item))
}

/// 获取所有分类。
async fn category_list(
    Query(params): Query<LangParams>,
    State(pool): State<DBPool>,
    State(site): State<Arc<Site>>,
) -> Result<Json<Vec<ResolvedCategory>>> {
    let lang = normalize_for_display(&params.lang);
    site.categories(&pool, lang).await.map(Json)
}

async fn route_href(
    Path(target): Path<String>,
    Query(params): Query<LangParams>,
    State(site): State<Arc<Site>>,
) -> Result<Json<RouteHref>> {
    let lang = normalize_for_display(&params.lang);
    let href = site.href(&target, lang)?;

    Ok(Json(RouteHref { href }))
}
