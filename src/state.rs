use std::sync::Arc;

use axum::extract::FromRef;

use crate::{site::Site, storage::DBPool};

/// 应用程序上下文
///
/// [`AppState`] 封装了数据库连接池和站点解析规则，提供统一访问入口。
#[derive(Clone, FromRef)]
pub struct AppState {
    pool: DBPool,
    site: Arc<Site>,
}

impl AppState {
    /// 创建一个新的 [`AppState`] 实例
    pub fn new(pool: DBPool, site: Site) -> Self {
        Self {
            pool,
            site: Arc::new(site),
        }
    }
}
