use std::{borrow::Cow, collections::HashMap};

use super::DisplayLocale;

/// 默认的服务页路径前缀
pub const DEFAULT_BASE_PATH: &str = "/services/";

/// 内置的别名表，部署配置中的同名键会覆盖这里的值
const BUILTIN_ALIASES: &[(&str, &str)] = &[("market-entry", "TaiwanService")];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// 链接目标为空，通常是 CMS 中漏填了 slug
    #[error("missing route target")]
    MissingTarget,
}

/// 路由别名表。
///
/// 将 CMS 中填写的 slug 或旧路径映射为站内路由段，精确匹配，未命中时原样返回。
#[derive(Debug, Clone)]
pub struct RouteAliases {
    base_path: String,
    aliases: HashMap<String, String>,
}

impl Default for RouteAliases {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH, std::iter::empty::<(String, String)>())
    }
}

impl RouteAliases {
    /// 在内置别名表的基础上叠加额外的别名
    pub fn new<K, V>(base_path: impl Into<String>, extra: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut aliases: HashMap<String, String> = BUILTIN_ALIASES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        aliases.extend(extra.into_iter().map(|(k, v)| (k.into(), v.into())));

        let mut base_path = base_path.into();
        if !base_path.starts_with('/') {
            base_path.insert(0, '/');
        }
        if !base_path.ends_with('/') {
            base_path.push('/');
        }

        Self { base_path, aliases }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// 解析路由段
    ///
    /// 旧路径取最后一段作为查找键，查询串和锚点会被忽略。
    ///
    /// ```
    /// use sitefeed::content::RouteAliases;
    ///
    /// let aliases = RouteAliases::default();
    /// assert_eq!(aliases.resolve("/services/market-entry").unwrap(), "TaiwanService");
    /// assert_eq!(aliases.resolve("unknown-slug").unwrap(), "unknown-slug");
    /// assert!(aliases.resolve("").is_err());
    /// ```
    pub fn resolve<'a>(&'a self, target: &'a str) -> Result<Cow<'a, str>, RouteError> {
        let key = lookup_key(target).ok_or(RouteError::MissingTarget)?;

        Ok(match self.aliases.get(key) {
            Some(mapped) => Cow::Borrowed(mapped.as_str()),
            None => Cow::Borrowed(key),
        })
    }

    /// 生成带语言参数的站内链接，如 `/services/TaiwanService?lang=en`
    pub fn href(&self, target: &str, locale: DisplayLocale) -> Result<String, RouteError> {
        let segment = self.resolve(target)?;
        Ok(format!("{}{}?lang={}", self.base_path, segment, locale))
    }
}

/// 使用内置别名表解析路由段
pub fn resolve_route(target: &str) -> Result<String, RouteError> {
    RouteAliases::default()
        .resolve(target)
        .map(Cow::into_owned)
}

fn lookup_key(target: &str) -> Option<&str> {
    let path = target
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_matches('/');

    path.rsplit('/').next().filter(|key| !key.is_empty())
}
