use std::{collections::HashMap, env};

use serde::Deserialize;

use crate::{
    content::{DEFAULT_BASE_PATH, FallbackChains, Locale, RouteAliases},
    error::Result,
};

const DEFAULT_LISTEN: &str = "0.0.0.0:3000";

/// 站点配置
///
/// 从 `SITEFEED_CONFIG` 指向的 TOML 文件读取，文件不存在时全部使用默认值：
///
/// ```toml
/// listen = "0.0.0.0:3000"
///
/// [fallback]
/// en = ["jp", "zh"]
///
/// [routes]
/// base = "/services/"
///
/// [routes.aliases]
/// market-entry = "TaiwanService"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// 监听地址，`SITEFEED_LISTEN` 优先
    pub listen: Option<String>,
    pub fallback: FallbackConfig,
    pub routes: RoutesConfig,
}

/// 每种请求语言之后的回退顺序，未填写的语言使用默认顺序
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub jp: Option<Vec<Locale>>,
    pub zh: Option<Vec<Locale>>,
    pub en: Option<Vec<Locale>>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub base: String,
    pub aliases: HashMap<String, String>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_PATH.to_string(),
            aliases: HashMap::new(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 读取 `SITEFEED_CONFIG` 指定的配置文件
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var("SITEFEED_CONFIG") {
            Ok(path) => {
                tracing::info!(%path, "loading site config");
                Self::from_toml(&std::fs::read_to_string(path)?)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(listen) = env::var("SITEFEED_LISTEN") {
            config.listen = Some(listen);
        }

        Ok(config)
    }

    pub fn listen(&self) -> &str {
        self.listen.as_deref().unwrap_or(DEFAULT_LISTEN)
    }

    pub fn fallback_chains(&self) -> FallbackChains {
        FallbackChains::new(
            self.fallback.jp.as_deref(),
            self.fallback.zh.as_deref(),
            self.fallback.en.as_deref(),
        )
    }

    pub fn route_aliases(&self) -> RouteAliases {
        RouteAliases::new(&self.routes.base, self.routes.aliases.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml("").expect("解析空配置失败");

        assert_eq!(config.listen(), "0.0.0.0:3000");
        assert_eq!(config.fallback_chains(), FallbackChains::default());
        assert_eq!(config.route_aliases().base_path(), "/services/");
        assert_eq!(
            config.route_aliases().resolve("market-entry").unwrap(),
            "TaiwanService"
        );
    }

    #[test]
    fn test_parse_full_config() {
        let config = SiteConfig::from_toml(
            r#"
            listen = "127.0.0.1:8080"

            [fallback]
            en = ["jp", "zh"]

            [routes]
            base = "/solutions"

            [routes.aliases]
            "company-setup" = "SetupService"
            "#,
        )
        .expect("解析配置失败");

        assert_eq!(config.listen(), "127.0.0.1:8080");
        assert_eq!(
            config.fallback_chains().chain(Locale::En),
            &[Locale::En, Locale::Jp, Locale::Zh]
        );

        let aliases = config.route_aliases();
        assert_eq!(aliases.base_path(), "/solutions/");
        assert_eq!(aliases.resolve("company-setup").unwrap(), "SetupService");
        assert_eq!(aliases.resolve("market-entry").unwrap(), "TaiwanService");
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        let result = SiteConfig::from_toml(
            r#"
            [fallback]
            en = ["fr"]
            "#,
        );
        assert!(result.is_err());
    }
}
