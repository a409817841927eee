use serde::{Deserialize, Serialize};

use super::Locale;

/// 富文本块序列，块结构由 CMS 决定，这里只做透传
pub type RichText = Vec<serde_json::Value>;

/// 按语言区分的字段值。
///
/// 任意子集都可能缺失，包括全部缺失。`zh-cn` 仅在反序列化时读取，
/// 并入 `zh`；两者同时存在时以 `zh` 为准。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    bound(deserialize = "T: Deserialize<'de>"),
    from = "StoredLocalizedField<T>"
)]
pub struct LocalizedField<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jp: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zh: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<T>,
}

/// CMS 中存储的原始形式，`zh-cn` 单独占一个位置
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct StoredLocalizedField<T> {
    #[serde(default)]
    jp: Option<T>,
    #[serde(default)]
    zh: Option<T>,
    #[serde(default, rename = "zh-cn")]
    zh_cn: Option<T>,
    #[serde(default)]
    en: Option<T>,
}

impl<T> From<StoredLocalizedField<T>> for LocalizedField<T> {
    fn from(stored: StoredLocalizedField<T>) -> Self {
        Self {
            jp: stored.jp,
            zh: stored.zh.or(stored.zh_cn),
            en: stored.en,
        }
    }
}

impl<T> Default for LocalizedField<T> {
    fn default() -> Self {
        Self {
            jp: None,
            zh: None,
            en: None,
        }
    }
}

impl<T> LocalizedField<T> {
    pub fn get(&self, locale: Locale) -> Option<&T> {
        match locale {
            Locale::Jp => self.jp.as_ref(),
            Locale::Zh => self.zh.as_ref(),
            Locale::En => self.en.as_ref(),
        }
    }

    /// 设置某一语言的值，主要用于构造测试数据
    pub fn with(mut self, locale: Locale, value: T) -> Self {
        match locale {
            Locale::Jp => self.jp = Some(value),
            Locale::Zh => self.zh = Some(value),
            Locale::En => self.en = Some(value),
        }
        self
    }

    /// 遍历所有已定义的 `(语言, 值)`，按规范顺序
    pub fn variants(&self) -> impl Iterator<Item = (Locale, &T)> {
        Locale::ALL
            .into_iter()
            .filter_map(move |locale| self.get(locale).map(|v| (locale, v)))
    }
}

/// 判断字段值是否为"空"，空值在回退时视同缺失
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// 每种请求语言对应的回退顺序。
///
/// 每条链都以请求语言开头、不含重复，并且包含全部三种语言；
/// 通过 [`FallbackChains::new`] 传入的配置会被补全成这种形式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChains {
    jp: [Locale; 3],
    zh: [Locale; 3],
    en: [Locale; 3],
}

impl Default for FallbackChains {
    /// `jp: [jp, zh, en]`，`zh: [zh, jp, en]`，`en: [en, zh, jp]`
    fn default() -> Self {
        Self {
            jp: [Locale::Jp, Locale::Zh, Locale::En],
            zh: [Locale::Zh, Locale::Jp, Locale::En],
            en: [Locale::En, Locale::Zh, Locale::Jp],
        }
    }
}

impl FallbackChains {
    /// 根据部署配置构建回退链，未配置的语言使用默认顺序
    pub fn new(jp: Option<&[Locale]>, zh: Option<&[Locale]>, en: Option<&[Locale]>) -> Self {
        let defaults = Self::default();

        Self {
            jp: jp.map_or(defaults.jp, |c| complete_chain(Locale::Jp, c)),
            zh: zh.map_or(defaults.zh, |c| complete_chain(Locale::Zh, c)),
            en: en.map_or(defaults.en, |c| complete_chain(Locale::En, c)),
        }
    }

    pub fn chain(&self, requested: Locale) -> &[Locale; 3] {
        match requested {
            Locale::Jp => &self.jp,
            Locale::Zh => &self.zh,
            Locale::En => &self.en,
        }
    }

    /// 按回退链返回第一个已定义且非空的值
    pub fn resolve<'a, T>(&self, field: &'a LocalizedField<T>, requested: Locale) -> Option<&'a T>
    where
        T: Blank,
    {
        self.chain(requested)
            .iter()
            .filter_map(|locale| field.get(*locale))
            .find(|value| !value.is_blank())
    }

    /// 同 [`FallbackChains::resolve`]，缺失时返回默认值（空字符串、空数组）
    pub fn resolve_or_default<T>(&self, field: &LocalizedField<T>, requested: Locale) -> T
    where
        T: Blank + Clone + Default,
    {
        self.resolve(field, requested).cloned().unwrap_or_default()
    }
}

/// 使用默认回退链解析字段
///
/// ```
/// use sitefeed::content::{resolve_field, Locale, LocalizedField};
///
/// let title = LocalizedField::default()
///     .with(Locale::Jp, "会社概要".to_string())
///     .with(Locale::En, "".to_string());
///
/// assert_eq!(resolve_field(&title, Locale::En).map(String::as_str), Some("会社概要"));
/// ```
pub fn resolve_field<T: Blank>(field: &LocalizedField<T>, requested: Locale) -> Option<&T> {
    FallbackChains::default().resolve(field, requested)
}

fn complete_chain(requested: Locale, configured: &[Locale]) -> [Locale; 3] {
    let mut chain = Vec::with_capacity(3);
    chain.push(requested);

    for locale in configured.iter().chain(Locale::ALL.iter()) {
        if !chain.contains(locale) {
            chain.push(*locale);
        }
    }

    [chain[0], chain[1], chain[2]]
}
