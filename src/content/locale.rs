use std::fmt;

use serde::{Deserialize, Serialize};

/// 内容查询使用的规范语言。
///
/// 站点只维护三种语言的内容，`jp` 为主要撰写语言。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Jp,
    Zh,
    En,
}

impl Locale {
    /// 规范顺序，回退链补全时按此顺序追加
    pub const ALL: [Locale; 3] = [Locale::Jp, Locale::Zh, Locale::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Jp => "jp",
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 链接生成使用的语言标签。
///
/// 与 [`Locale`] 的区别在于保留了 `zh-cn`：页面链接需要区分简体入口，
/// 而内容查询时它与 `zh` 等价。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisplayLocale {
    #[serde(rename = "jp")]
    Jp,
    #[serde(rename = "zh")]
    Zh,
    #[serde(rename = "zh-cn")]
    ZhCn,
    #[serde(rename = "en")]
    En,
}

impl DisplayLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayLocale::Jp => "jp",
            DisplayLocale::Zh => "zh",
            DisplayLocale::ZhCn => "zh-cn",
            DisplayLocale::En => "en",
        }
    }

    /// 折叠为内容查询使用的 [`Locale`]
    pub fn content_locale(&self) -> Locale {
        match self {
            DisplayLocale::Jp => Locale::Jp,
            DisplayLocale::Zh | DisplayLocale::ZhCn => Locale::Zh,
            DisplayLocale::En => Locale::En,
        }
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DisplayLocale> for Locale {
    fn from(value: DisplayLocale) -> Self {
        value.content_locale()
    }
}

/// 将任意语言参数规范化为链接标签
///
/// 大小写不敏感，`_` 视为 `-`。无法识别的输入（包括空字符串）一律回落到 `jp`，
/// 没有语言参数的页面依赖这一行为。
///
/// ```
/// use sitefeed::content::{normalize_for_display, DisplayLocale};
///
/// assert_eq!(normalize_for_display("zh_CN"), DisplayLocale::ZhCn);
/// assert_eq!(normalize_for_display("fr"), DisplayLocale::Jp);
/// ```
pub fn normalize_for_display(input: &str) -> DisplayLocale {
    let tag = input.trim().replace('_', "-").to_ascii_lowercase();

    match tag.as_str() {
        "jp" | "ja" | "ja-jp" => DisplayLocale::Jp,
        "zh" | "zh-tw" | "zh-hant" | "zh-hk" | "tw" => DisplayLocale::Zh,
        "zh-cn" | "zh-hans" | "cn" | "hans" => DisplayLocale::ZhCn,
        "en" | "en-us" | "en-gb" => DisplayLocale::En,
        _ => DisplayLocale::Jp,
    }
}

/// 将任意语言参数规范化为内容查询语言，`zh-cn` 始终折叠为 `zh`
pub fn normalize_for_content(input: &str) -> Locale {
    normalize_for_display(input).content_locale()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_collapses_simplified_chinese() {
        assert_eq!(normalize_for_content("zh-cn"), Locale::Zh);
        assert_eq!(normalize_for_content("zh"), Locale::Zh);
        assert_eq!(normalize_for_content("zh-hans"), Locale::Zh);
        assert_eq!(normalize_for_content("cn"), Locale::Zh);
        assert_eq!(normalize_for_content("hans"), Locale::Zh);
    }

    #[test]
    fn test_japanese_aliases() {
        assert_eq!(normalize_for_content("ja"), Locale::Jp);
        assert_eq!(normalize_for_content("ja-JP"), Locale::Jp);
        assert_eq!(normalize_for_content("JP"), Locale::Jp);
        assert_eq!(normalize_for_content("ja_jp"), Locale::Jp);
    }

    #[test]
    fn test_unknown_defaults_to_jp() {
        assert_eq!(normalize_for_content("bogus"), Locale::Jp);
        assert_eq!(normalize_for_content(""), Locale::Jp);
        assert_eq!(normalize_for_content("   "), Locale::Jp);
        assert_eq!(normalize_for_display("de-DE"), DisplayLocale::Jp);
    }

    #[test]
    fn test_display_keeps_zh_cn() {
        assert_eq!(normalize_for_display("zh-CN"), DisplayLocale::ZhCn);
        assert_eq!(normalize_for_display(" Hans "), DisplayLocale::ZhCn);
        assert_eq!(normalize_for_display("zh-TW"), DisplayLocale::Zh);
        assert_eq!(normalize_for_display("en-US"), DisplayLocale::En);
        assert_eq!(DisplayLocale::ZhCn.as_str(), "zh-cn");
        assert_eq!(DisplayLocale::ZhCn.content_locale(), Locale::Zh);
    }

    #[test]
    fn test_normalize_is_pure() {
        for input in ["ja", "zh-cn", "EN", "bogus", ""] {
            assert_eq!(normalize_for_content(input), normalize_for_content(input));
            assert_eq!(normalize_for_display(input), normalize_for_display(input));
        }
    }

    #[test]
    fn test_locale_serde_tags() {
        let json = serde_json::to_string(&DisplayLocale::ZhCn).expect("序列化失败");
        assert_eq!(json, r#""zh-cn""#);

        let locale: Locale = serde_json::from_str(r#""en""#).expect("反序列化失败");
        assert_eq!(locale, Locale::En);
    }
}
