mod feed;
mod item;
mod locale;
mod localized;
mod route;
mod view;

pub use self::{
    feed::{assemble, assemble_feed, eligible_pool},
    item::{Category, Channel, ContentItem, ListStrategy, ListingSettings, UnknownChannel},
    locale::{DisplayLocale, Locale, normalize_for_content, normalize_for_display},
    localized::{Blank, FallbackChains, LocalizedField, RichText, resolve_field},
    route::{DEFAULT_BASE_PATH, RouteAliases, RouteError, resolve_route},
    view::{ResolvedCategory, ResolvedItem},
};
