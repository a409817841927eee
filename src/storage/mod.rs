mod models;
mod postgres;
mod querier;

pub use self::{
    models::{CategoryRow, ListingSettingsRow, PostRow},
    postgres::{DBPool, init_db_from_env, migrate, new_db_poll},
    querier::Querier,
};
