#![forbid(unsafe_code)]
#![warn(
    clippy::cognitive_complexity,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::doc_link_with_quotes,
    clippy::doc_markdown,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::float_equality_without_abs,
    keyword_idents,
    clippy::missing_const_for_fn,
    missing_copy_implementations,
    missing_debug_implementations,
    // clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::mod_module_files,
    non_ascii_idents,
    noop_method_call,
    clippy::option_if_let_else,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::semicolon_if_nothing_returned,
    clippy::unseparated_literal_suffix,
    clippy::shadow_unrelated,
    clippy::similar_names,
    clippy::suspicious_operation_groupings,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    clippy::unused_self,
    clippy::use_debug,
    clippy::used_underscore_binding,
    clippy::useless_let_if_seq,
    clippy::wildcard_dependencies,
    clippy::wildcard_imports
)]

//! **Wikibase Action API** is a Rust library for reading from
//! [Wikibase](https://www.mediawiki.org/wiki/Wikibase) instances such as
//! [Wikidata](https://www.wikidata.org) through the
//! [Action API](https://www.mediawiki.org/wiki/Wikibase/API) (`api.php`).
//! A [`Session`] logs in and out, calls API actions, and fetches items and
//! properties, which are decoded into [`Item`] and [`Property`] values.

pub mod aliases;
pub mod config;
pub mod data_type;
pub mod data_value;
pub mod entity;
pub mod entity_id;
pub mod error;
pub mod fetch;
pub mod item;
pub mod language;
pub mod language_strings;
pub mod prelude;
pub mod property;
pub mod reference;
pub mod request_params;
pub mod search;
pub mod session;
pub mod session_builder;
pub mod sitelink;
pub mod sitelinks;
pub mod snak;
pub mod statement;
pub mod statement_rank;
pub mod warning;

pub use aliases::Aliases;
pub use config::Config;
pub use data_type::DataType;
pub use data_value::{DataValue, TimePrecision};
pub use entity::Entity;
pub use entity_id::{EntityId, EntityType};
pub use error::{MissingEntity, TransportError, WikibaseError};
pub use fetch::{FetchOptions, ItemQuery};
pub use item::Item;
pub use language::Language;
pub use language_strings::LanguageStrings;
pub use property::Property;
pub use reference::Reference;
pub use request_params::RequestParams;
pub use search::{Search, SearchLimit, SearchResult};
pub use session::{Assertion, Session, NO_PARAMS};
pub use session_builder::SessionBuilder;
pub use sitelink::Sitelink;
pub use sitelinks::Sitelinks;
pub use snak::{Snak, SnakValue};
pub use statement::Statement;
pub use statement_rank::StatementRank;
pub use warning::ApiWarning;
