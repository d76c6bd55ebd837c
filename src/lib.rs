//! Planet catalog library behind the Solar System Explorer.
//!
//! The [`data`] module is usable on its own: load a catalog once with
//! [`data::loader::load_file`] and answer queries with
//! [`data::model::Catalog::lookup`].

pub mod data;
