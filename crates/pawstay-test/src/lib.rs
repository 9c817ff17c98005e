//! Pawstay booking service - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `pawstay_test::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    pub use pawstay_core::*;
    pub use pawstay_service::*;

    pub mod db {
        pub use pawstay_db::db::*;

        pub mod connection {
            pub use pawstay_app::db_handler::DbProviderHandler;
            pub use pawstay_db::db::connection::*;
        }
    }

    pub mod model {
        pub use pawstay_db::model::*;
    }

    pub mod config {
        pub use pawstay_app::config::ConfigHandler;
        pub use pawstay_core::config::*;
    }
}

pub mod app {
    pub use pawstay_app::*;

    pub mod api {
        pub use pawstay_app::app::api::*;
    }
}
