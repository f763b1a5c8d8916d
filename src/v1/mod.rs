/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod identifiers;
pub mod iterator;
mod macros;
mod oauth;
pub mod parameters;
mod parsers;
mod queries;
pub mod requesters;
pub mod tweet;
pub mod user;
pub mod validators;

pub use api::*;
pub use client::*;
pub use config::*;
pub use errors::*;
pub use identifiers::*;
pub use iterator::*;
pub use oauth::Creds;
pub use parameters::*;
pub use requesters::*;
pub use tweet::*;
pub use user::*;
pub use validators::*;
