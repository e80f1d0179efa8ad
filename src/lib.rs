// Copyright 2015-2020 Aerospike, Inc.
//
// Portions may be licensed to Aerospike, Inc. under one or more contributor
// license agreements.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

//! A pure-Rust client for the Aerospike NoSQL database.
//!
//! This crate is a thin feature-gated facade over the workspace's implementation crates:
//!
//! - `aerospike-core` (feature `async`, on by default) implements the wire codec, cluster map
//!   and command engine on top of an async runtime selected via `rt-tokio` / `rt-async-std`.
//! - `aerospike-sync` (feature `sync`) drives the same core client to completion on the
//!   calling thread, for applications that do not want to depend on an async runtime.
//! - `aerospike-macro` supplies the `#[aerospike_macro::test]` attribute used by the
//!   integration test suite to run async tests under whichever runtime is active.
//!
//! Enable exactly one of `async` or `sync` (the `default` feature set enables `async` with
//! `rt-tokio`). See `ClientPolicy` and `Client` for the primary entry points.

#[cfg(feature = "async")]
pub use aerospike_core::*;

#[cfg(feature = "sync")]
pub use aerospike_sync::*;
