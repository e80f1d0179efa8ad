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

//! Blocking facade over `aerospike-core`. Every call drives the async command to completion
//! on the calling thread via `futures::executor::block_on`; the wire codec, cluster map and
//! retry policy are shared unmodified with the async client.

mod client;

pub use client::Client;

pub use aerospike_core::errors::{Error, Result};
pub use aerospike_core::operations;
pub use aerospike_core::{
    as_bin, as_blob, as_geo, as_key, as_list, as_map, as_val, expressions, BatchPolicy, BatchRead,
    Bin, Bins, ClientPolicy, CollectionIndexType, CommitLevel, Concurrency, ConsistencyLevel,
    Expiration, GenerationPolicy, IndexTask, IndexType, Key, Node, Policy, Priority, QueryPolicy,
    ReadPolicy, Record, RecordExistsAction, Recordset, RegisterTask, ResultCode, ScanPolicy,
    Statement, Task, ToHosts, UDFLang, User, Value, WritePolicy,
};
