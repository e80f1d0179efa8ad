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

//! Flags controlling regular expression matching in `regex_compare` filter expressions.
//! Values match the server's regcomp-style flag bits and may be combined with bitwise-or.

/// Bit flags passed to `regex_compare` to control matching behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegexFlag {
    /// Default behavior.
    None = 0,
    /// Case insensitive matching.
    ICase = 1,
    /// Newlines are matched by `.`.
    Newline = 2,
    /// Use POSIX extended regular expression syntax.
    Extended = 4,
    /// `^` and `$` match the start/end of each line, not just the whole string.
    Multiline = 8,
}
