// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Capture a stream of small positive integers and answer range-counting
//! queries over point-in-time snapshots.
//!
//! - [`capture`]: the append-only [`DataCapture`](capture::DataCapture)
//!   collector with its fixed-domain frequency table.
//! - [`statistics`]: the immutable [`Statistics`](statistics::Statistics)
//!   snapshot answering less-than, greater-or-equal and between queries.
//! - [`error`]: the [`Error`](error::Error) returned when a value falls
//!   outside the capture domain.

pub mod capture;
pub mod error;
pub mod statistics;
