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

//! Append-only capture of small positive integers.
//!
//! [`DataCapture`] records every value in arrival order and keeps a dense
//! frequency table over the domain `[1, domain_max]` in lock-step. Values
//! outside the domain are rejected with [`ErrorKind::DomainViolation`].
//!
//! # Usage
//!
//! ```rust
//! # use datacapture::capture::DataCapture;
//! let mut capture = DataCapture::new();
//! for value in [3, 9, 3, 4, 6] {
//!     capture.add(value).unwrap();
//! }
//! assert!(capture.add(0).is_err());
//!
//! let stats = capture.build_statistics();
//! assert_eq!(stats.less_than(4), 2);
//! assert_eq!(stats.between(3, 6), 4);
//! assert_eq!(stats.greater_or_equal(4), 3);
//! ```
//!
//! [`ErrorKind::DomainViolation`]: crate::error::ErrorKind::DomainViolation

mod collector;
mod frequency;

pub use self::collector::DataCapture;
pub(crate) use self::frequency::FrequencyTable;

/// Default upper bound of the capture domain.
pub const DEFAULT_DOMAIN_MAX: u32 = 1000;
/// Minimum upper bound of the capture domain.
pub const MIN_DOMAIN_MAX: u32 = 1;
/// Maximum upper bound of the capture domain.
pub const MAX_DOMAIN_MAX: u32 = 1 << 24;
