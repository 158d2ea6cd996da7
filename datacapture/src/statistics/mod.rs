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

//! Range-counting queries over a frozen snapshot of captured values.
//!
//! A [`Statistics`] is produced by
//! [`DataCapture::build_statistics`](crate::capture::DataCapture::build_statistics)
//! and owns a copy of the captured values and their frequency table. It has no
//! mutating methods, so answers never change after it is built.
//!
//! | query                  | counts values `v` with  | backed by       |
//! |------------------------|-------------------------|-----------------|
//! | `less_than(x)`         | `v < x`                 | value scan      |
//! | `between(lo, hi)`      | `lo <= v <= hi`         | value scan      |
//! | `greater_or_equal(x)`  | `v >= x`                | frequency table |
//! | `greater_than(x)`      | `v > x`                 | frequency table |
//! | `count(x)`             | `v == x`                | frequency table |
//!
//! # Usage
//!
//! ```rust
//! # use datacapture::capture::DataCapture;
//! let mut capture = DataCapture::new();
//! capture.add_all([3, 9, 3, 4, 6]).unwrap();
//! let stats = capture.build_statistics();
//!
//! capture.add(1).unwrap();
//! assert_eq!(stats.n(), 5);
//! assert_eq!(stats.less_than(4), 2);
//! assert_eq!(stats.greater_than(4), 2);
//! assert_eq!(stats.between(7, 2), 0);
//! ```

mod view;

pub use self::view::Statistics;
