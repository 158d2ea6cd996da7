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

//! Example capturing a small stream and querying a snapshot of it

use datacapture::capture::DataCapture;
use datacapture::error::Error;
use log::info;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    println!("=== Data Capture Example ===\n");

    println!("1. Capture values:");
    let mut capture = DataCapture::new();
    for value in [3, 9, 3, 4, 6] {
        capture.add(value)?;
    }
    println!("   Captured: {:?}", capture.values());
    println!();

    println!("2. Query a snapshot:");
    let stats = capture.build_statistics();
    println!("   less_than(4)        = {}", stats.less_than(4));
    println!("   between(3, 6)       = {}", stats.between(3, 6));
    println!("   greater_or_equal(4) = {}", stats.greater_or_equal(4));
    println!("   greater_than(4)     = {}", stats.greater_than(4));
    println!();

    println!("3. Values outside [1, {}] are rejected:", capture.domain_max());
    for value in [0, 1001] {
        match capture.add(value) {
            Ok(()) => println!("   add({value}) accepted"),
            Err(err) => println!("   add({value}) rejected: {err}"),
        }
    }
    println!();

    println!("4. Snapshots do not observe later captures:");
    capture.add_all([1, 2, 1000])?;
    let latest = capture.build_statistics();
    println!("   first snapshot n = {}", stats.n());
    println!("   latest snapshot n = {}", latest.n());

    info!("finished with {} values captured", capture.n());
    Ok(())
}
