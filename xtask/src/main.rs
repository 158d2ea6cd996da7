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

use std::path::Path;
use std::process::Command;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "x", about = "Development tasks for the datacapture workspace")]
struct Cli {
    #[command(subcommand)]
    sub: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Check formatting and run clippy on every target.
    Lint {
        /// Apply formatting and clippy suggestions instead of failing.
        #[arg(long)]
        fix: bool,
    },
    /// Run unit, integration and doc tests.
    Test {
        /// Show output of passing tests.
        #[arg(long)]
        no_capture: bool,
    },
    /// Run the capture_usage demo binary.
    Demo,
}

fn main() -> ExitCode {
    let cmd = Cli::parse();
    let cargo = match which::which("cargo") {
        Ok(path) => path,
        Err(err) => {
            eprintln!("cannot find cargo in PATH: {err}");
            return ExitCode::FAILURE;
        }
    };

    let steps: Vec<Vec<&str>> = match cmd.sub {
        SubCommand::Lint { fix: false } => vec![
            vec!["fmt", "--all", "--check"],
            vec![
                "clippy",
                "--workspace",
                "--all-targets",
                "--all-features",
                "--",
                "-D",
                "warnings",
            ],
        ],
        SubCommand::Lint { fix: true } => vec![
            vec!["fmt", "--all"],
            vec![
                "clippy",
                "--workspace",
                "--all-targets",
                "--all-features",
                "--fix",
                "--allow-dirty",
                "--allow-staged",
            ],
        ],
        SubCommand::Test { no_capture } => {
            let mut args = vec!["test", "--workspace", "--all-features"];
            if no_capture {
                args.extend(["--", "--nocapture"]);
            }
            vec![args]
        }
        SubCommand::Demo => vec![vec!["run", "-p", "demos", "--bin", "capture_usage"]],
    };

    for args in steps {
        if !run(&cargo, &args) {
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn run(cargo: &Path, args: &[&str]) -> bool {
    println!("$ cargo {}", args.join(" "));
    match Command::new(cargo).args(args).status() {
        Ok(status) => status.success(),
        Err(err) => {
            eprintln!("failed to spawn cargo: {err}");
            false
        }
    }
}
