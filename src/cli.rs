// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print pretty JSON instead of a table")
        .action(ArgAction::SetTrue)
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .help("Print one JSON object per line")
        .action(ArgAction::SetTrue)
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month cursor (defaults to the current month)")
}

pub fn build_cli() -> Command {
    Command::new("ledgerview")
        .version(crate_version!())
        .about("Dashboard client for a remote personal-finance service")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .global(true)
                .help("Base URL of the finance API (or LEDGERVIEW_API_URL)"),
        )
        .subcommand(
            Command::new("login")
                .about("Obtain and store a session token")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(Command::new("logout").about("Clear the stored session token"))
        .subcommand(
            Command::new("dashboard")
                .about("Monthly KPIs, 6-month series, category breakdown, upcoming dues")
                .arg(month_arg())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("list")
                        .arg(month_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("category").long("category").value_name("CATEGORY_ID"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense", "transfer"])
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("delete").arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category").about("Categories").subcommand(
                Command::new("list")
                    .arg(
                        Arg::new("all")
                            .long("all")
                            .help("Include archived categories")
                            .action(ArgAction::SetTrue),
                    )
                    .arg(json_flag())
                    .arg(jsonl_flag()),
            ),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(Command::new("list").arg(json_flag()).arg(jsonl_flag())),
        )
        .subcommand(
            Command::new("recurring")
                .about("Recurring payments")
                .subcommand(Command::new("list").arg(json_flag()).arg(jsonl_flag()))
                .subcommand(
                    Command::new("projection")
                        .about("Expected monthly totals over the next 6 months")
                        .arg(month_arg())
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("upcoming")
                        .about("Payments due within the next 14 days (nearest 10)")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Exports")
                .subcommand(
                    Command::new("csv")
                        .about("Write fetched transactions to a local CSV file")
                        .arg(Arg::new("out").long("out").value_name("FILE").required(true)),
                )
                .subcommand(
                    Command::new("report")
                        .about("Download a server-generated report")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_parser(["pdf", "xlsx"])
                                .default_value("pdf"),
                        )
                        .arg(Arg::new("out").long("out").value_name("FILE").required(true)),
                ),
        )
}
