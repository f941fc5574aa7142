// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;
use std::io;
use std::process;

use apriori::output::RuleOrder;
use apriori::transaction_reader::InputFormat;
use apriori::MiningConfig;
use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};

pub struct Arguments {
    pub input_file_path: String,
    pub output_rules_path: String,
    pub output_itemsets_path: Option<String>,
    pub format: InputFormat,
    pub skip_header: bool,
    pub sort: RuleOrder,
    pub verbose: bool,
    pub config: MiningConfig,
}

pub fn parse_args_or_exit() -> Arguments {
    let mut input_file_path = String::new();
    let mut output_rules_path = String::new();
    let mut output_itemsets_path: Option<String> = None;
    let mut format = InputFormat::Basket;
    let mut skip_header = false;
    let mut sort = RuleOrder::Generated;
    let mut verbose = false;
    let mut min_support: f64 = 0.0;
    let mut min_confidence: f64 = 0.0;
    let mut min_lift: Option<f64> = None;
    let mut max_level: Option<usize> = None;
    let mut max_candidates: Option<usize> = None;

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Level-wise Apriori frequent itemset and association rule miner.");

        parser
            .refer(&mut input_file_path)
            .add_option(&["--input"], Store, "Input dataset in CSV format.")
            .metavar("file_path")
            .required();

        parser
            .refer(&mut output_rules_path)
            .add_option(
                &["--output"],
                Store,
                "File path in which to store output rules. Format: index, antecedent, \
                 consequent, support, confidence, lift, conviction.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut output_itemsets_path)
            .add_option(
                &["--itemsets"],
                StoreOption,
                "File path in which to store frequent itemsets. \
                 Format: itemset, support, level.",
            )
            .metavar("file_path");

        parser
            .refer(&mut min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in range [0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range [0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut min_lift)
            .add_option(
                &["--min-lift"],
                StoreOption,
                "Minimum rule lift threshold, in range [0,∞).",
            )
            .metavar("threshold");

        parser
            .refer(&mut format)
            .add_option(
                &["--format"],
                Store,
                "Input layout: 'basket' (one transaction of comma separated items \
                 per line) or 'pairs' (one transaction_id,item pair per line).",
            )
            .metavar("basket|pairs");

        parser.refer(&mut skip_header).add_option(
            &["--skip-header"],
            StoreTrue,
            "Ignore the first line of the input.",
        );

        parser
            .refer(&mut max_level)
            .add_option(
                &["--max-level"],
                StoreOption,
                "Largest itemset size to search for.",
            )
            .metavar("size");

        parser
            .refer(&mut max_candidates)
            .add_option(
                &["--max-candidates"],
                StoreOption,
                "Abort if any level has more candidate itemsets than this.",
            )
            .metavar("count");

        parser
            .refer(&mut sort)
            .add_option(
                &["--sort"],
                Store,
                "Rule output order: generated, confidence, lift or support.",
            )
            .metavar("order");

        parser
            .refer(&mut verbose)
            .add_option(&["-v", "--verbose"], StoreTrue, "Log per-level progress.");

        if env::args().count() == 1 {
            let _ = parser.print_help("Usage:", &mut io::stderr());
            process::exit(1);
        }

        if let Err(err) = parser.parse_args() {
            process::exit(err);
        }
    }

    let config = MiningConfig {
        min_support,
        min_confidence,
        min_lift,
        max_level,
        max_candidates,
    };
    if let Err(err) = config.validate() {
        eprintln!("{}", err);
        process::exit(1);
    }

    Arguments {
        input_file_path,
        output_rules_path,
        output_itemsets_path,
        format,
        skip_header,
        sort,
        verbose,
        config,
    }
}
