mod command_line_args;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

use apriori::output::{materialize, sort_rules, write_itemsets, CsvRuleWriter};
use apriori::transaction_reader::{into_pairs, TransactionReader, TransactionRow};
use apriori::{mine, MiningError, TracingDiagnostics};
use tracing::{info, Level};

use crate::command_line_args::{parse_args_or_exit, Arguments};

fn mine_apriori(args: &Arguments) -> Result<(), MiningError> {
    info!(input = %args.input_file_path, "mining data set");
    let start = Instant::now();

    let timer = Instant::now();
    let rows = TransactionReader::open(&args.input_file_path, args.format, args.skip_header)?
        .collect::<Result<Vec<TransactionRow>, MiningError>>()?;
    info!(
        rows = rows.len(),
        seconds = timer.elapsed().as_secs_f64(),
        "read input"
    );

    let timer = Instant::now();
    let mut result = mine(&args.config, into_pairs(rows), &mut TracingDiagnostics)?;
    info!(
        itemsets = result.frequent_itemsets.len(),
        rules = result.rules.len(),
        seconds = timer.elapsed().as_secs_f64(),
        "mining finished"
    );

    sort_rules(&mut result.rules, args.sort);
    {
        let output = BufWriter::new(File::create(&args.output_rules_path)?);
        let mut writer = CsvRuleWriter::new(output)?;
        materialize(&result.rules, &result.itemizer, &mut writer)?;
        writer.into_inner().flush()?;
    }

    if let Some(path) = &args.output_itemsets_path {
        let mut output = BufWriter::new(File::create(path)?);
        write_itemsets(&mut output, &result.frequent_itemsets, &result.itemizer)?;
        output.flush()?;
    }

    info!(seconds = start.elapsed().as_secs_f64(), "total runtime");
    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();

    tracing_subscriber::fmt()
        .with_max_level(if arguments.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = mine_apriori(&arguments) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
