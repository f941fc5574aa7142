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

use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::str::FromStr;

use crate::error::MiningError;

/// Layout of the transaction file.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputFormat {
    /// One transaction per line, items separated by commas. The transaction
    /// id is the line number.
    Basket,
    /// One `transaction_id,item` pair per line.
    Pairs,
}

impl FromStr for InputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<InputFormat, String> {
        match s {
            "basket" => Ok(InputFormat::Basket),
            "pairs" => Ok(InputFormat::Pairs),
            _ => Err(format!("unknown input format '{}', expected basket or pairs", s)),
        }
    }
}

/// The items read for one transaction id from one line of input.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TransactionRow {
    pub id: String,
    pub labels: Vec<String>,
}

pub struct TransactionReader<R> {
    reader: R,
    format: InputFormat,
    line_number: usize,
}

impl TransactionReader<BufReader<File>> {
    pub fn open(
        path: &str,
        format: InputFormat,
        skip_header: bool,
    ) -> Result<TransactionReader<BufReader<File>>, MiningError> {
        let file = File::open(path)?;
        let mut reader = TransactionReader::new(BufReader::new(file), format);
        if skip_header {
            reader.skip_line()?;
        }
        Ok(reader)
    }
}

impl<R: BufRead> TransactionReader<R> {
    pub fn new(reader: R, format: InputFormat) -> TransactionReader<R> {
        TransactionReader {
            reader,
            format,
            line_number: 0,
        }
    }

    fn skip_line(&mut self) -> Result<(), MiningError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? > 0 {
            self.line_number += 1;
        }
        Ok(())
    }

    fn parse(&self, line: &str) -> Result<Option<TransactionRow>, MiningError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        match self.format {
            InputFormat::Basket => {
                let labels: Vec<String> = line
                    .split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                if labels.is_empty() {
                    return Ok(None);
                }
                Ok(Some(TransactionRow {
                    id: self.line_number.to_string(),
                    labels,
                }))
            }
            InputFormat::Pairs => {
                let mut fields = line.splitn(2, ',').map(|s| s.trim());
                let id = fields.next().unwrap_or("");
                let label = fields.next().ok_or_else(|| MiningError::MalformedRecord {
                    line: self.line_number,
                    reason: "expected transaction_id,item".to_owned(),
                })?;
                if id.is_empty() || label.is_empty() {
                    return Err(MiningError::MalformedRecord {
                        line: self.line_number,
                        reason: "empty transaction id or item".to_owned(),
                    });
                }
                Ok(Some(TransactionRow {
                    id: id.to_owned(),
                    labels: vec![label.to_owned()],
                }))
            }
        }
    }
}

impl<R: BufRead> Iterator for TransactionReader<R> {
    type Item = Result<TransactionRow, MiningError>;
    fn next(&mut self) -> Option<Result<TransactionRow, MiningError>> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(err.into())),
            }
            self.line_number += 1;
            match self.parse(&line) {
                Ok(Some(row)) => return Some(Ok(row)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Flattens rows into the `(transaction_id, item)` relation the miner takes.
pub fn into_pairs(rows: Vec<TransactionRow>) -> Vec<(String, String)> {
    rows.into_iter()
        .flat_map(|row| {
            let id = row.id;
            row.labels.into_iter().map(move |label| (id.clone(), label))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{into_pairs, InputFormat, TransactionReader, TransactionRow};
    use crate::error::MiningError;
    use std::io::Cursor;

    fn read(input: &str, format: InputFormat) -> Result<Vec<TransactionRow>, MiningError> {
        TransactionReader::new(Cursor::new(input), format).collect()
    }

    #[test]
    fn test_basket_format() {
        let rows = read("beer, diapers,chips\n\nbeer,,\n", InputFormat::Basket).unwrap();
        assert_eq!(
            rows,
            vec![
                TransactionRow {
                    id: "1".to_owned(),
                    labels: vec!["beer".to_owned(), "diapers".to_owned(), "chips".to_owned()],
                },
                TransactionRow {
                    id: "3".to_owned(),
                    labels: vec!["beer".to_owned()],
                },
            ]
        );
    }

    #[test]
    fn test_pairs_format() {
        let rows = read("t1,beer\nt1, diapers \nt2,beer\n", InputFormat::Pairs).unwrap();
        let pairs = into_pairs(rows);
        assert_eq!(
            pairs,
            vec![
                ("t1".to_owned(), "beer".to_owned()),
                ("t1".to_owned(), "diapers".to_owned()),
                ("t2".to_owned(), "beer".to_owned()),
            ]
        );
    }

    #[test]
    fn test_pairs_item_may_contain_commas() {
        let rows = read("7,salt, coarse\n", InputFormat::Pairs).unwrap();
        assert_eq!(rows[0].labels, vec!["salt, coarse".to_owned()]);
    }

    #[test]
    fn test_malformed_pair() {
        match read("t1,beer\nt2\n", InputFormat::Pairs) {
            Err(MiningError::MalformedRecord { line: 2, .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
        match read(",beer\n", InputFormat::Pairs) {
            Err(MiningError::MalformedRecord { line: 1, .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_input_format_from_str() {
        assert_eq!("pairs".parse::<InputFormat>(), Ok(InputFormat::Pairs));
        assert_eq!("basket".parse::<InputFormat>(), Ok(InputFormat::Basket));
        assert!("tsv".parse::<InputFormat>().is_err());
    }
}
