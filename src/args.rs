use wallet::Money;

use std::env;

use anyhow::{Context, Result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),
}

/// Walk-through parameters, all positional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughArgs {
    pub phone: String,
    pub deposit: Money,
    pub amount: Money,
    pub category: String,
}

const USAGE: &str = "usage: wallet-ledger <phone> <deposit> <amount> <category>";

/// Parses `<phone> <deposit> <amount> <category>` from the process arguments
pub fn parse_input_args() -> Result<WalkthroughArgs> {
    parse_args(env::args().skip(1))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<WalkthroughArgs> {
    let args: Vec<String> = args.into_iter().collect();

    let [phone, deposit, amount, category] =
        <[String; 4]>::try_from(args).map_err(|args| {
            InputArgsError::Parse(format!("expected 4 arguments, got {}. {USAGE}", args.len()))
        })?;

    let deposit = parse_money(&deposit).context("Invalid deposit")?;
    let amount = parse_money(&amount).context("Invalid payment amount")?;

    Ok(WalkthroughArgs {
        phone,
        deposit,
        amount,
        category,
    })
}

fn parse_money(value: &str) -> Result<Money> {
    let minor_units: i64 = value.trim().parse().with_context(|| {
        InputArgsError::Parse(format!("not a whole number of minor units: {value:?}"))
    })?;

    Ok(Money(minor_units))
}
