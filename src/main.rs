mod args;
mod config;

use wallet::ids::AccountId;
use wallet::services::WalletService;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    config::configure_app()?;

    log::debug!("Application configured. Beginning walk-through...");

    let args = args::parse_input_args()?;
    log::debug!("Parsed input args: {args:?}");

    let mut wallet = wallet::build_wallet_service();

    let account_id = run_walkthrough(&mut wallet, &args)?;

    log::debug!("Walk-through complete. Beginning report...");

    report_to_std_out(&wallet, account_id)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Registers and funds an account, pays, saves the payment as a favorite, pays again from
/// the favorite and finally rejects the first payment.
fn run_walkthrough(
    wallet: &mut WalletService,
    args: &args::WalkthroughArgs,
) -> Result<AccountId> {
    let account = wallet
        .register_account(args.phone.as_str())
        .context("Couldn't register account")?;

    wallet
        .deposit(account.id, args.deposit)
        .context("Couldn't deposit")?;

    let payment = wallet
        .pay(account.id, args.amount, args.category.as_str())
        .context("Couldn't pay")?;

    let favorite = wallet
        .favorite_payment(&payment.id, format!("{} again", args.category))
        .context("Couldn't save favorite")?;

    if let Err(e) = wallet.pay_from_favorite(&favorite.id) {
        log::warn!("Couldn't pay from favorite {}: {e}", favorite.id);
    }

    wallet
        .reject(&payment.id)
        .context("Couldn't reject payment")?;

    Ok(account.id)
}

/// Writes the account followed by its payments and favorites, one JSON document per line
fn report_to_std_out(wallet: &WalletService, account_id: AccountId) -> Result<()> {
    let account = wallet.find_account_by_id(account_id)?;
    println!("{}", serde_json::to_string(account)?);

    for payment in wallet.payments_for_account(account_id)? {
        println!("{}", serde_json::to_string(payment)?);
    }

    for favorite in wallet.favorites_for_account(account_id)? {
        println!("{}", serde_json::to_string(favorite)?);
    }

    Ok(())
}
