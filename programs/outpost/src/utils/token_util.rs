use anchor_lang::prelude::*;
use anchor_spl::associated_token::{self, get_associated_token_address_with_program_id};
use anchor_spl::token;

use shared::check_condition;
use shared::errors::ErrorCode;

/// Fee and payout plumbing around the settlement currency.
pub struct TokenUtil;

impl TokenUtil {
    /// Pays `amount` of the settlement currency to a wallet's associated
    /// token account, creating the account first if the wallet was never
    /// registered for the mint. The recipient account address is validated
    /// against the wallet before anything is transferred.
    ///
    /// Zero-amount legs (a fee configured at 0 bps) are skipped entirely.
    #[allow(clippy::too_many_arguments)]
    pub fn pay_wallet<'info>(
        amount: u64,
        wallet: &AccountInfo<'info>,
        wallet_token_account: &AccountInfo<'info>,
        from_token_account: &AccountInfo<'info>,
        from_authority: &AccountInfo<'info>,
        payer: &AccountInfo<'info>,
        mint: &AccountInfo<'info>,
        token_program: &AccountInfo<'info>,
        associated_token_program: &AccountInfo<'info>,
        system_program: &AccountInfo<'info>,
        signer_seeds: Option<&[&[&[u8]]]>,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        check_condition!(
            wallet_token_account.key()
                == get_associated_token_address_with_program_id(
                    &wallet.key(),
                    &mint.key(),
                    &token_program.key(),
                ),
            InvalidRecipientTokenAccount
        );

        associated_token::create_idempotent(CpiContext::new(
            associated_token_program.clone(),
            associated_token::Create {
                payer: payer.clone(),
                associated_token: wallet_token_account.clone(),
                authority: wallet.clone(),
                mint: mint.clone(),
                system_program: system_program.clone(),
                token_program: token_program.clone(),
            },
        ))?;

        let transfer_accounts = token::Transfer {
            from: from_token_account.clone(),
            to: wallet_token_account.clone(),
            authority: from_authority.clone(),
        };

        match signer_seeds {
            Some(signer_seeds) => token::transfer(
                CpiContext::new_with_signer(token_program.clone(), transfer_accounts, signer_seeds),
                amount,
            ),
            None => token::transfer(
                CpiContext::new(token_program.clone(), transfer_accounts),
                amount,
            ),
        }
    }
}
