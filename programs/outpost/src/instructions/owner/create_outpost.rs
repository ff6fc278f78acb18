use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use outpost_admin::state::ProtocolConfig;
use outpost_admin::ID as OUTPOST_ADMIN_PROGRAM_ID;
use shared::check_condition;
use shared::constants::{OUTPOST_SEEDS, PROTOCOL_CONFIG_SEEDS};
use shared::errors::ErrorCode;

use crate::events::OutpostCreated;
use crate::state::Outpost;
use crate::utils::structs::{FixedSizeString, OutpostStatus};
use crate::utils::TokenUtil;

#[derive(Accounts)]
#[instruction(name: String)]
pub struct CreateOutpost<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [PROTOCOL_CONFIG_SEEDS],
        bump = protocol_config.bump,
        seeds::program = OUTPOST_ADMIN_PROGRAM_ID,
    )]
    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        init,
        payer = creator,
        space = Outpost::SIZE,
        seeds = [OUTPOST_SEEDS, creator.key().as_ref(), name.as_bytes()],
        bump
    )]
    pub outpost: AccountLoader<'info, Outpost>,

    #[account(address = protocol_config.payment_mint @ ErrorCode::InvalidPaymentMint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = creator,
    )]
    pub creator_payment_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: treasury wallet from the protocol config
    #[account(address = protocol_config.treasury @ ErrorCode::InvalidTreasury)]
    pub treasury: UncheckedAccount<'info>,

    /// CHECK: treasury ATA, validated and created on demand by TokenUtil
    #[account(mut)]
    pub treasury_token_account: UncheckedAccount<'info>,
}

impl CreateOutpost<'_> {
    pub fn validate(&self, name: &str) -> Result<()> {
        Outpost::pad_name(name)?;

        check_condition!(
            self.creator_payment_account.amount >= self.protocol_config.outpost_purchase_price,
            InsufficientCallerBalance
        );

        Ok(())
    }
}

pub fn handler(
    ctx: Context<CreateOutpost>,
    name: String,
    description: String,
    uri: String,
) -> Result<()> {
    ctx.accounts.validate(&name)?;

    let purchase_price = ctx.accounts.protocol_config.outpost_purchase_price;

    // Venue creation is paid straight to the treasury, never to the vault.
    TokenUtil::pay_wallet(
        purchase_price,
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.treasury_token_account.to_account_info(),
        &ctx.accounts.creator_payment_account.to_account_info(),
        &ctx.accounts.creator.to_account_info(),
        &ctx.accounts.creator.to_account_info(),
        &ctx.accounts.payment_mint.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.associated_token_program.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        None,
    )?;

    {
        let outpost = &mut ctx.accounts.outpost.load_init()?;

        outpost.bump = ctx.bumps.outpost;
        outpost.owner = ctx.accounts.creator.key();
        outpost.creator = ctx.accounts.creator.key();
        outpost.price = purchase_price;
        outpost.royalty_bps = ctx.accounts.protocol_config.subject_fee_bps;
        outpost.status = OutpostStatus::Active as u8;
        outpost.name = Outpost::pad_name(&name)?;
        outpost.description = FixedSizeString::new(&description);
        outpost.uri = FixedSizeString::new(&uri);
    }

    emit!(OutpostCreated {
        outpost: ctx.accounts.outpost.key(),
        owner: ctx.accounts.creator.key(),
        name,
        price: purchase_price,
    });

    Ok(())
}
