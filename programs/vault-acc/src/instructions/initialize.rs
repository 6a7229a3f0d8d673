use anchor_lang::prelude::*;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    msg!("VaultAcc initialized: {}", ctx.program_id);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize {}
