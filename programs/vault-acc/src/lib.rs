use anchor_lang::prelude::*;

declare_id!("9pU1ESxdgeWPKjQwg6R7vuVom8rno7L8CNb76EUh6vVN");

pub mod instructions;

pub use instructions::*;

#[program]
pub mod vault_acc {
    use super::*;

    /// Initialize the program.
    ///
    /// Takes no accounts and no arguments and leaves no state behind, so it
    /// can be invoked any number of times.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }
}
