//! Handle for the `VaultAcc` program.

use std::rc::Rc;

use anchor_client::Program;
use anchor_lang::{InstructionData, ToAccountMetas};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
};
use tracing::info;

use crate::{error::Result, provider::Provider, workspace::Workspace};

/// Name the program is registered under in `Anchor.toml`.
pub const WORKSPACE_NAME: &str = "VaultAcc";

pub struct VaultAcc {
    program: Program<Rc<Keypair>>,
}

impl VaultAcc {
    pub fn new(provider: &Provider, program_id: Pubkey) -> Result<Self> {
        Ok(Self {
            program: provider.program(program_id)?,
        })
    }

    pub fn from_workspace(provider: &Provider, workspace: &Workspace) -> Result<Self> {
        let program_id = workspace.program_id(WORKSPACE_NAME, provider.config().moniker())?;
        Self::new(provider, program_id)
    }

    pub fn id(&self) -> Pubkey {
        self.program.id()
    }

    /// Send `initialize` and wait for confirmation.
    pub fn initialize(&self) -> Result<Signature> {
        let signature = self
            .program
            .request()
            .instruction(initialize_instruction(self.id()))
            .send()?;

        info!(program = %self.id(), %signature, "initialize confirmed");
        Ok(signature)
    }
}

pub fn initialize_instruction(program_id: Pubkey) -> Instruction {
    Instruction {
        program_id,
        accounts: vault_acc::accounts::Initialize {}.to_account_metas(None),
        data: vault_acc::instruction::Initialize {}.data(),
    }
}
