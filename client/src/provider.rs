use std::rc::Rc;

use anchor_client::{Client, Program};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signer},
};
use tracing::debug;

use crate::{
    config::ProviderConfig,
    error::{ClientError, Result},
};

/// A cluster connection paired with the signing wallet.
pub struct Provider {
    client: Client<Rc<Keypair>>,
    payer: Rc<Keypair>,
    config: ProviderConfig,
}

impl Provider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let payer = read_keypair_file(&config.wallet_path).map_err(|err| ClientError::Wallet {
            path: config.wallet_path.clone(),
            reason: err.to_string(),
        })?;
        let payer = Rc::new(payer);

        debug!(
            cluster = config.cluster.url(),
            payer = %payer.pubkey(),
            "provider ready"
        );

        let client = Client::new_with_options(config.cluster.clone(), payer.clone(), config.commitment);

        Ok(Self { client, payer, config })
    }

    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn program(&self, program_id: Pubkey) -> Result<Program<Rc<Keypair>>> {
        Ok(self.client.program(program_id)?)
    }
}
