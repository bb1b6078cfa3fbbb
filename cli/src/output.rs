use alloy::primitives::{Address, Bytes, B256, U256};
use safe_proposer::api::{ExecutionInfo, Listing, MultisigTransaction, TxInfo};
use safe_proposer::{to_checksum, SignedTransaction};
use serde::Serialize;

#[derive(Serialize)]
pub struct ProposalOutput {
    pub safe: Address,
    pub chain_id: u64,
    pub safe_tx_hash: B256,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub operation: u8,
    pub nonce: U256,
    pub sender: Address,
    pub signature: Bytes,
    pub submitted: bool,
}

impl ProposalOutput {
    pub fn new(signed: &SignedTransaction, submitted: bool) -> Self {
        let record = signed.record();
        Self {
            safe: signed.safe(),
            chain_id: signed.chain_id(),
            safe_tx_hash: signed.safe_tx_hash(),
            to: record.to,
            value: record.value,
            data: record.data.clone(),
            operation: record.operation.as_u8(),
            nonce: record.nonce,
            sender: signed.sender(),
            signature: signed.signature().clone(),
            submitted,
        }
    }

    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            if self.submitted {
                println!("Proposal Submitted:");
            } else {
                println!("Proposal Signed (not submitted):");
            }
            self.print_fields();
        }
    }

    fn print_fields(&self) {
        println!("  Safe: {}", to_checksum(&self.safe));
        println!("  Chain ID: {}", self.chain_id);
        println!("  Safe Tx Hash: {}", self.safe_tx_hash);
        println!("  To: {}", to_checksum(&self.to));
        println!("  Value: {} wei", self.value);
        println!("  Data: {} bytes", self.data.len());
        println!("  Operation: {}", self.operation);
        println!("  Nonce: {}", self.nonce);
        println!("  Sender: {}", to_checksum(&self.sender));
        println!("  Signature: {}", self.signature);
    }
}

#[derive(Serialize)]
pub struct DeployOutput {
    pub create_call: Address,
    pub operation: u8,
    pub deployer: Address,
    pub deployer_role: &'static str,
    pub salt: B256,
    pub init_code_hash: B256,
    pub predicted_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal: Option<ProposalOutput>,
}

impl DeployOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Deployment:");
            println!("  CreateCall: {}", to_checksum(&self.create_call));
            println!("  Operation: {}", self.operation);
            println!(
                "  Deployer: {} ({})",
                to_checksum(&self.deployer),
                self.deployer_role
            );
            println!("  Salt: {}", self.salt);
            println!("  Init Code Hash: {}", self.init_code_hash);
            println!("  Predicted Address: {}", to_checksum(&self.predicted_address));
            if let Some(proposal) = &self.proposal {
                println!();
                println!("Proposal Submitted:");
                proposal.print_fields();
            }
        }
    }
}

#[derive(Serialize)]
pub struct PredictOutput {
    pub deployer: Address,
    pub salt: B256,
    pub init_code_hash: B256,
    pub address: Address,
}

impl PredictOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Deployer: {}", to_checksum(&self.deployer));
            println!("Salt: {}", self.salt);
            println!("Init Code Hash: {}", self.init_code_hash);
            println!("Address: {}", to_checksum(&self.address));
        }
    }
}

#[derive(Serialize)]
pub struct SafePredictOutput {
    pub factory: Address,
    pub singleton: Address,
    pub owners: Vec<Address>,
    pub threshold: u64,
    pub salt_nonce: U256,
    pub address: Address,
}

impl SafePredictOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Safe Address: {}", to_checksum(&self.address));
            println!("  Factory: {}", to_checksum(&self.factory));
            println!("  Singleton: {}", to_checksum(&self.singleton));
            println!("  Salt Nonce: {}", self.salt_nonce);
            println!("  Threshold: {}", self.threshold);
            println!("  Owners:");
            for (i, owner) in self.owners.iter().enumerate() {
                println!("    {}: {}", i + 1, to_checksum(owner));
            }
        }
    }
}

#[derive(Serialize)]
pub struct HashOutput {
    pub safe: Address,
    pub chain_id: u64,
    pub nonce: U256,
    pub domain_separator: B256,
    pub struct_hash: B256,
    pub safe_tx_hash: B256,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onchain_match: Option<bool>,
}

impl HashOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Safe: {}", to_checksum(&self.safe));
            println!("Chain ID: {}", self.chain_id);
            println!("Nonce: {}", self.nonce);
            println!("Domain Separator: {}", self.domain_separator);
            println!("Struct Hash: {}", self.struct_hash);
            println!("Safe Tx Hash: {}", self.safe_tx_hash);
            match self.onchain_match {
                Some(true) => println!("On-chain Hash: matches"),
                Some(false) => println!("On-chain Hash: MISMATCH"),
                None => {}
            }
        }
    }
}

#[derive(Serialize)]
pub struct ListEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    pub status: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<String>,
}

impl ListEntry {
    fn from_multisig(tx: &MultisigTransaction) -> Self {
        let status = match (tx.is_executed, tx.is_successful) {
            (false, _) => "QUEUED",
            (true, Some(false)) => "FAILED",
            (true, _) => "SUCCESS",
        };
        Self {
            id: tx.safe_tx_hash.to_string(),
            nonce: Some(tx.nonce),
            status: status.to_string(),
            summary: format!("{} to {} ({} wei)", tx.operation, to_checksum(&tx.to), tx.value),
            confirmations: tx
                .confirmations_required
                .map(|required| format!("{}/{required}", tx.confirmations.len())),
        }
    }
}

#[derive(Serialize)]
pub struct ListOutput {
    pub kind: &'static str,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub entries: Vec<ListEntry>,
}

impl ListOutput {
    pub fn new(kind: &'static str, listing: &Listing) -> Self {
        let entries: Vec<ListEntry> = match listing {
            Listing::Multisig(page) => page.results.iter().map(ListEntry::from_multisig).collect(),
            Listing::History(page) => page
                .transactions()
                .map(|tx| {
                    let (nonce, confirmations) = match &tx.execution_info {
                        Some(ExecutionInfo::Multisig {
                            nonce,
                            confirmations_required,
                            confirmations_submitted,
                            ..
                        }) => (
                            Some(*nonce),
                            Some(format!("{confirmations_submitted}/{confirmations_required}")),
                        ),
                        _ => (None, None),
                    };
                    ListEntry {
                        id: tx.id.clone(),
                        nonce,
                        status: tx.tx_status.clone(),
                        summary: describe(&tx.tx_info),
                        confirmations,
                    }
                })
                .collect(),
            Listing::Empty(_) => Vec::new(),
        };

        Self {
            kind,
            count: entries.len(),
            next: listing.info().next.clone(),
            entries,
        }
    }

    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("{} ({}):", self.kind, self.count);
            for entry in &self.entries {
                let nonce = entry
                    .nonce
                    .map(|n| format!("#{n} "))
                    .unwrap_or_default();
                println!("  {nonce}[{}] {}", entry.status, entry.summary);
                println!("     {}", entry.id);
                if let Some(confirmations) = &entry.confirmations {
                    println!("     Confirmations: {confirmations}");
                }
            }
            if let Some(next) = &self.next {
                println!("Next page: {next}");
            }
        }
    }
}

fn describe(info: &TxInfo) -> String {
    match info {
        TxInfo::Transfer {
            direction,
            recipient,
            ..
        } => format!("Transfer {direction} {}", to_checksum(&recipient.value)),
        TxInfo::Custom {
            to, method_name, ..
        } => match method_name {
            Some(method) => format!("Call {method} on {}", to_checksum(&to.value)),
            None => format!("Call to {}", to_checksum(&to.value)),
        },
        TxInfo::Creation { creator, .. } => {
            format!("Safe created by {}", to_checksum(&creator.value))
        }
        other => other.kind().to_string(),
    }
}

pub fn confirm_prompt(message: &str) -> bool {
    use dialoguer::Confirm;

    Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .unwrap_or(false)
}
