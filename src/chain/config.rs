//! Canonical Safe contract addresses, shared by every chain with the
//! singleton factory deployments

use alloy::primitives::{address, Address};

/// Addresses of the Safe contracts used for proposing and deploying
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAddresses {
    /// Safe singleton address
    pub safe_singleton: Address,
    /// SafeL2 singleton address (emits events for indexers)
    pub safe_l2_singleton: Address,
    /// Safe proxy factory address
    pub proxy_factory: Address,
    /// Compatibility fallback handler
    pub fallback_handler: Address,
    /// CreateCall library used to deploy contracts from a Safe
    pub create_call: Address,
}

impl Default for ChainAddresses {
    fn default() -> Self {
        Self::v1_4_1()
    }
}

impl ChainAddresses {
    /// Returns the canonical Safe v1.4.1 addresses
    pub fn v1_4_1() -> Self {
        Self {
            safe_singleton: address!("41675C099F32341bf84BFc5382aF534df5C7461a"),
            safe_l2_singleton: address!("29fcB43b46531BcA003ddC8FCB67FFE91900C762"),
            proxy_factory: address!("4e1DCf7AD4e460CfD30791CCC4F9c8a4f820ec67"),
            fallback_handler: address!("fd0732Dc9E303f09fCEf3a7388Ad10A83459Ec99"),
            create_call: address!("9b35Af71d77eaf8d7e40252370304687390A1A52"),
        }
    }

    /// Returns the canonical Safe v1.3.0 addresses
    pub fn v1_3_0() -> Self {
        Self {
            safe_singleton: address!("d9Db270c1B5E3Bd161E8c8503c55cEABeE709552"),
            safe_l2_singleton: address!("3E5c63644E683549055b9Be8653de26E0B4CD36E"),
            proxy_factory: address!("a6B71E26C5e0845f74c812102Ca7114b6a896AB2"),
            fallback_handler: address!("f48f2B2d2a534e402487b3ee7C18c33Aec0Fe5e4"),
            create_call: address!("7cbB62EaA69F79e6873cD1ecB2392971036cFAa4"),
        }
    }

    /// Looks up a release by its version string
    pub fn for_version(version: &str) -> Option<Self> {
        match version.trim_start_matches('v') {
            "1.4.1" => Some(Self::v1_4_1()),
            "1.3.0" => Some(Self::v1_3_0()),
            _ => None,
        }
    }
}
