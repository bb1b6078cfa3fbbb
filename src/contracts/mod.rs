//! Contract ABI definitions for the Safe contracts this crate talks to

use alloy::primitives::hex;
use alloy::sol;

sol! {
    /// Read-only view of a Safe used while proposing
    #[sol(rpc)]
    interface ISafe {
        /// Returns the current nonce of the Safe
        function nonce() external view returns (uint256 nonce);

        /// Returns the domain separator for EIP-712 signing
        function domainSeparator() external view returns (bytes32);

        /// Computes the hash of a Safe transaction
        function getTransactionHash(
            address to,
            uint256 value,
            bytes calldata data,
            uint8 operation,
            uint256 safeTxGas,
            uint256 baseGas,
            uint256 gasPrice,
            address gasToken,
            address refundReceiver,
            uint256 _nonce
        ) external view returns (bytes32);
    }

    /// Safe.setup(), the initializer passed to the proxy factory
    interface ISafeSetup {
        function setup(
            address[] calldata _owners,
            uint256 _threshold,
            address to,
            bytes calldata data,
            address fallbackHandler,
            address paymentToken,
            uint256 payment,
            address payable paymentReceiver
        ) external;
    }

    /// SafeProxyFactory
    #[sol(rpc)]
    interface ISafeProxyFactory {
        function proxyCreationCode() external pure returns (bytes memory);
    }

    /// CreateCall library, reached from a Safe through DelegateCall or Call
    interface ICreateCall {
        function performCreate2(uint256 value, bytes memory deploymentData, bytes32 salt)
            external returns (address newContract);
    }
}

/// EIP-712 type hash for SafeTx struct
/// keccak256("SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)")
pub const SAFE_TX_TYPEHASH: [u8; 32] = [
    0xbb, 0x83, 0x10, 0xd4, 0x86, 0x36, 0x8d, 0xb6, 0xbd, 0x6f, 0x84, 0x94, 0x02, 0xfd, 0xd7, 0x3a,
    0xd5, 0x3d, 0x31, 0x6b, 0x5a, 0x4b, 0x26, 0x44, 0xad, 0x6e, 0xfe, 0x0f, 0x94, 0x12, 0x86, 0xd8,
];

/// EIP-712 domain type hash for Safe
/// keccak256("EIP712Domain(uint256 chainId,address verifyingContract)")
pub const DOMAIN_SEPARATOR_TYPEHASH: [u8; 32] = [
    0x47, 0xe7, 0x95, 0x34, 0xa2, 0x45, 0x95, 0x2e, 0x8b, 0x16, 0x89, 0x3a, 0x33, 0x6b, 0x85, 0xa3,
    0xd9, 0xea, 0x9f, 0xa8, 0xc5, 0x73, 0xf3, 0xd8, 0x03, 0xaf, 0xb9, 0x2a, 0x79, 0x46, 0x92, 0x18,
];

/// SafeProxy creation bytecode; the constructor takes the singleton address
pub const SAFE_PROXY_CREATION_CODE: &[u8] = &hex!(
    "608060405234801561001057600080fd5b506040516101d63803806101d6833981810160405260208110156100335760"
    "0080fd5b8101908080519060200190929190505050600073ffffffffffffffffffffffffffffffffffffffff168173ff"
    "ffffffffffffffffffffffffffffffffffffff1614156100ca576040517f08c379a00000000000000000000000000000"
    "000000000000000000000000000081526004018080602001828103825260228152602001806101b46022913960400191"
    "505060405180910390fd5b806000806101000a81548173ffffffffffffffffffffffffffffffffffffffff0219169083"
    "73ffffffffffffffffffffffffffffffffffffffff16021790555050609b806101196000396000f3fe60806040526000"
    "547fa619486e00000000000000000000000000000000000000000000000000000000600035141560405780600c1b600c"
    "1c60005260206000f35b3660008037600080366000845af43d6000803e60008114156060573d6000fd5b3d6000f3fea2"
    "646970667358221220bfbe5e66dfccd59d80684323ec36a561ddc5ef3b39a33a941f25cabefff21eb964736f6c634300"
    "07060033496e76616c69642073696e676c65746f6e20616464726573732070726f7669646564"
);
