//! Contract descriptors and the call codec.
//!
//! Descriptors are standard JSON ABIs, so the ABI a block explorer or solc
//! emits for any MasterChef-family contract can be loaded as is. Encoding
//! and decoding go through alloy's dynamic ABI support, which covers every
//! Solidity type.

use crate::error::AbiError;
use alloy::dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy::json_abi::{Function, JsonAbi};
use alloy::primitives::U256;
use farm_positions_domain::Address;

/// `uint256` call argument.
pub fn uint(value: u128) -> DynSolValue {
    DynSolValue::Uint(U256::from(value), 256)
}

/// `address` call argument.
pub fn address(value: Address) -> DynSolValue {
    DynSolValue::Address(value.into())
}

/// Unsigned value of a decoded output, in the domain's integer type.
pub fn to_u256(value: &DynSolValue) -> Option<primitive_types::U256> {
    value
        .as_uint()
        .map(|(v, _)| primitive_types::U256::from_big_endian(&v.to_be_bytes::<32>()))
}

/// Address value of a decoded output.
pub fn to_address(value: &DynSolValue) -> Option<Address> {
    value.as_address().map(Address::from)
}

/// Selector followed by the encoded arguments.
pub fn encode_input(function: &Function, args: &[DynSolValue]) -> Result<Vec<u8>, AbiError> {
    function
        .abi_encode_input(args)
        .map_err(|e| AbiError::Encode {
            method: function.signature(),
            reason: e.to_string(),
        })
}

/// Decodes return data into one value per declared output.
pub fn decode_output(function: &Function, data: &[u8]) -> Result<Vec<DynSolValue>, AbiError> {
    if data.is_empty() && !function.outputs.is_empty() {
        return Err(AbiError::ShortData {
            method: function.name.clone(),
            len: 0,
        });
    }
    function
        .abi_decode_output(data)
        .map_err(|e| AbiError::InvalidData {
            method: function.name.clone(),
            reason: e.to_string(),
        })
}

/// A contract ABI descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Abi {
    inner: JsonAbi,
}

impl From<JsonAbi> for Abi {
    fn from(inner: JsonAbi) -> Self {
        Self { inner }
    }
}

impl Abi {
    /// Loads a standard JSON ABI (as emitted by solc or block explorers).
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        serde_json::from_str::<JsonAbi>(json)
            .map(Self::from)
            .map_err(|e| AbiError::InvalidDescriptor(e.to_string()))
    }

    /// Builds a descriptor from human-readable signatures such as
    /// `function decimals() view returns (uint8)`.
    pub fn parse<'a>(signatures: impl IntoIterator<Item = &'a str>) -> Result<Self, AbiError> {
        JsonAbi::parse(signatures)
            .map(Self::from)
            .map_err(|e| AbiError::InvalidDescriptor(e.to_string()))
    }

    /// Resolves `method` to a single function.
    ///
    /// `method` is a bare name or a full signature such as
    /// `deposit(uint256,uint256)`. A bare name must select exactly one
    /// overload taking `arity` arguments; a name with a single overload is
    /// returned as is so that argument mismatches surface when encoding.
    pub fn function(&self, method: &str, arity: usize) -> Result<&Function, AbiError> {
        let unknown = || AbiError::UnknownMethod(method.to_string());
        let overloads = self.inner.function(base_name(method)).ok_or_else(unknown)?;

        if method.contains('(') {
            return overloads
                .iter()
                .find(|f| f.signature() == method)
                .ok_or_else(unknown);
        }

        let matching: Vec<&Function> = overloads
            .iter()
            .filter(|f| f.inputs.len() == arity)
            .collect();
        match matching.as_slice() {
            [function] => Ok(*function),
            [] if overloads.len() == 1 => Ok(&overloads[0]),
            [] => Err(unknown()),
            _ => Err(AbiError::AmbiguousMethod {
                method: method.to_string(),
                candidates: matching.iter().map(|f| f.signature()).collect(),
            }),
        }
    }

    /// Whether `method` (name or signature) is described.
    pub fn has_function(&self, method: &str) -> bool {
        self.inner.function(base_name(method)).is_some_and(|overloads| {
            !method.contains('(') || overloads.iter().any(|f| f.signature() == method)
        })
    }
}

fn base_name(method: &str) -> &str {
    method.split_once('(').map_or(method, |(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{I256, hex};

    const WALLET: &str = "0x3c74c735b5863c0baf52598d8fd2d59611c8320f";

    fn signature_of(abi: &Abi, method: &str, arity: usize) -> String {
        abi.function(method, arity).unwrap().signature()
    }

    #[test]
    fn test_well_known_selectors() {
        let abi = Abi::parse([
            "function totalSupply() view returns (uint256)",
            "function token0() view returns (address)",
            "function getReserves() view returns (uint112, uint112, uint32)",
            "function balanceOf(address) view returns (uint256)",
            "function userInfo(uint256, address) view returns (uint256, uint256)",
        ])
        .unwrap();
        for (method, arity, expected) in [
            ("totalSupply", 0, "18160ddd"),
            ("token0", 0, "0dfe1681"),
            ("getReserves", 0, "0902f1ac"),
            ("balanceOf", 1, "70a08231"),
            ("userInfo", 2, "93f1a40b"),
        ] {
            let function = abi.function(method, arity).unwrap();
            assert_eq!(hex::encode(function.selector()), expected, "{method}");
        }
    }

    #[test]
    fn test_encode_pool_and_user() {
        let abi = Abi::parse(["function userInfo(uint256, address) view returns (uint256, uint256)"])
            .unwrap();
        let function = abi.function("userInfo", 2).unwrap();
        let wallet: Address = WALLET.parse().unwrap();

        let data = encode_input(function, &[uint(251), address(wallet)]).unwrap();
        assert_eq!(data.len(), 4 + 64);
        assert_eq!(
            hex::encode(&data[4..36]),
            "00000000000000000000000000000000000000000000000000000000000000fb"
        );
        assert_eq!(
            hex::encode(&data[36..]),
            "0000000000000000000000003c74c735b5863c0baf52598d8fd2d59611c8320f"
        );
    }

    #[test]
    fn test_encode_rejects_mismatched_arguments() {
        let abi = Abi::parse(["function userInfo(uint256, address) view returns (uint256, uint256)"])
            .unwrap();
        let function = abi.function("userInfo", 1).unwrap();

        assert!(matches!(
            encode_input(function, &[uint(1)]),
            Err(AbiError::Encode { .. })
        ));
        assert!(matches!(
            encode_input(function, &[address(Address::ZERO), uint(1)]),
            Err(AbiError::Encode { .. })
        ));
    }

    #[test]
    fn test_decode_reserves() {
        let abi = Abi::parse(["function getReserves() view returns (uint112, uint112, uint32)"])
            .unwrap();
        let function = abi.function("getReserves", 0).unwrap();
        let data = DynSolValue::Tuple(vec![
            DynSolValue::Uint(U256::from(2_000_000u64), 112),
            DynSolValue::Uint(U256::from(500_000u64), 112),
            DynSolValue::Uint(U256::from(1_650_000_000u64), 32),
        ])
        .abi_encode_params();

        let values = decode_output(function, &data).unwrap();
        let raw: Vec<_> = values.iter().map(|v| to_u256(v).unwrap()).collect();
        assert_eq!(
            raw,
            vec![
                primitive_types::U256::from(2_000_000u64),
                primitive_types::U256::from(500_000u64),
                primitive_types::U256::from(1_650_000_000u64),
            ]
        );
    }

    #[test]
    fn test_decode_empty_return_is_short_data() {
        let abi = Abi::parse(["function token0() view returns (address)"]).unwrap();
        let function = abi.function("token0", 0).unwrap();
        assert_eq!(
            decode_output(function, &[]),
            Err(AbiError::ShortData {
                method: "token0".into(),
                len: 0
            })
        );
    }

    #[test]
    fn test_decode_string() {
        let abi = Abi::parse(["function symbol() view returns (string)"]).unwrap();
        let function = abi.function("symbol", 0).unwrap();
        let data = DynSolValue::Tuple(vec![DynSolValue::String("CAKE".into())]).abi_encode_params();

        let values = decode_output(function, &data).unwrap();
        assert_eq!(values[0].as_str(), Some("CAKE"));
    }

    #[test]
    fn test_decode_truncated_string_is_invalid() {
        let abi = Abi::parse(["function symbol() view returns (string)"]).unwrap();
        let function = abi.function("symbol", 0).unwrap();
        let data = U256::from(4096u64).to_be_bytes::<32>();
        assert!(matches!(
            decode_output(function, &data),
            Err(AbiError::InvalidData { .. })
        ));
    }

    #[test]
    fn test_json_abi_with_signed_reward_debt() {
        let json = r#"[
            {"type":"event","name":"Deposit","anonymous":false,"inputs":[
                {"name":"user","type":"address","indexed":true},
                {"name":"pid","type":"uint256","indexed":true},
                {"name":"amount","type":"uint256","indexed":false}]},
            {"type":"constructor","stateMutability":"nonpayable","inputs":[]},
            {"type":"function","name":"userInfo","stateMutability":"view",
             "inputs":[{"name":"","type":"uint256"},{"name":"","type":"address"}],
             "outputs":[{"name":"amount","type":"uint256"},{"name":"rewardDebt","type":"int256"}]},
            {"type":"function","name":"pendingSushi","stateMutability":"view",
             "inputs":[{"name":"_pid","type":"uint256"},{"name":"_user","type":"address"}],
             "outputs":[{"name":"pending","type":"uint256"}]},
            {"type":"function","name":"migrate","stateMutability":"nonpayable",
             "inputs":[{"name":"_pid","type":"uint256"},{"name":"data","type":"bytes"}],
             "outputs":[]}
        ]"#;
        let abi = Abi::from_json(json).unwrap();

        assert!(abi.has_function("userInfo"));
        assert!(abi.has_function("pendingSushi"));
        assert!(abi.has_function("migrate"));
        assert!(!abi.has_function("Deposit"));

        let user_info = abi.function("userInfo", 2).unwrap();
        let data = DynSolValue::Tuple(vec![
            DynSolValue::Uint(U256::from(10_000u64), 256),
            DynSolValue::Int(I256::try_from(-42i64).unwrap(), 256),
        ])
        .abi_encode_params();
        let values = decode_output(user_info, &data).unwrap();
        assert_eq!(to_u256(&values[0]), Some(primitive_types::U256::from(10_000u64)));
        assert_eq!(to_u256(&values[1]), None);
    }

    #[test]
    fn test_overloads_resolve_by_arity_or_signature() {
        let abi = Abi::parse([
            "function deposit(uint256, uint256)",
            "function deposit(uint256, uint256, address)",
            "function balanceOf(address) view returns (uint256)",
            "function balanceOf(uint256) view returns (uint256)",
        ])
        .unwrap();

        assert_eq!(signature_of(&abi, "deposit", 2), "deposit(uint256,uint256)");
        assert_eq!(signature_of(&abi, "deposit", 3), "deposit(uint256,uint256,address)");
        assert_eq!(
            signature_of(&abi, "deposit(uint256,uint256,address)", 0),
            "deposit(uint256,uint256,address)"
        );
        assert!(abi.has_function("balanceOf(uint256)"));
        assert!(!abi.has_function("balanceOf(bytes32)"));

        match abi.function("balanceOf", 1) {
            Err(AbiError::AmbiguousMethod { candidates, .. }) => {
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
        assert_eq!(
            signature_of(&abi, "balanceOf(uint256)", 1),
            "balanceOf(uint256)"
        );
        assert_eq!(
            abi.function("deposit", 1),
            Err(AbiError::UnknownMethod("deposit".into()))
        );
    }

    #[test]
    fn test_abi_from_json_rejects_garbage() {
        assert!(matches!(
            Abi::from_json("{\"not\":\"an array\"}"),
            Err(AbiError::InvalidDescriptor(_))
        ));
        assert!(matches!(
            Abi::parse(["function (uint256"]),
            Err(AbiError::InvalidDescriptor(_))
        ));
    }
}
