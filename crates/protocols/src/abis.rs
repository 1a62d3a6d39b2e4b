//! Built-in ABI descriptors for the contracts the valuation reads.
//!
//! Only the view functions actually called are described.

use crate::abi::Abi;

/// Name of the pending-reward view on PancakeSwap's MasterChef.
pub const PENDING_CAKE: &str = "pendingCake";

const MASTERCHEF: [&str; 4] = [
    "function userInfo(uint256 pid, address user) view returns (uint256 amount, uint256 rewardDebt)",
    "function poolInfo(uint256 pid) view returns (address lpToken, uint256 allocPoint, uint256 lastRewardBlock, uint256 accCakePerShare)",
    "function poolLength() view returns (uint256)",
    "function pendingCake(uint256 pid, address user) view returns (uint256)",
];

const PAIR: [&str; 5] = [
    "function token0() view returns (address)",
    "function token1() view returns (address)",
    "function getReserves() view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast)",
    "function totalSupply() view returns (uint256)",
    "function decimals() view returns (uint8)",
];

const ERC20: [&str; 2] = [
    "function decimals() view returns (uint8)",
    "function symbol() view returns (string)",
];

fn built_in(signatures: &[&str]) -> Abi {
    Abi::parse(signatures.iter().copied()).expect("built-in descriptor")
}

/// MasterChef staking contract.
pub fn masterchef() -> Abi {
    built_in(&MASTERCHEF)
}

/// Uniswap-v2 style pair (LP token).
pub fn pair() -> Abi {
    built_in(&PAIR)
}

/// ERC-20 metadata.
pub fn erc20() -> Abi {
    built_in(&ERC20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masterchef_signatures() {
        let abi = masterchef();
        assert_eq!(
            abi.function("userInfo", 2).unwrap().signature(),
            "userInfo(uint256,address)"
        );
        assert_eq!(
            abi.function(PENDING_CAKE, 2).unwrap().signature(),
            "pendingCake(uint256,address)"
        );
        assert_eq!(abi.function("poolInfo", 1).unwrap().outputs.len(), 4);
    }

    #[test]
    fn test_pair_describes_reserves() {
        let abi = pair();
        for name in ["token0", "token1", "getReserves", "totalSupply", "decimals"] {
            assert!(abi.has_function(name), "{name}");
        }
        assert!(erc20().has_function("symbol"));
    }
}
