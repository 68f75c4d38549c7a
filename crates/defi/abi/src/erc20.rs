use alloy::sol;

sol! {
    #[sol(abi=true,rpc)]
    #[derive(Debug, PartialEq, Eq)]
   interface IERC20 {
       function decimals() external view returns (uint8);
       function balanceOf(address account) external view returns (uint256);
       function approve(address spender, uint256 amount) external returns (bool);
   }
}
