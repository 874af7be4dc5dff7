//! ENS registry and resolver contract bindings.

use alloy_sol_types::sol;

sol! {
    /// ENS registry interface (EIP-137).
    #[sol(rpc)]
    interface IENSRegistry {
        /// Emitted when the resolver for a node changes
        event NewResolver(bytes32 indexed node, address resolver);

        /// Get the resolver contract responsible for a node
        function resolver(bytes32 node) external view returns (address);

        /// Get the owner of a node
        function owner(bytes32 node) external view returns (address);

        /// Check whether a record exists for a node
        function recordExists(bytes32 node) external view returns (bool);
    }

    /// Public resolver interface, address records only.
    #[sol(rpc)]
    interface IPublicResolver {
        /// Emitted when the address record for a node changes
        event AddrChanged(bytes32 indexed node, address a);

        /// Get the address record for a node
        function addr(bytes32 node) external view returns (address);
    }
}
