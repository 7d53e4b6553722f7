//! Solidity snippets the patch steps insert, and the fixed name lists their
//! preconditions check against.

/// OpenZeppelin security imports, inserted after the pragma line.
pub const SECURITY_IMPORTS: [&str; 3] = [
    "@openzeppelin/contracts/security/ReentrancyGuard.sol",
    "@openzeppelin/contracts/access/Ownable.sol",
    "@openzeppelin/contracts/security/Pausable.sol",
];

/// Base types merged into the contract header's inheritance clause.
pub const SECURITY_BASES: [&str; 3] = ["ReentrancyGuard", "Ownable", "Pausable"];

/// Audit event block, inserted after the last existing event declaration.
pub const AUDIT_EVENTS: &str = r#"
    // Audit trail events
    event SecurityEvent(
        string indexed eventType,
        address indexed user,
        uint256 timestamp,
        string details
    );

    event AccessGranted(
        address indexed user,
        string indexed role,
        uint256 timestamp
    );

    event AccessRevoked(
        address indexed user,
        string indexed role,
        uint256 timestamp
    );
"#;

/// Names declared by [`AUDIT_EVENTS`]. The first one doubles as the
/// already-applied marker.
pub const AUDIT_EVENT_NAMES: [&str; 3] = ["SecurityEvent", "AccessGranted", "AccessRevoked"];

/// Emergency pause switches, inserted after the constructor body.
pub const PAUSE_FUNCTIONS: &str = r#"
    // Emergency pause switches
    function pause() external onlyOwner {
        _pause();
    }

    function unpause() external onlyOwner {
        _unpause();
    }
"#;

/// Input validation helpers, inserted after the constructor body.
pub const VALIDATION_HELPERS: &str = r#"
    // Input validation helpers
    function _validateAddress(address _addr) internal pure {
        require(_addr != address(0), "Invalid address");
    }

    function _validateString(string memory _str) internal pure {
        require(bytes(_str).length > 0, "String cannot be empty");
    }

    function _validateAmount(uint256 _amount) internal pure {
        require(_amount > 0, "Amount must be greater than 0");
    }
"#;

/// Helper names declared by [`VALIDATION_HELPERS`].
pub const VALIDATION_HELPER_NAMES: [&str; 3] =
    ["_validateAddress", "_validateString", "_validateAmount"];

/// State-changing entry points that get reentrancy and pause guards.
pub const CRITICAL_FUNCTIONS: [&str; 8] = [
    "updateScore",
    "addScoreFactor",
    "registerPayment",
    "verifyPayment",
    "requestVerification",
    "completeVerification",
    "updateOracleData",
    "registerOracle",
];

/// Guard modifiers attached to critical function signatures, directly after
/// the parameter list.
pub const GUARD_MODIFIERS: &str = " nonReentrant whenNotPaused";

/// State variables a hand-rolled security layer declares that collide with
/// the inherited OpenZeppelin members.
pub const DUPLICATE_STATE_VARS: [&str; 2] = ["owner", "locked"];

/// Modifiers a hand-rolled security layer declares that collide with the
/// inherited OpenZeppelin members.
pub const DUPLICATE_MODIFIERS: [&str; 3] = ["onlyOwner", "nonReentrant", "whenNotPaused"];
