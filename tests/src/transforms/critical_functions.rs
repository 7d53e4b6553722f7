use aegis_core::ContractSource;
use aegis_transform::critical_functions::CriticalFunctions;
use aegis_transform::{Outcome, Transform};

const ENTRY_POINTS: &str = r#"pragma solidity ^0.8.19;
contract Registry is ReentrancyGuard, Ownable, Pausable {
    constructor() {}

    function registerPayment(address _payer, uint256 _amount) external onlyOwner {
        _amount;
    }

    function verifyPayment(bytes32 _id) external returns (bool) {
        return _id != bytes32(0);
    }

    function getPayment(bytes32 _id) external view returns (uint256) {
        return 0;
    }
}
"#;

#[test]
fn test_guards_are_appended_after_the_real_parameter_list() {
    let mut src = ContractSource::from_text("Registry", ENTRY_POINTS);
    let outcome = CriticalFunctions.apply(&mut src).unwrap();

    assert_eq!(outcome, Outcome::Applied);
    // the parameter lists survive byte for byte
    assert!(src.text.contains(
        "function registerPayment(address _payer, uint256 _amount) nonReentrant whenNotPaused external onlyOwner {"
    ));
    assert!(src.text.contains(
        "function verifyPayment(bytes32 _id) nonReentrant whenNotPaused external returns (bool) {"
    ));
}

#[test]
fn test_guards_skip_functions_outside_the_critical_list() {
    let mut src = ContractSource::from_text("Registry", ENTRY_POINTS);
    CriticalFunctions.apply(&mut src).unwrap();

    assert!(src.text.contains("function getPayment(bytes32 _id) external view returns (uint256) {"));
}

#[test]
fn test_guards_are_not_attached_twice() {
    let mut src = ContractSource::from_text("Registry", ENTRY_POINTS);
    CriticalFunctions.apply(&mut src).unwrap();
    let once = src.text.clone();

    let outcome = CriticalFunctions.apply(&mut src).unwrap();
    assert_eq!(outcome, Outcome::AlreadyApplied);
    assert_eq!(src.text, once);
    assert_eq!(src.text.matches("nonReentrant whenNotPaused").count(), 2);
}

#[test]
fn test_guards_only_fill_in_the_unguarded_functions() {
    let text = r#"pragma solidity ^0.8.19;
contract Registry is ReentrancyGuard, Ownable, Pausable {
    function registerPayment(address _payer) external nonReentrant whenNotPaused {}

    function verifyPayment(bytes32 _id) external {}
}
"#;
    let mut src = ContractSource::from_text("Registry", text);
    let outcome = CriticalFunctions.apply(&mut src).unwrap();

    assert_eq!(outcome, Outcome::Applied);
    // the guarded one is untouched, the bare one gains guards
    assert!(src.text.contains("function registerPayment(address _payer) external nonReentrant whenNotPaused {}"));
    assert!(src.text.contains("function verifyPayment(bytes32 _id) nonReentrant whenNotPaused external {}"));
}

#[test]
fn test_no_critical_functions_is_a_skip() {
    let text = "pragma solidity ^0.8.19;\ncontract Foo is ReentrancyGuard, Ownable, Pausable {\n  function helper() external {}\n}\n";
    let mut src = ContractSource::from_text("Foo", text);
    let outcome = CriticalFunctions.apply(&mut src).unwrap();

    assert_eq!(outcome, Outcome::not_applicable("no critical functions found"));
    assert_eq!(src.text, text);
}

#[test]
fn test_missing_mixins_is_a_skip() {
    let text = "pragma solidity ^0.8.19;\ncontract Foo {\n  function registerPayment(address _p) external {}\n}\n";
    let mut src = ContractSource::from_text("Foo", text);
    let outcome = CriticalFunctions.apply(&mut src).unwrap();

    assert_eq!(outcome, Outcome::not_applicable("security mixins not inherited"));
    assert_eq!(src.text, text);
}
