use aegis_core::ContractSource;
use aegis_transform::pause_functions::PauseFunctions;
use aegis_transform::{Outcome, Transform};

const MIXED_IN: &str = r#"pragma solidity ^0.8.19;
contract Vault is ReentrancyGuard, Ownable, Pausable {
    uint256 public total;

    constructor() {
        total = 0;
    }

    function deposit() external payable {
        total += msg.value;
    }
}
"#;

#[test]
fn test_pause_functions_land_right_after_the_constructor() {
    let mut src = ContractSource::from_text("Vault", MIXED_IN);
    let outcome = PauseFunctions.apply(&mut src).unwrap();

    assert_eq!(outcome, Outcome::Applied);
    let ctor_end = src.text.find("total = 0;").unwrap();
    let pause = src.text.find("function pause() external onlyOwner {").unwrap();
    let unpause = src.text.find("function unpause() external onlyOwner {").unwrap();
    let deposit = src.text.find("function deposit()").unwrap();
    assert!(ctor_end < pause && pause < unpause && unpause < deposit);
    assert!(src.text.contains("_pause();"));
    assert!(src.text.contains("_unpause();"));
}

#[test]
fn test_pause_functions_second_run_is_identity() {
    let mut src = ContractSource::from_text("Vault", MIXED_IN);
    PauseFunctions.apply(&mut src).unwrap();
    let once = src.text.clone();

    let outcome = PauseFunctions.apply(&mut src).unwrap();
    assert_eq!(outcome, Outcome::AlreadyApplied);
    assert_eq!(src.text, once);
}

#[test]
fn test_pause_functions_without_constructor_leave_the_file_byte_identical() {
    let text = "pragma solidity ^0.8.19;\ncontract Foo is ReentrancyGuard, Ownable, Pausable {\n  function f() external {}\n}\n";
    let mut src = ContractSource::from_text("Foo", text);
    let outcome = PauseFunctions.apply(&mut src).unwrap();

    assert_eq!(outcome, Outcome::not_applicable("no constructor found"));
    assert_eq!(src.text, text);
}

#[test]
fn test_pause_functions_without_pausable_base_skip() {
    let text = "pragma solidity ^0.8.19;\ncontract Foo {\n  constructor() {}\n}\n";
    let mut src = ContractSource::from_text("Foo", text);
    let outcome = PauseFunctions.apply(&mut src).unwrap();

    assert_eq!(outcome, Outcome::not_applicable("Pausable not inherited"));
    assert_eq!(src.text, text);
}

#[test]
fn test_pause_functions_with_nested_constructor_braces() {
    // a non-greedy regex would cut this body at the inner brace
    let text = r#"pragma solidity ^0.8.19;
contract Foo is ReentrancyGuard, Ownable, Pausable {
    constructor() {
        if (block.number > 0) {
            emit Deployed();
        }
    }
}
"#;
    let mut src = ContractSource::from_text("Foo", text);
    let outcome = PauseFunctions.apply(&mut src).unwrap();

    assert_eq!(outcome, Outcome::Applied);
    let inner = src.text.find("emit Deployed();").unwrap();
    let pause = src.text.find("function pause()").unwrap();
    assert!(inner < pause, "pause must be inserted after the whole body");
}
