//! End-to-end tests for the lex-then-parse pipeline on full contract sources.

use solv_syntax::ast::{BuiltinKind, Expr, Member, Statement, Visibility};
use solv_syntax::parser::ParseOptions;
use solv_syntax::{SyntaxError, parse_contract, parse_contract_with};

const WALLET: &str = r#"
// A minimal wallet.
contract Wallet {
    address public owner;
    uint balance;

    constructor(address initialOwner) public {
        owner = initialOwner;
    }

    function deposit() public payable {
        balance += msg.value;
        emit Deposited(msg.sender, msg.value);
    }

    function withdraw(uint amount) public returns (bool) {
        require(isOwner, unauthorized);
        if (locked) {
            revert(lockedReason);
        }
        balance -= amount;
        msg.sender.transfer(amount);
        return ok;
    }
}
"#;

#[test]
fn test_full_wallet_contract() {
    let contract = parse_contract(WALLET).unwrap();
    assert_eq!(contract.name, "Wallet");
    assert_eq!(contract.members.len(), 5);

    let Member::Variable(owner) = &contract.members[0] else {
        panic!("expected state variable");
    };
    assert_eq!(owner.type_name, "address");
    assert_eq!(owner.visibility, Some(Visibility::Public));
    assert_eq!(owner.name, "owner");

    let Member::Constructor(ctor) = &contract.members[2] else {
        panic!("expected constructor");
    };
    assert_eq!(ctor.parameters.len(), 1);
    assert_eq!(ctor.body.len(), 1);

    let Member::Function(deposit) = &contract.members[3] else {
        panic!("expected function");
    };
    assert_eq!(deposit.name, "deposit");
    assert!(deposit.is_payable);
    assert!(matches!(
        &deposit.body[0],
        Statement::Assignment { right: Expr::Name(n), .. } if n == "msg.value"
    ));
    assert!(matches!(
        &deposit.body[1],
        Statement::Emit { event, arguments } if event == "Deposited" && arguments.len() == 2
    ));

    let Member::Function(withdraw) = &contract.members[4] else {
        panic!("expected function");
    };
    assert_eq!(withdraw.name, "withdraw");
    assert_eq!(withdraw.returns.len(), 1);
    assert_eq!(withdraw.returns[0].type_name, "bool");
    assert_eq!(withdraw.body.len(), 5);
    assert!(matches!(
        &withdraw.body[1],
        Statement::If { then_block, else_block: None, .. }
            if matches!(&then_block[0], Statement::Builtin { kind: BuiltinKind::Revert, .. })
    ));
    assert!(matches!(
        &withdraw.body[3],
        Statement::Expression(Expr::Call { function, .. }) if function == "msg.sender.transfer"
    ));
    assert!(matches!(&withdraw.body[4], Statement::Return(Some(_))));
}

#[test]
fn test_lex_errors_surface_through_the_pipeline() {
    let err = parse_contract("contract C { uint x# }").unwrap_err();
    assert!(matches!(err, SyntaxError::Lex(_)));
}

#[test]
fn test_parse_errors_surface_through_the_pipeline() {
    let err = parse_contract("contract { }").unwrap_err();
    assert!(matches!(err, SyntaxError::Parse(_)));
}

#[test]
fn test_strict_mode_flows_through_the_pipeline() {
    let source = "contract T { event Transfer; uint balance; }";
    let lenient = parse_contract(source).unwrap();
    assert_eq!(lenient.members.len(), 1);

    let strict = parse_contract_with(source, ParseOptions { strict_members: true });
    assert!(matches!(strict, Err(SyntaxError::Parse(_))));
}

#[test]
fn test_comments_and_strings_do_not_disturb_parsing() {
    let contract = parse_contract(
        "contract Notes {
             /* state */
             string note; // single note
             function clear() public {
                 note = empty; // reset
             }
         }",
    )
    .unwrap();
    assert_eq!(contract.members.len(), 2);
}
