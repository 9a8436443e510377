use pasc::ast::{BinOpKind, Decl, Expr, Program, Stmt, TypeSpec, UnaryOpKind};
use pasc::errors::{PascError, PascResult};
use pasc::frontend::lexer::scan;
use pasc::frontend::parser::Parser;
use pasc::LineNumber;

fn parse_source(source: &str) -> PascResult<Program> {
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;
    Parser::new(&tokens).parse()
}

// Pull the single assignment expression out of "BEGIN x := ... END".
fn assigned_expr(program: &Program) -> &Expr {
    match &program.block.body {
        Stmt::Compound(statements) => match &statements[0] {
            Stmt::Assign { value, .. } => value,
            other => panic!("Expected an assignment, but got: {:?}", other),
        },
        other => panic!("Expected a compound body, but got: {:?}", other),
    }
}

#[test]
fn test_minimal_program() -> PascResult<()> {
    let program = parse_source("PROGRAM p; BEGIN END.")?;
    assert_eq!(program.name, "p");
    assert!(program.block.declarations.is_empty());
    assert_eq!(program.block.body, Stmt::Compound(vec![Stmt::NoOp]));
    Ok(())
}

#[test]
fn test_precedence_structure() -> PascResult<()> {
    let program = parse_source("PROGRAM p; VAR x : INTEGER; BEGIN x := 2 + 3 * 4 END.")?;
    let expected = Expr::BinOp {
        left: Box::new(Expr::IntegerLiteral(2)),
        op: BinOpKind::Add,
        right: Box::new(Expr::BinOp {
            left: Box::new(Expr::IntegerLiteral(3)),
            op: BinOpKind::Multiply,
            right: Box::new(Expr::IntegerLiteral(4)),
        }),
    };
    assert_eq!(assigned_expr(&program), &expected);
    Ok(())
}

#[test]
fn test_parentheses_override_precedence() -> PascResult<()> {
    let program = parse_source("PROGRAM p; VAR x : INTEGER; BEGIN x := (2 + 3) * 4 END.")?;
    let expected = Expr::BinOp {
        left: Box::new(Expr::BinOp {
            left: Box::new(Expr::IntegerLiteral(2)),
            op: BinOpKind::Add,
            right: Box::new(Expr::IntegerLiteral(3)),
        }),
        op: BinOpKind::Multiply,
        right: Box::new(Expr::IntegerLiteral(4)),
    };
    assert_eq!(assigned_expr(&program), &expected);
    Ok(())
}

#[test]
fn test_unary_operators_nest() -> PascResult<()> {
    let program = parse_source("PROGRAM p; VAR x : INTEGER; BEGIN x := - -5 END.")?;
    let expected = Expr::UnaryOp {
        op: UnaryOpKind::Minus,
        operand: Box::new(Expr::UnaryOp {
            op: UnaryOpKind::Minus,
            operand: Box::new(Expr::IntegerLiteral(5)),
        }),
    };
    assert_eq!(assigned_expr(&program), &expected);
    Ok(())
}

#[test]
fn test_division_tokens_map_to_distinct_operators() -> PascResult<()> {
    let program = parse_source("PROGRAM p; VAR x : INTEGER; BEGIN x := 7 / 2 DIV 3 END.")?;
    // Both divisions live in one term, left-associated.
    let expected = Expr::BinOp {
        left: Box::new(Expr::BinOp {
            left: Box::new(Expr::IntegerLiteral(7)),
            op: BinOpKind::FloatDivide,
            right: Box::new(Expr::IntegerLiteral(2)),
        }),
        op: BinOpKind::IntDivide,
        right: Box::new(Expr::IntegerLiteral(3)),
    };
    assert_eq!(assigned_expr(&program), &expected);
    Ok(())
}

#[test]
fn test_var_decl_with_multiple_names() -> PascResult<()> {
    let program = parse_source("PROGRAM p; VAR a, b : INTEGER; c : REAL; BEGIN END.")?;
    let names: Vec<(&str, TypeSpec)> = program
        .block
        .declarations
        .iter()
        .map(|decl| match decl {
            Decl::Var(var_decl) => (var_decl.name.as_str(), var_decl.type_spec),
            other => panic!("Expected a variable declaration, but got: {:?}", other),
        })
        .collect();
    assert_eq!(
        names,
        vec![
            ("a", TypeSpec::Integer),
            ("b", TypeSpec::Integer),
            ("c", TypeSpec::Real),
        ]
    );
    Ok(())
}

#[test]
fn test_procedure_declaration() -> PascResult<()> {
    let source = "PROGRAM p;
VAR x : INTEGER;
PROCEDURE q;
BEGIN x := 1 END;
BEGIN x := 2 END.";
    let program = parse_source(source)?;
    assert_eq!(program.block.declarations.len(), 2);
    match &program.block.declarations[1] {
        Decl::Procedure(proc_decl) => {
            assert_eq!(proc_decl.name, "q");
            assert_eq!(
                proc_decl.block.body,
                Stmt::Compound(vec![Stmt::Assign {
                    name: "x".to_string(),
                    value: Expr::IntegerLiteral(1),
                }])
            );
        }
        other => panic!("Expected a procedure declaration, but got: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_ternary_becomes_conditional_expression() -> PascResult<()> {
    let program = parse_source("PROGRAM p; VAR x : INTEGER; BEGIN x := 1 ? 2 : 3 END.")?;
    let expected = Expr::Conditional {
        condition: Box::new(Expr::IntegerLiteral(1)),
        then_branch: Box::new(Expr::IntegerLiteral(2)),
        else_branch: Box::new(Expr::IntegerLiteral(3)),
    };
    assert_eq!(assigned_expr(&program), &expected);
    Ok(())
}

#[test]
fn test_empty_statement_in_list() -> PascResult<()> {
    let program = parse_source("PROGRAM p; VAR x : INTEGER; BEGIN x := 1; END.")?;
    assert_eq!(
        program.block.body,
        Stmt::Compound(vec![
            Stmt::Assign {
                name: "x".to_string(),
                value: Expr::IntegerLiteral(1),
            },
            Stmt::NoOp,
        ])
    );
    Ok(())
}

#[test]
fn test_missing_semicolon_after_program_name() -> PascResult<()> {
    let result = parse_source("PROGRAM p BEGIN END.");
    if let Err(PascError::SyntaxError { line, .. }) = result {
        assert_eq!(line, 1);
        Ok(())
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_trailing_input_after_program_end() -> PascResult<()> {
    let result = parse_source("PROGRAM p; BEGIN END. x");
    if let Err(PascError::SyntaxError { expected, .. }) = result {
        assert_eq!(expected, "end of input");
        Ok(())
    } else {
        panic!("Expected a SyntaxError for trailing input, but got: {:?}", result);
    }
}

#[test]
fn test_missing_program_terminator() -> PascResult<()> {
    let result = parse_source("PROGRAM p; BEGIN END");
    if let Err(PascError::SyntaxError { expected, .. }) = result {
        assert_eq!(expected, "'.'");
        Ok(())
    } else {
        panic!("Expected a SyntaxError for a missing '.', but got: {:?}", result);
    }
}
