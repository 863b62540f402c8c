//! kilnc-ast - AST Node Definitions
//!
//! Syntax tree shapes for Kiln programs. Nodes hold lexer tokens, borrowing
//! the source they were scanned from, and carry no construction logic
//! beyond plain constructors.
//!
//! # Example
//!
//! ```
//! use kilnc_ast::{AstDeclaration, AstExpression, AstKind, AstStatement, AstType};
//! use kilnc_lex::{tokenize, TokenKind};
//!
//! let tokens: Vec<_> = tokenize("x int 42")
//!     .into_iter()
//!     .filter(|t| t.kind != TokenKind::Whitespace)
//!     .collect();
//!
//! let decl = AstStatement::Declaration(AstDeclaration::new(
//!     tokens[0].clone(),
//!     AstType::new(tokens[1].clone()),
//!     Some(AstExpression::int(tokens[2].clone())),
//! ));
//!
//! assert_eq!(decl.kind(), AstKind::Declaration);
//! ```

#![warn(missing_docs)]

use std::collections::BTreeMap;
use std::fmt;

use kilnc_lex::Token;
use kilnc_util::Span;

/// Kind tag of an AST node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AstKind {
    /// A whole program
    Program,
    /// One source file
    File,
    /// A braced list of statements
    Scope,
    /// A variable declaration
    Declaration,
    /// A constant declaration
    ConstDeclaration,
    /// `left op right`
    BinaryOperator,
    /// A list of expressions
    List,
    /// A procedure literal
    Procedure,
    /// An integer literal
    IntLiteral,
    /// A float literal
    FloatLiteral,
    /// A string literal
    StringLiteral,
}

impl fmt::Display for AstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A program: its files keyed by name
#[derive(Debug, Clone, Default)]
pub struct AstProgram<'src> {
    /// Files of the program, ordered by name
    pub files: BTreeMap<String, AstFile<'src>>,
}

impl<'src> AstProgram<'src> {
    /// Creates a program with no files
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, returning the one it replaced if the name was taken.
    pub fn add_file(&mut self, name: impl Into<String>, file: AstFile<'src>) -> Option<AstFile<'src>> {
        self.files.insert(name.into(), file)
    }

    /// Always [`AstKind::Program`]
    pub fn kind(&self) -> AstKind {
        AstKind::Program
    }
}

/// Top-level statements of one file
#[derive(Debug, Clone, Default)]
pub struct AstFile<'src> {
    /// Statements in source order
    pub statements: Vec<AstStatement<'src>>,
}

impl<'src> AstFile<'src> {
    /// Creates an empty file
    pub fn new() -> Self {
        Self::default()
    }

    /// Always [`AstKind::File`]
    pub fn kind(&self) -> AstKind {
        AstKind::File
    }
}

/// Statement
#[derive(Debug, Clone)]
pub enum AstStatement<'src> {
    /// A nested block
    Scope(AstScope<'src>),
    /// A variable declaration
    Declaration(AstDeclaration<'src>),
    /// A constant declaration
    ConstDeclaration(AstDeclaration<'src>),
    /// An expression used as a statement
    Expression(AstExpression<'src>),
}

impl<'src> AstStatement<'src> {
    /// Kind tag of the statement, or of the scope or expression it wraps
    pub fn kind(&self) -> AstKind {
        match self {
            AstStatement::Scope(scope) => scope.kind(),
            AstStatement::Declaration(_) => AstKind::Declaration,
            AstStatement::ConstDeclaration(_) => AstKind::ConstDeclaration,
            AstStatement::Expression(expr) => expr.kind(),
        }
    }
}

/// A nested block of statements
#[derive(Debug, Clone, Default)]
pub struct AstScope<'src> {
    /// Statements in source order
    pub statements: Vec<AstStatement<'src>>,
}

impl<'src> AstScope<'src> {
    /// Creates an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Always [`AstKind::Scope`]
    pub fn kind(&self) -> AstKind {
        AstKind::Scope
    }
}

/// `identifier : type = value`, shared by variable and constant declarations
#[derive(Debug, Clone)]
pub struct AstDeclaration<'src> {
    /// The declared name
    pub identifier: Token<'src>,
    /// The annotated type
    pub ty: AstType<'src>,
    /// Initial value, if one was given
    pub value: Option<AstExpression<'src>>,
}

impl<'src> AstDeclaration<'src> {
    /// Creates a declaration
    pub fn new(
        identifier: Token<'src>,
        ty: AstType<'src>,
        value: Option<AstExpression<'src>>,
    ) -> Self {
        Self {
            identifier,
            ty,
            value,
        }
    }

    /// The declared name.
    pub fn name(&self) -> &'src str {
        self.identifier.text()
    }
}

/// A type annotation, currently a bare name
#[derive(Debug, Clone)]
pub struct AstType<'src> {
    /// The type name
    pub name: Token<'src>,
}

impl<'src> AstType<'src> {
    /// Creates a type annotation from its name token
    pub fn new(name: Token<'src>) -> Self {
        Self { name }
    }
}

/// Expression
#[derive(Debug, Clone)]
pub enum AstExpression<'src> {
    /// `left operator right`
    BinaryOperator(AstBinaryOperator<'src>),
    /// A list of expressions
    List(AstList<'src>),
    /// A procedure literal
    Procedure(AstProcedure<'src>),
    /// An integer literal
    IntLiteral(AstLiteral<'src>),
    /// A float literal
    FloatLiteral(AstLiteral<'src>),
    /// A string literal
    StringLiteral(AstLiteral<'src>),
}

impl<'src> AstExpression<'src> {
    /// Integer literal expression
    pub fn int(token: Token<'src>) -> Self {
        AstExpression::IntLiteral(AstLiteral { token })
    }

    /// Float literal expression
    pub fn float(token: Token<'src>) -> Self {
        AstExpression::FloatLiteral(AstLiteral { token })
    }

    /// String literal expression
    pub fn string(token: Token<'src>) -> Self {
        AstExpression::StringLiteral(AstLiteral { token })
    }

    /// Binary operator expression
    pub fn binary(left: AstExpression<'src>, operator: Token<'src>, right: AstExpression<'src>) -> Self {
        AstExpression::BinaryOperator(AstBinaryOperator {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Kind tag of the expression
    pub fn kind(&self) -> AstKind {
        match self {
            AstExpression::BinaryOperator(_) => AstKind::BinaryOperator,
            AstExpression::List(_) => AstKind::List,
            AstExpression::Procedure(_) => AstKind::Procedure,
            AstExpression::IntLiteral(_) => AstKind::IntLiteral,
            AstExpression::FloatLiteral(_) => AstKind::FloatLiteral,
            AstExpression::StringLiteral(_) => AstKind::StringLiteral,
        }
    }

    /// Source range covered by the tokens of the expression.
    ///
    /// Empty lists and procedures without tokens have no span.
    pub fn span(&self) -> Option<Span> {
        match self {
            AstExpression::BinaryOperator(op) => {
                let operator = op.operator.span();
                let spans = [op.left.span(), Some(operator), op.right.span()];
                spans.into_iter().flatten().reduce(Span::merge)
            },
            AstExpression::List(list) => list.span(),
            AstExpression::Procedure(proc) => proc.parameters.span(),
            AstExpression::IntLiteral(lit)
            | AstExpression::FloatLiteral(lit)
            | AstExpression::StringLiteral(lit) => Some(lit.token.span()),
        }
    }
}

/// `left operator right`
#[derive(Debug, Clone)]
pub struct AstBinaryOperator<'src> {
    /// Left operand
    pub left: Box<AstExpression<'src>>,
    /// The operator token
    pub operator: Token<'src>,
    /// Right operand
    pub right: Box<AstExpression<'src>>,
}

/// A list of expressions
#[derive(Debug, Clone, Default)]
pub struct AstList<'src> {
    /// Elements in source order
    pub expressions: Vec<AstExpression<'src>>,
}

impl<'src> AstList<'src> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    fn span(&self) -> Option<Span> {
        self.expressions
            .iter()
            .filter_map(AstExpression::span)
            .reduce(Span::merge)
    }
}

/// A procedure: its parameter list and body
#[derive(Debug, Clone, Default)]
pub struct AstProcedure<'src> {
    /// Parameter list
    pub parameters: AstList<'src>,
    /// Procedure body
    pub body: AstScope<'src>,
}

/// A literal, holding the token it was written as
#[derive(Debug, Clone)]
pub struct AstLiteral<'src> {
    /// The literal token
    pub token: Token<'src>,
}

impl<'src> AstLiteral<'src> {
    /// Value of an integer literal
    pub fn int_value(&self) -> Option<u64> {
        self.token.as_int()
    }

    /// Value of a float literal
    pub fn float_value(&self) -> Option<f64> {
        self.token.as_float()
    }

    /// Decoded contents of a string literal
    pub fn str_value(&self) -> Option<&str> {
        self.token.as_str()
    }
}
