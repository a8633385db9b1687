use std::fmt;

use logos::Logos;

/// Value of the named constant `PI`.
///
/// Deliberately fixed at six decimal places; expressions written against the
/// constant rely on this exact value.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141_592;
/// Value of the named constant `e`, fixed at six decimal places.
#[allow(clippy::approx_constant)]
pub const E: f64 = 2.718_281;

/// Represents a lexical token of an expression.
///
/// A token is one whitespace-delimited piece of the input. The set of variants
/// is closed and every token has a fixed [`Category`]; tokens never carry tree
/// structure, which is owned by [`crate::ast::Node`].
///
/// The `logos` attributes classify a single piece. Longest match wins, so
/// `log10` is a function rather than `log` followed by `10`, and `-5` is a
/// number literal rather than a minus sign.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `10`, `-5.5`, `.5` or `2.1e-10`.
    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Named constants: `PI`, `-PI`, `e` and `-e`.
    #[token("PI", |_| Constant::Pi)]
    #[token("-PI", |_| Constant::NegativePi)]
    #[token("e", |_| Constant::E)]
    #[token("-e", |_| Constant::NegativeE)]
    Constant(Constant),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Binary operators: `+`, `-`, `*`, `/`, `%` and `^`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("%", |_| BinaryOperator::Mod)]
    #[token("^", |_| BinaryOperator::Pow)]
    Operator(BinaryOperator),
    /// Unary functions; each must be followed by a parenthesized argument.
    #[token("abs", |_| Function::Abs)]
    #[token("acos", |_| Function::Acos)]
    #[token("asin", |_| Function::Asin)]
    #[token("atan", |_| Function::Atan)]
    #[token("ceil", |_| Function::Ceil)]
    #[token("cos", |_| Function::Cos)]
    #[token("floor", |_| Function::Floor)]
    #[token("log", |_| Function::Log)]
    #[token("log2", |_| Function::Log2)]
    #[token("log10", |_| Function::Log10)]
    #[token("round", |_| Function::Round)]
    #[token("sin", |_| Function::Sin)]
    #[token("sqrt", |_| Function::Sqrt)]
    #[token("tan", |_| Function::Tan)]
    Function(Function),
}

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A number literal.
    OperandLiteral,
    /// A named constant.
    OperandConstant,
    /// One of the six binary operators.
    BinaryOperator,
    /// One of the unary functions.
    UnaryFunction,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Returns the lexical category of the token.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::token::{Category, Token};
    ///
    /// assert_eq!(Token::Number(1.0).category(), Category::OperandLiteral);
    /// assert_eq!(Token::RightParen.category(), Category::RightParen);
    /// ```
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Number(_) => Category::OperandLiteral,
            Self::Constant(_) => Category::OperandConstant,
            Self::LeftParen => Category::LeftParen,
            Self::RightParen => Category::RightParen,
            Self::Operator(_) => Category::BinaryOperator,
            Self::Function(_) => Category::UnaryFunction,
        }
    }

    /// Returns the precedence rank of the token.
    ///
    /// Operands and parentheses rank `0`, functions `1`. Binary operators use
    /// [`BinaryOperator::precedence`]; only those ranks take part in tree
    /// building.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Number(_) | Self::Constant(_) | Self::LeftParen | Self::RightParen => 0,
            Self::Function(_) => 1,
            Self::Operator(op) => op.precedence(),
        }
    }

    /// Returns `true` for the six binary operators.
    #[must_use]
    pub const fn is_binary_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns `true` for unary functions such as `sqrt`.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns `true` only for `^`.
    #[must_use]
    pub const fn is_right_associative(&self) -> bool {
        matches!(self, Self::Operator(op) if op.is_right_associative())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&crate::util::num::format_real(*value)),
            Self::Constant(constant) => fmt::Display::fmt(constant, f),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::Function(function) => fmt::Display::fmt(function, f),
        }
    }
}

/// Represents a named constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// `PI`
    Pi,
    /// `-PI`
    NegativePi,
    /// `e`
    E,
    /// `-e`
    NegativeE,
}

impl Constant {
    /// Returns the numeric value of the constant.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::token::Constant;
    ///
    /// assert_eq!(Constant::NegativePi.value(), -3.141_592);
    /// ```
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => PI,
            Self::NegativePi => -PI,
            Self::E => E,
            Self::NegativeE => -E,
        }
    }

    /// Returns the symbolic spelling of the constant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "PI",
            Self::NegativePi => "-PI",
            Self::E => "e",
            Self::NegativeE => "-e",
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating point remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// All binary operators, lowest precedence first.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Mod, Self::Pow];

    /// Returns the precedence rank; higher binds tighter.
    ///
    /// `+` and `-` rank `2`, `*`, `/` and `%` rank `3`, `^` ranks `4`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Pow => 4,
        }
    }

    /// Returns `true` if repeated applications group from the right.
    ///
    /// Only `^` is right-associative: `2 ^ 2 ^ 3` is `2 ^ (2 ^ 3)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Returns the canonical spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents a unary mathematical function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Absolute value.
    Abs,
    /// Arccosine, in radians.
    Acos,
    /// Arcsine, in radians.
    Asin,
    /// Arctangent, in radians.
    Atan,
    /// Smallest integer greater than or equal to the argument.
    Ceil,
    /// Cosine of an angle in radians.
    Cos,
    /// Largest integer less than or equal to the argument.
    Floor,
    /// Natural logarithm.
    Log,
    /// Base 2 logarithm.
    Log2,
    /// Base 10 logarithm.
    Log10,
    /// Nearest integer, ties toward positive infinity.
    Round,
    /// Sine of an angle in radians.
    Sin,
    /// Square root.
    Sqrt,
    /// Tangent of an angle in radians.
    Tan,
}

impl Function {
    /// All functions in alphabetical order.
    pub const ALL: [Self; 14] = [Self::Abs,
                                 Self::Acos,
                                 Self::Asin,
                                 Self::Atan,
                                 Self::Ceil,
                                 Self::Cos,
                                 Self::Floor,
                                 Self::Log,
                                 Self::Log2,
                                 Self::Log10,
                                 Self::Round,
                                 Self::Sin,
                                 Self::Sqrt,
                                 Self::Tan];

    /// Returns the name the function is written with.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Acos => "acos",
            Self::Asin => "asin",
            Self::Atan => "atan",
            Self::Ceil => "ceil",
            Self::Cos => "cos",
            Self::Floor => "floor",
            Self::Log => "log",
            Self::Log2 => "log2",
            Self::Log10 => "log10",
            Self::Round => "round",
            Self::Sin => "sin",
            Self::Sqrt => "sqrt",
            Self::Tan => "tan",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Literals that overflow to infinity are rejected, so every accepted number
/// renders back to text that parses again.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|value| value.is_finite())
}
