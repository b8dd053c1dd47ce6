use super::operator::{InfixOperator, PrefixOperator};

#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    Let(String, Expr),
    Return(Option<Expr>),
    Expression(Expr),
}

/// A braced statement sequence, as found in `if` arms and function bodies.
/// Not a statement itself: a bare `{` in statement position starts a hash
/// literal.
#[derive(Debug, PartialEq, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Identifier(String),
    Integer(i64),
    Str(String),
    Boolean(bool),
    Prefix(PrefixOperator, Box<Expr>),
    Infix(InfixOperator, Box<Expr>, Box<Expr>),
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    Function {
        parameters: Vec<String>,
        body: Block,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Array(Vec<Expr>),
    Index(Box<Expr>, Box<Expr>),
    /// Key/value pairs in source order.
    Hash(Vec<(Expr, Expr)>),
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn render(&self) -> String {
        let stmts: Vec<_> = self.statements.iter().map(|s| s.render()).collect();
        stmts.join(" ")
    }

    pub fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => String::new(),
        }
    }
}

impl Stmt {
    /// Renders the statement back to parseable source text.
    pub fn render(&self) -> String {
        match self {
            Stmt::Let(name, expr) => format!("let {} = {};", name, expr.render()),
            Stmt::Return(None) => "return;".to_owned(),
            Stmt::Return(Some(expr)) => format!("return {};", expr.render()),
            Stmt::Expression(expr) => expr.render(),
        }
    }

    /// The canonical token that introduced this statement.
    pub fn token_literal(&self) -> String {
        match self {
            Stmt::Let(_, _) => "let".to_owned(),
            Stmt::Return(_) => "return".to_owned(),
            Stmt::Expression(expr) => expr.token_literal(),
        }
    }
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }

    pub fn render(&self) -> String {
        if self.statements.is_empty() {
            return "{ }".to_owned();
        }
        let stmts: Vec<_> = self.statements.iter().map(|s| s.render()).collect();
        format!("{{ {} }}", stmts.join(" "))
    }
}

impl Expr {
    /// Renders the expression back to parseable source text. Operator
    /// applications come back fully parenthesized, so re-parsing the render
    /// reproduces the same tree.
    pub fn render(&self) -> String {
        match self {
            Expr::Identifier(name) => name.clone(),
            Expr::Integer(n) => n.to_string(),
            Expr::Str(s) => format!("\"{}\"", s),
            Expr::Boolean(b) => b.to_string(),
            Expr::Prefix(op, operand) => format!("({}{})", op.symbol(), operand.render()),
            Expr::Infix(op, lhs, rhs) => {
                format!("({} {} {})", lhs.render(), op.symbol(), rhs.render())
            }
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                let mut out = format!("if ({}) {}", condition.render(), consequence.render());
                if let Some(alt) = alternative {
                    out.push_str(" else ");
                    out.push_str(&alt.render());
                }
                out
            }
            Expr::Function { parameters, body } => {
                format!("fn({}) {}", parameters.join(", "), body.render())
            }
            Expr::Call { callee, arguments } => {
                let args: Vec<_> = arguments.iter().map(|a| a.render()).collect();
                format!("{}({})", callee.render(), args.join(", "))
            }
            Expr::Array(elements) => {
                let elems: Vec<_> = elements.iter().map(|e| e.render()).collect();
                format!("[{}]", elems.join(", "))
            }
            Expr::Index(collection, index) => {
                format!("({}[{}])", collection.render(), index.render())
            }
            Expr::Hash(pairs) => {
                let pairs: Vec<_> = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k.render(), v.render()))
                    .collect();
                format!("{{{}}}", pairs.join(", "))
            }
        }
    }

    /// The canonical token that introduced this expression.
    pub fn token_literal(&self) -> String {
        match self {
            Expr::Identifier(name) => name.clone(),
            Expr::Integer(n) => n.to_string(),
            Expr::Str(s) => s.clone(),
            Expr::Boolean(b) => b.to_string(),
            Expr::Prefix(op, _) => op.symbol().to_owned(),
            Expr::Infix(op, _, _) => op.symbol().to_owned(),
            Expr::If { .. } => "if".to_owned(),
            Expr::Function { .. } => "fn".to_owned(),
            Expr::Call { .. } => "(".to_owned(),
            Expr::Array(_) | Expr::Index(_, _) => "[".to_owned(),
            Expr::Hash(_) => "{".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_let_statement() {
        let program = Program::new(vec![Stmt::Let(
            "myVar".to_owned(),
            Expr::Identifier("anotherVar".to_owned()),
        )]);

        assert_eq!(program.render(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_render_nested_expressions() {
        let expr = Expr::Infix(
            InfixOperator::Add,
            Box::new(Expr::Identifier("a".to_owned())),
            Box::new(Expr::Infix(
                InfixOperator::Multiply,
                Box::new(Expr::Identifier("b".to_owned())),
                Box::new(Expr::Identifier("c".to_owned())),
            )),
        );

        assert_eq!(expr.render(), "(a + (b * c))");
    }

    #[test]
    fn test_render_function_literal() {
        let expr = Expr::Function {
            parameters: vec!["x".to_owned(), "y".to_owned()],
            body: Block::new(vec![Stmt::Expression(Expr::Infix(
                InfixOperator::Add,
                Box::new(Expr::Identifier("x".to_owned())),
                Box::new(Expr::Identifier("y".to_owned())),
            ))]),
        };

        assert_eq!(expr.render(), "fn(x, y) { (x + y) }");
        assert_eq!(expr.token_literal(), "fn");
    }
}
