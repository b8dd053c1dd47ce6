use super::ast::{Block, Expr, Program, Stmt};
use super::errors::{ParserError, ParserResult};
use super::lexer::Lexer;
use super::operator::{InfixOperator, Precedence, PrefixOperator};
use super::token::{Token, TokenType};

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    peek: Token,
    errors: Vec<ParserError>,
}

/// Binding power a token has when it appears in infix position.
fn infix_precedence(token: &Token) -> Precedence {
    match token {
        Token::LParen => Precedence::Call,
        Token::LBracket => Precedence::Index,
        t => match InfixOperator::from_token(t) {
            Some(op) => op.precedence(),
            None => Precedence::Lowest,
        },
    }
}

impl<'src> Parser<'src> {
    pub fn new(lexer: Lexer<'src>) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::EndOfFile,
            peek: Token::EndOfFile,
            errors: vec![],
        };

        // Prime the current/peek pair.
        parser.bump();
        parser.bump();

        parser
    }

    /// Advances the stream by one token.
    fn bump(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    fn current_is(&self, t: TokenType) -> bool {
        self.current.token_type() == t
    }

    fn peek_is(&self, t: TokenType) -> bool {
        self.peek.token_type() == t
    }

    /// Advances iff the peek token has the expected type. On a mismatch the
    /// stream is left where it was; the caller abandons the statement.
    fn expect_peek(&mut self, expected: TokenType) -> ParserResult<()> {
        if self.peek_is(expected) {
            self.bump();
            Ok(())
        } else {
            Err(ParserError::UnexpectedToken {
                expected,
                got: self.peek.token_type(),
            })
        }
    }

    /// Like `expect_peek(Identifier)`, yielding the identifier's name.
    fn parse_identifier_name(&mut self) -> ParserResult<String> {
        match &self.peek {
            Token::Identifier(name) => {
                let name = name.clone();
                self.bump();
                Ok(name)
            }
            t => Err(ParserError::UnexpectedToken {
                expected: TokenType::Identifier,
                got: t.token_type(),
            }),
        }
    }

    /// Consumes the whole token stream and builds the program. Errors are
    /// accumulated, not fatal: a failed statement is dropped and parsing
    /// resumes at the next token, so several problems can be reported per
    /// run. A tree that comes with errors must not be trusted.
    pub fn parse_program(mut self) -> Result<Program, Vec<ParserError>> {
        let mut statements = vec![];

        while !self.current_is(TokenType::EndOfFile) {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(e) => self.errors.push(e),
            }
            self.bump();
        }

        if self.errors.is_empty() {
            Ok(Program::new(statements))
        } else {
            Err(self.errors)
        }
    }

    /// Parses one statement, leaving `current` on its final token.
    fn parse_statement(&mut self) -> ParserResult<Stmt> {
        match self.current {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> ParserResult<Stmt> {
        let name = self.parse_identifier_name()?;
        self.expect_peek(TokenType::Assign)?;
        self.bump();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenType::Semicolon) {
            self.bump();
        }

        Ok(Stmt::Let(name, value))
    }

    fn parse_return_statement(&mut self) -> ParserResult<Stmt> {
        // The return value is optional: `return;`, or `return` closing out
        // a block or the input.
        if self.peek_is(TokenType::Semicolon) {
            self.bump();
            return Ok(Stmt::Return(None));
        }
        if self.peek_is(TokenType::RBrace) || self.peek_is(TokenType::EndOfFile) {
            return Ok(Stmt::Return(None));
        }

        self.bump();
        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenType::Semicolon) {
            self.bump();
        }

        Ok(Stmt::Return(Some(value)))
    }

    fn parse_expression_statement(&mut self) -> ParserResult<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        // The terminator is optional so the REPL accepts bare expressions.
        if self.peek_is(TokenType::Semicolon) {
            self.bump();
        }

        Ok(Stmt::Expression(expr))
    }

    /// Pratt parsing: a prefix parse rooted at the current token, then
    /// infix extensions while the next token binds tighter than
    /// `min_precedence`.
    fn parse_expression(&mut self, min_precedence: Precedence) -> ParserResult<Expr> {
        let mut lhs = self.parse_prefix()?;

        while !self.peek_is(TokenType::Semicolon) && min_precedence < infix_precedence(&self.peek) {
            lhs = match &self.peek {
                Token::LParen => {
                    self.bump();
                    self.parse_call_expression(lhs)?
                }
                Token::LBracket => {
                    self.bump();
                    self.parse_index_expression(lhs)?
                }
                t => match InfixOperator::from_token(t) {
                    Some(op) => {
                        self.bump();
                        self.parse_infix_expression(op, lhs)?
                    }
                    None => break,
                },
            };
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> ParserResult<Expr> {
        match self.current.clone() {
            Token::Identifier(name) => Ok(Expr::Identifier(name)),
            Token::Int(n) => Ok(Expr::Integer(n)),
            Token::Str(s) => Ok(Expr::Str(s)),
            Token::True => Ok(Expr::Boolean(true)),
            Token::False => Ok(Expr::Boolean(false)),
            Token::Bang => self.parse_prefix_expression(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_expression(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => Ok(Expr::Array(self.parse_expression_list(TokenType::RBracket)?)),
            Token::LBrace => self.parse_hash_literal(),
            t => Err(ParserError::NoPrefixParseFn(t.token_type())),
        }
    }

    fn parse_prefix_expression(&mut self, op: PrefixOperator) -> ParserResult<Expr> {
        self.bump();
        let operand = self.parse_expression(Precedence::Prefix)?;
        Ok(Expr::Prefix(op, Box::new(operand)))
    }

    fn parse_grouped_expression(&mut self) -> ParserResult<Expr> {
        self.bump();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenType::RParen)?;
        Ok(expr)
    }

    fn parse_if_expression(&mut self) -> ParserResult<Expr> {
        self.expect_peek(TokenType::LParen)?;
        self.bump();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenType::RParen)?;

        self.expect_peek(TokenType::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(TokenType::Else) {
            self.bump();
            self.expect_peek(TokenType::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// Current token is `{`; statements run until the matching `}` (or the
    /// input ends, best-effort).
    fn parse_block(&mut self) -> ParserResult<Block> {
        let mut statements = vec![];

        self.bump();
        while !self.current_is(TokenType::RBrace) && !self.current_is(TokenType::EndOfFile) {
            statements.push(self.parse_statement()?);
            self.bump();
        }

        Ok(Block::new(statements))
    }

    fn parse_function_literal(&mut self) -> ParserResult<Expr> {
        self.expect_peek(TokenType::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenType::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::Function { parameters, body })
    }

    fn parse_function_parameters(&mut self) -> ParserResult<Vec<String>> {
        let mut parameters = vec![];

        if self.peek_is(TokenType::RParen) {
            self.bump();
            return Ok(parameters);
        }

        parameters.push(self.parse_identifier_name()?);
        while self.peek_is(TokenType::Comma) {
            self.bump();
            parameters.push(self.parse_identifier_name()?);
        }

        self.expect_peek(TokenType::RParen)?;
        Ok(parameters)
    }

    /// Comma-separated expressions terminated by `end`; the current token
    /// is the opening delimiter.
    fn parse_expression_list(&mut self, end: TokenType) -> ParserResult<Vec<Expr>> {
        let mut list = vec![];

        if self.peek_is(end) {
            self.bump();
            return Ok(list);
        }

        self.bump();
        list.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenType::Comma) {
            self.bump();
            self.bump();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Ok(list)
    }

    fn parse_hash_literal(&mut self) -> ParserResult<Expr> {
        let mut pairs = vec![];

        while !self.peek_is(TokenType::RBrace) {
            self.bump();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenType::Colon)?;
            self.bump();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenType::RBrace) {
                self.expect_peek(TokenType::Comma)?;
            }
        }

        self.expect_peek(TokenType::RBrace)?;
        Ok(Expr::Hash(pairs))
    }

    fn parse_infix_expression(&mut self, op: InfixOperator, lhs: Expr) -> ParserResult<Expr> {
        let precedence = op.precedence();
        self.bump();
        let rhs = self.parse_expression(precedence)?;
        Ok(Expr::Infix(op, Box::new(lhs), Box::new(rhs)))
    }

    fn parse_call_expression(&mut self, callee: Expr) -> ParserResult<Expr> {
        let arguments = self.parse_expression_list(TokenType::RParen)?;
        Ok(Expr::Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    fn parse_index_expression(&mut self, collection: Expr) -> ParserResult<Expr> {
        self.bump();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenType::RBracket)?;
        Ok(Expr::Index(Box::new(collection), Box::new(index)))
    }
}
