use super::token::Token;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Precedence {
    // Lowest precedence
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index, // Highest precedence
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefixOperator {
    Negate,
    Not,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    EqualTo,
    NotEqualTo,
    LessThan,
    GreaterThan,
}

impl PrefixOperator {
    pub fn from_token(token: &Token) -> Option<PrefixOperator> {
        let op = match token {
            Token::Minus => PrefixOperator::Negate,
            Token::Bang => PrefixOperator::Not,
            _ => return None,
        };

        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PrefixOperator::Not => "!",
            PrefixOperator::Negate => "-",
        }
    }
}

impl InfixOperator {
    pub fn from_token(token: &Token) -> Option<InfixOperator> {
        let op = match token {
            Token::Plus => InfixOperator::Add,
            Token::Minus => InfixOperator::Subtract,
            Token::Asterisk => InfixOperator::Multiply,
            Token::Slash => InfixOperator::Divide,
            Token::Eq => InfixOperator::EqualTo,
            Token::NotEq => InfixOperator::NotEqualTo,
            Token::Lt => InfixOperator::LessThan,
            Token::Gt => InfixOperator::GreaterThan,
            _ => return None,
        };

        Some(op)
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            InfixOperator::EqualTo | InfixOperator::NotEqualTo => Precedence::Equals,
            InfixOperator::LessThan | InfixOperator::GreaterThan => Precedence::LessGreater,
            InfixOperator::Add | InfixOperator::Subtract => Precedence::Sum,
            InfixOperator::Multiply | InfixOperator::Divide => Precedence::Product,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            InfixOperator::Add => "+",
            InfixOperator::Subtract => "-",
            InfixOperator::Multiply => "*",
            InfixOperator::Divide => "/",
            InfixOperator::EqualTo => "==",
            InfixOperator::NotEqualTo => "!=",
            InfixOperator::LessThan => "<",
            InfixOperator::GreaterThan => ">",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::more_asserts::*;

    #[test]
    fn test_precedence() {
        assert_lt!(Precedence::Lowest, Precedence::Index);
        assert_lt!(Precedence::Equals, Precedence::LessGreater);
        assert_gt!(Precedence::Product, Precedence::Sum);
        assert_gt!(Precedence::Prefix, Precedence::Product);
        assert_gt!(Precedence::Call, Precedence::Prefix);
        assert_gt!(Precedence::Index, Precedence::Call);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            InfixOperator::from_token(&Token::Plus),
            Some(InfixOperator::Add)
        );

        assert_eq!(
            InfixOperator::from_token(&Token::Lt),
            Some(InfixOperator::LessThan)
        );

        assert_eq!(
            PrefixOperator::from_token(&Token::Minus),
            Some(PrefixOperator::Negate)
        );

        assert_eq!(InfixOperator::from_token(&Token::Bang), None);
        assert_eq!(PrefixOperator::from_token(&Token::Asterisk), None);
    }
}
