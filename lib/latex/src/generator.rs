use parser::{Expr, Operator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Term,
    Factor,
}

impl From<Operator> for Precedence {
    fn from(operator: Operator) -> Self {
        match operator {
            Operator::Add | Operator::Sub => Precedence::Term,
            Operator::Mul | Operator::Div => Precedence::Factor,
        }
    }
}

fn symbol(operator: Operator) -> &'static str {
    match operator {
        Operator::Add => "+",
        Operator::Sub => "-",
        Operator::Mul => r"\times",
        Operator::Div => r"\div",
    }
}

/// `a - (b - c)` and `a / (b / c)` change meaning without the parentheses.
fn is_non_commutative(operator: Operator) -> bool {
    matches!(operator, Operator::Sub | Operator::Div)
}

/// Renders `expr` as infix LaTeX wrapped in `$...$`, using as few parentheses
/// as possible.
///
/// Rendering recurses once per tree level, so extremely deep trees (tens of
/// thousands of nested operators) can exhaust the thread's stack.
pub fn generate(expr: &Expr) -> String {
    let latex = format!("${}$", visit(expr));
    log::debug!("Generated {}", latex);
    latex
}

fn visit(expr: &Expr) -> String {
    match expr {
        Expr::Number { value, .. } => value.to_string(),
        Expr::Binary { operator, left, right, .. } => {
            let precedence = Precedence::from(*operator);
            format!(
                "{} {} {}",
                operand(left, precedence, false),
                symbol(*operator),
                operand(right, precedence, true)
            )
        }
    }
}

fn operand(child: &Expr, parent_precedence: Precedence, is_right: bool) -> String {
    let rendered = visit(child);
    if needs_parens(child, parent_precedence, is_right) {
        format!("( {} )", rendered)
    } else {
        rendered
    }
}

fn needs_parens(child: &Expr, parent_precedence: Precedence, is_right: bool) -> bool {
    match child {
        Expr::Number { .. } => false,
        Expr::Binary { operator, .. } => {
            let precedence = Precedence::from(*operator);
            precedence < parent_precedence
                || (precedence == parent_precedence && is_right && is_non_commutative(*operator))
        }
    }
}
