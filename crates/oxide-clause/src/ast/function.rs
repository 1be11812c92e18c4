//! Function calls and the `IF()` conditional.

use crate::ast::ListClause;
use crate::clause::{sealed, BoolExpr, Clause, Expr, Expression};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::grammar;

/// A call such as `COALESCE(a,b)`.
///
/// The name is checked against the identifier grammar before anything is
/// written, so a function name can never smuggle SQL into the output.
#[derive(Debug, Clone)]
pub struct FuncCall {
    name: String,
    args: Option<ListClause>,
}

impl FuncCall {
    pub(crate) fn new(name: String, args: Vec<Expr>) -> Self {
        let args = if args.is_empty() {
            None
        } else {
            Some(ListClause::new(args, true))
        };
        Self { name, args }
    }
}

impl Clause for FuncCall {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        if !grammar::is_identifier(&self.name) {
            return Err(Error::InvalidFunctionName {
                name: self.name.clone(),
                sql: out.clone(),
            });
        }

        out.push_str(&self.name);
        match &self.args {
            Some(args) => args.serialize_sql(dialect, out),
            None => {
                out.push_str("()");
                Ok(())
            }
        }
    }
}

impl sealed::Sealed for FuncCall {}
impl Expression for FuncCall {}

/// `IF(condition,when_true,when_false)`.
#[derive(Debug, Clone)]
pub struct IfExpr {
    condition: BoolExpr,
    when_true: Expr,
    when_false: Expr,
}

impl IfExpr {
    pub(crate) fn new(condition: BoolExpr, when_true: Expr, when_false: Expr) -> Self {
        Self {
            condition,
            when_true,
            when_false,
        }
    }
}

impl Clause for IfExpr {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        out.push_str("IF(");
        self.condition.serialize_sql(dialect, out)?;
        out.push(',');
        self.when_true.serialize_sql(dialect, out)?;
        out.push(',');
        self.when_false.serialize_sql(dialect, out)?;
        out.push(')');
        Ok(())
    }
}

impl sealed::Sealed for IfExpr {}
impl Expression for IfExpr {}
