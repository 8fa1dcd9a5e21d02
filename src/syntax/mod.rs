// Interface types produced by the external template parser
pub mod ast;
pub mod parse;

pub use ast::{BoundExpression, ExpressionContext, MarkupAst, TemplateAst};
pub use parse::{AstResult, ParseError, Severity, TemplateError};
