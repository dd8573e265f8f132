//! Node kinds: a closed enum over the grammatical categories rules dispatch on.

/// Grammatical category of a syntax node.
///
/// Mapped from tree-sitter grammar kind names. Pattern-position grammar
/// kinds (`array_pattern`, `object_pattern`, `pair_pattern`, `rest_pattern`)
/// map onto the same variant as their expression forms: the left side of a
/// plain `=` assignment is the same node kind as the equivalent literal,
/// and the traversal's pattern context tells them apart.
///
/// Grammar kinds without a variant here collapse into `Other`; they are
/// still traversed, so a listener on `Other` sees all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    SourceFile,
    Identifier,
    PropertyIdentifier,
    StringLiteral,
    NumericLiteral,
    BooleanLiteral,
    NullLiteral,
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAssignment,
    SpreadElement,
    AssignmentExpression,
    BinaryExpression,
    UnaryExpression,
    CallExpression,
    NewExpression,
    AwaitExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    ParenthesizedExpression,
    TemplateExpression,
    ArrowFunction,
    FunctionExpression,
    FunctionDeclaration,
    MethodDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    VariableStatement,
    VariableDeclarator,
    ExpressionStatement,
    Block,
    ReturnStatement,
    IfStatement,
    ForStatement,
    ForInStatement,
    WhileStatement,
    DebuggerStatement,
    EqualsToken,
    Other,
}

impl NodeKind {
    /// Map a tree-sitter grammar kind name to a `NodeKind`.
    pub fn from_grammar(kind: &str) -> Self {
        match kind {
            "program" => Self::SourceFile,
            "identifier" => Self::Identifier,
            // Shorthand properties carry a bare identifier in both value and
            // pattern position; flatten them so pattern listeners see them
            // as the identifiers they bind.
            "shorthand_property_identifier" | "shorthand_property_identifier_pattern" => {
                Self::Identifier
            }
            "property_identifier" => Self::PropertyIdentifier,
            "string" | "template_string" => Self::StringLiteral,
            "number" => Self::NumericLiteral,
            "true" | "false" => Self::BooleanLiteral,
            "null" => Self::NullLiteral,
            "array" | "array_pattern" => Self::ArrayLiteralExpression,
            "object" | "object_pattern" => Self::ObjectLiteralExpression,
            "pair" | "pair_pattern" => Self::PropertyAssignment,
            "spread_element" | "rest_pattern" => Self::SpreadElement,
            "assignment_expression" => Self::AssignmentExpression,
            // Compound assignments never introduce a destructuring target,
            // so they dispatch as plain binary expressions.
            "binary_expression" | "augmented_assignment_expression" => Self::BinaryExpression,
            "unary_expression" => Self::UnaryExpression,
            "call_expression" => Self::CallExpression,
            "new_expression" => Self::NewExpression,
            "await_expression" => Self::AwaitExpression,
            "member_expression" => Self::PropertyAccessExpression,
            "subscript_expression" => Self::ElementAccessExpression,
            "parenthesized_expression" => Self::ParenthesizedExpression,
            "template_substitution" => Self::TemplateExpression,
            "arrow_function" => Self::ArrowFunction,
            "function_expression" | "function" => Self::FunctionExpression,
            "function_declaration" => Self::FunctionDeclaration,
            "method_definition" => Self::MethodDeclaration,
            "class_declaration" => Self::ClassDeclaration,
            "interface_declaration" => Self::InterfaceDeclaration,
            "lexical_declaration" | "variable_declaration" => Self::VariableStatement,
            "variable_declarator" => Self::VariableDeclarator,
            "expression_statement" => Self::ExpressionStatement,
            "statement_block" => Self::Block,
            "return_statement" => Self::ReturnStatement,
            "if_statement" => Self::IfStatement,
            "for_statement" => Self::ForStatement,
            "for_in_statement" => Self::ForInStatement,
            "while_statement" => Self::WhileStatement,
            "debugger_statement" => Self::DebuggerStatement,
            "=" => Self::EqualsToken,
            _ => Self::Other,
        }
    }

    /// True for the literal forms that can also appear as destructuring
    /// targets.
    pub fn is_literal_pattern_form(self) -> bool {
        matches!(
            self,
            Self::ArrayLiteralExpression | Self::ObjectLiteralExpression
        )
    }
}
