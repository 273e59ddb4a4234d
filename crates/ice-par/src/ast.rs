//! AST node definitions.
//!
//! Pure data: sum types for expressions and statements with no behavior.
//! The evaluator owns all semantics.

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralValue),
    Variable(String),
    Assign(AssignExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Logical(LogicalExpr),
    Grouping(Box<Expr>),
    Call(CallExpr),
    Get(GetExpr),
    Set(SetExpr),
    /// `ini`, the self reference.
    This,
    /// `baru Kelas(args)`.
    New(NewExpr),
    /// `super.nama`.
    SuperGet(SuperGetExpr),
}

/// Literal value as it appears in source.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Assignment to a plain variable
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub name: String,
    pub value: Box<Expr>,
}

/// Unary expression
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub right: Box<Expr>,
}

/// Unary operators: `-` and `bukan` (`!` is parsed as `bukan`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

/// Binary expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: BinaryOp,
    pub right: Box<Expr>,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    /// The operator's source spelling, for diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::EqEq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        }
    }
}

/// Short-circuiting `dan` / `atau`
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub op: LogicalOp,
    pub right: Box<Expr>,
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

/// Call expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
}

/// Property read: `obj.nama`
#[derive(Debug, Clone, PartialEq)]
pub struct GetExpr {
    pub object: Box<Expr>,
    pub name: String,
}

/// Property write: `obj.nama = value`
#[derive(Debug, Clone, PartialEq)]
pub struct SetExpr {
    pub object: Box<Expr>,
    pub name: String,
    pub value: Box<Expr>,
}

/// Instantiation: `baru Kelas(args)`
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpr {
    pub class_name: String,
    pub args: Vec<Expr>,
}

/// Superclass member lookup: `super.nama`
#[derive(Debug, Clone, PartialEq)]
pub struct SuperGetExpr {
    pub name: String,
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Expr),
    VarDecl(VarDecl),
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
    ForRange(ForRangeStmt),
    Return(Option<Expr>),
    Function(FunctionDecl),
    Class(ClassDecl),
}

/// Typed variable declaration (the type keyword is purely syntactic)
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub init: Option<Expr>,
}

/// Braced statement list; executes in a fresh scope
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// Multi-branch conditional: `jika` / `jikalau`* / `kalau`?
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub branches: Vec<IfBranch>,
    pub else_branch: Option<Block>,
}

/// One `(condition, body)` pair of an `IfStmt`
#[derive(Debug, Clone, PartialEq)]
pub struct IfBranch {
    pub condition: Expr,
    pub body: Block,
}

/// `selagi (cond) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
}

/// `untuk var dalam rentang(args) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForRangeStmt {
    pub var: String,
    pub args: Vec<Expr>,
    pub body: Block,
}

/// `tugas nama(params) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Block,
}

/// `kelas Nama [: Super] { anggota* }`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub superclass: Option<String>,
    pub members: Vec<ClassMember>,
}

/// A class body member
#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Method(FunctionDecl),
    Property(PropertyDecl),
}

/// `properti nama { get { ... } set(param) { ... } }`
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDecl {
    pub name: String,
    pub getter: Option<Block>,
    pub setter: Option<SetterDecl>,
}

/// The `set` accessor of a property declaration
#[derive(Debug, Clone, PartialEq)]
pub struct SetterDecl {
    pub param: Option<String>,
    pub body: Block,
}
