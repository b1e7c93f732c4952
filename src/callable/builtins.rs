/// Do not edit directly!
///
/// The contents of this file are built by build.rs
///
use crate::callable::core::Builtin;
use crate::callable::keywords::*;
use crate::callable::operators::*;
use crate::callable::primitive::*;
use hashbrown::HashMap;
use std::sync::LazyLock;

#[rustfmt::skip]
pub static BUILTIN: LazyLock<HashMap<&'static str, Box<dyn Builtin>>> = LazyLock::new(|| {
    HashMap::from([
        // automatically populated on build. see build.rs // builtins start
        ("(", Box::new(KeywordParen) as Box<dyn Builtin>),
        ("{", Box::new(KeywordBlock) as Box<dyn Builtin>),
        ("<-", Box::new(InfixAssign) as Box<dyn Builtin>),
        ("=", Box::new(InfixAssignEq) as Box<dyn Builtin>),
        ("+", Box::new(InfixAdd) as Box<dyn Builtin>),
        ("-", Box::new(InfixSub) as Box<dyn Builtin>),
        ("!", Box::new(PrefixNot) as Box<dyn Builtin>),
        ("*", Box::new(InfixMul) as Box<dyn Builtin>),
        ("/", Box::new(InfixDiv) as Box<dyn Builtin>),
        ("^", Box::new(InfixPow) as Box<dyn Builtin>),
        ("%%", Box::new(InfixMod) as Box<dyn Builtin>),
        ("%in%", Box::new(InfixIn) as Box<dyn Builtin>),
        ("||", Box::new(InfixOr) as Box<dyn Builtin>),
        ("&&", Box::new(InfixAnd) as Box<dyn Builtin>),
        ("|", Box::new(InfixVectorOr) as Box<dyn Builtin>),
        ("&", Box::new(InfixVectorAnd) as Box<dyn Builtin>),
        (">", Box::new(InfixGreater) as Box<dyn Builtin>),
        (">=", Box::new(InfixGreaterEqual) as Box<dyn Builtin>),
        ("<", Box::new(InfixLess) as Box<dyn Builtin>),
        ("<=", Box::new(InfixLessEqual) as Box<dyn Builtin>),
        ("==", Box::new(InfixEqual) as Box<dyn Builtin>),
        ("!=", Box::new(InfixNotEqual) as Box<dyn Builtin>),
        (":", Box::new(InfixColon) as Box<dyn Builtin>),
        ("[", Box::new(PostfixVecIndex) as Box<dyn Builtin>),
        ("[[", Box::new(PostfixIndex) as Box<dyn Builtin>),
        ("$", Box::new(InfixDollar) as Box<dyn Builtin>),
        ("all", Box::new(PrimitiveAll) as Box<dyn Builtin>),
        ("any", Box::new(PrimitiveAny) as Box<dyn Builtin>),
        ("c", Box::new(PrimitiveC) as Box<dyn Builtin>),
        ("data.frame", Box::new(PrimitiveDataFrame) as Box<dyn Builtin>),
        ("dim", Box::new(PrimitiveDim) as Box<dyn Builtin>),
        ("nrow", Box::new(PrimitiveNrow) as Box<dyn Builtin>),
        ("ncol", Box::new(PrimitiveNcol) as Box<dyn Builtin>),
        ("rownames", Box::new(PrimitiveRownames) as Box<dyn Builtin>),
        ("colnames", Box::new(PrimitiveColnames) as Box<dyn Builtin>),
        ("identical", Box::new(PrimitiveIdentical) as Box<dyn Builtin>),
        ("is.na", Box::new(PrimitiveIsNA) as Box<dyn Builtin>),
        ("is.null", Box::new(PrimitiveIsNull) as Box<dyn Builtin>),
        ("length", Box::new(PrimitiveLength) as Box<dyn Builtin>),
        ("list", Box::new(PrimitiveList) as Box<dyn Builtin>),
        ("matrix", Box::new(PrimitiveMatrix) as Box<dyn Builtin>),
        ("array", Box::new(PrimitiveArray) as Box<dyn Builtin>),
        ("names", Box::new(PrimitiveNames) as Box<dyn Builtin>),
        ("unname", Box::new(PrimitiveUnname) as Box<dyn Builtin>),
        ("order", Box::new(PrimitiveOrder) as Box<dyn Builtin>),
        ("outer", Box::new(PrimitiveOuter) as Box<dyn Builtin>),
        ("paste", Box::new(PrimitivePaste) as Box<dyn Builtin>),
        ("paste0", Box::new(PrimitivePaste0) as Box<dyn Builtin>),
        ("print", Box::new(PrimitivePrint) as Box<dyn Builtin>),
        ("invisible", Box::new(PrimitiveInvisible) as Box<dyn Builtin>),
        ("q", Box::new(PrimitiveQ) as Box<dyn Builtin>),
        ("rep", Box::new(PrimitiveRep) as Box<dyn Builtin>),
        ("sample", Box::new(PrimitiveSample) as Box<dyn Builtin>),
        ("set.seed", Box::new(PrimitiveSetSeed) as Box<dyn Builtin>),
        ("seq_len", Box::new(PrimitiveSeqLen) as Box<dyn Builtin>),
        ("seq_along", Box::new(PrimitiveSeqAlong) as Box<dyn Builtin>),
        ("match", Box::new(PrimitiveMatch) as Box<dyn Builtin>),
        ("setdiff", Box::new(PrimitiveSetdiff) as Box<dyn Builtin>),
        ("union", Box::new(PrimitiveUnion) as Box<dyn Builtin>),
        ("intersect", Box::new(PrimitiveIntersect) as Box<dyn Builtin>),
        ("typeof", Box::new(PrimitiveTypeof) as Box<dyn Builtin>),
        ("integer", Box::new(PrimitiveInteger) as Box<dyn Builtin>),
        ("numeric", Box::new(PrimitiveNumeric) as Box<dyn Builtin>),
        ("character", Box::new(PrimitiveCharacter) as Box<dyn Builtin>),
        ("logical", Box::new(PrimitiveLogical) as Box<dyn Builtin>),
        ("which", Box::new(PrimitiveWhich) as Box<dyn Builtin>),
        // builtins end
    ])
});
