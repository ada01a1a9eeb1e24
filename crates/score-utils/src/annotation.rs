//!
//! Explicit type annotations for score method parameters and return values.
//!
//! Annotations are described as values built where the method signature is
//! declared, then resolved to the main type that the parameter codec
//! dispatches on (`Optional[int]` resolves to `int`, `List[str]` to `list`).
//!

use derive_more::Display;
use std::fmt;

///
/// PlainType
/// A type with no parameters, or the bare origin of a generic container.
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub enum PlainType {
    #[display("int")]
    Int,

    #[display("str")]
    Str,

    #[display("bytes")]
    Bytes,

    #[display("bool")]
    Bool,

    #[display("Address")]
    Address,

    #[display("list")]
    List,

    #[display("dict")]
    Dict,

    /// User-defined struct types, by name.
    #[display("{_0}")]
    Named(String),
}

///
/// TypeAnnotation
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    NoneType,
    Plain(PlainType),
    Generic {
        origin: PlainType,
        args: Vec<Self>,
    },
    Union(Vec<Self>),
}

impl TypeAnnotation {
    #[must_use]
    pub const fn plain(ty: PlainType) -> Self {
        Self::Plain(ty)
    }

    /// `Optional[T]`, i.e. `Union[T, None]`.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Union(vec![inner, Self::NoneType])
    }

    #[must_use]
    pub fn list(item: Self) -> Self {
        Self::Generic {
            origin: PlainType::List,
            args: vec![item],
        }
    }

    #[must_use]
    pub fn dict(key: Self, value: Self) -> Self {
        Self::Generic {
            origin: PlainType::Dict,
            args: vec![key, value],
        }
    }

    #[must_use]
    pub fn union(args: impl IntoIterator<Item = Self>) -> Self {
        Self::Union(args.into_iter().collect())
    }

    #[must_use]
    pub const fn is_none_type(&self) -> bool {
        matches!(self, Self::NoneType)
    }
}

impl From<PlainType> for TypeAnnotation {
    fn from(ty: PlainType) -> Self {
        Self::Plain(ty)
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[TypeAnnotation]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }

    Ok(())
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoneType => f.write_str("None"),
            Self::Plain(ty) => write!(f, "{ty}"),
            Self::Generic { origin, args } => {
                let name = match origin {
                    PlainType::List => "List".to_string(),
                    PlainType::Dict => "Dict".to_string(),
                    other => other.to_string(),
                };
                write!(f, "{name}[")?;
                write_args(f, args)?;
                f.write_str("]")
            }
            Self::Union(args) => match args.as_slice() {
                [inner, Self::NoneType] => write!(f, "Optional[{inner}]"),
                _ => {
                    f.write_str("Union[")?;
                    write_args(f, args)?;
                    f.write_str("]")
                }
            },
        }
    }
}

/// Resolve the main type of an annotation.
///
/// - a generic container resolves to its bare origin (`List[int]` -> `list`)
/// - a union resolves to its non-`None` member; every member is visited and
///   the last non-`None` one wins
/// - anything else resolves to itself
///
/// Returns `None` only for a union whose members are all `None`.
#[must_use]
pub fn get_main_type_from_annotation(annotation: &TypeAnnotation) -> Option<TypeAnnotation> {
    match annotation {
        TypeAnnotation::Generic { origin, .. } => Some(TypeAnnotation::Plain(origin.clone())),
        TypeAnnotation::Union(args) => {
            let mut main_type = None;
            for arg in args {
                if !arg.is_none_type() {
                    main_type = Some(arg);
                }
            }

            main_type.cloned()
        }
        TypeAnnotation::Plain(_) | TypeAnnotation::NoneType => Some(annotation.clone()),
    }
}

///
/// TESTS
///
