//! Move type descriptors.
//!
//! `TypeTag` is the tagged sum type the runtime uses to describe polymorphic
//! type arguments. The variant order is fixed by the on-wire encoding and
//! must not be rearranged.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::abi::address::AccountAddress;
use crate::common::error::{TradeError, TradeResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(StructTag),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructTag {
    pub address: AccountAddress,
    pub module: String,
    pub name: String,
    pub type_params: Vec<TypeTag>,
}

impl TypeTag {
    /// Parse a textual type path such as `0x1::aptos_coin::AptosCoin`,
    /// `vector<u8>`, or a generic struct path with nested parameters.
    pub fn parse(s: &str) -> TradeResult<Self> {
        let s = s.trim();
        match s {
            "bool" => return Ok(TypeTag::Bool),
            "u8" => return Ok(TypeTag::U8),
            "u64" => return Ok(TypeTag::U64),
            "u128" => return Ok(TypeTag::U128),
            "address" => return Ok(TypeTag::Address),
            "signer" => return Ok(TypeTag::Signer),
            _ => {}
        }
        if let Some(inner) = s.strip_prefix("vector<") {
            let inner = inner
                .strip_suffix('>')
                .ok_or_else(|| TradeError::Parse(format!("unterminated vector in {}", s)))?;
            return Ok(TypeTag::Vector(Box::new(TypeTag::parse(inner)?)));
        }
        Ok(TypeTag::Struct(StructTag::parse(s)?))
    }
}

impl StructTag {
    /// Parse `address::module::Name` with optional `<T1, T2, ...>` generics.
    pub fn parse(s: &str) -> TradeResult<Self> {
        let s = s.trim();
        let (path, type_params) = match s.find('<') {
            Some(open) => {
                if !s.ends_with('>') {
                    return Err(TradeError::Parse(format!("unterminated generics in {}", s)));
                }
                let params = split_generic_params(&s[open + 1..s.len() - 1])?
                    .into_iter()
                    .map(TypeTag::parse)
                    .collect::<TradeResult<Vec<_>>>()?;
                (&s[..open], params)
            }
            None => (s, Vec::new()),
        };

        let mut parts = path.split("::");
        let (address, module, name) = match (parts.next(), parts.next(), parts.next(), parts.next())
        {
            (Some(addr), Some(module), Some(name), None) => (addr, module, name),
            _ => {
                return Err(TradeError::Parse(format!(
                    "type path {} is not of the form address::module::Name",
                    s
                )));
            }
        };
        if module.is_empty() || name.is_empty() {
            return Err(TradeError::Parse(format!("type path {} has empty segments", s)));
        }

        Ok(StructTag {
            address: AccountAddress::from_hex_literal(address)?,
            module: module.to_string(),
            name: name.to_string(),
            type_params,
        })
    }
}

/// Split a comma-separated generic parameter list at the top nesting level.
fn split_generic_params(s: &str) -> TradeResult<Vec<&str>> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TradeError::Parse("empty generic parameter list".to_string()));
    }
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| TradeError::Parse(format!("unbalanced generics in {}", s)))?;
            }
            ',' if depth == 0 => {
                params.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(TradeError::Parse(format!("unbalanced generics in {}", s)));
    }
    params.push(&s[start..]);
    Ok(params)
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::U8 => write!(f, "u8"),
            TypeTag::U64 => write!(f, "u64"),
            TypeTag::U128 => write!(f, "u128"),
            TypeTag::Address => write!(f, "address"),
            TypeTag::Signer => write!(f, "signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{}>", inner),
            TypeTag::Struct(tag) => write!(f, "{}", tag),
        }
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address.to_hex_literal(), self.module, self.name)?;
        if !self.type_params.is_empty() {
            let params: Vec<String> = self.type_params.iter().map(|p| p.to_string()).collect();
            write!(f, "<{}>", params.join(", "))?;
        }
        Ok(())
    }
}
