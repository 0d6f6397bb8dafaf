//! Role pattern groups for field-role detection.
//!
//! The groups are ordered and each holds two regex tiers; the first
//! group/tier combination that matches a normalized key wins, so the list
//! must stay a list — reordering it changes detection results.

use std::sync::LazyLock;

use frete_model::{DocumentValue, FieldRole};
use regex::Regex;

/// Confidence assigned to exact-tier matches.
pub const EXACT_MATCH_CONFIDENCE: f32 = 0.95;
/// Confidence assigned to substring-tier matches.
pub const PARTIAL_MATCH_CONFIDENCE: f32 = 0.6;

/// Value shape a role expects from its sample.
///
/// Substring-tier matches are rejected when the sample fails the
/// expectation; exact-tier matches are always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueExpectation {
    /// Any value kind.
    Any,
    /// A number, or a string parseable as one.
    NumericLike,
    /// A string value.
    Text,
}

impl ValueExpectation {
    pub fn accepts(self, value: &DocumentValue) -> bool {
        match self {
            ValueExpectation::Any => true,
            ValueExpectation::NumericLike => value.is_numeric_like(),
            ValueExpectation::Text => matches!(value, DocumentValue::String(_)),
        }
    }
}

/// One ordered detection rule: a role, its two regex tiers, and the value
/// kind the role expects.
pub struct RolePattern {
    pub role: FieldRole,
    pub exact: Regex,
    pub partial: Regex,
    pub expects: ValueExpectation,
}

/// The process-wide rule list, initialized once and never mutated.
pub static ROLE_PATTERNS: LazyLock<Vec<RolePattern>> = LazyLock::new(|| {
    vec![
        RolePattern {
            role: FieldRole::CarrierName,
            exact: regex(
                "^(transportadora|transportador|carrier|carrier_name|nome|name|servico|service|empresa)$",
            ),
            partial: regex("transportador|carrier|servic|empresa|nome|name"),
            expects: ValueExpectation::Text,
        },
        RolePattern {
            role: FieldRole::Price,
            exact: regex("^(preco|price|valor|valor_frete|valor_total|frete|vlr|total)$"),
            partial: regex("preco|price|valor|frete|tarifa|custo|cost|amount"),
            expects: ValueExpectation::NumericLike,
        },
        RolePattern {
            role: FieldRole::LeadTime,
            exact: regex(
                "^(prazo|prazo_dias|prazo_entrega|delivery_days|delivery_time|dias|deadline|lead_time)$",
            ),
            partial: regex("prazo|dias|days|delivery|entrega|deadline"),
            expects: ValueExpectation::NumericLike,
        },
        RolePattern {
            role: FieldRole::Identifier,
            exact: regex(
                "^(id|codigo|code|sku|servico_id|service_id|carrier_id|id_transportadora)$",
            ),
            partial: regex("(^|_)id(_|$)|codigo|code"),
            expects: ValueExpectation::Any,
        },
        RolePattern {
            role: FieldRole::ErrorFlag,
            exact: regex("^(erro|error|falha|fail|msg_erro|error_message|mensagem_erro)$"),
            partial: regex("erro|error|falha|fail"),
            expects: ValueExpectation::Any,
        },
    ]
});

fn regex(pattern: &str) -> Regex {
    // The patterns are static literals; a failure here is a programming
    // error caught by the pattern tests below.
    Regex::new(pattern).unwrap_or_else(|error| panic!("invalid role pattern {pattern:?}: {error}"))
}
