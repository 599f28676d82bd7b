//! The closed set of state courts of justice a case-number lookup may be
//! attempted against.
//!
//! Declaration order matters: it is the tie-break order of the fallback
//! sweep after the priority list is exhausted, and must stay stable for
//! reproducible behaviour.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One Brazilian state court of justice, identified by its fixed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tribunal {
    TJAC,
    TJAL,
    TJAM,
    TJAP,
    TJBA,
    TJCE,
    TJDFT,
    TJES,
    TJGO,
    TJMA,
    TJMG,
    TJMS,
    TJMT,
    TJPA,
    TJPB,
    TJPE,
    TJPI,
    TJPR,
    TJRJ,
    TJRN,
    TJRO,
    TJRR,
    TJRS,
    TJSC,
    TJSE,
    TJSP,
    TJTO,
}

impl Tribunal {
    /// Every tribunal, in declaration order.
    pub const ALL: [Tribunal; 27] = [
        Tribunal::TJAC,
        Tribunal::TJAL,
        Tribunal::TJAM,
        Tribunal::TJAP,
        Tribunal::TJBA,
        Tribunal::TJCE,
        Tribunal::TJDFT,
        Tribunal::TJES,
        Tribunal::TJGO,
        Tribunal::TJMA,
        Tribunal::TJMG,
        Tribunal::TJMS,
        Tribunal::TJMT,
        Tribunal::TJPA,
        Tribunal::TJPB,
        Tribunal::TJPE,
        Tribunal::TJPI,
        Tribunal::TJPR,
        Tribunal::TJRJ,
        Tribunal::TJRN,
        Tribunal::TJRO,
        Tribunal::TJRR,
        Tribunal::TJRS,
        Tribunal::TJSC,
        Tribunal::TJSE,
        Tribunal::TJSP,
        Tribunal::TJTO,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tribunal::TJAC => "TJAC",
            Tribunal::TJAL => "TJAL",
            Tribunal::TJAM => "TJAM",
            Tribunal::TJAP => "TJAP",
            Tribunal::TJBA => "TJBA",
            Tribunal::TJCE => "TJCE",
            Tribunal::TJDFT => "TJDFT",
            Tribunal::TJES => "TJES",
            Tribunal::TJGO => "TJGO",
            Tribunal::TJMA => "TJMA",
            Tribunal::TJMG => "TJMG",
            Tribunal::TJMS => "TJMS",
            Tribunal::TJMT => "TJMT",
            Tribunal::TJPA => "TJPA",
            Tribunal::TJPB => "TJPB",
            Tribunal::TJPE => "TJPE",
            Tribunal::TJPI => "TJPI",
            Tribunal::TJPR => "TJPR",
            Tribunal::TJRJ => "TJRJ",
            Tribunal::TJRN => "TJRN",
            Tribunal::TJRO => "TJRO",
            Tribunal::TJRR => "TJRR",
            Tribunal::TJRS => "TJRS",
            Tribunal::TJSC => "TJSC",
            Tribunal::TJSE => "TJSE",
            Tribunal::TJSP => "TJSP",
            Tribunal::TJTO => "TJTO",
        }
    }

    /// Lowercase alias used in the DataJud endpoint path
    /// (`api_publica_tjsp`).
    pub fn datajud_alias(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }
}

impl fmt::Display for Tribunal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tribunal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Tribunal::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("tribunal desconhecido: {s}"))
    }
}

/// Tribunals statistically most likely to hold a record, tried first when
/// the jurisdiction is unknown.
pub const DEFAULT_PRIORITY: [Tribunal; 3] = [Tribunal::TJPR, Tribunal::TJSP, Tribunal::TJMG];

/// Build the fallback sweep order: the priority list first (in the given
/// order, duplicates removed), then every remaining tribunal in declaration
/// order.
pub fn search_order(priority: &[Tribunal]) -> Vec<Tribunal> {
    let mut order: Vec<Tribunal> = Vec::with_capacity(Tribunal::ALL.len());
    for &t in priority {
        if !order.contains(&t) {
            order.push(t);
        }
    }
    for t in Tribunal::ALL {
        if !order.contains(&t) {
            order.push(t);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_tribunal_once() {
        assert_eq!(Tribunal::ALL.len(), 27);
        for (i, a) in Tribunal::ALL.iter().enumerate() {
            for b in &Tribunal::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn roundtrip_through_str() {
        for t in Tribunal::ALL {
            assert_eq!(t.as_str().parse::<Tribunal>().unwrap(), t);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("tjsp".parse::<Tribunal>().unwrap(), Tribunal::TJSP);
        assert_eq!(" TJpr ".parse::<Tribunal>().unwrap(), Tribunal::TJPR);
        assert!("TJXX".parse::<Tribunal>().is_err());
    }

    #[test]
    fn datajud_alias_is_lowercase_code() {
        assert_eq!(Tribunal::TJDFT.datajud_alias(), "tjdft");
    }

    #[test]
    fn search_order_is_priority_then_remainder() {
        let order = search_order(&DEFAULT_PRIORITY);
        assert_eq!(order.len(), 27);
        assert_eq!(order[0], Tribunal::TJPR);
        assert_eq!(order[1], Tribunal::TJSP);
        assert_eq!(order[2], Tribunal::TJMG);
        // Remainder keeps declaration order with priority entries removed.
        let remainder: Vec<Tribunal> = Tribunal::ALL
            .into_iter()
            .filter(|t| !DEFAULT_PRIORITY.contains(t))
            .collect();
        assert_eq!(&order[3..], remainder.as_slice());
    }

    #[test]
    fn search_order_deduplicates_priority() {
        let order = search_order(&[Tribunal::TJSP, Tribunal::TJSP, Tribunal::TJRJ]);
        assert_eq!(order.len(), 27);
        assert_eq!(order[0], Tribunal::TJSP);
        assert_eq!(order[1], Tribunal::TJRJ);
    }

    #[test]
    fn empty_priority_is_plain_declaration_order() {
        assert_eq!(search_order(&[]), Tribunal::ALL.to_vec());
    }
}
