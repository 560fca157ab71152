use serde::Serialize;

use super::{exp_cost, price, CostTableVariant, ExponentFamily, OperationKind};
use crate::protocol::Protocol;

/// One algebraic step of a verifier and what it costs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Term {
    pub label: &'static str,
    pub count: i64,
    pub cost: i64,
}

/// All steps of one operation kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub kind: OperationKind,
    pub count: i64,
    pub cost: i64,
    pub terms: Vec<Term>,
}

impl LineItem {
    fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            count: 0,
            cost: 0,
            terms: Vec::new(),
        }
    }

    fn push(&mut self, term: Term) {
        self.count += term.count;
        self.cost += term.cost;
        self.terms.push(term);
    }
}

/// Priced operation counts of one protocol under one cost table.
///
/// Items keep the order in which the calculator first charged each kind.
/// `total` is always the sum of the item costs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    protocol: Protocol,
    variant: CostTableVariant,
    items: Vec<LineItem>,
    total: i64,
}

impl CostBreakdown {
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn variant(&self) -> CostTableVariant {
        self.variant
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn item(&self, kind: OperationKind) -> Option<&LineItem> {
        self.items.iter().find(|item| item.kind == kind)
    }

    /// Operation count for `kind`, 0 if the protocol never performs it.
    pub fn count(&self, kind: OperationKind) -> i64 {
        self.item(kind).map_or(0, |item| item.count)
    }

    /// Gas charged for `kind`, 0 if the protocol never performs it.
    pub fn cost(&self, kind: OperationKind) -> i64 {
        self.item(kind).map_or(0, |item| item.cost)
    }

    /// Whether any item carries a negative count.
    pub fn has_negative_counts(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.terms.iter().any(|term| term.count < 0))
    }
}

/// Accumulates charges for one protocol, then freezes them into a
/// [`CostBreakdown`].
pub struct Tally {
    variant: CostTableVariant,
    items: Vec<LineItem>,
}

impl Tally {
    pub fn new(variant: CostTableVariant) -> Self {
        Self {
            variant,
            items: Vec::new(),
        }
    }

    fn line(&mut self, kind: OperationKind) -> &mut LineItem {
        let idx = match self.items.iter().position(|item| item.kind == kind) {
            Some(idx) => idx,
            None => {
                self.items.push(LineItem::new(kind));
                self.items.len() - 1
            }
        };
        &mut self.items[idx]
    }

    /// Charge `count` operations of `kind` at the table's unit price.
    pub fn charge(&mut self, kind: OperationKind, label: &'static str, count: i64) -> &mut Self {
        let cost = price(kind, count, self.variant);
        self.line(kind).push(Term { label, count, cost });
        self
    }

    /// Charge `count` exponentiations sharing one exponent, rounded once.
    pub fn charge_exp(&mut self, label: &'static str, count: i64, exponent: i64) -> &mut Self {
        let cost = exp_cost(count, exponent);
        self.line(OperationKind::Exp).push(Term { label, count, cost });
        self
    }

    /// Charge every exponent of `family` individually.
    pub fn charge_family(&mut self, family: ExponentFamily) -> &mut Self {
        let term = Term {
            label: family.label,
            count: family.count(),
            cost: family.cost(),
        };
        self.line(OperationKind::Exp).push(term);
        self
    }

    pub fn finish(self, protocol: Protocol) -> CostBreakdown {
        let total = self.items.iter().map(|item| item.cost).sum();
        CostBreakdown {
            protocol,
            variant: self.variant,
            items: self.items,
            total,
        }
    }
}
