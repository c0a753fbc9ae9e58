//! Handler-facing decoration requests
//!
//! Request handlers receive sort and paging options from API callers; this
//! module turns them into the ordered list of decorations the dispatcher
//! runs.

use super::engine::DecorationEngine;
use super::pagination::Pagination;
use super::strategy::{ChainedOrdering, OrderingStrategy};
use super::traits::{Decoration, Record};
use crate::error::Result;
use decorum_model::RecordKind;
use serde::{Deserialize, Serialize};

/// One step of a decoration pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecorationStep {
    Order(OrderingStrategy),
    Chain(ChainedOrdering),
    Page(Pagination),
}

impl Decoration for DecorationStep {
    fn name(&self) -> &'static str {
        match self {
            DecorationStep::Order(step) => step.name(),
            DecorationStep::Chain(step) => step.name(),
            DecorationStep::Page(step) => step.name(),
        }
    }

    fn validate(&self, kind: RecordKind, engine: &DecorationEngine) -> Result<()> {
        match self {
            DecorationStep::Order(step) => step.validate(kind, engine),
            DecorationStep::Chain(step) => step.validate(kind, engine),
            DecorationStep::Page(step) => step.validate(kind, engine),
        }
    }

    fn apply<R: Record>(&self, engine: &DecorationEngine, records: Vec<R>) -> Result<Vec<R>> {
        match self {
            DecorationStep::Order(step) => step.apply(engine, records),
            DecorationStep::Chain(step) => step.apply(engine, records),
            DecorationStep::Page(step) => step.apply(engine, records),
        }
    }
}

impl From<OrderingStrategy> for DecorationStep {
    fn from(strategy: OrderingStrategy) -> Self {
        DecorationStep::Order(strategy)
    }
}

impl From<ChainedOrdering> for DecorationStep {
    fn from(chain: ChainedOrdering) -> Self {
        DecorationStep::Chain(chain)
    }
}

impl From<Pagination> for DecorationStep {
    fn from(page: Pagination) -> Self {
        DecorationStep::Page(page)
    }
}

/// Sort and paging options as received from an API caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationRequest {
    /// Sort keys, most significant first
    #[serde(default)]
    pub order_by: Vec<OrderingStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Pagination>,
}

impl DecorationRequest {
    pub fn is_empty(&self) -> bool {
        self.order_by.is_empty() && self.page.is_none()
    }

    /// Ordering first, then paging, so pages are cut from the sorted list.
    pub fn into_steps(self) -> Vec<DecorationStep> {
        let mut steps = Vec::with_capacity(2);
        let mut order_by = self.order_by;
        match order_by.len() {
            0 => {}
            1 => steps.extend(order_by.pop().map(DecorationStep::Order)),
            _ => steps.push(DecorationStep::Chain(ChainedOrdering::from(order_by))),
        }
        if let Some(page) = self.page {
            steps.push(DecorationStep::Page(page));
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_handler_payload() {
        let request: DecorationRequest = serde_json::from_str(
            r#"{
                "order_by": [{"field": "level", "direction": "desc"}, {"field": "timestamp"}],
                "page": {"offset": 20, "limit": 10}
            }"#,
        )
        .unwrap();

        let steps = request.into_steps();
        assert_eq!(
            steps,
            vec![
                DecorationStep::Chain(
                    ChainedOrdering::new()
                        .then_by(OrderingStrategy::descending("level"))
                        .then_by(OrderingStrategy::ascending("timestamp"))
                ),
                DecorationStep::Page(Pagination::new(20, 10)),
            ]
        );
    }

    #[test]
    fn single_key_becomes_a_plain_ordering() {
        let request = DecorationRequest {
            order_by: vec![OrderingStrategy::ascending("name")],
            page: None,
        };
        assert_eq!(
            request.into_steps(),
            vec![DecorationStep::Order(OrderingStrategy::ascending("name"))]
        );
    }

    #[test]
    fn empty_request_has_no_steps() {
        let request = DecorationRequest::default();
        assert!(request.is_empty());
        assert!(request.into_steps().is_empty());
    }
}
