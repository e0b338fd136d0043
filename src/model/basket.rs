use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasketDef {
    pub id: &'static str,
    pub name: &'static str,
    pub risk: u32,
}

const BUILTIN_BASKETS: &[BasketDef] = &[
    BasketDef {
        id: "testudo",
        name: "testudo basket",
        risk: 50,
    },
    BasketDef {
        id: "community",
        name: "community basket",
        risk: 20,
    },
    BasketDef {
        id: "rrrrrisky",
        name: "rrrrrisky basket",
        risk: 100,
    },
];

pub fn builtin_baskets() -> &'static [BasketDef] {
    BUILTIN_BASKETS
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasketMatch {
    pub id: &'static str,
    pub name: &'static str,
    pub risk: u32,
    pub match_rate: f32,
}

pub fn match_rate(risk_tolerance: f32, basket_risk: u32) -> f32 {
    let rate = 100.0 - (risk_tolerance - basket_risk as f32).abs();
    rate.clamp(0.0, 100.0)
}

/// Best match first; equal rates keep template order.
pub fn rank_baskets(risk_tolerance: f32, baskets: &[BasketDef]) -> Vec<BasketMatch> {
    let mut out: Vec<BasketMatch> = baskets
        .iter()
        .map(|b| BasketMatch {
            id: b.id,
            name: b.name,
            risk: b.risk,
            match_rate: match_rate(risk_tolerance, b.risk),
        })
        .collect();
    out.sort_by(|a, b| {
        b.match_rate
            .partial_cmp(&a.match_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/basket.rs"]
mod tests;
