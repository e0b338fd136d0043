use super::*;

#[test]
fn test_match_rate_bounds() {
    assert_eq!(match_rate(50.0, 50), 100.0);
    assert_eq!(match_rate(0.0, 100), 0.0);
    assert_eq!(match_rate(70.0, 50), 80.0);
}

#[test]
fn test_rank_baskets_best_first() {
    let ranked = rank_baskets(25.0, builtin_baskets());
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].id, "community");
    assert_eq!(ranked[1].id, "testudo");
    assert_eq!(ranked[2].id, "rrrrrisky");
}

#[test]
fn test_rank_baskets_ties_keep_template_order() {
    let baskets = [
        BasketDef {
            id: "a",
            name: "a",
            risk: 40,
        },
        BasketDef {
            id: "b",
            name: "b",
            risk: 60,
        },
    ];
    let ranked = rank_baskets(50.0, &baskets);
    assert_eq!(ranked[0].id, "a");
    assert_eq!(ranked[1].id, "b");
}
